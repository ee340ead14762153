//! Position resolution and splicing
//!
//! Maps a logical index, counted over element-like children only, onto a
//! physical position in the heterogeneous child list, then splices the new
//! child in place. Interleaved text, comments and expressions keep their
//! slots relative to the element-like children around them.

use jsx_tree::ast::{visit_nodes_mut, Element, MutVisitor, Node, VisitFlow};

use crate::actions::{InsertPos, InsertRequest};
use crate::builder::build_inserted_element;
use crate::error::{CodemodError, Diagnostic};

/// Outcome of a tree-level insertion pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertReport {
    /// Whether any element matched and received the new child.
    pub applied: bool,
    /// Recoverable conditions recorded during resolution.
    pub diagnostics: Vec<Diagnostic>,
}

/// Splice `new_child` into `parent` at `position`.
///
/// Every pre-existing child keeps its relative order; exactly one child is
/// added. An undefined index degrades to append and records a diagnostic
/// rather than failing. Not idempotent: calling twice inserts two copies.
pub fn insert_child(
    parent: &mut Element,
    new_child: Node,
    position: &InsertPos,
    diagnostics: &mut Vec<Diagnostic>,
) {
    match position {
        InsertPos::Append => parent.children.push(new_child),
        InsertPos::Prepend => parent.children.insert(0, new_child),
        InsertPos::Index { index: Some(index) } => {
            insert_at_logical_index(parent, new_child, *index)
        }
        InsertPos::Index { index: None } => {
            diagnostics.push(Diagnostic::InvalidIndex);
            parent.children.push(new_child);
        }
    }
}

/// The requested index counts only element-like children. An index at or
/// past the current count means "after all existing element-like children",
/// never an out-of-range error.
fn insert_at_logical_index(parent: &mut Element, new_child: Node, index: usize) {
    let element_positions: Vec<usize> = parent
        .children
        .iter()
        .enumerate()
        .filter(|(_, child)| child.is_element_like())
        .map(|(position, _)| position)
        .collect();

    let target = index.min(element_positions.len());
    match element_positions.get(target) {
        // Land immediately before the element-like child occupying the
        // target logical slot, keeping preceding non-element children ahead.
        Some(&physical) => parent.children.insert(physical, new_child),
        None => parent.children.push(new_child),
    }
}

/// Build the requested element once and insert it at the first element
/// accepted by `matches`.
///
/// The walk is pre-order over `roots` and halts as soon as one insertion has
/// been applied; later siblings and descendants are not visited. A parse
/// failure aborts before any mutation. Matching no element is reported via
/// `applied: false`, not as an error.
pub fn insert_element<F>(
    roots: &mut [Node],
    matches: F,
    request: &InsertRequest,
) -> Result<InsertReport, CodemodError>
where
    F: FnMut(&Element) -> bool,
{
    let new_child = build_inserted_element(&request.source)?;

    let mut visitor = InsertVisitor {
        matches,
        new_child: Some(new_child),
        position: &request.position,
        diagnostics: Vec::new(),
        applied: false,
    };
    visit_nodes_mut(&mut visitor, roots);

    Ok(InsertReport {
        applied: visitor.applied,
        diagnostics: visitor.diagnostics,
    })
}

struct InsertVisitor<'a, F> {
    matches: F,
    new_child: Option<Node>,
    position: &'a InsertPos,
    diagnostics: Vec<Diagnostic>,
    applied: bool,
}

impl<F> MutVisitor for InsertVisitor<'_, F>
where
    F: FnMut(&Element) -> bool,
{
    fn visit_element(&mut self, element: &mut Element) -> VisitFlow {
        if !(self.matches)(element) {
            return VisitFlow::Continue;
        }

        if let Some(new_child) = self.new_child.take() {
            insert_child(element, new_child, self.position, &mut self.diagnostics);
            self.applied = true;
        }
        VisitFlow::Stop
    }
}
