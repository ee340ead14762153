//! JSX AST
//!
//! Node definitions for the JSX fragment tree, plus the mutable visitor used
//! by tree transforms. The child list of an element is heterogeneous: only
//! `Element` and `Fragment` entries participate in logical indexing, but all
//! variants participate in physical ordering.

/// Node type union
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Fragment(Fragment),
    Text(Text),
    ExpressionContainer(ExpressionContainer),
    Comment(Comment),
}

impl Node {
    /// Element-like nodes are the ones counted by logical child indexing;
    /// text, expressions and comments are skipped over.
    pub fn is_element_like(&self) -> bool {
        matches!(self, Node::Element(_) | Node::Fragment(_))
    }
}

/// Element node
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub name: String,
    pub attrs: Vec<Attribute>,
    pub children: Vec<Node>,
    pub is_self_closing: bool,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Element {
            name: name.into(),
            attrs: Vec::new(),
            children: Vec::new(),
            is_self_closing: false,
        }
    }
}

/// Fragment node (`<>...</>`)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Fragment {
    pub children: Vec<Node>,
}

/// Attribute node
///
/// `value` is `None` for bare attributes (`<input disabled />`).
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub name: String,
    pub value: Option<AttrValue>,
}

/// Attribute value: a quoted string literal or a braced expression.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Literal(String),
    Expression(String),
}

/// Text node
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub value: String,
}

impl Text {
    pub fn new(value: impl Into<String>) -> Self {
        Text { value: value.into() }
    }
}

/// Expression container node (`{expr}`)
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionContainer {
    pub expression: String,
}

/// Comment node (`{/* ... */}`)
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub value: String,
}

/// Flow control returned by visitor hooks.
///
/// `Stop` propagates outward and halts the entire walk; a visitor that
/// mutates the tree returns it to guarantee at most one application per pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitFlow {
    Continue,
    SkipChildren,
    Stop,
}

/// Mutable visitor trait for traversing the tree in document order.
pub trait MutVisitor {
    fn visit_element(&mut self, _element: &mut Element) -> VisitFlow {
        VisitFlow::Continue
    }

    fn visit_fragment(&mut self, _fragment: &mut Fragment) -> VisitFlow {
        VisitFlow::Continue
    }

    fn visit_text(&mut self, _text: &mut Text) -> VisitFlow {
        VisitFlow::Continue
    }

    fn visit_expression_container(&mut self, _container: &mut ExpressionContainer) -> VisitFlow {
        VisitFlow::Continue
    }

    fn visit_comment(&mut self, _comment: &mut Comment) -> VisitFlow {
        VisitFlow::Continue
    }
}

/// Visit all nodes pre-order, depth-first.
///
/// Returns `VisitFlow::Stop` as soon as any hook requests it, without
/// visiting further siblings or descendants.
pub fn visit_nodes_mut(visitor: &mut dyn MutVisitor, nodes: &mut [Node]) -> VisitFlow {
    for node in nodes.iter_mut() {
        let flow = match node {
            Node::Element(element) => match visitor.visit_element(element) {
                VisitFlow::Continue => visit_nodes_mut(visitor, &mut element.children),
                VisitFlow::SkipChildren => VisitFlow::Continue,
                VisitFlow::Stop => VisitFlow::Stop,
            },
            Node::Fragment(fragment) => match visitor.visit_fragment(fragment) {
                VisitFlow::Continue => visit_nodes_mut(visitor, &mut fragment.children),
                VisitFlow::SkipChildren => VisitFlow::Continue,
                VisitFlow::Stop => VisitFlow::Stop,
            },
            Node::Text(text) => leaf_flow(visitor.visit_text(text)),
            Node::ExpressionContainer(container) => {
                leaf_flow(visitor.visit_expression_container(container))
            }
            Node::Comment(comment) => leaf_flow(visitor.visit_comment(comment)),
        };

        if flow == VisitFlow::Stop {
            return VisitFlow::Stop;
        }
    }

    VisitFlow::Continue
}

// Leaves have no children, so SkipChildren degenerates to Continue.
fn leaf_flow(flow: VisitFlow) -> VisitFlow {
    match flow {
        VisitFlow::Stop => VisitFlow::Stop,
        _ => VisitFlow::Continue,
    }
}
