#![deny(clippy::all)]

//! JSX fragment tree
//!
//! AST node definitions, a mutable pre-order visitor, and a fragment parser
//! for JSX-like markup. Nodes are plain owned values; a node is freestanding
//! until it is pushed into a parent's child list, after which the tree owns
//! it exclusively.

pub mod ast;
pub mod parse_util;
pub mod parser;
pub mod tags;

pub use ast::{
    visit_nodes_mut, AttrValue, Attribute, Comment, Element, ExpressionContainer, Fragment,
    MutVisitor, Node, Text, VisitFlow,
};
pub use parse_util::{ParseError, ParseLocation, ParseSpan};
pub use parser::parse_fragment;
pub use tags::is_void_tag;
