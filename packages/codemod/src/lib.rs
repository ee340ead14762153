#![deny(clippy::all)]

//! JSX codemod operations
//!
//! Insertion of a newly built or newly parsed element into a JSX tree at a
//! caller-specified logical position. Upstream logic decides *which* element
//! to target; this crate builds the node, resolves the position against the
//! heterogeneous child list, and performs exactly one splice per pass.

pub mod actions;
pub mod builder;
mod error;
pub mod insert;

pub use actions::{ElementDescription, ElementSource, InsertPos, InsertRequest};
pub use builder::build_inserted_element;
pub use error::{BuildError, CodemodError, Diagnostic};
pub use insert::{insert_child, insert_element, InsertReport};
