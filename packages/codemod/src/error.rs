//! Error and diagnostic types for codemod operations.
//!
//! Parse failures are fatal for the insertion that raised them. Recoverable
//! conditions are recorded as diagnostics on the report instead; the
//! operation still lands the element somewhere reasonable.

use std::fmt;

use jsx_tree::parse_util::ParseError;
use thiserror::Error;

/// Failure while constructing the element to insert.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("failed to parse code block: {0}")]
    Parse(#[from] ParseError),
}

/// Top-level codemod failure.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CodemodError {
    #[error(transparent)]
    Build(#[from] BuildError),
}

/// Recoverable conditions recorded during position resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnostic {
    /// The index position carried the undefined sentinel; resolution
    /// degraded to append.
    InvalidIndex,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::InvalidIndex => write!(f, "invalid index: undefined, appending instead"),
        }
    }
}
