//! Parse utilities
//!
//! Locations, spans and errors for the fragment parser. Fragments are short
//! caller-held strings, so spans carry positions only, not a copy of the
//! source file.

use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseLocation {
    pub offset: usize,
    pub line: usize,
    pub col: usize,
}

impl ParseLocation {
    pub fn new(offset: usize, line: usize, col: usize) -> Self {
        ParseLocation { offset, line, col }
    }

    pub fn start() -> Self {
        ParseLocation::new(0, 0, 0)
    }
}

impl fmt::Display for ParseLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseSpan {
    pub start: ParseLocation,
    pub end: ParseLocation,
}

impl ParseSpan {
    pub fn new(start: ParseLocation, end: ParseLocation) -> Self {
        ParseSpan { start, end }
    }

    /// Zero-width span at a single location.
    pub fn at(location: ParseLocation) -> Self {
        ParseSpan::new(location, location)
    }
}

impl fmt::Display for ParseSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.start)
    }
}

/// Fragment parsing error, fatal for the parse that raised it.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{msg} at {span}")]
pub struct ParseError {
    pub span: ParseSpan,
    pub msg: String,
}

impl ParseError {
    pub fn new(span: ParseSpan, msg: impl Into<String>) -> Self {
        ParseError {
            span,
            msg: msg.into(),
        }
    }
}
