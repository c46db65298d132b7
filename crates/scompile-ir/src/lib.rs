#![warn(missing_docs)]
//! Intermediate representation for scompile.
//!
//! The IR is deliberately shallow: a [`ShaderIr`] holds the source text of
//! one translation unit verbatim, and [`Diagnostic`] carries a reportable
//! message with a source position. Structured forms (token streams, an AST)
//! would be added here without changing the back-end's consumer contract.

mod diagnostic;

pub use diagnostic::{Diagnostic, UNKNOWN_COLUMN};

/// The in-memory form of one shader between front-end and back-end.
///
/// Holds exactly the bytes handed to the front-end. Owned by a single
/// translation from parse to generate; never shared across concurrent
/// translations.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShaderIr {
    /// Full source text of the program being translated.
    pub source: String,
}

impl ShaderIr {
    /// Wraps source text in an IR container.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }
}
