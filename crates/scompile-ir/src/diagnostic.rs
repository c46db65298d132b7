//! Reportable compilation messages with source positions.

use std::fmt;

/// Column value meaning "unknown/unspecified"; suppressed when rendering.
pub const UNKNOWN_COLUMN: u32 = 1;

/// A single compilation error with a message and a 1-based source position.
///
/// Immutable once constructed. The current front-end never produces one
/// (it is total over arbitrary text); a grammar-aware front-end would
/// report malformed syntax through this type without changing the
/// pipeline's external contract.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Human-readable description of the fault.
    pub message: String,
    /// 1-based source line.
    pub line: u32,
    /// 1-based source column; [`UNKNOWN_COLUMN`] if not known.
    pub column: u32,
}

impl Diagnostic {
    /// Creates a diagnostic. Construction cannot fail.
    pub fn new(message: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            message: message.into(),
            line,
            column,
        }
    }

    /// Creates a diagnostic with no column information.
    pub fn at_line(message: impl Into<String>, line: u32) -> Self {
        Self::new(message, line, UNKNOWN_COLUMN)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error (Line {}): {}", self.line, self.message)?;
        if self.column != UNKNOWN_COLUMN {
            write!(f, "(Column {})", self.column)?;
        }
        Ok(())
    }
}
