#![warn(missing_docs)]
//! HLSL front-end for scompile.
//!
//! Accepts raw source text and produces a [`ShaderIr`]. No structural
//! decomposition happens yet: the IR carries the input verbatim, and the
//! back-end lexes it itself. This is the seam where a real HLSL
//! tokenizer/AST builder would be inserted; the [`ParseError`] type and
//! its [`Diagnostic`] payload exist for that future front-end.

use scompile_ir::{Diagnostic, ShaderIr};

/// Parse HLSL source into an IR container.
///
/// Total over arbitrary text: empty input, binary garbage, and malformed
/// syntax are all accepted, and the returned IR's `source` equals the
/// input verbatim. The current implementation never returns `Err`.
pub fn parse(source: &str) -> Result<ShaderIr, ParseError> {
    Ok(ShaderIr::new(source))
}

/// Errors the front-end can report.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// Malformed syntax, with a position.
    #[error("{0}")]
    Syntax(Diagnostic),
}
