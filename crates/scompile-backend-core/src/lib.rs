#![warn(missing_docs)]
//! Backend trait and dispatch for scompile.
//!
//! Defines the [`Backend`] trait that all dialect generators implement,
//! along with [`BackendError`] and a [`BackendRegistry`] for CLI dispatch.

use std::fmt::Debug;

use scompile_ir::ShaderIr;

/// A backend that generates target-dialect source from the IR.
pub trait Backend: Debug + Send + Sync {
    /// Human-readable name (e.g. "GLSL").
    fn name(&self) -> &str;

    /// Target identifiers this backend handles (for option dispatch).
    fn targets(&self) -> &[&str];

    /// File extension for derived output paths, without the dot.
    fn file_extension(&self) -> &str;

    /// Generate target-dialect source text from an IR value.
    fn generate(&self, ir: &ShaderIr) -> Result<String, BackendError>;
}

/// Errors that can occur during generation.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// The IR uses a construct the backend cannot express.
    #[error("unsupported: {0}")]
    Unsupported(String),
    /// A general backend error.
    #[error("{0}")]
    Other(String),
}

/// Registry of available backends, used for CLI option dispatch.
#[derive(Debug, Default)]
pub struct BackendRegistry {
    backends: Vec<Box<dyn Backend>>,
}

impl BackendRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a backend.
    pub fn register(&mut self, backend: Box<dyn Backend>) {
        self.backends.push(backend);
    }

    /// Finds a backend that handles the given target identifier.
    pub fn find(&self, target: &str) -> Option<&dyn Backend> {
        self.backends
            .iter()
            .find(|b| b.targets().contains(&target))
            .map(|b| &**b)
    }

    /// Lists all supported target identifiers.
    pub fn list_targets(&self) -> Vec<&str> {
        self.backends
            .iter()
            .flat_map(|b| b.targets().iter().copied())
            .collect()
    }
}
