//! Template engine error types.

use std::path::PathBuf;

/// Errors that can occur while discovering or rendering templates.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    /// The search root holds no template for this platform.
    #[error("no makefile templates ({template}) found under {}", root.display())]
    NoTemplatesFound {
        /// Directory that was searched.
        root: PathBuf,
        /// Template file name that was looked for.
        template: &'static str,
    },

    /// Reading a template or writing a Makefile failed.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// File or directory being accessed.
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result type for template operations.
pub type Result<T> = std::result::Result<T, TemplateError>;
