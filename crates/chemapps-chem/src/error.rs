//! Chemistry data error types.

use std::path::PathBuf;

/// Errors raised while loading or querying chemistry data tables.
#[derive(Debug, thiserror::Error)]
pub enum ChemError {
    /// Data file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Malformed line in a data file.
    #[error("line {line}: {detail}")]
    Parse { line: usize, detail: String },

    /// An isotope record lacks a required key.
    #[error("record ending at line {line} has no '{field}' entry")]
    MissingField { line: usize, field: &'static str },

    /// No element or isotope with this symbol.
    #[error("bad atomic symbol: {0}")]
    UnknownElement(String),

    /// No element with this atomic number.
    #[error("no element with atomic number {0}")]
    UnknownAtomicNumber(u32),

    /// No physical constant with this label.
    #[error("unknown physical constant: {0}")]
    UnknownConstant(String),
}

/// Result type for chemistry data operations.
pub type Result<T> = std::result::Result<T, ChemError>;
