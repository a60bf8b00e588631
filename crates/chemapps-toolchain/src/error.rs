//! Error types for compiler resolution.

use std::fmt;

use crate::compiler::Role;
use crate::platform::PlatformTag;

/// Why a requested compiler was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnsupportedReason {
    /// The name is not in the platform's supported list.
    NotSupported(PlatformTag),
    /// The name is supported but no executable was found on the search path.
    NotFound,
}

impl fmt::Display for UnsupportedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotSupported(platform) => write!(f, "not supported on {platform}"),
            Self::NotFound => write!(f, "not found in PATH"),
        }
    }
}

/// Errors that can occur while resolving a toolchain.
#[derive(Debug, thiserror::Error)]
pub enum ToolchainError {
    /// The selected compiler is unknown on this platform or unreachable.
    #[error("unsupported {role} compiler: {name} ({reason})")]
    UnsupportedCompiler {
        /// Role the compiler was requested for.
        role: Role,
        /// Name given by the user (or the platform default).
        name: String,
        /// Which check failed.
        reason: UnsupportedReason,
    },
}

/// Result type for toolchain operations.
pub type Result<T> = std::result::Result<T, ToolchainError>;
