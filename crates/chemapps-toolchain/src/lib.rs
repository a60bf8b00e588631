//! Toolchain detection for the ChemApps configure tool.
//!
//! Three layers, leaf first:
//! - **Registry** ([`compiler`]): compiler identities and their flag profiles
//! - **Platform** ([`platform`]): host detection and platform-dependent values
//! - **Resolver** ([`resolve`]): validation against the registry and the
//!   search path, and flag assembly for a build type

pub mod compiler;
pub mod error;
pub mod locate;
pub mod platform;
pub mod resolve;

pub use compiler::{supported, BuildType, CompilerId, FlagProfile, Role};
pub use error::{Result, ToolchainError, UnsupportedReason};
pub use locate::{ExecutableLocator, SearchPath};
pub use platform::PlatformTag;
pub use resolve::{default_for, resolve, select, validate, ResolvedCompiler};
