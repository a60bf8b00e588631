//! Host platform detection.
//!
//! Normalises a raw, uname-style system identifier into a [`PlatformTag`]
//! and derives the platform-dependent pieces of a Makefile: executable
//! suffix, search-path flag syntax, template name and build tool.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::compiler::BuildType;

/// The closed set of platforms the configure tool distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlatformTag {
    Linux,
    /// Cygwin on Windows; recognised by substring since the raw identifier
    /// carries a kernel version suffix (`CYGWIN_NT-10.0`).
    #[serde(rename = "CYGWIN")]
    Cygwin,
    Windows,
    #[serde(rename = "Darwin")]
    MacOS,
    /// Anything unrecognised. Falls back to the generic gcc toolchain.
    Other,
}

impl PlatformTag {
    /// Normalise a raw system identifier. Never fails; unknown or empty
    /// identifiers map to [`PlatformTag::Other`].
    pub fn from_identifier(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.to_ascii_uppercase().contains("CYGWIN") {
            return Self::Cygwin;
        }
        match raw.to_ascii_lowercase().as_str() {
            "linux" => Self::Linux,
            "windows" => Self::Windows,
            "darwin" | "macos" => Self::MacOS,
            _ => Self::Other,
        }
    }

    /// Detect the platform of the running host.
    pub fn detect() -> Self {
        let raw = system_identifier();
        let tag = Self::from_identifier(&raw);
        if tag == Self::Other {
            tracing::warn!(identifier = %raw, "unrecognised platform, using generic toolchain");
        } else {
            tracing::debug!(identifier = %raw, platform = %tag, "detected platform");
        }
        tag
    }

    /// Suffix of executables built on this platform.
    pub fn executable_suffix(self) -> &'static str {
        match self {
            Self::Windows | Self::Cygwin => ".exe",
            _ => "",
        }
    }

    /// Linker flag adding `dir` to the library search path.
    pub fn library_search_flag(self, dir: &str) -> String {
        match self {
            Self::Windows => format!("/LIBDIR:\"{dir}\""),
            _ => format!("-L\"{dir}\""),
        }
    }

    /// Compiler flag adding `dir` to the include search path.
    pub fn include_search_flag(self, dir: &str) -> String {
        match self {
            Self::Windows => format!("/I\"{dir}\""),
            _ => format!("-I\"{dir}\""),
        }
    }

    /// Preprocessor defines for a build type. Bounds checking in Armadillo
    /// is only kept for debug builds.
    pub fn build_defines(self, build: BuildType) -> &'static str {
        match (self, build) {
            (_, BuildType::Debug) => "",
            (Self::Windows, _) => "/DARMA_NO_DEBUG",
            _ => "-DARMA_NO_DEBUG",
        }
    }

    /// File name of the Makefile template for this platform.
    pub fn template_name(self) -> &'static str {
        match self {
            Self::Windows => "Makefile.win",
            _ => "Makefile.unix",
        }
    }

    /// Build tool the generated Makefiles are meant for.
    pub fn make_tool(self) -> &'static str {
        match self {
            Self::Windows => "nmake",
            _ => "make",
        }
    }

    /// Environment variable holding the user's home directory.
    pub fn home_variable(self) -> &'static str {
        match self {
            Self::Windows => "USERPROFILE",
            _ => "HOME",
        }
    }
}

/// Same names as the serialized form.
impl fmt::Display for PlatformTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linux => write!(f, "Linux"),
            Self::Cygwin => write!(f, "CYGWIN"),
            Self::Windows => write!(f, "Windows"),
            Self::MacOS => write!(f, "Darwin"),
            Self::Other => write!(f, "Other"),
        }
    }
}

/// Uname-style identifier of the host operating system.
pub fn system_identifier() -> String {
    match std::env::consts::OS {
        "linux" => "Linux".into(),
        "macos" => "Darwin".into(),
        "windows" => "Windows".into(),
        "cygwin" => "CYGWIN_NT".into(),
        other => other.into(),
    }
}
