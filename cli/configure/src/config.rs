//! `configure.toml` project configuration.
//!
//! Every key is optional. Command-line flags override the file, and the
//! file overrides the built-in defaults.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chemapps_toolchain::Role;
use serde::{Deserialize, Serialize};

/// File name searched for, upward from the template search root.
pub const FILE_NAME: &str = "configure.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigureFile {
    pub platform: PlatformConfig,
    pub install: InstallConfig,
    pub compilers: CompilerConfig,
}

/// `[platform]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlatformConfig {
    /// Replaces the detected system identifier, e.g. `"CYGWIN_NT-10.0"`.
    pub uname: Option<String>,
}

/// `[install]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InstallConfig {
    pub prefix: Option<String>,
    pub libdir: Option<String>,
    pub includedir: Option<String>,
}

/// `[compilers]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompilerConfig {
    pub cc: Option<String>,
    pub cxx: Option<String>,
    pub fc: Option<String>,
}

impl CompilerConfig {
    pub fn get(&self, role: Role) -> Option<&str> {
        match role {
            Role::C => self.cc.as_deref(),
            Role::Cxx => self.cxx.as_deref(),
            Role::Fortran => self.fc.as_deref(),
        }
    }
}

impl ConfigureFile {
    /// Search upward from `start_dir` for a `configure.toml`, parse it and
    /// return it along with its path.
    pub fn find_and_load(start_dir: &Path) -> Result<Option<(Self, PathBuf)>> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let candidate = dir.join(FILE_NAME);
            if candidate.is_file() {
                let content = std::fs::read_to_string(&candidate)
                    .with_context(|| format!("reading {}", candidate.display()))?;
                let config = Self::parse(&content)
                    .with_context(|| format!("parsing {}", candidate.display()))?;
                tracing::info!(path = %candidate.display(), "loaded project configuration");
                return Ok(Some((config, candidate)));
            }
            if !dir.pop() {
                break;
            }
        }
        tracing::debug!(start = %start_dir.display(), "no {FILE_NAME} found");
        Ok(None)
    }

    pub fn parse(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_file() {
        let config = ConfigureFile::parse(
            r#"
[platform]
uname = "Darwin"

[install]
prefix = "/opt/chem"
libdir = "/opt/chem/lib"
includedir = "/opt/chem/include"

[compilers]
cc = "clang"
cxx = "clang++"
fc = "gfortran"
"#,
        )
        .unwrap();
        assert_eq!(config.platform.uname.as_deref(), Some("Darwin"));
        assert_eq!(config.install.prefix.as_deref(), Some("/opt/chem"));
        assert_eq!(config.install.includedir.as_deref(), Some("/opt/chem/include"));
        assert_eq!(config.compilers.get(Role::C), Some("clang"));
        assert_eq!(config.compilers.get(Role::Cxx), Some("clang++"));
        assert_eq!(config.compilers.get(Role::Fortran), Some("gfortran"));
    }

    #[test]
    fn every_section_is_optional() {
        let config = ConfigureFile::parse("[compilers]\nfc = \"ifort\"\n").unwrap();
        assert_eq!(config.platform, PlatformConfig::default());
        assert_eq!(config.install, InstallConfig::default());
        assert_eq!(config.compilers.get(Role::C), None);
        assert_eq!(config.compilers.get(Role::Fortran), Some("ifort"));

        assert_eq!(ConfigureFile::parse("").unwrap(), ConfigureFile::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(ConfigureFile::parse("[install]\nbindir = \"/usr/bin\"\n").is_err());
        assert!(ConfigureFile::parse("[linker]\nld = \"gold\"\n").is_err());
    }

    #[test]
    fn found_in_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(FILE_NAME), "[install]\nprefix = \"/srv\"\n").unwrap();
        let nested = dir.path().join("src").join("lib");
        std::fs::create_dir_all(&nested).unwrap();

        let (config, path) = ConfigureFile::find_and_load(&nested).unwrap().unwrap();
        assert_eq!(path, dir.path().join(FILE_NAME));
        assert_eq!(config.install.prefix.as_deref(), Some("/srv"));
    }

    #[test]
    fn malformed_file_names_its_path() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(FILE_NAME), "[install\n").unwrap();
        let err = ConfigureFile::find_and_load(dir.path()).unwrap_err();
        assert!(format!("{err:#}").contains(FILE_NAME));
    }
}
