//! Executable lookup on the search path.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::platform::PlatformTag;

/// Something that can tell whether a program is runnable.
///
/// The configure driver uses [`SearchPath`]; tests substitute a fixed set of
/// names.
pub trait ExecutableLocator {
    /// Full path of `program`, or `None` when it cannot be found.
    fn locate(&self, program: &str) -> Option<PathBuf>;
}

/// Directories and extension candidates to probe, in the manner of `which`.
#[derive(Debug, Clone, Default)]
pub struct SearchPath {
    dirs: Vec<PathBuf>,
    extensions: Vec<String>,
}

const WINDOWS_PATHEXT: &str = ".COM;.EXE;.BAT;.CMD";

impl SearchPath {
    /// Create a search path from explicit parts.
    pub fn new(dirs: Vec<PathBuf>, extensions: Vec<String>) -> Self {
        Self { dirs, extensions }
    }

    /// Build the search path from `PATH` and `PATHEXT`.
    pub fn from_env(platform: PlatformTag) -> Self {
        Self::from_vars(
            platform,
            std::env::var_os("PATH"),
            std::env::var("PATHEXT").ok(),
        )
    }

    fn from_vars(platform: PlatformTag, path: Option<OsString>, pathext: Option<String>) -> Self {
        let dirs = path
            .map(|p| std::env::split_paths(&p).collect())
            .unwrap_or_default();
        let pathext = match (pathext, platform) {
            (Some(ext), _) => ext,
            (None, PlatformTag::Windows) => WINDOWS_PATHEXT.to_string(),
            (None, _) => String::new(),
        };
        let extensions = pathext
            .split(';')
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .map(String::from)
            .collect();
        Self { dirs, extensions }
    }

    /// Directories probed, in order.
    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    fn candidates<'a>(&'a self, base: &'a Path) -> impl Iterator<Item = PathBuf> + 'a {
        std::iter::once(base.to_path_buf()).chain(self.extensions.iter().map(move |ext| {
            let mut name = base.as_os_str().to_os_string();
            name.push(ext);
            PathBuf::from(name)
        }))
    }
}

impl ExecutableLocator for SearchPath {
    fn locate(&self, program: &str) -> Option<PathBuf> {
        let program_path = Path::new(program);
        if program_path.components().count() > 1 {
            return self.candidates(program_path).find(|c| is_executable(c));
        }
        self.dirs.iter().find_map(|dir| {
            let base = dir.join(program);
            let hit = self.candidates(&base).find(|c| is_executable(c));
            hit
        })
    }
}

/// A fixed set of program names that are considered present.
impl ExecutableLocator for [&str] {
    fn locate(&self, program: &str) -> Option<PathBuf> {
        self.iter()
            .any(|name| *name == program)
            .then(|| PathBuf::from(program))
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    match std::fs::metadata(path) {
        Ok(meta) => meta.is_file() && meta.permissions().mode() & 0o111 != 0,
        Err(_) => false,
    }
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
