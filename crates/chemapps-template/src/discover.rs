//! Template discovery.

use std::path::{Path, PathBuf};

use chemapps_toolchain::PlatformTag;
use walkdir::WalkDir;

use crate::error::{Result, TemplateError};

/// Find every file named after the platform's template below `root`.
///
/// Symbolic links to templates are configured; links to directories are not
/// followed. Subdirectories that cannot be read are skipped with a warning,
/// an unreadable `root` is an error. The result is sorted, and an empty
/// result is an error: there is nothing to configure.
pub fn discover(root: &Path, platform: PlatformTag) -> Result<Vec<PathBuf>> {
    let template = platform.template_name();
    let mut found = Vec::new();

    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(e) => e,
            Err(err) if err.depth() == 0 => {
                return Err(TemplateError::Io {
                    path: root.to_path_buf(),
                    source: err.into(),
                });
            }
            Err(err) => {
                tracing::warn!(error = %err, "skipping unreadable entry");
                continue;
            }
        };
        let path = entry.path();
        if entry.file_name() == template && path.is_file() {
            tracing::debug!(path = %path.display(), "found template");
            found.push(path.to_path_buf());
        }
    }
    found.sort();

    if found.is_empty() {
        return Err(TemplateError::NoTemplatesFound {
            root: root.to_path_buf(),
            template,
        });
    }
    tracing::info!(root = %root.display(), count = found.len(), "discovered templates");
    Ok(found)
}
