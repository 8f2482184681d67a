//! Lexical path resolution against a config's base directory.

use std::path::{Path, PathBuf};

use path_clean::PathClean;

use crate::error::{ConfigError, Result};

/// Resolve `relative` against `base` and normalise the result.
///
/// This is pure path arithmetic: no filesystem access, no symlink resolution.
/// `.` and `..` components are collapsed, and `..` past the root stays at the
/// root. An absolute `relative` is only normalised.
///
/// # Errors
///
/// Returns [`ConfigError::PathResolution`] when `relative` is empty, when
/// `base` is not absolute, or when either input contains a NUL byte.
///
/// # Example
///
/// ```
/// use rollrig_config::resolve_path;
/// use std::path::Path;
///
/// let resolved = resolve_path("/proj/demo", "../../../build/fable-core").unwrap();
/// assert_eq!(resolved, Path::new("/build/fable-core"));
/// ```
pub fn resolve_path(base: impl AsRef<Path>, relative: impl AsRef<Path>) -> Result<PathBuf> {
    let base = base.as_ref();
    let relative = relative.as_ref();

    if relative.as_os_str().is_empty() {
        return Err(ConfigError::PathResolution {
            path: relative.to_path_buf(),
            reason: "path is empty".to_string(),
        });
    }

    if has_nul(relative) {
        return Err(ConfigError::PathResolution {
            path: relative.to_path_buf(),
            reason: "path contains a NUL byte".to_string(),
        });
    }

    if relative.is_absolute() {
        return Ok(relative.clean());
    }

    if has_nul(base) {
        return Err(ConfigError::PathResolution {
            path: base.to_path_buf(),
            reason: "base directory contains a NUL byte".to_string(),
        });
    }

    if !base.is_absolute() {
        return Err(ConfigError::PathResolution {
            path: relative.to_path_buf(),
            reason: format!("base directory '{}' is not absolute", base.display()),
        });
    }

    Ok(base.join(relative).clean())
}

fn has_nul(path: &Path) -> bool {
    path.as_os_str().as_encoded_bytes().contains(&0)
}
