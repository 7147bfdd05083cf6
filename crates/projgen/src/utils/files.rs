use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};

/// Why a directory could not be created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateDirError {
  /// Something already lives at the path.
  Exists,
  /// The parent is missing or not accessible.
  Missing,
}

/// Create exactly one directory level at `path`.
///
/// Never creates missing parents and never reuses an existing directory.
pub fn create_single_dir(path: &Path) -> std::result::Result<(), CreateDirError> {
  match fs::create_dir(path) {
    Ok(()) => Ok(()),
    Err(err) => {
      log::debug!("create_dir {} failed: {err}", path.display());
      if exists(path) {
        Err(CreateDirError::Exists)
      } else {
        Err(CreateDirError::Missing)
      }
    }
  }
}

/// Write `contents` to a new file at `path`, failing if it already exists.
pub fn write_new_file(path: &Path, contents: &str) -> Result<()> {
  if exists(path) {
    bail!("refusing to overwrite {}", path.display());
  }
  fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))
}

/// True when anything (file, directory, or dangling symlink) lives at `path`.
#[must_use]
pub fn exists(path: &Path) -> bool {
  fs::symlink_metadata(path).is_ok()
}
