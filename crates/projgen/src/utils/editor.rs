use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result, bail};

use crate::utils::validate::{unquote, validate_quoted_file_path};

/// Run the editor executable at `editor_path` and wait for it to exit.
///
/// The path must be an absolute `<dir>/<base>.<ext>` path; it may be given
/// with or without surrounding double quotes. `target`, when present, is
/// passed as the single argument. Nothing is spawned for an invalid path.
pub fn launch(editor_path: &str, target: Option<&Path>) -> Result<()> {
  let Some(quoted) = validate_quoted_file_path(editor_path) else {
    bail!("invalid editor path: {editor_path}");
  };
  let program = unquote(&quoted);

  let mut cmd = Command::new(program);
  if let Some(target) = target {
    cmd.arg(target);
  }
  log::debug!("launching editor {quoted} with target {target:?}");
  let status = cmd
    .status()
    .with_context(|| format!("failed to spawn editor program: {program}"))?;
  if !status.success() {
    bail!("editor exited with non-zero status");
  }
  Ok(())
}
