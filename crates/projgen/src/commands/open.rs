use std::path::Path;

use anyhow::{Result, bail};

use crate::config::AppContext;
use crate::scaffold::open_editor;

pub fn run(
  ctx: &AppContext,
  editor_path: Option<&str>,
  editor_name: Option<&str>,
  target: Option<&Path>,
) -> Result<()> {
  let editor = ctx.config.editor_spec(editor_path, editor_name)?;
  let target = target.map(|t| ctx.paths.resolve_parent(Some(t)));
  if open_editor(&editor, target.as_deref()).is_failure() {
    bail!("failed to open editor {}", editor.name);
  }
  Ok(())
}
