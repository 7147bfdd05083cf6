use std::path::PathBuf;

use anyhow::{Result, bail};

use crate::config::AppContext;
use crate::scaffold::{ScaffoldOptions, ScaffoldReport, create_and_open, create_project_with_options};

/// Flags of `projgen new` after clap parsing.
#[derive(Debug, Clone, Default)]
pub struct NewOptions {
  pub name: Option<String>,
  pub parent: Option<PathBuf>,
  pub no_files: bool,
  pub css_name: Option<String>,
  pub js_name: Option<String>,
  pub open: bool,
  pub editor_path: Option<String>,
  pub editor_name: Option<String>,
}

impl NewOptions {
  /// Layer command-line flags over the configured options.
  fn scaffold_options(&self, base: ScaffoldOptions) -> ScaffoldOptions {
    let mut opts = base;
    if self.no_files {
      opts.generate_files = false;
    }
    if let Some(css) = &self.css_name {
      opts.css_name.clone_from(css);
    }
    if let Some(js) = &self.js_name {
      opts.js_name.clone_from(js);
    }
    opts
  }
}

pub fn run(ctx: &AppContext, opts: &NewOptions) -> Result<ScaffoldReport> {
  let parent = ctx.paths.resolve_parent(opts.parent.as_deref());
  let Some(parent) = parent.to_str() else {
    bail!("parent path is not valid UTF-8: {}", parent.display());
  };
  let scaffold = opts.scaffold_options(ctx.config.scaffold_options());
  log::debug!("generating under {parent} with {scaffold:?}");

  let report = if opts.open {
    // Editor must resolve before anything is created.
    let editor = ctx
      .config
      .editor_spec(opts.editor_path.as_deref(), opts.editor_name.as_deref())?;
    let (report, editor_status) = create_and_open(parent, opts.name.as_deref(), &scaffold, &editor);
    if editor_status.is_failure() {
      bail!("failed to open editor {}", editor.name);
    }
    report
  } else {
    create_project_with_options(parent, opts.name.as_deref(), &scaffold)
  };

  if !report.is_success() {
    bail!("project generation failed");
  }
  Ok(report)
}
