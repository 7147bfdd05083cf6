//! Project generation: the project root step, the fork-directory steps,
//! and the orchestrator that runs them in order and aggregates the outcome.

mod api;
mod steps;

use std::path::{Path, PathBuf};

pub use api::{
  EditorSpec, create_and_open, create_project_and_open_editor, create_project_default,
  create_project_with_options, open_editor,
};
pub use steps::{create_fork_dir, create_project_root};

pub const DEFAULT_CSS_NAME: &str = "style";
pub const DEFAULT_JS_NAME: &str = "main";
pub const DEFAULT_GENERATE_FILES: bool = true;

/// The fork directories created under every project root, in creation order.
pub const FORK_DIRS: [&str; 3] = ["css", "js", "img"];

/// Outcome of a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
  Failed,
  Done,
  /// Directory created, but there is no starter file for it.
  Skipped,
}

impl StepStatus {
  /// Numeric code: -1 failed, 0 done, 1 skipped.
  #[must_use]
  pub fn code(self) -> i32 {
    match self {
      StepStatus::Failed => -1,
      StepStatus::Done => 0,
      StepStatus::Skipped => 1,
    }
  }

  #[must_use]
  pub fn is_failure(self) -> bool {
    self == StepStatus::Failed
  }
}

/// Options controlling starter files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldOptions {
  /// Write `<css_name>.css` and `<js_name>.js` into the fork directories.
  pub generate_files: bool,
  /// Base name of the stylesheet, without extension.
  pub css_name: String,
  /// Base name of the script, without extension.
  pub js_name: String,
}

impl Default for ScaffoldOptions {
  fn default() -> Self {
    Self {
      generate_files: DEFAULT_GENERATE_FILES,
      css_name: DEFAULT_CSS_NAME.to_string(),
      js_name: DEFAULT_JS_NAME.to_string(),
    }
  }
}

/// A created project root. Only `create_project_root` hands these out, so
/// holding one means the directory was created by this run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectContext {
  name: String,
  root: PathBuf,
}

impl ProjectContext {
  #[must_use]
  pub fn name(&self) -> &str {
    &self.name
  }

  #[must_use]
  pub fn root(&self) -> &Path {
    &self.root
  }
}

/// Per-step results of one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
  pub project: Option<ProjectContext>,
  pub steps: Vec<(String, StepStatus)>,
}

impl ScaffoldReport {
  /// True when no step failed. Skipped steps count as success.
  #[must_use]
  pub fn is_success(&self) -> bool {
    !self.steps.iter().any(|(_, status)| status.is_failure())
  }

  /// 0 on success, -1 otherwise.
  #[must_use]
  pub fn code(&self) -> i32 {
    if self.is_success() { 0 } else { -1 }
  }

  #[must_use]
  pub fn status_of(&self, step: &str) -> Option<StepStatus> {
    self
      .steps
      .iter()
      .find(|(label, _)| label == step)
      .map(|(_, status)| *status)
  }
}

/// Run every step in order: project root, then `css`, `js`, `img`.
///
/// All steps are attempted even when an earlier one failed; fork steps fail
/// on their own when no project root was created.
pub fn generate(parent: &str, name: &str, options: &ScaffoldOptions) -> ScaffoldReport {
  let (project, root_status) = create_project_root(parent, name);
  let mut steps = vec![(name.to_string(), root_status)];
  for dir in FORK_DIRS {
    let status = create_fork_dir(project.as_ref(), dir, options);
    steps.push((dir.to_string(), status));
  }
  ScaffoldReport { project, steps }
}
