use std::path::{Path, PathBuf};

use crate::scaffold::{ScaffoldOptions, ScaffoldReport, StepStatus, generate};
use crate::utils::editor;
use crate::utils::log::t;
use crate::utils::messages;
use crate::utils::naming::{next_project_name, next_project_name_from};
use crate::{log_error, log_info, log_success};

/// An editor to launch: a display name and the path of its executable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorSpec {
  pub name: String,
  pub path: String,
}

fn resolve_name(parent: &str, name: Option<&str>) -> String {
  if let Some(name) = name {
    return name.to_string();
  }
  match next_project_name(&PathBuf::from(parent)) {
    Ok(name) => name,
    Err(err) => {
      log::debug!("project name scan failed: {err:#}");
      next_project_name_from(std::iter::empty::<&str>())
    }
  }
}

fn announce(report: &ScaffoldReport) {
  if report.is_success() {
    log_success!("{}", messages::GENERATE_DONE);
  } else {
    log_error!("{}", messages::GENERATE_FAILED);
  }
}

/// Generate a project with default starter files (`style.css`, `main.js`).
///
/// Without `name` the next free `Project<n>` under `parent` is used.
pub fn create_project_default(parent: &str, name: Option<&str>) -> ScaffoldReport {
  create_project_with_options(parent, name, &ScaffoldOptions::default())
}

/// Generate a project with explicit starter-file options.
pub fn create_project_with_options(
  parent: &str,
  name: Option<&str>,
  options: &ScaffoldOptions,
) -> ScaffoldReport {
  let name = resolve_name(parent, name);
  let report = generate(parent, &name, options);
  announce(&report);
  report
}

/// Generate a project with default options, then open the editor on it.
///
/// The editor is launched whatever the outcome; it receives the project root
/// as its argument when the root was created.
pub fn create_project_and_open_editor(
  parent: &str,
  name: Option<&str>,
  editor: &EditorSpec,
) -> ScaffoldReport {
  let (report, _) = create_and_open(parent, name, &ScaffoldOptions::default(), editor);
  report
}

/// Like [`create_project_and_open_editor`] with explicit options, also
/// returning the editor's status.
pub fn create_and_open(
  parent: &str,
  name: Option<&str>,
  options: &ScaffoldOptions,
  editor: &EditorSpec,
) -> (ScaffoldReport, StepStatus) {
  let report = create_project_with_options(parent, name, options);
  let target = report.project.as_ref().map(|p| p.root().to_path_buf());
  let status = open_editor(editor, target.as_deref());
  (report, status)
}

/// Launch `editor`, optionally on `target`, and wait for it to exit.
pub fn open_editor(editor: &EditorSpec, target: Option<&Path>) -> StepStatus {
  log_info!("{}", messages::opening_editor(t::name(&editor.name)));
  match editor::launch(&editor.path, target) {
    Ok(()) => StepStatus::Done,
    Err(err) => {
      log::debug!("{err:#}");
      log_error!("{}", messages::EDITOR_PATH_INVALID);
      StepStatus::Failed
    }
  }
}
