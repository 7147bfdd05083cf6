use std::path::{Path, PathBuf};

use crate::scaffold::{ProjectContext, ScaffoldOptions, StepStatus};
use crate::texts::boilerplate;
use crate::utils::files::{CreateDirError, create_single_dir, write_new_file};
use crate::utils::log::t;
use crate::utils::messages;
use crate::utils::validate::{validate_directory_path, validate_file_name};
use crate::{log_error, log_info};

/// Boilerplate known for a fork directory, matched case-insensitively.
fn starter_for(dir_name: &str) -> Option<(&'static str, &'static str)> {
  if dir_name.eq_ignore_ascii_case("css") {
    Some(("css", boilerplate::STYLESHEET))
  } else if dir_name.eq_ignore_ascii_case("js") {
    Some(("js", boilerplate::SCRIPT))
  } else {
    None
  }
}

fn report_create_error(err: CreateDirError) {
  match err {
    CreateDirError::Exists => log_error!("{}", messages::PATH_EXISTS),
    CreateDirError::Missing => log_error!("{}", messages::PATH_MISSING),
  }
}

fn write_starter(path: &Path, file_name: &str, contents: &str) -> StepStatus {
  match write_new_file(path, contents) {
    Ok(()) => {
      log_info!("{}", messages::file_created(file_name));
      StepStatus::Done
    }
    Err(err) => {
      log::debug!("{err:#}");
      log_error!("{}", messages::file_write_failed(file_name));
      StepStatus::Failed
    }
  }
}

/// Create the project root `<parent>/<name>` and write `index.html` into it.
///
/// Returns the context as soon as the directory exists, even if writing
/// `index.html` failed afterwards, so the fork steps can still run.
pub fn create_project_root(parent: &str, name: &str) -> (Option<ProjectContext>, StepStatus) {
  let Some(normalized) = validate_directory_path(parent, name) else {
    log_error!("{}", messages::PATH_MALFORMED);
    return (None, StepStatus::Failed);
  };
  let root = PathBuf::from(normalized.trim_end_matches('/'));
  if let Err(err) = create_single_dir(&root) {
    report_create_error(err);
    return (None, StepStatus::Failed);
  }
  log_info!("{}", messages::dir_created(t::name(name)));

  let ctx = ProjectContext {
    name: name.to_string(),
    root,
  };
  let index = ctx.root.join(boilerplate::INDEX_FILE_NAME);
  let status = write_starter(&index, boilerplate::INDEX_FILE_NAME, boilerplate::INDEX_HTML);
  (Some(ctx), status)
}

/// Create `<root>/<dir_name>` and, when requested, its starter file.
///
/// Fails immediately without a project context. Returns `Skipped` when no
/// starter exists for `dir_name`, whether or not files were requested.
pub fn create_fork_dir(
  project: Option<&ProjectContext>,
  dir_name: &str,
  options: &ScaffoldOptions,
) -> StepStatus {
  let Some(ctx) = project else {
    log_error!("{}", messages::PROJECT_PATH_MISSING);
    return StepStatus::Failed;
  };
  let Some(normalized) = ctx
    .root
    .to_str()
    .and_then(|root| validate_directory_path(root, dir_name))
  else {
    log_error!("{}", messages::PATH_MALFORMED);
    return StepStatus::Failed;
  };
  let dir = PathBuf::from(normalized.trim_end_matches('/'));
  if let Err(err) = create_single_dir(&dir) {
    report_create_error(err);
    return StepStatus::Failed;
  }
  log_info!("{}", messages::dir_created(dir_name));

  // Directories without a known starter are skipped whatever the flag says.
  let Some((extension, contents)) = starter_for(dir_name) else {
    if options.generate_files {
      log_info!("{}", messages::no_starter_file(dir_name));
    }
    return StepStatus::Skipped;
  };
  if !options.generate_files {
    return StepStatus::Done;
  }
  let base = if extension == "css" {
    &options.css_name
  } else {
    &options.js_name
  };
  let Some(file_name) = validate_file_name(&format!("{base}.{extension}")) else {
    log_error!("{}", messages::FILE_NAME_MALFORMED);
    return StepStatus::Failed;
  };
  write_starter(&dir.join(&file_name), &file_name, contents)
}
