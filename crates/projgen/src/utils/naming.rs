use std::path::Path;
use std::sync::OnceLock;

use anyhow::{Context, Result};
use regex::Regex;

static PROJECT_NAME_RE: OnceLock<Regex> = OnceLock::new();

pub const PROJECT_NAME_PREFIX: &str = "Project";

/// Pick the next `Project<n>` name given the names already present.
///
/// Examples:
/// - {`Project1`, `Project3`, `notes.txt`} -> `Project4`
/// - {} or no matches -> `Project1`
pub fn next_project_name_from<I, S>(names: I) -> String
where
  I: IntoIterator<Item = S>,
  S: AsRef<str>,
{
  let re = PROJECT_NAME_RE.get_or_init(|| {
    Regex::new(&format!(r"^{PROJECT_NAME_PREFIX}(?P<num>\d+)$")).expect("valid regex")
  });
  let max_n = names
    .into_iter()
    .filter_map(|name| {
      re.captures(name.as_ref())
        .and_then(|caps| caps.name("num"))
        .and_then(|m| m.as_str().parse::<u64>().ok())
    })
    .max()
    .unwrap_or(0);
  format!("{PROJECT_NAME_PREFIX}{}", max_n.saturating_add(1))
}

/// Scan the immediate entries of `parent` and return the next free project name.
///
/// A missing `parent` counts as empty; creating the project there fails later
/// with a proper message. Two runs racing on the same parent may pick the same name.
pub fn next_project_name(parent: &Path) -> Result<String> {
  if !parent.is_dir() {
    return Ok(next_project_name_from(std::iter::empty::<&str>()));
  }
  let mut names = Vec::new();
  for entry in
    std::fs::read_dir(parent).with_context(|| format!("failed to read {}", parent.display()))?
  {
    let entry = entry?;
    if let Some(name) = entry.file_name().to_str() {
      names.push(name.to_string());
    }
  }
  Ok(next_project_name_from(names))
}
