//! Path and file-name legality checks.
//!
//! These rules only reject characters reserved by common filesystems
//! (`\ ? / * | < > :` and `"`). The filesystem call that follows is still the
//! final authority on whether a path can actually be created.

use std::sync::OnceLock;

use regex::Regex;

static DIR_PATH_RE: OnceLock<Regex> = OnceLock::new();
static FILE_NAME_RE: OnceLock<Regex> = OnceLock::new();
static QUOTED_FILE_PATH_RE: OnceLock<Regex> = OnceLock::new();
static QUOTED_RE: OnceLock<Regex> = OnceLock::new();

fn dir_path_re() -> &'static Regex {
  DIR_PATH_RE.get_or_init(|| {
    Regex::new(r#"^(?:[a-zA-Z]:)?/(?:[^\\?/*|<>:"]+/)+$"#).expect("valid regex")
  })
}

fn file_name_re() -> &'static Regex {
  FILE_NAME_RE
    .get_or_init(|| Regex::new(r#"^[^\\?/*|<>:"]+\.[^.\\?/*|<>:"]+$"#).expect("valid regex"))
}

fn quoted_file_path_re() -> &'static Regex {
  QUOTED_FILE_PATH_RE.get_or_init(|| {
    Regex::new(r#"^"(?:[a-zA-Z]:)?/(?:[^\\?/*|<>:"]+/)+[^\\?/*|<>:"]+\.[^.\\?/*|<>:"]+"$"#)
      .expect("valid regex")
  })
}

fn quoted_re() -> &'static Regex {
  QUOTED_RE.get_or_init(|| Regex::new(r#"^".+"$"#).expect("valid regex"))
}

/// Join `parent` and `name` into a directory path ending in `/` and check it.
///
/// A trailing separator on `parent` is optional; both spellings produce the
/// same result. Returns `None` when the joined path is not an absolute path
/// (optionally drive-letter prefixed) made of non-reserved segments.
#[must_use]
pub fn validate_directory_path(parent: &str, name: &str) -> Option<String> {
  let mut joined = String::with_capacity(parent.len() + name.len() + 2);
  joined.push_str(parent);
  if !parent.ends_with('/') {
    joined.push('/');
  }
  joined.push_str(name);
  joined.push('/');
  dir_path_re().is_match(&joined).then_some(joined)
}

/// Accept `<base>.<ext>` where the extension holds no dot and neither part
/// holds a reserved character.
#[must_use]
pub fn validate_file_name(name: &str) -> Option<String> {
  file_name_re().is_match(name).then(|| name.to_string())
}

/// Quote `path` unless already quoted and require an absolute file path
/// ending in `<base>.<ext>`. Returns the quoted form.
#[must_use]
pub fn validate_quoted_file_path(path: &str) -> Option<String> {
  let quoted = if quoted_re().is_match(path) {
    path.to_string()
  } else {
    format!("\"{path}\"")
  };
  quoted_file_path_re().is_match(&quoted).then_some(quoted)
}

/// Strip one surrounding pair of double quotes, if present.
#[must_use]
pub fn unquote(path: &str) -> &str {
  path
    .strip_prefix('"')
    .and_then(|rest| rest.strip_suffix('"'))
    .unwrap_or(path)
}
