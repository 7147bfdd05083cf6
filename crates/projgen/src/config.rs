use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use toml::Value as TomlValue;

use crate::log_warn;
use crate::scaffold::{
  DEFAULT_CSS_NAME, DEFAULT_GENERATE_FILES, DEFAULT_JS_NAME, EditorSpec, ScaffoldOptions,
};

/// Known top-level config keys.
const KNOWN_TOP_LEVEL_KEYS: &[&str] = &["generate", "editor"];

/// Known keys within `[generate]` section.
const KNOWN_GENERATE_KEYS: &[&str] = &["files", "css_name", "js_name"];

/// Known keys within `[editor]` section.
const KNOWN_EDITOR_KEYS: &[&str] = &["name", "path"];

// Embed repository defaults
const DEFAULT_TOML: &str =
  include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/defaults/projgen.toml"));

/// Embedded config template with all options commented out for documentation.
const CONFIG_TEMPLATE: &str =
  include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/defaults/projgen.template.toml"));

const CONFIG_FILE_NAME: &str = "projgen.toml";
const PROJECT_CONFIG_DIR: &str = ".projgen";

#[must_use]
pub fn default_toml() -> &'static str {
  DEFAULT_TOML
}

/// Returns the config template with all options commented out.
#[must_use]
pub fn config_template() -> &'static str {
  CONFIG_TEMPLATE
}

/// Resolve the global config file path.
///
/// # Errors
/// Returns an error if the XDG config home cannot be resolved.
pub fn global_config_path() -> Result<PathBuf> {
  let xdg = xdg::BaseDirectories::with_prefix("projgen");
  let config_home = xdg
    .get_config_home()
    .ok_or_else(|| anyhow::anyhow!("unable to resolve XDG config home"))?;
  Ok(config_home.join(CONFIG_FILE_NAME))
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GenerateConfig {
  /// Write starter files into `css/` and `js/`.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub files: Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub css_name: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub js_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct EditorConfig {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  /// Absolute path of the editor executable.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ProjgenConfig {
  #[serde(default)]
  pub generate: GenerateConfig,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub editor: Option<EditorConfig>,
}

impl ProjgenConfig {
  /// Starter-file options with built-in defaults filling unset keys.
  #[must_use]
  pub fn scaffold_options(&self) -> ScaffoldOptions {
    ScaffoldOptions {
      generate_files: self.generate.files.unwrap_or(DEFAULT_GENERATE_FILES),
      css_name: self
        .generate
        .css_name
        .clone()
        .unwrap_or_else(|| DEFAULT_CSS_NAME.to_string()),
      js_name: self
        .generate
        .js_name
        .clone()
        .unwrap_or_else(|| DEFAULT_JS_NAME.to_string()),
    }
  }

  /// Resolve the editor with precedence: explicit argument -> `[editor]` config.
  /// The name falls back to the executable's file stem.
  pub fn editor_spec(&self, path: Option<&str>, name: Option<&str>) -> Result<EditorSpec> {
    let configured = self.editor.clone().unwrap_or_default();
    let Some(path) = path
      .map(str::to_string)
      .or(configured.path)
      .filter(|p| !p.trim().is_empty())
    else {
      bail!("no editor configured. Pass --editor-path or set [editor].path in {CONFIG_FILE_NAME}");
    };
    let name = name
      .map(str::to_string)
      .or(configured.name)
      .unwrap_or_else(|| {
        Path::new(crate::utils::validate::unquote(&path))
          .file_stem()
          .map(|s| s.to_string_lossy().into_owned())
          .unwrap_or_default()
      });
    Ok(EditorSpec { name, path })
  }
}

#[derive(Debug, Clone)]
pub struct ProjgenPaths {
  cwd: PathBuf,
}

impl ProjgenPaths {
  pub fn new(cwd: impl Into<PathBuf>) -> Self {
    Self { cwd: cwd.into() }
  }

  #[must_use]
  pub fn project_config(&self) -> PathBuf {
    self.cwd.join(PROJECT_CONFIG_DIR).join(CONFIG_FILE_NAME)
  }

  /// Resolve a user-supplied parent directory against the working directory.
  #[must_use]
  pub fn resolve_parent(&self, parent: Option<&Path>) -> PathBuf {
    match parent {
      Some(p) if p.is_absolute() => p.to_path_buf(),
      Some(p) => self.cwd.join(p),
      None => self.cwd.clone(),
    }
  }
}

#[derive(Debug, Clone)]
pub struct AppContext {
  pub paths: ProjgenPaths,
  pub config: ProjgenConfig,
}

fn merge_values(base: &mut TomlValue, overlay: TomlValue) {
  match (base, overlay) {
    (TomlValue::Table(base_tbl), TomlValue::Table(overlay_tbl)) => {
      for (k, v) in overlay_tbl {
        match base_tbl.get_mut(&k) {
          Some(existing) => merge_values(existing, v),
          None => {
            base_tbl.insert(k, v);
          }
        }
      }
    }
    // Arrays and scalars: replace last-wins
    (base_slot, new_v) => *base_slot = new_v,
  }
}

fn warn_unknown_section_keys(table: &toml::Table, section: &str, known: &[&str], file: &Path) {
  let Some(TomlValue::Table(inner)) = table.get(section) else {
    return;
  };
  for key in inner.keys() {
    if !known.contains(&key.as_str()) {
      log_warn!(
        "warning: unknown config key '{}.{}' in {} (known keys: {})",
        section,
        key,
        file.display(),
        known.join(", ")
      );
    }
  }
}

/// Warn about unknown keys in a parsed TOML config file.
///
/// Unknown keys are logged as warnings to help users catch typos.
fn warn_unknown_keys(val: &TomlValue, file_path: &Path) {
  let TomlValue::Table(table) = val else {
    return;
  };

  for key in table.keys() {
    if !KNOWN_TOP_LEVEL_KEYS.contains(&key.as_str()) {
      log_warn!(
        "warning: unknown config key '{}' in {} (did you mean one of: {}?)",
        key,
        file_path.display(),
        KNOWN_TOP_LEVEL_KEYS.join(", ")
      );
    }
  }
  warn_unknown_section_keys(table, "generate", KNOWN_GENERATE_KEYS, file_path);
  warn_unknown_section_keys(table, "editor", KNOWN_EDITOR_KEYS, file_path);
}

fn merge_file(merged: &mut TomlValue, path: &Path) -> Result<()> {
  let data =
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
  let val: TomlValue =
    toml::from_str(&data).with_context(|| format!("invalid TOML in {}", path.display()))?;
  warn_unknown_keys(&val, path);
  log::debug!("merging config from {}", path.display());
  merge_values(merged, val);
  Ok(())
}

/// Load and merge configuration from defaults, global, and project files.
///
/// # Errors
/// Returns an error if any of the config files cannot be read or parsed
/// as valid TOML.
pub fn load_config(cwd: &Path) -> Result<ProjgenConfig> {
  // Start with embedded defaults
  let mut merged: TomlValue =
    toml::from_str(DEFAULT_TOML).context("invalid embedded default config")?;

  // Merge global XDG config if present
  let xdg = xdg::BaseDirectories::with_prefix("projgen");
  if let Some(global_path) = xdg.find_config_file(CONFIG_FILE_NAME) {
    merge_file(&mut merged, &global_path)?;
  }

  // Merge project config if present
  let project_cfg = ProjgenPaths::new(cwd).project_config();
  if project_cfg.exists() {
    merge_file(&mut merged, &project_cfg)?;
  }

  // Deserialize into strongly typed config
  let cfg = merged
    .try_into::<ProjgenConfig>()
    .context("failed to parse merged config")?;
  Ok(cfg)
}
