use anyhow::{Context, Result};
use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::{Builder, TempDir};

#[derive(Debug)]
pub struct TestEnv {
  temp: TempDir,
  xdg_home: TempDir,
}

impl TestEnv {
  pub fn run<F, R>(f: F) -> R
  where
    F: FnOnce(&TestEnv) -> R,
  {
    let env = TestEnv::new();
    f(&env)
  }

  pub fn new() -> Self {
    let temp = tempdir_in_sandbox();
    let xdg_home = tempdir_in_sandbox();
    Self { temp, xdg_home }
  }

  /// Working directory of the spawned binary and default parent of new projects.
  pub fn path(&self) -> &Path {
    self.temp.path()
  }

  pub fn path_str(&self) -> String {
    self.path().display().to_string()
  }

  pub fn xdg_home_dir(&self) -> &Path {
    self.xdg_home.path()
  }

  pub fn projgen(&self) -> Result<Command> {
    let mut cmd = Command::cargo_bin("projgen")?;
    cmd.current_dir(self.path());
    cmd.env("XDG_CONFIG_HOME", self.xdg_home_dir());
    cmd.env_remove("RUST_LOG");
    Ok(cmd)
  }

  pub fn write_executable_script(&self, path: &Path, body: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent)
        .with_context(|| format!("create parent dir for script {}", path.display()))?;
    }
    std::fs::write(path, body).with_context(|| format!("write script {}", path.display()))?;
    #[cfg(unix)]
    {
      use std::os::unix::fs::PermissionsExt as _;
      let mut perms = std::fs::metadata(path)?.permissions();
      perms.set_mode(0o755);
      std::fs::set_permissions(path, perms)
        .with_context(|| format!("set script executable at {}", path.display()))?;
    }
    Ok(())
  }

  /// Install a fake editor that records its first argument in the returned marker file.
  pub fn fake_editor(&self) -> Result<(PathBuf, PathBuf)> {
    let bin_dir = self.xdg_home_dir().join("bin");
    let marker = bin_dir.join("opened.txt");
    let script = bin_dir.join("editor.sh");
    self.write_executable_script(
      &script,
      &format!(
        "#!/bin/sh\nprintf '%s' \"$1\" > '{}'\n",
        marker.display()
      ),
    )?;
    Ok((script, marker))
  }

  pub fn write_project_config(&self, body: &str) -> Result<PathBuf> {
    let dir = self.path().join(".projgen");
    std::fs::create_dir_all(&dir)?;
    let path = dir.join("projgen.toml");
    std::fs::write(&path, body)?;
    Ok(path)
  }

  pub fn write_global_config(&self, body: &str) -> Result<PathBuf> {
    let dir = self.xdg_home_dir().join("projgen");
    std::fs::create_dir_all(&dir)?;
    let path = dir.join("projgen.toml");
    std::fs::write(&path, body)?;
    Ok(path)
  }

  /// Names of the entries directly under `relative`, sorted.
  pub fn entries(&self, relative: &str) -> Result<Vec<String>> {
    let dir = self.path().join(relative);
    let mut names: Vec<String> = std::fs::read_dir(&dir)
      .with_context(|| format!("read {}", dir.display()))?
      .filter_map(|entry| entry.ok())
      .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
      .collect();
    names.sort();
    Ok(names)
  }
}

/// Returns a workspace-local temp root for tests under `./target/test-tmp` at the workspace root.
/// Ensures the directory exists to satisfy sandboxed filesystems that forbid `/tmp`.
pub fn tmp_root() -> PathBuf {
  let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
  // Walk two parents up: crates/projgen -> crates -> workspace root
  let workspace_root = manifest_dir
    .parent()
    .and_then(|p| p.parent())
    .unwrap_or(&manifest_dir)
    .to_path_buf();
  let root = workspace_root.join("target").join("test-tmp");
  let _ = std::fs::create_dir_all(&root);
  root
}

/// Create a temp dir under the workspace-local temp root.
pub fn tempdir_in_sandbox() -> TempDir {
  Builder::new()
    .prefix("projgen-test-")
    .tempdir_in(tmp_root())
    .expect("temp dir")
}
