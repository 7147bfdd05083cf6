use anyhow::{Context, Result};

use crate::config::{self, AppContext};
use crate::log_info;
use crate::utils::log::t;

pub fn path() -> Result<()> {
  let cfg_path = config::global_config_path()?;
  anstream::println!("{}", cfg_path.display());
  Ok(())
}

pub fn init() -> Result<()> {
  let cfg_path = config::global_config_path()?;
  if let Some(parent) = cfg_path.parent() {
    std::fs::create_dir_all(parent)
      .with_context(|| format!("failed to create {}", parent.display()))?;
  }
  if cfg_path.exists() {
    log_info!("Config already exists at {}", t::path(cfg_path.display()));
    return Ok(());
  }
  std::fs::write(&cfg_path, config::config_template())
    .with_context(|| format!("failed to create {}", cfg_path.display()))?;
  log_info!("Created config {}", t::path(cfg_path.display()));
  Ok(())
}

pub fn show(ctx: &AppContext) -> Result<()> {
  let rendered = toml::to_string(&ctx.config).context("failed to serialize config")?;
  anstream::print!("{rendered}");
  Ok(())
}
