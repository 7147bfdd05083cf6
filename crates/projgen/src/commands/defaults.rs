use std::io::{self, Write};

use anyhow::Result;

use crate::config::default_toml;
use crate::log_info;

pub fn run() -> Result<()> {
  log_info!("Embedded projgen defaults (read-only)");
  let mut stdout = io::stdout().lock();
  writeln!(stdout, "{}", default_toml())?;
  Ok(())
}
