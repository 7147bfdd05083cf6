/// Token styling helpers.
///
/// The `t` module stands for "tokens". Use these helpers to style
/// specific values inside info messages consistently across the CLI.
pub mod t {
  use std::fmt::Display;

  use owo_colors::OwoColorize as _;

  pub fn name(value: impl Display) -> String {
    format!("{}", value.to_string().magenta())
  }

  pub fn path(p: impl Display) -> String {
    format!("{}", p.to_string().cyan())
  }

  pub fn ok(s: impl Display) -> String {
    format!("{}", s.to_string().green())
  }

  pub fn warn(s: impl Display) -> String {
    format!("{}", s.to_string().yellow())
  }

  pub fn err(s: impl Display) -> String {
    format!("{}", s.to_string().red())
  }
}

// Status lines for the user. These macros enforce the agreed style:
// info = neutral, success/warn/error = full-line tint.
// Use `t::*` helpers to highlight tokens in info messages only.
// Diagnostics that are not meant for the user go through the `log` crate.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
  Info,
  Success,
  Warn,
  Error,
}

#[doc(hidden)]
pub fn emit(level: LogLevel, text: &str) {
  match level {
    LogLevel::Info | LogLevel::Success => anstream::println!("{text}"),
    LogLevel::Warn | LogLevel::Error => anstream::eprintln!("{text}"),
  }
}

/// Initialize the diagnostic logger. `RUST_LOG` overrides the default `warn` filter.
pub fn init_diagnostics() {
  let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
    .format_timestamp(None)
    .try_init();
}

#[macro_export]
macro_rules! log_info {
  ($fmt:literal $(, $args:expr )* $(,)?) => {{
    $crate::utils::log::emit(
      $crate::utils::log::LogLevel::Info,
      &format!($fmt $(, $args )*)
    );
  }};
}

#[macro_export]
macro_rules! log_success {
  ($fmt:literal $(, $args:expr )* $(,)?) => {{
    $crate::utils::log::emit(
      $crate::utils::log::LogLevel::Success,
      &$crate::utils::log::t::ok(format!($fmt $(, $args )*))
    );
  }};
}

#[macro_export]
macro_rules! log_warn {
  ($fmt:literal $(, $args:expr )* $(,)?) => {{
    $crate::utils::log::emit(
      $crate::utils::log::LogLevel::Warn,
      &$crate::utils::log::t::warn(format!($fmt $(, $args )*))
    );
  }};
}

#[macro_export]
macro_rules! log_error {
  ($fmt:literal $(, $args:expr )* $(,)?) => {{
    $crate::utils::log::emit(
      $crate::utils::log::LogLevel::Error,
      &$crate::utils::log::t::err(format!($fmt $(, $args )*))
    );
  }};
}

#[cfg(test)]
mod tests {
  use super::t;

  #[test]
  fn token_helpers_keep_the_value() {
    assert!(t::path("/tmp/Project1").contains("/tmp/Project1"));
    assert!(t::name("Project1").contains("Project1"));
  }

  #[test]
  fn tinted_helpers_emit_ansi_escapes() {
    for styled in [t::ok("a"), t::warn("b"), t::err("c")] {
      assert!(styled.contains("\u{1b}["), "expected ANSI escape in {styled:?}");
    }
  }

  #[test]
  fn macros_no_panic() {
    crate::log_info!("A {}", 1);
    crate::log_success!("B");
    crate::log_warn!("C");
    crate::log_error!("D");
  }

  #[test]
  fn init_diagnostics_is_idempotent() {
    super::init_diagnostics();
    super::init_diagnostics();
  }
}
