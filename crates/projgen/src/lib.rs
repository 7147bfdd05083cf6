use std::path::PathBuf;

use anyhow::Result;
use clap::{Args as ClapArgs, Parser, Subcommand};

mod commands;
pub mod config;
pub mod scaffold;
mod texts;
pub mod utils;

pub use scaffold::{
  EditorSpec, ScaffoldOptions, ScaffoldReport, StepStatus, create_project_and_open_editor,
  create_project_default, create_project_with_options, open_editor,
};

use crate::config::{AppContext, ProjgenPaths, load_config};

/// Projgen - scaffold a static web project (index.html, css/, js/, img/).
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
  /// Create a new project directory with starter files
  New(NewArgs),
  /// Launch an editor executable
  Open(OpenArgs),
  /// Inspect or create the configuration
  Config {
    #[command(subcommand)]
    command: ConfigCommand,
  },
  /// Print the embedded default configuration
  Defaults,
}

#[derive(Debug, ClapArgs)]
struct NewArgs {
  /// Project directory name. Defaults to the next free `Project<n>`.
  name: Option<String>,
  /// Parent directory. Defaults to the current directory.
  #[arg(long, short)]
  path: Option<PathBuf>,
  /// Only create directories, skip the starter css/js files
  #[arg(long)]
  no_files: bool,
  /// Stylesheet name without extension
  #[arg(long)]
  css_name: Option<String>,
  /// Script name without extension
  #[arg(long)]
  js_name: Option<String>,
  /// Open the editor on the new project afterwards
  #[arg(long)]
  open: bool,
  #[command(flatten)]
  editor: EditorArgs,
}

#[derive(Debug, ClapArgs)]
struct OpenArgs {
  /// Path passed to the editor as its argument
  target: Option<PathBuf>,
  #[command(flatten)]
  editor: EditorArgs,
}

#[derive(Debug, ClapArgs)]
struct EditorArgs {
  /// Absolute path of the editor executable (overrides [editor].path)
  #[arg(long)]
  editor_path: Option<String>,
  /// Editor name shown in output (overrides [editor].name)
  #[arg(long)]
  editor_name: Option<String>,
}

#[derive(Debug, Subcommand)]
enum ConfigCommand {
  /// Print the global config file path
  Path,
  /// Create the global config file from the template if missing
  Init,
  /// Print the effective merged configuration
  Show,
}

pub fn parse() -> Cli {
  Cli::parse()
}

/// Load the merged config for commands that act on it. `config path`,
/// `config init` and `defaults` skip this so a broken config file can be
/// located and repaired.
fn app_context() -> Result<AppContext> {
  let cwd = std::env::current_dir()?;
  let config = load_config(&cwd)?;
  Ok(AppContext {
    paths: ProjgenPaths::new(cwd),
    config,
  })
}

pub fn run() -> Result<()> {
  utils::log::init_diagnostics();
  let cli = parse();

  match cli.command {
    Commands::New(args) => {
      let ctx = app_context()?;
      let options = commands::new::NewOptions {
        name: args.name,
        parent: args.path,
        no_files: args.no_files,
        css_name: args.css_name,
        js_name: args.js_name,
        open: args.open,
        editor_path: args.editor.editor_path,
        editor_name: args.editor.editor_name,
      };
      commands::new::run(&ctx, &options)?;
    }
    Commands::Open(args) => {
      let ctx = app_context()?;
      commands::open::run(
        &ctx,
        args.editor.editor_path.as_deref(),
        args.editor.editor_name.as_deref(),
        args.target.as_deref(),
      )?;
    }
    Commands::Config { command } => match command {
      ConfigCommand::Path => commands::config::path()?,
      ConfigCommand::Init => commands::config::init()?,
      ConfigCommand::Show => commands::config::show(&app_context()?)?,
    },
    Commands::Defaults => commands::defaults::run()?,
  }

  Ok(())
}
