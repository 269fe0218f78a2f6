//! `burnboard`: command-line front end for the Burnboard fitness tracker.
//!
//! # Usage
//!
//! ```text
//! burnboard register --username sam --email sam@example.com \
//!   --password hunter2 --confirm-password hunter2
//! burnboard steps run --seconds 30
//! burnboard workout add --title "Push Day" --instructions "3x10 bench" \
//!   --duration "30 min" --category Strength
//! burnboard --json dashboard
//! ```

mod commands;
mod output;

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use burnboard_app::AppConfig;
use burnboard_core::user::Role;
use burnboard_store_sqlite::SqliteStores;
use clap::{Args, Parser, Subcommand};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "burnboard", version, about = "Local fitness tracker")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, global = true, default_value = "burnboard.toml")]
  config: PathBuf,

  /// Directory holding the database files (overrides the config file).
  #[arg(long, global = true, env = "BURNBOARD_DATA_DIR")]
  data_dir: Option<PathBuf>,

  /// Print results as JSON.
  #[arg(long, global = true)]
  json: bool,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Create an account.
  Register(RegisterArgs),
  /// Check credentials.
  Login {
    #[arg(long)]
    email:    String,
    #[arg(long)]
    password: String,
  },
  /// Step counter.
  #[command(subcommand)]
  Steps(StepsCommand),
  /// Calorie counter.
  #[command(subcommand)]
  Calories(CaloriesCommand),
  /// Workout catalog.
  #[command(subcommand)]
  Workout(WorkoutCommand),
  /// Activity log.
  #[command(subcommand)]
  Activity(ActivityCommand),
  /// Summary across every store.
  Dashboard,
}

#[derive(Args, Debug)]
struct RegisterArgs {
  #[arg(long)]
  username:         String,
  #[arg(long)]
  email:            String,
  #[arg(long)]
  password:         String,
  #[arg(long)]
  confirm_password: String,
  /// `user` or `admin`.
  #[arg(long, default_value = "user")]
  role:             Role,
}

#[derive(Subcommand, Debug)]
enum StepsCommand {
  /// Show the latest persisted count.
  Show,
  /// Count steps for a while, then stop.
  Run(RunArgs),
  /// Zero the count.
  Reset,
}

#[derive(Subcommand, Debug)]
enum CaloriesCommand {
  /// Count calories for a while, then stop and record the session.
  Run(RunArgs),
  /// List recorded sessions, newest first.
  History,
}

#[derive(Args, Debug)]
struct RunArgs {
  /// Stop after this many seconds; runs until Ctrl-C when omitted.
  #[arg(long)]
  seconds: Option<u64>,
}

#[derive(Subcommand, Debug)]
enum WorkoutCommand {
  Add {
    #[arg(long)]
    title:        String,
    #[arg(long)]
    instructions: String,
    #[arg(long)]
    duration:     String,
    #[arg(long)]
    category:     String,
  },
  /// List workouts grouped by category.
  List,
  /// Print the grouped catalog on every change until Ctrl-C.
  Watch,
}

#[derive(Subcommand, Debug)]
enum ActivityCommand {
  Add {
    #[arg(long)]
    title: String,
    #[arg(long)]
    value: String,
  },
  List,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .with_writer(std::io::stderr)
    .init();

  let cli = Cli::parse();

  // Config file, then environment, then flags.
  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config.clone()).required(false))
    .add_source(config::Environment::with_prefix("BURNBOARD"))
    .build()
    .context("failed to read config file")?;

  let mut app_cfg: AppConfig = settings
    .try_deserialize()
    .context("failed to deserialise AppConfig")?;

  if let Some(dir) = cli.data_dir.clone() {
    app_cfg.data_dir = dir;
  }
  app_cfg.data_dir = expand_tilde(&app_cfg.data_dir);

  let stores = SqliteStores::open(&app_cfg.data_dir)
    .await
    .with_context(|| format!("failed to open stores in {:?}", app_cfg.data_dir))?;

  commands::run(cli, &app_cfg, stores).await
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

#[cfg(test)]
mod tests {
  use super::*;
  use clap::CommandFactory as _;

  #[test]
  fn cli_definition_is_consistent() { Cli::command().debug_assert(); }

  #[test]
  fn role_flag_parses() {
    let cli = Cli::try_parse_from([
      "burnboard",
      "register",
      "--username",
      "sam",
      "--email",
      "sam@example.com",
      "--password",
      "pw",
      "--confirm-password",
      "pw",
      "--role",
      "admin",
    ])
    .unwrap();
    assert!(matches!(cli.command, Command::Register(RegisterArgs { role: Role::Admin, .. })));
  }

  #[test]
  fn unknown_role_is_rejected() {
    let parsed = Cli::try_parse_from([
      "burnboard",
      "register",
      "--username",
      "sam",
      "--email",
      "e",
      "--password",
      "pw",
      "--confirm-password",
      "pw",
      "--role",
      "root",
    ]);
    assert!(parsed.is_err());
  }

  #[test]
  fn shared_flags_are_accepted_after_the_subcommand() {
    let cli = Cli::try_parse_from([
      "burnboard",
      "steps",
      "show",
      "--data-dir",
      "/tmp/burn",
      "--config",
      "alt.toml",
      "--json",
    ])
    .unwrap();
    assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/burn")));
    assert_eq!(cli.config, PathBuf::from("alt.toml"));
    assert!(cli.json);
    assert!(matches!(cli.command, Command::Steps(StepsCommand::Show)));
  }

  #[test]
  fn tilde_expands_against_home() {
    let expanded = expand_tilde(Path::new("~/data"));
    if let Ok(home) = std::env::var("HOME") {
      assert_eq!(expanded, PathBuf::from(home).join("data"));
    }
    assert_eq!(expand_tilde(Path::new("/tmp/x")), PathBuf::from("/tmp/x"));
  }
}
