//! CLI entry point for chores.

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use chores_core::FilterMode;
use chores_store_fs::FsStore;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

use config::Config;

mod commands;
mod config;
mod tui;

/// Local todo lists with deadlines, filters, and manual ordering.
#[derive(Parser, Debug)]
#[command(
    name = "chores",
    version,
    about = "chores: local todo lists with deadlines, filters, and manual ordering"
)]
struct Cli {
    /// Data directory override (defaults to the platform data dir).
    #[arg(long)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add a task. Blank text silently does nothing.
    Add {
        /// Task text.
        text: String,
        /// Optional deadline as YYYY-MM-DD.
        #[arg(long)]
        deadline: Option<String>,
    },

    /// List tasks with their canonical indices.
    Ls {
        /// Restrict to all, active, or completed tasks.
        #[arg(long, default_value = "all")]
        filter: FilterMode,
    },

    /// Toggle completion of the task at an index.
    Done {
        /// Canonical index as shown by `ls`.
        index: usize,
    },

    /// Replace the text of the task at an index.
    Edit {
        /// Canonical index as shown by `ls`.
        index: usize,
        /// Replacement text.
        text: String,
    },

    /// Delete the task at an index.
    Rm {
        /// Canonical index as shown by `ls`.
        index: usize,
    },

    /// Move a task to a new position.
    Mv {
        /// Canonical index of the task to move.
        from: usize,
        /// Destination index.
        to: usize,
    },

    /// Launch the interactive terminal UI (the default).
    Tui,
}

fn main() -> Result<()> {
    let Cli { data_dir, cmd } = Cli::parse();
    install_tracing();

    let config = Config::load_default()?;
    let dir = match data_dir.or_else(|| config.data_dir.clone()) {
        Some(dir) => dir,
        None => default_data_dir()?,
    };
    let store = FsStore::open(dir)?;
    commands::run(cmd.unwrap_or(Command::Tui), &store, &config)
}

fn default_data_dir() -> Result<PathBuf> {
    dirs::data_dir()
        .map(|dir| dir.join("chores"))
        .ok_or_else(|| anyhow!("could not determine a data directory; pass --data-dir"))
}

fn install_tracing() {
    // RUST_LOG wins; default is INFO.
    let filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_span_events(FmtSpan::NONE)
        .compact()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_add_command() {
        let cli = Cli::parse_from(["chores", "add", "Buy milk", "--deadline", "2024-06-15"]);
        match cli.cmd {
            Some(Command::Add { text, deadline }) => {
                assert_eq!(text, "Buy milk");
                assert_eq!(deadline.as_deref(), Some("2024-06-15"));
            }
            _ => panic!("expected add command"),
        }
    }

    #[test]
    fn parse_ls_with_filter() {
        let cli = Cli::parse_from(["chores", "ls", "--filter", "active"]);
        match cli.cmd {
            Some(Command::Ls { filter }) => assert_eq!(filter, FilterMode::Active),
            _ => panic!("expected ls command"),
        }
    }

    #[test]
    fn parse_mv_command() {
        let cli = Cli::parse_from(["chores", "--data-dir", "/tmp/x", "mv", "2", "0"]);
        assert_eq!(cli.data_dir.as_deref(), Some(std::path::Path::new("/tmp/x")));
        match cli.cmd {
            Some(Command::Mv { from, to }) => {
                assert_eq!(from, 2);
                assert_eq!(to, 0);
            }
            _ => panic!("expected mv command"),
        }
    }

    #[test]
    fn no_subcommand_defaults_to_tui() {
        let cli = Cli::parse_from(["chores"]);
        assert!(cli.cmd.is_none());
    }
}
