//! CLI entry point for crewdesk.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

use crewdesk_app::{AppConfig, Workspace};

mod commands;
mod tui;

/// Workplace screens in the terminal: tasks, attendance, mail, calendar, chat.
#[derive(Parser, Debug)]
#[command(
    name = "crewdesk",
    version,
    about = "crewdesk: tasks, attendance, mail, calendar and chat over sample data"
)]
struct Cli {
    /// Path to crewdesk.toml (defaults to ./crewdesk.toml, then the user
    /// config directory).
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List tasks, optionally narrowed to one status.
    Tasks {
        /// Filter tag: all, pending, in-progress or completed.
        #[arg(long, default_value = "all")]
        filter: String,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Show the attendance log and work-hour totals.
    Attendance {
        /// Filter tag: all, present, late, absent or half-day.
        #[arg(long, default_value = "all")]
        filter: String,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List emails in one folder.
    Email {
        /// Folder: inbox, sent, drafts, spam or trash.
        #[arg(long, default_value = "inbox")]
        folder: String,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Show today's and upcoming meetings.
    Calendar {
        /// Day to treat as today (YYYY-MM-DD, defaults to the current date).
        #[arg(long)]
        date: Option<String>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List conversations, or one conversation's message history.
    Chat {
        /// Conversation id to show the history of.
        #[arg(long)]
        conversation: Option<u32>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print the filter counters of every screen.
    Summary,

    /// Launch interactive terminal UI.
    Tui,
}

/// Output rendering of the listing commands.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    /// Human-readable lines.
    Text,
    /// Pretty-printed JSON records.
    Json,
}

fn main() -> Result<()> {
    let Cli { config, cmd } = Cli::parse();

    if should_install_tracing(&cmd) {
        install_tracing();
    }

    let config = AppConfig::from_path(resolve_config_path(config))?;
    let classifiers = config.classifiers()?;
    let workspace = Workspace::seed()?;

    match cmd {
        Command::Tui => tui::run(workspace, classifiers),
        other => commands::run(&other, &workspace, &classifiers),
    }
}

fn resolve_config_path(explicit: Option<PathBuf>) -> PathBuf {
    if let Some(path) = explicit {
        return path;
    }
    let local = PathBuf::from("crewdesk.toml");
    if local.exists() {
        return local;
    }
    dirs::config_dir()
        .map_or(local, |dir| dir.join("crewdesk").join("crewdesk.toml"))
}

const fn should_install_tracing(cmd: &Command) -> bool {
    // The TUI owns the terminal; the event loop silences tracing itself.
    !matches!(cmd, Command::Tui)
}

fn install_tracing() {
    let filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_span_events(FmtSpan::NONE)
        .compact()
        .try_init();
}
