use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "studybuddy")]
#[command(about = "Study tasks and focus sessions that grow a virtual pet")]
#[command(version)]
struct Cli {
    /// Path to the state file (defaults to ~/.studybuddy/state.json)
    #[arg(short, long, global = true)]
    state: Option<PathBuf>,

    /// Path to the config file (defaults to ~/.studybuddy/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default config file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },

    /// Manage study tasks
    Task {
        #[command(subcommand)]
        command: cli::task::TaskCommand,
    },

    /// Run focus and break sessions
    Session {
        #[command(subcommand)]
        command: cli::session::SessionCommand,
    },

    /// Show pet, streak and today's progress
    Status,

    /// List achievements and how close you are to each
    Achievements,

    /// Delete all tasks, sessions and progress
    Reset {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Some(Commands::Init { force }) = cli.command {
        return cli::init::init_command(cli.config, force);
    }

    let ctx = cli::AppContext::open(cli.state, cli.config)?;

    match cli.command {
        Some(Commands::Task { command }) => cli::task::task_command(&ctx, command)?,
        Some(Commands::Session { command }) => cli::session::session_command(&ctx, command)?,
        Some(Commands::Achievements) => cli::achievements::achievements_command(&ctx)?,
        Some(Commands::Reset { yes }) => cli::init::reset_command(&ctx, yes)?,
        Some(Commands::Status) | None => cli::status::status_command(&ctx)?,
        Some(Commands::Init { .. }) => {}
    }

    Ok(())
}
