use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "hulpwijzer")]
#[command(about = "Hulpwijzer CLI - benefits-eligibility session tools", long_about = None)]
struct Cli {
    /// Base directory for config and storage (defaults to $HULPWIJZER_HOME or the platform config dir)
    #[arg(long, global = true)]
    home: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect or change the durable session id
    Session {
        #[command(subcommand)]
        action: SessionAction,
    },
    /// Apply a backend payload to a fresh session and print the result
    Apply {
        /// Payload JSON file, or `-` for stdin
        input: String,
    },
    /// Normalize a JSON array of schemes into programs
    Normalize {
        /// Schemes JSON file, or `-` for stdin
        input: String,
    },
}

#[derive(Subcommand)]
enum SessionAction {
    /// Print the current session id, creating one if needed
    Show,
    /// Replace the session id with a fresh one
    Reset,
    /// Overwrite the session id
    Set { id: String },
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("HULPWIJZER_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Session { action } => {
            let ctx = commands::Context::load(cli.home)?;
            match action {
                SessionAction::Show => commands::session::show(&ctx).await?,
                SessionAction::Reset => commands::session::reset(&ctx).await?,
                SessionAction::Set { id } => commands::session::set(&ctx, id).await?,
            }
        }
        Commands::Apply { input } => {
            let ctx = commands::Context::load(cli.home)?;
            commands::payload::apply(&ctx, &input).await?
        }
        Commands::Normalize { input } => commands::payload::normalize(&input)?,
    }

    Ok(())
}
