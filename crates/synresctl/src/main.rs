//! synresctl - Synthetic Respondents client
//!
//! Runs the concept-testing wizard in the terminal, or talks to the API
//! directly for scripting.

use anyhow::Result;
use clap::{Parser, Subcommand};
use synres_shared::{RespondentCount, DEFAULT_API_URL};
use synresctl::{commands, logging};

#[derive(Parser)]
#[command(name = "synresctl")]
#[command(about = "Synthetic Respondents - concept testing with synthetic personas", long_about = None)]
#[command(version)]
struct Cli {
    /// Base URL of the synresd API
    #[arg(long, global = true, env = "SYNRES_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive concept-testing wizard (default)
    Wizard {
        /// Use built-in personas and canned answers instead of the API
        #[arg(long)]
        demo: bool,
    },

    /// Generate a persona panel and print it
    Personas {
        /// Target audience description
        #[arg(long)]
        profile: String,

        /// Extra audience context
        #[arg(long, default_value = "")]
        context: String,

        /// Number of respondents (3, 5, 8 or 10)
        #[arg(long, default_value = "5", value_parser = parse_count)]
        count: RespondentCount,

        /// Print raw JSON
        #[arg(long)]
        json: bool,
    },

    /// Check the API and its Ollama connection
    Health,
}

fn parse_count(s: &str) -> std::result::Result<RespondentCount, String> {
    s.parse::<u32>()
        .ok()
        .and_then(RespondentCount::from_value)
        .ok_or_else(|| format!("'{}' is not one of 3, 5, 8, 10", s))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Wizard { demo: false }) {
        Commands::Wizard { demo } => commands::wizard(&cli.api_url, demo).await,
        Commands::Personas {
            profile,
            context,
            count,
            json,
        } => {
            logging::init_stderr_logging();
            commands::personas(&cli.api_url, profile, context, count, json).await
        }
        Commands::Health => {
            logging::init_stderr_logging();
            commands::health(&cli.api_url).await
        }
    }
}
