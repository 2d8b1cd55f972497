//! synresd - Synthetic Respondents backend
//!
//! Serves persona generation and study runs over HTTP, backed by a local
//! Ollama model.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use synres_shared::version::version_line;
use synresd::config::Config;
use synresd::ollama::{LlmBackend, OllamaClient};
use synresd::server::{self, AppState};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "synresd")]
#[command(about = "Synthetic Respondents API server", long_about = None)]
#[command(version)]
struct Cli {
    /// Config file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Listen address, overrides the config file
    #[arg(long)]
    bind: Option<String>,

    /// Write the default config to the given path and exit
    #[arg(long, value_name = "PATH")]
    write_default_config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    if let Some(path) = cli.write_default_config {
        Config::save_default(&path)?;
        return Ok(());
    }

    info!("synresd {} starting", version_line());

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(bind) = cli.bind {
        config.server.bind = bind;
    }

    let ollama = OllamaClient::new(config.ollama.clone())?;
    if ollama.is_available().await {
        info!("Ollama reachable, model {}", config.ollama.model);
    } else {
        warn!(
            "Ollama not reachable at {}, requests will fail until it is up",
            config.ollama.tags_url
        );
    }

    let state = AppState::new(config, Arc::new(ollama));
    server::run(state).await
}
