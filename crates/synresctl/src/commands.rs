//! Non-interactive subcommands

use anyhow::{Context, Result};
use std::sync::Arc;
use synres_shared::{Audience, RespondentCount};
use tracing::info;

use crate::client::{ApiClient, StudyBackend};
use crate::demo::DemoBackend;
use crate::logging;
use crate::output;
use crate::tui;

/// Open the wizard against the API, or the built-in demo data
pub async fn wizard(api_url: &str, demo: bool) -> Result<()> {
    if let Some(path) = logging::init_file_logging() {
        info!("Logging to {}", path.display());
    }

    let backend: Arc<dyn StudyBackend> = if demo {
        Arc::new(DemoBackend::default())
    } else {
        Arc::new(ApiClient::new(api_url))
    };
    tui::run(backend).await
}

/// Generate a panel once and print it
pub async fn personas(
    api_url: &str,
    profile: String,
    context: String,
    count: RespondentCount,
    json: bool,
) -> Result<()> {
    let client = ApiClient::new(api_url);
    let audience = Audience::new(profile, context, count);
    let personas = client
        .generate_personas(&audience)
        .await
        .context("Persona generation failed")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&personas)?);
    } else {
        output::print_personas(&personas);
    }
    Ok(())
}

/// Check the API and its Ollama connection. Fails when unhealthy.
pub async fn health(api_url: &str) -> Result<()> {
    let client = ApiClient::new(api_url);
    let status = client
        .health()
        .await
        .with_context(|| format!("Cannot reach {}", client.base_url()))?;

    println!("{}", output::format_health(client.base_url(), &status));
    if !status.is_healthy() {
        anyhow::bail!("Backend is unhealthy (ollama {})", status.ollama);
    }
    Ok(())
}
