//! Configuration management for synresd.
//!
//! Loads settings from a TOML file or uses defaults. Lookup order:
//! `--config`, `$SYNRES_CONFIG`, `<config_dir>/synres/config.toml`.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "SYNRES_CONFIG";

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen address
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Origins allowed by CORS (the browser frontends)
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,
}

fn default_bind() -> String {
    "0.0.0.0:8000".to_string()
}

fn default_cors_origins() -> Vec<String> {
    vec![
        "http://localhost:3000".to_string(),
        "http://localhost:5173".to_string(),
    ]
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            cors_origins: default_cors_origins(),
        }
    }
}

/// Ollama connection and sampling configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OllamaConfig {
    /// Model name as shown by `ollama list`
    #[serde(default = "default_model")]
    pub model: String,

    /// Generate endpoint
    #[serde(default = "default_url")]
    pub url: String,

    /// Tags endpoint used for health checks
    #[serde(default = "default_tags_url")]
    pub tags_url: String,

    /// Temperature for persona generation (more diverse)
    #[serde(default = "default_persona_temperature")]
    pub persona_temperature: f32,

    /// Temperature for interview answers
    #[serde(default = "default_interview_temperature")]
    pub interview_temperature: f32,

    /// Temperature for the executive summary (more consistent)
    #[serde(default = "default_summary_temperature")]
    pub summary_temperature: f32,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Timeout for the health check in seconds
    #[serde(default = "default_health_timeout")]
    pub health_timeout_secs: u64,

    /// Maximum tokens per response, model default when unset
    #[serde(default)]
    pub max_tokens: Option<u32>,

    /// Stop sequences, none when unset
    #[serde(default)]
    pub stop: Option<Vec<String>>,

    /// Attempts per generate call
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

fn default_model() -> String {
    "gpt-oss:20b".to_string()
}

fn default_url() -> String {
    "http://localhost:11434/api/generate".to_string()
}

fn default_tags_url() -> String {
    "http://localhost:11434/api/tags".to_string()
}

fn default_persona_temperature() -> f32 {
    0.8
}

fn default_interview_temperature() -> f32 {
    0.8
}

fn default_summary_temperature() -> f32 {
    0.5
}

fn default_timeout() -> u64 {
    120
}

fn default_health_timeout() -> u64 {
    5
}

fn default_max_retries() -> u32 {
    3
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            url: default_url(),
            tags_url: default_tags_url(),
            persona_temperature: default_persona_temperature(),
            interview_temperature: default_interview_temperature(),
            summary_temperature: default_summary_temperature(),
            timeout_secs: default_timeout(),
            health_timeout_secs: default_health_timeout(),
            max_tokens: None,
            stop: None,
            max_retries: default_max_retries(),
        }
    }
}

/// Full daemon configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub ollama: OllamaConfig,
}

impl Config {
    /// Load config. An explicit path must exist and parse; the implicit
    /// locations fall back to defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let env_path = std::env::var(CONFIG_ENV)
            .ok()
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);
        Self::load_with(explicit, env_path, Self::default_path())
    }

    fn load_with(
        explicit: Option<&Path>,
        env_path: Option<PathBuf>,
        default_path: Option<PathBuf>,
    ) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from_path(path);
        }

        if let Some(path) = env_path {
            return Self::load_from_path(&path);
        }

        let Some(path) = default_path else {
            info!("No config directory, using defaults");
            return Ok(Config::default());
        };

        if !path.exists() {
            info!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        Ok(Self::load_from_path(&path).unwrap_or_else(|e| {
            warn!("Invalid config, using defaults: {:#}", e);
            Config::default()
        }))
    }

    /// Load config from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config: Config =
            toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// `<config_dir>/synres/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("synres").join("config.toml"))
    }

    /// Write the default config to `path`
    pub fn save_default(path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(&Config::default())?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        info!("Saved default config to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.bind, "0.0.0.0:8000");
        assert_eq!(config.ollama.model, "gpt-oss:20b");
        assert_eq!(config.ollama.timeout_secs, 120);
        assert_eq!(config.ollama.max_retries, 3);
        assert!((config.ollama.summary_temperature - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_parse_toml_partial() {
        let toml_str = r#"
[ollama]
model = "llama3.1:8b"
max_tokens = 512
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.ollama.model, "llama3.1:8b");
        assert_eq!(config.ollama.max_tokens, Some(512));
        // Defaults for missing fields
        assert_eq!(config.ollama.url, "http://localhost:11434/api/generate");
        assert_eq!(config.server.cors_origins.len(), 2);
    }

    #[test]
    fn test_load_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[server]\nbind = \"127.0.0.1:9000\"\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.server.bind, "127.0.0.1:9000");
    }

    #[test]
    fn test_load_explicit_missing_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load(Some(&dir.path().join("missing.toml"))).is_err());
    }

    #[test]
    fn test_env_path_wins_over_default() {
        let dir = tempfile::tempdir().unwrap();
        let env_path = dir.path().join("env.toml");
        let default_path = dir.path().join("default.toml");
        fs::write(&env_path, "[ollama]\nmodel = \"from-env\"\n").unwrap();
        fs::write(&default_path, "[ollama]\nmodel = \"from-default\"\n").unwrap();

        let config = Config::load_with(None, Some(env_path), Some(default_path)).unwrap();
        assert_eq!(config.ollama.model, "from-env");
    }

    #[test]
    fn test_env_path_missing_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load_with(None, Some(dir.path().join("missing.toml")), None);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_reads_config_env() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("env.toml");
        fs::write(&path, "[server]\nbind = \"127.0.0.1:9100\"\n").unwrap();

        std::env::set_var(CONFIG_ENV, &path);
        let result = Config::load(None);
        std::env::remove_var(CONFIG_ENV);

        assert_eq!(result.unwrap().server.bind, "127.0.0.1:9100");
    }

    #[test]
    fn test_invalid_default_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[ollama\nmodel = ").unwrap();

        let config = Config::load_with(None, None, Some(path)).unwrap();
        assert_eq!(config.ollama.model, "gpt-oss:20b");
        assert_eq!(config.server.bind, "0.0.0.0:8000");
    }

    #[test]
    fn test_missing_default_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_with(None, None, Some(dir.path().join("none.toml"))).unwrap();
        assert_eq!(config.ollama.model, "gpt-oss:20b");

        let config = Config::load_with(None, None, None).unwrap();
        assert_eq!(config.server.cors_origins.len(), 2);
    }

    #[test]
    fn test_save_default_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        Config::save_default(&path).unwrap();

        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config.ollama.model, "gpt-oss:20b");
    }
}
