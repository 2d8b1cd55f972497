//! Logging for synresctl
//!
//! The wizard owns the terminal, so it logs to a file. The plain
//! subcommands log to stderr.
//!
//! Log file priority:
//! 1. $SYNRES_LOG_FILE (explicit override)
//! 2. $XDG_STATE_HOME/synres/ctl.log
//! 3. ~/.local/state/synres/ctl.log

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const LOG_FILE_ENV: &str = "SYNRES_LOG_FILE";

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Where the wizard writes its log
pub fn log_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(LOG_FILE_ENV) {
        if !path.is_empty() {
            return Some(PathBuf::from(path));
        }
    }

    if let Some(state) = dirs::state_dir() {
        return Some(state.join("synres").join("ctl.log"));
    }

    dirs::home_dir().map(|home| home.join(".local/state/synres/ctl.log"))
}

fn open_log(path: &Path) -> Result<std::fs::File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))
}

/// Send logs to the wizard's log file and return its path. When the file
/// cannot be opened logging stays off, so nothing is drawn over the TUI and
/// the wizard still starts.
pub fn init_file_logging() -> Option<PathBuf> {
    let path = log_path()?;
    let file = match open_log(&path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("synresctl: logging disabled: {:#}", e);
            return None;
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter("info"))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .ok()?;

    Some(path)
}

/// Stderr logging for the non-interactive subcommands
pub fn init_stderr_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter("warn"))
        .with_writer(std::io::stderr)
        .try_init();
}
