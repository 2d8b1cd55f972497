//! Service status payloads.

use serde::{Deserialize, Serialize};

/// Body of `GET /`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub message: String,
    pub status: String,
}

impl ServiceInfo {
    pub fn running() -> Self {
        Self {
            message: "Synthetic Respondents API".to_string(),
            status: "running".to_string(),
        }
    }
}

/// Body of `GET /health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub ollama: String,
}

impl HealthStatus {
    pub fn from_ollama(connected: bool) -> Self {
        if connected {
            Self {
                status: "healthy".to_string(),
                ollama: "connected".to_string(),
            }
        } else {
            Self {
                status: "unhealthy".to_string(),
                ollama: "disconnected".to_string(),
            }
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}
