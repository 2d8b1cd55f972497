//! Version information baked in at build time.

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Short git commit hash, "unknown" outside a checkout
pub const GIT_SHA: &str = env!("SYNRES_GIT_SHA");

/// UTC build date (YYYY-MM-DD)
pub const BUILD_DATE: &str = env!("SYNRES_BUILD_DATE");

/// One-line version banner, e.g. `v0.3.0 (abc1234, 2026-10-17)`
pub fn version_line() -> String {
    format!("v{} ({}, {})", VERSION, GIT_SHA, BUILD_DATE)
}
