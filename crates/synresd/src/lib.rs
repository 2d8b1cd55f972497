//! synresd library - exposes modules for testing.

pub mod config;
pub mod engine;
pub mod ollama;
pub mod parsers;
pub mod prompts;
pub mod routes;
pub mod server;
