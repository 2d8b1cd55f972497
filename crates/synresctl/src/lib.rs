//! synresctl library - exposes modules for testing

pub mod client;
pub mod commands;
pub mod demo;
pub mod form;
pub mod logging;
pub mod output;
pub mod tui;
pub mod wizard;
