//! Terminal wizard
//!
//! - state: wizard + form + focus, applies backend completions
//! - input: key handling, returns the backend call to start (if any)
//! - event_loop: terminal setup, polling, spawning backend calls
//! - render: layout and per-step panels
//! - personas / results: line builders for persona cards and study results

mod event_loop;
mod input;
pub mod personas;
mod render;
pub mod results;
mod state;

pub use event_loop::{dispatch, run, TuiMessage};
pub use input::{handle_key, Effect};
pub use render::draw_ui;
pub use state::{Target, TuiState};
