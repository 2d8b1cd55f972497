//! Event loop - terminal setup, key polling and backend calls

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::ops::ControlFlow;
use std::sync::Arc;
use std::time::Duration;
use synres_shared::{Persona, StudyResult};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::client::StudyBackend;

use super::input::{handle_key, Effect};
use super::render::draw_ui;
use super::state::TuiState;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Completion of a backend call, sent back to the UI task
#[derive(Debug)]
pub enum TuiMessage {
    PersonasLoaded(std::result::Result<Vec<Persona>, String>),
    StudyCompleted(std::result::Result<StudyResult, String>),
}

/// Run the wizard until the user quits
pub async fn run(backend: Arc<dyn StudyBackend>) -> Result<()> {
    enable_raw_mode().map_err(|e| {
        anyhow::anyhow!(
            "Failed to enable raw mode: {}. Ensure you're running in a real terminal (TTY).",
            e
        )
    })?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| {
        let _ = disable_raw_mode();
        anyhow::anyhow!("Failed to initialize terminal: {}", e)
    })?;

    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    let mut state = TuiState::new(backend.describe());
    let (tx, mut rx) = mpsc::channel(32);

    info!("Wizard started against {}", state.backend_label);
    let result = run_event_loop(&mut terminal, &mut state, &backend, tx, &mut rx).await;

    // Always restore, even when the loop failed
    let cleanup = restore_terminal(&mut terminal);
    result.and(cleanup)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut TuiState,
    backend: &Arc<dyn StudyBackend>,
    tx: mpsc::Sender<TuiMessage>,
    rx: &mut mpsc::Receiver<TuiMessage>,
) -> Result<()> {
    loop {
        state.tick();

        while let Ok(message) = rx.try_recv() {
            state.apply(message);
        }

        terminal.draw(|f| draw_ui(f, state))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                let effect = handle_key(state, key);
                if dispatch(effect, backend, &tx).is_break() {
                    info!("Wizard closed");
                    break;
                }
            }
        }
    }
    Ok(())
}

/// Start the backend call an effect asks for. The outcome arrives later
/// on `tx`. Breaks on `Effect::Quit`.
pub fn dispatch(
    effect: Effect,
    backend: &Arc<dyn StudyBackend>,
    tx: &mpsc::Sender<TuiMessage>,
) -> ControlFlow<()> {
    match effect {
        Effect::None => {}
        Effect::Quit => return ControlFlow::Break(()),
        Effect::GeneratePersonas(audience) => {
            debug!("Generating {} personas", audience.respondent_count);
            let backend = Arc::clone(backend);
            let tx = tx.clone();
            tokio::spawn(async move {
                let outcome = backend
                    .generate_personas(&audience)
                    .await
                    .map_err(|e| e.to_string());
                if tx.send(TuiMessage::PersonasLoaded(outcome)).await.is_err() {
                    warn!("UI gone before personas arrived");
                }
            });
        }
        Effect::RunStudy(request) => {
            debug!(
                "Running study: {} personas x {} questions",
                request.personas.len(),
                request.interview_script.questions.len()
            );
            let backend = Arc::clone(backend);
            let tx = tx.clone();
            tokio::spawn(async move {
                let outcome = backend.run_study(&request).await.map_err(|e| e.to_string());
                if tx.send(TuiMessage::StudyCompleted(outcome)).await.is_err() {
                    warn!("UI gone before study result arrived");
                }
            });
        }
    }
    ControlFlow::Continue(())
}
