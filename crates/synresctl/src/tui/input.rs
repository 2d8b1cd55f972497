//! Key handling

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use synres_shared::{Audience, StudyRequest};

use crate::form::Field;
use crate::wizard::{Request, Step};

use super::state::{Target, TuiState};

/// What the event loop must do after a key
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Quit,
    GeneratePersonas(Audience),
    RunStudy(StudyRequest),
}

const RESULTS_PAGE: u16 = 10;

fn start_generate(state: &mut TuiState) -> Effect {
    if state.wizard.begin_request(Request::GeneratePersonas) {
        Effect::GeneratePersonas(state.form.audience())
    } else {
        Effect::None
    }
}

fn start_run(state: &mut TuiState) -> Effect {
    if state.wizard.begin_request(Request::RunStudy) {
        Effect::RunStudy(state.form.study_request(state.wizard.personas()))
    } else {
        Effect::None
    }
}

fn continue_step(state: &mut TuiState) {
    match state.wizard.step() {
        Step::Personas => {
            state.transition(|w| w.continue_to_concept());
        }
        Step::Concept => {
            state.transition(|w| w.continue_to_interview());
        }
        _ => {}
    }
}

/// The focused button was pressed
fn press_action(state: &mut TuiState) -> Effect {
    match state.wizard.step() {
        Step::Audience => start_generate(state),
        Step::Interview => start_run(state),
        _ => {
            continue_step(state);
            Effect::None
        }
    }
}

fn function_step(code: KeyCode) -> Option<Step> {
    match code {
        KeyCode::F(n) => Step::from_number(n),
        _ => None,
    }
}

/// Handle one key event
pub fn handle_key(state: &mut TuiState, key: KeyEvent) -> Effect {
    if key.kind != KeyEventKind::Press {
        return Effect::None;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if ctrl && key.code == KeyCode::Char('c') {
        return Effect::Quit;
    }

    // The detail overlay swallows everything else
    if state.wizard.persona_detail().is_some() {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
            state.wizard.close_persona();
        }
        return Effect::None;
    }

    if let Some(step) = function_step(key.code) {
        state.transition(|w| w.select_step(step));
        return Effect::None;
    }

    if ctrl {
        match key.code {
            KeyCode::Char('g') => return start_generate(state),
            KeyCode::Char('r') => return start_run(state),
            KeyCode::Char('n') => continue_step(state),
            KeyCode::Char('t') => {
                state.wizard.toggle_tab();
                state.scroll = 0;
            }
            KeyCode::Char('u') => {
                if let Some(Target::Field(field)) = state.focused() {
                    state.form.clear(field);
                }
            }
            _ => {}
        }
        return Effect::None;
    }

    match key.code {
        KeyCode::Esc => {
            state.wizard.dismiss_error();
            return Effect::None;
        }
        KeyCode::Tab => {
            state.focus_next();
            return Effect::None;
        }
        KeyCode::BackTab => {
            state.focus_prev();
            return Effect::None;
        }
        _ => {}
    }

    match state.wizard.step() {
        Step::Personas => handle_personas_key(state, key.code),
        Step::Results => {
            handle_results_key(state, key.code);
            Effect::None
        }
        _ => handle_form_key(state, key.code),
    }
}

fn handle_personas_key(state: &mut TuiState, code: KeyCode) -> Effect {
    match code {
        KeyCode::Up | KeyCode::Char('k') => state.select_prev_persona(),
        KeyCode::Down | KeyCode::Char('j') => state.select_next_persona(),
        KeyCode::Enter => state.open_selected_persona(),
        _ => {}
    }
    Effect::None
}

fn handle_results_key(state: &mut TuiState, code: KeyCode) {
    match code {
        KeyCode::Left | KeyCode::Right => {
            state.wizard.toggle_tab();
            state.scroll = 0;
        }
        KeyCode::Up => state.scroll = state.scroll.saturating_sub(1),
        KeyCode::Down => state.scroll = state.scroll.saturating_add(1),
        KeyCode::PageUp => state.scroll = state.scroll.saturating_sub(RESULTS_PAGE),
        KeyCode::PageDown => state.scroll = state.scroll.saturating_add(RESULTS_PAGE),
        KeyCode::Home => state.scroll = 0,
        _ => {}
    }
}

fn handle_form_key(state: &mut TuiState, code: KeyCode) -> Effect {
    match state.focused() {
        Some(Target::Action) => match code {
            KeyCode::Enter => press_action(state),
            _ => Effect::None,
        },
        Some(Target::Field(Field::RespondentCount)) => {
            match code {
                KeyCode::Left => state.form.prev_count(),
                KeyCode::Right => state.form.next_count(),
                KeyCode::Enter => state.focus_next(),
                _ => {}
            }
            Effect::None
        }
        Some(Target::Field(field)) => {
            match code {
                KeyCode::Char(c) => state.form.insert_char(field, c),
                KeyCode::Backspace => state.form.backspace(field),
                KeyCode::Enter if field.is_multiline() => state.form.insert_newline(field),
                KeyCode::Enter => state.focus_next(),
                _ => {}
            }
            Effect::None
        }
        None => Effect::None,
    }
}
