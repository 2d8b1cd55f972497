//! TUI state: the wizard, the form, and what has keyboard focus

use crate::form::{Field, FormState};
use crate::wizard::{Step, Wizard};

use super::event_loop::TuiMessage;

/// Something on the current panel that can take focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Field(Field),
    /// The step's primary button
    Action,
}

const AUDIENCE_TARGETS: &[Target] = &[
    Target::Field(Field::TargetProfile),
    Target::Field(Field::AdditionalContext),
    Target::Field(Field::RespondentCount),
    Target::Action,
];
const CONCEPT_TARGETS: &[Target] = &[
    Target::Field(Field::Concept),
    Target::Field(Field::PricePoint),
    Target::Action,
];
const INTERVIEW_TARGETS: &[Target] = &[Target::Field(Field::Questions), Target::Action];

/// Focus order of a step's panel
pub fn targets(step: Step) -> &'static [Target] {
    match step {
        Step::Audience => AUDIENCE_TARGETS,
        Step::Concept => CONCEPT_TARGETS,
        Step::Interview => INTERVIEW_TARGETS,
        // Personas: arrows move through the cards, Ctrl+N continues
        Step::Personas | Step::Results => &[],
    }
}

/// Label of a step's primary button
pub fn action_label(step: Step) -> Option<&'static str> {
    match step {
        Step::Audience => Some("Generate Personas"),
        Step::Personas => Some("Continue to Concept"),
        Step::Concept => Some("Continue to Interview"),
        Step::Interview => Some("Run Concept Test"),
        Step::Results => None,
    }
}

pub struct TuiState {
    pub wizard: Wizard,
    pub form: FormState,
    /// Index into `targets(step)`
    pub focus: usize,
    /// Results scroll offset
    pub scroll: u16,
    pub spinner_frame: usize,
    /// Highlighted persona card
    pub selected_persona: usize,
    /// Where requests go, shown in the header
    pub backend_label: String,
}

impl TuiState {
    pub fn new(backend_label: impl Into<String>) -> Self {
        Self {
            wizard: Wizard::new(),
            form: FormState::default(),
            focus: 0,
            scroll: 0,
            spinner_frame: 0,
            selected_persona: 0,
            backend_label: backend_label.into(),
        }
    }

    pub fn focused(&self) -> Option<Target> {
        targets(self.wizard.step()).get(self.focus).copied()
    }

    pub fn focus_next(&mut self) {
        let count = targets(self.wizard.step()).len();
        if count > 0 {
            self.focus = (self.focus + 1) % count;
        }
    }

    pub fn focus_prev(&mut self) {
        let count = targets(self.wizard.step()).len();
        if count > 0 {
            self.focus = (self.focus + count - 1) % count;
        }
    }

    /// Run a wizard transition and reset per-panel state if the step moved
    pub fn transition<F>(&mut self, f: F) -> bool
    where
        F: FnOnce(&mut Wizard) -> bool,
    {
        let before = self.wizard.step();
        let accepted = f(&mut self.wizard);
        if self.wizard.step() != before {
            self.on_step_changed();
        }
        accepted
    }

    fn on_step_changed(&mut self) {
        self.focus = 0;
        self.scroll = 0;
        if self.selected_persona >= self.wizard.personas().len() {
            self.selected_persona = 0;
        }
    }

    pub fn tick(&mut self) {
        if self.wizard.is_busy() {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
        }
    }

    /// Apply a finished backend call
    pub fn apply(&mut self, message: TuiMessage) {
        match message {
            TuiMessage::PersonasLoaded(outcome) => {
                self.selected_persona = 0;
                self.transition(|w| {
                    w.personas_loaded(outcome);
                    true
                });
            }
            TuiMessage::StudyCompleted(outcome) => {
                self.transition(|w| {
                    w.study_completed(outcome);
                    true
                });
            }
        }
    }

    pub fn select_next_persona(&mut self) {
        let count = self.wizard.personas().len();
        if count > 0 {
            self.selected_persona = (self.selected_persona + 1).min(count - 1);
        }
    }

    pub fn select_prev_persona(&mut self) {
        self.selected_persona = self.selected_persona.saturating_sub(1);
    }

    pub fn open_selected_persona(&mut self) {
        if let Some(id) = self
            .wizard
            .personas()
            .get(self.selected_persona)
            .map(|p| p.id)
        {
            self.wizard.open_persona(id);
        }
    }
}
