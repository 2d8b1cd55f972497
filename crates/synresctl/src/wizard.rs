//! Wizard controller: the five-step concept-testing flow.
//!
//! Steps only move forward on an explicit action or a successful backend
//! call. Any step already reached can be selected again, Results only once
//! a study result exists. A failed call never moves the step.

use synres_shared::{Persona, StudyResult};
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    Audience,
    Personas,
    Concept,
    Interview,
    Results,
}

impl Step {
    pub const ALL: [Step; 5] = [
        Step::Audience,
        Step::Personas,
        Step::Concept,
        Step::Interview,
        Step::Results,
    ];

    /// 1-based step number
    pub fn number(self) -> u8 {
        match self {
            Step::Audience => 1,
            Step::Personas => 2,
            Step::Concept => 3,
            Step::Interview => 4,
            Step::Results => 5,
        }
    }

    pub fn from_number(n: u8) -> Option<Step> {
        Self::ALL.into_iter().find(|s| s.number() == n)
    }

    pub fn name(self) -> &'static str {
        match self {
            Step::Audience => "Audience",
            Step::Personas => "Personas",
            Step::Concept => "Concept",
            Step::Interview => "Interview",
            Step::Results => "Results",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultTab {
    #[default]
    Interviews,
    Summary,
}

impl ResultTab {
    pub const ALL: [ResultTab; 2] = [ResultTab::Interviews, ResultTab::Summary];

    pub fn label(self) -> &'static str {
        match self {
            ResultTab::Interviews => "Individual Interviews",
            ResultTab::Summary => "Executive Summary",
        }
    }

    pub fn index(self) -> usize {
        match self {
            ResultTab::Interviews => 0,
            ResultTab::Summary => 1,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ResultTab::Interviews => ResultTab::Summary,
            ResultTab::Summary => ResultTab::Interviews,
        }
    }
}

/// The backend call currently in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    GeneratePersonas,
    RunStudy,
}

impl Request {
    /// Busy label shown while the call runs
    pub fn busy_label(self) -> &'static str {
        match self {
            Request::GeneratePersonas => "Generating Personas...",
            Request::RunStudy => "Running Interviews...",
        }
    }

    /// Step the request is started from
    fn origin(self) -> Step {
        match self {
            Request::GeneratePersonas => Step::Audience,
            Request::RunStudy => Step::Interview,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Wizard {
    step: Step,
    furthest: Step,
    pending: Option<Request>,
    error: Option<String>,
    personas: Vec<Persona>,
    results: Option<StudyResult>,
    result_tab: ResultTab,
    persona_detail: Option<u32>,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    pub fn new() -> Self {
        Self {
            step: Step::Audience,
            furthest: Step::Audience,
            pending: None,
            error: None,
            personas: Vec::new(),
            results: None,
            result_tab: ResultTab::default(),
            persona_detail: None,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<Request> {
        self.pending
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn personas(&self) -> &[Persona] {
        &self.personas
    }

    pub fn results(&self) -> Option<&StudyResult> {
        self.results.as_ref()
    }

    pub fn result_tab(&self) -> ResultTab {
        self.result_tab
    }

    /// Whether `step` can be selected directly
    pub fn can_select(&self, step: Step) -> bool {
        match step {
            Step::Results => self.results.is_some(),
            other => other <= self.furthest,
        }
    }

    /// Steps before the current one are shown as completed
    pub fn is_completed(&self, step: Step) -> bool {
        step < self.step
    }

    fn go_to(&mut self, step: Step) {
        self.step = step;
        if step > self.furthest {
            self.furthest = step;
        }
        self.persona_detail = None;
    }

    /// Jump to a step already reached. Returns whether the step changed.
    pub fn select_step(&mut self, step: Step) -> bool {
        if !self.can_select(step) || step == self.step {
            return false;
        }
        self.go_to(step);
        true
    }

    /// Personas -> Concept
    pub fn continue_to_concept(&mut self) -> bool {
        if self.step != Step::Personas {
            return false;
        }
        self.go_to(Step::Concept);
        true
    }

    /// Concept -> Interview
    pub fn continue_to_interview(&mut self) -> bool {
        if self.step != Step::Concept {
            return false;
        }
        self.go_to(Step::Interview);
        true
    }

    /// Mark a backend call as started: sets the busy flag and clears the
    /// previous error. Refused while another call is in flight or when the
    /// current step does not offer the action.
    pub fn begin_request(&mut self, request: Request) -> bool {
        if self.pending.is_some() || self.step != request.origin() {
            return false;
        }
        self.pending = Some(request);
        self.error = None;
        true
    }

    fn fail(&mut self, message: String) {
        warn!("Request failed: {}", message);
        self.pending = None;
        self.error = Some(message);
    }

    /// Outcome of a generate call. Success replaces the panel and moves to
    /// the Personas step.
    pub fn personas_loaded(&mut self, outcome: Result<Vec<Persona>, String>) {
        match outcome {
            Ok(personas) => {
                info!("Loaded {} personas", personas.len());
                self.pending = None;
                self.personas = personas;
                self.go_to(Step::Personas);
            }
            Err(message) => self.fail(message),
        }
    }

    /// Outcome of a study run. Success stores the result and moves to the
    /// Results step.
    pub fn study_completed(&mut self, outcome: Result<StudyResult, String>) {
        match outcome {
            Ok(result) => {
                info!("Study completed: {} interviews", result.interviews.len());
                self.pending = None;
                self.results = Some(result);
                self.result_tab = ResultTab::default();
                self.go_to(Step::Results);
            }
            Err(message) => self.fail(message),
        }
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Open the detail view for persona `id`; unknown ids are ignored
    pub fn open_persona(&mut self, id: u32) {
        if self.personas.iter().any(|p| p.id == id) {
            self.persona_detail = Some(id);
        }
    }

    pub fn close_persona(&mut self) {
        self.persona_detail = None;
    }

    pub fn persona_detail(&self) -> Option<&Persona> {
        let id = self.persona_detail?;
        self.personas.iter().find(|p| p.id == id)
    }

    pub fn toggle_tab(&mut self) {
        self.result_tab = self.result_tab.toggled();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn persona(id: u32, name: &str) -> Persona {
        serde_json::from_value(serde_json::json!({
            "id": id, "name": name, "age": 30, "location": "Austin, TX",
            "profession": "Nurse", "kids": 1
        }))
        .unwrap()
    }

    fn at_interview() -> Wizard {
        let mut w = Wizard::new();
        assert!(w.begin_request(Request::GeneratePersonas));
        w.personas_loaded(Ok(vec![persona(1, "A B")]));
        assert!(w.continue_to_concept());
        assert!(w.continue_to_interview());
        w
    }

    #[test]
    fn test_step_numbers() {
        for (i, step) in Step::ALL.iter().enumerate() {
            assert_eq!(step.number() as usize, i + 1);
            assert_eq!(Step::from_number(step.number()), Some(*step));
        }
        assert_eq!(Step::from_number(0), None);
        assert_eq!(Step::from_number(6), None);
    }

    #[test]
    fn test_generate_success_moves_to_personas() {
        let mut w = Wizard::new();
        assert!(w.begin_request(Request::GeneratePersonas));
        assert!(w.is_busy());
        assert_eq!(w.step(), Step::Audience);

        w.personas_loaded(Ok(vec![persona(1, "A B"), persona(2, "C D")]));
        assert_eq!(w.step(), Step::Personas);
        assert!(!w.is_busy());
        assert_eq!(w.personas().len(), 2);
    }

    #[test]
    fn test_generate_failure_keeps_step() {
        let mut w = Wizard::new();
        w.begin_request(Request::GeneratePersonas);
        w.personas_loaded(Err("Failed to generate personas".to_string()));

        assert_eq!(w.step(), Step::Audience);
        assert!(!w.is_busy());
        assert_eq!(w.error(), Some("Failed to generate personas"));
    }

    #[test]
    fn test_begin_request_clears_error_and_blocks_second_call() {
        let mut w = Wizard::new();
        w.begin_request(Request::GeneratePersonas);
        w.personas_loaded(Err("boom".to_string()));

        assert!(w.begin_request(Request::GeneratePersonas));
        assert_eq!(w.error(), None);
        assert!(!w.begin_request(Request::GeneratePersonas));
    }

    #[test]
    fn test_request_only_from_its_step() {
        let mut w = Wizard::new();
        assert!(!w.begin_request(Request::RunStudy));
        let mut w = at_interview();
        assert!(!w.begin_request(Request::GeneratePersonas));
        assert!(w.begin_request(Request::RunStudy));
    }

    #[test]
    fn test_run_study_success_moves_to_results() {
        let mut w = at_interview();
        w.begin_request(Request::RunStudy);
        w.study_completed(Ok(StudyResult::default()));

        assert_eq!(w.step(), Step::Results);
        assert!(w.results().is_some());
        assert_eq!(w.result_tab(), ResultTab::Interviews);
    }

    #[test]
    fn test_run_study_failure_keeps_step() {
        let mut w = at_interview();
        w.begin_request(Request::RunStudy);
        w.study_completed(Err("Failed to run study".to_string()));

        assert_eq!(w.step(), Step::Interview);
        assert!(!w.is_busy());
        assert!(w.results().is_none());
        assert!(!w.can_select(Step::Results));
    }

    #[test]
    fn test_select_step_only_reached() {
        let mut w = Wizard::new();
        assert!(!w.select_step(Step::Concept));
        assert_eq!(w.step(), Step::Audience);

        let mut w = at_interview();
        assert!(w.select_step(Step::Audience));
        assert!(w.select_step(Step::Concept));
        assert!(w.select_step(Step::Interview));
        assert!(!w.select_step(Step::Results));
    }

    #[test]
    fn test_continue_only_from_matching_step() {
        let mut w = Wizard::new();
        assert!(!w.continue_to_concept());
        assert!(!w.continue_to_interview());
        assert_eq!(w.step(), Step::Audience);
    }

    #[test]
    fn test_persona_detail() {
        let mut w = Wizard::new();
        w.begin_request(Request::GeneratePersonas);
        w.personas_loaded(Ok(vec![persona(7, "Maria Garcia")]));

        w.open_persona(99);
        assert!(w.persona_detail().is_none());
        w.open_persona(7);
        assert_eq!(w.persona_detail().map(|p| p.name.as_str()), Some("Maria Garcia"));
        w.close_persona();
        assert!(w.persona_detail().is_none());
    }

    #[test]
    fn test_toggle_tab() {
        let mut w = Wizard::new();
        w.toggle_tab();
        assert_eq!(w.result_tab(), ResultTab::Summary);
        w.toggle_tab();
        assert_eq!(w.result_tab(), ResultTab::Interviews);
    }
}
