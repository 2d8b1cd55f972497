//! Interview script and question-block parsing.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewMode {
    #[default]
    Individual,
    Group,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseDepth {
    Brief,
    #[default]
    Moderate,
    Detailed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewScript {
    pub questions: Vec<String>,
    #[serde(default)]
    pub interview_mode: InterviewMode,
    #[serde(default)]
    pub response_depth: ResponseDepth,
}

impl InterviewScript {
    /// Build a script from a one-question-per-line text block.
    pub fn from_text(text: &str) -> Self {
        Self {
            questions: parse_questions(text),
            interview_mode: InterviewMode::default(),
            response_depth: ResponseDepth::default(),
        }
    }
}

/// Split a text block into questions: one per line, trimmed, blanks dropped.
pub fn parse_questions(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
