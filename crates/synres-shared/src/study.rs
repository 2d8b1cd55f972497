//! Concept, study request and study result.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::audience::Audience;
use crate::persona::{attribute_text, Persona};
use crate::script::InterviewScript;

/// The product concept being tested
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Concept {
    pub description: String,
    #[serde(default)]
    pub price_point: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyRequest {
    pub audience: Audience,
    pub personas: Vec<Persona>,
    pub concept: Concept,
    pub interview_script: InterviewScript,
}

/// One question and the persona's answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionResponse {
    pub question: String,
    pub response: String,
}

/// Transcript of one persona's interview
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interview {
    pub persona_name: String,
    pub persona_id: u32,
    #[serde(default)]
    pub responses: Vec<QuestionResponse>,
}

/// Executive summary. Every field defaults and accepts whatever JSON the
/// model produced (numbers, strings, single items) so the analysis is shown
/// as returned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    #[serde(default, deserialize_with = "display_text")]
    pub purchase_intent: String,
    #[serde(default, deserialize_with = "display_text")]
    pub appeal_score: String,
    #[serde(default, deserialize_with = "display_text")]
    pub value_perception: String,
    #[serde(default, deserialize_with = "display_list")]
    pub positive_findings: Vec<String>,
    #[serde(default, deserialize_with = "display_list")]
    pub concerns: Vec<String>,
    #[serde(default, deserialize_with = "display_list")]
    pub recommendations: Vec<String>,
}

/// Any JSON value as display text: `7.5` -> "7.5", `"78%"` -> "78%"
fn display_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(|v| attribute_text(&v))
}

/// A JSON list as display lines; a lone value becomes one line
fn display_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => Vec::new(),
        Value::Array(items) => items.iter().map(attribute_text).collect(),
        Value::String(s) if s.trim().is_empty() => Vec::new(),
        other => vec![attribute_text(&other)],
    })
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyResult {
    #[serde(default)]
    pub interviews: Vec<Interview>,
    #[serde(default)]
    pub summary: Option<Summary>,
}
