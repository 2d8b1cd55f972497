//! Synthetic respondent profile.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Ordered attribute map (key order is kept for display)
pub type AttributeMap = serde_json::Map<String, Value>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Persona {
    pub id: u32,
    pub name: String,
    pub age: u32,
    pub location: String,
    pub profession: String,
    pub kids: u32,
    #[serde(default)]
    pub demographics: AttributeMap,
    #[serde(default)]
    pub psychographics: AttributeMap,
    #[serde(default)]
    pub behavioral_attributes: AttributeMap,
    #[serde(default)]
    pub biases: Vec<String>,
}

impl Persona {
    /// First letter of every name part: "Sarah Martinez" -> "SM"
    pub fn initials(&self) -> String {
        initials(&self.name)
    }
}

/// Initials of an arbitrary display name
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .collect()
}

/// Render an attribute value without JSON quoting for strings.
pub fn attribute_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Array(items) => items
            .iter()
            .map(attribute_text)
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}
