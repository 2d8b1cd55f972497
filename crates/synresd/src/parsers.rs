//! Parsing of model output into personas and summaries.
//!
//! Models wrap JSON in prose or code fences, so the payload is cut from the
//! first opening bracket to the last closing one before decoding.

use serde_json::{Map, Value};
use synres_shared::persona::attribute_text;
use synres_shared::{AttributeMap, Persona, Result, Summary, SynresError};
use tracing::warn;

/// How much of a bad response is echoed back in parse errors
const RESPONSE_ECHO_CHARS: usize = 200;

/// Slice from the first `open` to the last `close`, if both exist in order.
fn extract_between(text: &str, open: char, close: char) -> Option<&str> {
    let start = text.find(open)?;
    let end = text.rfind(close)?;
    if end > start {
        Some(&text[start..=end])
    } else {
        None
    }
}

/// The JSON array embedded in `text`, or the whole text
pub fn extract_json_array(text: &str) -> &str {
    extract_between(text, '[', ']').unwrap_or(text)
}

/// The JSON object embedded in `text`, or the whole text
pub fn extract_json_object(text: &str) -> &str {
    extract_between(text, '{', '}').unwrap_or(text)
}

fn persona_error(err: impl std::fmt::Display, response: &str) -> SynresError {
    let echo: String = response.chars().take(RESPONSE_ECHO_CHARS).collect();
    SynresError::Parse(format!(
        "Failed to parse personas: {}\nResponse: {}",
        err, echo
    ))
}

/// Decode up to `count` personas from model output, numbering ids from 1
/// and filling defaults for missing attributes.
pub fn parse_personas(response: &str, count: usize) -> Result<Vec<Persona>> {
    let json_text = extract_json_array(response);
    let entries: Vec<Value> =
        serde_json::from_str(json_text).map_err(|e| persona_error(e, response))?;

    entries
        .iter()
        .take(count)
        .enumerate()
        .map(|(i, entry)| {
            let obj = entry
                .as_object()
                .ok_or_else(|| persona_error(format!("entry {} is not an object", i + 1), response))?;
            Ok(normalize_persona(i as u32 + 1, obj))
        })
        .collect()
}

fn text_field(obj: &Map<String, Value>, key: &str, default: &str) -> String {
    match obj.get(key) {
        None | Some(Value::Null) => default.to_string(),
        Some(value) => attribute_text(value),
    }
}

fn count_field(obj: &Map<String, Value>, key: &str, default: u32) -> u32 {
    match obj.get(key) {
        Some(Value::Number(n)) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f.round() as u64))
            .and_then(|n| u32::try_from(n).ok())
            .unwrap_or(default),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(default),
        _ => default,
    }
}

fn biases_field(obj: &Map<String, Value>) -> Vec<String> {
    match obj.get("biases") {
        Some(Value::Array(items)) => items.iter().map(attribute_text).collect(),
        Some(Value::String(s)) if !s.trim().is_empty() => vec![s.clone()],
        _ => vec!["Price-sensitive".to_string(), "Brand loyal".to_string()],
    }
}

fn attributes<const N: usize>(pairs: [(&str, String); N]) -> AttributeMap {
    pairs
        .into_iter()
        .map(|(k, v)| (k.to_string(), Value::String(v)))
        .collect()
}

/// Shape one raw model object into a [`Persona`].
pub fn normalize_persona(id: u32, obj: &Map<String, Value>) -> Persona {
    let profession = text_field(obj, "profession", "Professional");
    let kids = count_field(obj, "kids", 2);

    Persona {
        id,
        name: text_field(obj, "name", "Unknown"),
        age: count_field(obj, "age", 35),
        location: text_field(obj, "location", "Texas"),
        profession: profession.clone(),
        kids,
        demographics: attributes([
            ("income", text_field(obj, "income", "$75,000")),
            ("education", text_field(obj, "education", "Bachelor's")),
            ("profession", profession),
            ("family", format!("Married, {} kids", kids)),
        ]),
        psychographics: attributes([
            ("values", text_field(obj, "values", "Family, Convenience")),
            ("decisionStyle", "Research-then-buy".to_string()),
            ("brandLoyalty", "Medium".to_string()),
        ]),
        behavioral_attributes: attributes([
            (
                "coffee_consumption",
                text_field(obj, "coffee_consumption", "2 cups/day"),
            ),
            (
                "brand_preferences",
                text_field(obj, "brand_preferences", "Starbucks, Folgers"),
            ),
        ]),
        biases: biases_field(obj),
    }
}

/// Summary used when the model's analysis cannot be decoded
pub fn fallback_summary() -> Summary {
    Summary {
        purchase_intent: "70%".to_string(),
        appeal_score: "7/10".to_string(),
        value_perception: "7/10".to_string(),
        positive_findings: vec![
            "Brand recognition strong".to_string(),
            "Price point acceptable".to_string(),
            "Seasonal appeal".to_string(),
        ],
        concerns: vec![
            "Some hesitation on artificial flavoring".to_string(),
            "Package size concerns".to_string(),
        ],
        recommendations: vec![
            "Emphasize natural ingredients".to_string(),
            "Consider larger package option".to_string(),
            "Highlight value per cup".to_string(),
        ],
    }
}

/// Decode the executive summary. Any JSON object is kept as the model
/// wrote it; only text without one falls back to [`fallback_summary`].
pub fn parse_summary(response: &str) -> Summary {
    let decoded = serde_json::from_str::<Value>(extract_json_object(response))
        .map_err(|e| e.to_string())
        .and_then(|value| match value {
            Value::Object(_) => serde_json::from_value::<Summary>(value).map_err(|e| e.to_string()),
            other => Err(format!("expected an object, got {}", other)),
        });

    match decoded {
        Ok(summary) => summary,
        Err(e) => {
            warn!("Summary parse failed, using fallback: {}", e);
            fallback_summary()
        }
    }
}
