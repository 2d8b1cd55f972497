//! Target audience definition.

use serde::{Deserialize, Serialize};

/// Who the study is about. `respondent_count` travels as a plain integer;
/// the client restricts it to [`RespondentCount`], the server accepts any
/// positive value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Audience {
    pub target_profile: String,
    #[serde(default)]
    pub additional_context: String,
    #[serde(default = "default_respondent_count")]
    pub respondent_count: u32,
}

fn default_respondent_count() -> u32 {
    RespondentCount::default().value()
}

impl Audience {
    pub fn new(
        target_profile: impl Into<String>,
        additional_context: impl Into<String>,
        respondent_count: RespondentCount,
    ) -> Self {
        Self {
            target_profile: target_profile.into(),
            additional_context: additional_context.into(),
            respondent_count: respondent_count.value(),
        }
    }
}

/// Allowed respondent counts offered by the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RespondentCount {
    Three,
    #[default]
    Five,
    Eight,
    Ten,
}

impl RespondentCount {
    pub const ALL: [RespondentCount; 4] = [
        RespondentCount::Three,
        RespondentCount::Five,
        RespondentCount::Eight,
        RespondentCount::Ten,
    ];

    pub fn value(self) -> u32 {
        match self {
            RespondentCount::Three => 3,
            RespondentCount::Five => 5,
            RespondentCount::Eight => 8,
            RespondentCount::Ten => 10,
        }
    }

    pub fn from_value(value: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.value() == value)
    }

    /// Next allowed value, wrapping around
    pub fn next(self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous allowed value, wrapping around
    pub fn prev(self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).unwrap_or(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_respondent_count_cycle() {
        assert_eq!(RespondentCount::Five.next(), RespondentCount::Eight);
        assert_eq!(RespondentCount::Ten.next(), RespondentCount::Three);
        assert_eq!(RespondentCount::Three.prev(), RespondentCount::Ten);
    }

    #[test]
    fn test_from_value_rejects_unlisted() {
        assert_eq!(RespondentCount::from_value(8), Some(RespondentCount::Eight));
        assert_eq!(RespondentCount::from_value(7), None);
    }

    #[test]
    fn test_audience_wire_shape() {
        let audience = Audience::new("30-40 mothers", "busy mornings", RespondentCount::Five);
        let json = serde_json::to_value(&audience).unwrap();
        assert_eq!(json["target_profile"], "30-40 mothers");
        assert_eq!(json["additional_context"], "busy mornings");
        assert_eq!(json["respondent_count"], 5);
    }

    #[test]
    fn test_audience_count_defaults_to_five() {
        let audience: Audience =
            serde_json::from_str(r#"{"target_profile": "dads", "additional_context": ""}"#)
                .unwrap();
        assert_eq!(audience.respondent_count, 5);
    }
}
