//! Offline demo backend: five built-in personas and a canned study.

use async_trait::async_trait;
use serde_json::json;
use std::time::Duration;
use synres_shared::{
    Audience, Interview, Persona, QuestionResponse, Result, StudyRequest, StudyResult, Summary,
};

use crate::client::StudyBackend;

/// Pretend latency so the busy state is visible
const DEMO_DELAY: Duration = Duration::from_millis(1500);

pub struct DemoBackend {
    delay: Duration,
}

impl Default for DemoBackend {
    fn default() -> Self {
        Self { delay: DEMO_DELAY }
    }
}

impl DemoBackend {
    /// Backend that answers immediately
    pub fn instant() -> Self {
        Self {
            delay: Duration::ZERO,
        }
    }
}

fn persona(id: u32, name: &str, age: u32, location: &str, profession: &str, kids: u32) -> Persona {
    let attrs = |v: serde_json::Value| v.as_object().cloned().unwrap_or_default();
    Persona {
        id,
        name: name.to_string(),
        age,
        location: location.to_string(),
        profession: profession.to_string(),
        kids,
        demographics: attrs(json!({
            "income": "$72,000",
            "education": "Bachelor's",
            "profession": profession,
            "family": format!("Married, {} kids", kids),
        })),
        psychographics: attrs(json!({
            "values": "Convenience, Quality",
            "decisionStyle": "Research-then-buy",
            "brandLoyalty": "Medium",
        })),
        behavioral_attributes: attrs(json!({
            "coffee_consumption": "2-3 cups/day",
            "brand_preferences": "Keurig + drip, medium roast",
        })),
        biases: vec![
            "Skeptical of \"too good\" deals".to_string(),
            "Influenced by mom friends".to_string(),
            "Price-sensitive but splurges on coffee".to_string(),
        ],
    }
}

/// The built-in panel
pub fn demo_personas() -> Vec<Persona> {
    vec![
        persona(1, "Sarah Martinez", 34, "Austin, TX", "Teacher", 2),
        persona(2, "Maria Garcia", 38, "Houston, TX", "Nurse", 3),
        persona(3, "Jennifer Williams", 32, "Dallas, TX", "Accountant", 1),
        persona(4, "Ashley Thompson", 36, "San Antonio, TX", "Sales Rep", 2),
        persona(5, "Emily Davis", 35, "Fort Worth, TX", "Marketing Manager", 2),
    ]
}

fn canned_answer(question: &str) -> &'static str {
    let q = question.to_lowercase();
    if q.contains("morning") {
        "Honestly? It's chaos. I'm up at 5:45 getting the kids ready for school. My Keurig is my lifeline, I pop in a pod while packing lunches."
    } else if q.contains("impression") {
        "Ooh, pumpkin spice in a K-cup? That's actually tempting. I can't justify $7 at the drive-through anymore, so this is not bad."
    } else if q.contains("price") {
        "That's like 68 cents a cup? Not bad at all, though 22 pods won't last long in my house."
    } else if q.contains("purchase") || q.contains("buy") {
        "Probably, yeah. At least once to try it, and if the kids don't steal them I'd buy again."
    } else {
        "Hmm, I'm not sure. I'd have to see it on the shelf next to what I normally get."
    }
}

/// Canned study over whatever panel and script were submitted
pub fn demo_result(request: &StudyRequest) -> StudyResult {
    let interviews = request
        .personas
        .iter()
        .map(|p| Interview {
            persona_name: p.name.clone(),
            persona_id: p.id,
            responses: request
                .interview_script
                .questions
                .iter()
                .map(|q| QuestionResponse {
                    question: q.clone(),
                    response: canned_answer(q).to_string(),
                })
                .collect(),
        })
        .collect();

    StudyResult {
        interviews,
        summary: Some(Summary {
            purchase_intent: "78%".to_string(),
            appeal_score: "7.2/10".to_string(),
            value_perception: "6.8/10".to_string(),
            positive_findings: vec![
                "Strong brand equity drives initial interest".to_string(),
                "Price-per-pod value proposition resonates".to_string(),
                "Seasonal timing aligns with \"treat yourself\" moments".to_string(),
            ],
            concerns: vec![
                "Some concern about artificial flavoring".to_string(),
                "K-cup count (22) seen as slightly low for family consumption".to_string(),
            ],
            recommendations: vec![
                "Consider 30-count option for heavy-usage households".to_string(),
                "Emphasize \"real pumpkin\" or natural ingredients".to_string(),
                "Bundle promotion with standard roast for variety seekers".to_string(),
            ],
        }),
    }
}

#[async_trait]
impl StudyBackend for DemoBackend {
    async fn generate_personas(&self, audience: &Audience) -> Result<Vec<Persona>> {
        tokio::time::sleep(self.delay).await;
        let mut personas = demo_personas();
        personas.truncate(audience.respondent_count as usize);
        Ok(personas)
    }

    async fn run_study(&self, request: &StudyRequest) -> Result<StudyResult> {
        tokio::time::sleep(self.delay * 2).await;
        Ok(demo_result(request))
    }

    fn describe(&self) -> String {
        "demo data".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use synres_shared::{Concept, InterviewScript, RespondentCount};

    #[tokio::test]
    async fn test_demo_personas_respect_count() {
        let backend = DemoBackend::instant();
        let audience = Audience::new("mothers", "", RespondentCount::Three);
        let personas = backend.generate_personas(&audience).await.unwrap();
        assert_eq!(personas.len(), 3);
        assert_eq!(personas[0].name, "Sarah Martinez");
    }

    #[tokio::test]
    async fn test_demo_result_covers_script() {
        let backend = DemoBackend::instant();
        let request = StudyRequest {
            audience: Audience::new("mothers", "", RespondentCount::Five),
            personas: demo_personas(),
            concept: Concept {
                description: "K-Cup".to_string(),
                price_point: None,
            },
            interview_script: InterviewScript::from_text("Morning?\nWould you buy?"),
        };
        let result = backend.run_study(&request).await.unwrap();
        assert_eq!(result.interviews.len(), 5);
        assert_eq!(result.interviews[4].responses.len(), 2);
        assert!(result.summary.is_some());
    }
}
