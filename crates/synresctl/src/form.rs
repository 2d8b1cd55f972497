//! Editable wizard fields and the request payloads built from them.

use synres_shared::{
    Audience, Concept, InterviewScript, Persona, RespondentCount, StudyRequest,
};

const DEFAULT_TARGET_PROFILE: &str = "30-40 year old mothers in Texas";

const DEFAULT_CONTEXT: &str =
    "Income around $75K, consumes at-home coffee, busy weekday mornings, values convenience";

const DEFAULT_CONCEPT: &str = "Starbucks 22-count K-Cup in Pumpkin Spice flavor
Price point: $14.99
Seasonal limited edition, available Aug-Nov
\"Bring the coffeehouse home with the iconic fall flavor\"";

const DEFAULT_PRICE_POINT: &str = "$14.99";

const DEFAULT_QUESTIONS: &str = "1. Walk me through your typical weekday morning routine.
2. Do you or your family consume coffee? Tell me about your habits.
3. How do you typically purchase coffee for home?
4. [Show concept] What are your first impressions of this product?
5. What would make you choose this over your current coffee?
6. How does the $14.99 price point feel for 22 K-cups?
7. Would you purchase this? Why or why not?
8. Who in your household would be most excited about this?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    TargetProfile,
    AdditionalContext,
    RespondentCount,
    Concept,
    PricePoint,
    Questions,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::TargetProfile => "Target Profile",
            Field::AdditionalContext => "Additional Context",
            Field::RespondentCount => "Number of Respondents",
            Field::Concept => "Product Concept",
            Field::PricePoint => "Price Point",
            Field::Questions => "Interview Questions (one per line)",
        }
    }

    /// Whether Enter inserts a newline
    pub fn is_multiline(self) -> bool {
        matches!(
            self,
            Field::AdditionalContext | Field::Concept | Field::Questions
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub target_profile: String,
    pub additional_context: String,
    pub respondent_count: RespondentCount,
    pub concept: String,
    pub price_point: String,
    pub questions: String,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            target_profile: DEFAULT_TARGET_PROFILE.to_string(),
            additional_context: DEFAULT_CONTEXT.to_string(),
            respondent_count: RespondentCount::default(),
            concept: DEFAULT_CONCEPT.to_string(),
            price_point: DEFAULT_PRICE_POINT.to_string(),
            questions: DEFAULT_QUESTIONS.to_string(),
        }
    }
}

impl FormState {
    /// Text of a field (the count is rendered as its number)
    pub fn value(&self, field: Field) -> String {
        match field {
            Field::RespondentCount => self.respondent_count.value().to_string(),
            other => self.text(other).cloned().unwrap_or_default(),
        }
    }

    fn text(&self, field: Field) -> Option<&String> {
        match field {
            Field::TargetProfile => Some(&self.target_profile),
            Field::AdditionalContext => Some(&self.additional_context),
            Field::Concept => Some(&self.concept),
            Field::PricePoint => Some(&self.price_point),
            Field::Questions => Some(&self.questions),
            Field::RespondentCount => None,
        }
    }

    fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::TargetProfile => Some(&mut self.target_profile),
            Field::AdditionalContext => Some(&mut self.additional_context),
            Field::Concept => Some(&mut self.concept),
            Field::PricePoint => Some(&mut self.price_point),
            Field::Questions => Some(&mut self.questions),
            Field::RespondentCount => None,
        }
    }

    pub fn insert_char(&mut self, field: Field, c: char) {
        if let Some(text) = self.text_mut(field) {
            text.push(c);
        }
    }

    pub fn backspace(&mut self, field: Field) {
        if let Some(text) = self.text_mut(field) {
            text.pop();
        }
    }

    pub fn insert_newline(&mut self, field: Field) {
        if field.is_multiline() {
            self.insert_char(field, '\n');
        }
    }

    pub fn clear(&mut self, field: Field) {
        if let Some(text) = self.text_mut(field) {
            text.clear();
        }
    }

    pub fn next_count(&mut self) {
        self.respondent_count = self.respondent_count.next();
    }

    pub fn prev_count(&mut self) {
        self.respondent_count = self.respondent_count.prev();
    }

    pub fn audience(&self) -> Audience {
        Audience::new(
            self.target_profile.clone(),
            self.additional_context.clone(),
            self.respondent_count,
        )
    }

    pub fn concept(&self) -> Concept {
        let price = self.price_point.trim();
        Concept {
            description: self.concept.clone(),
            price_point: (!price.is_empty()).then(|| price.to_string()),
        }
    }

    pub fn interview_script(&self) -> InterviewScript {
        InterviewScript::from_text(&self.questions)
    }

    pub fn study_request(&self, personas: &[Persona]) -> StudyRequest {
        StudyRequest {
            audience: self.audience(),
            personas: personas.to_vec(),
            concept: self.concept(),
            interview_script: self.interview_script(),
        }
    }
}
