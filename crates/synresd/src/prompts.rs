//! Prompt building for persona generation, interviews and the summary.

use synres_shared::persona::attribute_text;
use synres_shared::{AttributeMap, Interview, Persona, QuestionResponse};

/// How many earlier exchanges an interview prompt carries
pub const INTERVIEW_HISTORY: usize = 3;

/// Prompt asking the model for `count` personas as a bare JSON array.
pub fn persona_generation_prompt(target_profile: &str, additional_context: &str, count: u32) -> String {
    format!(
        r#"Generate {count} realistic personas for market research.

Target Audience: {target_profile}
Additional Context: {additional_context}

For each persona, create a JSON object with:
- name (first and last name, realistic for the demographic)
- age (number within target range)
- location (city, state)
- profession (realistic job title)
- kids (number of children)
- income (household income as string like "$72,000")
- education (High School, Associate's, Bachelor's, Master's or PhD)
- values (2-3 core values as comma-separated string)
- coffee_consumption (cups per day as string like "2-3 cups/day")
- brand_preferences (2-3 brands as comma-separated string)
- biases (2-3 specific behavioral biases or quirks as array of strings)

IMPORTANT:
- Make personas diverse but realistic for the target audience
- Include natural variation in attributes
- Biases should be specific and behavioral (e.g. "Skeptical of unfamiliar brands", "Influenced by online reviews")
- Return ONLY a valid JSON array of {count} persona objects
- No markdown formatting, no extra text, just pure JSON

Example format:
[
  {{
    "name": "Sarah Martinez",
    "age": 34,
    "location": "Austin, TX",
    "profession": "Elementary Teacher",
    "kids": 2,
    "income": "$72,000",
    "education": "Bachelor's",
    "values": "Family, Convenience, Quality",
    "coffee_consumption": "2-3 cups/day",
    "brand_preferences": "Starbucks, Folgers, Dunkin",
    "biases": ["Price-sensitive but willing to splurge", "Influenced by mom friends", "Skeptical of too-good deals"]
  }}
]
"#
    )
}

fn attr(map: &AttributeMap, key: &str) -> String {
    map.get(key)
        .map(attribute_text)
        .unwrap_or_else(|| "unknown".to_string())
}

/// Prompt for one persona answering one question in character.
/// Only the last [`INTERVIEW_HISTORY`] exchanges are included.
pub fn interview_prompt(
    persona: &Persona,
    concept: &str,
    question: &str,
    previous: &[QuestionResponse],
) -> String {
    let mut context = String::new();
    if !previous.is_empty() {
        context.push_str("\n\nPrevious conversation:\n");
        let start = previous.len().saturating_sub(INTERVIEW_HISTORY);
        for qa in &previous[start..] {
            context.push_str(&format!("Q: {}\nYour answer: {}\n", qa.question, qa.response));
        }
    }

    let education = attr(&persona.demographics, "education");

    format!(
        r#"You are {name}, a {age}-year-old {profession} from {location}.

YOUR PROFILE:
- Income: {income}
- Education: {education}
- Family: {family}
- Values: {values}
- Coffee habits: {coffee}
- Preferred brands: {brands}
- Your behavioral biases: {biases}

PRODUCT CONCEPT YOU'RE BEING SHOWN:
{concept}
{context}

CURRENT QUESTION:
{question}

INSTRUCTIONS:
- Respond as {name} would naturally respond
- Use vocabulary appropriate to your education level ({education})
- Let your biases influence your answer (e.g. if you're price-sensitive, mention value)
- Be authentic: show hesitation ("hmm", "I'm not sure"), enthusiasm or skepticism as appropriate
- Keep response conversational and realistic (2-4 sentences typically)
- Reference your actual life when relevant (kids, job, morning routine)
- Don't be overly helpful or agreeable, real people have doubts and objections
- Use natural speech patterns, incomplete thoughts and filler words are okay

Respond in first person ONLY as {name}. No quotes around your response, just speak naturally:"#,
        name = persona.name,
        age = persona.age,
        profession = persona.profession,
        location = persona.location,
        income = attr(&persona.demographics, "income"),
        education = education,
        family = attr(&persona.demographics, "family"),
        values = attr(&persona.psychographics, "values"),
        coffee = attr(&persona.behavioral_attributes, "coffee_consumption"),
        brands = attr(&persona.behavioral_attributes, "brand_preferences"),
        biases = persona.biases.join(", "),
        concept = concept,
        context = context,
        question = question,
    )
}

/// Prompt asking for the executive summary as a JSON object.
pub fn summary_prompt(concept: &str, interviews: &[Interview]) -> String {
    let mut interview_text = String::new();
    for interview in interviews {
        interview_text.push_str(&format!("\n{}:\n", interview.persona_name));
        for resp in &interview.responses {
            interview_text.push_str(&format!("Q: {}\nA: {}\n\n", resp.question, resp.response));
        }
    }

    format!(
        r#"Analyze these market research interviews for the following product:

PRODUCT CONCEPT:
{concept}

INTERVIEW DATA:
{interview_text}

Based on these interviews, provide an analysis with:

1. purchase_intent: Estimated percentage likely to buy (as string like "75%")
   - Based on explicit purchase statements and enthusiasm levels

2. appeal_score: Overall appeal rating as string (like "7.5/10")
   - Based on positive vs negative reactions

3. value_perception: How good the value is perceived as string (like "6.8/10")
   - Based on price comments and value-for-money mentions

4. positive_findings: Array of 3 key positive insights (strings)
   - What resonates well with respondents

5. concerns: Array of 2-3 key concerns or warnings (strings)
   - What makes them hesitate, common objections or barriers

6. recommendations: Array of 3 actionable recommendations (strings)
   - Specific suggestions to improve the concept, based on the feedback

FORMAT AS JSON:
{{
  "purchase_intent": "XX%",
  "appeal_score": "X.X/10",
  "value_perception": "X.X/10",
  "positive_findings": ["finding 1", "finding 2", "finding 3"],
  "concerns": ["concern 1", "concern 2"],
  "recommendations": ["recommendation 1", "recommendation 2", "recommendation 3"]
}}

Return ONLY valid JSON, no markdown, no extra text.
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn persona() -> Persona {
        serde_json::from_value(json!({
            "id": 1, "name": "Sarah Martinez", "age": 34, "location": "Austin, TX",
            "profession": "Teacher", "kids": 2,
            "demographics": {"income": "$72,000", "education": "Bachelor's", "family": "Married, 2 kids"},
            "psychographics": {"values": "Family"},
            "behavioral_attributes": {"coffee_consumption": "2 cups/day", "brand_preferences": "Folgers"},
            "biases": ["Price-sensitive", "Brand loyal"]
        }))
        .unwrap()
    }

    fn qa(n: usize) -> QuestionResponse {
        QuestionResponse {
            question: format!("question-{}", n),
            response: format!("answer-{}", n),
        }
    }

    #[test]
    fn test_persona_prompt_mentions_count_and_audience() {
        let prompt = persona_generation_prompt("30-40 mothers", "Texas", 5);
        assert!(prompt.starts_with("Generate 5 realistic personas"));
        assert!(prompt.contains("Target Audience: 30-40 mothers"));
        assert!(prompt.contains("Return ONLY a valid JSON array of 5 persona objects"));
    }

    #[test]
    fn test_interview_prompt_profile() {
        let prompt = interview_prompt(&persona(), "Pumpkin K-Cup", "Would you buy?", &[]);
        assert!(prompt.starts_with("You are Sarah Martinez, a 34-year-old Teacher from Austin, TX."));
        assert!(prompt.contains("- Income: $72,000"));
        assert!(prompt.contains("- Your behavioral biases: Price-sensitive, Brand loyal"));
        assert!(prompt.contains("CURRENT QUESTION:\nWould you buy?"));
        assert!(!prompt.contains("Previous conversation"));
    }

    #[test]
    fn test_interview_prompt_keeps_last_three_exchanges() {
        let previous: Vec<_> = (1..=5).map(qa).collect();
        let prompt = interview_prompt(&persona(), "concept", "next?", &previous);
        assert!(prompt.contains("Previous conversation:"));
        assert!(!prompt.contains("question-1\n"));
        assert!(!prompt.contains("question-2\n"));
        assert!(prompt.contains("Q: question-3\nYour answer: answer-3"));
        assert!(prompt.contains("Q: question-5\nYour answer: answer-5"));
    }

    #[test]
    fn test_interview_prompt_missing_attribute() {
        let mut p = persona();
        p.demographics.remove("income");
        let prompt = interview_prompt(&p, "concept", "q", &[]);
        assert!(prompt.contains("- Income: unknown"));
    }

    #[test]
    fn test_summary_prompt_includes_transcripts() {
        let interviews = vec![Interview {
            persona_name: "Sarah Martinez".to_string(),
            persona_id: 1,
            responses: vec![qa(1)],
        }];
        let prompt = summary_prompt("Pumpkin K-Cup", &interviews);
        assert!(prompt.contains("PRODUCT CONCEPT:\nPumpkin K-Cup"));
        assert!(prompt.contains("\nSarah Martinez:\nQ: question-1\nA: answer-1\n"));
    }
}
