//! Study engine: persona generation and the interview run.
//!
//! Interviews run sequentially per persona since each answer feeds the
//! next question's prompt.

use synres_shared::{Audience, Interview, Persona, QuestionResponse, Result, StudyRequest, StudyResult};
use tracing::{debug, info};

use crate::config::OllamaConfig;
use crate::ollama::LlmBackend;
use crate::parsers;
use crate::prompts;

/// Generate personas for an audience definition
pub async fn generate_personas(
    llm: &dyn LlmBackend,
    config: &OllamaConfig,
    audience: &Audience,
) -> Result<Vec<Persona>> {
    info!(
        "Generating {} personas for '{}'",
        audience.respondent_count, audience.target_profile
    );

    let prompt = prompts::persona_generation_prompt(
        &audience.target_profile,
        &audience.additional_context,
        audience.respondent_count,
    );
    let response = llm.generate(&prompt, config.persona_temperature).await?;
    let personas = parsers::parse_personas(&response, audience.respondent_count as usize)?;

    info!("Generated {} personas", personas.len());
    Ok(personas)
}

/// Interview one persona with every scripted question
async fn interview_persona(
    llm: &dyn LlmBackend,
    config: &OllamaConfig,
    persona: &Persona,
    concept: &str,
    questions: &[String],
) -> Result<Interview> {
    let mut responses: Vec<QuestionResponse> = Vec::with_capacity(questions.len());

    for (idx, question) in questions.iter().enumerate() {
        let prompt = prompts::interview_prompt(persona, concept, question, &responses);
        let answer = llm.generate(&prompt, config.interview_temperature).await?;
        debug!(
            "{} answered question {}/{}",
            persona.name,
            idx + 1,
            questions.len()
        );
        responses.push(QuestionResponse {
            question: question.clone(),
            response: answer.trim().to_string(),
        });
    }

    Ok(Interview {
        persona_name: persona.name.clone(),
        persona_id: persona.id,
        responses,
    })
}

/// Run the concept test: interview every persona, then summarise
pub async fn run_study(
    llm: &dyn LlmBackend,
    config: &OllamaConfig,
    request: &StudyRequest,
) -> Result<StudyResult> {
    let questions = &request.interview_script.questions;
    info!(
        "Running study: {} personas x {} questions",
        request.personas.len(),
        questions.len()
    );

    let mut interviews = Vec::with_capacity(request.personas.len());
    for persona in &request.personas {
        let interview =
            interview_persona(llm, config, persona, &request.concept.description, questions)
                .await?;
        interviews.push(interview);
    }

    let prompt = prompts::summary_prompt(&request.concept.description, &interviews);
    let response = llm.generate(&prompt, config.summary_temperature).await?;
    let summary = parsers::parse_summary(&response);

    info!("Study complete: {} interviews", interviews.len());
    Ok(StudyResult {
        interviews,
        summary: Some(summary),
    })
}
