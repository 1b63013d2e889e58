//! The resume -> structured data -> questions pipeline.
//!
//! Two sequential model calls. Round 1 turns raw resume text into a
//! `CandidateProfile`; round 2 builds its prompt from the already-validated
//! profile, so a malformed first response never reaches the second prompt.

use serde::Serialize;
use tracing::warn;

use crate::auth::Identity;
use crate::errors::PipelineError;
use crate::interview::covers::random_cover_image;
use crate::interview::prompts::{QUESTIONS_PROMPT_TEMPLATE, STRUCTURE_PROMPT_TEMPLATE};
use crate::llm_client::sanitize::strip_json_fences;
use crate::llm_client::Completion;
use crate::models::interview::{InterviewRecord, INTERVIEW_TYPE};
use crate::models::profile::CandidateProfile;

/// Target question cardinality. The prompt asks for exactly this many; a
/// well-formed response of a different length is accepted with a warning.
pub const QUESTION_COUNT: usize = 5;

/// Round 1: submit the structuring prompt and parse the response into a
/// `CandidateProfile`. Malformed JSON is a hard failure with the raw text
/// preserved for the server log — never retried, never defaulted.
pub async fn structure_resume(
    llm: &dyn Completion,
    resume_text: &str,
) -> Result<CandidateProfile, PipelineError> {
    let prompt = STRUCTURE_PROMPT_TEMPLATE.replace("{resume_text}", resume_text);
    let raw = llm.complete(&prompt).await?;

    let clean = strip_json_fences(&raw);
    serde_json::from_str(clean).map_err(|_| PipelineError::ModelResponseParse {
        stage: "resume structuring",
        raw: raw.clone(),
    })
}

/// Round 2: submit the question prompt built from profile fields and parse
/// the response as an array of strings. A syntactically valid response of the
/// wrong shape (object, scalar, mixed array) is a `ShapeMismatch`, never
/// coerced into a one-element sequence.
pub async fn generate_questions(
    llm: &dyn Completion,
    profile: &CandidateProfile,
) -> Result<Vec<String>, PipelineError> {
    let level = profile.level.map(|l| l.as_str()).unwrap_or("Unknown");
    let prompt = QUESTIONS_PROMPT_TEMPLATE
        .replace("{skills}", &to_json(&profile.skills))
        .replace("{projects}", &to_json(&profile.projects))
        .replace("{work_experience}", &to_json(&profile.work_experience))
        .replace("{education}", &to_json(&profile.education))
        .replace("{certifications}", &to_json(&profile.certifications))
        .replace("{level}", level);

    let raw = llm.complete(&prompt).await?;

    let clean = strip_json_fences(&raw);
    let value: serde_json::Value =
        serde_json::from_str(clean).map_err(|_| PipelineError::ModelResponseParse {
            stage: "question generation",
            raw: raw.clone(),
        })?;

    let questions = parse_question_list(value).ok_or_else(|| PipelineError::ShapeMismatch {
        reason: "expected a JSON array of strings".to_string(),
        raw: raw.clone(),
    })?;

    if questions.len() != QUESTION_COUNT {
        warn!(
            "question generation returned {} questions, expected {}",
            questions.len(),
            QUESTION_COUNT
        );
    }

    Ok(questions)
}

/// Structural validation for the question response: must be an array and
/// every element must be a string.
fn parse_question_list(value: serde_json::Value) -> Option<Vec<String>> {
    let serde_json::Value::Array(items) = value else {
        return None;
    };
    items
        .into_iter()
        .map(|item| match item {
            serde_json::Value::String(s) => Some(s),
            _ => None,
        })
        .collect()
}

/// Merges profile, questions, and requester identity into the write-once
/// record. The defaulting table for model-omitted fields is applied here and
/// nowhere else: role -> "Candidate", level -> "Unknown", techstack -> empty.
pub fn assemble(
    profile: &CandidateProfile,
    questions: Vec<String>,
    user: &Identity,
) -> InterviewRecord {
    InterviewRecord {
        id: None,
        role: profile
            .full_name
            .clone()
            .unwrap_or_else(|| "Candidate".to_string()),
        kind: INTERVIEW_TYPE.to_string(),
        level: profile
            .level
            .map(|l| l.as_str().to_string())
            .unwrap_or_else(|| "Unknown".to_string()),
        techstack: profile.tech_stack.clone(),
        questions,
        user_id: user.id,
        finalized: true,
        cover_image: random_cover_image().to_string(),
        created_at: chrono::Utc::now(),
    }
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "null".to_string())
}
