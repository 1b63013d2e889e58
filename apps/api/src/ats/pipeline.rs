//! The resume + job description -> compatibility score pipeline.
//!
//! Same two-call shape as the interview pipeline, but the intermediate
//! artifact is text rather than structured data, and nothing is persisted.

use crate::ats::prompts::{ATS_PROMPT_TEMPLATE, RESUME_PARSE_PROMPT_TEMPLATE};
use crate::ats::report::AtsReport;
use crate::errors::PipelineError;
use crate::llm_client::sanitize::{repair_trailing_commas, strip_json_fences};
use crate::llm_client::Completion;

/// Byte ceiling for uploaded resumes on this route.
pub const MAX_RESUME_BYTES: usize = 5 * 1024 * 1024;
pub const MAX_RESUME_MIB: usize = 5;

/// Runs both model calls and parses the scoring response into an `AtsReport`.
///
/// The scoring response goes through fence stripping and trailing-comma
/// repair before the parse attempt; a parse failure carries the raw text,
/// which this route exposes to the caller.
pub async fn score_resume(
    llm: &dyn Completion,
    resume_text: &str,
    job_description: &str,
) -> Result<AtsReport, PipelineError> {
    let parse_prompt = RESUME_PARSE_PROMPT_TEMPLATE.replace("{resume_text}", resume_text);
    let parsed_resume = llm.complete(&parse_prompt).await?;

    let scoring_prompt = ATS_PROMPT_TEMPLATE
        .replace("{job_description}", job_description)
        .replace("{parsed_resume}", &parsed_resume);
    let raw = llm.complete(&scoring_prompt).await?;

    let clean = repair_trailing_commas(strip_json_fences(&raw));
    let report: AtsReport =
        serde_json::from_str(&clean).map_err(|_| PipelineError::ModelResponseParse {
            stage: "ats scoring",
            raw: raw.clone(),
        })?;

    Ok(report.normalized())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmError;
    use async_trait::async_trait;

    /// Deterministic stand-in for the scoring model: the parse call echoes the
    /// resume section back, and the scoring call counts how many of the fixed
    /// keywords appear in the parsed resume blob. The real model is
    /// non-deterministic and out of scope for unit testing.
    struct KeywordScoreModel {
        keywords: &'static [&'static str],
    }

    #[async_trait]
    impl Completion for KeywordScoreModel {
        async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
            if let Some(resume) = prompt.split("--- PARSED RESUME DATA ---").nth(1) {
                let matches = self
                    .keywords
                    .iter()
                    .filter(|k| resume.contains(**k))
                    .count() as i64;
                let score = 100 * matches / self.keywords.len() as i64;
                return Ok(format!(r#"{{"score": {score}}}"#));
            }
            // parse call: echo the resume section
            let resume = prompt
                .split("--- RESUME TEXT START ---")
                .nth(1)
                .unwrap_or(prompt);
            Ok(resume.to_string())
        }
    }

    struct StaticModel(&'static str);

    #[async_trait]
    impl Completion for StaticModel {
        async fn complete(&self, _prompt: &str) -> Result<String, LlmError> {
            Ok(self.0.to_string())
        }
    }

    #[tokio::test]
    async fn test_keyword_overlap_scores_monotonically() {
        let model = KeywordScoreModel {
            keywords: &["React", "Node.js"],
        };
        let jd = "Requires React, Node.js, 3 years experience";

        let partial = score_resume(&model, "Frontend developer with React", jd)
            .await
            .unwrap();
        let full = score_resume(
            &model,
            "Developer with React and Node.js, 3 years experience",
            jd,
        )
        .await
        .unwrap();

        assert!(partial.score < full.score);
    }

    #[tokio::test]
    async fn test_fenced_response_with_trailing_comma_parses() {
        let model = StaticModel("```json\n{\"score\": 80, \"strengths\": [\"x\",]}\n```");
        let report = score_resume(&model, "resume", "jd").await.unwrap();
        assert_eq!(report.score, 80);
        assert_eq!(report.strengths, vec!["x".to_string()]);
    }

    #[tokio::test]
    async fn test_malformed_response_carries_raw_text() {
        let model = StaticModel("I'd be happy to score this resume!");
        let err = score_resume(&model, "resume", "jd").await.unwrap_err();
        match err {
            PipelineError::ModelResponseParse { stage, raw } => {
                assert_eq!(stage, "ats scoring");
                assert!(raw.contains("happy to score"));
            }
            other => panic!("expected ModelResponseParse, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_overrange_score_is_clamped() {
        let model = StaticModel(r#"{"score": 250}"#);
        let report = score_resume(&model, "resume", "jd").await.unwrap();
        assert_eq!(report.score, 100);
    }
}
