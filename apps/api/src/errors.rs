use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Error taxonomy shared by both pipelines.
///
/// Every stage fails fast and maps directly to an HTTP status. There is no
/// local recovery, no automatic retry of a failed model call, and no partial
/// persistence. The two routes render these errors with different response
/// envelopes, so the status mapping lives here and the body shape lives in
/// the per-route wrappers below.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("{0}")]
    MissingInput(String),

    #[error("File too large. Max allowed size is {max_mib}MB.")]
    PayloadTooLarge { max_mib: usize },

    #[error("Unauthorized")]
    Unauthorized,

    #[error("{0}")]
    UnreadableDocument(String),

    /// Syntactically malformed JSON from the model. The raw text is logged
    /// server-side for diagnosis; it is never fed back for a retry.
    #[error("Invalid JSON in {stage} response")]
    ModelResponseParse { stage: &'static str, raw: String },

    /// Syntactically valid JSON of the wrong shape (e.g. an object where an
    /// array of strings was required). Never coerced.
    #[error("{reason}")]
    ShapeMismatch { reason: String, raw: String },

    #[error("Model call failed: {0}")]
    Llm(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("{0}")]
    Unexpected(#[from] anyhow::Error),
}

impl From<LlmError> for PipelineError {
    fn from(e: LlmError) -> Self {
        PipelineError::Llm(e.to_string())
    }
}

impl PipelineError {
    pub fn status(&self) -> StatusCode {
        match self {
            PipelineError::MissingInput(_)
            | PipelineError::PayloadTooLarge { .. }
            | PipelineError::UnreadableDocument(_) => StatusCode::BAD_REQUEST,
            PipelineError::Unauthorized => StatusCode::UNAUTHORIZED,
            PipelineError::ModelResponseParse { .. }
            | PipelineError::ShapeMismatch { .. }
            | PipelineError::Llm(_)
            | PipelineError::Database(_)
            | PipelineError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Logs the server-side diagnostics for this error. Raw model output is
    /// only ever written to the log, never echoed through this path.
    fn log(&self) {
        match self {
            PipelineError::ModelResponseParse { stage, raw } => {
                tracing::error!("Model parse error during {stage}: {raw}");
            }
            PipelineError::ShapeMismatch { reason, raw } => {
                tracing::error!("Model shape error ({reason}): {raw}");
            }
            PipelineError::Llm(msg) => tracing::error!("LLM error: {msg}"),
            PipelineError::Database(e) => tracing::error!("Database error: {e}"),
            PipelineError::Unexpected(e) => tracing::error!("Unexpected error: {e:?}"),
            _ => {}
        }
    }
}

/// Interview-route rendering: `{"success": false, "error": <string>}`.
/// Raw model output stays in the server log.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct InterviewError(#[from] pub PipelineError);

impl IntoResponse for InterviewError {
    fn into_response(self) -> Response {
        let err = self.0;
        err.log();

        let message = match &err {
            PipelineError::ShapeMismatch { .. } => "Invalid question JSON format".to_string(),
            other => other.to_string(),
        };

        let body = Json(json!({
            "success": false,
            "error": message,
        }));

        (err.status(), body).into_response()
    }
}

/// ATS-route rendering: a flat `{"error": <string>}` body, with the raw model
/// output exposed on parse failure and an error detail on unexpected failure.
/// This envelope intentionally differs from the interview route's.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct AtsError(#[from] pub PipelineError);

impl IntoResponse for AtsError {
    fn into_response(self) -> Response {
        let err = self.0;
        err.log();

        let status = err.status();
        let body = match &err {
            PipelineError::ModelResponseParse { raw, .. } => json!({
                "error": "Invalid response from model",
                "raw": raw,
            }),
            PipelineError::Llm(_) | PipelineError::Database(_) | PipelineError::Unexpected(_) => {
                json!({
                    "error": "Internal server error",
                    "detail": err.to_string(),
                })
            }
            other => json!({ "error": other.to_string() }),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping_validation_errors_are_400() {
        assert_eq!(
            PipelineError::MissingInput("no file".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            PipelineError::PayloadTooLarge { max_mib: 5 }.status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            PipelineError::UnreadableDocument("unreadable".into()).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_status_mapping_identity_is_401() {
        assert_eq!(
            PipelineError::Unauthorized.status(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn test_status_mapping_model_errors_are_500() {
        let parse = PipelineError::ModelResponseParse {
            stage: "resume structuring",
            raw: "not json".into(),
        };
        assert_eq!(parse.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let shape = PipelineError::ShapeMismatch {
            reason: "expected a JSON array of strings".into(),
            raw: "{}".into(),
        };
        assert_eq!(shape.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_payload_too_large_message_names_the_ceiling() {
        let msg = PipelineError::PayloadTooLarge { max_mib: 5 }.to_string();
        assert!(msg.contains("5MB"));
    }
}
