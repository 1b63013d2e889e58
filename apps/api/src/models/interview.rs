use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Tag carried by every record created by the resume pipeline.
pub const INTERVIEW_TYPE: &str = "resume-based";

/// The persisted interview entity. Write-once: assembled in full, appended to
/// the store, never updated. `id` is assigned by the store on append.
#[derive(Debug, Clone, Serialize)]
pub struct InterviewRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub role: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub level: String,
    pub techstack: Vec<String>,
    pub questions: Vec<String>,
    #[serde(rename = "userId")]
    pub user_id: Uuid,
    pub finalized: bool,
    #[serde(rename = "coverImage")]
    pub cover_image: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}
