//! Append-only persistence for interview records.
//!
//! There is deliberately no update or delete path here: a record is either
//! fully assembled and appended, or not created at all.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::interview::InterviewRecord;

/// Appends a fully-assembled record to the `interviews` collection and
/// returns its assigned identifier.
pub async fn append_interview(pool: &PgPool, record: &InterviewRecord) -> Result<Uuid, sqlx::Error> {
    let id: Uuid = sqlx::query_scalar(
        "INSERT INTO interviews
            (role, type, level, techstack, questions, user_id, finalized, cover_image, created_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
         RETURNING id",
    )
    .bind(&record.role)
    .bind(&record.kind)
    .bind(&record.level)
    .bind(&record.techstack)
    .bind(&record.questions)
    .bind(record.user_id)
    .bind(record.finalized)
    .bind(&record.cover_image)
    .bind(record.created_at)
    .fetch_one(pool)
    .await?;

    Ok(id)
}
