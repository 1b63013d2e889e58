//! Caller identity resolution.
//!
//! The interview route requires a resolved identity before it will persist
//! anything; the ATS route performs no identity check at all. That asymmetry
//! is deliberate. `AppState` carries an `Arc<dyn IdentityResolver>` so handler
//! tests can stub resolution without a database.

use async_trait::async_trait;
use axum::http::{header::AUTHORIZATION, HeaderMap};
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::PipelineError;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Identity {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

#[async_trait]
pub trait IdentityResolver: Send + Sync {
    /// Resolves the caller from request headers. `Ok(None)` means no identity
    /// could be established, which the interview route maps to 401.
    async fn resolve(&self, headers: &HeaderMap) -> Result<Option<Identity>, PipelineError>;
}

/// Production resolver: bearer session token looked up in Postgres.
pub struct SessionResolver {
    pool: PgPool,
}

impl SessionResolver {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IdentityResolver for SessionResolver {
    async fn resolve(&self, headers: &HeaderMap) -> Result<Option<Identity>, PipelineError> {
        let Some(token) = bearer_token(headers) else {
            return Ok(None);
        };

        let identity: Option<Identity> = sqlx::query_as(
            "SELECT u.id, u.name, u.email
             FROM sessions s
             JOIN users u ON u.id = s.user_id
             WHERE s.token = $1 AND s.expires_at > now()",
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;

        Ok(identity)
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
