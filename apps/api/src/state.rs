use std::sync::Arc;

use sqlx::PgPool;

use crate::auth::IdentityResolver;
use crate::config::Config;
use crate::llm_client::Completion;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// The model and identity collaborators are trait objects so tests can swap
/// in deterministic stubs.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub llm: Arc<dyn Completion>,
    pub identity: Arc<dyn IdentityResolver>,
    pub config: Config,
}
