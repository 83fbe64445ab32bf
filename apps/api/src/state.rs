use std::sync::Arc;

use crate::pogs::repository::PogRepository;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pog storage. `PgPogRepository` in production; swapped for an in-memory double in tests.
    pub pogs: Arc<dyn PogRepository>,
}
