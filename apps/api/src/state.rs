use std::sync::Arc;

use crate::catalog::ProjectCatalog;
use crate::config::Config;
use crate::resume::ResumeStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Lazily loaded, memoised résumé document.
    pub resume: Arc<ResumeStore>,
    /// Static project list; read-only for the life of the process.
    pub catalog: Arc<ProjectCatalog>,
}
