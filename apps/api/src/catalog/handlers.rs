//! Axum route handlers for the Projects API.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::catalog::filter::{needs_pagination, FilterSummary, ProjectFilter};
use crate::errors::AppError;
use crate::models::project::ProjectRecord;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct ProjectSearchParams {
    /// Free-text query.
    #[serde(default)]
    pub q: String,
    /// Comma-separated tag labels; all must match.
    #[serde(default)]
    pub tags: Option<String>,
}

impl ProjectSearchParams {
    pub fn into_filter(self) -> ProjectFilter {
        let tags = self
            .tags
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect::<Vec<_>>();
        ProjectFilter::with(self.q, tags)
    }
}

#[derive(Debug, Serialize)]
pub struct ProjectSearchResponse {
    pub projects: Vec<ProjectRecord>,
    pub summary: FilterSummary,
    pub label: String,
    pub available_tags: Vec<String>,
    pub paginate: bool,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/projects?q=&tags=a,b
pub async fn handle_search_projects(
    State(state): State<AppState>,
    Query(params): Query<ProjectSearchParams>,
) -> Json<ProjectSearchResponse> {
    let filter = params.into_filter();
    let catalog = &state.catalog;

    let projects: Vec<ProjectRecord> = filter
        .apply(catalog.projects())
        .into_iter()
        .cloned()
        .collect();
    let summary = filter.summarize(projects.len(), catalog.len());

    tracing::debug!(
        query = filter.query(),
        tags = filter.selected_tags().len(),
        "{}",
        summary.label()
    );

    Json(ProjectSearchResponse {
        label: summary.label(),
        paginate: needs_pagination(catalog.len()),
        available_tags: catalog.tags().to_vec(),
        projects,
        summary,
    })
}

/// GET /api/v1/projects/tags
pub async fn handle_list_tags(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.catalog.tags().to_vec())
}

/// GET /api/v1/projects/:slug
pub async fn handle_get_project(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ProjectRecord>, AppError> {
    state
        .catalog
        .find_by_slug(&slug)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Project '{slug}' not found")))
}
