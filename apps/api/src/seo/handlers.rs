//! Axum route handlers for structured metadata, social cards, and the sitemap.

use axum::{
    extract::{Path, Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::Value;

use crate::errors::AppError;
use crate::seo::jsonld::{breadcrumbs_json_ld, person_json_ld, project_json_ld, website_json_ld};
use crate::seo::og::{parse_tags, render_og_card};
use crate::seo::sitemap::{build_sitemap, render_sitemap_xml};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct BreadcrumbParams {
    pub slug: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct OgParams {
    pub title: Option<String>,
    pub tags: Option<String>,
}

/// GET /api/v1/seo/website
pub async fn handle_website(State(state): State<AppState>) -> Json<Value> {
    Json(website_json_ld(&state.config.site))
}

/// GET /api/v1/seo/person
pub async fn handle_person(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let doc = state.resume.load().await?;
    Ok(Json(person_json_ld(&state.config.site, &doc)))
}

/// GET /api/v1/seo/breadcrumbs?slug=
pub async fn handle_breadcrumbs(
    State(state): State<AppState>,
    Query(params): Query<BreadcrumbParams>,
) -> Result<Json<Value>, AppError> {
    let project = match params.slug.as_deref() {
        Some(slug) => Some(
            state
                .catalog
                .find_by_slug(slug)
                .ok_or_else(|| AppError::NotFound(format!("Project '{slug}' not found")))?,
        ),
        None => None,
    };
    Ok(Json(breadcrumbs_json_ld(&state.config.site, project)))
}

/// GET /api/v1/seo/projects/:slug
pub async fn handle_project(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Value>, AppError> {
    let project = state
        .catalog
        .find_by_slug(&slug)
        .ok_or_else(|| AppError::NotFound(format!("Project '{slug}' not found")))?;
    Ok(Json(project_json_ld(&state.config.site, project)))
}

/// GET /api/og?title=&tags=a,b
///
/// Never fails: missing parameters fall back to the default card.
pub async fn handle_og_image(
    State(state): State<AppState>,
    Query(params): Query<OgParams>,
) -> impl IntoResponse {
    let tags = parse_tags(params.tags.as_deref());
    let svg = render_og_card(&state.config.site, params.title.as_deref(), &tags);
    (
        [
            (header::CONTENT_TYPE, "image/svg+xml"),
            (header::CACHE_CONTROL, "public, max-age=86400"),
        ],
        svg,
    )
}

/// GET /sitemap.xml
pub async fn handle_sitemap(State(state): State<AppState>) -> impl IntoResponse {
    let today = Utc::now().date_naive();
    let entries = build_sitemap(&state.config.site, &state.catalog, today);
    (
        [(header::CONTENT_TYPE, "application/xml")],
        render_sitemap_xml(&entries),
    )
}
