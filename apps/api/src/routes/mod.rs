pub mod health;

use axum::{routing::get, Router};

use crate::catalog::handlers as projects;
use crate::resume::handlers as resume;
use crate::seo::handlers as seo;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Resume API
        .route("/api/v1/resume", get(resume::handle_get_resume))
        .route("/api/v1/resume/sections", get(resume::handle_sections))
        .route("/api/v1/resume/basics", get(resume::handle_basics))
        .route("/api/v1/resume/skills", get(resume::handle_skills))
        .route("/api/v1/resume/education", get(resume::handle_education))
        .route("/api/v1/resume/experience", get(resume::handle_experience))
        .route("/api/v1/resume/projects", get(resume::handle_projects))
        .route("/api/v1/resume/awards", get(resume::handle_awards))
        .route("/api/v1/resume/featured", get(resume::handle_featured))
        // Projects API
        .route("/api/v1/projects", get(projects::handle_search_projects))
        .route("/api/v1/projects/tags", get(projects::handle_list_tags))
        .route("/api/v1/projects/:slug", get(projects::handle_get_project))
        // SEO
        .route("/api/v1/seo/website", get(seo::handle_website))
        .route("/api/v1/seo/person", get(seo::handle_person))
        .route("/api/v1/seo/breadcrumbs", get(seo::handle_breadcrumbs))
        .route("/api/v1/seo/projects/:slug", get(seo::handle_project))
        .route("/api/og", get(seo::handle_og_image))
        .route("/sitemap.xml", get(seo::handle_sitemap))
        .with_state(state)
}
