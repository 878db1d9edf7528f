use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::models::resume::{
    ResumeAward, ResumeBasics, ResumeDocument, ResumeEducation, ResumeExperience, ResumeProject,
    ResumeSkills,
};
use crate::resume::featured::{featured_projects, FeaturedProjects, FEATURED_LIMIT};
use crate::resume::sections::{summarize_sections, SectionSummary};
use crate::state::AppState;

/// GET /api/v1/resume
pub async fn handle_get_resume(
    State(state): State<AppState>,
) -> Result<Json<ResumeDocument>, AppError> {
    let doc = state.resume.load().await?;
    Ok(Json(doc.as_ref().clone()))
}

/// GET /api/v1/resume/sections
pub async fn handle_sections(
    State(state): State<AppState>,
) -> Result<Json<SectionSummary>, AppError> {
    let doc = state.resume.load().await?;
    Ok(Json(summarize_sections(&doc)))
}

/// GET /api/v1/resume/basics
pub async fn handle_basics(State(state): State<AppState>) -> Result<Json<ResumeBasics>, AppError> {
    Ok(Json(state.resume.basics().await?))
}

/// GET /api/v1/resume/skills
pub async fn handle_skills(State(state): State<AppState>) -> Result<Json<ResumeSkills>, AppError> {
    Ok(Json(state.resume.skills().await?))
}

/// GET /api/v1/resume/education
pub async fn handle_education(
    State(state): State<AppState>,
) -> Result<Json<Vec<ResumeEducation>>, AppError> {
    Ok(Json(state.resume.non_empty_education().await?))
}

/// GET /api/v1/resume/experience
pub async fn handle_experience(
    State(state): State<AppState>,
) -> Result<Json<Vec<ResumeExperience>>, AppError> {
    Ok(Json(state.resume.non_empty_experience().await?))
}

/// GET /api/v1/resume/projects
pub async fn handle_projects(
    State(state): State<AppState>,
) -> Result<Json<Vec<ResumeProject>>, AppError> {
    Ok(Json(state.resume.non_empty_projects().await?))
}

/// GET /api/v1/resume/awards
pub async fn handle_awards(
    State(state): State<AppState>,
) -> Result<Json<Vec<ResumeAward>>, AppError> {
    Ok(Json(state.resume.non_empty_awards().await?))
}

/// GET /api/v1/resume/featured
///
/// Résumé projects cross-linked to catalog pages for the home page.
pub async fn handle_featured(
    State(state): State<AppState>,
) -> Result<Json<FeaturedProjects>, AppError> {
    let doc = state.resume.load().await?;
    Ok(Json(featured_projects(&doc, &state.catalog, FEATURED_LIMIT)))
}
