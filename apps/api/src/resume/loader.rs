#![allow(dead_code)]

//! Résumé loader: reads the source document once, validates its shape,
//! sorts its sections, and memoises the result for the life of the store.
//!
//! `AppState` holds an `Arc<ResumeStore>` built at startup; tests build
//! their own store over an `InMemoryResumeSource`.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};

use crate::models::resume::{
    ResumeAward, ResumeBasics, ResumeDocument, ResumeEducation, ResumeExperience, ResumeProject,
    ResumeSkills,
};
use crate::resume::error::DataIntegrityError;
use crate::resume::schema::{drop_nulls, validate, RESUME_SCHEMA};
use crate::resume::sorting::{sort_awards, sort_education, sort_experience, sort_projects};

// ────────────────────────────────────────────────────────────────────────────
// Sources
// ────────────────────────────────────────────────────────────────────────────

/// Where the raw résumé JSON comes from. Implement this to swap the
/// backing store without touching the loader or its callers.
#[async_trait]
pub trait ResumeSource: Send + Sync {
    async fn read(&self) -> Result<String, DataIntegrityError>;

    /// Human-readable location, used in errors and logs.
    fn describe(&self) -> String;
}

/// Reads the document from a JSON file on disk.
pub struct FileResumeSource {
    path: PathBuf,
}

impl FileResumeSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ResumeSource for FileResumeSource {
    async fn read(&self) -> Result<String, DataIntegrityError> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| DataIntegrityError::Read {
                source_name: self.describe(),
                source,
            })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// A fixed document held in memory.
pub struct InMemoryResumeSource {
    document: String,
}

impl InMemoryResumeSource {
    pub fn new(document: impl Into<String>) -> Self {
        Self {
            document: document.into(),
        }
    }
}

#[async_trait]
impl ResumeSource for InMemoryResumeSource {
    async fn read(&self) -> Result<String, DataIntegrityError> {
        Ok(self.document.clone())
    }

    fn describe(&self) -> String {
        "<memory>".to_string()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Parsing
// ────────────────────────────────────────────────────────────────────────────

/// Parses, validates, and sorts a raw document. Any problem fails the
/// whole document; there is no partial result.
pub fn parse_resume(raw: &str, source_name: &str) -> Result<ResumeDocument, DataIntegrityError> {
    let mut value: serde_json::Value =
        serde_json::from_str(raw).map_err(|source| DataIntegrityError::Parse {
            source_name: source_name.to_string(),
            source,
        })?;

    let violations = validate(&value, RESUME_SCHEMA);
    if !violations.is_empty() {
        return Err(DataIntegrityError::Schema {
            source_name: source_name.to_string(),
            violations,
        });
    }
    drop_nulls(&mut value);

    let mut document: ResumeDocument =
        serde_json::from_value(value).map_err(|source| DataIntegrityError::Parse {
            source_name: source_name.to_string(),
            source,
        })?;

    sort_education(&mut document.education);
    sort_experience(&mut document.experience);
    sort_projects(&mut document.projects);
    sort_awards(&mut document.awards);

    Ok(document)
}

// ────────────────────────────────────────────────────────────────────────────
// Store
// ────────────────────────────────────────────────────────────────────────────

/// Memoising data-access object over a `ResumeSource`.
///
/// The first successful `load` fills a write-once cell; concurrent first
/// callers wait on the same read. A failed load leaves the cell empty so
/// a later call can retry.
pub struct ResumeStore {
    source: Arc<dyn ResumeSource>,
    cache: OnceCell<Arc<ResumeDocument>>,
}

impl ResumeStore {
    pub fn new(source: Arc<dyn ResumeSource>) -> Self {
        Self {
            source,
            cache: OnceCell::new(),
        }
    }

    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self::new(Arc::new(FileResumeSource::new(path)))
    }

    pub fn is_loaded(&self) -> bool {
        self.cache.initialized()
    }

    pub async fn load(&self) -> Result<Arc<ResumeDocument>, DataIntegrityError> {
        if let Some(cached) = self.cache.get() {
            debug!("Resume cache hit");
            return Ok(Arc::clone(cached));
        }

        let document = self
            .cache
            .get_or_try_init(|| async {
                let source_name = self.source.describe();
                info!("Loading resume from {source_name}");

                let raw = self.source.read().await?;
                let document = parse_resume(&raw, &source_name).map_err(|e| {
                    warn!(
                        "Resume rejected ({} violation(s)): {e}",
                        e.violations().len()
                    );
                    e
                })?;

                info!(
                    "Resume loaded: {} education, {} experience, {} projects, {} awards",
                    document.education.len(),
                    document.experience.len(),
                    document.projects.len(),
                    document.awards.len()
                );
                Ok::<_, DataIntegrityError>(Arc::new(document))
            })
            .await?;

        Ok(Arc::clone(document))
    }

    pub async fn basics(&self) -> Result<ResumeBasics, DataIntegrityError> {
        Ok(self.load().await?.basics.clone())
    }

    pub async fn education(&self) -> Result<Vec<ResumeEducation>, DataIntegrityError> {
        Ok(self.load().await?.education.clone())
    }

    pub async fn experience(&self) -> Result<Vec<ResumeExperience>, DataIntegrityError> {
        Ok(self.load().await?.experience.clone())
    }

    pub async fn projects(&self) -> Result<Vec<ResumeProject>, DataIntegrityError> {
        Ok(self.load().await?.projects.clone())
    }

    pub async fn skills(&self) -> Result<ResumeSkills, DataIntegrityError> {
        Ok(self.load().await?.skills.clone())
    }

    pub async fn awards(&self) -> Result<Vec<ResumeAward>, DataIntegrityError> {
        Ok(self.load().await?.awards.clone())
    }

    pub async fn non_empty_education(&self) -> Result<Vec<ResumeEducation>, DataIntegrityError> {
        Ok(self.load().await?.non_empty_education())
    }

    pub async fn non_empty_experience(
        &self,
    ) -> Result<Vec<ResumeExperience>, DataIntegrityError> {
        Ok(self.load().await?.non_empty_experience())
    }

    pub async fn non_empty_projects(&self) -> Result<Vec<ResumeProject>, DataIntegrityError> {
        Ok(self.load().await?.non_empty_projects())
    }

    pub async fn non_empty_awards(&self) -> Result<Vec<ResumeAward>, DataIntegrityError> {
        Ok(self.load().await?.non_empty_awards())
    }

    pub async fn has_education(&self) -> Result<bool, DataIntegrityError> {
        Ok(self.load().await?.has_education())
    }

    pub async fn has_experience(&self) -> Result<bool, DataIntegrityError> {
        Ok(self.load().await?.has_experience())
    }

    pub async fn has_projects(&self) -> Result<bool, DataIntegrityError> {
        Ok(self.load().await?.has_projects())
    }

    pub async fn has_awards(&self) -> Result<bool, DataIntegrityError> {
        Ok(self.load().await?.has_awards())
    }
}
