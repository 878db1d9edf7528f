// Project catalog: the static project list, its tag vocabulary, and the
// search/filter engine the projects page drives on every keystroke.

pub mod data;
pub mod filter;
pub mod handlers;

use crate::models::project::ProjectRecord;

/// Read-only project list with its tag vocabulary computed once.
#[derive(Debug, Clone)]
pub struct ProjectCatalog {
    projects: Vec<ProjectRecord>,
    tags: Vec<String>,
}

impl ProjectCatalog {
    pub fn new(projects: Vec<ProjectRecord>) -> Self {
        let tags = filter::tag_vocabulary(&projects);
        Self { projects, tags }
    }

    pub fn builtin() -> Self {
        Self::new(data::projects())
    }

    pub fn projects(&self) -> &[ProjectRecord] {
        &self.projects
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn find_by_slug(&self, slug: &str) -> Option<&ProjectRecord> {
        self.projects.iter().find(|p| p.slug == slug)
    }

    pub fn find_by_title(&self, title: &str) -> Option<&ProjectRecord> {
        self.projects.iter().find(|p| p.title == title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_lookup() {
        let catalog = ProjectCatalog::builtin();
        assert_eq!(catalog.len(), 7);
        assert!(!catalog.is_empty());
        assert_eq!(
            catalog.find_by_slug("quantum-bb84").map(|p| p.title.as_str()),
            Some("Quantum BB84")
        );
        assert!(catalog.find_by_slug("missing").is_none());
        assert_eq!(
            catalog.find_by_title("WorldDex").map(|p| p.slug.as_str()),
            Some("worlddex")
        );
        assert_eq!(catalog.tags(), filter::tag_vocabulary(catalog.projects()));
    }
}
