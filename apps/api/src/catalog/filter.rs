//! Project search and filtering over the catalog, driven by a text query and tag selection.
//!
//! Matching:
//! 1. Text: the lower-cased query is a substring of the lower-cased title,
//!    summary, or any tag. An empty query matches everything.
//! 2. Tags: every selected tag appears verbatim (case-sensitive) in the
//!    record's tags. No selection matches everything.
//! 3. Survivors are sorted newest first; equal dates keep catalog order.
//!
//! Query and selection live with the caller (`ProjectFilter`); nothing here
//! holds state between calls.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::project::ProjectRecord;

/// Past this many projects a listing page should paginate. The engine
/// itself always returns the full result.
pub const PAGINATION_THRESHOLD: usize = 12;

pub fn matches_query(project: &ProjectRecord, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    project.title.to_lowercase().contains(&needle)
        || project.summary.to_lowercase().contains(&needle)
        || project
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(&needle))
}

pub fn matches_tags(project: &ProjectRecord, selected: &BTreeSet<String>) -> bool {
    selected.iter().all(|tag| project.has_tag(tag))
}

/// Filters `catalog` by `query` and `selected` tags, newest first.
pub fn filter_projects<'a>(
    catalog: &'a [ProjectRecord],
    query: &str,
    selected: &BTreeSet<String>,
) -> Vec<&'a ProjectRecord> {
    let mut visible: Vec<&ProjectRecord> = catalog
        .iter()
        .filter(|p| matches_query(p, query) && matches_tags(p, selected))
        .collect();

    // sort_by is stable
    visible.sort_by(|a, b| b.date.cmp(&a.date));
    visible
}

/// Union of all tags in the catalog, deduplicated, ascending.
pub fn tag_vocabulary(catalog: &[ProjectRecord]) -> Vec<String> {
    catalog
        .iter()
        .flat_map(|p| p.tags.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub fn needs_pagination(total: usize) -> bool {
    total > PAGINATION_THRESHOLD
}

// ────────────────────────────────────────────────────────────────────────────
// Caller-side filter state
// ────────────────────────────────────────────────────────────────────────────

/// Search box text plus toggled tags, as owned by a search UI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectFilter {
    query: String,
    selected_tags: BTreeSet<String>,
}

impl ProjectFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(query: impl Into<String>, tags: impl IntoIterator<Item = String>) -> Self {
        Self {
            query: query.into(),
            selected_tags: tags.into_iter().collect(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn selected_tags(&self) -> &BTreeSet<String> {
        &self.selected_tags
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Adds `tag` if absent, removes it if present. Returns whether the tag
    /// is selected afterwards.
    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        if self.selected_tags.remove(tag) {
            false
        } else {
            self.selected_tags.insert(tag.to_string());
            true
        }
    }

    /// Resets query and selection together.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_active(&self) -> bool {
        !self.query.is_empty() || !self.selected_tags.is_empty()
    }

    pub fn apply<'a>(&self, catalog: &'a [ProjectRecord]) -> Vec<&'a ProjectRecord> {
        filter_projects(catalog, &self.query, &self.selected_tags)
    }

    pub fn summarize(&self, shown: usize, total: usize) -> FilterSummary {
        FilterSummary {
            shown,
            total,
            selected_tags: self.selected_tags.iter().cloned().collect(),
        }
    }
}

/// "Showing X of Y projects (filtered by: a, b)".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSummary {
    pub shown: usize,
    pub total: usize,
    pub selected_tags: Vec<String>,
}

impl FilterSummary {
    pub fn label(&self) -> String {
        let mut label = format!("Showing {} of {} projects", self.shown, self.total);
        if !self.selected_tags.is_empty() {
            label.push_str(&format!(
                " (filtered by: {})",
                self.selected_tags.join(", ")
            ));
        }
        label
    }
}
