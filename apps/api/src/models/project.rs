use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A metric value as shown on a project card: either free text ("89%")
/// or a bare number (195).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum MetricValue {
    Number(f64),
    Text(String),
}

impl From<&str> for MetricValue {
    fn from(value: &str) -> Self {
        MetricValue::Text(value.to_string())
    }
}

impl From<f64> for MetricValue {
    fn from(value: f64) -> Self {
        MetricValue::Number(value)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectImage {
    pub src: String,
    /// Never empty; enforced by the catalog tests.
    pub alt: String,
    pub width: u32,
    pub height: u32,
}

/// One showcased project. `slug` is the primary key across the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub title: String,
    pub slug: String,
    pub summary: String,
    pub problem: String,
    pub role: String,
    pub stack: Vec<String>,
    pub approach: Vec<String>,
    pub results: Vec<String>,
    pub metrics: BTreeMap<String, MetricValue>,
    pub repo_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,
    pub images: Vec<ProjectImage>,
    /// Case-sensitive labels used for AND-filtering.
    pub tags: Vec<String>,
    pub date: NaiveDate,
}

impl ProjectRecord {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Demo link when published, otherwise the repository.
    pub fn primary_url(&self) -> &str {
        self.demo_url.as_deref().unwrap_or(&self.repo_url)
    }
}
