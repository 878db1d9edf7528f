use serde::{Deserialize, Serialize};

use crate::models::resume::ResumeDocument;

/// Which résumé sections carry content, for page templates deciding what
/// to render and for startup diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SectionSummary {
    pub present: Vec<String>,
    pub empty: Vec<String>,
    pub has_education: bool,
    pub has_experience: bool,
    pub has_projects: bool,
    pub has_awards: bool,
}

pub fn summarize_sections(doc: &ResumeDocument) -> SectionSummary {
    let sections = [
        ("basics", doc.basics.name.is_empty()),
        ("education", doc.education.is_empty()),
        ("experience", doc.experience.is_empty()),
        ("projects", doc.projects.is_empty()),
        ("skills", doc.skills.is_empty()),
        ("awards", doc.awards.is_empty()),
    ];

    let (empty, present): (Vec<_>, Vec<_>) = sections.iter().partition(|(_, is_empty)| *is_empty);

    SectionSummary {
        present: present.iter().map(|(name, _)| name.to_string()).collect(),
        empty: empty.iter().map(|(name, _)| name.to_string()).collect(),
        has_education: doc.has_education(),
        has_experience: doc.has_experience(),
        has_projects: doc.has_projects(),
        has_awards: doc.has_awards(),
    }
}
