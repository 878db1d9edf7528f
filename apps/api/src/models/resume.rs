use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResumeLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResumeBasics {
    pub name: String,
    pub headline: String,
    pub location: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub links: Vec<ResumeLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResumeEducation {
    pub school: String,
    pub degree: String,
    pub field: String,
    pub start: String,
    pub end: String,
    #[serde(default)]
    pub details: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResumeExperience {
    pub company: String,
    pub role: String,
    pub location: String,
    pub start: String,
    pub end: String,
    #[serde(default)]
    pub bullets: Vec<String>,
}

/// Résumé-side project entry. Looser than `ProjectRecord`; joined to the
/// catalog only by `name == title`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResumeProject {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ResumeSkills {
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub frameworks: Vec<String>,
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default)]
    pub other: Vec<String>,
}

impl ResumeSkills {
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
            && self.frameworks.is_empty()
            && self.tools.is_empty()
            && self.other.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResumeAward {
    pub title: String,
    pub issuer: String,
    pub date: String,
    pub notes: String,
}

/// The whole résumé. Collections are never absent: a missing section
/// deserializes to an empty one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResumeDocument {
    pub basics: ResumeBasics,
    #[serde(default)]
    pub education: Vec<ResumeEducation>,
    #[serde(default)]
    pub experience: Vec<ResumeExperience>,
    #[serde(default)]
    pub projects: Vec<ResumeProject>,
    #[serde(default)]
    pub skills: ResumeSkills,
    #[serde(default)]
    pub awards: Vec<ResumeAward>,
}

impl ResumeDocument {
    pub fn non_empty_education(&self) -> Vec<ResumeEducation> {
        self.education
            .iter()
            .filter(|e| !e.school.is_empty() && !e.degree.is_empty())
            .cloned()
            .collect()
    }

    pub fn non_empty_experience(&self) -> Vec<ResumeExperience> {
        self.experience
            .iter()
            .filter(|e| !e.company.is_empty() && !e.role.is_empty())
            .cloned()
            .collect()
    }

    pub fn non_empty_projects(&self) -> Vec<ResumeProject> {
        self.projects
            .iter()
            .filter(|p| !p.name.is_empty())
            .cloned()
            .collect()
    }

    pub fn non_empty_awards(&self) -> Vec<ResumeAward> {
        self.awards
            .iter()
            .filter(|a| !a.title.is_empty() && !a.issuer.is_empty())
            .cloned()
            .collect()
    }

    pub fn has_education(&self) -> bool {
        self.education
            .iter()
            .any(|e| !e.school.is_empty() && !e.degree.is_empty())
    }

    pub fn has_experience(&self) -> bool {
        self.experience
            .iter()
            .any(|e| !e.company.is_empty() && !e.role.is_empty())
    }

    pub fn has_projects(&self) -> bool {
        self.projects.iter().any(|p| !p.name.is_empty())
    }

    pub fn has_awards(&self) -> bool {
        self.awards
            .iter()
            .any(|a| !a.title.is_empty() && !a.issuer.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn document() -> ResumeDocument {
        serde_json::from_value(json!({
            "basics": {
                "name": "A", "headline": "B", "location": "C", "email": "d@e.f",
                "phone": "1", "website": "https://a.dev", "links": []
            },
            "education": [
                {"school": "", "degree": "BS", "field": "", "start": "2020", "end": "2024"},
                {"school": "OSU", "degree": "BS", "field": "Finance", "start": "2022", "end": "2026"}
            ],
            "experience": [
                {"company": "Acme", "role": "", "location": "", "start": "2023", "end": "2023"}
            ],
            "projects": [
                {"name": "", "url": "", "bullets": ["orphan"]},
                {"name": "WorldDex", "url": "https://worlddex.vercel.app"}
            ],
            "awards": [
                {"title": "Dean's List", "issuer": "OSU", "date": "2023", "notes": ""}
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let doc = document();
        assert!(doc.skills.is_empty());
        assert!(doc.projects[1].bullets.is_empty());
    }

    #[test]
    fn test_non_empty_education_requires_school_and_degree() {
        let education = document().non_empty_education();
        assert_eq!(education.len(), 1);
        assert_eq!(education[0].school, "OSU");
    }

    #[test]
    fn test_non_empty_projects_never_returns_blank_names() {
        let projects = document().non_empty_projects();
        assert!(!projects.is_empty());
        assert!(projects.iter().all(|p| !p.name.is_empty()));
    }

    #[test]
    fn test_has_flags_follow_non_empty_variants() {
        let doc = document();
        assert!(doc.has_education());
        assert!(!doc.has_experience());
        assert!(doc.has_projects());
        assert!(doc.has_awards());
        assert_eq!(doc.has_experience(), !doc.non_empty_experience().is_empty());
    }
}
