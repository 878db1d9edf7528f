//! schema.org JSON-LD documents for the site, the author, and projects.

use serde_json::{json, Map, Value};

use crate::config::SiteConfig;
use crate::models::project::ProjectRecord;
use crate::models::resume::ResumeDocument;

const SCHEMA_ORG: &str = "https://schema.org";

pub fn website_json_ld(site: &SiteConfig) -> Value {
    json!({
        "@context": SCHEMA_ORG,
        "@type": "WebSite",
        "name": format!("{} - Portfolio", site.author),
        "description": site.description,
        "url": site.base_url,
        "author": { "@type": "Person", "name": site.author },
        "publisher": { "@type": "Person", "name": site.author },
        "potentialAction": {
            "@type": "SearchAction",
            "target": site.url("/projects?search={search_term_string}"),
            "query-input": "required name=search_term_string"
        }
    })
}

/// Person markup built from the résumé: headline as job title, skills as
/// `knowsAbout`, profile links as `sameAs`, and the most recent school as
/// affiliation.
pub fn person_json_ld(site: &SiteConfig, doc: &ResumeDocument) -> Value {
    let basics = &doc.basics;

    let mut knows_about: Vec<&str> = Vec::new();
    for skill in doc
        .skills
        .languages
        .iter()
        .chain(&doc.skills.frameworks)
        .chain(&doc.skills.other)
    {
        if !knows_about.contains(&skill.as_str()) {
            knows_about.push(skill);
        }
    }

    let mut same_as: Vec<&str> = basics.links.iter().map(|l| l.url.as_str()).collect();
    if !basics.website.is_empty() && !same_as.contains(&basics.website.as_str()) {
        same_as.push(&basics.website);
    }

    let mut person = Map::new();
    person.insert("@context".into(), json!(SCHEMA_ORG));
    person.insert("@type".into(), json!("Person"));
    person.insert("name".into(), json!(basics.name));
    if let Some(first) = basics.name.split_whitespace().next() {
        person.insert("alternateName".into(), json!(first));
    }
    person.insert("jobTitle".into(), json!(basics.headline));
    person.insert("description".into(), json!(site.description));
    person.insert("url".into(), json!(site.base_url));
    person.insert("knowsAbout".into(), json!(knows_about));
    person.insert("sameAs".into(), json!(same_as));
    person.insert(
        "contactPoint".into(),
        json!({
            "@type": "ContactPoint",
            "contactType": "professional",
            "email": basics.email,
            "availableLanguage": "English"
        }),
    );

    if let Some(school) = doc.non_empty_education().first() {
        person.insert(
            "affiliation".into(),
            json!({ "@type": "Organization", "name": school.school }),
        );
        person.insert(
            "alumniOf".into(),
            json!({ "@type": "EducationalOrganization", "name": school.school }),
        );
    }

    Value::Object(person)
}

pub fn project_json_ld(site: &SiteConfig, project: &ProjectRecord) -> Value {
    let date = project.date.to_string();
    let category = if project.has_tag("web") {
        "WebApplication"
    } else {
        "SoftwareApplication"
    };

    let mut doc = json!({
        "@context": SCHEMA_ORG,
        "@type": "SoftwareSourceCode",
        "name": project.title,
        "description": project.summary,
        "author": { "@type": "Person", "name": site.author },
        "programmingLanguage": project.stack,
        "keywords": project.tags.join(", "),
        "codeRepository": project.repo_url,
        "url": project.primary_url(),
        "dateCreated": date,
        "dateModified": date,
        "about": {
            "@type": "Thing",
            "name": project.problem,
            "description": project.problem
        },
        "applicationCategory": category,
        "operatingSystem": "Cross-platform"
    });

    if project.demo_url.is_some() {
        doc["offers"] = json!({
            "@type": "Offer",
            "price": "0",
            "priceCurrency": "USD",
            "availability": "https://schema.org/InStock",
            "validFrom": date
        });
    }

    doc
}

/// Home → Projects → (project).
pub fn breadcrumbs_json_ld(site: &SiteConfig, project: Option<&ProjectRecord>) -> Value {
    let mut items = vec![
        json!({ "@type": "ListItem", "position": 1, "name": "Home", "item": site.base_url }),
        json!({
            "@type": "ListItem",
            "position": 2,
            "name": "Projects",
            "item": site.url("/projects")
        }),
    ];

    if let Some(project) = project {
        items.push(json!({
            "@type": "ListItem",
            "position": 3,
            "name": project.title,
            "item": site.url(&format!("/projects/{}", project.slug))
        }));
    }

    json!({
        "@context": SCHEMA_ORG,
        "@type": "BreadcrumbList",
        "itemListElement": items
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::data::projects;

    fn resume() -> ResumeDocument {
        serde_json::from_value(json!({
            "basics": {
                "name": "Dash Dunmire",
                "headline": "Finance Student",
                "location": "Columbus, OH",
                "email": "dash@example.com",
                "phone": "555-0100",
                "website": "https://dashdunmire.dev",
                "links": [
                    {"label": "GitHub", "url": "https://github.com/Dashhhhhhhh"},
                    {"label": "Site", "url": "https://dashdunmire.dev"}
                ]
            },
            "education": [
                {"school": "The Ohio State University", "degree": "BS", "field": "Finance",
                 "start": "2022-08", "end": "2026-05"}
            ],
            "skills": {"languages": ["Python", "TypeScript"], "frameworks": ["React"],
                       "other": ["Python", "Quantum Computing"]}
        }))
        .unwrap()
    }

    #[test]
    fn test_website_schema() {
        let result = website_json_ld(&SiteConfig::default());
        assert_eq!(result["@context"], "https://schema.org");
        assert_eq!(result["@type"], "WebSite");
        assert_eq!(result["name"], "Dash Dunmire - Portfolio");
        assert_eq!(result["author"]["name"], "Dash Dunmire");
        assert_eq!(result["potentialAction"]["@type"], "SearchAction");
        assert_eq!(
            result["potentialAction"]["target"],
            "https://dashdunmire.dev/projects?search={search_term_string}"
        );
    }

    #[test]
    fn test_person_schema_from_resume() {
        let result = person_json_ld(&SiteConfig::default(), &resume());
        assert_eq!(result["@type"], "Person");
        assert_eq!(result["name"], "Dash Dunmire");
        assert_eq!(result["alternateName"], "Dash");
        assert_eq!(result["jobTitle"], "Finance Student");
        assert_eq!(result["affiliation"]["name"], "The Ohio State University");
        assert_eq!(
            result["knowsAbout"],
            json!(["Python", "TypeScript", "React", "Quantum Computing"])
        );
        assert_eq!(
            result["sameAs"],
            json!(["https://github.com/Dashhhhhhhh", "https://dashdunmire.dev"])
        );
        assert_eq!(result["contactPoint"]["email"], "dash@example.com");
    }

    #[test]
    fn test_person_without_education_has_no_affiliation() {
        let mut doc = resume();
        doc.education.clear();
        let result = person_json_ld(&SiteConfig::default(), &doc);
        assert!(result.get("affiliation").is_none());
        assert!(result.get("alumniOf").is_none());
    }

    #[test]
    fn test_project_schema() {
        let project = &projects()[0];
        let result = project_json_ld(&SiteConfig::default(), project);
        assert_eq!(result["@type"], "SoftwareSourceCode");
        assert_eq!(result["name"], project.title.as_str());
        assert_eq!(result["description"], project.summary.as_str());
        assert_eq!(result["author"]["name"], "Dash Dunmire");
        assert_eq!(result["programmingLanguage"], json!(project.stack));
        assert_eq!(result["codeRepository"], project.repo_url.as_str());
        assert_eq!(result["dateCreated"], "2024-07-20");
        assert_eq!(result["url"], project.primary_url());
        assert_eq!(result["applicationCategory"], "SoftwareApplication");
        assert_eq!(result["offers"]["validFrom"], "2024-07-20");
    }

    #[test]
    fn test_project_without_demo_links_repo_and_has_no_offer() {
        let mut project = projects()[0].clone();
        project.demo_url = None;
        project.tags.push("web".to_string());
        let result = project_json_ld(&SiteConfig::default(), &project);
        assert_eq!(result["url"], project.repo_url.as_str());
        assert!(result.get("offers").is_none());
        assert_eq!(result["applicationCategory"], "WebApplication");
    }

    #[test]
    fn test_breadcrumbs_home_and_projects() {
        let result = breadcrumbs_json_ld(&SiteConfig::default(), None);
        assert_eq!(result["@type"], "BreadcrumbList");
        let items = result["itemListElement"].as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["name"], "Home");
        assert_eq!(items[1]["name"], "Projects");
    }

    #[test]
    fn test_breadcrumbs_with_project() {
        let project = &projects()[0];
        let result = breadcrumbs_json_ld(&SiteConfig::default(), Some(project));
        let items = result["itemListElement"].as_array().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[2]["name"], project.title.as_str());
        assert_eq!(
            items[2]["item"],
            format!("https://dashdunmire.dev/projects/{}", project.slug).as_str()
        );
    }
}
