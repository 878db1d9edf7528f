use serde::{Deserialize, Serialize};

use crate::catalog::ProjectCatalog;
use crate::models::resume::ResumeDocument;

/// How many résumé projects the home page features.
pub const FEATURED_LIMIT: usize = 3;

/// A résumé project that links through to a catalog page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeaturedProject {
    pub name: String,
    pub slug: String,
    pub blurb: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeaturedProjects {
    pub featured: Vec<FeaturedProject>,
    /// All non-empty résumé projects, for the "view all" link.
    pub total: usize,
}

/// Takes the first `limit` non-empty résumé projects and keeps those whose
/// name matches a catalog title exactly.
pub fn featured_projects(
    doc: &ResumeDocument,
    catalog: &ProjectCatalog,
    limit: usize,
) -> FeaturedProjects {
    let candidates = doc.non_empty_projects();
    let total = candidates.len();

    let featured = candidates
        .into_iter()
        .take(limit)
        .filter_map(|project| {
            let slug = catalog.find_by_title(&project.name)?.slug.clone();
            Some(FeaturedProject {
                slug,
                blurb: project.bullets.first().cloned(),
                url: Some(project.url).filter(|u| !u.is_empty()),
                name: project.name,
            })
        })
        .collect();

    FeaturedProjects { featured, total }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(projects: serde_json::Value) -> ResumeDocument {
        serde_json::from_value(json!({
            "basics": {
                "name": "A", "headline": "", "location": "", "email": "", "phone": "",
                "website": "", "links": []
            },
            "projects": projects
        }))
        .unwrap()
    }

    #[test]
    fn test_links_by_exact_title() {
        let doc = doc(json!([
            {"name": "Quantum BB84", "url": "https://quantum-bb84-demo.vercel.app",
             "bullets": ["Simulated BB84 key exchange"]},
            {"name": "WorldDex", "url": "", "bullets": []}
        ]));
        let result = featured_projects(&doc, &ProjectCatalog::builtin(), FEATURED_LIMIT);

        assert_eq!(result.total, 2);
        assert_eq!(result.featured.len(), 2);
        assert_eq!(result.featured[0].slug, "quantum-bb84");
        assert_eq!(
            result.featured[0].blurb.as_deref(),
            Some("Simulated BB84 key exchange")
        );
        assert_eq!(result.featured[1].url, None);
    }

    #[test]
    fn test_unmatched_names_are_dropped_after_limit() {
        let doc = doc(json!([
            {"name": "Side Quest", "url": "", "bullets": []},
            {"name": "Quantum BB84", "url": "", "bullets": []},
            {"name": "", "url": "", "bullets": []},
            {"name": "quantum bb84", "url": "", "bullets": []},
            {"name": "WorldDex", "url": "", "bullets": []}
        ]));
        let result = featured_projects(&doc, &ProjectCatalog::builtin(), FEATURED_LIMIT);

        // first three non-empty: Side Quest, Quantum BB84, quantum bb84
        assert_eq!(result.total, 4);
        let slugs: Vec<_> = result.featured.iter().map(|f| f.slug.as_str()).collect();
        assert_eq!(slugs, vec!["quantum-bb84"]);
    }
}
