use chrono::NaiveDate;
use serde::Serialize;

use crate::catalog::ProjectCatalog;
use crate::config::SiteConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Weekly,
    Monthly,
}

impl ChangeFrequency {
    fn as_str(&self) -> &'static str {
        match self {
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SitemapEntry {
    pub loc: String,
    pub last_modified: NaiveDate,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

/// Static pages stamped with `today`, then one entry per project dated by
/// the project itself.
pub fn build_sitemap(
    site: &SiteConfig,
    catalog: &ProjectCatalog,
    today: NaiveDate,
) -> Vec<SitemapEntry> {
    let pages = [
        ("", ChangeFrequency::Monthly, 1.0),
        ("/resume", ChangeFrequency::Monthly, 0.8),
        ("/projects", ChangeFrequency::Weekly, 0.9),
    ];

    let mut entries: Vec<SitemapEntry> = pages
        .iter()
        .map(|(path, change_frequency, priority)| SitemapEntry {
            loc: site.url(path),
            last_modified: today,
            change_frequency: *change_frequency,
            priority: *priority,
        })
        .collect();

    entries.extend(catalog.projects().iter().map(|project| SitemapEntry {
        loc: site.url(&format!("/projects/{}", project.slug)),
        last_modified: project.date,
        change_frequency: ChangeFrequency::Monthly,
        priority: 0.7,
    }));

    entries
}

pub fn render_sitemap_xml(entries: &[SitemapEntry]) -> String {
    let mut xml = String::from(concat!(
        r#"<?xml version="1.0" encoding="UTF-8"?>"#,
        "\n",
        r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#,
        "\n",
    ));
    for entry in entries {
        xml.push_str(&format!(
            "  <url>\n    <loc>{}</loc>\n    <lastmod>{}</lastmod>\n    <changefreq>{}</changefreq>\n    <priority>{:.1}</priority>\n  </url>\n",
            entry.loc.replace('&', "&amp;"),
            entry.last_modified,
            entry.change_frequency.as_str(),
            entry.priority
        ));
    }
    xml.push_str("</urlset>\n");
    xml
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    #[test]
    fn test_static_pages_come_first() {
        let entries = build_sitemap(&SiteConfig::default(), &ProjectCatalog::builtin(), today());
        assert_eq!(entries.len(), 3 + 7);
        assert_eq!(entries[0].loc, "https://dashdunmire.dev");
        assert_eq!(entries[0].priority, 1.0);
        assert_eq!(entries[1].loc, "https://dashdunmire.dev/resume");
        assert_eq!(entries[2].change_frequency, ChangeFrequency::Weekly);
        assert!(entries[..3].iter().all(|e| e.last_modified == today()));
    }

    #[test]
    fn test_project_entries_use_project_dates() {
        let entries = build_sitemap(&SiteConfig::default(), &ProjectCatalog::builtin(), today());
        let bb84 = entries
            .iter()
            .find(|e| e.loc.ends_with("/projects/quantum-bb84"))
            .unwrap();
        assert_eq!(bb84.last_modified.to_string(), "2024-05-10");
        assert_eq!(bb84.priority, 0.7);
    }

    #[test]
    fn test_xml_rendering() {
        let entries = build_sitemap(&SiteConfig::default(), &ProjectCatalog::builtin(), today());
        let xml = render_sitemap_xml(&entries);
        assert!(xml.starts_with("<?xml"));
        assert_eq!(xml.matches("<url>").count(), 10);
        assert!(xml.contains("<loc>https://dashdunmire.dev/projects</loc>"));
        assert!(xml.contains("<changefreq>weekly</changefreq>"));
        assert!(xml.contains("<priority>0.9</priority>"));
        assert!(xml.contains("<lastmod>2024-09-05</lastmod>"));
    }
}
