use std::path::PathBuf;

use anyhow::{Context, Result};

/// Identity of the published site, used for canonical URLs and metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    /// Origin without a trailing slash.
    pub base_url: String,
    pub author: String,
    pub tagline: String,
    pub description: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://dashdunmire.dev".to_string(),
            author: "Dash Dunmire".to_string(),
            tagline: "Finance Student • Technology Enthusiast".to_string(),
            description: "Personal portfolio of Dash Dunmire, finance student at The Ohio State University specializing in quantitative finance and technology.".to_string(),
        }
    }
}

impl SiteConfig {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Application configuration loaded from environment variables.
/// Everything has a default; only malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub resume_path: PathBuf,
    pub port: u16,
    pub rust_log: String,
    pub site: SiteConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = SiteConfig::default();

        Ok(Config {
            resume_path: env_or("RESUME_PATH", "data/resume.json").into(),
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            site: SiteConfig {
                base_url: normalize_base_url(&env_or("SITE_URL", &defaults.base_url))?,
                author: env_or("SITE_AUTHOR", &defaults.author),
                tagline: env_or("SITE_TAGLINE", &defaults.tagline),
                description: env_or("SITE_DESCRIPTION", &defaults.description),
            },
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn normalize_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if !(trimmed.starts_with("https://") || trimmed.starts_with("http://")) {
        anyhow::bail!("SITE_URL must be an absolute http(s) URL, got '{raw}'");
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_stripped() {
        assert_eq!(
            normalize_base_url("https://example.dev/").unwrap(),
            "https://example.dev"
        );
    }

    #[test]
    fn test_base_url_must_be_absolute() {
        assert!(normalize_base_url("example.dev").is_err());
    }

    #[test]
    fn test_site_url_joins_paths() {
        let site = SiteConfig::default();
        assert_eq!(site.url("/projects"), "https://dashdunmire.dev/projects");
    }
}
