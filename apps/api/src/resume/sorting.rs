//! Deterministic ordering of résumé sections, applied once at load time.
//!
//! All sorts are stable, so entries with equal keys keep their input order.

use chrono::NaiveDate;

use crate::models::resume::{ResumeAward, ResumeEducation, ResumeExperience, ResumeProject};

/// Parses the date formats that appear in résumé data. Returns `None` for
/// anything else ("Present", blanks), which sorts after every dated entry.
pub fn parse_resume_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(date) = NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d") {
        return Some(date);
    }
    if raw.len() == 4 && raw.chars().all(|c| c.is_ascii_digit()) {
        return raw
            .parse::<i32>()
            .ok()
            .and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1));
    }

    // "Aug 2023" / "August 2023"
    let padded = format!("1 {raw}");
    NaiveDate::parse_from_str(&padded, "%d %b %Y")
        .or_else(|_| NaiveDate::parse_from_str(&padded, "%d %B %Y"))
        .ok()
}

fn newest_first<T>(items: &mut [T], key: impl Fn(&T) -> &str) {
    items.sort_by(|a, b| parse_resume_date(key(b)).cmp(&parse_resume_date(key(a))));
}

pub fn sort_education(education: &mut [ResumeEducation]) {
    newest_first(education, |e| &e.start);
}

pub fn sort_experience(experience: &mut [ResumeExperience]) {
    newest_first(experience, |e| &e.start);
}

/// Alphabetical by name, ignoring case.
pub fn sort_projects(projects: &mut [ResumeProject]) {
    projects.sort_by_cached_key(|p| p.name.to_lowercase());
}

pub fn sort_awards(awards: &mut [ResumeAward]) {
    newest_first(awards, |a| &a.date);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn experience(company: &str, start: &str) -> ResumeExperience {
        ResumeExperience {
            company: company.to_string(),
            role: "Analyst".to_string(),
            location: String::new(),
            start: start.to_string(),
            end: "Present".to_string(),
            bullets: vec![],
        }
    }

    fn project(name: &str) -> ResumeProject {
        ResumeProject {
            name: name.to_string(),
            url: String::new(),
            bullets: vec![],
        }
    }

    #[test]
    fn test_parse_supported_formats() {
        let aug = NaiveDate::from_ymd_opt(2023, 8, 1);
        assert_eq!(parse_resume_date("2023-08-01"), aug);
        assert_eq!(parse_resume_date("2023-08"), aug);
        assert_eq!(parse_resume_date("Aug 2023"), aug);
        assert_eq!(parse_resume_date("August 2023"), aug);
        assert_eq!(
            parse_resume_date("2023"),
            NaiveDate::from_ymd_opt(2023, 1, 1)
        );
    }

    #[test]
    fn test_parse_rejects_non_dates() {
        assert_eq!(parse_resume_date("Present"), None);
        assert_eq!(parse_resume_date(""), None);
        assert_eq!(parse_resume_date("2023-13"), None);
    }

    #[test]
    fn test_experience_sorted_newest_first() {
        let mut items = vec![
            experience("A", "2021-06"),
            experience("B", "2024-01"),
            experience("C", "2022-09"),
        ];
        sort_experience(&mut items);
        let order: Vec<_> = items.iter().map(|e| e.company.as_str()).collect();
        assert_eq!(order, vec!["B", "C", "A"]);
    }

    #[test]
    fn test_equal_dates_keep_input_order() {
        let mut items = vec![
            experience("first", "2023-05"),
            experience("newer", "2024-05"),
            experience("second", "May 2023"),
            experience("third", "2023-05-01"),
        ];
        sort_experience(&mut items);
        let order: Vec<_> = items.iter().map(|e| e.company.as_str()).collect();
        assert_eq!(order, vec!["newer", "first", "second", "third"]);
    }

    #[test]
    fn test_output_is_non_increasing_by_start() {
        let mut items = vec![
            experience("a", "2019"),
            experience("b", "2024-02"),
            experience("c", "Jan 2020"),
            experience("d", "2024-02-15"),
            experience("e", "2018-11"),
        ];
        sort_experience(&mut items);
        let dates: Vec<_> = items.iter().map(|e| parse_resume_date(&e.start)).collect();
        assert!(dates.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_undated_entries_sort_last() {
        let mut items = vec![
            experience("undated", "sometime"),
            experience("dated", "2020"),
        ];
        sort_experience(&mut items);
        assert_eq!(items[0].company, "dated");
        assert_eq!(items[1].company, "undated");
    }

    #[test]
    fn test_projects_sorted_alphabetically_ignoring_case() {
        let mut items = vec![project("worldDex"), project("ARCH"), project("btc")];
        sort_projects(&mut items);
        let order: Vec<_> = items.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(order, vec!["ARCH", "btc", "worldDex"]);
    }
}
