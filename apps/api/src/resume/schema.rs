//! Declarative shape of the résumé document and the one validator that
//! interprets it.
//!
//! The validator walks the raw `serde_json::Value` before any typed
//! deserialization and reports every violation it finds, so a broken
//! document is rejected whole with a complete list of offending paths.

use serde_json::{Map, Value};

use crate::resume::error::{SchemaViolation, ValueKind};

#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    Text,
    TextList,
    Object(&'static [FieldSpec]),
    ObjectList(&'static [FieldSpec]),
}

impl FieldKind {
    fn expected(&self) -> ValueKind {
        match self {
            FieldKind::Text => ValueKind::String,
            FieldKind::TextList => ValueKind::StringList,
            FieldKind::Object(_) => ValueKind::Object,
            FieldKind::ObjectList(_) => ValueKind::ObjectList,
        }
    }
}

/// A named field, its kind, and whether it may be absent (or `null`).
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

const fn text(name: &'static str) -> FieldSpec {
    FieldSpec {
        name,
        kind: FieldKind::Text,
        required: true,
    }
}

const fn text_list(name: &'static str) -> FieldSpec {
    FieldSpec {
        name,
        kind: FieldKind::TextList,
        required: false,
    }
}

const fn object(name: &'static str, fields: &'static [FieldSpec], required: bool) -> FieldSpec {
    FieldSpec {
        name,
        kind: FieldKind::Object(fields),
        required,
    }
}

const fn object_list(
    name: &'static str,
    fields: &'static [FieldSpec],
    required: bool,
) -> FieldSpec {
    FieldSpec {
        name,
        kind: FieldKind::ObjectList(fields),
        required,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Résumé shape
// ────────────────────────────────────────────────────────────────────────────

const LINK: &[FieldSpec] = &[text("label"), text("url")];

const BASICS: &[FieldSpec] = &[
    text("name"),
    text("headline"),
    text("location"),
    text("email"),
    text("phone"),
    text("website"),
    object_list("links", LINK, true),
];

const EDUCATION: &[FieldSpec] = &[
    text("school"),
    text("degree"),
    text("field"),
    text("start"),
    text("end"),
    text_list("details"),
];

const EXPERIENCE: &[FieldSpec] = &[
    text("company"),
    text("role"),
    text("location"),
    text("start"),
    text("end"),
    text_list("bullets"),
];

const PROJECT: &[FieldSpec] = &[text("name"), text("url"), text_list("bullets")];

const SKILLS: &[FieldSpec] = &[
    text_list("languages"),
    text_list("frameworks"),
    text_list("tools"),
    text_list("other"),
];

const AWARD: &[FieldSpec] = &[text("title"), text("issuer"), text("date"), text("notes")];

/// Top-level résumé document. Only `basics` is mandatory; every other
/// section defaults to empty.
pub const RESUME_SCHEMA: &[FieldSpec] = &[
    object("basics", BASICS, true),
    object_list("education", EDUCATION, false),
    object_list("experience", EXPERIENCE, false),
    object_list("projects", PROJECT, false),
    object("skills", SKILLS, false),
    object_list("awards", AWARD, false),
];

// ────────────────────────────────────────────────────────────────────────────
// Validator
// ────────────────────────────────────────────────────────────────────────────

/// Checks `document` against `schema`, returning every violation found.
/// An empty result means the document has the expected shape.
pub fn validate(document: &Value, schema: &[FieldSpec]) -> Vec<SchemaViolation> {
    let mut violations = Vec::new();
    match document.as_object() {
        Some(root) => check_fields(root, schema, "", &mut violations),
        None => violations.push(SchemaViolation {
            path: "$".to_string(),
            expected: ValueKind::Object,
            found: kind_of(document),
        }),
    }
    violations
}

fn check_fields(
    object: &Map<String, Value>,
    fields: &[FieldSpec],
    prefix: &str,
    out: &mut Vec<SchemaViolation>,
) {
    for spec in fields {
        let path = if prefix.is_empty() {
            spec.name.to_string()
        } else {
            format!("{prefix}.{}", spec.name)
        };

        match object.get(spec.name) {
            None if spec.required => out.push(SchemaViolation {
                path,
                expected: spec.kind.expected(),
                found: ValueKind::Missing,
            }),
            None => {}
            Some(Value::Null) if !spec.required => {}
            Some(value) => check_value(value, spec.kind, &path, out),
        }
    }
}

fn check_value(value: &Value, kind: FieldKind, path: &str, out: &mut Vec<SchemaViolation>) {
    let mismatch = |out: &mut Vec<SchemaViolation>| {
        out.push(SchemaViolation {
            path: path.to_string(),
            expected: kind.expected(),
            found: kind_of(value),
        })
    };

    match kind {
        FieldKind::Text => {
            if !value.is_string() {
                mismatch(out);
            }
        }
        FieldKind::TextList => match value.as_array() {
            Some(items) => {
                for (i, item) in items.iter().enumerate() {
                    if !item.is_string() {
                        out.push(SchemaViolation {
                            path: format!("{path}[{i}]"),
                            expected: ValueKind::String,
                            found: kind_of(item),
                        });
                    }
                }
            }
            None => mismatch(out),
        },
        FieldKind::Object(fields) => match value.as_object() {
            Some(object) => check_fields(object, fields, path, out),
            None => mismatch(out),
        },
        FieldKind::ObjectList(fields) => match value.as_array() {
            Some(items) => {
                for (i, item) in items.iter().enumerate() {
                    let item_path = format!("{path}[{i}]");
                    match item.as_object() {
                        Some(object) => check_fields(object, fields, &item_path, out),
                        None => out.push(SchemaViolation {
                            path: item_path,
                            expected: ValueKind::Object,
                            found: kind_of(item),
                        }),
                    }
                }
            }
            None => mismatch(out),
        },
    }
}

/// Removes `null` object members at every depth. Run after `validate`, where
/// any surviving `null` sits in an optional slot and means "absent".
pub fn drop_nulls(value: &mut Value) {
    match value {
        Value::Object(object) => {
            object.retain(|_, v| !v.is_null());
            object.values_mut().for_each(drop_nulls);
        }
        Value::Array(items) => items.iter_mut().for_each(drop_nulls),
        _ => {}
    }
}

fn kind_of(value: &Value) -> ValueKind {
    match value {
        Value::Null => ValueKind::Null,
        Value::Bool(_) => ValueKind::Bool,
        Value::Number(_) => ValueKind::Number,
        Value::String(_) => ValueKind::String,
        Value::Array(_) => ValueKind::Array,
        Value::Object(_) => ValueKind::Object,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn basics() -> Value {
        json!({
            "name": "Dash Dunmire",
            "headline": "Finance Student",
            "location": "Columbus, OH",
            "email": "dash@example.com",
            "phone": "555-0100",
            "website": "https://dashdunmire.dev",
            "links": [{"label": "GitHub", "url": "https://github.com/Dashhhhhhhh"}]
        })
    }

    fn paths(violations: &[SchemaViolation]) -> Vec<&str> {
        violations.iter().map(|v| v.path.as_str()).collect()
    }

    #[test]
    fn test_minimal_document_passes() {
        let doc = json!({ "basics": basics() });
        assert!(validate(&doc, RESUME_SCHEMA).is_empty());
    }

    #[test]
    fn test_null_optional_sections_pass() {
        let doc = json!({ "basics": basics(), "education": null, "skills": null });
        assert!(validate(&doc, RESUME_SCHEMA).is_empty());
    }

    #[test]
    fn test_missing_basics_email_is_reported() {
        let mut b = basics();
        b.as_object_mut().unwrap().remove("email");
        let violations = validate(&json!({ "basics": b }), RESUME_SCHEMA);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].path, "basics.email");
        assert_eq!(violations[0].expected, ValueKind::String);
        assert_eq!(violations[0].found, ValueKind::Missing);
    }

    #[test]
    fn test_missing_basics_section() {
        let violations = validate(&json!({ "education": [] }), RESUME_SCHEMA);
        assert_eq!(paths(&violations), vec!["basics"]);
    }

    #[test]
    fn test_every_violation_is_collected() {
        let doc = json!({
            "basics": basics(),
            "education": [
                {"school": "OSU", "degree": 4, "field": "Finance", "start": "2022", "end": "2026"}
            ],
            "experience": [
                {"company": "Acme", "role": "Intern", "location": "", "start": "2023",
                 "end": "2023", "bullets": ["ok", 7]}
            ],
            "awards": [{"title": "Dean's List", "issuer": "OSU", "notes": ""}],
            "skills": {"languages": "Python"}
        });
        let violations = validate(&doc, RESUME_SCHEMA);
        assert_eq!(
            paths(&violations),
            vec![
                "education[0].degree",
                "experience[0].bullets[1]",
                "skills.languages",
                "awards[0].date",
            ]
        );
        assert_eq!(violations[2].expected, ValueKind::StringList);
        assert_eq!(violations[2].found, ValueKind::String);
    }

    #[test]
    fn test_links_entries_must_be_objects() {
        let mut b = basics();
        b["links"] = json!(["https://github.com"]);
        let violations = validate(&json!({ "basics": b }), RESUME_SCHEMA);
        assert_eq!(paths(&violations), vec!["basics.links[0]"]);
        assert_eq!(violations[0].found, ValueKind::String);
    }

    #[test]
    fn test_required_field_rejects_null() {
        let mut b = basics();
        b["phone"] = Value::Null;
        let violations = validate(&json!({ "basics": b }), RESUME_SCHEMA);
        assert_eq!(violations[0].found, ValueKind::Null);
    }

    #[test]
    fn test_root_must_be_object() {
        let violations = validate(&json!([1, 2]), RESUME_SCHEMA);
        assert_eq!(paths(&violations), vec!["$"]);
        assert_eq!(violations[0].found, ValueKind::Array);
    }

    #[test]
    fn test_drop_nulls_at_every_depth() {
        let mut doc = json!({
            "basics": basics(),
            "skills": null,
            "education": [{"school": "OSU", "details": null}]
        });
        drop_nulls(&mut doc);
        assert!(doc.get("skills").is_none());
        assert!(doc["education"][0].get("details").is_none());
        assert_eq!(doc["education"][0]["school"], "OSU");
    }
}
