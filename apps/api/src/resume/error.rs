use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// The kind of JSON value a schema field expects (or was given).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    String,
    StringList,
    Object,
    ObjectList,
    Number,
    Bool,
    Array,
    Null,
    Missing,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::String => "string",
            ValueKind::StringList => "array of strings",
            ValueKind::Object => "object",
            ValueKind::ObjectList => "array of objects",
            ValueKind::Number => "number",
            ValueKind::Bool => "boolean",
            ValueKind::Array => "array",
            ValueKind::Null => "null",
            ValueKind::Missing => "nothing",
        };
        f.write_str(name)
    }
}

/// One field that failed the shape check, located by a JSON-ish path
/// such as `education[1].degree`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaViolation {
    pub path: String,
    pub expected: ValueKind,
    pub found: ValueKind,
}

impl fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: expected {}, found {}",
            self.path, self.expected, self.found
        )
    }
}

/// The only error the résumé loader produces. A failed load never
/// populates the cache.
#[derive(Debug, Error)]
pub enum DataIntegrityError {
    #[error("could not read resume source {source_name}: {source}")]
    Read {
        source_name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("resume source {source_name} is not valid JSON: {source}")]
    Parse {
        source_name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(
        "resume source {source_name} failed validation ({} problem(s)): {}",
        .violations.len(),
        join_violations(.violations)
    )]
    Schema {
        source_name: String,
        violations: Vec<SchemaViolation>,
    },
}

impl DataIntegrityError {
    pub fn violations(&self) -> &[SchemaViolation] {
        match self {
            DataIntegrityError::Schema { violations, .. } => violations,
            _ => &[],
        }
    }
}

fn join_violations(violations: &[SchemaViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
