//! Lenient extraction of one syllabus record from a generated text segment.
//!
//! One generic routine driven by a table of (field, compiled pattern) pairs.
//! Matching is case-sensitive and label-exact; a field whose label is absent
//! gets the sentinel value and a diagnostic, never an error. Malformed model
//! output therefore always produces a complete record.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::domain::syllabus::{FieldMode, Syllabus, SyllabusField};

struct FieldPattern {
    field: SyllabusField,
    pattern: Regex,
}

// The `regex` crate has no lookahead, so the multi-line pattern consumes the
// `**` opening the next label instead of peeking at it. Each field is matched
// independently against the whole segment, so the consumed terminator is
// still available to the other fields' scans.
fn compile(field: SyllabusField) -> Regex {
    let label = regex::escape(field.label());
    let source = match field.mode() {
        FieldMode::SingleLine => format!(r"\*\*{label}\*\* *: *([^\n]+)"),
        FieldMode::MultiLine => format!(r"(?s)\*\*{label}\*\* *: *(.*?)(?:\*\*|\z)"),
    };
    Regex::new(&source).expect("field patterns are built from escaped literals")
}

static FIELD_PATTERNS: Lazy<Vec<FieldPattern>> = Lazy::new(|| {
    SyllabusField::ALL
        .into_iter()
        .map(|field| FieldPattern {
            field,
            pattern: compile(field),
        })
        .collect()
});

/// Build a complete record from one segment of generated text.
pub fn extract_syllabus(text: &str) -> Syllabus {
    let text = text.trim();
    let mut syllabus = Syllabus::unspecified();

    for entry in FIELD_PATTERNS.iter() {
        match entry.pattern.captures(text).and_then(|c| c.get(1)) {
            Some(value) => {
                let trimmed = value.as_str().trim();
                if !trimmed.is_empty() {
                    syllabus.set_field(entry.field, trimmed.to_string());
                } else {
                    log::debug!("Empty value for field '{}'", entry.field.label());
                }
            }
            None => {
                log::debug!("No match found for field '{}'", entry.field.label());
            }
        }
    }

    syllabus
}
