//! Splitting one generation response into per-record segments.

use crate::constants::syllabus_prompt::SYLLABUS_DELIMITER;
use crate::models::domain::Syllabus;
use crate::services::extractor::extract_syllabus;

/// Cut the response on the literal delimiter, dropping empty and
/// whitespace-only segments. Order follows the response text.
pub fn split_response(text: &str) -> Vec<&str> {
    text.split(SYLLABUS_DELIMITER)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// Extract one record per non-empty segment, in response order. The produced
/// count is whatever the generator actually emitted, not the requested count.
pub fn parse_batch(text: &str) -> Vec<Syllabus> {
    split_response(text)
        .into_iter()
        .map(extract_syllabus)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_records_with_trailing_delimiter() {
        let records = parse_batch("**Nom du Cours** : A---**Nom du Cours** : B---");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].course_name, "A");
        assert_eq!(records[1].course_name, "B");
    }

    #[test]
    fn test_whitespace_only_segments_are_dropped() {
        let segments = split_response("first---   \n  ---second");
        assert_eq!(segments, vec!["first", "second"]);
    }

    #[test]
    fn test_single_record_without_delimiter() {
        let records = parse_batch("**Nom du Cours** : Seul");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].course_name, "Seul");
    }

    #[test]
    fn test_empty_response_yields_no_records() {
        assert!(parse_batch("").is_empty());
        assert!(parse_batch("--- \n ---").is_empty());
    }

    #[test]
    fn test_order_follows_response_text() {
        let text = "**Semestre** : S1---**Semestre** : S2---**Semestre** : S3";
        let records = parse_batch(text);
        let semesters: Vec<_> = records.iter().map(|r| r.semester.as_str()).collect();
        assert_eq!(semesters, vec!["S1", "S2", "S3"]);
    }
}
