//! Import suggestion engine.
//!
//! Composes the parser, the grouping pass, and the fuzzy matcher into the
//! per-group suggestions a bulk-import review screen (or the CLI) presents
//! to the operator.

use serde::Serialize;

use qbank_match::{CourseMatch, DEFAULT_MATCH_THRESHOLD, best_course_match};
use qbank_model::{Course, FileGroup, ParsedFilenameMetadata};

use crate::grouping::group_files_by_course;
use crate::parser::parse_filename_metadata;

/// A course group with its suggested catalog match.
#[derive(Debug, Clone, Serialize)]
pub struct GroupSuggestion {
    /// The file group under review.
    pub group: FileGroup,
    /// Metadata parsed from the group's first file.
    pub metadata: ParsedFilenameMetadata,
    /// Best catalog match for the course string, if any cleared the
    /// threshold.
    pub course: Option<CourseMatch>,
}

/// Suggests catalog courses for batches of uploaded filenames.
#[derive(Debug, Clone)]
pub struct SuggestionEngine {
    catalog: Vec<Course>,
    threshold: f64,
}

impl SuggestionEngine {
    /// Create an engine over a course catalog with the default threshold.
    pub fn new(catalog: Vec<Course>) -> Self {
        Self::with_threshold(catalog, DEFAULT_MATCH_THRESHOLD)
    }

    /// Create an engine with an explicit match threshold.
    pub fn with_threshold(catalog: Vec<Course>, threshold: f64) -> Self {
        Self { catalog, threshold }
    }

    /// The catalog this engine matches against.
    pub fn catalog(&self) -> &[Course] {
        &self.catalog
    }

    /// Groups `filenames` by course and attaches the best catalog match per
    /// group.
    ///
    /// Groups without an extractable course string get no match; callers
    /// fall back to manual selection for those.
    pub fn suggest(&self, filenames: &[String]) -> Vec<GroupSuggestion> {
        let groups = group_files_by_course(filenames);

        let suggestions: Vec<GroupSuggestion> = groups
            .into_iter()
            .map(|group| {
                // file_indices is never empty by construction.
                let representative = group
                    .file_indices
                    .first()
                    .and_then(|&index| filenames.get(index))
                    .map(String::as_str)
                    .unwrap_or_default();
                let metadata = parse_filename_metadata(representative);
                let course = metadata
                    .course
                    .as_deref()
                    .and_then(|search| best_course_match(search, &self.catalog, self.threshold));
                GroupSuggestion {
                    group,
                    metadata,
                    course,
                }
            })
            .collect();

        let matched = suggestions.iter().filter(|s| s.course.is_some()).count();
        tracing::info!(
            groups = suggestions.len(),
            matched,
            "suggested catalog courses for import groups"
        );
        suggestions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qbank_match::MatchRule;

    fn catalog() -> Vec<Course> {
        vec![
            Course::new(1, "Cardiologie"),
            Course::new(2, "Neurologie"),
            Course::new(3, "Sémiologie"),
        ]
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn suggests_matches_per_group() {
        let engine = SuggestionEngine::new(catalog());
        let files = names(&[
            "cardiologie_questions_2018.json",
            "cardiologie_questions_2019.json",
            "semiologie_questions_2020.json",
        ]);

        let suggestions = engine.suggest(&files);
        assert_eq!(suggestions.len(), 2);

        let cardio = &suggestions[0];
        assert_eq!(cardio.group.file_indices, vec![0, 1]);
        assert_eq!(cardio.metadata.exam_year, Some(2018));
        let matched = cardio.course.as_ref().expect("cardio should match");
        assert_eq!(matched.course.id, 1);
        assert_eq!(matched.rule, MatchRule::Exact);

        // "semiologie" only matches "Sémiologie" after normalization.
        let semio = &suggestions[1];
        let matched = semio.course.as_ref().expect("semio should match");
        assert_eq!(matched.course.id, 3);
        assert_eq!(matched.rule, MatchRule::NormalizedExact);
        assert_eq!(matched.score, 0.9);
    }

    #[test]
    fn unmatched_groups_carry_no_course() {
        let engine = SuggestionEngine::new(catalog());
        let files = names(&["histologie_questions_2020.json", "2018_RATT_R1.json"]);

        let suggestions = engine.suggest(&files);
        assert_eq!(suggestions.len(), 2);
        assert!(suggestions[0].course.is_none());
        // Ungroupable singleton: no course string at all.
        assert!(suggestions[1].metadata.course.is_none());
        assert!(suggestions[1].course.is_none());
    }

    #[test]
    fn threshold_is_respected() {
        let strict = SuggestionEngine::with_threshold(catalog(), 0.95);
        let files = names(&["cardio_questions_2018.json"]);

        let suggestions = strict.suggest(&files);
        // "cardio" scores 0.8 against "Cardiologie", below the 0.95 bar.
        assert!(suggestions[0].course.is_none());
    }

    #[test]
    fn empty_batch_yields_no_suggestions() {
        let engine = SuggestionEngine::new(catalog());
        assert!(engine.suggest(&[]).is_empty());
    }
}
