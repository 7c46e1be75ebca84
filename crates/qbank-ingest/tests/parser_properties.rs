//! Property tests for the filename parser.

use proptest::prelude::*;

use qbank_ingest::{
    MIN_EXAM_YEAR, extract_course_string_at, extract_exam_year_at, extract_rotation,
    parse_filename_metadata_at,
};

const REFERENCE_YEAR: i32 = 2025;

proptest! {
    #[test]
    fn year_extraction_is_total_and_bounded(filename in ".{0,80}") {
        if let Some(year) = extract_exam_year_at(&filename, REFERENCE_YEAR) {
            prop_assert!((MIN_EXAM_YEAR..=REFERENCE_YEAR).contains(&year));
        }
    }

    #[test]
    fn parsing_never_panics(filename in ".{0,80}") {
        let parsed = parse_filename_metadata_at(&filename, REFERENCE_YEAR);
        // source_id is tied to the RATT flag.
        prop_assert_eq!(parsed.source_id.is_some(), parsed.is_ratt);
    }

    #[test]
    fn course_string_is_never_blank(filename in ".{0,80}") {
        if let Some(course) = extract_course_string_at(&filename, REFERENCE_YEAR) {
            prop_assert!(!course.trim().is_empty());
        }
    }

    #[test]
    fn embedded_year_is_found(year in MIN_EXAM_YEAR..=REFERENCE_YEAR) {
        let filename = format!("course_questions_{year}.json");
        prop_assert_eq!(extract_exam_year_at(&filename, REFERENCE_YEAR), Some(year));
    }

    #[test]
    fn delimited_rotation_is_found(digit in 1u8..=4) {
        for filename in [
            format!("exam_r{digit}.json"),
            format!("exam-R{digit}-final.json"),
            format!("exam r{digit} 2020.json"),
            format!("exam.R{digit}.json"),
        ] {
            let rotation = extract_rotation(&filename);
            prop_assert_eq!(rotation.map(|r| r.as_str().to_string()), Some(format!("R{digit}")));
        }
    }
}
