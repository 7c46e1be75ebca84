//! Question bank ingestion: filename metadata parsing, course grouping, and
//! question-file discovery.

pub mod discovery;
pub mod engine;
pub mod error;
pub mod grouping;
pub mod parser;

pub use discovery::{DiscoveredFile, discover_question_files, list_question_files};
pub use engine::{GroupSuggestion, SuggestionEngine};
pub use error::{IngestError, Result};
pub use grouping::group_files_by_course;
pub use parser::{
    MIN_EXAM_YEAR, QUESTIONS_MARKER, extract_course_string, extract_course_string_at,
    extract_exam_year, extract_exam_year_at, extract_rotation, is_ratt_source,
    parse_filename_metadata, parse_filename_metadata_at,
};
