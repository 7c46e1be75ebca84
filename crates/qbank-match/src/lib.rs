//! Fuzzy course matching for question bank imports.
//!
//! Given a free-text course string (usually extracted from a filename) and a
//! catalog of known courses, this crate scores similarity through a fixed
//! rule cascade and selects the best candidate above a threshold.

pub mod normalize;
pub mod score;

pub use normalize::normalize_course;
pub use score::{
    CourseMatch, DEFAULT_MATCH_THRESHOLD, MatchRule, ScoredMatch, best_course_match,
    find_best_matching_course, fuzzy_match_course, score_course,
};
