//! Fuzzy scoring for course-name matching.
//!
//! Scoring is an ordered cascade of rules evaluated top to bottom; the first
//! applicable rule decides the score. There is deliberately no edit-distance
//! metric here: the cascade mirrors how operators actually name files
//! (exact names, truncations, accent-free respellings, word subsets).

use serde::{Deserialize, Serialize};

use qbank_model::Course;

use crate::normalize::normalize_course;

/// Minimum score a catalog entry must strictly exceed to be suggested.
pub const DEFAULT_MATCH_THRESHOLD: f64 = 0.7;

/// Which cascade rule produced a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchRule {
    /// Case-insensitive trimmed equality.
    Exact,
    /// One raw string contains the other.
    Contains,
    /// Equality after normalization (diacritics and punctuation stripped).
    NormalizedExact,
    /// Containment after normalization.
    NormalizedContains,
    /// Word-level overlap between normalized strings.
    TokenOverlap,
    /// No rule applied.
    NoMatch,
}

impl MatchRule {
    /// Short human-readable label for tables and logs.
    pub fn describe(self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Contains => "contains",
            Self::NormalizedExact => "normalized",
            Self::NormalizedContains => "normalized contains",
            Self::TokenOverlap => "token overlap",
            Self::NoMatch => "no match",
        }
    }
}

/// Score plus the rule that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredMatch {
    /// Similarity in `[0.0, 1.0]`.
    pub score: f64,
    /// First cascade rule that applied.
    pub rule: MatchRule,
}

/// A catalog entry selected for a search string.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseMatch {
    /// The matched catalog entry.
    pub course: Course,
    /// Similarity in `[0.0, 1.0]`.
    pub score: f64,
    /// Rule that produced the score.
    pub rule: MatchRule,
}

/// Scores a search string against a candidate course name.
///
/// Cascade order and constants are fixed:
///
/// 1. trimmed case-insensitive equality -> 1.0
/// 2. raw containment either way -> 0.8
/// 3. normalized equality -> 0.9
/// 4. normalized containment -> 0.7
/// 5. token overlap -> `matched / max(words) * 0.6`
/// 6. nothing matched -> 0.0
///
/// Note that rule 2 is checked before rule 3 even though it scores lower;
/// the evaluation order is part of the contract.
pub fn score_course(search: &str, candidate: &str) -> ScoredMatch {
    let search = search.trim();
    let candidate = candidate.trim();
    if search.is_empty() || candidate.is_empty() {
        return ScoredMatch {
            score: 0.0,
            rule: MatchRule::NoMatch,
        };
    }

    let search_lower = search.to_lowercase();
    let candidate_lower = candidate.to_lowercase();

    if search_lower == candidate_lower {
        return ScoredMatch {
            score: 1.0,
            rule: MatchRule::Exact,
        };
    }

    if search_lower.contains(&candidate_lower) || candidate_lower.contains(&search_lower) {
        return ScoredMatch {
            score: 0.8,
            rule: MatchRule::Contains,
        };
    }

    let search_norm = normalize_course(search);
    let candidate_norm = normalize_course(candidate);

    if !search_norm.is_empty() && search_norm == candidate_norm {
        return ScoredMatch {
            score: 0.9,
            rule: MatchRule::NormalizedExact,
        };
    }

    if !search_norm.is_empty()
        && !candidate_norm.is_empty()
        && (search_norm.contains(&candidate_norm) || candidate_norm.contains(&search_norm))
    {
        return ScoredMatch {
            score: 0.7,
            rule: MatchRule::NormalizedContains,
        };
    }

    token_overlap(&search_norm, &candidate_norm)
}

/// Similarity score alone, for callers that do not need the rule.
pub fn fuzzy_match_course(search: &str, candidate: &str) -> f64 {
    score_course(search, candidate).score
}

/// Word-level overlap between two normalized strings.
///
/// A search word counts as matched when it contains, or is contained by, any
/// candidate word. The denominator is the larger word count; this can under-
/// or over-reward asymmetric names but is preserved behavior.
fn token_overlap(search_norm: &str, candidate_norm: &str) -> ScoredMatch {
    let search_words: Vec<&str> = search_norm.split(' ').filter(|w| !w.is_empty()).collect();
    let candidate_words: Vec<&str> = candidate_norm
        .split(' ')
        .filter(|w| !w.is_empty())
        .collect();

    if search_words.is_empty() || candidate_words.is_empty() {
        return ScoredMatch {
            score: 0.0,
            rule: MatchRule::NoMatch,
        };
    }

    let matched = search_words
        .iter()
        .filter(|word| {
            candidate_words
                .iter()
                .any(|cand| cand.contains(**word) || word.contains(*cand))
        })
        .count();

    if matched == 0 {
        return ScoredMatch {
            score: 0.0,
            rule: MatchRule::NoMatch,
        };
    }

    let denominator = search_words.len().max(candidate_words.len()) as f64;
    ScoredMatch {
        score: matched as f64 / denominator * 0.6,
        rule: MatchRule::TokenOverlap,
    }
}

/// Picks the catalog entry with the strictly-highest score above `threshold`.
///
/// Returns `None` for an empty search string or empty catalog. Ties keep the
/// first-seen entry: only a strict improvement replaces the incumbent.
pub fn find_best_matching_course<'a>(
    search: &str,
    courses: &'a [Course],
    threshold: f64,
) -> Option<&'a Course> {
    if search.trim().is_empty() || courses.is_empty() {
        return None;
    }

    let mut best: Option<(usize, f64)> = None;
    for (index, course) in courses.iter().enumerate() {
        let score = fuzzy_match_course(search, &course.name);
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((index, score));
        }
    }

    best.and_then(|(index, score)| (score > threshold).then(|| &courses[index]))
}

/// Like [`find_best_matching_course`] but keeps the score and rule.
pub fn best_course_match(search: &str, courses: &[Course], threshold: f64) -> Option<CourseMatch> {
    let course = find_best_matching_course(search, courses, threshold)?;
    let scored = score_course(search, &course.name);
    Some(CourseMatch {
        course: course.clone(),
        score: scored.score,
        rule: scored.rule,
    })
}
