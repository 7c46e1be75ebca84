//! Filename metadata extraction.
//!
//! Uploaded question files encode exam metadata in their names, e.g.
//! `pit_questions_2018_RATT_R1.json`. Every extractor here is total: absence
//! is `None`, never an error, and no input panics.

use chrono::{Datelike, Utc};

use qbank_model::{ParsedFilenameMetadata, RATT_SOURCE_ID, Rotation};

/// Literal marker separating the course name from the rest of the filename.
pub const QUESTIONS_MARKER: &str = "_questions_";

/// Oldest exam year accepted by [`extract_exam_year`].
pub const MIN_EXAM_YEAR: i32 = 1900;

/// Words carrying no course information, dropped by the fallback strategy.
const FILLER_WORDS: &[&str] = &["question", "questions", "exam", "test", "quiz"];

/// Separators collapsed to spaces by the fallback strategy.
const SEPARATORS: &[char] = &['_', '-', '.', ' '];

fn current_year() -> i32 {
    Utc::now().year()
}

/// Extracts a four-digit exam year from a filename.
///
/// The first maximal digit run of exactly four digits decides: it is
/// accepted iff it falls within `[1900, current year]`, otherwise the result
/// is `None` without considering later runs (first, not best).
pub fn extract_exam_year(filename: &str) -> Option<i32> {
    extract_exam_year_at(filename, current_year())
}

/// [`extract_exam_year`] with an explicit upper bound, for deterministic use.
pub fn extract_exam_year_at(filename: &str, max_year: i32) -> Option<i32> {
    let run = filename
        .split(|c: char| !c.is_ascii_digit())
        .find(|run| run.len() == 4)?;
    let year: i32 = run.parse().ok()?;
    (MIN_EXAM_YEAR..=max_year).contains(&year).then_some(year)
}

/// Extracts a rotation token (R1 through R4) from a filename.
///
/// Matches `r` followed by a digit 1-4, case-insensitive. Delimiters around
/// the token are optional, so an undelimited occurrence inside a longer word
/// also counts; the first occurrence wins.
pub fn extract_rotation(filename: &str) -> Option<Rotation> {
    let chars: Vec<char> = filename.chars().collect();
    chars.windows(2).find_map(|pair| {
        if pair[0].eq_ignore_ascii_case(&'r') {
            Rotation::from_digit(pair[1])
        } else {
            None
        }
    })
}

/// Whether the filename marks a RATT (resit session) source.
pub fn is_ratt_source(filename: &str) -> bool {
    find_ascii_ci(filename, "ratt").is_some()
}

/// Extracts the course-name portion of a filename.
///
/// Primary strategy: strip a trailing `.json`, split on the case-insensitive
/// `_questions_` marker, and use the prefix with underscores turned into
/// spaces. A present marker with an empty prefix yields `None`. Only when the
/// marker is absent does the fallback run: tokenize the stem and drop year
/// runs, rotation tokens, the literal "RATT", and filler words; whatever
/// remains, joined by single spaces, is the course string.
pub fn extract_course_string(filename: &str) -> Option<String> {
    extract_course_string_at(filename, current_year())
}

/// [`extract_course_string`] with an explicit year upper bound.
pub fn extract_course_string_at(filename: &str, max_year: i32) -> Option<String> {
    let stem = strip_json_extension(filename);

    if let Some(index) = find_ascii_ci(stem, QUESTIONS_MARKER) {
        let course = collapse_underscores(&stem[..index]);
        return (!course.is_empty()).then_some(course);
    }

    let kept: Vec<&str> = stem
        .split(SEPARATORS)
        .filter(|word| !word.is_empty() && !is_metadata_token(word, max_year))
        .collect();
    if kept.is_empty() {
        None
    } else {
        Some(kept.join(" "))
    }
}

/// Parses all metadata a filename carries.
///
/// `source_id` is [`RATT_SOURCE_ID`] exactly when the RATT marker is present.
pub fn parse_filename_metadata(filename: &str) -> ParsedFilenameMetadata {
    parse_filename_metadata_at(filename, current_year())
}

/// [`parse_filename_metadata`] with an explicit year upper bound.
pub fn parse_filename_metadata_at(filename: &str, max_year: i32) -> ParsedFilenameMetadata {
    let is_ratt = is_ratt_source(filename);
    ParsedFilenameMetadata {
        exam_year: extract_exam_year_at(filename, max_year),
        course: extract_course_string_at(filename, max_year),
        rotation: extract_rotation(filename),
        is_ratt,
        source_id: is_ratt.then_some(RATT_SOURCE_ID),
    }
}

fn strip_json_extension(filename: &str) -> &str {
    let len = filename.len();
    if len >= 5
        && filename
            .get(len - 5..)
            .is_some_and(|ext| ext.eq_ignore_ascii_case(".json"))
    {
        &filename[..len - 5]
    } else {
        filename
    }
}

fn collapse_underscores(prefix: &str) -> String {
    prefix
        .replace('_', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_metadata_token(word: &str, max_year: i32) -> bool {
    if word.len() == 4
        && word.chars().all(|c| c.is_ascii_digit())
        && word
            .parse::<i32>()
            .is_ok_and(|year| (MIN_EXAM_YEAR..=max_year).contains(&year))
    {
        return true;
    }
    if word.parse::<Rotation>().is_ok() {
        return true;
    }
    word.eq_ignore_ascii_case("ratt")
        || FILLER_WORDS
            .iter()
            .any(|filler| word.eq_ignore_ascii_case(filler))
}

/// Byte offset of the first case-insensitive ASCII occurrence of `needle`.
///
/// A hit implies every matched byte is ASCII, so the returned offset is
/// always a valid char boundary in `haystack`.
fn find_ascii_ci(haystack: &str, needle: &str) -> Option<usize> {
    let haystack = haystack.as_bytes();
    let needle = needle.as_bytes();
    if needle.is_empty() || haystack.len() < needle.len() {
        return None;
    }
    (0..=haystack.len() - needle.len())
        .find(|&i| haystack[i..i + needle.len()].eq_ignore_ascii_case(needle))
}
