//! Metadata extracted from question-bank filenames.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Source id assigned to files coming from a RATT (resit) session.
pub const RATT_SOURCE_ID: i64 = 4;

/// Residency rotation encoded in a filename (R1 through R4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rotation {
    R1,
    R2,
    R3,
    R4,
}

impl Rotation {
    /// Canonical uppercase token (e.g., "R2").
    pub fn as_str(self) -> &'static str {
        match self {
            Self::R1 => "R1",
            Self::R2 => "R2",
            Self::R3 => "R3",
            Self::R4 => "R4",
        }
    }

    /// Rotation for a digit `1..=4`, or `None` for anything else.
    pub fn from_digit(digit: char) -> Option<Self> {
        match digit {
            '1' => Some(Self::R1),
            '2' => Some(Self::R2),
            '3' => Some(Self::R3),
            '4' => Some(Self::R4),
            _ => None,
        }
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rotation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(digit), None) if r.eq_ignore_ascii_case(&'r') => {
                Self::from_digit(digit).ok_or_else(|| format!("invalid rotation: {trimmed}"))
            }
            _ => Err(format!("invalid rotation: {trimmed}")),
        }
    }
}

/// Everything a filename tells us about a question file.
///
/// Derived, stateless, produced fresh per filename. Absent fields mean "not
/// found", never an error.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ParsedFilenameMetadata {
    /// Four-digit exam year within `[1900, current year]`.
    pub exam_year: Option<i32>,
    /// Raw course name with underscores replaced by spaces.
    pub course: Option<String>,
    /// Residency rotation token.
    pub rotation: Option<Rotation>,
    /// Whether the filename carries the RATT marker.
    pub is_ratt: bool,
    /// `RATT_SOURCE_ID` when `is_ratt` is set, absent otherwise.
    pub source_id: Option<i64>,
}
