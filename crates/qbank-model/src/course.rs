//! Course catalog entries.
//!
//! The catalog itself is owned by the backend; this subsystem only reads
//! `{id, name}` pairs when suggesting matches for imported files.

use serde::{Deserialize, Serialize};

/// Backend identifier for a course.
pub type CourseId = i64;

/// A course from the external catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Catalog identifier.
    pub id: CourseId,
    /// Display name (e.g., "Cardiologie").
    pub name: String,
}

impl Course {
    /// Create a new catalog entry.
    pub fn new(id: CourseId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
