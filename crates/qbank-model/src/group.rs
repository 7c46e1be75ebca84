//! Course-based file groups for bulk-import review.

use serde::{Deserialize, Serialize};

/// A cluster of uploaded files that appear to belong to the same course.
///
/// Groups are recomputed from scratch on every invocation; no identity
/// persists across calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileGroup {
    /// Normalized grouping key, or a unique per-index key for files whose
    /// course could not be extracted.
    pub key: String,
    /// Course string of the first file in the group, or the raw filename
    /// for ungroupable singletons.
    pub display_name: String,
    /// Indices into the original filename list, in input order.
    pub file_indices: Vec<usize>,
}
