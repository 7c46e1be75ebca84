//! Course-based grouping of filename batches.

use std::collections::HashMap;

use qbank_match::normalize_course;
use qbank_model::FileGroup;

use crate::parser::extract_course_string;

/// Buckets a batch of filenames into course groups for import review.
///
/// The grouping key is the normalized course string. Files without an
/// extractable course (or whose course normalizes to nothing) are never
/// merged: each becomes a singleton group keyed by its index, displaying the
/// raw filename. Genuine groups display the raw course string of the first
/// file seen. Output order is first-occurrence order and the whole operation
/// is deterministic for a given input list.
pub fn group_files_by_course(filenames: &[String]) -> Vec<FileGroup> {
    let mut groups: Vec<FileGroup> = Vec::new();
    let mut index_by_key: HashMap<String, usize> = HashMap::new();

    for (index, filename) in filenames.iter().enumerate() {
        let course = extract_course_string(filename);
        let key = course
            .as_deref()
            .map(normalize_course)
            .filter(|key| !key.is_empty());

        let Some(key) = key else {
            groups.push(FileGroup {
                key: format!("ungrouped-{index}"),
                display_name: filename.clone(),
                file_indices: vec![index],
            });
            continue;
        };

        match index_by_key.get(&key) {
            Some(&group_index) => groups[group_index].file_indices.push(index),
            None => {
                index_by_key.insert(key.clone(), groups.len());
                groups.push(FileGroup {
                    key,
                    // Present: the key above came from this course string.
                    display_name: course.unwrap_or_default(),
                    file_indices: vec![index],
                });
            }
        }
    }

    tracing::debug!(
        files = filenames.len(),
        groups = groups.len(),
        "grouped question files by course"
    );
    groups
}
