//! Question-file discovery for bulk import.

use std::path::{Path, PathBuf};

use qbank_model::ParsedFilenameMetadata;

use crate::error::{IngestError, Result};
use crate::parser::parse_filename_metadata;

/// A discovered question file with its parsed filename metadata.
#[derive(Debug, Clone)]
pub struct DiscoveredFile {
    /// Path to the JSON file.
    pub path: PathBuf,
    /// Filename the metadata was parsed from.
    pub filename: String,
    /// Metadata extracted from the filename.
    pub metadata: ParsedFilenameMetadata,
}

/// Lists all JSON files in a directory.
///
/// Returns files sorted by filename.
pub fn list_question_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        // Check for .json extension (case-insensitive)
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(files)
}

/// Discovers JSON files in a directory and parses their filename metadata.
pub fn discover_question_files(dir: &Path) -> Result<Vec<DiscoveredFile>> {
    let paths = list_question_files(dir)?;

    let discovered: Vec<DiscoveredFile> = paths
        .into_iter()
        .map(|path| {
            let filename = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            let metadata = parse_filename_metadata(&filename);
            DiscoveredFile {
                path,
                filename,
                metadata,
            }
        })
        .collect();

    tracing::debug!(
        dir = %dir.display(),
        files = discovered.len(),
        "discovered question files"
    );
    Ok(discovered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_dir() -> TempDir {
        let dir = TempDir::new().unwrap();

        for name in &[
            "cardiologie_questions_2018.json",
            "cardiologie_questions_2019_RATT.json",
            "neurologie_questions_2018.JSON",
            "readme.txt",
        ] {
            let path = dir.path().join(name);
            std::fs::write(&path, "[]").unwrap();
        }

        dir
    }

    #[test]
    fn lists_json_files_sorted() {
        let dir = create_test_dir();
        let files = list_question_files(dir.path()).unwrap();

        assert_eq!(files.len(), 3);
        // Sorted by filename; the .txt file is skipped.
        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            names,
            vec![
                "cardiologie_questions_2018.json",
                "cardiologie_questions_2019_RATT.json",
                "neurologie_questions_2018.JSON",
            ]
        );
    }

    #[test]
    fn missing_directory_is_an_error() {
        let result = list_question_files(Path::new("/definitely/not/here"));
        assert!(matches!(
            result,
            Err(IngestError::DirectoryNotFound { .. })
        ));
    }

    #[test]
    fn discovery_attaches_parsed_metadata() {
        let dir = create_test_dir();
        let discovered = discover_question_files(dir.path()).unwrap();

        assert_eq!(discovered.len(), 3);
        let ratt = discovered
            .iter()
            .find(|f| f.filename.contains("RATT"))
            .unwrap();
        assert!(ratt.metadata.is_ratt);
        assert_eq!(ratt.metadata.exam_year, Some(2019));
        assert_eq!(ratt.metadata.course.as_deref(), Some("cardiologie"));
    }
}
