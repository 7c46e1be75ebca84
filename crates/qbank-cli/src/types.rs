use std::path::PathBuf;

use serde::Serialize;

use qbank_ingest::GroupSuggestion;
use qbank_model::ParsedFilenameMetadata;

/// Result of scanning an import folder.
#[derive(Debug, Serialize)]
pub struct ScanResult {
    pub import_folder: PathBuf,
    pub filenames: Vec<String>,
    pub suggestions: Vec<GroupSuggestion>,
}

/// A single parsed filename for the `parse` subcommand.
#[derive(Debug, Serialize)]
pub struct ParsedFile {
    pub filename: String,
    pub metadata: ParsedFilenameMetadata,
}
