use std::path::Path;

use anyhow::Context;

use qbank_ingest::{SuggestionEngine, discover_question_files, parse_filename_metadata};
use qbank_model::Course;

use crate::cli::{ParseArgs, ScanArgs};
use crate::types::{ParsedFile, ScanResult};

/// Scans an import folder and builds the per-group import plan.
pub fn run_scan(args: &ScanArgs) -> anyhow::Result<ScanResult> {
    let discovered = discover_question_files(&args.import_folder)?;
    let filenames: Vec<String> = discovered.into_iter().map(|file| file.filename).collect();

    let catalog = match &args.catalog {
        Some(path) => load_catalog(path)?,
        None => Vec::new(),
    };
    if catalog.is_empty() && args.catalog.is_some() {
        tracing::warn!("catalog file contains no courses; nothing will match");
    }

    let engine = SuggestionEngine::with_threshold(catalog, args.threshold);
    let suggestions = engine.suggest(&filenames);

    Ok(ScanResult {
        import_folder: args.import_folder.clone(),
        filenames,
        suggestions,
    })
}

/// Parses the given filenames without touching the filesystem.
pub fn run_parse(args: &ParseArgs) -> Vec<ParsedFile> {
    args.filenames
        .iter()
        .map(|filename| ParsedFile {
            filename: filename.clone(),
            metadata: parse_filename_metadata(filename),
        })
        .collect()
}

/// Loads a course catalog from a JSON array of `{id, name}` objects.
pub fn load_catalog(path: &Path) -> anyhow::Result<Vec<Course>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog {}", path.display()))?;
    let catalog: Vec<Course> = serde_json::from_str(&raw)
        .with_context(|| format!("invalid catalog JSON in {}", path.display()))?;
    tracing::debug!(courses = catalog.len(), "loaded course catalog");
    Ok(catalog)
}
