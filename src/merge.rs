//! The merge operation: reassemble the manuscript from its chunk files.

use std::fs;
use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::config::MergeConfig;
use crate::error::ChunkError;
use crate::lint;
use crate::manifest::Manifest;
use crate::markers;

/// Outcome of a merge, for the caller's summary output.
#[derive(Debug)]
pub struct MergeOutcome {
    pub output_path: PathBuf,
    pub chunks_merged: usize,
    pub lint: Option<lint::LintOutcome>,
}

/// Concatenate the content regions of every chunk the manifest records, in
/// `chunk_number` order, and write the reconstruction to
/// `config.output_file`.
///
/// Content bytes pass through unchanged, human edits included; only the
/// injected annotations are removed. With unedited chunks the output equals
/// the original file byte-for-byte.
pub fn merge_chunks(config: &MergeConfig) -> Result<MergeOutcome, ChunkError> {
    let manifest = Manifest::load(&config.chunks_dir, &config.base_name)?;
    let ordered = manifest.ordered_chunks();

    let mut assembled = String::new();
    for record in &ordered {
        let path = config.chunks_dir.join(&record.filename);
        let raw = fs::read_to_string(&path).map_err(|e| ChunkError::from_io(&path, e))?;
        let content = markers::strip_annotations(&raw, &path)?;
        debug!(chunk = record.chunk_number, file = %path.display(), "stripped chunk");
        assembled.push_str(&content);
    }

    // The renderer terminates an unterminated final line so its footer can
    // start on a fresh line; undo that when the source had no trailing
    // newline.
    if !manifest.ends_with_newline && assembled.ends_with('\n') {
        assembled.pop();
    }

    fs::write(&config.output_file, &assembled)
        .map_err(|e| ChunkError::from_io(&config.output_file, e))?;
    info!(
        chunks = ordered.len(),
        output = %config.output_file.display(),
        "merge complete"
    );

    let lint = match &config.lint_command {
        Some(command) => match lint::run_lint(command, &config.output_file) {
            Ok(outcome) => Some(outcome),
            Err(e) => {
                // Advisory only: a checker that cannot run never fails the
                // merge.
                warn!("lint command could not run: {e}");
                None
            }
        },
        None => None,
    };

    Ok(MergeOutcome {
        output_path: config.output_file.clone(),
        chunks_merged: ordered.len(),
        lint,
    })
}
