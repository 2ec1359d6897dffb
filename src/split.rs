//! The split operation: plan boundaries, write annotated chunk files, write
//! the manifest.

use std::fs;
use std::path::PathBuf;

use chrono::{Local, SecondsFormat, Utc};
use tracing::{debug, info};

use crate::boundary::{ChunkPlan, plan_chunks};
use crate::config::SplitConfig;
use crate::constants::PREVIEW_CHARS;
use crate::document::Document;
use crate::error::ChunkError;
use crate::manifest::{ChunkRecord, ChunkStatus, Manifest};
use crate::markers;

/// Outcome of a split, for the caller's summary output.
#[derive(Debug)]
pub struct SplitOutcome {
    pub manifest: Manifest,
    pub manifest_path: PathBuf,
    pub chunk_paths: Vec<PathBuf>,
}

/// Split `config.input` into chunk files under `config.output_dir` and
/// record them in a manifest.
///
/// Boundaries are deterministic for a given document and chunk size; only
/// the timestamps differ between runs.
pub fn split_document(config: &SplitConfig) -> Result<SplitOutcome, ChunkError> {
    if config.chunk_lines == 0 {
        return Err(ChunkError::Config {
            detail: "--chunk-lines must be at least 1".to_owned(),
        });
    }

    let document = Document::load(&config.input)?;
    info!(
        path = %document.path.display(),
        lines = document.total_lines(),
        "loaded manuscript"
    );

    fs::create_dir_all(&config.output_dir)
        .map_err(|e| ChunkError::from_io(&config.output_dir, e))?;

    let plans = plan_chunks(&document.lines, config.chunk_lines);
    let total = plans.len();
    let stem = document.stem();
    let source_name = document
        .path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| stem.clone());
    let generated_at = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

    let mut records = Vec::with_capacity(total);
    let mut chunk_paths = Vec::with_capacity(total);
    for (idx, plan) in plans.iter().enumerate() {
        let number = idx + 1;
        let filename = format!("{stem}_chunk_{number:03}.md");
        let path = config.output_dir.join(&filename);
        write_chunk(&document, plan, number, total, &source_name, &generated_at, &path)?;
        debug!(chunk = number, lines = plan.len(), file = %path.display(), "wrote chunk");

        records.push(ChunkRecord {
            filename,
            chunk_number: number,
            start_line: plan.start + 1,
            end_line: plan.end,
            lines: plan.len(),
            first_content: preview(&document.lines[plan.start]),
            status: ChunkStatus::Pending,
            forced: plan.forced,
        });
        chunk_paths.push(path);
    }

    let manifest = Manifest {
        original_file: document.path.to_string_lossy().into_owned(),
        total_lines: document.total_lines(),
        ends_with_newline: document.ends_with_newline,
        created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        chunks: records,
    };
    let manifest_path = manifest.save(&config.output_dir, &stem)?;
    info!(chunks = total, manifest = %manifest_path.display(), "split complete");

    Ok(SplitOutcome {
        manifest,
        manifest_path,
        chunk_paths,
    })
}

fn write_chunk(
    document: &Document,
    plan: &ChunkPlan,
    number: usize,
    total: usize,
    source_name: &str,
    generated_at: &str,
    path: &std::path::Path,
) -> Result<(), ChunkError> {
    let content: String = document.lines[plan.start..plan.end].concat();
    let header = markers::render_header(
        source_name,
        number,
        total,
        plan.start + 1,
        plan.end,
        generated_at,
    );
    let footer = markers::render_footer(number, total);
    let wrapped = markers::wrap_content(&header, &content, &footer);
    fs::write(path, wrapped).map_err(|e| ChunkError::from_io(path, e))
}

/// First `PREVIEW_CHARS` characters of the chunk's trimmed first line.
fn preview(line: &str) -> String {
    line.trim().chars().take(PREVIEW_CHARS).collect()
}
