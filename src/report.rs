//! Progress reporting over the manifest's advisory chunk statuses.

use std::fmt::Write;

use crate::manifest::{ChunkStatus, Manifest};

/// Render the proofreading progress report for one manifest.
///
/// Pure reporting: reads the statuses the human recorded, changes nothing.
pub fn render_report(manifest: &Manifest) -> String {
    let total = manifest.chunks.len();
    let completed = manifest.count_with(ChunkStatus::Completed);
    let in_progress = manifest.count_with(ChunkStatus::InProgress);
    let pending = manifest.count_with(ChunkStatus::Pending);
    let percent = if total == 0 {
        0.0
    } else {
        completed as f64 / total as f64 * 100.0
    };

    let mut out = String::new();
    writeln!(out, "Proofreading progress for {}", manifest.original_file).unwrap();
    writeln!(out, "  total lines: {}", manifest.total_lines).unwrap();
    writeln!(out, "  chunks:      {total}").unwrap();
    writeln!(out, "  completed:   {completed}/{total} ({percent:.1}%)").unwrap();
    writeln!(out, "  in progress: {in_progress}").unwrap();
    writeln!(out, "  pending:     {pending}").unwrap();
    writeln!(out).unwrap();

    for chunk in manifest.ordered_chunks() {
        let mark = match chunk.status {
            ChunkStatus::Completed => '✓',
            ChunkStatus::InProgress => '…',
            ChunkStatus::Pending => '○',
        };
        let forced = if chunk.forced { "  [forced boundary]" } else { "" };
        writeln!(
            out,
            "  [{mark}] chunk {:3}: lines {:5}-{:5} ({:4} lines) {}{forced}",
            chunk.chunk_number, chunk.start_line, chunk.end_line, chunk.lines, chunk.filename
        )
        .unwrap();
    }

    out
}
