//! The JSON sidecar written next to the chunk files.
//!
//! The manifest is the authoritative reconstruction index: merge walks its
//! records in `chunk_number` order, never the directory listing. Chunk
//! filenames encode the order redundantly, but only as a sanity aid for the
//! human working through the directory.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ChunkError;

/// Advisory proofreading state, mutated by the human editor (by hand, in the
/// manifest), never by split or merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChunkStatus {
    Pending,
    InProgress,
    Completed,
}

/// One chunk as recorded at split time. Line numbers are 1-based with an
/// inclusive `end_line`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkRecord {
    pub filename: String,
    pub chunk_number: usize,
    pub start_line: usize,
    pub end_line: usize,
    pub lines: usize,
    pub first_content: String,
    pub status: ChunkStatus,
    /// The cut was taken purely by line count; no heading, blank line, or
    /// sentence end was available in the lookback window. Worth a manual
    /// rebalance, but not an error.
    pub forced: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub original_file: String,
    pub total_lines: usize,
    /// Whether the source file's final line had a terminator; merge uses
    /// this to reproduce the original byte-for-byte.
    pub ends_with_newline: bool,
    pub created_at: String,
    pub chunks: Vec<ChunkRecord>,
}

impl Manifest {
    /// `<stem>_metadata.json` inside the chunks directory.
    pub fn path_for(chunks_dir: &Path, base_name: &str) -> PathBuf {
        chunks_dir.join(format!("{base_name}_metadata.json"))
    }

    pub fn load(chunks_dir: &Path, base_name: &str) -> Result<Self, ChunkError> {
        let path = Self::path_for(chunks_dir, base_name);
        let raw = fs::read_to_string(&path).map_err(|e| ChunkError::from_io(&path, e))?;
        serde_json::from_str(&raw).map_err(|e| ChunkError::Corruption {
            path,
            detail: format!("manifest is not valid JSON: {e}"),
        })
    }

    pub fn save(&self, chunks_dir: &Path, base_name: &str) -> Result<PathBuf, ChunkError> {
        let path = Self::path_for(chunks_dir, base_name);
        let json = serde_json::to_string_pretty(self).map_err(|e| ChunkError::Corruption {
            path: path.clone(),
            detail: format!("manifest failed to serialize: {e}"),
        })?;
        fs::write(&path, json).map_err(|e| ChunkError::from_io(&path, e))?;
        Ok(path)
    }

    /// Chunk records in ascending `chunk_number` order, regardless of how
    /// the JSON array happens to be ordered.
    pub fn ordered_chunks(&self) -> Vec<&ChunkRecord> {
        let mut refs: Vec<&ChunkRecord> = self.chunks.iter().collect();
        refs.sort_by_key(|c| c.chunk_number);
        refs
    }

    pub fn count_with(&self, status: ChunkStatus) -> usize {
        self.chunks.iter().filter(|c| c.status == status).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(n: usize) -> ChunkRecord {
        ChunkRecord {
            filename: format!("a_chunk_{n:03}.md"),
            chunk_number: n,
            start_line: n,
            end_line: n,
            lines: 1,
            first_content: String::new(),
            status: ChunkStatus::Pending,
            forced: false,
        }
    }

    #[test]
    fn ordered_chunks_sorts_by_number() {
        let manifest = Manifest {
            original_file: "a.md".into(),
            total_lines: 3,
            ends_with_newline: true,
            created_at: "2025-01-01T00:00:00Z".into(),
            chunks: vec![record(3), record(1), record(2)],
        };
        let order: Vec<usize> = manifest.ordered_chunks().iter().map(|c| c.chunk_number).collect();
        assert_eq!(order, vec![1, 2, 3]);
    }

    #[test]
    fn status_round_trips_as_snake_case() {
        let json = serde_json::to_string(&ChunkStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
        let back: ChunkStatus = serde_json::from_str("\"completed\"").unwrap();
        assert_eq!(back, ChunkStatus::Completed);
    }

    #[test]
    fn load_reports_missing_manifest_as_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = Manifest::load(dir.path(), "nope").unwrap_err();
        assert!(matches!(err, ChunkError::NotFound { .. }));
    }

    #[test]
    fn load_reports_bad_json_as_corruption() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(Manifest::path_for(dir.path(), "a"), "{not json").unwrap();
        let err = Manifest::load(dir.path(), "a").unwrap_err();
        assert!(matches!(err, ChunkError::Corruption { .. }));
    }
}
