// Centralized magic numbers & default values
pub const DEFAULT_CHUNK_LINES: usize = 200;
pub const DEFAULT_CHUNKS_DIR: &str = "proofreading_chunks";

/// How many lines the boundary search scans backward from the size cutoff.
pub const BOUNDARY_LOOKBACK: usize = 50;

/// How many characters of a chunk's first line the manifest previews.
pub const PREVIEW_CHARS: usize = 50;
