use std::path::PathBuf;

/// Explicit per-operation configuration, built from CLI arguments.
///
/// Everything the operations need is passed in here; there are no ambient
/// globals or hardcoded paths.
#[derive(Debug, Clone)]
pub struct SplitConfig {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub chunk_lines: usize,
}

#[derive(Debug, Clone)]
pub struct MergeConfig {
    pub base_name: String,
    pub output_file: PathBuf,
    pub chunks_dir: PathBuf,
    pub lint_command: Option<String>,
}

#[derive(Debug, Clone)]
pub struct StatusConfig {
    pub base_name: String,
    pub chunks_dir: PathBuf,
}
