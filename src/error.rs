use std::path::PathBuf;

/// Failure taxonomy for split/merge/status operations.
///
/// These tools are local and human-supervised: every error is surfaced
/// immediately with the offending path, and nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum ChunkError {
    #[error("file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("i/o failure on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A chunk file's annotation markers could not be located at merge time.
    /// The file was renamed, truncated, or hand-stripped; we refuse to guess.
    #[error("corrupt chunk annotations in {path}: {detail}")]
    Corruption { path: PathBuf, detail: String },

    #[error("invalid configuration: {detail}")]
    Config { detail: String },
}

impl ChunkError {
    /// Classify an `std::io::Error` for `path` into NotFound vs Io.
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            ChunkError::NotFound { path }
        } else {
            ChunkError::Io { path, source }
        }
    }

    /// Process exit code for this error (config misuse is distinguishable).
    pub fn exit_code(&self) -> i32 {
        match self {
            ChunkError::Config { .. } => 2,
            _ => 1,
        }
    }
}
