use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::constants::{DEFAULT_CHUNK_LINES, DEFAULT_CHUNKS_DIR};

#[derive(Parser, Debug)]
#[command(name = "manuscript-chunker")]
#[command(
    about = "Split a manuscript file into bounded, individually editable chunks \
             along safe boundaries, and merge the edited chunks back losslessly."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Split a manuscript into annotated chunk files plus a manifest.
    Split {
        /// Path to the manuscript file.
        input_file: PathBuf,

        /// Target maximum lines per chunk (fenced code blocks may extend a
        /// chunk past this).
        #[arg(long = "chunk-lines", default_value_t = DEFAULT_CHUNK_LINES)]
        chunk_lines: usize,

        /// Directory the chunk files and manifest are written to.
        #[arg(long = "output-dir", default_value = DEFAULT_CHUNKS_DIR)]
        output_dir: PathBuf,
    },

    /// Reassemble the original manuscript from a chunk directory.
    Merge {
        /// Base name of the split manuscript (file stem, e.g. "chapter04").
        base_name: String,

        /// Path the reconstructed manuscript is written to.
        output_file: PathBuf,

        /// Directory containing the chunk files and manifest.
        #[arg(long = "chunks-dir", default_value = DEFAULT_CHUNKS_DIR)]
        chunks_dir: PathBuf,

        /// External style checker to run on the merged output (advisory
        /// only); the output path is appended as the last argument.
        #[arg(long = "lint-command")]
        lint_command: Option<String>,
    },

    /// Show proofreading progress recorded in the manifest.
    Status {
        /// Base name of the split manuscript (file stem).
        base_name: String,

        /// Directory containing the chunk files and manifest.
        #[arg(long = "chunks-dir", default_value = DEFAULT_CHUNKS_DIR)]
        chunks_dir: PathBuf,
    },
}
