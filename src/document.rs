use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ChunkError;

/// An input manuscript, loaded once and never mutated.
///
/// Lines keep their trailing `\n` (and any `\r`) so that chunks can be
/// written and later reassembled byte-for-byte. The final line of a file
/// without a trailing newline is kept unterminated.
#[derive(Debug, Clone)]
pub struct Document {
    pub path: PathBuf,
    pub lines: Vec<String>,
    pub ends_with_newline: bool,
}

impl Document {
    /// Read a UTF-8 manuscript from disk.
    pub fn load(path: &Path) -> Result<Self, ChunkError> {
        let raw = fs::read_to_string(path).map_err(|e| ChunkError::from_io(path, e))?;
        Ok(Self::from_text(path, &raw))
    }

    /// Build a document from in-memory text (used heavily by tests).
    pub fn from_text(path: &Path, raw: &str) -> Self {
        let lines = raw.split_inclusive('\n').map(str::to_owned).collect();
        Document {
            path: path.to_path_buf(),
            lines,
            ends_with_newline: raw.ends_with('\n'),
        }
    }

    pub fn total_lines(&self) -> usize {
        self.lines.len()
    }

    /// File stem used to derive chunk and manifest filenames.
    pub fn stem(&self) -> String {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "manuscript".to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_keep_terminators() {
        let doc = Document::from_text(Path::new("a.md"), "one\ntwo\n");
        assert_eq!(doc.lines, vec!["one\n", "two\n"]);
        assert!(doc.ends_with_newline);
    }

    #[test]
    fn unterminated_last_line_is_preserved() {
        let doc = Document::from_text(Path::new("a.md"), "one\ntwo");
        assert_eq!(doc.lines, vec!["one\n", "two"]);
        assert!(!doc.ends_with_newline);
    }

    #[test]
    fn empty_input_has_no_lines() {
        let doc = Document::from_text(Path::new("a.md"), "");
        assert_eq!(doc.total_lines(), 0);
        assert!(!doc.ends_with_newline);
    }
}
