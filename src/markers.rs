//! Chunk annotation blocks: the HTML-comment header/footer wrapped around
//! each chunk's content, and the exact inverse that strips them at merge
//! time.
//!
//! The delimiter lines (`<!--` / `-->`) are the only thing the stripper keys
//! on, so their byte-exact form matters; the text between them is provenance
//! for the human proofreader and keeps the wording of the original workflow.

use std::path::Path;

use crate::error::ChunkError;

/// Render the leading annotation block, including the blank line that
/// separates it from the content region.
pub fn render_header(
    source_name: &str,
    number: usize,
    total: usize,
    start_line: usize,
    end_line: usize,
    generated_at: &str,
) -> String {
    format!(
        "<!--\n\
         校正チャンク情報\n\
         ================\n\
         元ファイル: {source_name}\n\
         チャンク: {number}/{total}\n\
         行範囲: {start_line} - {end_line}\n\
         作成日時: {generated_at}\n\
         \n\
         校正時の注意事項:\n\
         - 文章の流れは前後のチャンクを考慮してください\n\
         - このヘッダーとフッターは校正対象外です\n\
         - 校正が完了したらステータスを「completed」に変更してください\n\
         ================\n\
         -->\n\
         \n"
    )
}

/// Render the trailing annotation block (without the separator blank line;
/// the writer owns that, see [`wrap_content`]).
pub fn render_footer(number: usize, total: usize) -> String {
    format!(
        "<!--\n\
         ================\n\
         チャンク {number}/{total} の終了\n\
         校正ステータス: [ ] 未完了 / [ ] 完了\n\
         ================\n\
         -->\n"
    )
}

/// Assemble a chunk file: header, content, one blank separator line, footer.
///
/// Content is written byte-for-byte. A final chunk whose last line has no
/// terminator gets one injected so the footer starts on its own line; the
/// manifest's `ends_with_newline` lets the merge undo that.
pub fn wrap_content(header: &str, content: &str, footer: &str) -> String {
    let mut out = String::with_capacity(header.len() + content.len() + footer.len() + 2);
    out.push_str(header);
    out.push_str(content);
    if !content.is_empty() && !content.ends_with('\n') {
        out.push('\n');
    }
    out.push('\n');
    out.push_str(footer);
    out
}

/// Strip the annotation blocks from a chunk file, returning the content
/// region untouched.
///
/// Header: everything through the first `-->` line, plus the single blank
/// line following it. Footer: the last `<!--` line and everything after,
/// plus the single separator blank line preceding it. Exactly one blank is
/// consumed on each side, so blank lines that are genuine content (a cut made
/// right after a paragraph break) survive.
pub fn strip_annotations(raw: &str, path: &Path) -> Result<String, ChunkError> {
    let lines: Vec<&str> = raw.split_inclusive('\n').collect();

    let header_close = lines
        .iter()
        .position(|l| l.trim() == "-->")
        .ok_or_else(|| ChunkError::Corruption {
            path: path.to_path_buf(),
            detail: "header close marker (-->) not found".to_owned(),
        })?;
    let mut start = header_close + 1;
    if lines.get(start).is_some_and(|l| l.trim().is_empty()) {
        start += 1;
    }

    let footer_open = lines
        .iter()
        .enumerate()
        .skip(start)
        .rev()
        .find(|(_, l)| l.trim() == "<!--")
        .map(|(i, _)| i)
        .ok_or_else(|| ChunkError::Corruption {
            path: path.to_path_buf(),
            detail: "footer open marker (<!--) not found".to_owned(),
        })?;
    let mut end = footer_open;
    if end > start && lines[end - 1].trim().is_empty() {
        end -= 1;
    }

    Ok(lines[start..end].concat())
}
