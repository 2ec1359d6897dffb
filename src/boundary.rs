//! Boundary planning: where a manuscript gets cut into chunks.
//!
//! Purely a function of the line content and the chunk size, so splitting the
//! same document twice always yields the same boundaries.

use crate::constants::BOUNDARY_LOOKBACK;

/// One planned chunk: a half-open 0-based line range of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkPlan {
    pub start: usize,
    pub end: usize,
    /// No heading/blank/sentence boundary was found in the lookback window;
    /// the cut was taken purely by line count.
    pub forced: bool,
}

impl ChunkPlan {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Plan chunk boundaries over `lines` with a target of `chunk_lines` per
/// chunk.
///
/// Chunks cover the document exactly once, in order. A chunk may exceed
/// `chunk_lines` when the cut would otherwise land inside an open fenced
/// code block; the last chunk absorbs any remainder.
pub fn plan_chunks(lines: &[String], chunk_lines: usize) -> Vec<ChunkPlan> {
    assert!(chunk_lines >= 1, "chunk_lines must be positive");

    let mut plans = Vec::new();
    let mut pos = 0;

    while pos < lines.len() {
        if lines.len() - pos <= chunk_lines {
            plans.push(ChunkPlan {
                start: pos,
                end: lines.len(),
                forced: false,
            });
            break;
        }

        let window = &lines[pos..pos + chunk_lines];
        let (cut, forced) = match find_soft_boundary(window) {
            Some(offset) => (pos + offset, false),
            None => (pos + chunk_lines, true),
        };

        // Never leave a fence open at a chunk boundary: extend through the
        // next closing marker (or to the end of the document if the fence
        // never closes).
        let end = if fence_open(&lines[pos..cut]) {
            match lines[cut..].iter().position(|l| is_fence(l)) {
                Some(off) => cut + off + 1,
                None => lines.len(),
            }
        } else {
            cut
        };

        plans.push(ChunkPlan {
            start: pos,
            end,
            forced,
        });
        pos = end;
    }

    plans
}

/// Search the tail of `window` for the best cut offset, in priority order:
/// before a heading, after a blank line, after a line ending in `。`.
///
/// Returns the number of lines to keep in the current chunk, or `None` when
/// no acceptable boundary exists within the lookback window.
fn find_soft_boundary(window: &[String]) -> Option<usize> {
    let search_start = window.len().saturating_sub(BOUNDARY_LOOKBACK);

    // Heading: cut immediately before it. An offset of zero would produce an
    // empty chunk, so the first line does not count.
    for i in (search_start..window.len()).rev() {
        if window[i].trim_start().starts_with('#') && i > 0 {
            return Some(i);
        }
    }

    // Blank line: cut immediately after it, keeping the remainder non-empty.
    for i in (search_start..window.len()).rev() {
        if window[i].trim().is_empty() && i < window.len() - 1 {
            return Some(i + 1);
        }
    }

    // Sentence end: cut immediately after a full-width Japanese period.
    for i in (search_start..window.len()).rev() {
        if window[i].trim_end().ends_with('。') {
            return Some(i + 1);
        }
    }

    None
}

/// A fenced-code-block delimiter line (``` with an optional language tag).
fn is_fence(line: &str) -> bool {
    line.trim_start().starts_with("```")
}

/// True when an odd number of fence markers has been seen in `lines`.
fn fence_open(lines: &[String]) -> bool {
    lines.iter().filter(|l| is_fence(l)).count() % 2 == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|l| format!("{l}\n")).collect()
    }

    #[test]
    fn forced_cuts_when_no_boundary_exists() {
        // 10 plain lines, no headings/blanks/periods, target 4:
        // forced at [1-4], [5-8], remainder [9-10].
        let lines = doc(&[
            "aa", "bb", "cc", "dd", "ee", "ff", "gg", "hh", "ii", "jj",
        ]);
        let plans = plan_chunks(&lines, 4);
        assert_eq!(
            plans,
            vec![
                ChunkPlan { start: 0, end: 4, forced: true },
                ChunkPlan { start: 4, end: 8, forced: true },
                ChunkPlan { start: 8, end: 10, forced: false },
            ]
        );
    }

    #[test]
    fn prefers_cut_after_blank_line() {
        // Line 3 is blank, target 4: cut after the blank, giving [1-3],[4-5].
        let lines = doc(&["aa", "bb", "", "dd", "ee"]);
        let plans = plan_chunks(&lines, 4);
        assert_eq!(
            plans,
            vec![
                ChunkPlan { start: 0, end: 3, forced: false },
                ChunkPlan { start: 3, end: 5, forced: false },
            ]
        );
    }

    #[test]
    fn prefers_cut_before_heading() {
        let lines = doc(&["aa", "bb", "## sec", "dd", "ee"]);
        let plans = plan_chunks(&lines, 4);
        assert_eq!(plans[0], ChunkPlan { start: 0, end: 2, forced: false });
        assert_eq!(plans[1], ChunkPlan { start: 2, end: 5, forced: false });
    }

    #[test]
    fn heading_outranks_blank_line() {
        // Both a blank (index 1) and a heading (index 3) are in the window;
        // the heading wins even though the blank is also acceptable.
        let lines = doc(&["aa", "", "cc", "# h", "ee", "ff"]);
        let plans = plan_chunks(&lines, 5);
        assert_eq!(plans[0], ChunkPlan { start: 0, end: 3, forced: false });
    }

    #[test]
    fn cuts_after_sentence_end() {
        let lines = doc(&["本文です。", "つづき", "つづき", "つづき", "おわり"]);
        let plans = plan_chunks(&lines, 4);
        assert_eq!(plans[0], ChunkPlan { start: 0, end: 1, forced: false });
    }

    #[test]
    fn fence_extension_reaches_closing_marker() {
        // A 6-line fenced block spans lines 3-8; target 5 forces a cut inside
        // it, so the chunk extends to the fence close at line 8.
        let lines = doc(&[
            "aa", "bb", "```java", "x", "y", "z", "w", "```", "ii", "jj",
        ]);
        let plans = plan_chunks(&lines, 5);
        assert_eq!(plans[0], ChunkPlan { start: 0, end: 8, forced: true });
        assert_eq!(plans[1], ChunkPlan { start: 8, end: 10, forced: false });
    }

    #[test]
    fn unclosed_fence_extends_to_document_end() {
        let lines = doc(&["aa", "```", "x", "y", "z", "w"]);
        let plans = plan_chunks(&lines, 3);
        assert_eq!(plans, vec![ChunkPlan { start: 0, end: 6, forced: true }]);
    }

    #[test]
    fn soft_cut_inside_fence_is_also_extended() {
        // The blank at index 3 is inside the fence; the cut moves to the
        // close at index 5.
        let lines = doc(&["aa", "```", "x", "", "y", "```", "gg", "hh"]);
        let plans = plan_chunks(&lines, 5);
        assert_eq!(plans[0], ChunkPlan { start: 0, end: 6, forced: false });
    }

    #[test]
    fn empty_document_yields_no_chunks() {
        assert!(plan_chunks(&[], 10).is_empty());
    }

    #[test]
    fn coverage_is_exact_and_ordered() {
        let lines = doc(&["a", "b", "", "d", "# e", "f", "g。", "h", "i"]);
        for m in 1..=9 {
            let plans = plan_chunks(&lines, m);
            let mut pos = 0;
            for p in &plans {
                assert_eq!(p.start, pos, "gap or overlap at chunk size {m}");
                assert!(p.end > p.start);
                pos = p.end;
            }
            assert_eq!(pos, lines.len());
        }
    }

    #[test]
    fn planning_is_deterministic() {
        let lines = doc(&["a", "b", "", "d", "e", "f", "", "h", "i", "j"]);
        assert_eq!(plan_chunks(&lines, 4), plan_chunks(&lines, 4));
    }
}
