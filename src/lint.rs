//! Advisory hook for an external lint/style checker run against the merged
//! output.
//!
//! The checker is an opaque subprocess; we only look at its exit status and
//! how much it printed. Its findings never alter the merged file or the
//! merge's own exit status.

use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result, anyhow};
use tracing::{info, warn};

#[derive(Debug, Clone, Copy)]
pub struct LintOutcome {
    pub passed: bool,
    /// Rough issue-count signal: lines the checker printed to stdout.
    pub reported_lines: usize,
}

/// Run `command` (whitespace-split, with the target path appended) and
/// reduce its output to a pass/fail signal.
pub fn run_lint(command: &str, target: &Path) -> Result<LintOutcome> {
    let mut parts = command.split_whitespace();
    let program = parts
        .next()
        .ok_or_else(|| anyhow!("empty lint command"))?;

    let output = Command::new(program)
        .args(parts)
        .arg(target)
        .output()
        .with_context(|| format!("failed to spawn lint command {program:?}"))?;

    let passed = output.status.success();
    let reported_lines = String::from_utf8_lossy(&output.stdout)
        .lines()
        .filter(|l| !l.trim().is_empty())
        .count();

    if passed {
        info!(target = %target.display(), "lint passed");
    } else {
        warn!(
            target = %target.display(),
            reported_lines,
            status = ?output.status.code(),
            "lint reported problems"
        );
    }

    Ok(LintOutcome {
        passed,
        reported_lines,
    })
}
