//! Diff collection and size bounding.
//!
//! Oversized diffs are reduced to a stat summary plus a low-context diff so
//! the request fits the model's input budget while every touched file stays
//! visible to the model.

use tracing::debug;

use crate::error::GitError;
use crate::git::{DiffTarget, Git};

/// Maximum bytes of diff body sent to the model (a token-budget proxy).
pub const MAX_DIFF_BYTES: usize = 48_000;

/// Label inserted between the stat summary and the reduced diff.
pub const TRUNCATION_LABEL: &str = "Diff (unified context reduced to 1 line):";

/// The pending changes to summarize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeSet {
    /// Composed text handed to the prompt builder.
    pub text: String,
    /// File-level stat summary; always present when `truncated` is set.
    pub stat: Option<String>,
    /// Whether the diff body was replaced with the bounded representation.
    pub truncated: bool,
}

/// Collect the pending diff, preferring unstaged over staged changes.
///
/// Returns [`GitError::NoChanges`] when both the working tree and the index
/// are clean. A diff strictly larger than [`MAX_DIFF_BYTES`] is replaced by
/// a stat summary plus a unified-context-1 diff from the same target, the
/// latter prefix-truncated to the threshold if it still exceeds it.
pub fn collect(git: &Git) -> Result<ChangeSet, GitError> {
    let mut target = DiffTarget::WorkingTree;
    let mut diff = git.diff(target, None)?;
    if diff.is_empty() {
        target = DiffTarget::Index;
        diff = git.diff(target, None)?;
    }
    if diff.is_empty() {
        return Err(GitError::NoChanges);
    }

    if diff.len() <= MAX_DIFF_BYTES {
        return Ok(ChangeSet {
            text: diff,
            stat: None,
            truncated: false,
        });
    }

    debug!(
        bytes = diff.len(),
        budget = MAX_DIFF_BYTES,
        "diff exceeds budget, switching to bounded representation"
    );

    let stat = git.diff_stat(target)?;
    let compact = git.diff(target, Some(1))?;
    Ok(bound(stat, compact))
}

/// Compose the bounded representation from a stat summary and a compact diff.
///
/// The stat summary goes first so no file is silently omitted even when the
/// diff body below it is cut. An empty stat with a non-empty diff is a git
/// quirk we tolerate; composition still succeeds.
fn bound(stat: String, mut compact: String) -> ChangeSet {
    if compact.len() > MAX_DIFF_BYTES {
        truncate_to_boundary(&mut compact, MAX_DIFF_BYTES);
    }

    let text = format!("{stat}\n{TRUNCATION_LABEL}\n{compact}");
    ChangeSet {
        text,
        stat: Some(stat),
        truncated: true,
    }
}

/// Prefix-truncate to at most `max` bytes, snapping back to a char boundary
/// so the result stays valid UTF-8. May split a line; the bounded diff is
/// best-effort signal for the model, not a committed artifact.
fn truncate_to_boundary(text: &mut String, max: usize) {
    if text.len() <= max {
        return;
    }
    let mut end = max;
    while end > 0 && !text.is_char_boundary(end) {
        end -= 1;
    }
    text.truncate(end);
}
