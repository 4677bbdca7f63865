//! Commit confirmation and execution.

pub mod prompt;

use std::io::{BufRead, Write};

use tracing::debug;

use crate::error::CommitError;
use crate::git::Git;

pub use prompt::{SYSTEM_PROMPT, build_request};

/// Result of a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    Committed,
    Cancelled,
}

/// Present the draft, ask for confirmation, and commit on a "y".
///
/// Only a trimmed, case-insensitive "y" proceeds; any other input cancels
/// without touching the repository. Staging and committing are two separate
/// git calls: if the commit fails after staging succeeded, the index stays
/// staged and the error is reported as-is.
pub fn run<R: BufRead, W: Write>(
    git: &Git,
    message: &str,
    mut input: R,
    mut output: W,
) -> Result<CommitOutcome, CommitError> {
    writeln!(output, "\nProposed commit message:\n{message}")?;
    write!(output, "\nDo you want to proceed with this commit message? (y/n): ")?;
    output.flush()?;

    if !read_confirmation(&mut input)? {
        debug!("commit declined");
        return Ok(CommitOutcome::Cancelled);
    }

    git.stage_all()?;
    git.commit(message)?;
    Ok(CommitOutcome::Committed)
}

/// Read one line and compare it, trimmed and case-insensitively, to "y".
fn read_confirmation<R: BufRead>(input: &mut R) -> std::io::Result<bool> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().eq_ignore_ascii_case("y"))
}
