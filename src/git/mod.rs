//! Git operations via the system `git` binary.
//!
//! Everything shells out to `git`, inheriting the user's existing config and
//! credential store. Command output is treated as opaque text; only the exit
//! status and byte length matter here.

pub mod diff;

use std::path::PathBuf;
use std::process::Command;

use crate::error::GitError;

pub use diff::{ChangeSet, MAX_DIFF_BYTES, collect};

/// Which side of the index a diff targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffTarget {
    /// Working tree vs index (`git diff`).
    WorkingTree,
    /// Index vs HEAD (`git diff --cached`).
    Index,
}

impl DiffTarget {
    fn flag(self) -> Option<&'static str> {
        match self {
            DiffTarget::WorkingTree => None,
            DiffTarget::Index => Some("--cached"),
        }
    }
}

/// Runner for git subcommands, optionally pinned to a directory.
pub struct Git {
    workdir: Option<PathBuf>,
}

impl Git {
    /// Run git in the process's current directory.
    pub fn new() -> Self {
        Self { workdir: None }
    }

    /// Run git in a specific directory. Tests use this with scratch repos.
    pub fn in_dir(path: impl Into<PathBuf>) -> Self {
        Self {
            workdir: Some(path.into()),
        }
    }

    /// Unified diff for the given target, optionally with a reduced context
    /// window (`-U<n>`).
    pub fn diff(&self, target: DiffTarget, context: Option<u32>) -> Result<String, GitError> {
        let context_arg = context.map(|n| format!("-U{n}"));
        let mut args: Vec<&str> = vec!["diff"];
        if let Some(arg) = context_arg.as_deref() {
            args.push(arg);
        }
        if let Some(flag) = target.flag() {
            args.push(flag);
        }
        self.run(&args, "diff")
    }

    /// File-level stat summary (`git diff --stat`) for the given target.
    pub fn diff_stat(&self, target: DiffTarget) -> Result<String, GitError> {
        let mut args = vec!["diff", "--stat"];
        if let Some(flag) = target.flag() {
            args.push(flag);
        }
        self.run(&args, "diff --stat")
    }

    /// Stage every change in the working tree (`git add -A`).
    pub fn stage_all(&self) -> Result<(), GitError> {
        self.run(&["add", "-A"], "add").map(|_| ())
    }

    /// Create a commit using the given message verbatim.
    pub fn commit(&self, message: &str) -> Result<(), GitError> {
        self.run(&["commit", "-m", message], "commit").map(|_| ())
    }

    /// Run a git command and return its stdout, or a descriptive error.
    fn run(&self, args: &[&str], operation: &'static str) -> Result<String, GitError> {
        let mut cmd = Command::new("git");
        if let Some(dir) = &self.workdir {
            cmd.current_dir(dir);
        }

        let output = cmd
            .args(args)
            .output()
            .map_err(|source| GitError::Spawn { operation, source })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(GitError::CommandFailed { operation, stderr });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl Default for Git {
    fn default() -> Self {
        Self::new()
    }
}

/// Check that the `git` binary is installed and accessible.
///
/// Uses the `which` crate for cross-platform executable detection.
pub fn check_git_installed() -> Result<(), GitError> {
    if which::which("git").is_err() {
        return Err(GitError::NotInstalled);
    }
    Ok(())
}
