//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

/// A scratch git repository driven through the real `git` binary.
///
/// Created with user config set and one commit containing a tracked
/// `f.txt`, so tests can produce diffs by rewriting that file.
pub struct TestRepo {
    pub dir: TempDir,
}

impl TestRepo {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        git(dir.path(), &["init"]);
        git(dir.path(), &["config", "user.name", "Test User"]);
        git(dir.path(), &["config", "user.email", "test@example.com"]);
        git(dir.path(), &["config", "commit.gpgsign", "false"]);

        std::fs::write(dir.path().join("f.txt"), "original\n").expect("Failed to seed file");
        git(dir.path(), &["add", "f.txt"]);
        git(dir.path(), &["commit", "-m", "init"]);

        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the repository root.
    pub fn write(&self, name: &str, contents: &str) {
        std::fs::write(self.path().join(name), contents).expect("Failed to write file");
    }

    /// Stage the given path.
    pub fn stage(&self, name: &str) {
        self.git(&["add", name]);
    }

    /// Run a git command in the repository, panicking on failure.
    pub fn git(&self, args: &[&str]) -> String {
        git(self.path(), args)
    }

    /// Number of commits on HEAD.
    pub fn commit_count(&self) -> usize {
        self.git(&["rev-list", "--count", "HEAD"])
            .trim()
            .parse()
            .expect("Failed to parse commit count")
    }

    /// Message of the HEAD commit.
    pub fn head_message(&self) -> String {
        self.git(&["log", "-1", "--pretty=%B"])
            .trim_end()
            .to_string()
    }
}

fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .current_dir(dir)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("Failed to run git {:?}: {}", args, e));
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("git output was not UTF-8")
}
