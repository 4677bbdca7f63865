//! smart-commit - drafts a conventional commit message from your pending diff.
//!
//! # Overview
//!
//! smart-commit reads the repository's uncommitted changes (unstaged first,
//! staged as a fallback), asks an OpenAI-compatible chat-completions endpoint
//! for a conventional-commit draft, shows it, and on a "y" confirmation
//! stages everything and commits with that message. One linear pass per
//! invocation; every error is terminal.

pub mod commit;
pub mod config;
pub mod error;
pub mod git;
pub mod llm;

// Re-export commonly used types
pub use commit::{CommitOutcome, SYSTEM_PROMPT, build_request};
pub use config::Config;
pub use error::{CommitError, ConfigError, GitError, LlmError};
pub use git::{ChangeSet, DiffTarget, Git, collect};
pub use llm::{ChatMessage, ChatRequest, OpenAiClient};
