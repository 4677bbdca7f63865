//! Error types for smart-commit modules using thiserror.

use thiserror::Error;

/// Errors from configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("OPENAI_API_KEY is not set. Export your OpenAI API key before running")]
    MissingApiKey,
}

/// Errors from git operations.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("git not found in PATH. Install it from https://git-scm.com")]
    NotInstalled,

    #[error("No changes to commit (working tree and index are clean)")]
    NoChanges,

    #[error("Failed to run git {operation}: {source}")]
    Spawn {
        operation: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("git {operation} failed: {stderr}")]
    CommandFailed {
        operation: &'static str,
        stderr: String,
    },
}

/// Errors from the chat-completions client.
///
/// Every upstream status maps to exactly one variant; all of them are
/// terminal for the run.
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("Invalid API key or unauthorized access (HTTP 401): {body}")]
    Unauthorized { body: String },

    #[error("Bad request rejected by the API (HTTP 400): {body}")]
    BadRequest { body: String },

    #[error("Rate limit exceeded (HTTP 429): {body}")]
    RateLimited { body: String },

    #[error("Upstream service error (HTTP {status}): {body}")]
    Upstream { status: u16, body: String },

    #[error("Unexpected status code {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("Failed to parse completion response: {reason}. Raw response: {body}")]
    MalformedResponse { reason: String, body: String },

    #[error("No commit message generated (response contained zero choices)")]
    EmptyCompletion,

    #[error("Failed to reach the completions endpoint: {0}")]
    Transport(#[source] reqwest::Error),
}

/// Errors from the commit orchestration step.
#[derive(Error, Debug)]
pub enum CommitError {
    #[error("Failed to read confirmation input: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Git(#[from] GitError),
}
