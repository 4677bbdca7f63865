//! smart-commit - CLI entry point.

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use smart_commit::commit::{self, CommitOutcome, build_request};
use smart_commit::config::Config;
use smart_commit::git::{self, Git};
use smart_commit::llm::OpenAiClient;

/// Draft a conventional commit message from your pending diff.
#[derive(Parser, Debug)]
#[command(name = "smart-commit")]
#[command(about = "Draft a conventional commit message from your pending diff")]
#[command(version)]
struct Cli {}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let _cli = Cli::parse();

    // Step 1: Resolve the API key before touching the repository
    let config = Config::from_env()?;

    // Step 2: Check prerequisites
    git::check_git_installed().context("git is required")?;

    // Step 3: Collect the pending diff
    let repo = Git::new();
    let changes = git::collect(&repo)?;

    println!("Generating commit message...");

    // Step 4: Ask the model for a draft
    let request = build_request(&config.model, &changes);
    let client = OpenAiClient::new(config.api_key);
    let message = client
        .complete(&request)
        .await
        .context("Failed to generate commit message")?;

    // Step 5: Confirm and commit
    let stdin = io::stdin();
    let outcome = commit::run(&repo, &message, stdin.lock(), io::stdout())?;

    match outcome {
        CommitOutcome::Committed => println!("\nSuccessfully committed!"),
        CommitOutcome::Cancelled => println!("\nCommit cancelled"),
    }

    Ok(())
}
