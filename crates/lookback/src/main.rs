// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! lookback: browse git history as source-control resources
//!
//! This binary is a minimal host for the session model: it runs one query
//! against the working tree and prints the result as JSON on stdout.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use lookback::config::{Command, Config};
use lookback::sink::JsonSink;
use lookback::{IconSet, Session};
use lookback_git::GitRepo;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    // Logs go to stderr so stdout carries only JSON
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .init();

    config.validate()?;
    run(&config).await
}

async fn run(config: &Config) -> Result<()> {
    let workspace = config
        .workspace_path()
        .context("Cannot determine workspace directory")?;
    let repo = GitRepo::discover(&workspace, config.git_program())
        .await
        .with_context(|| format!("Cannot open repository at {}", workspace.display()))?;
    debug!(root = %repo.root().display(), "opened repository");

    let icons = IconSet::new(config.icons_path(repo.root()));
    let sink = JsonSink::pretty(std::io::stdout());
    let write_errors = sink.error_slot();
    let mut session = Session::new(repo, icons, Box::new(sink));

    match config.effective_command() {
        Command::Log { skip, count } => {
            let entries = session
                .list_commits(skip, count)
                .await
                .context("Failed to list commits")?;
            info!(skip, count, listed = entries.len(), "listed commits");
            print_line(&serde_json::to_string_pretty(&entries)?)?;
        }
        Command::Show { commit } => {
            session
                .set_selected_commit(&commit)
                .await
                .with_context(|| format!("Failed to select commit {commit}"))?;
            if let Some(e) = write_errors.take() {
                return Err(anyhow::Error::new(e).context("Failed to write resources"));
            }
        }
        Command::Branch => {
            let branch = session
                .current_branch_name()
                .await
                .context("Failed to read current branch")?;
            print_line(&serde_json::to_string(&branch)?)?;
        }
        Command::Count => {
            let count = session
                .total_commit_count()
                .await
                .context("Failed to count commits")?;
            print_line(&count.to_string())?;
        }
    }

    session.dispose();
    Ok(())
}

fn print_line(text: &str) -> Result<()> {
    let mut out = std::io::stdout().lock();
    writeln!(out, "{text}").context("Failed to write output")?;
    out.flush().context("Failed to write output")
}
