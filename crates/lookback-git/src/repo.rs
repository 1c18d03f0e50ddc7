// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Repository queries built on a [`GitRunner`]
//!
//! Each method issues exactly one git invocation and parses its output.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::args;
use crate::error::GitError;
use crate::log::{LogEntry, parse_log_output};
use crate::runner::{GitCli, GitRunner};
use crate::status::{CommitChanges, parse_show_output};

/// A git working tree queried through the command-line tool
pub struct GitRepo {
    runner: Box<dyn GitRunner>,
    root: PathBuf,
}

impl std::fmt::Debug for GitRepo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitRepo").field("root", &self.root).finish()
    }
}

impl GitRepo {
    /// Query the working tree at `root` with the `git` executable
    #[must_use]
    pub fn open(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self::with_runner(GitCli::new(&root), root)
    }

    /// Query the working tree at `root` through a custom runner
    #[must_use]
    pub fn with_runner(runner: impl GitRunner + 'static, root: impl Into<PathBuf>) -> Self {
        Self {
            runner: Box::new(runner),
            root: root.into(),
        }
    }

    /// Find the top level of the working tree containing `path`
    ///
    /// # Errors
    ///
    /// Returns `GitError::RepositoryNotFound` if `path` is not inside a
    /// working tree, or `GitError::Spawn` if `program` cannot be run.
    pub async fn discover(path: impl AsRef<Path>, program: &str) -> Result<Self, GitError> {
        let path = path.as_ref();
        let cli = GitCli::new(path).with_program(program);
        let toplevel = cli
            .run(&["rev-parse".to_string(), "--show-toplevel".to_string()])
            .await
            .map_err(|e| match e {
                GitError::CommandFailed { .. } => GitError::RepositoryNotFound {
                    path: path.display().to_string(),
                },
                other => other,
            })?;

        let root = PathBuf::from(toplevel.trim());
        debug!(root = %root.display(), "discovered repository");
        Ok(Self::with_runner(
            GitCli::new(&root).with_program(program),
            root,
        ))
    }

    /// The working tree root; file paths from git are relative to it
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Commit summaries in the window `[skip, skip + count)`, newest first
    ///
    /// # Errors
    ///
    /// Propagates runner failures and `GitError::MalformedLogRecord`.
    pub async fn list_commits(&self, skip: usize, count: usize) -> Result<Vec<LogEntry>, GitError> {
        let output = self.runner.run(&args::log(skip, count)).await?;
        let entries = parse_log_output(&output)?;
        debug!(skip, count, returned = entries.len(), "listed commits");
        Ok(entries)
    }

    /// Name of the checked out branch (`HEAD` when detached)
    ///
    /// # Errors
    ///
    /// Propagates runner failures.
    pub async fn current_branch_name(&self) -> Result<String, GitError> {
        let output = self.runner.run(&args::current_branch()).await?;
        Ok(output.trim().to_string())
    }

    /// Number of commits reachable from HEAD
    ///
    /// # Errors
    ///
    /// Returns `GitError::InvalidCount` if git's output is not a decimal
    /// integer, and propagates runner failures.
    pub async fn total_commit_count(&self) -> Result<u64, GitError> {
        let output = self.runner.run(&args::commit_count()).await?;
        parse_count(&output)
    }

    /// Resolve `commit` and list the files it changed
    ///
    /// # Errors
    ///
    /// Propagates runner failures and status parse errors.
    pub async fn commit_changes(&self, commit: &str) -> Result<CommitChanges, GitError> {
        let output = self.runner.run(&args::show_name_status(commit)).await?;
        let changes = parse_show_output(commit, &output)?;
        debug!(commit, hash = %changes.hash, files = changes.files.len(), "resolved commit");
        Ok(changes)
    }
}

/// Parse `rev-list --count` output
///
/// # Errors
///
/// Returns `GitError::InvalidCount` unless the trimmed text is a decimal integer.
pub fn parse_count(output: &str) -> Result<u64, GitError> {
    let trimmed = output.trim();
    trimmed.parse::<u64>().map_err(|_| GitError::InvalidCount {
        output: trimmed.to_string(),
    })
}
