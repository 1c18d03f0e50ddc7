// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Commit selection state
//!
//! A [`Session`] is created by the host for one working tree. It remembers
//! which commit is selected, holds that commit's changed files as
//! [`Resource`]s and publishes every new list to the host's resource
//! container through a [`ResourceSink`].

use lookback_git::{GitError, GitRepo, LogEntry};
use tracing::{debug, info};

use crate::resource::{IconSet, Resource};

/// The host's source-control resource container
pub trait ResourceSink: Send {
    /// Replace the displayed resources with `resources`
    fn publish(&mut self, resources: &[Resource]);

    /// Release whatever the host registered for this sink
    fn release(&mut self) {}
}

/// Selection state for one working tree
pub struct Session {
    repo: GitRepo,
    icons: IconSet,
    sink: Option<Box<dyn ResourceSink>>,
    selected: Option<String>,
    resources: Vec<Resource>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("repo", &self.repo)
            .field("selected", &self.selected)
            .field("resources", &self.resources.len())
            .finish_non_exhaustive()
    }
}

impl Session {
    /// Create a session that publishes to `sink`
    #[must_use]
    pub fn new(repo: GitRepo, icons: IconSet, sink: Box<dyn ResourceSink>) -> Self {
        Self {
            repo,
            icons,
            sink: Some(sink),
            selected: None,
            resources: Vec::new(),
        }
    }

    /// The repository this session queries
    #[must_use]
    pub fn repo(&self) -> &GitRepo {
        &self.repo
    }

    /// Resolved hash of the selected commit, if any
    #[must_use]
    pub fn selected_commit(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Changed files of the selected commit
    #[must_use]
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    /// Select `commit` and publish its changed files
    ///
    /// An empty or blank `commit` clears the selection without running git.
    /// On error the previous selection and resources are kept.
    ///
    /// # Errors
    ///
    /// Propagates git failures and status parse errors.
    pub async fn set_selected_commit(&mut self, commit: &str) -> Result<(), GitError> {
        let commit = commit.trim();
        if commit.is_empty() {
            debug!("clearing commit selection");
            self.selected = None;
            self.resources.clear();
            self.publish();
            return Ok(());
        }

        let changes = self.repo.commit_changes(commit).await?;
        self.selected = Some(changes.hash.clone());

        let root = self.repo.root();
        self.resources = changes
            .files
            .into_iter()
            .map(|change| Resource::new(&changes.hash, change, root, &self.icons))
            .collect();

        info!(
            commit,
            hash = %changes.hash,
            files = self.resources.len(),
            "selected commit"
        );
        self.publish();
        Ok(())
    }

    /// Commit summaries in the window `[skip, skip + count)`, newest first
    ///
    /// # Errors
    ///
    /// Propagates git failures and malformed log records.
    pub async fn list_commits(&self, skip: usize, count: usize) -> Result<Vec<LogEntry>, GitError> {
        self.repo.list_commits(skip, count).await
    }

    /// Name of the checked out branch
    ///
    /// # Errors
    ///
    /// Propagates git failures.
    pub async fn current_branch_name(&self) -> Result<String, GitError> {
        self.repo.current_branch_name().await
    }

    /// Number of commits reachable from HEAD
    ///
    /// # Errors
    ///
    /// Propagates git failures and `GitError::InvalidCount`.
    pub async fn total_commit_count(&self) -> Result<u64, GitError> {
        self.repo.total_commit_count().await
    }

    /// Tear the session down and release the host's container
    pub fn dispose(mut self) {
        self.release_sink();
    }

    fn publish(&mut self) {
        if let Some(sink) = self.sink.as_mut() {
            sink.publish(&self.resources);
        }
    }

    fn release_sink(&mut self) {
        if let Some(mut sink) = self.sink.take() {
            debug!("releasing resource sink");
            sink.release();
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.release_sink();
    }
}
