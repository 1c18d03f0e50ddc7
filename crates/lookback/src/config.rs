// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Configuration for the lookback command-line host
//!
//! This module provides configuration types and utilities for the binary,
//! including the workspace, git executable, icon directory and logging options.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

/// Default number of commits shown per page
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// Lookback - browse git history as source-control resources
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "lookback")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Subcommand to run (defaults to listing the first page of history)
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Workspace directory inside the git working tree
    ///
    /// Defaults to the current working directory.
    #[arg(short, long, env = "LOOKBACK_WORKSPACE")]
    pub workspace: Option<PathBuf>,

    /// git executable to run
    #[arg(long, env = "LOOKBACK_GIT")]
    pub git: Option<String>,

    /// Directory holding `<theme>/status-<name>.svg` icons
    ///
    /// Defaults to `resources/icons` under the repository root.
    #[arg(long, env = "LOOKBACK_ICONS")]
    pub icons: Option<PathBuf>,

    /// Enable verbose logging (debug level)
    ///
    /// Logs every git invocation. Logs are written to stderr so that
    /// stdout carries only JSON.
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    ///
    /// Only errors and warnings will be logged.
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List commit summaries, newest first
    Log {
        /// Number of commits to skip
        #[arg(long, default_value_t = 0)]
        skip: usize,

        /// Maximum number of commits to list
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        count: usize,
    },

    /// Select a commit and print its changed files as resources
    Show {
        /// Commit hash, abbreviated hash or reference
        commit: String,
    },

    /// Print the current branch name
    Branch,

    /// Print the number of commits reachable from HEAD
    Count,
}

impl Default for Command {
    fn default() -> Self {
        Command::Log {
            skip: 0,
            count: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Config {
    /// The subcommand to run, falling back to the first history page
    #[must_use]
    pub fn effective_command(&self) -> Command {
        self.command.clone().unwrap_or_default()
    }

    /// Get the workspace path, using current directory as default
    ///
    /// Returns `None` if no workspace is specified and the current
    /// directory cannot be determined.
    #[must_use]
    pub fn workspace_path(&self) -> Option<PathBuf> {
        self.workspace
            .clone()
            .or_else(|| std::env::current_dir().ok())
    }

    /// The git executable, `git` unless overridden
    #[must_use]
    pub fn git_program(&self) -> &str {
        self.git.as_deref().unwrap_or("git")
    }

    /// Icon directory, defaulting to `resources/icons` under `repo_root`
    #[must_use]
    pub fn icons_path(&self, repo_root: &Path) -> PathBuf {
        self.icons
            .clone()
            .unwrap_or_else(|| repo_root.join("resources").join("icons"))
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the workspace path is specified but doesn't
    /// exist or is not a directory.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref workspace) = self.workspace {
            if !workspace.exists() {
                return Err(ConfigError::WorkspaceNotFound(workspace.clone()));
            }
            if !workspace.is_dir() {
                return Err(ConfigError::WorkspaceNotDirectory(workspace.clone()));
            }
        }
        if self.git.as_deref().is_some_and(|g| g.trim().is_empty()) {
            return Err(ConfigError::EmptyGitProgram);
        }
        Ok(())
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Workspace path not found
    #[error("Workspace path not found: {0}")]
    WorkspaceNotFound(PathBuf),

    /// Workspace path is not a directory
    #[error("Workspace path is not a directory: {0}")]
    WorkspaceNotDirectory(PathBuf),

    /// `--git` was given an empty value
    #[error("git executable must not be empty")]
    EmptyGitProgram,
}
