// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Running git and collecting its output
//!
//! [`GitRunner`] is the seam between parsing and the process boundary. The
//! production implementation, [`GitCli`], spawns the git executable in a
//! fixed working directory and buffers everything it writes to stdout.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::error::GitError;

/// Runs git with a list of arguments and returns its standard output
#[async_trait]
pub trait GitRunner: Send + Sync {
    /// Run git and return the complete stdout as text
    ///
    /// # Errors
    ///
    /// Returns an error if git cannot be started, exits unsuccessfully or
    /// writes non UTF-8 output.
    async fn run(&self, args: &[String]) -> Result<String, GitError>;
}

/// Runs the git command-line tool in a working directory
#[derive(Debug, Clone)]
pub struct GitCli {
    program: String,
    workdir: PathBuf,
}

impl GitCli {
    /// Create a runner for `git` in the given directory
    #[must_use]
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            program: "git".to_string(),
            workdir: workdir.into(),
        }
    }

    /// Use a different git executable
    #[must_use]
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// The executable that will be run
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    /// The working directory git runs in
    #[must_use]
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }
}

#[async_trait]
impl GitRunner for GitCli {
    async fn run(&self, args: &[String]) -> Result<String, GitError> {
        let joined = args.join(" ");
        debug!(program = %self.program, args = %joined, workdir = %self.workdir.display(), "running git");

        let output = Command::new(&self.program)
            .args(args)
            .current_dir(&self.workdir)
            .output()
            .await
            .map_err(|source| GitError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(GitError::CommandFailed {
                args: joined,
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8(output.stdout)
            .map_err(|source| GitError::InvalidUtf8 { args: joined, source })?;
        debug!(bytes = stdout.len(), "git finished");
        Ok(stdout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_builder() {
        let cli = GitCli::new("/tmp").with_program("/usr/local/bin/git");
        assert_eq!(cli.program(), "/usr/local/bin/git");
        assert_eq!(cli.workdir(), Path::new("/tmp"));
    }

    #[tokio::test]
    async fn test_missing_executable_is_spawn_error() {
        let cli = GitCli::new(std::env::temp_dir()).with_program("lookback-no-such-git-binary");
        let err = cli.run(&args(&["--version"])).await.unwrap_err();
        assert!(matches!(err, GitError::Spawn { .. }), "got {err:?}");
    }

    #[tokio::test]
    async fn test_version_runs() {
        let cli = GitCli::new(std::env::temp_dir());
        let out = cli.run(&args(&["--version"])).await.expect("git --version");
        assert!(out.starts_with("git version"));
    }

    #[tokio::test]
    async fn test_unknown_ref_is_command_failure() {
        let dir = std::env::temp_dir().join(format!("lookback-runner-{}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("create dir");
        let cli = GitCli::new(&dir);
        // fails whether or not temp_dir sits inside a repository
        let err = cli
            .run(&args(&["rev-parse", "--verify", "lookback-missing-ref-12345"]))
            .await
            .unwrap_err();
        assert!(matches!(err, GitError::CommandFailed { .. }), "got {err:?}");
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_non_utf8_stdout_is_invalid_utf8() {
        // printf expands the octal escape into a lone 0xFF byte
        let cli = GitCli::new(std::env::temp_dir()).with_program("printf");
        let err = cli.run(&args(&["\\377"])).await.unwrap_err();
        match err {
            GitError::InvalidUtf8 { args: joined, .. } => assert_eq!(joined, "\\377"),
            other => panic!("Expected InvalidUtf8, got {other:?}"),
        }
    }
}
