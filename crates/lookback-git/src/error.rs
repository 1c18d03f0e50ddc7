// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for lookback-git

use thiserror::Error;

/// Errors that can occur while running git or parsing its output
#[derive(Debug, Error)]
pub enum GitError {
    /// The git executable could not be started
    #[error("Failed to run {program}: {source}")]
    Spawn {
        /// The executable that was invoked
        program: String,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// git ran but exited unsuccessfully
    #[error("git {args} failed ({status}): {stderr}")]
    CommandFailed {
        /// The arguments passed to git, space separated
        args: String,
        /// Exit status description
        status: String,
        /// Captured standard error, trimmed
        stderr: String,
    },

    /// git produced output that is not valid UTF-8
    #[error("git {args} produced non UTF-8 output: {source}")]
    InvalidUtf8 {
        /// The arguments passed to git, space separated
        args: String,
        /// The decoding error
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// No git repository encloses the given path
    #[error("Repository not found: {path}")]
    RepositoryNotFound {
        /// The path that was searched for a repository
        path: String,
    },

    /// A status line carried a code outside M, A, D, R, C
    #[error("Unknown file status '{code}' in line: {line}")]
    UnknownStatus {
        /// The offending status field
        code: String,
        /// The full status line
        line: String,
    },

    /// A log record did not split into the expected number of fields
    #[error("Malformed log record: expected {expected} fields, found {found}")]
    MalformedLogRecord {
        /// Number of fields expected per record
        expected: usize,
        /// Number of fields actually present
        found: usize,
    },

    /// The commit count query returned something other than a decimal integer
    #[error("Invalid commit count: {output:?}")]
    InvalidCount {
        /// The trimmed command output
        output: String,
    },

    /// `git show` produced no leading hash line
    #[error("No commit hash in show output for {reference}")]
    MissingCommitHash {
        /// The commit reference that was requested
        reference: String,
    },
}

impl GitError {
    /// True for errors raised while parsing output, as opposed to running git
    #[must_use]
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownStatus { .. }
                | Self::MalformedLogRecord { .. }
                | Self::InvalidCount { .. }
                | Self::MissingCommitHash { .. }
        )
    }
}
