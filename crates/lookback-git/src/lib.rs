// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! lookback-git: git command-line output parsing for lookback
//!
//! This library crate runs the `git` executable and turns its history and
//! per-commit status output into plain records.

#![warn(missing_docs)]

//! # Example
//!
//! ```no_run
//! use lookback_git::GitRepo;
//!
//! # async fn demo() -> Result<(), lookback_git::GitError> {
//! let repo = GitRepo::open(".");
//! for entry in repo.list_commits(0, 10).await? {
//!     println!("{} - {}", entry.hash, entry.subject);
//! }
//!
//! let changes = repo.commit_changes("HEAD").await?;
//! for file in changes.files {
//!     println!("{} {}", file.status.letter(), file.path);
//! }
//! # Ok(())
//! # }
//! ```

pub mod args;
pub mod error;
pub mod log;
pub mod repo;
pub mod runner;
pub mod status;

pub use error::GitError;
pub use log::{LogEntry, parse_log_output};
pub use repo::GitRepo;
pub use runner::{GitCli, GitRunner};
pub use status::{
    CommitChanges, FileChange, Status, parse_show_output, parse_status_line, unquote_path,
};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::GitError;
    pub use crate::log::LogEntry;
    pub use crate::repo::GitRepo;
    pub use crate::runner::{GitCli, GitRunner};
    pub use crate::status::{CommitChanges, FileChange, Status};
}
