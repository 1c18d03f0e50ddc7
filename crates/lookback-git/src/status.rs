// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Per-file status parsing for `git show --name-status` output
//!
//! Each status line is tab separated:
//!
//! ```text
//! M	src/lib.rs
//! R100	old/name.rs	new/name.rs
//! ```
//!
//! The three-field form is only produced for renames and copies, where the
//! path of interest is the new one.
//!
//! Paths with control characters, quotes, backslashes or non-ASCII bytes are
//! C-quoted by git (`"caf\303\251.txt"`) and are unquoted while parsing.

use crate::error::GitError;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Classification of a single file change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Contents changed in place
    Modified,
    /// File introduced by the commit
    Added,
    /// File removed by the commit
    Deleted,
    /// File moved to a new path
    Renamed,
    /// File copied to a new path
    Copied,
}

impl Status {
    /// All statuses, in tag order
    pub const ALL: [Status; 5] = [
        Status::Modified,
        Status::Added,
        Status::Deleted,
        Status::Renamed,
        Status::Copied,
    ];

    /// Parse a status field such as `M`, `d` or `R100`
    ///
    /// Only the first character is significant and it is matched
    /// case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns `GitError::UnknownStatus` for anything outside M, A, D, R, C.
    pub fn from_code(code: &str) -> Result<Self, GitError> {
        let unknown = || GitError::UnknownStatus {
            code: code.to_string(),
            line: code.to_string(),
        };
        match code.chars().next().map(|c| c.to_ascii_uppercase()) {
            Some('M') => Ok(Status::Modified),
            Some('A') => Ok(Status::Added),
            Some('D') => Ok(Status::Deleted),
            Some('R') => Ok(Status::Renamed),
            Some('C') => Ok(Status::Copied),
            _ => Err(unknown()),
        }
    }

    /// The single-letter tag git uses for this status
    #[must_use]
    pub fn letter(self) -> char {
        match self {
            Status::Modified => 'M',
            Status::Added => 'A',
            Status::Deleted => 'D',
            Status::Renamed => 'R',
            Status::Copied => 'C',
        }
    }

    /// Human readable label, used for tooltips
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Status::Modified => "Modified",
            Status::Added => "Added",
            Status::Deleted => "Deleted",
            Status::Renamed => "Renamed",
            Status::Copied => "Copied",
        }
    }

    /// Name used in icon file names (`status-<name>.svg`)
    #[must_use]
    pub fn icon_name(self) -> &'static str {
        match self {
            Status::Modified => "modified",
            Status::Added => "added",
            Status::Deleted => "deleted",
            Status::Renamed => "renamed",
            Status::Copied => "copied",
        }
    }

    /// Whether git reports an old and a new path for this status
    #[must_use]
    pub fn has_source_path(self) -> bool {
        matches!(self, Status::Renamed | Status::Copied)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One changed file in a commit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileChange {
    /// Change classification
    pub status: Status,
    /// Repository-relative path (the new path for renames and copies)
    pub path: String,
    /// Previous path for renames and copies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_path: Option<String>,
    /// Similarity score reported alongside `R`/`C`, e.g. 100 for `R100`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub similarity: Option<u8>,
}

/// Parse one `--name-status` line
///
/// Returns `Ok(None)` when the line has fewer than two tab-separated fields.
///
/// # Errors
///
/// Returns `GitError::UnknownStatus` if the status code is not recognised.
pub fn parse_status_line(line: &str) -> Result<Option<FileChange>, GitError> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() < 2 {
        debug!(line, "skipping unparsable status line");
        return Ok(None);
    }

    let code = fields[0].trim();
    let status = Status::from_code(code).map_err(|_| GitError::UnknownStatus {
        code: code.to_string(),
        line: line.to_string(),
    })?;

    let (path, old_path) = if status.has_source_path() && fields.len() >= 3 {
        (fields[fields.len() - 1], Some(unquote_path(fields[1])))
    } else {
        (fields[1], None)
    };

    let similarity = if status.has_source_path() {
        code[1..].parse::<u8>().ok()
    } else {
        None
    };

    Ok(Some(FileChange {
        status,
        path: unquote_path(path),
        old_path,
        similarity,
    }))
}

/// Undo git's C-style path quoting
///
/// Fields that are not wrapped in double quotes are returned as is. Octal
/// escapes are decoded as raw bytes, so multi-byte UTF-8 sequences come back
/// as the original characters.
#[must_use]
pub fn unquote_path(field: &str) -> String {
    let Some(inner) = field
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
    else {
        return field.to_string();
    };

    let mut bytes = Vec::with_capacity(inner.len());
    let mut iter = inner.bytes().peekable();
    while let Some(b) = iter.next() {
        if b != b'\\' {
            bytes.push(b);
            continue;
        }
        match iter.next() {
            Some(b'a') => bytes.push(0x07),
            Some(b'b') => bytes.push(0x08),
            Some(b't') => bytes.push(b'\t'),
            Some(b'n') => bytes.push(b'\n'),
            Some(b'v') => bytes.push(0x0b),
            Some(b'f') => bytes.push(0x0c),
            Some(b'r') => bytes.push(b'\r'),
            Some(digit @ b'0'..=b'7') => {
                let mut value = u32::from(digit - b'0');
                for _ in 0..2 {
                    match iter.peek() {
                        Some(&next @ b'0'..=b'7') => {
                            value = value * 8 + u32::from(next - b'0');
                            iter.next();
                        }
                        _ => break,
                    }
                }
                bytes.push(u8::try_from(value).unwrap_or(b'?'));
            }
            // covers \" and \\ as well as anything git does not emit
            Some(other) => bytes.push(other),
            None => bytes.push(b'\\'),
        }
    }

    match String::from_utf8(bytes) {
        Ok(path) => path,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    }
}

/// Resolved commit and its changed files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitChanges {
    /// Commit hash as printed by git (abbreviated)
    pub hash: String,
    /// Files changed by the commit, in output order
    pub files: Vec<FileChange>,
}

/// Parse the output of `git show --format=%h --name-status <commit>`
///
/// The first line is the resolved hash, the second is blank and the status
/// lines follow from the third line onward.
///
/// # Errors
///
/// Returns `GitError::MissingCommitHash` if there is no hash line and
/// propagates status parse errors.
pub fn parse_show_output(reference: &str, output: &str) -> Result<CommitChanges, GitError> {
    let mut lines = output.lines();
    let hash = lines
        .next()
        .map(str::trim)
        .filter(|h| !h.is_empty())
        .ok_or_else(|| GitError::MissingCommitHash {
            reference: reference.to_string(),
        })?
        .to_string();

    let mut files = Vec::new();
    for line in lines.skip(1).filter(|l| !l.trim().is_empty()) {
        if let Some(change) = parse_status_line(line)? {
            files.push(change);
        }
    }

    Ok(CommitChanges { hash, files })
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn path_strategy() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9_./ -]{1,40}"
    }

    /// Quote `path` the way git does when `core.quotePath` is on
    fn git_quote(path: &str) -> String {
        let needs_quoting = path
            .bytes()
            .any(|b| b < 0x20 || b == 0x7f || b >= 0x80 || b == b'"' || b == b'\\');
        if !needs_quoting {
            return path.to_string();
        }
        let mut quoted = String::from("\"");
        for b in path.bytes() {
            match b {
                b'\t' => quoted.push_str("\\t"),
                b'\n' => quoted.push_str("\\n"),
                b'"' => quoted.push_str("\\\""),
                b'\\' => quoted.push_str("\\\\"),
                0x20..=0x7e => quoted.push(char::from(b)),
                _ => quoted.push_str(&format!("\\{b:03o}")),
            }
        }
        quoted.push('"');
        quoted
    }

    proptest! {
        /// Property: non-rename lines take the second field as path
        #[test]
        fn prop_simple_line_path(
            code in prop::sample::select(vec!["M", "A", "D", "m", "a", "d"]),
            path in path_strategy(),
        ) {
            let line = format!("{code}\t{path}");
            let change = parse_status_line(&line).unwrap().unwrap();
            prop_assert_eq!(change.path, path);
            prop_assert_eq!(
                change.status.letter(),
                code.chars().next().unwrap().to_ascii_uppercase()
            );
        }

        /// Property: rename and copy lines take the last field as path
        #[test]
        fn prop_rename_line_path(
            code in prop::sample::select(vec!["R", "C", "r", "c"]),
            score in 0u8..=100,
            old in path_strategy(),
            new in path_strategy(),
        ) {
            let line = format!("{code}{score:03}\t{old}\t{new}");
            let change = parse_status_line(&line).unwrap().unwrap();
            prop_assert_eq!(change.path, new);
            prop_assert_eq!(change.old_path, Some(old));
            prop_assert_eq!(change.similarity, Some(score));
        }

        /// Property: git-quoted paths parse back to the original name
        #[test]
        fn prop_quoted_path_roundtrip(
            code in prop::sample::select(vec!["M", "A", "D"]),
            path in ".{1,20}",
        ) {
            let line = format!("{code}\t{}", git_quote(&path));
            let change = parse_status_line(&line).unwrap().unwrap();
            prop_assert_eq!(change.path, path);
        }

        /// Property: any unrecognised leading code fails
        #[test]
        fn prop_unknown_code_fails(
            code in "[B-Zb-z0-9?!]".prop_filter("recognised code", |c| {
                !matches!(c.to_ascii_uppercase().as_str(), "M" | "A" | "D" | "R" | "C")
            }),
            path in path_strategy(),
        ) {
            let line = format!("{code}\t{path}");
            prop_assert!(parse_status_line(&line).is_err());
        }
    }
}
