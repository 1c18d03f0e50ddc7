// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Commit history tokenizing
//!
//! `git log` is asked to print every commit as a record that starts with
//! [`ENTRY_SEPARATOR`] followed by six fields, each introduced by
//! [`ITEM_SEPARATOR`]. Splitting a record on the item separator therefore
//! yields one leading empty field followed by the six values.

use crate::error::GitError;
use serde::{Deserialize, Serialize};

/// Marks the start of each commit record
pub const ENTRY_SEPARATOR: &str = "<~lookback-entry~>";

/// Marks the start of each field inside a record
pub const ITEM_SEPARATOR: &str = "<~lookback-item~>";

/// Number of fields in each record
pub const FIELD_COUNT: usize = 6;

/// Build the `--format` template matching [`parse_log_output`]
///
/// Fields in order: subject, abbreviated hash, ref decoration, author name,
/// author email, relative commit date.
#[must_use]
pub fn log_format() -> String {
    let fields = ["%s", "%h", "%d", "%an", "%ae", "%cr"];
    let mut format = String::from(ENTRY_SEPARATOR);
    for field in fields {
        format.push_str(ITEM_SEPARATOR);
        format.push_str(field);
    }
    format
}

/// One commit summary from the history listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// First line of the commit message
    pub subject: String,
    /// Abbreviated commit hash
    pub hash: String,
    /// Ref decoration, e.g. `(HEAD -> main, tag: v1.0)`, possibly empty
    pub ref_names: String,
    /// Author name
    pub author_name: String,
    /// Author email
    pub author_email: String,
    /// Relative commit date, e.g. `3 days ago`
    pub date: String,
}

impl LogEntry {
    /// Individual ref names from the decoration label
    ///
    /// `(HEAD -> main, origin/main, tag: v1.0)` yields
    /// `["HEAD", "main", "origin/main", "tag: v1.0"]`.
    #[must_use]
    pub fn refs(&self) -> Vec<&str> {
        let inner = self
            .ref_names
            .trim()
            .trim_start_matches('(')
            .trim_end_matches(')');
        inner
            .split(", ")
            .flat_map(|r| r.split(" -> "))
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .collect()
    }

    /// Whether the decoration marks this commit as HEAD
    #[must_use]
    pub fn is_head(&self) -> bool {
        self.refs().contains(&"HEAD")
    }

    fn from_fields(fields: &[&str]) -> Self {
        Self {
            subject: fields[0].trim().to_string(),
            hash: fields[1].trim().to_string(),
            ref_names: fields[2].trim().to_string(),
            author_name: fields[3].trim().to_string(),
            author_email: fields[4].trim().to_string(),
            date: fields[5].trim().to_string(),
        }
    }
}

/// Tokenize `git log` output produced with [`log_format`]
///
/// Fragments that are empty after trimming are skipped. Entries are returned
/// in the order git printed them (newest first).
///
/// # Errors
///
/// Returns `GitError::MalformedLogRecord` if any record does not consist of
/// a leading empty field followed by exactly [`FIELD_COUNT`] fields.
pub fn parse_log_output(output: &str) -> Result<Vec<LogEntry>, GitError> {
    let mut entries = Vec::new();

    for record in output.split(ENTRY_SEPARATOR) {
        if record.trim().is_empty() {
            continue;
        }

        let mut fields: Vec<&str> = record.split(ITEM_SEPARATOR).collect();
        let leading = fields.remove(0);
        if !leading.trim().is_empty() || fields.len() != FIELD_COUNT {
            return Err(GitError::MalformedLogRecord {
                expected: FIELD_COUNT,
                found: if leading.trim().is_empty() {
                    fields.len()
                } else {
                    fields.len() + 1
                },
            });
        }

        entries.push(LogEntry::from_fields(&fields));
    }

    Ok(entries)
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn field() -> impl Strategy<Value = String> {
        "[A-Za-z0-9 :@.()_-]{0,30}"
    }

    fn entry_strategy() -> impl Strategy<Value = LogEntry> {
        (field(), "[0-9a-f]{7}", field(), field(), field(), field()).prop_map(
            |(subject, hash, ref_names, author_name, author_email, date)| LogEntry {
                subject: subject.trim().to_string(),
                hash,
                ref_names: ref_names.trim().to_string(),
                author_name: author_name.trim().to_string(),
                author_email: author_email.trim().to_string(),
                date: date.trim().to_string(),
            },
        )
    }

    fn render(entries: &[LogEntry]) -> String {
        let mut out = String::new();
        for e in entries {
            out.push_str(ENTRY_SEPARATOR);
            for f in [
                &e.subject,
                &e.hash,
                &e.ref_names,
                &e.author_name,
                &e.author_email,
                &e.date,
            ] {
                out.push_str(ITEM_SEPARATOR);
                out.push_str(f);
            }
            out.push('\n');
        }
        out
    }

    proptest! {
        /// Property: K well-formed records yield K entries in input order
        #[test]
        fn prop_record_count_and_order(entries in proptest::collection::vec(entry_strategy(), 0..20)) {
            let parsed = parse_log_output(&render(&entries)).unwrap();
            prop_assert_eq!(parsed, entries);
        }
    }
}
