// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Argument lists for the git invocations lookback makes

use crate::log::log_format;

/// `log --format=<template> --skip=<skip> --max-count=<count>`
#[must_use]
pub fn log(skip: usize, count: usize) -> Vec<String> {
    vec![
        "log".to_string(),
        format!("--format={}", log_format()),
        format!("--skip={skip}"),
        format!("--max-count={count}"),
    ]
}

/// `rev-parse --abbrev-ref HEAD`
#[must_use]
pub fn current_branch() -> Vec<String> {
    ["rev-parse", "--abbrev-ref", "HEAD"]
        .into_iter()
        .map(String::from)
        .collect()
}

/// `rev-list --count HEAD`
#[must_use]
pub fn commit_count() -> Vec<String> {
    ["rev-list", "--count", "HEAD"]
        .into_iter()
        .map(String::from)
        .collect()
}

/// `show --format=%h --name-status <commit>^{commit}`
///
/// The revision is peeled to a commit so an annotated tag shows the commit
/// it points at instead of the tag object header.
#[must_use]
pub fn show_name_status(commit: &str) -> Vec<String> {
    vec![
        "show".to_string(),
        "--format=%h".to_string(),
        "--name-status".to_string(),
        format!("{commit}^{{commit}}"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    #[test]
    fn test_log_args() {
        let args = log(20, 10);
        assert_eq!(args[0], "log");
        assert!(args[1].starts_with("--format="));
        assert_eq!(args[2], "--skip=20");
        assert_eq!(args[3], "--max-count=10");
    }

    #[test]
    fn test_fixed_queries() {
        assert_eq!(current_branch(), vec!["rev-parse", "--abbrev-ref", "HEAD"]);
        assert_eq!(commit_count(), vec!["rev-list", "--count", "HEAD"]);
    }

    #[test]
    fn test_show_args() {
        assert_eq!(
            show_name_status("abc123"),
            vec!["show", "--format=%h", "--name-status", "abc123^{commit}"]
        );
    }

    #[test]
    fn test_show_args_peel_tags() {
        assert_eq!(show_name_status("v1.0")[3], "v1.0^{commit}");
        assert_eq!(show_name_status("HEAD~2")[3], "HEAD~2^{commit}");
    }
}
