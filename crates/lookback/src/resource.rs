// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Source-control resources
//!
//! A [`Resource`] is one changed file of the selected commit, projected into
//! the shape a host editor's source-control view consumes: an absolute
//! location, decoration hints, per-theme icons and the action the host runs
//! when the entry is opened.

use std::path::{Path, PathBuf};

use lookback_git::{FileChange, Status};
use serde::Serialize;

/// Command identifier the host binds to "open this changed file"
pub const OPEN_RESOURCE_COMMAND: &str = "lookback.openResource";

/// Color theme an icon is drawn for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light backgrounds
    Light,
    /// Dark backgrounds
    Dark,
}

impl Theme {
    /// Directory name under the icon root
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// Locates status icons laid out as `<dir>/<theme>/status-<name>.svg`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSet {
    dir: PathBuf,
}

impl IconSet {
    /// Icons rooted at `dir`
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The icon root
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Location of the icon for `status` in `theme`
    #[must_use]
    pub fn icon_path(&self, status: Status, theme: Theme) -> PathBuf {
        self.dir
            .join(theme.as_str())
            .join(format!("status-{}.svg", status.icon_name()))
    }
}

/// Rendering hints for one resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decorations {
    /// Draw the name struck through
    pub strike_through: bool,
    /// Draw the entry faded
    pub faded: bool,
    /// Hover text
    pub tooltip: String,
    /// Icon for light themes
    pub light_icon: PathBuf,
    /// Icon for dark themes
    pub dark_icon: PathBuf,
}

impl Decorations {
    /// Decorations for a change with the given status
    #[must_use]
    pub fn for_status(status: Status, icons: &IconSet) -> Self {
        let removed = status == Status::Deleted;
        Self {
            strike_through: removed,
            faded: removed,
            tooltip: status.label().to_string(),
            light_icon: icons.icon_path(status, Theme::Light),
            dark_icon: icons.icon_path(status, Theme::Dark),
        }
    }

    /// Icon for the given theme
    #[must_use]
    pub fn icon(&self, theme: Theme) -> &Path {
        match theme {
            Theme::Light => &self.light_icon,
            Theme::Dark => &self.dark_icon,
        }
    }
}

/// Action the host runs when a resource is opened
///
/// Only the identity is carried; executing it is up to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpenCommand {
    /// Command identifier
    pub command: String,
    /// Display title
    pub title: String,
    /// Arguments passed back to the host: commit hash, then relative path
    pub arguments: Vec<String>,
}

/// One changed file of a commit, ready for the host's resource list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resource {
    commit: String,
    #[serde(flatten)]
    change: FileChange,
    location: PathBuf,
    decorations: Decorations,
    open: OpenCommand,
}

impl Resource {
    /// Project `change` from `commit` relative to the working tree `root`
    #[must_use]
    pub fn new(commit: &str, change: FileChange, root: &Path, icons: &IconSet) -> Self {
        let location = root.join(&change.path);
        let decorations = Decorations::for_status(change.status, icons);
        let open = OpenCommand {
            command: OPEN_RESOURCE_COMMAND.to_string(),
            title: "Open".to_string(),
            arguments: vec![commit.to_string(), change.path.clone()],
        };
        Self {
            commit: commit.to_string(),
            change,
            location,
            decorations,
            open,
        }
    }

    /// Commit the change belongs to
    #[must_use]
    pub fn commit(&self) -> &str {
        &self.commit
    }

    /// Change classification
    #[must_use]
    pub fn status(&self) -> Status {
        self.change.status
    }

    /// Path relative to the working tree
    #[must_use]
    pub fn path(&self) -> &str {
        &self.change.path
    }

    /// The parsed change this resource was built from
    #[must_use]
    pub fn change(&self) -> &FileChange {
        &self.change
    }

    /// Absolute location of the file
    #[must_use]
    pub fn location(&self) -> &Path {
        &self.location
    }

    /// Rendering hints
    #[must_use]
    pub fn decorations(&self) -> &Decorations {
        &self.decorations
    }

    /// Host action bound to this resource
    #[must_use]
    pub fn open_command(&self) -> &OpenCommand {
        &self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lookback_git::parse_status_line;
    use similar_asserts::assert_eq;

    fn resource(line: &str) -> Resource {
        let change = parse_status_line(line).unwrap().unwrap();
        Resource::new(
            "1a2b3c4",
            change,
            Path::new("/work/repo"),
            &IconSet::new("/ext/resources/icons"),
        )
    }

    #[test]
    fn test_modified_resource() {
        let r = resource("M\tsrc/foo.ts");
        assert_eq!(r.status(), Status::Modified);
        assert_eq!(r.path(), "src/foo.ts");
        assert_eq!(r.location(), Path::new("/work/repo/src/foo.ts"));
        assert!(!r.decorations().strike_through);
        assert!(!r.decorations().faded);
        assert_eq!(r.decorations().tooltip, "Modified");
    }

    #[test]
    fn test_deleted_resource_is_struck_and_faded() {
        let r = resource("D\tsrc/old.ts");
        assert_eq!(r.status(), Status::Deleted);
        assert_eq!(r.path(), "src/old.ts");
        assert!(r.decorations().strike_through);
        assert!(r.decorations().faded);
    }

    #[test]
    fn test_renamed_resource_points_at_new_path() {
        let r = resource("R100\told/name.ts\tnew/name.ts");
        assert_eq!(r.status(), Status::Renamed);
        assert_eq!(r.path(), "new/name.ts");
        assert_eq!(r.location(), Path::new("/work/repo/new/name.ts"));
        assert_eq!(r.change().old_path.as_deref(), Some("old/name.ts"));
    }

    #[test]
    fn test_icons_per_theme() {
        let r = resource("A\tsrc/new.rs");
        assert_eq!(
            r.decorations().icon(Theme::Light),
            Path::new("/ext/resources/icons/light/status-added.svg")
        );
        assert_eq!(
            r.decorations().icon(Theme::Dark),
            Path::new("/ext/resources/icons/dark/status-added.svg")
        );
    }

    #[test]
    fn test_every_status_has_distinct_icon() {
        let icons = IconSet::new("/icons");
        let mut paths: Vec<_> = Status::ALL
            .iter()
            .map(|s| icons.icon_path(*s, Theme::Dark))
            .collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), Status::ALL.len());
    }

    #[test]
    fn test_open_command_identity() {
        let r = resource("M\tsrc/foo.ts");
        assert_eq!(
            r.open_command(),
            &OpenCommand {
                command: OPEN_RESOURCE_COMMAND.to_string(),
                title: "Open".to_string(),
                arguments: vec!["1a2b3c4".to_string(), "src/foo.ts".to_string()],
            }
        );
    }

    #[test]
    fn test_resource_json_shape() {
        let r = resource("D\tsrc/old.ts");
        let json = serde_json::to_value(&r).expect("serialize");
        assert_eq!(json["status"], "deleted");
        assert_eq!(json["path"], "src/old.ts");
        assert_eq!(json["commit"], "1a2b3c4");
        assert_eq!(json["decorations"]["strike_through"], true);
        assert_eq!(json["open"]["command"], OPEN_RESOURCE_COMMAND);
    }
}
