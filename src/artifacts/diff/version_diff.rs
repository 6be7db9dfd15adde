use crate::artifacts::diff::diff_filter::DiffFilter;
use crate::artifacts::diff::line_diff::{DiffAlgorithm, LineChange};
use crate::artifacts::objects::snapshot::{DesignSnapshot, SCRIPT_PATH, STYLES_PATH};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FileChange {
    #[serde(rename_all = "camelCase")]
    Added { new_content: String },
    #[serde(rename_all = "camelCase")]
    Removed { old_content: String },
    #[serde(rename_all = "camelCase")]
    Modified {
        old_content: String,
        new_content: String,
        changes: Vec<LineChange>,
    },
    Unchanged,
}

impl FileChange {
    /// Classify a file from its old and new contents
    ///
    /// Returns `None` when the file exists on neither side.
    pub fn from_contents(
        old: Option<&str>,
        new: Option<&str>,
        algorithm: DiffAlgorithm,
    ) -> Option<Self> {
        match (old, new) {
            (None, Some(new)) => Some(FileChange::Added {
                new_content: new.to_string(),
            }),
            (Some(old), None) => Some(FileChange::Removed {
                old_content: old.to_string(),
            }),
            (Some(old), Some(new)) if old == new => Some(FileChange::Unchanged),
            (Some(old), Some(new)) => Some(FileChange::Modified {
                old_content: old.to_string(),
                new_content: new.to_string(),
                changes: algorithm.diff_lines(old, new),
            }),
            (None, None) => None,
        }
    }

    pub fn matches_filter(&self, filter: DiffFilter) -> bool {
        match self {
            FileChange::Added { .. } => filter.contains(DiffFilter::ADDED),
            FileChange::Removed { .. } => filter.contains(DiffFilter::REMOVED),
            FileChange::Modified { .. } => filter.contains(DiffFilter::MODIFIED),
            FileChange::Unchanged => filter.contains(DiffFilter::UNCHANGED),
        }
    }

    pub fn status_char(&self) -> char {
        match self {
            FileChange::Added { .. } => 'A',
            FileChange::Removed { .. } => 'D',
            FileChange::Modified { .. } => 'M',
            FileChange::Unchanged => 'U',
        }
    }
}

/// Difference of a single path between two snapshots
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionDiff {
    pub path: String,
    #[serde(flatten)]
    pub change: FileChange,
}

impl VersionDiff {
    pub fn is_unchanged(&self) -> bool {
        self.change == FileChange::Unchanged
    }
}

/// Markup paths of both sides with their contents, in first-seen order:
/// every path of `old` first, then the paths only `new` has.
pub fn paired_paths<'s>(
    old: &'s BTreeMap<String, String>,
    new: &'s BTreeMap<String, String>,
) -> Vec<(&'s str, Option<&'s str>, Option<&'s str>)> {
    old.iter()
        .map(|(path, content)| {
            (
                path.as_str(),
                Some(content.as_str()),
                new.get(path).map(String::as_str),
            )
        })
        .chain(
            new.iter()
                .filter(|(path, _)| !old.contains_key(*path))
                .map(|(path, content)| (path.as_str(), None, Some(content.as_str()))),
        )
        .collect()
}

/// Diff two snapshots path by path
///
/// Every markup path is reported, unchanged ones included. The stylesheet
/// and script are reported under their pseudo paths only when they differ.
pub fn diff_snapshots(
    old: &DesignSnapshot,
    new: &DesignSnapshot,
    algorithm: DiffAlgorithm,
) -> Vec<VersionDiff> {
    let mut diffs = paired_paths(&old.html, &new.html)
        .into_iter()
        .filter_map(|(path, old_content, new_content)| {
            FileChange::from_contents(old_content, new_content, algorithm).map(|change| {
                VersionDiff {
                    path: path.to_string(),
                    change,
                }
            })
        })
        .collect::<Vec<_>>();

    let pseudo_files = [
        (STYLES_PATH, old.css_file(), new.css_file()),
        (SCRIPT_PATH, old.js_file(), new.js_file()),
    ];
    for (path, old_content, new_content) in pseudo_files {
        match FileChange::from_contents(old_content, new_content, algorithm) {
            None | Some(FileChange::Unchanged) => {}
            Some(change) => diffs.push(VersionDiff {
                path: path.to_string(),
                change,
            }),
        }
    }

    diffs
}
