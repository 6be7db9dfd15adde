//! Line-level diff between two file contents
//!
//! Two algorithms are available:
//!
//! - [`DiffAlgorithm::Heuristic`] (default): a two-cursor walk that only looks
//!   at whether a line exists anywhere in the other file. It is not minimal,
//!   and its exact output is part of the public contract.
//! - [`DiffAlgorithm::Myers`]: a minimal diff computed with `similar`. It is a
//!   replacement for the heuristic, selected through configuration.
//!
//! Contents are split on `\n`. Line numbers are 1-based and relative to the
//! file the line comes from; context lines carry their old line number.

use serde::{Deserialize, Serialize};
use similar::{Algorithm, DiffOp};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffAlgorithm {
    #[default]
    Heuristic,
    Myers,
}

impl DiffAlgorithm {
    pub fn try_parse(name: &str) -> anyhow::Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "heuristic" => Ok(DiffAlgorithm::Heuristic),
            "myers" => Ok(DiffAlgorithm::Myers),
            other => anyhow::bail!("unknown diff algorithm '{other}', expected 'heuristic' or 'myers'"),
        }
    }

    pub fn diff_lines(&self, old: &str, new: &str) -> Vec<LineChange> {
        match self {
            DiffAlgorithm::Heuristic => heuristic_diff(old, new),
            DiffAlgorithm::Myers => myers_diff(old, new),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineChangeKind {
    Add,
    Remove,
    Context,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineChange {
    #[serde(rename = "type")]
    pub kind: LineChangeKind,
    pub line_number: usize,
    pub content: String,
}

impl LineChange {
    pub fn add(line_number: usize, content: &str) -> Self {
        Self::with_kind(LineChangeKind::Add, line_number, content)
    }

    pub fn remove(line_number: usize, content: &str) -> Self {
        Self::with_kind(LineChangeKind::Remove, line_number, content)
    }

    pub fn context(line_number: usize, content: &str) -> Self {
        Self::with_kind(LineChangeKind::Context, line_number, content)
    }

    fn with_kind(kind: LineChangeKind, line_number: usize, content: &str) -> Self {
        LineChange {
            kind,
            line_number,
            content: content.to_string(),
        }
    }

    pub fn is_change(&self) -> bool {
        self.kind != LineChangeKind::Context
    }
}

fn heuristic_diff(old: &str, new: &str) -> Vec<LineChange> {
    let old_lines = old.split('\n').collect::<Vec<_>>();
    let new_lines = new.split('\n').collect::<Vec<_>>();
    let old_set = old_lines.iter().copied().collect::<HashSet<_>>();
    let new_set = new_lines.iter().copied().collect::<HashSet<_>>();

    let mut changes = Vec::with_capacity(old_lines.len().max(new_lines.len()));
    let (mut i, mut j) = (0, 0);

    while i < old_lines.len() || j < new_lines.len() {
        match (old_lines.get(i), new_lines.get(j)) {
            (Some(old_line), Some(new_line)) if old_line == new_line => {
                changes.push(LineChange::context(i + 1, old_line));
                i += 1;
                j += 1;
            }
            (Some(old_line), Some(_)) if !new_set.contains(old_line) => {
                changes.push(LineChange::remove(i + 1, old_line));
                i += 1;
            }
            (Some(_), Some(new_line)) if !old_set.contains(new_line) => {
                changes.push(LineChange::add(j + 1, new_line));
                j += 1;
            }
            (Some(old_line), Some(new_line)) => {
                changes.push(LineChange::remove(i + 1, old_line));
                changes.push(LineChange::add(j + 1, new_line));
                i += 1;
                j += 1;
            }
            (Some(old_line), None) => {
                changes.push(LineChange::remove(i + 1, old_line));
                i += 1;
            }
            (None, Some(new_line)) => {
                changes.push(LineChange::add(j + 1, new_line));
                j += 1;
            }
            (None, None) => break,
        }
    }

    changes
}

fn myers_diff(old: &str, new: &str) -> Vec<LineChange> {
    let old_lines = old.split('\n').collect::<Vec<_>>();
    let new_lines = new.split('\n').collect::<Vec<_>>();
    let mut changes = Vec::new();

    for op in similar::capture_diff_slices(Algorithm::Myers, &old_lines, &new_lines) {
        match op {
            DiffOp::Equal {
                old_index, len, ..
            } => {
                for line in old_index..old_index + len {
                    changes.push(LineChange::context(line + 1, old_lines[line]));
                }
            }
            DiffOp::Delete {
                old_index, old_len, ..
            } => {
                for line in old_index..old_index + old_len {
                    changes.push(LineChange::remove(line + 1, old_lines[line]));
                }
            }
            DiffOp::Insert {
                new_index, new_len, ..
            } => {
                for line in new_index..new_index + new_len {
                    changes.push(LineChange::add(line + 1, new_lines[line]));
                }
            }
            DiffOp::Replace {
                old_index,
                old_len,
                new_index,
                new_len,
            } => {
                for line in old_index..old_index + old_len {
                    changes.push(LineChange::remove(line + 1, old_lines[line]));
                }
                for line in new_index..new_index + new_len {
                    changes.push(LineChange::add(line + 1, new_lines[line]));
                }
            }
        }
    }

    changes
}
