//! Design version (commit)
//!
//! A version records a full copy of a snapshot together with its lineage:
//! the branch it was committed on and at most one parent version. Versions
//! are never mutated once written.
//!
//! ## Identity
//!
//! The version id is a digest over the header below, so two commits of the
//! same snapshot (a rollback, for example) share a content hash but never an id.
//!
//! ```text
//! project <project-id>
//! branch <branch-id>
//! parent <parent-id>        (omitted for a root version)
//! hash <content-hash>
//! author <author> <rfc3339 timestamp>
//! nonce <random u64>
//!
//! <message>
//! ```

use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::snapshot::{DesignSnapshot, SCRIPT_PATH, STYLES_PATH};
use crate::artifacts::objects::{BranchId, ContentHash, VersionId};
use chrono::{DateTime, SecondsFormat, Utc};
use fake::rand;
use serde::{Deserialize, Serialize};

const VERSION_KIND: &str = "version";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionMetadata {
    pub file_count: usize,
    pub total_size: usize,
    /// Paths that differ from the parent, or every path for a root version
    pub changed_files: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignVersion {
    pub id: VersionId,
    pub project_id: String,
    pub branch_id: BranchId,
    pub parent_id: Option<VersionId>,
    pub message: String,
    pub author: String,
    pub timestamp: DateTime<Utc>,
    pub hash: ContentHash,
    pub snapshot: DesignSnapshot,
    pub metadata: VersionMetadata,
}

impl DesignVersion {
    /// Build a new version of `snapshot` on top of `parent`
    pub fn new(
        project_id: &str,
        branch_id: &BranchId,
        parent: Option<&DesignVersion>,
        snapshot: DesignSnapshot,
        message: &str,
        author: &str,
    ) -> Self {
        let timestamp = Utc::now();
        let hash = snapshot.content_hash();
        let parent_id = parent.map(|parent| parent.id.clone());
        let metadata = VersionMetadata {
            file_count: snapshot.file_count(),
            total_size: snapshot.total_size(),
            changed_files: changed_files(parent.map(|parent| &parent.snapshot), &snapshot),
        };

        let mut header = vec![
            format!("project {project_id}"),
            format!("branch {branch_id}"),
        ];
        if let Some(parent_id) = &parent_id {
            header.push(format!("parent {parent_id}"));
        }
        header.push(format!("hash {hash}"));
        header.push(format!(
            "author {} {}",
            author,
            timestamp.to_rfc3339_opts(SecondsFormat::Nanos, true)
        ));
        header.push(format!("nonce {}", rand::random::<u64>()));
        header.push(String::new());
        header.push(message.to_string());

        DesignVersion {
            id: ObjectId::digest(VERSION_KIND, header.join("\n").as_bytes()),
            project_id: project_id.to_string(),
            branch_id: branch_id.clone(),
            parent_id,
            message: message.to_string(),
            author: author.to_string(),
            timestamp,
            hash,
            snapshot,
            metadata,
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// First line of the message
    pub fn short_message(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }
}

/// Paths of `snapshot` that differ from `parent`
///
/// Markup paths come first (added or modified, then deleted), followed by the
/// stylesheet and script pseudo paths. Without a parent every present file
/// counts as changed.
pub fn changed_files(parent: Option<&DesignSnapshot>, snapshot: &DesignSnapshot) -> Vec<String> {
    let Some(parent) = parent else {
        let mut changed = snapshot.html.keys().cloned().collect::<Vec<_>>();
        if snapshot.css_file().is_some() {
            changed.push(STYLES_PATH.to_string());
        }
        if snapshot.js_file().is_some() {
            changed.push(SCRIPT_PATH.to_string());
        }
        return changed;
    };

    let mut changed = snapshot
        .html
        .iter()
        .filter(|(path, content)| parent.html.get(*path) != Some(*content))
        .map(|(path, _)| path.clone())
        .collect::<Vec<_>>();

    changed.extend(
        parent
            .html
            .keys()
            .filter(|path| !snapshot.html.contains_key(*path))
            .cloned(),
    );

    if parent.css_file() != snapshot.css_file() {
        changed.push(STYLES_PATH.to_string());
    }
    if parent.js_file() != snapshot.js_file() {
        changed.push(SCRIPT_PATH.to_string());
    }

    changed
}
