use thiserror::Error;

/// Errors surfaced by repository operations
///
/// Merge conflicts are not errors: they come back as
/// [`MergeResult::Conflicted`](crate::MergeResult::Conflicted).
#[derive(Debug, Error)]
pub enum DesignVcsError {
    #[error("{resource} '{id}' not found")]
    NotFound { resource: &'static str, id: String },

    #[error("branch '{name}' already exists in project '{project_id}'")]
    BranchExists { project_id: String, name: String },

    #[error("branch '{branch_id}' does not belong to project '{project_id}'")]
    BranchNotInProject { branch_id: String, project_id: String },

    #[error("invalid branch name: {0}")]
    InvalidBranchName(String),

    #[error("invalid object id: {0}")]
    InvalidId(String),

    #[error("'{key}' kept changing concurrently, gave up after {attempts} attempts")]
    ConcurrentUpdate { key: String, attempts: usize },

    #[error("storage error: {0:#}")]
    Storage(#[from] anyhow::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DesignVcsError {
    pub fn not_found(resource: &'static str, id: impl ToString) -> Self {
        DesignVcsError::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, DesignVcsError::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, DesignVcsError>;
