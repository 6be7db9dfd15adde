use serde::{Deserialize, Serialize};

/// Markup path whose content differs between the merge target and source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    pub path: String,
    /// Content on the target branch
    pub ours: String,
    /// Content on the source branch
    pub theirs: String,
}
