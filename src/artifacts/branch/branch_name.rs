use crate::artifacts::branch::INVALID_BRANCH_NAME_REGEX;
use crate::error::DesignVcsError;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static INVALID_BRANCH_NAME: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(INVALID_BRANCH_NAME_REGEX).expect("branch name pattern is a valid regex")
});

/// Validated branch name, following git's ref-name rules
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BranchName(String);

impl BranchName {
    pub fn try_parse(name: impl Into<String>) -> Result<Self, DesignVcsError> {
        let name = name.into();

        if name.is_empty() {
            return Err(DesignVcsError::InvalidBranchName(
                "branch name cannot be empty".to_string(),
            ));
        }

        if INVALID_BRANCH_NAME.is_match(&name) {
            Err(DesignVcsError::InvalidBranchName(name))
        } else {
            Ok(Self(name))
        }
    }
}

impl TryFrom<String> for BranchName {
    type Error = DesignVcsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_parse(value)
    }
}

impl From<BranchName> for String {
    fn from(value: BranchName) -> Self {
        value.0
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BranchName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
