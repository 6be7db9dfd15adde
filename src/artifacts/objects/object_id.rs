//! Object identifier (SHA-1 hash)
//!
//! Content hashes, version ids and branch ids are all 40-character
//! hexadecimal SHA-1 digests. Digests are taken over a typed header followed
//! by the payload:
//!
//! ```text
//! <kind> <size>\0<payload>
//! ```

use crate::artifacts::objects::{OBJECT_ID_LENGTH, SHORT_OBJECT_ID_LENGTH};
use crate::error::DesignVcsError;
use serde::{Deserialize, Serialize};
use sha1::{Digest, Sha1};

/// SHA-1 identifier in lowercase hexadecimal
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ObjectId(String);

impl ObjectId {
    /// Parse and validate an object ID from a string
    ///
    /// Accepts exactly 40 hexadecimal characters, normalized to lowercase.
    pub fn try_parse(id: impl Into<String>) -> Result<Self, DesignVcsError> {
        let id = id.into();
        if id.len() != OBJECT_ID_LENGTH {
            return Err(DesignVcsError::InvalidId(format!(
                "expected {OBJECT_ID_LENGTH} characters, got {} in '{id}'",
                id.len()
            )));
        }
        if !id.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(DesignVcsError::InvalidId(format!(
                "non-hexadecimal characters in '{id}'"
            )));
        }
        Ok(Self(id.to_ascii_lowercase()))
    }

    /// Digest `payload` under a `<kind> <size>\0` header
    pub fn digest(kind: &str, payload: &[u8]) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(format!("{} {}\0", kind, payload.len()).as_bytes());
        hasher.update(payload);

        Self(format!("{:x}", hasher.finalize()))
    }

    /// Abbreviated form (first 7 characters)
    pub fn to_short_oid(&self) -> String {
        self.0[..SHORT_OBJECT_ID_LENGTH].to_string()
    }
}

impl TryFrom<String> for ObjectId {
    type Error = DesignVcsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_parse(value)
    }
}

impl From<ObjectId> for String {
    fn from(value: ObjectId) -> Self {
        value.0
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
