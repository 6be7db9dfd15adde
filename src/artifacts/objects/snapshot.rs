//! Design snapshot and its content hash
//!
//! A snapshot is the complete design state of a generated website. It is a
//! plain value: two snapshots are the same design iff every field is equal,
//! and equal snapshots always produce the same content hash.
//!
//! ## Hash format
//!
//! The snapshot is rendered as canonical JSON (every object key sorted,
//! recursively, including nested `config` values) and digested as
//!
//! ```text
//! snapshot <size>\0<canonical json>
//! ```

use crate::artifacts::objects::ContentHash;
use crate::artifacts::objects::object_id::ObjectId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Pseudo path under which the stylesheet is tracked
pub const STYLES_PATH: &str = "styles.css";
/// Pseudo path under which the script is tracked
pub const SCRIPT_PATH: &str = "script.js";

const SNAPSHOT_KIND: &str = "snapshot";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignSnapshot {
    /// Markup files by path
    #[serde(default)]
    pub html: BTreeMap<String, String>,
    #[serde(default)]
    pub css: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub js: Option<String>,
    /// Asset content references by path
    #[serde(default)]
    pub assets: BTreeMap<String, String>,
    #[serde(default)]
    pub config: BTreeMap<String, Value>,
}

impl DesignSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_html(mut self, path: impl Into<String>, content: impl Into<String>) -> Self {
        self.html.insert(path.into(), content.into());
        self
    }

    pub fn with_css(mut self, css: impl Into<String>) -> Self {
        self.css = css.into();
        self
    }

    pub fn with_js(mut self, js: impl Into<String>) -> Self {
        self.js = Some(js.into());
        self
    }

    pub fn with_asset(mut self, path: impl Into<String>, reference: impl Into<String>) -> Self {
        self.assets.insert(path.into(), reference.into());
        self
    }

    pub fn with_config(mut self, key: impl Into<String>, value: Value) -> Self {
        self.config.insert(key.into(), value);
        self
    }

    /// The stylesheet, or `None` when it is empty
    pub fn css_file(&self) -> Option<&str> {
        Some(self.css.as_str()).filter(|css| !css.is_empty())
    }

    /// The script, or `None` when it is absent or empty
    pub fn js_file(&self) -> Option<&str> {
        self.js.as_deref().filter(|js| !js.is_empty())
    }

    /// Number of tracked files: markup files plus stylesheet and script when present
    pub fn file_count(&self) -> usize {
        self.html.len()
            + usize::from(self.css_file().is_some())
            + usize::from(self.js_file().is_some())
    }

    /// Total byte size of markup, stylesheet and script
    pub fn total_size(&self) -> usize {
        self.html.values().map(String::len).sum::<usize>()
            + self.css.len()
            + self.js.as_deref().map_or(0, str::len)
    }

    /// Deterministic digest of the snapshot content
    pub fn content_hash(&self) -> ContentHash {
        ObjectId::digest(SNAPSHOT_KIND, self.canonical_json().as_bytes())
    }

    /// Canonical JSON rendering used for hashing
    pub fn canonical_json(&self) -> String {
        let mut root = BTreeMap::new();
        root.insert("assets", string_map(&self.assets));
        root.insert(
            "config",
            Value::Object(
                self.config
                    .iter()
                    .map(|(key, value)| (key.clone(), canonicalize(value)))
                    .collect(),
            ),
        );
        root.insert("css", Value::String(self.css.clone()));
        root.insert("html", string_map(&self.html));
        root.insert(
            "js",
            self.js.clone().map(Value::String).unwrap_or(Value::Null),
        );

        let mut object = Map::new();
        for (key, value) in root {
            object.insert(key.to_string(), value);
        }

        Value::Object(object).to_string()
    }
}

fn string_map(entries: &BTreeMap<String, String>) -> Value {
    let mut object = Map::new();
    for (key, value) in entries {
        object.insert(key.clone(), Value::String(value.clone()));
    }
    Value::Object(object)
}

/// Rebuild a JSON value with every object's keys inserted in sorted order
///
/// `serde_json::Map` keeps insertion order when the `preserve_order` feature
/// is enabled anywhere in the dependency graph, so the order is forced here.
fn canonicalize(value: &Value) -> Value {
    match value {
        Value::Object(entries) => {
            let sorted = entries.iter().collect::<BTreeMap<_, _>>();
            let mut object = Map::new();
            for (key, value) in sorted {
                object.insert(key.clone(), canonicalize(value));
            }
            Value::Object(object)
        }
        Value::Array(items) => Value::Array(items.iter().map(canonicalize).collect()),
        other => other.clone(),
    }
}
