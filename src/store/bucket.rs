//! Storage adapter: one named bucket = one JSON file holding the whole
//! serialized collection.
//!
//! Loading fails open: an absent, unreadable or corrupt bucket yields the
//! empty collection and never an error. Saving rewrites the entire file and
//! is called synchronously after every successful mutation; the only
//! durability guarantee is "whatever was last saved".

use crate::errors::AppResult;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

pub struct Bucket {
    path: PathBuf,
}

impl Bucket {
    pub fn new(data_dir: &Path, key: &str) -> Self {
        Self {
            path: data_dir.join(format!("{}.json", key)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole collection, or the empty one when anything goes wrong.
    pub fn load<T: DeserializeOwned>(&self) -> Vec<T> {
        let Ok(content) = fs::read_to_string(&self.path) else {
            return Vec::new();
        };
        serde_json::from_str(&content).unwrap_or_default()
    }

    /// Serialize and overwrite the bucket with the full collection.
    /// Written to a sibling temp file first so a failed write cannot leave
    /// a half-serialized bucket behind.
    pub fn save<T: Serialize>(&self, items: &[T]) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(items)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
