//! Allow-list loading from YAML or JSON files
//!
//! An allow-list names the operation identifiers a filtered spec keeps. The
//! file is either a bare sequence of identifiers or a mapping with an
//! `operationIds` key:
//!
//! ```yaml
//! operationIds:
//!   - getListRecords
//!   - createCreateRecords
//! ```

use crate::{OpidError, Result};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// On-disk shapes accepted for an allow-list file
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum AllowListFile {
    /// `[a, b, c]`
    Bare(Vec<String>),
    /// `{ operationIds: [a, b, c] }`
    Keyed {
        #[serde(rename = "operationIds")]
        operation_ids: Vec<String>,
    },
}

/// Set of operation identifiers to keep when filtering a spec
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowList {
    ids: BTreeSet<String>,
}

impl AllowList {
    /// Build an allow-list from identifiers, collapsing duplicates
    ///
    /// Blank identifiers are rejected since no operation can match them.
    pub fn new<I, S>(ids: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = BTreeSet::new();
        for id in ids {
            let id: String = id.into();
            let trimmed = id.trim();
            if trimmed.is_empty() {
                return Err(OpidError::Config(
                    "Allow-list contains a blank operationId".to_string(),
                ));
            }
            set.insert(trimmed.to_string());
        }
        Ok(Self { ids: set })
    }

    /// Load an allow-list from a YAML or JSON file
    ///
    /// YAML is a superset of JSON, so a single YAML read covers both.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            OpidError::Config(format!("Failed to read allow-list file {:?}: {}", path, e))
        })?;

        let file: AllowListFile = serde_yaml::from_str(&content).map_err(|e| {
            OpidError::Config(format!(
                "Failed to parse allow-list from {:?}: {}",
                path, e
            ))
        })?;

        match file {
            AllowListFile::Bare(ids) => Self::new(ids),
            AllowListFile::Keyed { operation_ids } => Self::new(operation_ids),
        }
    }

    /// Merge another allow-list into this one
    pub fn extend(&mut self, other: AllowList) {
        self.ids.extend(other.ids);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Identifiers in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(suffix: &str, content: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_keyed_yaml() {
        let file = write_temp(
            ".yaml",
            "operationIds:\n  - getListRecords\n  - deleteDeleteRecord\n  - getListRecords\n",
        );

        let list = AllowList::load(file.path()).unwrap();
        assert_eq!(list.len(), 2);
        assert!(list.contains("getListRecords"));
        assert!(list.contains("deleteDeleteRecord"));
    }

    #[test]
    fn test_load_bare_json() {
        let file = write_temp(".json", r#"["getView1", "createView"]"#);

        let list = AllowList::load(file.path()).unwrap();
        assert_eq!(list.iter().collect::<Vec<_>>(), vec!["createView", "getView1"]);
    }

    #[test]
    fn test_blank_entry_is_rejected() {
        let err = AllowList::new(["getRecord", "  "]).unwrap_err();
        assert!(matches!(err, OpidError::Config(_)));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = AllowList::load(Path::new("/nonexistent/allow.yaml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read allow-list file"));
    }

    #[test]
    fn test_extend_merges() {
        let mut list = AllowList::new(["a"]).unwrap();
        list.extend(AllowList::new(["b", "a"]).unwrap());
        assert_eq!(list.len(), 2);
    }
}
