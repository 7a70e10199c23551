// Raw Roster Ingest - the upstream banners document
//
// The upstream API ships a JSON object with a "version" key mapping version
// labels to arrays of raw character ids. Order matters twice over: version
// order is the ingest order downstream consumers see, and within-version
// order is the banner's display order. Duplicate ids within a version are
// real data (re-runs of the same banner), not noise, so nothing here
// deduplicates.

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRoster {
    /// Version label → ordered raw character ids, in document order.
    pub version: IndexMap<String, Vec<i64>>,
}

impl RawRoster {
    /// Parse the upstream banners document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse banners JSON")
    }

    /// Load the banners document from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read banners data: {}", path.display()))?;
        Self::from_json_str(&json)
            .with_context(|| format!("Failed to load banners data: {}", path.display()))
    }

    /// Number of versions in the roster.
    pub fn len(&self) -> usize {
        self.version.len()
    }

    pub fn is_empty(&self) -> bool {
        self.version.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_order_is_document_order() {
        let roster = RawRoster::from_json_str(
            r#"{"version": {"2.1": [1, 2], "1.0": [3], "10.0": [4]}}"#,
        )
        .unwrap();

        let labels: Vec<&String> = roster.version.keys().collect();
        assert_eq!(labels, ["2.1", "1.0", "10.0"], "Ingest order must be preserved");
    }

    #[test]
    fn test_duplicate_ids_within_a_version_are_preserved() {
        let roster =
            RawRoster::from_json_str(r#"{"version": {"1.3": [10000046, 10000046]}}"#).unwrap();
        assert_eq!(roster.version["1.3"], vec![10000046, 10000046]);
    }

    #[test]
    fn test_missing_version_key_is_malformed() {
        assert!(RawRoster::from_json_str(r#"{"banners": {}}"#).is_err());
    }
}
