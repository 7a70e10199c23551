// Character-Centric Indexer - the inverse of the version view
//
// Builds name → appearance history from the version view. Version lists
// are sorted by the numeric value of the label, newest first. The sort key
// must exist for every label: a label that does not parse as a finite
// number aborts the stage rather than being coerced to some arbitrary
// position.

use crate::resolver::VersionView;
use anyhow::{bail, Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One character's full appearance history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterAppearance {
    pub id: i64,

    /// Version labels, sorted descending by numeric value.
    pub versions: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vision: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weapon: Option<String>,
}

/// Character name → appearance history, keyed in first-encounter order.
pub type CharacterIndex = IndexMap<String, CharacterAppearance>;

/// Parse a version label into its numeric sort key.
///
/// "6.4" and "6.40" are numerically equal on purpose; multi-segment labels
/// like "6.4.1" do not parse and are rejected as malformed.
fn version_sort_key(label: &str) -> Result<f64> {
    let value: f64 = label
        .parse()
        .with_context(|| format!("Version label '{}' is not numeric", label))?;
    if !value.is_finite() {
        bail!("Version label '{}' has no finite numeric value", label);
    }
    Ok(value)
}

/// Build the character-centric index from the version view.
///
/// If the same name shows up under two different raw ids across versions
/// (a data-quality anomaly in the source), the id observed first wins and
/// is reused for every later appearance.
pub fn index(view: &VersionView) -> Result<CharacterIndex> {
    // Validate every sort key up front so a malformed label aborts before
    // any partial index exists.
    let mut sort_keys: HashMap<&str, f64> = HashMap::with_capacity(view.len());
    for label in view.keys() {
        let key = version_sort_key(label)
            .with_context(|| format!("Cannot index appearances for version '{}'", label))?;
        sort_keys.insert(label.as_str(), key);
    }

    let mut index = CharacterIndex::new();
    for (version, records) in view {
        for record in records {
            let appearance = index
                .entry(record.name.clone())
                .or_insert_with(|| CharacterAppearance {
                    id: record.id,
                    versions: Vec::new(),
                    image: None,
                    vision: None,
                    weapon: None,
                });
            appearance.versions.push(version.clone());
        }
    }

    // Stable sort: numerically equal labels keep their accumulation order.
    for appearance in index.values_mut() {
        appearance
            .versions
            .sort_by(|a, b| sort_keys[b.as_str()].total_cmp(&sort_keys[a.as_str()]));
    }

    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::CharacterRecord;

    fn view(entries: &[(&str, &[(i64, &str)])]) -> VersionView {
        entries
            .iter()
            .map(|(version, records)| {
                (
                    version.to_string(),
                    records
                        .iter()
                        .map(|&(id, name)| CharacterRecord::new(id, name))
                        .collect(),
                )
            })
            .collect()
    }

    #[test]
    fn test_versions_sorted_numerically_descending() {
        let view = view(&[
            ("1.0", &[(1, "Aether")]),
            ("2.0", &[(1, "Aether")]),
            ("10.0", &[(1, "Aether")]),
        ]);

        let index = index(&view).unwrap();
        assert_eq!(
            index["Aether"].versions,
            ["10.0", "2.0", "1.0"],
            "Sort must be numeric, not lexicographic"
        );
    }

    #[test]
    fn test_numerically_equal_labels_keep_accumulation_order() {
        let view = view(&[("6.40", &[(1, "Aether")]), ("6.4", &[(1, "Aether")])]);

        let index = index(&view).unwrap();
        assert_eq!(index["Aether"].versions, ["6.40", "6.4"]);
    }

    #[test]
    fn test_first_observed_id_wins_for_duplicate_names() {
        let view = view(&[("1.0", &[(100, "Aether")]), ("2.0", &[(200, "Aether")])]);

        let index = index(&view).unwrap();
        assert_eq!(index["Aether"].id, 100);
        assert_eq!(index["Aether"].versions, ["2.0", "1.0"]);
    }

    #[test]
    fn test_appearance_counts_include_duplicates() {
        let view = view(&[("1.0", &[(1, "Aether"), (1, "Aether")])]);

        let index = index(&view).unwrap();
        assert_eq!(index["Aether"].versions, ["1.0", "1.0"]);
    }

    #[test]
    fn test_keys_follow_first_encounter_order() {
        let view = view(&[
            ("1.0", &[(2, "Lumine"), (1, "Aether")]),
            ("2.0", &[(3, "Paimon")]),
        ]);

        let index = index(&view).unwrap();
        let names: Vec<&String> = index.keys().collect();
        assert_eq!(names, ["Lumine", "Aether", "Paimon"]);
    }

    #[test]
    fn test_non_numeric_label_is_fatal() {
        let view = view(&[("latest", &[(1, "Aether")])]);

        let err = format!("{:#}", index(&view).unwrap_err());
        assert!(err.contains("latest"), "Error should name the label: {}", err);
    }

    #[test]
    fn test_multi_segment_label_is_fatal() {
        let view = view(&[("6.4.1", &[(1, "Aether")])]);
        assert!(index(&view).is_err());
    }

    #[test]
    fn test_nan_label_is_fatal() {
        // "NaN" parses as an f64 but has no usable sort position.
        let view = view(&[("NaN", &[(1, "Aether")])]);
        assert!(index(&view).is_err());
    }
}
