// Summary Aggregator - corpus-wide statistics over the derived views

use crate::indexer::CharacterIndex;
use crate::resolver::VersionView;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub total_versions: usize,
    pub unique_characters: usize,

    /// Sum of every character's version-list length; equals the total
    /// roster length across versions, duplicates included.
    pub total_appearances: usize,

    /// total_appearances / unique_characters, rounded to 2 decimal places
    /// (round half to even). 0.0 when there are no characters at all.
    pub average_appearances_per_character: f64,

    /// Version labels in original ingest order, not sorted.
    pub versions: Vec<String>,
}

/// Round to 2 decimal places, ties to even.
fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Compute summary statistics from the two derived views.
pub fn summarize(index: &CharacterIndex, view: &VersionView) -> Summary {
    let total_versions = view.len();
    let unique_characters = index.len();
    let total_appearances: usize = index.values().map(|a| a.versions.len()).sum();

    let average_appearances_per_character = if unique_characters == 0 {
        0.0
    } else {
        round2(total_appearances as f64 / unique_characters as f64)
    };

    Summary {
        total_versions,
        unique_characters,
        total_appearances,
        average_appearances_per_character,
        versions: view.keys().cloned().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::CharacterRegistry;
    use crate::resolver::resolve;
    use crate::roster::RawRoster;

    #[test]
    fn test_summary_arithmetic() {
        let registry = CharacterRegistry::from_pairs([
            (1, "A".to_string()),
            (2, "B".to_string()),
        ]);
        let roster =
            RawRoster::from_json_str(r#"{"version": {"1.0": [1, 2], "2.0": [1]}}"#).unwrap();

        let view = resolve(&roster, &registry).view;
        let index = crate::indexer::index(&view).unwrap();
        let summary = summarize(&index, &view);

        assert_eq!(summary.total_versions, 2);
        assert_eq!(summary.unique_characters, 2);
        assert_eq!(summary.total_appearances, 3);
        assert_eq!(summary.average_appearances_per_character, 1.5);
        assert_eq!(summary.versions, ["1.0", "2.0"]);
    }

    #[test]
    fn test_empty_corpus_average_is_zero_not_a_crash() {
        let view = VersionView::new();
        let index = CharacterIndex::new();

        let summary = summarize(&index, &view);
        assert_eq!(summary.unique_characters, 0);
        assert_eq!(summary.average_appearances_per_character, 0.0);
    }

    #[test]
    fn test_versions_keep_ingest_order() {
        let registry = CharacterRegistry::from_pairs([(1, "A".to_string())]);
        let roster = RawRoster::from_json_str(
            r#"{"version": {"2.1": [1], "1.0": [1], "10.0": [1]}}"#,
        )
        .unwrap();

        let view = resolve(&roster, &registry).view;
        let index = crate::indexer::index(&view).unwrap();
        let summary = summarize(&index, &view);

        assert_eq!(summary.versions, ["2.1", "1.0", "10.0"]);
    }

    #[test]
    fn test_rounding_is_half_to_even() {
        // Both inputs are exact in binary, so the tie is a true tie.
        assert_eq!(round2(0.125), 0.12);
        assert_eq!(round2(0.375), 0.38);
        assert_eq!(round2(1.5), 1.5);
    }
}
