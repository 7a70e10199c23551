// Version-Centric Resolver - raw ids → named character records
//
// First derived view: every raw id in the roster is resolved through the
// registry, version by version, in ingest order. Ids missing from the
// registry resolve to a deterministic placeholder name and a warning; they
// never abort the run.

use crate::registry::CharacterRegistry;
use crate::roster::RawRoster;
use crate::warnings::Warning;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One resolved roster slot. The enrichment fields stay absent (and
/// unserialized) until the enrichment pass fills them in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterRecord {
    pub id: i64,
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vision: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weapon: Option<String>,
}

impl CharacterRecord {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        CharacterRecord {
            id,
            name: name.into(),
            image: None,
            vision: None,
            weapon: None,
        }
    }
}

/// Version label → resolved records, mirroring the roster's order exactly.
pub type VersionView = IndexMap<String, Vec<CharacterRecord>>;

/// Output of the resolve stage: the view plus any lookup-miss warnings.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub view: VersionView,
    pub warnings: Vec<Warning>,
}

/// Deterministic placeholder for an id the registry does not know.
pub fn unknown_name(id: i64) -> String {
    format!("Unknown (ID: {})", id)
}

/// Resolve every raw id through the registry.
///
/// Preserves version order and within-version order; performs no sorting
/// and no deduplication. Lookup misses are recovered locally with the
/// placeholder name and reported as warnings.
pub fn resolve(roster: &RawRoster, registry: &CharacterRegistry) -> Resolution {
    let mut view = VersionView::with_capacity(roster.len());
    let mut warnings = Vec::new();

    for (version, ids) in &roster.version {
        let mut records = Vec::with_capacity(ids.len());
        for &id in ids {
            match registry.lookup(id) {
                Some(name) => records.push(CharacterRecord::new(id, name)),
                None => {
                    warnings.push(Warning::UnknownCharacter {
                        version: version.clone(),
                        id,
                    });
                    records.push(CharacterRecord::new(id, unknown_name(id)));
                }
            }
        }
        view.insert(version.clone(), records);
    }

    Resolution { view, warnings }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> CharacterRegistry {
        CharacterRegistry::from_pairs([
            (1, "Aether".to_string()),
            (2, "Lumine".to_string()),
        ])
    }

    #[test]
    fn test_resolve_known_ids() {
        let roster = RawRoster::from_json_str(r#"{"version": {"1.0": [1, 2]}}"#).unwrap();
        let resolution = resolve(&roster, &registry());

        assert_eq!(
            resolution.view["1.0"],
            vec![CharacterRecord::new(1, "Aether"), CharacterRecord::new(2, "Lumine")]
        );
        assert!(resolution.warnings.is_empty());
    }

    #[test]
    fn test_unknown_id_gets_placeholder_and_warning() {
        let registry = CharacterRegistry::from_pairs([(1, "Aether".to_string())]);
        let roster = RawRoster::from_json_str(r#"{"version": {"1.0": [99999]}}"#).unwrap();

        let resolution = resolve(&roster, &registry);

        assert_eq!(
            resolution.view["1.0"],
            vec![CharacterRecord::new(99999, "Unknown (ID: 99999)")]
        );
        assert_eq!(
            resolution.warnings,
            vec![Warning::UnknownCharacter {
                version: "1.0".to_string(),
                id: 99999
            }]
        );
    }

    #[test]
    fn test_order_and_duplicates_survive_resolution() {
        let roster =
            RawRoster::from_json_str(r#"{"version": {"2.0": [2, 1, 2], "1.0": [1]}}"#).unwrap();
        let resolution = resolve(&roster, &registry());

        let labels: Vec<&String> = resolution.view.keys().collect();
        assert_eq!(labels, ["2.0", "1.0"]);

        let names: Vec<&str> = resolution.view["2.0"]
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, ["Lumine", "Aether", "Lumine"]);
    }
}
