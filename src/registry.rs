// Identifier Registry - id → canonical character name
//
// Built once from character_map.json and never mutated during a pipeline
// run. A missing id is not an error here; callers substitute the
// "Unknown (ID: ...)" placeholder (see resolver.rs).

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// One value of the character_map.json object. Extra fields in the source
/// (rarity, element, release version) are ignored; only the canonical name
/// matters for resolution.
#[derive(Debug, Clone, Deserialize)]
struct RegistryEntry {
    name: String,
}

/// Immutable id → name lookup table.
#[derive(Debug)]
pub struct CharacterRegistry {
    names: HashMap<i64, String>,
}

impl CharacterRegistry {
    /// Build a registry from (id, name) pairs. Mostly useful for tests.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (i64, String)>) -> Self {
        CharacterRegistry {
            names: pairs.into_iter().collect(),
        }
    }

    /// Parse a registry from the character_map.json format: a JSON object
    /// keyed by stringified id, each value carrying at least a "name".
    ///
    /// A key that does not parse as an integer makes the whole source
    /// malformed; the run aborts before any artifact is written.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: HashMap<String, RegistryEntry> =
            serde_json::from_str(json).context("Failed to parse character map JSON")?;

        let mut names = HashMap::with_capacity(raw.len());
        for (key, entry) in raw {
            let id: i64 = key.parse().with_context(|| {
                format!("Character map key '{}' is not an integer id", key)
            })?;
            names.insert(id, entry.name);
        }

        Ok(CharacterRegistry { names })
    }

    /// Load a registry from a character map file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read character map: {}", path.display()))?;
        Self::from_json_str(&json)
            .with_context(|| format!("Failed to load character map: {}", path.display()))
    }

    /// Look up the canonical name for an id. Absence is a normal outcome.
    pub fn lookup(&self, id: i64) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    /// Number of registered characters.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
