// Enrichment Pass - attach display attributes to derived views
//
// A later, repeatable stage: given the characters.json attributes source,
// fill in image / vision / weapon on both derived views. Running it again
// with the same source is a no-op in terms of output. Identity data (id,
// name, versions) is never touched.

use crate::indexer::CharacterIndex;
use crate::resolver::VersionView;
use crate::warnings::Warning;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// One element of the characters.json array. Only "id" is required.
#[derive(Debug, Clone, Deserialize)]
struct RawAttributeEntry {
    id: i64,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    vision: Option<String>,
    #[serde(default)]
    weapon: Option<String>,
}

/// Display attributes for one character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterAttributes {
    pub image: String,
    pub vision: String,
    pub weapon: String,
}

/// Attributes source keyed by character id. Entries without an image are
/// dropped at load time; they carry nothing worth attaching.
pub struct AttributeSource {
    by_id: HashMap<i64, CharacterAttributes>,
}

impl AttributeSource {
    /// Parse the characters.json array format.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let entries: Vec<RawAttributeEntry> =
            serde_json::from_str(json).context("Failed to parse characters JSON")?;
        Ok(Self::from_entries(entries))
    }

    /// Load the attributes source from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read characters data: {}", path.display()))?;
        Self::from_json_str(&json)
            .with_context(|| format!("Failed to load characters data: {}", path.display()))
    }

    fn from_entries(entries: Vec<RawAttributeEntry>) -> Self {
        let mut by_id = HashMap::with_capacity(entries.len());
        for entry in entries {
            let image = entry.image.unwrap_or_default();
            if image.is_empty() {
                continue;
            }
            by_id.insert(
                entry.id,
                CharacterAttributes {
                    image,
                    vision: entry.vision.unwrap_or_else(|| "Unknown".to_string()),
                    weapon: entry.weapon.unwrap_or_else(|| "Unknown".to_string()),
                },
            );
        }
        AttributeSource { by_id }
    }

    pub fn get(&self, id: i64) -> Option<&CharacterAttributes> {
        self.by_id.get(&id)
    }

    /// Number of characters carrying attributes.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

/// Attach attributes to the character-centric index.
///
/// A character missing from the source gets an empty image and "Unknown"
/// vision/weapon, plus a warning. Re-running with the same source yields
/// the same index.
pub fn enrich_index(index: &mut CharacterIndex, source: &AttributeSource) -> Vec<Warning> {
    let mut warnings = Vec::new();

    for (name, appearance) in index.iter_mut() {
        match source.get(appearance.id) {
            Some(attrs) => {
                appearance.image = Some(attrs.image.clone());
                appearance.vision = Some(attrs.vision.clone());
                appearance.weapon = Some(attrs.weapon.clone());
            }
            None => {
                warnings.push(Warning::MissingAttributes {
                    name: name.clone(),
                    id: appearance.id,
                });
                appearance.image = Some(String::new());
                appearance.vision = Some("Unknown".to_string());
                appearance.weapon = Some("Unknown".to_string());
            }
        }
    }

    warnings
}

/// Attach attributes to every record of the version-centric view.
pub fn enrich_view(view: &mut VersionView, source: &AttributeSource) -> Vec<Warning> {
    let mut warnings = Vec::new();

    for records in view.values_mut() {
        for record in records.iter_mut() {
            match source.get(record.id) {
                Some(attrs) => {
                    record.image = Some(attrs.image.clone());
                    record.vision = Some(attrs.vision.clone());
                    record.weapon = Some(attrs.weapon.clone());
                }
                None => {
                    warnings.push(Warning::MissingAttributes {
                        name: record.name.clone(),
                        id: record.id,
                    });
                    record.image = Some(String::new());
                    record.vision = Some("Unknown".to_string());
                    record.weapon = Some("Unknown".to_string());
                }
            }
        }
    }

    warnings
}
