// Non-fatal findings surfaced by pipeline stages
//
// Warnings are reported to the operator (the CLI prints them with a ⚠
// prefix) and are never embedded in the output artifacts.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// A raw roster id had no entry in the character registry.
    UnknownCharacter { version: String, id: i64 },

    /// A character had no entry in the attributes source during enrichment.
    MissingAttributes { name: String, id: i64 },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::UnknownCharacter { version, id } => write!(
                f,
                "Character ID {} not found in character map (version {})",
                id, version
            ),
            Warning::MissingAttributes { name, id } => {
                write!(f, "Image not found for {} (ID: {})", name, id)
            }
        }
    }
}
