// Banner Pipeline - Core Library
// Consolidates per-version character banner rosters into browsable artifacts

pub mod enrichment;
pub mod indexer;
pub mod pipeline;
pub mod registry;
pub mod resolver;
pub mod roster;
pub mod summary;
pub mod warnings;

// Re-export commonly used types
pub use enrichment::{enrich_index, enrich_view, AttributeSource, CharacterAttributes};
pub use indexer::{index, CharacterAppearance, CharacterIndex};
pub use pipeline::{consolidate, run, write_artifacts, PipelineInputs, PipelineOutput};
pub use registry::CharacterRegistry;
pub use resolver::{resolve, CharacterRecord, Resolution, VersionView};
pub use roster::RawRoster;
pub use summary::{summarize, Summary};
pub use warnings::Warning;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
