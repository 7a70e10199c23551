// Pipeline orchestration - stages in memory, file I/O at the edges
//
// Every transform runs to completion in memory before the first byte is
// written, so a fatal error (malformed source, bad version label) never
// leaves a half-written artifact behind. Callers running pipelines
// concurrently against the same output directory must serialize
// themselves; the writes here are plain whole-file replacements.

use crate::enrichment::{enrich_index, enrich_view, AttributeSource};
use crate::indexer::{index, CharacterIndex};
use crate::registry::CharacterRegistry;
use crate::resolver::{resolve, VersionView};
use crate::roster::RawRoster;
use crate::summary::{summarize, Summary};
use crate::warnings::Warning;
use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::json;
use std::fs;
use std::path::Path;

/// Everything the pipeline consumes, already loaded from disk.
pub struct PipelineInputs {
    pub roster: RawRoster,
    pub registry: CharacterRegistry,

    /// Optional: when absent, the enrichment pass is skipped and the
    /// artifacts carry identity data only.
    pub attributes: Option<AttributeSource>,
}

/// Everything the pipeline produces, ready to be written.
#[derive(Debug)]
pub struct PipelineOutput {
    /// The raw roster echoed back out (banners_raw.json).
    pub roster: RawRoster,
    pub view: VersionView,
    pub index: CharacterIndex,
    pub summary: Summary,
    pub warnings: Vec<Warning>,
}

/// Run every stage: resolve, index, enrich (when attributes are present),
/// summarize. Purely in-memory; nothing touches the filesystem.
pub fn run(inputs: PipelineInputs) -> Result<PipelineOutput> {
    let resolution = resolve(&inputs.roster, &inputs.registry);
    let mut view = resolution.view;
    let mut warnings = resolution.warnings;

    let mut character_index = index(&view)?;

    if let Some(attributes) = &inputs.attributes {
        warnings.extend(enrich_index(&mut character_index, attributes));
        warnings.extend(enrich_view(&mut view, attributes));
    }

    let summary = summarize(&character_index, &view);

    Ok(PipelineOutput {
        roster: inputs.roster,
        view,
        index: character_index,
        summary,
        warnings,
    })
}

/// Build the consolidated single-file bundle: all three derived artifacts
/// under one roof, for consumers that want a single fetch.
pub fn consolidate(output: &PipelineOutput) -> serde_json::Value {
    json!({
        "banners": &output.view,
        "characters": &output.index,
        "summary": &output.summary,
    })
}

/// Serialize with stable 2-space indentation, UTF-8, non-ASCII verbatim,
/// and a trailing newline, then replace the file wholesale.
fn write_pretty<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let mut json = serde_json::to_string_pretty(value)
        .with_context(|| format!("Failed to serialize {}", path.display()))?;
    json.push('\n');
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))
}

/// Write every artifact. Only called once the whole pipeline has
/// succeeded in memory.
///
/// Files written under `out_dir`:
///   - banners_raw.json            (roster as ingested)
///   - banners_processed.json      (version-centric view)
///   - character_appearances.json  (character-centric index)
///   - summary.json                (statistics)
/// plus the consolidated bundle at `bundle_path`.
pub fn write_artifacts(output: &PipelineOutput, out_dir: &Path, bundle_path: &Path) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory {}", out_dir.display()))?;

    write_pretty(&out_dir.join("banners_raw.json"), &output.roster)?;
    write_pretty(&out_dir.join("banners_processed.json"), &output.view)?;
    write_pretty(&out_dir.join("character_appearances.json"), &output.index)?;
    write_pretty(&out_dir.join("summary.json"), &output.summary)?;
    write_pretty(bundle_path, &consolidate(output))?;

    Ok(())
}
