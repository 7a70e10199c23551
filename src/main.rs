use anyhow::Result;
use std::env;
use std::path::{Path, PathBuf};

use banner_pipeline::{
    run, write_artifacts, AttributeSource, CharacterRegistry, PipelineInputs, RawRoster,
};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return Ok(());
    }

    let data_dir = PathBuf::from(args.get(1).map(String::as_str).unwrap_or("."));
    run_pipeline(&data_dir)
}

fn print_usage() {
    println!("Usage: banner-pipeline [DATA_DIR]");
    println!();
    println!("Reads from DATA_DIR (default: current directory):");
    println!("  banners.json         raw per-version roster (from the banners API)");
    println!("  character_map.json   id → name registry");
    println!("  characters.json      optional attributes source (images/vision/weapon)");
    println!();
    println!("Writes DATA_DIR/banners-data/ artifacts and DATA_DIR/banners-data.json");
}

fn run_pipeline(data_dir: &Path) -> Result<()> {
    println!("📊 Banner Pipeline v{}", banner_pipeline::VERSION);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    // 1. Load sources. Any missing or unparseable source aborts here,
    //    before any artifact is touched.
    println!("\n📂 Loading banners data...");
    let roster = RawRoster::load(&data_dir.join("banners.json"))?;
    println!("✓ Loaded {} versions", roster.len());

    println!("\n📂 Loading character map...");
    let registry = CharacterRegistry::load(&data_dir.join("character_map.json"))?;
    println!("✓ Loaded {} characters", registry.len());

    let characters_path = data_dir.join("characters.json");
    let attributes = if characters_path.exists() {
        println!("\n📂 Loading character attributes...");
        let source = AttributeSource::load(&characters_path)?;
        println!("✓ Loaded {} characters with images", source.len());
        Some(source)
    } else {
        println!("\n⚠ characters.json not found - skipping enrichment");
        None
    };

    // 2. Run every transform in memory.
    println!("\n🔧 Processing banners...");
    let output = run(PipelineInputs {
        roster,
        registry,
        attributes,
    })?;

    for warning in &output.warnings {
        println!("⚠ Warning: {}", warning);
    }

    // 3. Write all artifacts only now that every stage has succeeded.
    println!("\n💾 Writing artifacts...");
    let out_dir = data_dir.join("banners-data");
    let bundle_path = data_dir.join("banners-data.json");
    write_artifacts(&output, &out_dir, &bundle_path)?;
    println!("✓ Saved raw banners data to {}", out_dir.join("banners_raw.json").display());
    println!(
        "✓ Saved processed banners to {}",
        out_dir.join("banners_processed.json").display()
    );
    println!(
        "✓ Saved character appearances to {}",
        out_dir.join("character_appearances.json").display()
    );
    println!("✓ Saved summary statistics to {}", out_dir.join("summary.json").display());
    println!("✓ Saved consolidated bundle to {}", bundle_path.display());

    // 4. Summary
    println!("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("🎉 PROCESSING COMPLETE!");
    println!("Total Versions: {}", output.summary.total_versions);
    println!("Unique Characters: {}", output.summary.unique_characters);
    println!("Total Appearances: {}", output.summary.total_appearances);
    println!(
        "Average Appearances per Character: {}",
        output.summary.average_appearances_per_character
    );

    Ok(())
}
