//! The `quizkit validate` command.

use std::path::PathBuf;

use anyhow::Result;

pub fn execute(catalog_path: PathBuf) -> Result<()> {
    let loaded = quizkit_core::parser::parse_catalog(&catalog_path)?;

    println!(
        "Catalog: {} ({} questions)",
        loaded.name,
        loaded.catalog.len()
    );

    let warnings = quizkit_core::parser::validate_catalog(&loaded.catalog);
    for w in &warnings {
        println!("  [{}] WARNING: {}", w.question_id, w.message);
    }

    if warnings.is_empty() {
        println!("Catalog valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
