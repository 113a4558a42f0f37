//! The `quizkit init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create quizkit.toml
    if std::path::Path::new("quizkit.toml").exists() {
        println!("quizkit.toml already exists, skipping.");
    } else {
        std::fs::write("quizkit.toml", SAMPLE_CONFIG)?;
        println!("Created quizkit.toml");
    }

    // Create example catalog
    std::fs::create_dir_all("catalogs")?;
    let example_path = std::path::Path::new("catalogs/example.toml");
    if example_path.exists() {
        println!("catalogs/example.toml already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_CATALOG)?;
        println!("Created catalogs/example.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit catalogs/example.toml with your own questions");
    println!("  2. Run: quizkit validate --catalog catalogs/example.toml");
    println!("  3. Run: quizkit questions");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# quizkit configuration

catalog = "catalogs/example.toml"
format = "table"
log_level = "warn"
"#;

const EXAMPLE_CATALOG: &str = r#"[catalog]
id = "example"
name = "Example Catalog"
description = "A small catalog to get started"

[[questions]]
id = "q1"
question = "What is the capital of France?"
options = ["Berlin", "Madrid", "Paris", "Rome"]
correct_answer = "Paris"

[[questions]]
id = "q2"
question = "Which planet is known as the Red Planet?"
options = ["Earth", "Mars", "Jupiter", "Venus"]
correct_answer = "Mars"

[[questions]]
id = "q3"
question = "What is the chemical symbol for water?"
options = ["O2", "H2O", "CO2", "NaCl"]
correct_answer = "H2O"
"#;
