//! The `quizkit questions` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use quizkit_core::QuizStore;

use crate::config::{OutputFormat, QuizkitConfig};

pub fn execute(
    config: &QuizkitConfig,
    catalog_path: Option<PathBuf>,
    format: Option<OutputFormat>,
) -> Result<()> {
    let loaded = config.load_catalog(catalog_path.as_deref())?;
    let store = QuizStore::new(loaded.catalog);
    let questions = store.list_questions();

    match format.unwrap_or(config.format) {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&questions)?);
        }
        OutputFormat::Table => {
            println!("{} ({} questions)", loaded.name, questions.len());

            let mut table = Table::new();
            table.set_header(vec!["ID", "Question", "Options"]);
            for q in &questions {
                table.add_row(vec![
                    Cell::new(&q.id),
                    Cell::new(&q.prompt),
                    Cell::new(q.options.join("\n")),
                ]);
            }
            println!("{table}");
        }
    }

    Ok(())
}
