//! The `quizkit score` command.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use comfy_table::{Cell, Table};
use serde::Serialize;

use quizkit_core::{GradedResponse, QuizStore, Response};

use crate::config::{OutputFormat, QuizkitConfig};

/// JSON output of a graded batch.
#[derive(Debug, Serialize)]
struct ScoreReport {
    catalog: String,
    graded_at: DateTime<Utc>,
    score: usize,
    total: usize,
    outcomes: Vec<GradedResponse>,
}

pub fn execute(
    config: &QuizkitConfig,
    catalog_path: Option<PathBuf>,
    responses_path: PathBuf,
    format: Option<OutputFormat>,
) -> Result<()> {
    let loaded = config.load_catalog(catalog_path.as_deref())?;
    let responses = load_responses(&responses_path)?;

    let store = QuizStore::new(loaded.catalog);
    let card = store.grade(&responses);

    match format.unwrap_or(config.format) {
        OutputFormat::Json => {
            let report = ScoreReport {
                catalog: loaded.id,
                graded_at: Utc::now(),
                score: card.score(),
                total: card.total(),
                outcomes: card.outcomes,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table.set_header(vec!["#", "Question", "Answer", "Result"]);
            for (i, (graded, response)) in card.outcomes.iter().zip(&responses).enumerate() {
                table.add_row(vec![
                    Cell::new(i + 1),
                    Cell::new(&graded.question_id),
                    Cell::new(response.user_answer.as_deref().unwrap_or("-")),
                    Cell::new(graded.outcome),
                ]);
            }
            println!("{table}");
            println!("Score: {}/{}", card.score(), card.total());
        }
    }

    Ok(())
}

fn load_responses(path: &Path) -> Result<Vec<Response>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read responses: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("failed to parse responses: {}", path.display()))
}
