//! The `quizkit check` command.

use std::path::PathBuf;

use anyhow::Result;

use quizkit_core::QuizStore;

use crate::config::QuizkitConfig;

pub fn execute(
    config: &QuizkitConfig,
    catalog_path: Option<PathBuf>,
    question_id: &str,
    answer: &str,
) -> Result<()> {
    let loaded = config.load_catalog(catalog_path.as_deref())?;
    let store = QuizStore::new(loaded.catalog);

    if store.check_answer(question_id, answer) {
        println!("correct");
    } else {
        println!("incorrect");
    }

    Ok(())
}
