//! TOML catalog parser.
//!
//! Loads question catalogs from TOML files and checks them for authoring
//! mistakes that do not make the catalog invalid.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::catalog::Catalog;
use crate::model::Question;

/// Intermediate TOML structure for parsing catalog files.
#[derive(Debug, Deserialize)]
struct TomlCatalogFile {
    catalog: TomlCatalogHeader,
    #[serde(default)]
    questions: Vec<TomlQuestion>,
}

#[derive(Debug, Deserialize)]
struct TomlCatalogHeader {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct TomlQuestion {
    id: String,
    question: String,
    #[serde(default)]
    options: Vec<String>,
    correct_answer: String,
}

/// A catalog together with the header it was loaded from.
#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    pub id: String,
    pub name: String,
    pub description: String,
    pub catalog: Catalog,
}

impl LoadedCatalog {
    /// The built-in questions under a synthetic header.
    pub fn builtin() -> Self {
        Self {
            id: "builtin".into(),
            name: "General Knowledge".into(),
            description: "Built-in sample questions".into(),
            catalog: Catalog::builtin(),
        }
    }
}

/// Parse a single TOML file into a `LoadedCatalog`.
pub fn parse_catalog(path: &Path) -> Result<LoadedCatalog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog file: {}", path.display()))?;

    parse_catalog_str(&content, path)
}

/// Parse a TOML string into a `LoadedCatalog` (useful for testing).
pub fn parse_catalog_str(content: &str, source_path: &Path) -> Result<LoadedCatalog> {
    let parsed: TomlCatalogFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let questions = parsed
        .questions
        .into_iter()
        .map(|q| Question::new(q.id, q.question, q.options, q.correct_answer))
        .collect();

    let catalog = Catalog::new(questions)
        .with_context(|| format!("invalid catalog: {}", source_path.display()))?;

    tracing::debug!(
        catalog = %parsed.catalog.id,
        questions = catalog.len(),
        "loaded catalog from {}",
        source_path.display()
    );

    Ok(LoadedCatalog {
        id: parsed.catalog.id,
        name: parsed.catalog.name,
        description: parsed.catalog.description,
        catalog,
    })
}

/// A warning from catalog validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The question ID.
    pub question_id: String,
    /// Warning message.
    pub message: String,
}

/// Check a catalog for likely authoring mistakes.
pub fn validate_catalog(catalog: &Catalog) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    for q in catalog.questions() {
        let mut warn = |message: String| {
            warnings.push(ValidationWarning {
                question_id: q.id().to_string(),
                message,
            })
        };

        if q.prompt().trim().is_empty() {
            warn("question text is empty".into());
        }

        if q.options().len() < 2 {
            warn("only one option; the answer is given away".into());
        }

        let mut seen = HashSet::new();
        for option in q.options() {
            if !seen.insert(option.as_str()) {
                warn(format!("duplicate option: {option}"));
            }
        }

        let near_misses = q
            .options()
            .iter()
            .filter(|o| *o != q.correct_answer() && o.eq_ignore_ascii_case(q.correct_answer()))
            .count();
        if near_misses > 0 {
            warn(format!(
                "correct answer {:?} differs only in case from another option",
                q.correct_answer()
            ));
        }
    }

    warnings
}
