//! Catalog construction errors.
//!
//! Grading itself never fails: unknown questions and malformed responses are
//! reported through [`crate::diagnostics`]. These errors only arise when a
//! catalog is built from questions that break its invariants.

use thiserror::Error;

/// Errors that reject a catalog at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The catalog has no questions.
    #[error("catalog contains no questions")]
    Empty,

    /// Two questions share the same identifier.
    #[error("duplicate question ID: {id}")]
    DuplicateId { id: String },

    /// A question has a blank identifier.
    #[error("question at index {index} has an empty ID")]
    EmptyId { index: usize },

    /// A question offers no options to choose from.
    #[error("question {id} has no options")]
    NoOptions { id: String },

    /// The stored correct answer is not one of the question's options.
    #[error("question {id}: correct answer {answer:?} is not one of its options")]
    AnswerNotInOptions { id: String, answer: String },
}

impl CatalogError {
    /// The question ID this error refers to, if any.
    pub fn question_id(&self) -> Option<&str> {
        match self {
            CatalogError::DuplicateId { id }
            | CatalogError::NoOptions { id }
            | CatalogError::AnswerNotInOptions { id, .. } => Some(id),
            CatalogError::Empty | CatalogError::EmptyId { .. } => None,
        }
    }
}
