//! The immutable question catalog.

use std::collections::{HashMap, HashSet};

use crate::error::CatalogError;
use crate::model::Question;

/// An ordered, read-only collection of questions with an ID index.
///
/// The index stores positions into `questions`, so both are built together
/// and cannot drift apart.
#[derive(Debug, Clone)]
pub struct Catalog {
    questions: Vec<Question>,
    by_id: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting questions that break its invariants.
    pub fn new(questions: Vec<Question>) -> Result<Self, CatalogError> {
        if questions.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for (index, q) in questions.iter().enumerate() {
            if q.id().trim().is_empty() {
                return Err(CatalogError::EmptyId { index });
            }
            if !seen.insert(q.id()) {
                return Err(CatalogError::DuplicateId { id: q.id().into() });
            }
            if q.options().is_empty() {
                return Err(CatalogError::NoOptions { id: q.id().into() });
            }
            if !q.answer_in_options() {
                return Err(CatalogError::AnswerNotInOptions {
                    id: q.id().into(),
                    answer: q.correct_answer().into(),
                });
            }
        }

        Ok(Self::index(questions))
    }

    /// The five general-knowledge questions quizkit ships with.
    pub fn builtin() -> Self {
        // Covered by `builtin_catalog_is_valid` below.
        Self::index(vec![
            Question::new(
                "q1",
                "What is the capital of France?",
                ["Berlin", "Madrid", "Paris", "Rome"],
                "Paris",
            ),
            Question::new(
                "q2",
                "Which planet is known as the Red Planet?",
                ["Earth", "Mars", "Jupiter", "Venus"],
                "Mars",
            ),
            Question::new(
                "q3",
                "What is the largest ocean on Earth?",
                [
                    "Atlantic Ocean",
                    "Indian Ocean",
                    "Arctic Ocean",
                    "Pacific Ocean",
                ],
                "Pacific Ocean",
            ),
            Question::new(
                "q4",
                "Who painted the Mona Lisa?",
                [
                    "Vincent van Gogh",
                    "Pablo Picasso",
                    "Leonardo da Vinci",
                    "Claude Monet",
                ],
                "Leonardo da Vinci",
            ),
            Question::new(
                "q5",
                "What is the chemical symbol for water?",
                ["O2", "H2O", "CO2", "NaCl"],
                "H2O",
            ),
        ])
    }

    fn index(questions: Vec<Question>) -> Self {
        let by_id = questions
            .iter()
            .enumerate()
            .map(|(i, q)| (q.id().to_string(), i))
            .collect();
        Self { questions, by_id }
    }

    pub fn get(&self, id: &str) -> Option<&Question> {
        self.by_id.get(id).map(|&i| &self.questions[i])
    }

    /// Questions in catalog order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
