//! The quiz store: sanitized listing, answer checking, and scoring.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::diagnostics::{Diagnostic, DiagnosticSink, TracingSink};
use crate::model::{Response, SanitizedQuestion};

/// How a single response was graded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Correct,
    Incorrect,
    /// The question ID is not in the catalog.
    UnknownQuestion,
    /// The response was missing its question ID or answer and was skipped.
    Malformed,
}

impl Outcome {
    pub fn points(self) -> usize {
        match self {
            Outcome::Correct => 1,
            _ => 0,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Correct => write!(f, "correct"),
            Outcome::Incorrect => write!(f, "incorrect"),
            Outcome::UnknownQuestion => write!(f, "unknown question"),
            Outcome::Malformed => write!(f, "skipped"),
        }
    }
}

/// One graded entry of a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradedResponse {
    pub question_id: String,
    pub outcome: Outcome,
}

/// Per-response breakdown of a graded batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreCard {
    pub outcomes: Vec<GradedResponse>,
}

impl ScoreCard {
    /// Number of correct responses.
    pub fn score(&self) -> usize {
        self.outcomes.iter().map(|g| g.outcome.points()).sum()
    }

    /// Number of responses graded, including skipped ones.
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn count(&self, outcome: Outcome) -> usize {
        self.outcomes.iter().filter(|g| g.outcome == outcome).count()
    }
}

/// Owns a catalog and answers every read and grading query against it.
///
/// The catalog never changes after construction, so a store can be shared
/// by reference between any number of readers.
pub struct QuizStore {
    catalog: Catalog,
    sink: Box<dyn DiagnosticSink>,
}

impl QuizStore {
    /// A store that reports diagnostics through `tracing`.
    pub fn new(catalog: Catalog) -> Self {
        Self::with_sink(catalog, TracingSink)
    }

    pub fn with_sink(catalog: Catalog, sink: impl DiagnosticSink + 'static) -> Self {
        Self {
            catalog,
            sink: Box::new(sink),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    /// Every question in catalog order, without correct answers.
    pub fn list_questions(&self) -> Vec<SanitizedQuestion> {
        self.catalog
            .questions()
            .iter()
            .map(|q| q.sanitized())
            .collect()
    }

    pub fn get_question(&self, question_id: &str) -> Option<SanitizedQuestion> {
        self.catalog.get(question_id).map(|q| q.sanitized())
    }

    /// Exact-match check of one answer. Unknown IDs are reported and yield
    /// `false`.
    pub fn check_answer(&self, question_id: &str, user_answer: &str) -> bool {
        self.evaluate(question_id, user_answer) == Outcome::Correct
    }

    /// Count of correct responses in the batch.
    pub fn calculate_score(&self, responses: &[Response]) -> usize {
        self.grade(responses).score()
    }

    /// Grade each response in order. Malformed entries are reported and
    /// skipped; duplicates are graded independently.
    pub fn grade(&self, responses: &[Response]) -> ScoreCard {
        let outcomes = responses
            .iter()
            .enumerate()
            .map(|(index, response)| {
                let outcome = match response.parts() {
                    Some((question_id, answer)) => self.evaluate(question_id, answer),
                    None => {
                        self.sink.report(&Diagnostic::MalformedResponse {
                            index,
                            question_id: response.question_id.clone(),
                            missing_answer: response.user_answer.is_none(),
                        });
                        Outcome::Malformed
                    }
                };
                GradedResponse {
                    question_id: response.question_id.clone(),
                    outcome,
                }
            })
            .collect();

        ScoreCard { outcomes }
    }

    fn evaluate(&self, question_id: &str, user_answer: &str) -> Outcome {
        let Some(question) = self.catalog.get(question_id) else {
            self.sink.report(&Diagnostic::UnknownQuestion {
                question_id: question_id.to_string(),
            });
            return Outcome::UnknownQuestion;
        };

        if question.is_correct(user_answer) {
            Outcome::Correct
        } else {
            Outcome::Incorrect
        }
    }
}

impl Default for QuizStore {
    fn default() -> Self {
        Self::new(Catalog::builtin())
    }
}

impl fmt::Debug for QuizStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizStore")
            .field("catalog", &self.catalog)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::diagnostics::CollectingSink;

    fn store() -> (QuizStore, Arc<CollectingSink>) {
        let sink = Arc::new(CollectingSink::new());
        let store = QuizStore::with_sink(Catalog::builtin(), Arc::clone(&sink));
        (store, sink)
    }

    #[test]
    fn list_questions_preserves_order_and_options() {
        let (store, _) = store();
        let questions = store.list_questions();
        assert_eq!(questions.len(), 5);
        assert_eq!(questions[0].id, "q1");
        assert_eq!(questions[0].options, ["Berlin", "Madrid", "Paris", "Rome"]);
        assert_eq!(questions[4].prompt, "What is the chemical symbol for water?");
    }

    #[test]
    fn list_questions_returns_independent_copies() {
        let (store, _) = store();
        let mut questions = store.list_questions();
        questions[0].options.clear();
        questions[0].prompt.push_str("???");
        questions.pop();

        let fresh = store.list_questions();
        assert_eq!(fresh.len(), 5);
        assert_eq!(fresh[0].options.len(), 4);
        assert_eq!(fresh[0].prompt, "What is the capital of France?");
        assert!(store.check_answer("q1", "Paris"));
    }

    #[test]
    fn check_answer_is_case_sensitive() {
        let (store, sink) = store();
        assert!(store.check_answer("q1", "Paris"));
        assert!(!store.check_answer("q1", "paris"));
        assert!(!store.check_answer("q1", "Paris "));
        assert!(sink.diagnostics().is_empty());
    }

    #[test]
    fn check_answer_unknown_id_reports() {
        let (store, sink) = store();
        assert!(!store.check_answer("q99", "anything"));
        assert_eq!(
            sink.diagnostics(),
            vec![Diagnostic::UnknownQuestion {
                question_id: "q99".into()
            }]
        );
    }

    #[test]
    fn empty_batch_scores_zero() {
        let (store, sink) = store();
        assert_eq!(store.calculate_score(&[]), 0);
        assert!(sink.diagnostics().is_empty());
    }

    #[test]
    fn sample_session_scores_four() {
        let (store, _) = store();
        let responses = [
            Response::new("q1", "Paris"),
            Response::new("q2", "Mars"),
            Response::new("q3", "Atlantic Ocean"),
            Response::new("q4", "Leonardo da Vinci"),
            Response::new("q5", "H2O"),
        ];
        assert_eq!(store.calculate_score(&responses), 4);

        let card = store.grade(&responses);
        assert_eq!(card.total(), 5);
        assert_eq!(card.outcomes[2].outcome, Outcome::Incorrect);
        assert_eq!(card.count(Outcome::Correct), 4);
    }

    #[test]
    fn duplicates_count_independently() {
        let (store, _) = store();
        let responses = [Response::new("q1", "Paris"), Response::new("q1", "Paris")];
        assert_eq!(store.calculate_score(&responses), 2);
    }

    #[test]
    fn malformed_entries_are_skipped() {
        let (store, sink) = store();
        let responses = [
            Response::unanswered("q1"),
            Response::new("", "Paris"),
            Response::new("q2", "Mars"),
        ];
        let card = store.grade(&responses);
        assert_eq!(card.score(), 1);
        assert_eq!(card.count(Outcome::Malformed), 2);
        assert_eq!(
            sink.diagnostics(),
            vec![
                Diagnostic::MalformedResponse {
                    index: 0,
                    question_id: "q1".into(),
                    missing_answer: true,
                },
                Diagnostic::MalformedResponse {
                    index: 1,
                    question_id: String::new(),
                    missing_answer: false,
                },
            ]
        );
    }

    #[test]
    fn empty_answer_is_checked_not_skipped() {
        let (store, sink) = store();
        let card = store.grade(&[Response::new("q1", "")]);
        assert_eq!(card.outcomes[0].outcome, Outcome::Incorrect);
        assert!(sink.diagnostics().is_empty());
    }

    #[test]
    fn unknown_ids_in_batch_contribute_zero() {
        let (store, sink) = store();
        let responses = [Response::new("q42", "Paris"), Response::new("q1", "Paris")];
        let card = store.grade(&responses);
        assert_eq!(card.score(), 1);
        assert_eq!(card.outcomes[0].outcome, Outcome::UnknownQuestion);
        assert_eq!(sink.diagnostics().len(), 1);
    }

    #[test]
    fn get_question_is_sanitized() {
        let (store, _) = store();
        let q = store.get_question("q2").unwrap();
        assert_eq!(q.options, ["Earth", "Mars", "Jupiter", "Venus"]);
        assert!(store.get_question("nope").is_none());
    }

    #[test]
    fn store_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<QuizStore>();
    }
}
