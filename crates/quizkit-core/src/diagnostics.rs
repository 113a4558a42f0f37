//! Non-fatal grading diagnostics.
//!
//! The store never prints. Anomalies are handed to a [`DiagnosticSink`]; the
//! default sink forwards them to `tracing`.

use std::fmt;
use std::sync::Mutex;

/// A recoverable anomaly noticed while grading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A response or check referenced a question the catalog does not hold.
    UnknownQuestion { question_id: String },
    /// A batch entry was missing its question ID or its answer.
    MalformedResponse {
        index: usize,
        question_id: String,
        missing_answer: bool,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnknownQuestion { question_id } => {
                write!(f, "question with ID '{question_id}' not found")
            }
            Diagnostic::MalformedResponse {
                index,
                question_id,
                missing_answer,
            } => {
                let what = match (question_id.is_empty(), missing_answer) {
                    (true, true) => "question_id and user_answer",
                    (true, false) => "question_id",
                    _ => "user_answer",
                };
                write!(f, "response #{index} is missing {what}")
            }
        }
    }
}

/// Receives grading diagnostics.
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, diagnostic: &Diagnostic);
}

/// Forwards diagnostics to `tracing` as warnings.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: &Diagnostic) {
        match diagnostic {
            Diagnostic::UnknownQuestion { question_id } => {
                tracing::warn!(question_id = %question_id, "{diagnostic}");
            }
            Diagnostic::MalformedResponse {
                index, question_id, ..
            } => {
                tracing::warn!(index, question_id = %question_id, "{diagnostic}");
            }
        }
    }
}

/// Discards diagnostics.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn report(&self, _: &Diagnostic) {}
}

/// Records diagnostics for later inspection.
#[derive(Debug, Default)]
pub struct CollectingSink {
    seen: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything reported so far, in order.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.seen
            .lock()
            .map(|seen| seen.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&self, diagnostic: &Diagnostic) {
        let mut seen = self
            .seen
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        seen.push(diagnostic.clone());
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for std::sync::Arc<S> {
    fn report(&self, diagnostic: &Diagnostic) {
        (**self).report(diagnostic)
    }
}
