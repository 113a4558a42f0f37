//! quizkit-core — Question catalog, answer checking, and scoring.
//!
//! This crate holds the quiz data model, the immutable catalog, and the
//! `QuizStore` that grades responses against it. It does no I/O apart from
//! the explicit catalog file loader in [`parser`].

pub mod catalog;
pub mod diagnostics;
pub mod error;
pub mod model;
pub mod parser;
pub mod store;

pub use catalog::Catalog;
pub use diagnostics::{CollectingSink, Diagnostic, DiagnosticSink, NoopSink, TracingSink};
pub use error::CatalogError;
pub use model::{Question, Response, SanitizedQuestion};
pub use store::{GradedResponse, Outcome, QuizStore, ScoreCard};
