//! Core data model types for quizkit.
//!
//! Field names on the wire follow the shape front ends already expect:
//! `id` / `question` / `options` / `correct_answer` for questions and
//! `question_id` / `user_answer` for responses.

use serde::{Deserialize, Serialize};

/// A multiple-choice question, including its correct answer.
///
/// Fields are private so a question cannot change once it is in a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    id: String,
    #[serde(rename = "question")]
    prompt: String,
    options: Vec<String>,
    correct_answer: String,
}

impl Question {
    pub fn new<I, S>(
        id: impl Into<String>,
        prompt: impl Into<String>,
        options: I,
        correct_answer: impl Into<String>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            prompt: prompt.into(),
            options: options.into_iter().map(Into::into).collect(),
            correct_answer: correct_answer.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Options in presentation order.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    /// Exact, case-sensitive comparison against the stored answer.
    pub fn is_correct(&self, answer: &str) -> bool {
        answer == self.correct_answer
    }

    /// Whether the correct answer is one of the options.
    pub fn answer_in_options(&self) -> bool {
        self.options.iter().any(|o| *o == self.correct_answer)
    }

    /// An owned copy without the correct answer.
    pub fn sanitized(&self) -> SanitizedQuestion {
        SanitizedQuestion {
            id: self.id.clone(),
            prompt: self.prompt.clone(),
            options: self.options.clone(),
        }
    }
}

/// A question safe to hand to untrusted consumers: no correct answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SanitizedQuestion {
    pub id: String,
    #[serde(rename = "question")]
    pub prompt: String,
    pub options: Vec<String>,
}

/// A single user-submitted answer.
///
/// `user_answer: None` means the answer is missing; `Some("")` is an empty
/// answer that still gets checked.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Response {
    #[serde(default)]
    pub question_id: String,
    #[serde(default)]
    pub user_answer: Option<String>,
}

impl Response {
    pub fn new(question_id: impl Into<String>, user_answer: impl Into<String>) -> Self {
        Self {
            question_id: question_id.into(),
            user_answer: Some(user_answer.into()),
        }
    }

    /// A response whose answer field is absent.
    pub fn unanswered(question_id: impl Into<String>) -> Self {
        Self {
            question_id: question_id.into(),
            user_answer: None,
        }
    }

    /// The id and answer, if both are present and the id is non-empty.
    pub fn parts(&self) -> Option<(&str, &str)> {
        match &self.user_answer {
            Some(answer) if !self.question_id.is_empty() => {
                Some((self.question_id.as_str(), answer.as_str()))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capital() -> Question {
        Question::new(
            "q1",
            "What is the capital of France?",
            ["Berlin", "Madrid", "Paris", "Rome"],
            "Paris",
        )
    }

    #[test]
    fn is_correct_is_exact() {
        let q = capital();
        assert!(q.is_correct("Paris"));
        assert!(!q.is_correct("paris"));
        assert!(!q.is_correct(" Paris"));
        assert!(!q.is_correct(""));
    }

    #[test]
    fn sanitized_json_has_no_answer() {
        let json = serde_json::to_value(capital().sanitized()).unwrap();
        assert_eq!(json["id"], "q1");
        assert_eq!(json["question"], "What is the capital of France?");
        assert_eq!(json["options"][2], "Paris");
        assert!(json.get("correct_answer").is_none());
    }

    #[test]
    fn response_missing_answer_vs_empty_answer() {
        let missing: Response = serde_json::from_str(r#"{"question_id":"q1"}"#).unwrap();
        assert_eq!(missing.user_answer, None);
        assert!(missing.parts().is_none());

        let empty: Response =
            serde_json::from_str(r#"{"question_id":"q1","user_answer":""}"#).unwrap();
        assert_eq!(empty.parts(), Some(("q1", "")));

        let null: Response =
            serde_json::from_str(r#"{"question_id":"q1","user_answer":null}"#).unwrap();
        assert!(null.parts().is_none());
    }

    #[test]
    fn response_missing_id_is_malformed() {
        let r: Response = serde_json::from_str(r#"{"user_answer":"Paris"}"#).unwrap();
        assert_eq!(r.question_id, "");
        assert!(r.parts().is_none());
    }

    #[test]
    fn answer_membership() {
        assert!(capital().answer_in_options());
        let bad = Question::new("q3", "Largest ocean?", ["Atlantic", "Indian"], "Pacific");
        assert!(!bad.answer_in_options());
    }
}
