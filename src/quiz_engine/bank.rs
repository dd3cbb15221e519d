//! Read-only source of quizzes, keyed by quiz identifier.
//!
//! The bank does not validate content. A question whose `correct_answer` is
//! not among its choices is loaded as-is; the tracker and the feedback
//! resolver degrade around it instead.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::quiz_engine::models::Quiz;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Failure to load a bank from disk or from JSON text.
#[derive(Debug)]
pub enum BankError {
    Io(io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for BankError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BankError::Io(e) => write!(f, "failed to read question bank: {}", e),
            BankError::Parse(e) => write!(f, "malformed question bank: {}", e),
        }
    }
}

impl std::error::Error for BankError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BankError::Io(e) => Some(e),
            BankError::Parse(e) => Some(e),
        }
    }
}

impl From<io::Error> for BankError {
    fn from(err: io::Error) -> Self {
        BankError::Io(err)
    }
}

impl From<serde_json::Error> for BankError {
    fn from(err: serde_json::Error) -> Self {
        BankError::Parse(err)
    }
}

// ---------------------------------------------------------------------------
// Bank
// ---------------------------------------------------------------------------

/// All quizzes known to the application.
///
/// Serialized form is a JSON object mapping quiz id to quiz:
///
/// ```json
/// { "quiz1": { "categories": [ { "name": "Basics", "questions": [] } ] } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionBank {
    quizzes: BTreeMap<String, Quiz>,
}

/// One row of the quiz selection menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    pub quiz_id: String,
    pub available: bool,
    pub question_count: usize,
}

impl QuestionBank {
    pub fn new(quizzes: BTreeMap<String, Quiz>) -> Self {
        QuestionBank { quizzes }
    }

    pub fn from_json_str(json: &str) -> Result<Self, BankError> {
        let bank: QuestionBank = serde_json::from_str(json)?;
        log::debug!("loaded question bank with {} quizzes", bank.quizzes.len());
        Ok(bank)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, BankError> {
        let text = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&text)
    }

    /// Add or replace a quiz. Builder-style, for banks assembled in code.
    pub fn insert(mut self, quiz_id: impl Into<String>, quiz: Quiz) -> Self {
        self.quizzes.insert(quiz_id.into(), quiz);
        self
    }

    pub fn get(&self, quiz_id: &str) -> Option<&Quiz> {
        self.quizzes.get(quiz_id)
    }

    pub fn contains(&self, quiz_id: &str) -> bool {
        self.quizzes.contains_key(quiz_id)
    }

    /// Quiz identifiers in lexical order.
    pub fn quiz_ids(&self) -> impl Iterator<Item = &str> {
        self.quizzes.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.quizzes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quizzes.is_empty()
    }

    /// Build menu rows for an externally ordered list of candidate ids.
    /// A candidate is available iff the bank holds a quiz under that id.
    pub fn menu<S: AsRef<str>>(&self, candidates: &[S]) -> Vec<MenuEntry> {
        candidates
            .iter()
            .map(|id| {
                let id = id.as_ref();
                let quiz = self.get(id);
                MenuEntry {
                    quiz_id: id.to_string(),
                    available: quiz.is_some(),
                    question_count: quiz.map(Quiz::question_count).unwrap_or(0),
                }
            })
            .collect()
    }

    /// First candidate present in the bank, if any.
    pub fn first_available<'a, S: AsRef<str>>(&self, candidates: &'a [S]) -> Option<&'a str> {
        candidates
            .iter()
            .map(AsRef::as_ref)
            .find(|id| self.contains(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BANK_JSON: &str = r#"{
        "quiz1": {
            "categories": [
                {
                    "name": "Arithmetic",
                    "questions": [
                        {
                            "number": 1,
                            "question": "2 + 2?",
                            "choices": { "A": "4", "B": "5" },
                            "correct_answer": "A",
                            "why_correct": "Two pairs make four.",
                            "why_incorrect": { "B": "Off by one." }
                        }
                    ]
                }
            ]
        },
        "quiz3": { "categories": [] }
    }"#;

    #[test]
    fn parses_nested_json() {
        let bank = QuestionBank::from_json_str(BANK_JSON).unwrap();
        assert_eq!(bank.len(), 2);
        let quiz = bank.get("quiz1").unwrap();
        assert_eq!(quiz.categories[0].name, "Arithmetic");
        let q = &quiz.categories[0].questions[0];
        assert_eq!(q.prompt, "2 + 2?", "`question` should alias `prompt`");
        assert_eq!(q.correct_answer, "A");
        assert_eq!(q.why_incorrect.get("B").map(String::as_str), Some("Off by one."));
    }

    #[test]
    fn missing_why_incorrect_defaults_to_empty() {
        let json = r#"{ "q": { "categories": [ { "name": "c", "questions": [ {
            "number": 4, "prompt": "p", "choices": { "A": "a" },
            "correct_answer": "A", "why_correct": "w" } ] } ] } }"#;
        let bank = QuestionBank::from_json_str(json).unwrap();
        assert!(bank.get("q").unwrap().categories[0].questions[0].why_incorrect.is_empty());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = QuestionBank::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, BankError::Parse(_)));
        assert!(err.to_string().starts_with("malformed question bank"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = QuestionBank::from_path("/definitely/not/here/bank.json").unwrap_err();
        assert!(matches!(err, BankError::Io(_)));
    }

    #[test]
    fn correct_answer_outside_choices_is_not_rejected() {
        let json = r#"{ "q": { "categories": [ { "name": "c", "questions": [ {
            "number": 1, "prompt": "p", "choices": { "A": "a" },
            "correct_answer": "Z", "why_correct": "w" } ] } ] } }"#;
        assert!(QuestionBank::from_json_str(json).is_ok());
    }

    #[test]
    fn unknown_quiz_is_absent() {
        let bank = QuestionBank::from_json_str(BANK_JSON).unwrap();
        assert!(bank.get("quizX").is_none());
        assert!(!bank.contains("quizX"));
    }

    #[test]
    fn menu_follows_candidate_order_and_reports_availability() {
        let bank = QuestionBank::from_json_str(BANK_JSON).unwrap();
        let menu = bank.menu(&["quiz1", "quiz2", "quiz3"]);
        let rows: Vec<(&str, bool, usize)> = menu
            .iter()
            .map(|m| (m.quiz_id.as_str(), m.available, m.question_count))
            .collect();
        assert_eq!(
            rows,
            vec![("quiz1", true, 1), ("quiz2", false, 0), ("quiz3", true, 0)]
        );
    }

    #[test]
    fn first_available_skips_missing_slots() {
        let bank = QuestionBank::from_json_str(BANK_JSON).unwrap();
        assert_eq!(bank.first_available(&["quiz0", "quiz3", "quiz1"]), Some("quiz3"));
        assert_eq!(bank.first_available(&["nope"]), None);
    }
}
