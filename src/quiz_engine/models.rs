use std::collections::BTreeMap;
use std::fmt;
use serde::{Deserialize, Serialize};

/// Key of one choice within a question (e.g. `"A"`).
pub type ChoiceKey = String;

// ---------------------------------------------------------------------------
// Authored content
// ---------------------------------------------------------------------------

/// One multiple-choice question as authored in the content source.
///
/// `correct_answer` is expected to be one of the keys of `choices`; nothing in
/// this crate checks that. Incorrect keys without a `why_incorrect` entry fall
/// back to a generic rationale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Global sort key within a quiz, across all categories.
    pub number: u32,
    #[serde(alias = "question")]
    pub prompt: String,
    pub choices: BTreeMap<ChoiceKey, String>,
    pub correct_answer: ChoiceKey,
    pub why_correct: String,
    #[serde(default)]
    pub why_incorrect: BTreeMap<ChoiceKey, String>,
}

impl Question {
    pub fn is_correct_choice(&self, key: &str) -> bool {
        self.correct_answer == key
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    #[serde(default)]
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl Quiz {
    pub fn question_count(&self) -> usize {
        self.categories.iter().map(|c| c.questions.len()).sum()
    }
}

// ---------------------------------------------------------------------------
// Tracker unit
// ---------------------------------------------------------------------------

/// A question tagged with the name of the category it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedQuestion {
    pub category: String,
    #[serde(flatten)]
    pub question: Question,
}

impl EnrichedQuestion {
    pub fn number(&self) -> u32 {
        self.question.number
    }
}

impl fmt::Display for EnrichedQuestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} [{}] {}", self.question.number, self.category, self.question.prompt)
    }
}
