//! Core quiz engine: content, ordering, session progression, and feedback.
//!
//! ## Module overview
//!
//! | Module     | Purpose |
//! |------------|---------|
//! | `models`   | Content types: quizzes, categories, questions, enriched questions |
//! | `bank`     | Read-only quiz lookup, JSON loading, and selection-menu rows |
//! | `selector` | `flatten()`: one quiz's questions, merged and ordered by number |
//! | `tracker`  | `ProgressTracker`: the session state machine and its snapshot |
//! | `feedback` | Pure correctness and rationale queries over a snapshot |
//! | `helpers`  | Map lookups with fallback text, progress labels |
//! | `config`   | `SessionConfig`: quiz slots, auto-open, fallback wording |

pub mod bank;
pub mod config;
pub mod feedback;
pub mod helpers;
pub mod models;
pub mod selector;
pub mod tracker;

// Re-export the public API surface so callers can use
// `quiz_engine::ProgressTracker` without reaching into sub-modules.
pub use bank::{BankError, MenuEntry, QuestionBank};
pub use config::SessionConfig;
pub use feedback::{
    is_correct, rationale_for, rationale_for_or, wrong_rationale, wrong_rationale_or,
};
pub use helpers::FALLBACK_RATIONALE;
pub use models::{Category, ChoiceKey, EnrichedQuestion, Question, Quiz};
pub use selector::flatten;
pub use tracker::{
    ActiveQuiz, IgnoreReason, Outcome, Progress, ProgressTracker, SessionSnapshot, Step,
};
