//! # quiz_progression
//!
//! The progression core of a multiple-choice quiz: one question at a time,
//! immediate right/wrong feedback, and an explanation for every choice.
//!
//! Rendering is left to the caller. This crate owns the part with real rules:
//! which questions are in play and in what order, where the user is, what they
//! picked, whether it is locked in, and what to say about it.
//!
//! ## How it works
//!
//! 1. Load a [`QuestionBank`] (JSON via [`QuestionBank::from_json_str`] or
//!    [`QuestionBank::from_path`], or assembled in code).
//! 2. Wrap it in a [`ProgressTracker`]. Selecting a quiz flattens all of its
//!    categories into one list ordered by question number.
//! 3. Drive the tracker with user actions: `select_choice`, `submit`,
//!    `advance`, `replay`, `exit_quiz`. Actions that do not fit the current
//!    state are ignored and report why through [`Outcome`].
//! 4. Read [`ProgressTracker::snapshot`] and the [`feedback`] queries, or
//!    [`to_view_state`] for a ready-made JSON payload.
//!
//! ## Key properties
//!
//! - **Deterministic order**: questions are sorted by `number`, never shuffled.
//! - **Fresh starts**: selecting a quiz, or replaying one, always begins at the
//!   first question with nothing picked.
//! - **Forgiving content**: an unknown quiz id is an empty quiz; a wrong choice
//!   without an authored rationale gets [`FALLBACK_RATIONALE`].
//!
//! ## Quick start
//!
//! ```rust
//! use quiz_progression::{feedback, ProgressTracker, QuestionBank};
//!
//! let bank = QuestionBank::from_json_str(r#"{
//!     "quiz1": { "categories": [ { "name": "Basics", "questions": [
//!         { "number": 2, "prompt": "1 + 1?", "choices": { "A": "2", "B": "3" },
//!           "correct_answer": "A", "why_correct": "Simple sum.",
//!           "why_incorrect": { "B": "Off by one." } },
//!         { "number": 1, "prompt": "Is Rust compiled?", "choices": { "A": "Yes", "B": "No" },
//!           "correct_answer": "A", "why_correct": "rustc emits machine code." }
//!     ] } ] }
//! }"#).unwrap();
//!
//! let mut tracker = ProgressTracker::new(bank);
//! tracker.select_quiz("quiz1");
//! assert_eq!(tracker.current_question().unwrap().number(), 1);
//!
//! tracker.select_choice("B");
//! tracker.submit();
//! assert!(!tracker.is_correct());
//! assert_eq!(tracker.wrong_rationale(), Some("No specific rationale available."));
//!
//! tracker.advance();
//! tracker.select_choice("A");
//! tracker.submit();
//! assert!(feedback::is_correct(&tracker.snapshot()));
//!
//! tracker.advance();
//! assert!(tracker.snapshot().finished);
//! ```

pub mod quiz_engine;
pub mod view_adapter;

// Convenience re-exports so callers can use `quiz_progression::ProgressTracker`
// directly without reaching into `quiz_engine::`.
pub use quiz_engine::{
    feedback, flatten, BankError, Category, ChoiceKey, EnrichedQuestion, IgnoreReason,
    MenuEntry, Outcome, Progress, ProgressTracker, Question, QuestionBank, Quiz,
    SessionConfig, SessionSnapshot, Step, FALLBACK_RATIONALE,
};
pub use view_adapter::to_view_state;
