//! The quiz progression state machine.
//!
//! ```text
//! NoQuiz --select_quiz--> Answering(pos 0)
//! Answering --select_choice--> Answering (pick recorded)
//! Answering --submit--> Submitted
//! Submitted --select_choice--> Answering (same position, re-pick)
//! Submitted --advance--> Answering(pos + 1)    when not on the last question
//! Submitted --advance--> Finished              on the last question
//! any active --replay--> Answering(pos 0)
//! any --exit_quiz--> NoQuiz
//! ```
//!
//! Actions that do not apply to the current state are ignored. They return
//! [`Outcome::Ignored`] with the reason, and the state is left untouched.
//! Callers that only care about the resulting state can drop the outcome.

use std::fmt;
use std::sync::Arc;

use crate::quiz_engine::{
    bank::{MenuEntry, QuestionBank},
    config::SessionConfig,
    feedback,
    models::{ChoiceKey, EnrichedQuestion},
    selector,
};

// ---------------------------------------------------------------------------
// Session state
// ---------------------------------------------------------------------------

/// Where the user is on the question at the current position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Picking. `selected` is the tentative choice, if any.
    Answering { selected: Option<ChoiceKey> },
    /// The pick is locked in and feedback is visible.
    Submitted { selected: ChoiceKey },
    /// Advanced past the last question. The last answer stays readable.
    Finished { selected: ChoiceKey },
}

/// A quiz in play: its flattened questions and the user's place in them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveQuiz {
    pub quiz_id: String,
    pub questions: Vec<EnrichedQuestion>,
    pub position: usize,
    pub step: Step,
}

impl ActiveQuiz {
    fn start(quiz_id: String, questions: Vec<EnrichedQuestion>) -> Self {
        ActiveQuiz {
            quiz_id,
            questions,
            position: 0,
            step: Step::Answering { selected: None },
        }
    }

    pub fn current(&self) -> Option<&EnrichedQuestion> {
        self.questions.get(self.position)
    }

    fn is_last(&self) -> bool {
        self.position + 1 >= self.questions.len()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Progress {
    #[default]
    NoQuiz,
    Active(ActiveQuiz),
}

// ---------------------------------------------------------------------------
// Action results
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    NoActiveQuiz,
    /// The active quiz has no question at the current position (empty quiz).
    NoCurrentQuestion,
    QuizFinished,
    NothingSelected,
    AlreadySubmitted,
    NotSubmitted,
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            IgnoreReason::NoActiveQuiz      => "no quiz is active",
            IgnoreReason::NoCurrentQuestion => "there is no current question",
            IgnoreReason::QuizFinished      => "the quiz is finished",
            IgnoreReason::NothingSelected   => "no choice is selected",
            IgnoreReason::AlreadySubmitted  => "the answer is already submitted",
            IgnoreReason::NotSubmitted      => "the answer is not submitted yet",
        };
        write!(f, "{}", s)
    }
}

/// Result of a user action. Dropping it is the normal "nothing happens" path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Ignored(IgnoreReason),
}

impl Outcome {
    pub fn is_applied(self) -> bool {
        self == Outcome::Applied
    }
}

fn ignored(action: &str, reason: IgnoreReason) -> Outcome {
    log::trace!("{action} ignored: {reason}");
    Outcome::Ignored(reason)
}

// ---------------------------------------------------------------------------
// Read-only view
// ---------------------------------------------------------------------------

/// Everything a renderer needs to draw the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSnapshot<'a> {
    pub active_quiz_id: Option<&'a str>,
    pub current: Option<&'a EnrichedQuestion>,
    pub position: usize,
    pub total: usize,
    pub selected_choice: Option<&'a str>,
    pub submitted: bool,
    pub finished: bool,
}

impl<'a> SessionSnapshot<'a> {
    fn of(progress: &'a Progress) -> Self {
        match progress {
            Progress::NoQuiz => SessionSnapshot {
                active_quiz_id: None,
                current: None,
                position: 0,
                total: 0,
                selected_choice: None,
                submitted: false,
                finished: false,
            },
            Progress::Active(active) => {
                let (selected_choice, submitted, finished) = match &active.step {
                    Step::Answering { selected } => (selected.as_deref(), false, false),
                    Step::Submitted { selected } => (Some(selected.as_str()), true, false),
                    Step::Finished { selected }  => (Some(selected.as_str()), true, true),
                };
                SessionSnapshot {
                    active_quiz_id: Some(active.quiz_id.as_str()),
                    current: active.current(),
                    position: active.position,
                    total: active.questions.len(),
                    selected_choice,
                    submitted,
                    finished,
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tracker
// ---------------------------------------------------------------------------

/// Owns one user's session over a shared, read-only question bank.
///
/// One tracker per user. The bank is shared through an [`Arc`]; the session
/// itself is never shared.
#[derive(Debug, Clone)]
pub struct ProgressTracker {
    bank: Arc<QuestionBank>,
    config: SessionConfig,
    progress: Progress,
}

impl ProgressTracker {
    /// Start with no quiz selected and default settings.
    pub fn new(bank: impl Into<Arc<QuestionBank>>) -> Self {
        ProgressTracker {
            bank: bank.into(),
            config: SessionConfig::default(),
            progress: Progress::NoQuiz,
        }
    }

    /// Start with explicit settings. With `open_first_available`, the first
    /// configured slot present in the bank is selected right away.
    pub fn with_config(bank: impl Into<Arc<QuestionBank>>, config: SessionConfig) -> Self {
        let mut tracker = ProgressTracker {
            bank: bank.into(),
            config,
            progress: Progress::NoQuiz,
        };
        if tracker.config.open_first_available {
            let first = tracker
                .bank
                .first_available(&tracker.config.quiz_slots)
                .map(str::to_string);
            if let Some(quiz_id) = first {
                tracker.select_quiz(quiz_id);
            }
        }
        tracker
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    pub fn snapshot(&self) -> SessionSnapshot<'_> {
        SessionSnapshot::of(&self.progress)
    }

    /// The active quiz's questions in play order; empty with no quiz.
    pub fn ordered_questions(&self) -> &[EnrichedQuestion] {
        match &self.progress {
            Progress::NoQuiz => &[],
            Progress::Active(active) => &active.questions,
        }
    }

    pub fn current_question(&self) -> Option<&EnrichedQuestion> {
        match &self.progress {
            Progress::NoQuiz => None,
            Progress::Active(active) => active.current(),
        }
    }

    /// Menu rows for the configured quiz slots.
    pub fn menu(&self) -> Vec<MenuEntry> {
        self.bank.menu(&self.config.quiz_slots)
    }

    pub fn is_correct(&self) -> bool {
        feedback::is_correct(&self.snapshot())
    }

    /// Rationale for a submitted wrong answer, using the configured fallback
    /// when the question has none for that choice.
    pub fn wrong_rationale(&self) -> Option<&str> {
        feedback::wrong_rationale_or(&self.snapshot(), &self.config.fallback_rationale)
    }

    fn active_mut(&mut self) -> Result<&mut ActiveQuiz, IgnoreReason> {
        match &mut self.progress {
            Progress::NoQuiz => Err(IgnoreReason::NoActiveQuiz),
            Progress::Active(active) => Ok(active),
        }
    }

    // ── actions ────────────────────────────────────────────────────────────

    /// Make `quiz_id` the active quiz and start it from the top. Any answer
    /// in progress is discarded. An id missing from the bank gives a quiz
    /// with no questions.
    pub fn select_quiz(&mut self, quiz_id: impl Into<String>) -> Outcome {
        let quiz_id = quiz_id.into();
        let questions = selector::select(&self.bank, &quiz_id);
        log::debug!("selected quiz '{}' with {} questions", quiz_id, questions.len());
        self.progress = Progress::Active(ActiveQuiz::start(quiz_id, questions));
        Outcome::Applied
    }

    /// Record a tentative pick for the current question. Picking again after
    /// submitting reopens the question for a fresh submission.
    ///
    /// The key is stored as given, even if the question does not list it.
    pub fn select_choice(&mut self, key: impl Into<ChoiceKey>) -> Outcome {
        let active = match self.active_mut() {
            Ok(active) => active,
            Err(reason) => return ignored("select_choice", reason),
        };
        if matches!(active.step, Step::Finished { .. }) {
            return ignored("select_choice", IgnoreReason::QuizFinished);
        }
        if active.current().is_none() {
            return ignored("select_choice", IgnoreReason::NoCurrentQuestion);
        }
        let key = key.into();
        log::debug!("question {}: selected '{}'", active.position, key);
        active.step = Step::Answering { selected: Some(key) };
        Outcome::Applied
    }

    /// Lock in the current pick.
    pub fn submit(&mut self) -> Outcome {
        let active = match self.active_mut() {
            Ok(active) => active,
            Err(reason) => return ignored("submit", reason),
        };
        if active.current().is_none() {
            return ignored("submit", IgnoreReason::NoCurrentQuestion);
        }
        let next = match &active.step {
            Step::Answering { selected: Some(key) } => Step::Submitted { selected: key.clone() },
            Step::Answering { selected: None } => {
                return ignored("submit", IgnoreReason::NothingSelected)
            }
            Step::Submitted { .. } => return ignored("submit", IgnoreReason::AlreadySubmitted),
            Step::Finished { .. } => return ignored("submit", IgnoreReason::QuizFinished),
        };
        log::debug!("question {}: submitted", active.position);
        active.step = next;
        Outcome::Applied
    }

    /// Move on from a submitted question. On the last question the position
    /// stays put and the quiz becomes finished.
    pub fn advance(&mut self) -> Outcome {
        let active = match self.active_mut() {
            Ok(active) => active,
            Err(reason) => return ignored("advance", reason),
        };
        let selected = match &active.step {
            Step::Submitted { selected } => selected.clone(),
            Step::Answering { .. } => return ignored("advance", IgnoreReason::NotSubmitted),
            Step::Finished { .. } => return ignored("advance", IgnoreReason::QuizFinished),
        };
        if active.is_last() {
            log::debug!("quiz '{}' finished at question {}", active.quiz_id, active.position);
            active.step = Step::Finished { selected };
        } else {
            active.position += 1;
            active.step = Step::Answering { selected: None };
            log::debug!("advanced to question {}", active.position);
        }
        Outcome::Applied
    }

    /// Restart the active quiz from its first question, same order.
    pub fn replay(&mut self) -> Outcome {
        let active = match self.active_mut() {
            Ok(active) => active,
            Err(reason) => return ignored("replay", reason),
        };
        active.position = 0;
        active.step = Step::Answering { selected: None };
        log::debug!("replaying quiz '{}'", active.quiz_id);
        Outcome::Applied
    }

    /// Leave the active quiz and clear the session.
    pub fn exit_quiz(&mut self) -> Outcome {
        if let Progress::NoQuiz = self.progress {
            return ignored("exit_quiz", IgnoreReason::NoActiveQuiz);
        }
        self.progress = Progress::NoQuiz;
        log::debug!("exited quiz");
        Outcome::Applied
    }
}
