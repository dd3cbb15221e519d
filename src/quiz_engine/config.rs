use serde::{Deserialize, Serialize};

use crate::quiz_engine::helpers::FALLBACK_RATIONALE;

/// Session-level settings supplied by the hosting application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Candidate quiz ids for the selection menu, in display order.
    pub quiz_slots: Vec<String>,
    /// Start in the first slot the bank holds instead of with no quiz.
    pub open_first_available: bool,
    /// Text shown when an incorrect choice has no authored rationale.
    pub fallback_rationale: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            quiz_slots: vec!["quiz1".into(), "quiz2".into(), "quiz3".into()],
            open_first_available: false,
            fallback_rationale: FALLBACK_RATIONALE.to_string(),
        }
    }
}

impl SessionConfig {
    /// Defaults with a custom slot list.
    ///
    /// ```rust
    /// use quiz_progression::SessionConfig;
    ///
    /// let config = SessionConfig::new(["intro", "advanced"]);
    /// assert_eq!(config.quiz_slots, vec!["intro", "advanced"]);
    /// assert!(!config.open_first_available);
    /// ```
    pub fn new<I, S>(quiz_slots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SessionConfig {
            quiz_slots: quiz_slots.into_iter().map(Into::into).collect(),
            ..SessionConfig::default()
        }
    }

    pub fn with_auto_open(mut self, yes: bool) -> Self {
        self.open_first_available = yes;
        self
    }
}
