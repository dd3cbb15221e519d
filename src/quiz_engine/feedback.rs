//! Correctness and rationale text for the current session state.
//!
//! All functions are pure. They read a [`SessionSnapshot`] (or a bare
//! question) and never change the session.

use crate::quiz_engine::{
    helpers::{lookup_or, FALLBACK_RATIONALE},
    models::Question,
    tracker::SessionSnapshot,
};

/// True iff an answer is submitted and it is the current question's correct
/// answer.
pub fn is_correct(snapshot: &SessionSnapshot<'_>) -> bool {
    match (snapshot.submitted, snapshot.selected_choice, snapshot.current) {
        (true, Some(selected), Some(current)) => current.question.is_correct_choice(selected),
        _ => false,
    }
}

/// Authored rationale for a submitted wrong answer.
///
/// `None` when nothing is submitted, when the submitted answer is correct, or
/// when the question has no rationale for the chosen key. Use
/// [`wrong_rationale_or`] to substitute fallback text for the last case.
pub fn wrong_rationale<'a>(snapshot: &SessionSnapshot<'a>) -> Option<&'a str> {
    let (selected, question) = submitted_wrong(snapshot)?;
    question.why_incorrect.get(selected).map(String::as_str)
}

/// Like [`wrong_rationale`], but a wrong answer without an authored rationale
/// yields `fallback`.
pub fn wrong_rationale_or<'a>(snapshot: &SessionSnapshot<'a>, fallback: &'a str) -> Option<&'a str> {
    let (selected, question) = submitted_wrong(snapshot)?;
    Some(lookup_or(&question.why_incorrect, selected, fallback))
}

/// Explanation for any choice of `question`, independent of submission.
pub fn rationale_for<'a>(question: &'a Question, choice_key: &str) -> &'a str {
    rationale_for_or(question, choice_key, FALLBACK_RATIONALE)
}

/// Like [`rationale_for`], with `fallback` for incorrect choices that have no
/// authored rationale.
pub fn rationale_for_or<'a>(question: &'a Question, choice_key: &str, fallback: &'a str) -> &'a str {
    if question.is_correct_choice(choice_key) {
        &question.why_correct
    } else {
        lookup_or(&question.why_incorrect, choice_key, fallback)
    }
}

fn submitted_wrong<'a>(snapshot: &SessionSnapshot<'a>) -> Option<(&'a str, &'a Question)> {
    if !snapshot.submitted {
        return None;
    }
    let selected = snapshot.selected_choice?;
    let question = &snapshot.current?.question;
    if question.is_correct_choice(selected) {
        None
    } else {
        Some((selected, question))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz_engine::models::EnrichedQuestion;
    use std::collections::BTreeMap;

    fn enriched() -> EnrichedQuestion {
        EnrichedQuestion {
            category: "Ownership".to_string(),
            question: Question {
                number: 1,
                prompt: "Which type owns its heap buffer?".to_string(),
                choices: BTreeMap::from([
                    ("A".to_string(), "String".to_string()),
                    ("B".to_string(), "&str".to_string()),
                    ("C".to_string(), "&[u8]".to_string()),
                ]),
                correct_answer: "A".to_string(),
                why_correct: "String owns its buffer.".to_string(),
                why_incorrect: BTreeMap::from([(
                    "B".to_string(),
                    "&str borrows.".to_string(),
                )]),
            },
        }
    }

    fn snap<'a>(
        q: &'a EnrichedQuestion,
        selected: Option<&'a str>,
        submitted: bool,
    ) -> SessionSnapshot<'a> {
        SessionSnapshot {
            active_quiz_id: Some("quiz1"),
            current: Some(q),
            position: 0,
            total: 1,
            selected_choice: selected,
            submitted,
            finished: false,
        }
    }

    #[test]
    fn correct_only_once_submitted() {
        let q = enriched();
        assert!(!is_correct(&snap(&q, Some("A"), false)));
        assert!(is_correct(&snap(&q, Some("A"), true)));
        assert!(!is_correct(&snap(&q, Some("B"), true)));
        assert!(!is_correct(&snap(&q, None, false)));
    }

    #[test]
    fn no_current_question_is_never_correct() {
        let q = enriched();
        let mut s = snap(&q, Some("A"), true);
        s.current = None;
        assert!(!is_correct(&s));
        assert_eq!(wrong_rationale(&s), None);
    }

    #[test]
    fn wrong_rationale_uses_authored_text() {
        let q = enriched();
        assert_eq!(wrong_rationale(&snap(&q, Some("B"), true)), Some("&str borrows."));
    }

    #[test]
    fn wrong_rationale_absent_when_unsubmitted_or_correct() {
        let q = enriched();
        assert_eq!(wrong_rationale(&snap(&q, Some("B"), false)), None);
        assert_eq!(wrong_rationale(&snap(&q, Some("A"), true)), None);
    }

    #[test]
    fn missing_wrong_rationale_falls_back_only_when_asked() {
        let q = enriched();
        let s = snap(&q, Some("C"), true);
        assert_eq!(wrong_rationale(&s), None);
        assert_eq!(wrong_rationale_or(&s, FALLBACK_RATIONALE), Some(FALLBACK_RATIONALE));
        assert_eq!(wrong_rationale_or(&snap(&q, Some("A"), true), FALLBACK_RATIONALE), None);
    }

    #[test]
    fn rationale_for_any_choice() {
        let q = enriched();
        assert_eq!(rationale_for(&q.question, "A"), "String owns its buffer.");
        assert_eq!(rationale_for(&q.question, "B"), "&str borrows.");
        assert_eq!(rationale_for(&q.question, "C"), FALLBACK_RATIONALE);
        assert_eq!(rationale_for(&q.question, "not-a-key"), FALLBACK_RATIONALE);
    }

    #[test]
    fn rationale_for_or_uses_given_fallback() {
        let q = enriched();
        assert_eq!(rationale_for_or(&q.question, "A", "custom"), "String owns its buffer.");
        assert_eq!(rationale_for_or(&q.question, "B", "custom"), "&str borrows.");
        assert_eq!(rationale_for_or(&q.question, "C", "custom"), "custom");
    }
}
