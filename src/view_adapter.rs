use serde_json::{json, Value};
use crate::quiz_engine::{
    feedback,
    helpers::progress_label,
    models::EnrichedQuestion,
    tracker::{ProgressTracker, SessionSnapshot},
};

/// One entry of the question card's `choices` array.
///
/// Correctness and rationale are only attached once the answer is submitted,
/// so a client cannot read the answer off the payload early.
fn choice_entry(
    q: &EnrichedQuestion,
    key: &str,
    text: &str,
    snapshot: &SessionSnapshot<'_>,
    fallback: &str,
) -> Value {
    let selected = snapshot.selected_choice == Some(key);
    if !snapshot.submitted {
        return json!({ "key": key, "text": text, "selected": selected });
    }
    json!({
        "key": key,
        "text": text,
        "selected": selected,
        "is_correct_answer": q.question.is_correct_choice(key),
        "rationale": feedback::rationale_for_or(&q.question, key, fallback)
    })
}

/// The question card, or `null` when there is nothing to show.
fn question_card(snapshot: &SessionSnapshot<'_>, fallback: &str) -> Value {
    let q = match snapshot.current {
        Some(q) if !snapshot.finished => q,
        _ => return Value::Null,
    };
    let choices: Vec<Value> = q
        .question
        .choices
        .iter()
        .map(|(key, text)| choice_entry(q, key, text, snapshot, fallback))
        .collect();
    json!({
        "number": q.question.number,
        "category": q.category,
        "prompt": q.question.prompt,
        "label": progress_label(snapshot.position, snapshot.total),
        "choices": choices
    })
}

/// Feedback block, present only after submission.
fn feedback_block(snapshot: &SessionSnapshot<'_>, fallback: &str) -> Value {
    if !snapshot.submitted || snapshot.finished {
        return Value::Null;
    }
    json!({
        "is_correct": feedback::is_correct(snapshot),
        "wrong_rationale": feedback::wrong_rationale_or(snapshot, fallback)
    })
}

/// Project the tracker's state into the JSON shape the rendering layer reads.
pub fn to_view_state(tracker: &ProgressTracker) -> Value {
    let snapshot = tracker.snapshot();
    let fallback = tracker.config().fallback_rationale.as_str();
    let menu: Vec<Value> = tracker
        .menu()
        .into_iter()
        .map(|m| {
            json!({
                "quiz_id": m.quiz_id,
                "available": m.available,
                "question_count": m.question_count,
                "active": snapshot.active_quiz_id == Some(m.quiz_id.as_str())
            })
        })
        .collect();

    json!({
        "active_quiz_id": snapshot.active_quiz_id,
        "position": snapshot.position,
        "total": snapshot.total,
        "selected_choice": snapshot.selected_choice,
        "submitted": snapshot.submitted,
        "finished": snapshot.finished,
        "menu": menu,
        "question": question_card(&snapshot, fallback),
        "feedback": feedback_block(&snapshot, fallback)
    })
}
