//! Console walkthrough of a full quiz session.
//!
//! Run with: `cargo run --example walkthrough`
//! (add `RUST_LOG=debug` to see every state transition).
//!
//! The session is scripted rather than interactive so the output is the same
//! on every run:
//!
//! 1. **Menu**: the three canonical slots, with `quiz2` missing from the bank.
//! 2. **Quiz 1**: answers the first question wrong, re-picks after grading,
//!    then answers the rest and finishes.
//! 3. **Replay**: restarts the same quiz and shows it is back at question 1.
//! 4. **View payload**: prints the JSON a renderer would receive.

use quiz_progression::{
    feedback, to_view_state, ProgressTracker, QuestionBank, SessionConfig,
};

const SAMPLE_BANK: &str = include_str!("data/sample_bank.json");

/// Print the current question with its choices, marking the pick and, once
/// submitted, the correct answer.
fn print_question(tracker: &ProgressTracker) {
    let snap = tracker.snapshot();
    let Some(q) = snap.current else {
        println!("  (no question)");
        return;
    };
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  [{} / {}]  #{}  {}", snap.position + 1, snap.total, q.number(), q.category);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  Q: {}", q.question.prompt);
    for (key, text) in &q.question.choices {
        let picked = if snap.selected_choice == Some(key.as_str()) { ">" } else { " " };
        let mark = if snap.submitted && q.question.is_correct_choice(key) { "✓" } else { " " };
        println!("  {picked}[{key}] {mark} {text}");
        if snap.submitted {
            let fallback = &tracker.config().fallback_rationale;
            println!("         {}", feedback::rationale_for_or(&q.question, key, fallback));
        }
    }
    println!();
}

fn answer(tracker: &mut ProgressTracker, key: &str) {
    tracker.select_choice(key);
    tracker.submit();
    print_question(tracker);
    if tracker.is_correct() {
        println!("  Correct!");
    } else if let Some(why) = tracker.wrong_rationale() {
        println!("  Not quite: {why}");
    }
    println!();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();

    let bank = QuestionBank::from_json_str(SAMPLE_BANK)?;
    let mut tracker = ProgressTracker::with_config(bank, SessionConfig::default());

    // ── Menu ──────────────────────────────────────────────────────────────
    println!();
    println!("══ Quiz menu ══");
    for entry in tracker.menu() {
        let status = if entry.available {
            format!("{} questions", entry.question_count)
        } else {
            "unavailable".to_string()
        };
        println!("  {:<8} {}", entry.quiz_id, status);
    }
    println!();

    // ── Quiz 1 ────────────────────────────────────────────────────────────
    println!("══ quiz1 ══");
    tracker.select_quiz("quiz1");
    print_question(&tracker);

    // Submit without a pick: nothing happens.
    let outcome = tracker.submit();
    println!("  submit with no pick -> {outcome:?}");
    println!();

    answer(&mut tracker, "C");
    // Re-pick after grading reopens the question.
    answer(&mut tracker, "A");
    tracker.advance();

    answer(&mut tracker, "B");
    tracker.advance();

    answer(&mut tracker, "A");
    tracker.advance();
    println!("  finished: {}", tracker.snapshot().finished);
    println!();

    // ── Replay ────────────────────────────────────────────────────────────
    println!("══ replay ══");
    tracker.replay();
    print_question(&tracker);

    // ── View payload ──────────────────────────────────────────────────────
    println!("══ view state ══");
    tracker.select_choice("B");
    tracker.submit();
    println!("{}", serde_json::to_string_pretty(&to_view_state(&tracker))?);

    tracker.exit_quiz();
    Ok(())
}
