use std::io::Cursor;
use std::sync::Arc;
use std::time::Duration;

use aura_cli::checkin::{Outcome, run_checkin};
use aura_cli::commands;
use aura_cli::state::DashboardState;
use aura_core::models::ActivityKind;
use aura_instruments::get_instrument;
use aura_storage::store::MemoryStore;

fn at(seconds: i64) -> jiff::Timestamp {
    jiff::Timestamp::from_second(seconds).unwrap()
}

fn memory_state() -> DashboardState {
    DashboardState::new(Arc::new(MemoryStore::new()), Duration::ZERO)
}

#[test]
fn best_answers_submit_100() {
    let instrument = get_instrument("wellness_checkin").unwrap();
    // Selecting auto-advances until the last question, which needs "s".
    let script = "1\n".repeat(15) + "s\n";
    let mut out = Vec::new();

    let outcome = run_checkin(
        instrument.as_ref(),
        &mut Cursor::new(script),
        &mut out,
        || at(1_700_000_000),
    )
    .unwrap();

    let Outcome::Submitted(profile) = outcome else {
        panic!("expected submission");
    };
    assert_eq!(profile.score, 100);
    assert_eq!(profile.computed_at, at(1_700_000_000));

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Question 1 of 15"));
    assert!(text.contains("Question 15 of 15"));
    assert!(text.contains("Thank you for completing your wellness check-in!"));
}

#[test]
fn next_without_answer_reprompts() {
    let instrument = get_instrument("wellness_checkin").unwrap();
    let mut out = Vec::new();

    let outcome = run_checkin(
        instrument.as_ref(),
        &mut Cursor::new("n\nq\n"),
        &mut out,
        || at(0),
    )
    .unwrap();

    assert_eq!(outcome, Outcome::Quit);
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Please select an answer."));
    assert!(!text.contains("Question 2 of 15"));
}

#[test]
fn end_of_input_quits() {
    let instrument = get_instrument("wellness_checkin").unwrap();
    let mut out = Vec::new();
    let outcome = run_checkin(instrument.as_ref(), &mut Cursor::new("4\n"), &mut out, || at(0))
        .unwrap();
    assert_eq!(outcome, Outcome::Quit);
}

#[test]
fn early_submit_is_refused() {
    let instrument = get_instrument("wellness_checkin").unwrap();
    let mut out = Vec::new();
    let outcome = run_checkin(instrument.as_ref(), &mut Cursor::new("s\nq\n"), &mut out, || at(0))
        .unwrap();
    assert_eq!(outcome, Outcome::Quit);
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("submit from the last one"));
}

#[test]
fn going_back_allows_changing_an_answer() {
    let instrument = get_instrument("wellness_checkin").unwrap();
    // Answer 14 questions worst, go back one, re-answer best, finish worst.
    let mut script = "4\n".repeat(14);
    script.push_str("p\n1\n4\ns\n");
    let mut out = Vec::new();

    let outcome = run_checkin(instrument.as_ref(), &mut Cursor::new(script), &mut out, || at(0))
        .unwrap();

    let Outcome::Submitted(profile) = outcome else {
        panic!("expected submission");
    };
    // raw 42 of 45
    assert_eq!(profile.score, 7);
}

#[test]
fn checkin_command_persists_score_and_activity() {
    let state = memory_state();
    let script = "1\n".repeat(15) + "s\n";
    let mut out = Vec::new();

    let outcome =
        commands::checkin(&state, "wellness_checkin", &mut Cursor::new(script), &mut out).unwrap();
    assert!(matches!(outcome, Outcome::Submitted(_)));

    assert_eq!(state.scores.load().map(|p| p.score), Some(100));
    let recent = state.activities.recent();
    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0].kind, ActivityKind::Assessment);
    assert_eq!(recent[0].title, "Completed Wellness Check-in");
}

#[test]
fn cancelled_checkin_saves_nothing() {
    let state = memory_state();
    let mut out = Vec::new();
    commands::checkin(&state, "wellness_checkin", &mut Cursor::new("1\nq\n"), &mut out).unwrap();
    assert_eq!(state.scores.load(), None);
    assert!(state.activities.recent().is_empty());
}

#[test]
fn status_for_first_time_user() {
    let state = memory_state();
    let mut out = Vec::new();
    commands::status(&state, &mut out, at(0)).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("No wellness score yet"));
    assert!(text.contains("Your recent activities will show up here."));
}

#[test]
fn status_shows_saved_score() {
    let state = memory_state();
    let profile = aura_core::models::WellnessProfile::new(67, at(1_000)).unwrap();
    state.scores.save(&profile).unwrap();
    state
        .activities
        .record(ActivityKind::Assessment, "Completed Wellness Check-in", at(1_000))
        .unwrap();

    let mut out = Vec::new();
    commands::status(&state, &mut out, at(1_000 + 3 * 3_600)).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Wellness score: 67/100 (updated 3h ago)"));
    assert!(text.contains("[clipboard-check] Completed Wellness Check-in (3h ago)"));
}

#[test]
fn unknown_instrument_fails() {
    let state = memory_state();
    let mut out = Vec::new();
    assert!(commands::checkin(&state, "nope", &mut Cursor::new(""), &mut out).is_err());
}
