use aura_instruments::questionnaire::QuestionnaireEngine;
use aura_instruments::scoring::{self, Question, ScoreTotals};
use aura_instruments::{all_instruments, get_instrument};

#[test]
fn every_instrument_has_a_valid_bank() {
    for instrument in all_instruments() {
        assert!(
            QuestionnaireEngine::new(instrument.questions()).is_ok(),
            "{} has a malformed question bank",
            instrument.id()
        );
    }
}

#[test]
fn wellness_checkin_has_fifteen_four_option_questions() {
    let checkin = get_instrument("wellness_checkin").unwrap();
    assert_eq!(checkin.name(), "Wellness Check-in");
    assert_eq!(checkin.questions().len(), 15);
    assert!(checkin.questions().iter().all(|q| q.options.len() == 4));
    assert_eq!(checkin.max_raw_score(), 45);
}

#[test]
fn unknown_instrument_is_an_error() {
    assert!(get_instrument("phq9").is_err());
}

#[test]
fn wellness_checkin_extremes() {
    let checkin = get_instrument("wellness_checkin").unwrap();
    let questions = checkin.questions();

    let best: Vec<Option<String>> = questions.iter().map(|q| Some(q.options[0].clone())).collect();
    assert_eq!(scoring::wellness_score(questions, &best), Ok(100));

    let worst: Vec<Option<String>> = questions
        .iter()
        .map(|q| Some(q.options[q.options.len() - 1].clone()))
        .collect();
    assert_eq!(scoring::wellness_score(questions, &worst), Ok(0));
}

#[test]
fn halves_round_up() {
    // 1 of 8 -> 87.5
    assert_eq!(ScoreTotals { raw: 1, max: 8 }.wellness_score(), 88);
    // 3 of 8 -> 62.5
    assert_eq!(ScoreTotals { raw: 3, max: 8 }.wellness_score(), 63);
    assert_eq!(ScoreTotals { raw: 0, max: 0 }.wellness_score(), 100);
    assert_eq!(
        ScoreTotals {
            raw: u64::MAX / 2,
            max: u64::MAX,
        }
        .wellness_score(),
        50
    );
}

#[test]
fn weight_lookup_is_case_sensitive() {
    let question = Question::new("Sleep?", &["Fine", "Poor"], &[0, 2]);
    assert_eq!(question.weight_of("Poor"), Some(2));
    assert_eq!(question.weight_of("poor"), None);
    assert_eq!(question.max_weight(), 2);
}
