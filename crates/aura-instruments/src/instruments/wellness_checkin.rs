use crate::Instrument;
use crate::scoring::Question;

/// Wellness Check-in: the dashboard's two-week self-assessment.
/// Mood and interest items, anxiety items, then general functioning items.
/// Every item is weighted 0–3. Higher = more frequent difficulty.
pub struct WellnessCheckin;

const FREQUENCY: [&str; 4] = [
    "Not at all",
    "Several days",
    "More than half the days",
    "Nearly every day",
];

const WEIGHTS: [u32; 4] = [0, 1, 2, 3];

impl Instrument for WellnessCheckin {
    fn id(&self) -> &str {
        "wellness_checkin"
    }

    fn name(&self) -> &str {
        "Wellness Check-in"
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: std::sync::LazyLock<Vec<Question>> = std::sync::LazyLock::new(|| {
            vec![
                frequency(
                    "Over the last 2 weeks, how often have you had little interest or pleasure in doing things you normally enjoy?",
                ),
                frequency("How often have you been feeling down, depressed, or hopeless?"),
                frequency(
                    "How often have you had trouble falling asleep, staying asleep, or sleeping too much?",
                ),
                frequency("How often have you been feeling tired or having little energy?"),
                frequency(
                    "How often have you felt bad about yourself, or that you are a failure, or have let yourself or your family down?",
                ),
                frequency(
                    "Over the last 2 weeks, how often have you been feeling nervous, anxious, or on edge?",
                ),
                frequency("How often have you been unable to stop or control worrying?"),
                frequency("How often have you had trouble relaxing?"),
                frequency("How often have you been so restless that it is hard to sit still?"),
                frequency("How often have you become easily annoyed or irritable?"),
                Question::new(
                    "Over the last 2 weeks, have you been able to concentrate on what you're doing?",
                    &[
                        "Better than usual",
                        "Same as usual",
                        "Less than usual",
                        "Much less than usual",
                    ],
                    &WEIGHTS,
                ),
                Question::new(
                    "Have you felt that you are playing a useful part in things?",
                    &[
                        "More so than usual",
                        "Same as usual",
                        "Less so than usual",
                        "Much less than usual",
                    ],
                    &WEIGHTS,
                ),
                Question::new(
                    "Have you felt capable of making decisions about things?",
                    &[
                        "More so than usual",
                        "Same as usual",
                        "Less able than usual",
                        "Much less able",
                    ],
                    &WEIGHTS,
                ),
                Question::new(
                    "Have you been able to enjoy your normal day-to-day activities?",
                    &[
                        "More so than usual",
                        "Same as usual",
                        "Less so than usual",
                        "Much less than usual",
                    ],
                    &WEIGHTS,
                ),
                Question::new(
                    "Overall, how connected have you felt to other people?",
                    &[
                        "Very connected",
                        "Moderately connected",
                        "Slightly connected",
                        "Not at all connected",
                    ],
                    &WEIGHTS,
                ),
            ]
        });
        &QUESTIONS
    }
}

fn frequency(prompt: &str) -> Question {
    Question::new(prompt, &FREQUENCY, &WEIGHTS)
}
