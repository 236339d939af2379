//! Terminal front end for a questionnaire session.

use std::io::{BufRead, Write};

use aura_core::models::WellnessProfile;
use aura_instruments::Instrument;
use aura_instruments::error::QuestionnaireError;
use aura_instruments::questionnaire::QuestionnaireEngine;

/// How an interactive session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Submitted(WellnessProfile),
    Quit,
}

/// One line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
    /// 1-based option number.
    Select(usize),
    Next,
    Previous,
    Submit,
    Quit,
    Unknown,
}

fn parse_input(line: &str) -> Input {
    match line.trim().to_ascii_lowercase().as_str() {
        "n" | "next" => Input::Next,
        "p" | "prev" | "previous" => Input::Previous,
        "s" | "submit" => Input::Submit,
        "q" | "quit" => Input::Quit,
        other => match other.parse::<usize>() {
            Ok(n) if n > 0 => Input::Select(n),
            _ => Input::Unknown,
        },
    }
}

/// Re-prompt text for an engine rejection.
fn reprompt(err: &QuestionnaireError) -> String {
    match err {
        QuestionnaireError::MissingAnswer { .. } | QuestionnaireError::InvalidOption { .. } => {
            "Please select an answer.".to_string()
        }
        QuestionnaireError::IncompleteQuestionnaire { .. } => {
            "Please answer all questions.".to_string()
        }
        other => other.to_string(),
    }
}

fn render_question<W: Write>(engine: &QuestionnaireEngine<'_>, out: &mut W) -> std::io::Result<()> {
    let progress = engine.progress();
    let question = engine.current_question();
    let selected = engine.answer_at(engine.current_index());

    writeln!(out)?;
    writeln!(
        out,
        "Question {} of {} ({:.0}%)",
        progress.position,
        progress.total,
        progress.percent()
    )?;
    writeln!(out, "{}", question.prompt)?;
    for (i, option) in question.options.iter().enumerate() {
        let marker = if selected == Some(option.as_str()) { "*" } else { " " };
        writeln!(out, " {marker} {}. {option}", i + 1)?;
    }

    let mut hints = Vec::new();
    if !engine.is_first() {
        hints.push("[p]revious");
    }
    if engine.is_last() {
        hints.push("[s]ubmit");
    } else {
        hints.push("[n]ext");
    }
    hints.push("[q]uit");
    write!(out, "Choose 1-{}, {}: ", question.options.len(), hints.join(", "))?;
    out.flush()
}

/// Walk the user through `instrument` until they submit or quit.
///
/// Selecting an option records it and moves on, except on the last question
/// where the user submits explicitly. End of input counts as quitting.
pub fn run_checkin<R: BufRead, W: Write>(
    instrument: &dyn Instrument,
    input: &mut R,
    out: &mut W,
    now: impl Fn() -> jiff::Timestamp,
) -> eyre::Result<Outcome> {
    let mut engine = QuestionnaireEngine::new(instrument.questions())?;
    engine.start();
    writeln!(out, "{}", instrument.name())?;

    let mut line = String::new();
    loop {
        render_question(&engine, out)?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(Outcome::Quit);
        }

        let result = match parse_input(&line) {
            Input::Select(n) => engine.answer_current(n - 1).and_then(|()| {
                if engine.is_last() {
                    Ok(())
                } else {
                    engine.advance()
                }
            }),
            Input::Next => engine.advance(),
            Input::Previous => {
                engine.retreat();
                Ok(())
            }
            Input::Submit if !engine.is_last() => {
                writeln!(out, "Answer the remaining questions, then submit from the last one.")?;
                Ok(())
            }
            Input::Submit => match engine.submit(now()) {
                Ok(profile) => {
                    writeln!(out, "Thank you for completing your wellness check-in!")?;
                    return Ok(Outcome::Submitted(profile));
                }
                Err(e) => Err(e),
            },
            Input::Quit => return Ok(Outcome::Quit),
            Input::Unknown => {
                writeln!(out, "Unrecognised input: {}", line.trim())?;
                Ok(())
            }
        };

        if let Err(e) = result {
            tracing::debug!(error = %e, "input rejected");
            writeln!(out, "{}", reprompt(&e))?;
        }
    }
}
