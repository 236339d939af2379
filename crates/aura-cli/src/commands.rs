use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use aura_core::models::ActivityKind;
use aura_core::time::time_ago;
use aura_instruments::{all_instruments, get_instrument};

use crate::checkin::{Outcome, run_checkin};
use crate::config::{self, AuraConfig};
use crate::state::DashboardState;

pub const WELLNESS_CHECKIN: &str = "wellness_checkin";

/// Run a check-in and persist the result on submit.
pub fn checkin<R: BufRead, W: Write>(
    state: &DashboardState,
    instrument_id: &str,
    input: &mut R,
    out: &mut W,
) -> eyre::Result<Outcome> {
    let instrument = get_instrument(instrument_id)?;
    let outcome = run_checkin(instrument.as_ref(), input, out, jiff::Timestamp::now)?;

    let Outcome::Submitted(profile) = &outcome else {
        writeln!(out, "Check-in cancelled. Nothing was saved.")?;
        return Ok(outcome);
    };

    if !state.latency.is_zero() {
        writeln!(out, "Saving...")?;
        std::thread::sleep(state.latency);
    }
    state.scores.save(profile)?;
    state.activities.record(
        ActivityKind::Assessment,
        "Completed Wellness Check-in",
        profile.computed_at,
    )?;

    writeln!(out, "Your wellness score: {}/100", profile.score)?;
    Ok(outcome)
}

/// Dashboard summary: last score and recent activities.
pub fn status<W: Write>(state: &DashboardState, out: &mut W, now: jiff::Timestamp) -> eyre::Result<()> {
    match state.scores.load() {
        Some(profile) => writeln!(
            out,
            "Wellness score: {}/100 (updated {})",
            profile.score,
            time_ago(profile.computed_at, now)
        )?,
        None => writeln!(
            out,
            "No wellness score yet. Run `aura checkin` to take your first check-in."
        )?,
    }

    writeln!(out)?;
    writeln!(out, "Recent activity:")?;
    let activities = state.activities.recent();
    if activities.is_empty() {
        writeln!(out, "  Your recent activities will show up here.")?;
    }
    for activity in activities {
        writeln!(
            out,
            "  [{}] {} ({})",
            activity.kind.icon(),
            activity.title,
            time_ago(activity.time, now)
        )?;
    }
    Ok(())
}

pub fn instruments<W: Write>(out: &mut W) -> eyre::Result<()> {
    for instrument in all_instruments() {
        writeln!(
            out,
            "{:<20} {} ({} questions)",
            instrument.id(),
            instrument.name(),
            instrument.questions().len()
        )?;
    }
    Ok(())
}

/// Settings to change with `aura config`. `None` leaves a field alone.
#[derive(Debug, Clone, Default)]
pub struct ConfigUpdate {
    pub data_dir: Option<PathBuf>,
    pub log_level: Option<String>,
    pub simulated_latency_ms: Option<u64>,
}

impl ConfigUpdate {
    pub fn is_empty(&self) -> bool {
        self.data_dir.is_none() && self.log_level.is_none() && self.simulated_latency_ms.is_none()
    }
}

/// Apply `update` to the config stored in `dir` and print the result.
/// An empty update only prints.
pub fn configure<W: Write>(dir: &Path, update: ConfigUpdate, out: &mut W) -> eyre::Result<AuraConfig> {
    let mut current = config::load_config_from(dir)?;

    if !update.is_empty() {
        if let Some(data_dir) = update.data_dir {
            current.data_dir = Some(data_dir);
        }
        if let Some(log_level) = update.log_level {
            current.log_level = log_level;
        }
        if let Some(latency) = update.simulated_latency_ms {
            current.simulated_latency_ms = latency;
        }
        config::save_config_to(dir, &current)?;
        current = config::load_config_from(dir)?;
    }

    writeln!(out, "{}", serde_json::to_string_pretty(&current)?)?;
    Ok(current)
}
