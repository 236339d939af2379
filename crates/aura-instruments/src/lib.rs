//! aura-instruments
//!
//! Self-assessment instrument definitions and the questionnaire flow.
//! Pure data and state — no storage dependency. Defines the question banks,
//! the weighted scoring rule, and the per-session engine that walks a user
//! through a check-in.

pub mod error;
pub mod instruments;
pub mod questionnaire;
pub mod scoring;

use error::InstrumentError;
use scoring::Question;

/// Trait implemented by each self-assessment instrument.
pub trait Instrument: Send + Sync {
    /// Unique identifier for this instrument (e.g., "wellness_checkin").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "Wellness Check-in").
    fn name(&self) -> &str;

    /// The fixed, ordered question bank.
    fn questions(&self) -> &[Question];

    /// Highest raw score a respondent can reach on this instrument.
    fn max_raw_score(&self) -> u64 {
        self.questions()
            .iter()
            .map(|q| u64::from(q.max_weight()))
            .sum()
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![Box::new(instruments::wellness_checkin::WellnessCheckin)]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Result<Box<dyn Instrument>, InstrumentError> {
    all_instruments()
        .into_iter()
        .find(|i| i.id() == id)
        .ok_or_else(|| InstrumentError::UnknownInstrument(id.to_string()))
}
