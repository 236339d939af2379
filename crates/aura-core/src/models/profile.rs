use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// The most recent wellness check-in result shown on the dashboard.
///
/// Only one profile is kept per user. Completing a new check-in replaces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WellnessProfile {
    /// Wellness score in `[0, 100]`; 100 is best.
    pub score: u8,
    pub computed_at: jiff::Timestamp,
}

impl WellnessProfile {
    pub const MAX_SCORE: u8 = 100;

    pub fn new(score: u32, computed_at: jiff::Timestamp) -> Result<Self, CoreError> {
        if score > u32::from(Self::MAX_SCORE) {
            return Err(CoreError::ScoreOutOfRange(score));
        }
        Ok(Self {
            score: score as u8,
            computed_at,
        })
    }

    pub fn is_valid(&self) -> bool {
        self.score <= Self::MAX_SCORE
    }
}
