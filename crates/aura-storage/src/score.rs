use std::sync::Arc;

use aura_core::models::WellnessProfile;
use aura_core::storage_keys;

use crate::error::StorageError;
use crate::state;
use crate::store::KeyValueStore;

/// The single most recent wellness result. Each save overwrites; there is no
/// history.
#[derive(Clone)]
pub struct ScoreStore {
    store: Arc<dyn KeyValueStore>,
}

impl ScoreStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn save(&self, profile: &WellnessProfile) -> Result<(), StorageError> {
        state::save_state(self.store.as_ref(), storage_keys::WELLNESS_PROFILE, profile)?;
        tracing::info!(score = profile.score, "wellness profile saved");
        Ok(())
    }

    /// `None` for a first-time user. Unreadable records are logged and
    /// reported as absent.
    pub fn load(&self) -> Option<WellnessProfile> {
        let profile: WellnessProfile =
            state::load_state_or_none(self.store.as_ref(), storage_keys::WELLNESS_PROFILE)?;
        if !profile.is_valid() {
            tracing::warn!(score = profile.score, "stored wellness score out of range, ignoring");
            return None;
        }
        Some(profile)
    }
}
