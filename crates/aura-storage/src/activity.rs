use std::sync::Arc;

use aura_core::models::{Activity, ActivityKind, MAX_RECENT_ACTIVITIES};
use aura_core::storage_keys;

use crate::error::StorageError;
use crate::state;
use crate::store::KeyValueStore;

/// The dashboard's recent activity list: newest first, capped at
/// [`MAX_RECENT_ACTIVITIES`].
#[derive(Clone)]
pub struct ActivityLog {
    store: Arc<dyn KeyValueStore>,
}

impl ActivityLog {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Prepend an entry and drop anything past the cap.
    pub fn record(
        &self,
        kind: ActivityKind,
        title: impl Into<String>,
        time: jiff::Timestamp,
    ) -> Result<Vec<Activity>, StorageError> {
        let mut activities = self.recent();
        activities.insert(0, Activity::new(kind, title, time));
        activities.truncate(MAX_RECENT_ACTIVITIES);
        state::save_state(self.store.as_ref(), storage_keys::RECENT_ACTIVITIES, &activities)?;
        tracing::debug!(?kind, count = activities.len(), "activity recorded");
        Ok(activities)
    }

    pub fn recent(&self) -> Vec<Activity> {
        state::load_state_or_none(self.store.as_ref(), storage_keys::RECENT_ACTIVITIES)
            .unwrap_or_default()
    }
}
