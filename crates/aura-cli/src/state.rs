use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use aura_storage::activity::ActivityLog;
use aura_storage::file::FileStore;
use aura_storage::score::ScoreStore;
use aura_storage::store::KeyValueStore;

use crate::config::AuraConfig;

/// Everything a command needs: the stores behind the dashboard plus the
/// presentation knobs from config.
pub struct DashboardState {
    pub scores: ScoreStore,
    pub activities: ActivityLog,
    pub latency: Duration,
}

impl DashboardState {
    pub fn new(store: Arc<dyn KeyValueStore>, latency: Duration) -> Self {
        Self {
            scores: ScoreStore::new(store.clone()),
            activities: ActivityLog::new(store),
            latency,
        }
    }

    /// File-backed state under `data_dir`, or the configured directory.
    pub fn open(config: &AuraConfig, data_dir: Option<PathBuf>) -> eyre::Result<Self> {
        let dir = match data_dir {
            Some(dir) => dir,
            None => config.resolved_data_dir()?,
        };
        tracing::debug!(path = %dir.display(), "opening dashboard state");
        Ok(Self::new(
            Arc::new(FileStore::new(dir)),
            Duration::from_millis(config.simulated_latency_ms),
        ))
    }
}
