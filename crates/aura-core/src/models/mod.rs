pub mod activity;
pub mod profile;

pub use activity::{Activity, ActivityKind, MAX_RECENT_ACTIVITIES};
pub use profile::WellnessProfile;
