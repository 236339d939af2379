//! Local storage key conventions.
//!
//! Pure string constants. These define the canonical layout of entries in
//! whatever key/value store backs a user's dashboard.

pub const WELLNESS_PROFILE: &str = "wellness_profile";

pub const RECENT_ACTIVITIES: &str = "recent_activities";
