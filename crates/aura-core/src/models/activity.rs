use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// How many entries the dashboard's recent activity list keeps.
pub const MAX_RECENT_ACTIVITIES: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ActivityKind {
    /// AI chat session or simulated call.
    Chat,
    /// Counseling session booked.
    Booking,
    /// Wellness check-in completed.
    Assessment,
    /// Counseling session cancelled.
    Cancel,
}

impl ActivityKind {
    /// Icon name used by the web dashboard for this kind of activity.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Chat => "message-circle",
            Self::Booking => "calendar-plus",
            Self::Assessment => "clipboard-check",
            Self::Cancel => "calendar-x",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Activity {
    pub kind: ActivityKind,
    pub title: String,
    pub time: jiff::Timestamp,
}

impl Activity {
    pub fn new(kind: ActivityKind, title: impl Into<String>, time: jiff::Timestamp) -> Self {
        Self {
            kind,
            title: title.into(),
            time,
        }
    }
}
