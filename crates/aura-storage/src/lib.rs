//! aura-storage
//!
//! Local key/value persistence for dashboard state. Stands in for the
//! browser's local storage: one JSON document per key, last write wins.

pub mod activity;
pub mod error;
pub mod file;
pub mod score;
pub mod state;
pub mod store;
