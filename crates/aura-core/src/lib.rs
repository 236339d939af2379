//! aura-core
//!
//! Pure domain types and storage key conventions.
//! No storage or terminal dependency — this is the shared vocabulary of the
//! Aura check-in system.

pub mod error;
pub mod models;
pub mod storage_keys;
pub mod time;
