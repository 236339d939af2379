//! aura-cli library root.
//!
//! Re-exports internal modules so that integration tests can drive a
//! check-in with scripted input and exercise config migrations without
//! going through the terminal.

pub mod checkin;
pub mod commands;
pub mod config;
pub mod state;
