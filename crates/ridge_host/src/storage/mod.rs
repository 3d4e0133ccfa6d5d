//! Durable storage contracts.

pub mod prefs;
