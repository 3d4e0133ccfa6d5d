//! Typed host-environment contracts for the Ridge UI runtime.
//!
//! The runtime never touches browser globals directly. Durable preference storage, the
//! document-level theme scope, and system appearance queries are reached through the traits in
//! this crate; browser adapters live in `ridge_host_web` and the in-memory implementations here
//! back tests and targets without those capabilities.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod appearance;
pub mod host;
pub mod scope;
pub mod storage;

pub use appearance::{
    AppearanceListener, AppearanceListenerId, AppearanceQuery, MemorySystemAppearance,
    NoopSystemAppearance, SystemAppearance,
};
pub use host::{CapabilityStatus, HostCapabilities, HostServices};
pub use scope::{MemoryThemeScope, ThemeScope};
pub use storage::prefs::{MemoryPrefsStore, NoopPrefsStore, PrefsStore};
