//! Browser (`wasm32`) implementations of [`ridge_host`] service contracts.
//!
//! - `storage::local_prefs`: `window.localStorage` preferences
//! - `scope`: an `HtmlElement` (normally `document.documentElement`) as a theme scope
//! - `appearance`: `window.matchMedia` preference queries
//!
//! Non-wasm builds select the detached host bundle from [`adapters::build_host_services`].

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Host-bundle assembly for the active target.
pub mod adapters;
pub mod appearance;
pub mod scope;
pub mod storage;

pub use adapters::{build_host_services, host_capabilities, prefs_store};
pub use appearance::MediaQueryAppearance;
pub use scope::ElementThemeScope;
pub use storage::local_prefs::WebPrefsStore;
