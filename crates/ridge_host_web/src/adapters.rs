use ridge_host::{CapabilityStatus, HostCapabilities, HostServices};

use crate::WebPrefsStore;

/// Returns the browser preference store.
pub fn prefs_store() -> WebPrefsStore {
    WebPrefsStore
}

/// Capability posture of the current page.
pub fn host_capabilities() -> HostCapabilities {
    HostCapabilities {
        persistence: if prefs_store().is_available() {
            CapabilityStatus::Available
        } else {
            CapabilityStatus::Unavailable
        },
        appearance_queries: if cfg!(target_arch = "wasm32") {
            CapabilityStatus::Available
        } else {
            CapabilityStatus::Unavailable
        },
    }
}

/// Builds the host bundle for the active target.
///
/// Browser builds bind `document.documentElement`; any other target (or a page without a
/// document) receives [`HostServices::detached`].
pub fn build_host_services() -> HostServices {
    #[cfg(target_arch = "wasm32")]
    {
        use std::rc::Rc;

        use crate::{ElementThemeScope, MediaQueryAppearance};

        if let Some(root_scope) = ElementThemeScope::document_root() {
            return HostServices {
                prefs: Rc::new(prefs_store()),
                root_scope: Rc::new(root_scope),
                appearance: Rc::new(MediaQueryAppearance::default()),
                capabilities: host_capabilities(),
            };
        }
    }

    HostServices::detached()
}
