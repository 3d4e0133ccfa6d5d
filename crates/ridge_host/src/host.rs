//! Host service bundle injected into the runtime by the entry layer.

use std::rc::Rc;

use crate::{
    MemoryPrefsStore, MemorySystemAppearance, MemoryThemeScope, NoopPrefsStore,
    NoopSystemAppearance, PrefsStore, SystemAppearance, ThemeScope,
};

/// Host availability state for one optional capability domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapabilityStatus {
    /// Capability is available.
    Available,
    /// Capability is not supported on the active host; calls degrade to no-ops.
    Unavailable,
}

impl CapabilityStatus {
    /// Returns whether the capability can be used.
    pub const fn is_available(self) -> bool {
        matches!(self, Self::Available)
    }
}

/// Capability snapshot for the optional host domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostCapabilities {
    /// Durable preference storage.
    pub persistence: CapabilityStatus,
    /// System appearance queries and change notifications.
    pub appearance_queries: CapabilityStatus,
}

impl HostCapabilities {
    /// Everything available.
    pub const fn full() -> Self {
        Self {
            persistence: CapabilityStatus::Available,
            appearance_queries: CapabilityStatus::Available,
        }
    }

    /// Nothing optional available.
    pub const fn minimal() -> Self {
        Self {
            persistence: CapabilityStatus::Unavailable,
            appearance_queries: CapabilityStatus::Unavailable,
        }
    }
}

/// Runtime-selected host services.
///
/// All environment-specific selection happens before this bundle reaches `ridge_runtime`, which
/// keeps the runtime free of browser types.
#[derive(Clone)]
pub struct HostServices {
    /// Durable preference store.
    pub prefs: Rc<dyn PrefsStore>,
    /// Document-level theme scope.
    pub root_scope: Rc<dyn ThemeScope>,
    /// System appearance queries.
    pub appearance: Rc<dyn SystemAppearance>,
    /// Capability snapshot.
    pub capabilities: HostCapabilities,
}

impl HostServices {
    /// Bundle over in-memory services; clones of the passed handles observe every mutation.
    pub fn memory(
        prefs: MemoryPrefsStore,
        root_scope: MemoryThemeScope,
        appearance: MemorySystemAppearance,
    ) -> Self {
        Self {
            prefs: Rc::new(prefs),
            root_scope: Rc::new(root_scope),
            appearance: Rc::new(appearance),
            capabilities: HostCapabilities::full(),
        }
    }

    /// Bundle for hosts with no storage and no appearance queries.
    pub fn detached() -> Self {
        Self {
            prefs: Rc::new(NoopPrefsStore),
            root_scope: Rc::new(MemoryThemeScope::default()),
            appearance: Rc::new(NoopSystemAppearance),
            capabilities: HostCapabilities::minimal(),
        }
    }
}
