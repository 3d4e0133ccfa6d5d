//! System appearance preference queries (color scheme, contrast) and change subscriptions.

use std::{cell::RefCell, rc::Rc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// System-level appearance preference the host can report.
pub enum AppearanceQuery {
    /// `prefers-color-scheme: dark`.
    PrefersDark,
    /// `prefers-contrast: more`/`high`.
    PrefersHighContrast,
}

impl AppearanceQuery {
    /// CSS media query string evaluated by browser hosts.
    pub const fn media_query(self) -> &'static str {
        match self {
            Self::PrefersDark => "(prefers-color-scheme: dark)",
            Self::PrefersHighContrast => "(prefers-contrast: more)",
        }
    }
}

/// Listener invoked with the new match state of a query.
pub type AppearanceListener = Rc<dyn Fn(bool)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// Registration handle returned by [`SystemAppearance::add_listener`].
pub struct AppearanceListenerId(pub u64);

/// Host service reporting system appearance preferences.
pub trait SystemAppearance {
    /// Whether the query currently matches. Hosts without the capability report `false`.
    fn matches(&self, query: AppearanceQuery) -> bool;

    /// Registers a change listener, or returns `None` when the host cannot observe changes.
    fn add_listener(
        &self,
        query: AppearanceQuery,
        listener: AppearanceListener,
    ) -> Option<AppearanceListenerId>;

    /// Unregisters a listener. Unknown ids are ignored.
    fn remove_listener(&self, id: AppearanceListenerId);
}

#[derive(Debug, Clone, Copy, Default)]
/// Appearance service for hosts without preference queries.
pub struct NoopSystemAppearance;

impl SystemAppearance for NoopSystemAppearance {
    fn matches(&self, _query: AppearanceQuery) -> bool {
        false
    }

    fn add_listener(
        &self,
        _query: AppearanceQuery,
        _listener: AppearanceListener,
    ) -> Option<AppearanceListenerId> {
        None
    }

    fn remove_listener(&self, _id: AppearanceListenerId) {}
}

#[derive(Default)]
struct MemoryAppearanceState {
    prefers_dark: bool,
    prefers_high_contrast: bool,
    next_id: u64,
    listeners: Vec<(AppearanceListenerId, AppearanceQuery, AppearanceListener)>,
}

#[derive(Clone, Default)]
/// Scriptable appearance service for tests.
pub struct MemorySystemAppearance {
    inner: Rc<RefCell<MemoryAppearanceState>>,
}

impl MemorySystemAppearance {
    /// Changes a preference and notifies that query's listeners when the value changed.
    pub fn set(&self, query: AppearanceQuery, matches: bool) {
        let listeners = {
            let mut state = self.inner.borrow_mut();
            let slot = match query {
                AppearanceQuery::PrefersDark => &mut state.prefers_dark,
                AppearanceQuery::PrefersHighContrast => &mut state.prefers_high_contrast,
            };
            if *slot == matches {
                return;
            }
            *slot = matches;
            state
                .listeners
                .iter()
                .filter(|(_, q, _)| *q == query)
                .map(|(_, _, listener)| listener.clone())
                .collect::<Vec<_>>()
        };
        for listener in listeners {
            listener(matches);
        }
    }

    /// Number of live listeners across all queries.
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

impl SystemAppearance for MemorySystemAppearance {
    fn matches(&self, query: AppearanceQuery) -> bool {
        let state = self.inner.borrow();
        match query {
            AppearanceQuery::PrefersDark => state.prefers_dark,
            AppearanceQuery::PrefersHighContrast => state.prefers_high_contrast,
        }
    }

    fn add_listener(
        &self,
        query: AppearanceQuery,
        listener: AppearanceListener,
    ) -> Option<AppearanceListenerId> {
        let mut state = self.inner.borrow_mut();
        state.next_id += 1;
        let id = AppearanceListenerId(state.next_id);
        state.listeners.push((id, query, listener));
        Some(id)
    }

    fn remove_listener(&self, id: AppearanceListenerId) {
        self.inner
            .borrow_mut()
            .listeners
            .retain(|(listener_id, _, _)| *listener_id != id);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn memory_appearance_notifies_matching_listeners_on_change_only() {
        let appearance = MemorySystemAppearance::default();
        let hits = Rc::new(Cell::new(0));
        let hits_in = hits.clone();
        let id = appearance
            .add_listener(
                AppearanceQuery::PrefersDark,
                Rc::new(move |_: bool| hits_in.set(hits_in.get() + 1)),
            )
            .expect("listener id");

        appearance.set(AppearanceQuery::PrefersDark, true);
        appearance.set(AppearanceQuery::PrefersDark, true);
        appearance.set(AppearanceQuery::PrefersHighContrast, true);
        assert_eq!(hits.get(), 1);
        assert!(appearance.matches(AppearanceQuery::PrefersDark));

        appearance.remove_listener(id);
        appearance.remove_listener(id);
        assert_eq!(appearance.listener_count(), 0);
        appearance.set(AppearanceQuery::PrefersDark, false);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn noop_appearance_reports_nothing() {
        let appearance = NoopSystemAppearance;
        assert!(!appearance.matches(AppearanceQuery::PrefersHighContrast));
        assert!(appearance
            .add_listener(AppearanceQuery::PrefersDark, Rc::new(|_| {}))
            .is_none());
    }
}
