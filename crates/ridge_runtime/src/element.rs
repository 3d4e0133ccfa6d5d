//! Per-widget theme binding.
//!
//! Each widget carries a `light | dark | auto` mode. Static modes resolve once; `auto` follows the
//! system dark preference for as long as the binding is connected.

use std::{
    cell::{Cell, RefCell},
    rc::{Rc, Weak},
};

use ridge_host::{AppearanceListenerId, AppearanceQuery, SystemAppearance};
use ridge_tokens::{ThemeMode, ThemeName};

use crate::observers::{ObserverId, Observers};

struct ElementInner {
    mode: Cell<ThemeMode>,
    resolved: Cell<ThemeName>,
    appearance: RefCell<Option<Rc<dyn SystemAppearance>>>,
    listener: Cell<Option<AppearanceListenerId>>,
    observers: Observers<ThemeName>,
}

impl ElementInner {
    fn resolve(&self) -> ThemeName {
        match self.mode.get() {
            ThemeMode::Light => ThemeName::Light,
            ThemeMode::Dark => ThemeName::Dark,
            ThemeMode::Auto => {
                let prefers_dark = self
                    .appearance
                    .borrow()
                    .as_ref()
                    .is_some_and(|appearance| appearance.matches(AppearanceQuery::PrefersDark));
                if prefers_dark {
                    ThemeName::Dark
                } else {
                    ThemeName::Light
                }
            }
        }
    }

    fn update(&self, next: ThemeName) {
        if self.resolved.replace(next) != next {
            self.observers.notify(&next);
        }
    }

    fn unsubscribe(&self) {
        if let Some(id) = self.listener.take() {
            if let Some(appearance) = self.appearance.borrow().as_ref() {
                appearance.remove_listener(id);
            }
        }
    }
}

impl Drop for ElementInner {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

#[derive(Clone)]
/// Theme binding owned by one widget instance. Clones share the binding.
pub struct ElementTheme {
    inner: Rc<ElementInner>,
}

impl ElementTheme {
    /// Unconnected binding; `auto` reads as light until [`ElementTheme::connect`] runs.
    pub fn new(mode: ThemeMode) -> Self {
        let inner = ElementInner {
            mode: Cell::new(mode),
            resolved: Cell::new(ThemeName::Light),
            appearance: RefCell::new(None),
            listener: Cell::new(None),
            observers: Observers::default(),
        };
        inner.resolved.set(inner.resolve());
        Self {
            inner: Rc::new(inner),
        }
    }

    /// Attaches the binding to the system appearance source.
    pub fn connect(&self, appearance: Rc<dyn SystemAppearance>) {
        self.inner.unsubscribe();
        *self.inner.appearance.borrow_mut() = Some(appearance);
        self.rebind();
    }

    /// Switches mode, subscribing or unsubscribing as `auto` is entered or left.
    pub fn set_mode(&self, mode: ThemeMode) {
        if self.inner.mode.replace(mode) == mode {
            return;
        }
        self.rebind();
    }

    /// Drops the system subscription. Safe to call repeatedly.
    pub fn disconnect(&self) {
        self.inner.unsubscribe();
    }

    /// Current mode.
    pub fn mode(&self) -> ThemeMode {
        self.inner.mode.get()
    }

    /// Currently resolved theme.
    pub fn resolved(&self) -> ThemeName {
        self.inner.resolved.get()
    }

    /// Whether a system listener is registered.
    pub fn is_subscribed(&self) -> bool {
        self.inner.listener.get().is_some()
    }

    /// Registers an observer called whenever the resolved theme changes.
    pub fn subscribe(&self, observer: impl Fn(&ThemeName) + 'static) -> ObserverId {
        self.inner.observers.add(observer)
    }

    /// Removes an observer.
    pub fn unsubscribe(&self, id: ObserverId) -> bool {
        self.inner.observers.remove(id)
    }

    fn rebind(&self) {
        let inner = &self.inner;
        let wants_listener = inner.mode.get() == ThemeMode::Auto;
        if !wants_listener {
            inner.unsubscribe();
        } else if inner.listener.get().is_none() {
            let appearance = inner.appearance.borrow().clone();
            if let Some(appearance) = appearance {
                let weak: Weak<ElementInner> = Rc::downgrade(inner);
                let id = appearance.add_listener(
                    AppearanceQuery::PrefersDark,
                    Rc::new(move |prefers_dark: bool| {
                        if let Some(inner) = weak.upgrade() {
                            if inner.mode.get() == ThemeMode::Auto {
                                inner.update(if prefers_dark {
                                    ThemeName::Dark
                                } else {
                                    ThemeName::Light
                                });
                            }
                        }
                    }),
                );
                inner.listener.set(id);
            }
        }
        inner.update(inner.resolve());
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ridge_host::MemorySystemAppearance;

    use super::*;

    #[test]
    fn static_modes_never_subscribe() {
        let appearance = MemorySystemAppearance::default();
        appearance.set(AppearanceQuery::PrefersDark, true);
        let element = ElementTheme::new(ThemeMode::Light);
        element.connect(Rc::new(appearance.clone()));

        assert_eq!(element.resolved(), ThemeName::Light);
        assert!(!element.is_subscribed());
        appearance.set(AppearanceQuery::PrefersDark, false);
        assert_eq!(appearance.listener_count(), 0);
    }

    #[test]
    fn auto_follows_system_until_disconnected() {
        let appearance = MemorySystemAppearance::default();
        let element = ElementTheme::new(ThemeMode::Auto);
        element.connect(Rc::new(appearance.clone()));
        assert_eq!(element.resolved(), ThemeName::Light);
        assert_eq!(appearance.listener_count(), 1);

        appearance.set(AppearanceQuery::PrefersDark, true);
        assert_eq!(element.resolved(), ThemeName::Dark);

        element.disconnect();
        element.disconnect();
        assert_eq!(appearance.listener_count(), 0);
        appearance.set(AppearanceQuery::PrefersDark, false);
        assert_eq!(element.resolved(), ThemeName::Dark);
    }

    #[test]
    fn mode_changes_rebind_subscription() {
        let appearance = MemorySystemAppearance::default();
        appearance.set(AppearanceQuery::PrefersDark, true);
        let element = ElementTheme::new(ThemeMode::Light);
        element.connect(Rc::new(appearance.clone()));

        element.set_mode(ThemeMode::Auto);
        assert_eq!(element.resolved(), ThemeName::Dark);
        assert_eq!(appearance.listener_count(), 1);
        element.set_mode(ThemeMode::Auto);
        assert_eq!(appearance.listener_count(), 1);

        element.set_mode(ThemeMode::Light);
        assert_eq!(element.resolved(), ThemeName::Light);
        assert_eq!(appearance.listener_count(), 0);
    }

    #[test]
    fn observers_fire_on_change_only() {
        let appearance = MemorySystemAppearance::default();
        let element = ElementTheme::new(ThemeMode::Auto);
        element.connect(Rc::new(appearance.clone()));
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_in = seen.clone();
        element.subscribe(move |theme| seen_in.borrow_mut().push(*theme));

        element.set_mode(ThemeMode::Light);
        element.set_mode(ThemeMode::Dark);
        element.set_mode(ThemeMode::Dark);
        appearance.set(AppearanceQuery::PrefersDark, true);

        assert_eq!(*seen.borrow(), vec![ThemeName::Dark]);
    }

    #[test]
    fn dropping_last_handle_unsubscribes() {
        let appearance = MemorySystemAppearance::default();
        {
            let element = ElementTheme::new(ThemeMode::Auto);
            element.connect(Rc::new(appearance.clone()));
            assert_eq!(appearance.listener_count(), 1);
        }
        assert_eq!(appearance.listener_count(), 0);
    }
}
