//! Document-level theme resolution, application, persistence, and change notification.
//!
//! [`ThemeResolver`] is the single writer of the theme marker on its root scope. The marker is an
//! attribute (`data-theme="dark"`) plus a class (`rdg-theme-dark`); the user's explicit choice is
//! persisted as the bare theme token under one storage key, and its absence means "follow the
//! system".

use std::{
    collections::BTreeMap,
    rc::{Rc, Weak},
};

use leptos::logging;
use ridge_host::{
    AppearanceListenerId, AppearanceQuery, HostServices, PrefsStore, SystemAppearance, ThemeScope,
};
use ridge_tokens::{ThemeName, THEME_NAMES};
use serde::{Deserialize, Serialize};

use crate::observers::{ObserverId, Observers};

const THEME_PROPERTY_PREFIX: &str = "--rdg-";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Marker names, storage key, and defaults used by [`ThemeResolver`].
pub struct ThemeConfig {
    /// Preference key holding the explicit theme choice.
    pub storage_key: String,
    /// Attribute carrying the theme token.
    pub attribute: String,
    /// Class prefix; the applied class is `class_prefix + token`.
    pub class_prefix: String,
    /// Theme reported when the scope carries no recognizable marker.
    pub default_theme: ThemeName,
    /// Name of the change event announced on the scope.
    pub change_event: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: "rdg-theme".to_string(),
            attribute: "data-theme".to_string(),
            class_prefix: "rdg-theme-".to_string(),
            default_theme: ThemeName::Light,
            change_event: "rdg-theme-change".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Notification delivered to theme observers after a marker is applied.
pub struct ThemeChange {
    /// Applied theme token, exactly as written to the scope.
    pub theme: String,
    /// [`ThemeScope::scope_id`] of the scope that changed.
    pub scope: String,
}

struct ResolverInner {
    config: ThemeConfig,
    prefs: Rc<dyn PrefsStore>,
    root: Rc<dyn ThemeScope>,
    appearance: Rc<dyn SystemAppearance>,
    observers: Observers<ThemeChange>,
}

#[derive(Clone)]
/// Owner of the process-wide theme marker.
///
/// Clones share state. No method fails: scope and storage errors are logged and the operation
/// degrades to whatever part could be applied.
pub struct ThemeResolver {
    inner: Rc<ResolverInner>,
}

fn normalize_property(name: &str) -> String {
    if name.starts_with("--") {
        name.to_string()
    } else {
        format!("--{name}")
    }
}

impl ResolverInner {
    fn stored_raw(&self) -> Option<String> {
        match self.prefs.load_pref(&self.config.storage_key) {
            Ok(raw) => raw.filter(|raw| !raw.trim().is_empty()),
            Err(err) => {
                logging::warn!("theme preference load failed: {err}");
                None
            }
        }
    }

    fn system_theme(&self) -> ThemeName {
        if self.appearance.matches(AppearanceQuery::PrefersHighContrast) {
            ThemeName::HighContrast
        } else if self.appearance.matches(AppearanceQuery::PrefersDark) {
            ThemeName::Dark
        } else {
            self.config.default_theme
        }
    }

    fn apply(&self, scope: &dyn ThemeScope, theme: &str, persist: bool) {
        let config = &self.config;
        let mut failures = Vec::new();

        if let Some(previous) = scope.attribute(&config.attribute) {
            if let Err(err) = scope.remove_class(&format!("{}{}", config.class_prefix, previous)) {
                failures.push(err);
            }
        }
        for known in THEME_NAMES {
            if let Err(err) = scope.remove_class(&format!("{}{}", config.class_prefix, known)) {
                failures.push(err);
            }
        }
        if let Err(err) = scope.remove_attribute(&config.attribute) {
            failures.push(err);
        }

        if let Err(err) = scope.add_class(&format!("{}{theme}", config.class_prefix)) {
            failures.push(err);
        }
        if let Err(err) = scope.set_attribute(&config.attribute, theme) {
            failures.push(err);
        }
        for err in failures {
            logging::warn!("theme marker update failed: {err}");
        }

        if persist {
            if let Err(err) = self.prefs.save_pref(&config.storage_key, theme) {
                logging::warn!("persist theme failed: {err}");
            }
        }

        scope.announce_theme_change(&config.change_event, theme);
        self.observers.notify(&ThemeChange {
            theme: theme.to_string(),
            scope: scope.scope_id(),
        });
    }

    fn read(&self, scope: &dyn ThemeScope) -> ThemeName {
        if let Some(theme) = scope
            .attribute(&self.config.attribute)
            .as_deref()
            .and_then(ThemeName::parse)
        {
            return theme;
        }
        THEME_NAMES
            .into_iter()
            .find(|theme| scope.has_class(&format!("{}{}", self.config.class_prefix, theme)))
            .unwrap_or(self.config.default_theme)
    }

    fn stored_theme(&self) -> Option<ThemeName> {
        self.stored_raw().as_deref().and_then(ThemeName::parse)
    }

    fn follow_system(&self) {
        if self.stored_theme().is_some() {
            return;
        }
        let theme = self.system_theme();
        self.apply(self.root.as_ref(), theme.as_str(), false);
    }
}

impl ThemeResolver {
    /// Binds a resolver to the host's root scope, preference store, and appearance queries.
    pub fn new(services: &HostServices, config: ThemeConfig) -> Self {
        Self {
            inner: Rc::new(ResolverInner {
                config,
                prefs: services.prefs.clone(),
                root: services.root_scope.clone(),
                appearance: services.appearance.clone(),
                observers: Observers::default(),
            }),
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &ThemeConfig {
        &self.inner.config
    }

    /// Applies and persists a theme on the root scope.
    ///
    /// Any token is accepted; unrecognized tokens are applied verbatim (and read back as the
    /// default theme) with a warning.
    pub fn set_theme(&self, theme: &str) {
        self.set_theme_in(self.inner.root.as_ref(), theme);
    }

    /// Applies and persists a theme on an explicit scope. Blank names are ignored.
    pub fn set_theme_in(&self, scope: &dyn ThemeScope, theme: &str) {
        let theme = theme.trim();
        if theme.is_empty() {
            logging::warn!("ignoring blank theme name");
            return;
        }
        if ThemeName::parse(theme).is_none() {
            logging::warn!("applying unrecognized theme `{theme}`");
        }
        self.inner.apply(scope, theme, true);
    }

    /// Typed form of [`ThemeResolver::set_theme`].
    pub fn set_theme_name(&self, theme: ThemeName) {
        self.inner.apply(self.inner.root.as_ref(), theme.as_str(), true);
    }

    /// Theme currently marked on the root scope, or the default.
    pub fn get_theme(&self) -> ThemeName {
        self.inner.read(self.inner.root.as_ref())
    }

    /// Theme currently marked on `scope`, or the default.
    pub fn get_theme_in(&self, scope: &dyn ThemeScope) -> ThemeName {
        self.inner.read(scope)
    }

    /// Persisted explicit choice, when it names a known theme.
    pub fn stored_preference(&self) -> Option<ThemeName> {
        self.inner.stored_theme()
    }

    /// Theme implied by system preferences alone (high contrast outranks dark).
    pub fn system_theme(&self) -> ThemeName {
        self.inner.system_theme()
    }

    /// Startup precedence: persisted choice, system high contrast, system dark, default.
    pub fn resolve_initial_theme(&self) -> ThemeName {
        self.stored_preference()
            .unwrap_or_else(|| self.inner.system_theme())
    }

    /// Resolves and applies the startup theme.
    ///
    /// A theme derived from system preferences is applied without being persisted, so system
    /// tracking stays active until the user makes an explicit choice.
    pub fn initialize(&self) -> ThemeName {
        let theme = self.resolve_initial_theme();
        let explicit = self.stored_preference().is_some();
        self.inner
            .apply(self.inner.root.as_ref(), theme.as_str(), explicit);
        theme
    }

    /// Re-applies the system theme whenever an appearance preference changes and no explicit
    /// choice is persisted. Dropping or cancelling the returned handle unsubscribes.
    pub fn watch_system_preference(&self) -> ThemeWatch {
        let mut listener_ids = Vec::new();
        for query in [
            AppearanceQuery::PrefersDark,
            AppearanceQuery::PrefersHighContrast,
        ] {
            let weak: Weak<ResolverInner> = Rc::downgrade(&self.inner);
            let id = self.inner.appearance.add_listener(
                query,
                Rc::new(move |_: bool| {
                    if let Some(inner) = weak.upgrade() {
                        inner.follow_system();
                    }
                }),
            );
            listener_ids.extend(id);
        }
        ThemeWatch {
            appearance: self.inner.appearance.clone(),
            listener_ids,
        }
    }

    /// Registers a change observer; it is removed when the returned subscription drops.
    pub fn subscribe(&self, observer: impl Fn(&ThemeChange) + 'static) -> ThemeSubscription {
        ThemeSubscription {
            id: Some(self.inner.observers.add(observer)),
            resolver: Rc::downgrade(&self.inner),
        }
    }

    /// Switches light to dark and anything else to light.
    pub fn toggle_theme(&self) -> ThemeName {
        let next = if self.get_theme() == ThemeName::Light {
            ThemeName::Dark
        } else {
            ThemeName::Light
        };
        self.set_theme_name(next);
        next
    }

    /// Advances to the theme after the current one in `themes` (all themes when `None` or empty).
    pub fn cycle_theme(&self, themes: Option<&[ThemeName]>) -> ThemeName {
        let themes = match themes {
            Some(themes) if !themes.is_empty() => themes,
            _ => ThemeName::all(),
        };
        let current = self.get_theme();
        let next_index = themes
            .iter()
            .position(|theme| *theme == current)
            .map_or(0, |index| (index + 1) % themes.len());
        let next = themes[next_index];
        self.set_theme_name(next);
        next
    }

    /// Every theme name.
    pub fn available_themes(&self) -> &'static [ThemeName] {
        ThemeName::all()
    }

    /// Forgets the explicit choice and re-applies the system theme.
    pub fn clear_preference(&self) -> ThemeName {
        if let Err(err) = self.inner.prefs.delete_pref(&self.inner.config.storage_key) {
            logging::warn!("clear theme preference failed: {err}");
        }
        let theme = self.inner.system_theme();
        self.inner
            .apply(self.inner.root.as_ref(), theme.as_str(), false);
        theme
    }

    /// Effective value of a custom property on the root scope (`--` prefix optional).
    pub fn theme_property(&self, name: &str) -> Option<String> {
        self.inner.root.style_property(&normalize_property(name))
    }

    /// Sets an inline custom property on the root scope (`--` prefix optional).
    pub fn set_theme_property(&self, name: &str, value: &str) {
        let name = normalize_property(name);
        if let Err(err) = self.inner.root.set_style_property(&name, value) {
            logging::warn!("set theme property {name} failed: {err}");
        }
    }

    /// Snapshot of every `--rdg-` custom property on the root scope.
    pub fn export_theme(&self) -> BTreeMap<String, String> {
        self.inner
            .root
            .style_property_names()
            .into_iter()
            .filter(|name| name.starts_with(THEME_PROPERTY_PREFIX))
            .filter_map(|name| {
                let value = self.inner.root.style_property(&name)?;
                Some((name, value))
            })
            .collect()
    }

    /// Applies a property map produced by [`ThemeResolver::export_theme`].
    pub fn import_theme<I, K, V>(&self, properties: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (name, value) in properties {
            self.set_theme_property(name.as_ref(), value.as_ref());
        }
    }
}

/// Live system-preference subscription created by [`ThemeResolver::watch_system_preference`].
pub struct ThemeWatch {
    appearance: Rc<dyn SystemAppearance>,
    listener_ids: Vec<AppearanceListenerId>,
}

impl ThemeWatch {
    /// Whether any listener is still registered.
    pub fn is_active(&self) -> bool {
        !self.listener_ids.is_empty()
    }

    /// Unregisters every listener. Safe to call repeatedly.
    pub fn cancel(&mut self) {
        for id in self.listener_ids.drain(..) {
            self.appearance.remove_listener(id);
        }
    }
}

impl Drop for ThemeWatch {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Observer registration created by [`ThemeResolver::subscribe`].
pub struct ThemeSubscription {
    id: Option<ObserverId>,
    resolver: Weak<ResolverInner>,
}

impl ThemeSubscription {
    /// Observer id.
    pub fn id(&self) -> Option<ObserverId> {
        self.id
    }

    /// Keeps the observer registered for the resolver's whole lifetime.
    pub fn detach(mut self) {
        self.id = None;
    }
}

impl Drop for ThemeSubscription {
    fn drop(&mut self) {
        if let (Some(id), Some(inner)) = (self.id.take(), self.resolver.upgrade()) {
            inner.observers.remove(id);
        }
    }
}
