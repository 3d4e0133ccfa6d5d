//! Document theme provider and per-element theme binding hooks.

use std::rc::Rc;

use leptos::*;
use ridge_host::{HostServices, SystemAppearance};
use ridge_runtime::{ElementTheme, ThemeChange, ThemeConfig, ThemeResolver};
use ridge_tokens::{ThemeMode, ThemeName};

#[derive(Clone, Copy)]
/// Reactive handle to the document theme, provided by [`ThemeProvider`].
pub struct ThemeContext {
    /// Theme currently marked on the document root.
    pub theme: ReadSignal<ThemeName>,
    resolver: StoredValue<ThemeResolver>,
    appearance: StoredValue<Rc<dyn SystemAppearance>>,
}

impl ThemeContext {
    /// Underlying resolver, for operations without a shortcut here.
    pub fn resolver(&self) -> ThemeResolver {
        self.resolver.get_value()
    }

    /// Applies and persists `theme`.
    pub fn set_theme(&self, theme: ThemeName) {
        self.resolver.with_value(|resolver| resolver.set_theme_name(theme));
    }

    /// Light/dark toggle.
    pub fn toggle(&self) -> ThemeName {
        self.resolver.with_value(ThemeResolver::toggle_theme)
    }

    /// Advances through every theme.
    pub fn cycle(&self) -> ThemeName {
        self.resolver.with_value(|resolver| resolver.cycle_theme(None))
    }

    /// Forgets the explicit choice and follows the system again.
    pub fn clear_preference(&self) -> ThemeName {
        self.resolver.with_value(ThemeResolver::clear_preference)
    }

    fn appearance(&self) -> Rc<dyn SystemAppearance> {
        self.appearance.get_value()
    }
}

/// Theme a document-root change maps to; changes on other scopes return `None`.
fn root_theme_change(
    change: &ThemeChange,
    root_id: &str,
    fallback: ThemeName,
) -> Option<ThemeName> {
    (change.scope == root_id).then(|| ThemeName::parse(&change.theme).unwrap_or(fallback))
}

#[component]
/// Resolves the startup theme, tracks system preference changes, and provides [`ThemeContext`].
pub fn ThemeProvider(
    /// Marker and storage names; defaults to [`ThemeConfig::default`].
    #[prop(optional)]
    config: Option<ThemeConfig>,
    /// Host services; defaults to the browser adapters.
    #[prop(optional)]
    services: Option<HostServices>,
    children: Children,
) -> impl IntoView {
    let services = services.unwrap_or_else(ridge_host_web::build_host_services);
    let config = config.unwrap_or_default();
    let default_theme = config.default_theme;
    let resolver = ThemeResolver::new(&services, config);

    let (theme, set_theme) = create_signal(resolver.initialize());
    let root_id = services.root_scope.scope_id();
    let subscription = resolver.subscribe(move |change| {
        if let Some(theme) = root_theme_change(change, &root_id, default_theme) {
            set_theme.set(theme);
        }
    });
    let watch = resolver.watch_system_preference();
    let guards = store_value(Some((subscription, watch)));
    on_cleanup(move || {
        if guards.try_update_value(Option::take).is_none() {
            logging::warn!("theme provider guards already disposed");
        }
    });

    provide_context(ThemeContext {
        theme,
        resolver: store_value(resolver),
        appearance: store_value(services.appearance.clone()),
    });

    children().into_view()
}

/// Returns the current [`ThemeContext`].
///
/// # Panics
///
/// Panics if called outside [`ThemeProvider`].
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not provided")
}

/// Binds a widget's `theme` mode for the lifetime of the calling component.
///
/// `auto` follows the system dark preference until the component is cleaned up.
pub fn use_element_theme(mode: MaybeSignal<ThemeMode>) -> Signal<ThemeName> {
    let appearance = use_context::<ThemeContext>()
        .map(|context| context.appearance())
        .unwrap_or_else(|| ridge_host_web::build_host_services().appearance);

    let element = ElementTheme::new(mode.get_untracked());
    element.connect(appearance);
    let (resolved, set_resolved) = create_signal(element.resolved());
    element.subscribe(move |theme| set_resolved.set(*theme));

    let element = store_value(element);
    create_effect(move |_| {
        let mode = mode.get();
        element.with_value(|element| element.set_mode(mode));
    });
    on_cleanup(move || {
        if element.try_with_value(ElementTheme::disconnect).is_none() {
            logging::warn!("element theme already disposed");
        }
    });

    resolved.into()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn change(theme: &str, scope: &str) -> ThemeChange {
        ThemeChange {
            theme: theme.to_string(),
            scope: scope.to_string(),
        }
    }

    #[test]
    fn provider_tracks_only_the_root_scope() {
        let root = "document";
        assert_eq!(
            root_theme_change(&change("dark", root), root, ThemeName::Light),
            Some(ThemeName::Dark)
        );
        assert_eq!(
            root_theme_change(&change("dark", "panel-7"), root, ThemeName::Light),
            None
        );
    }

    #[test]
    fn unknown_root_theme_falls_back_to_default() {
        assert_eq!(
            root_theme_change(&change("mystery", "document"), "document", ThemeName::Ocean),
            Some(ThemeName::Ocean)
        );
    }
}
