use leptos::ev::MouseEvent;
use leptos::*;
use ridge_runtime::{ButtonClick, ButtonKind, ButtonState, ButtonVariant, ControlSize};
use ridge_tokens::ThemeMode;

use crate::{
    markup::{bool_token, merge_layout_class},
    use_element_theme,
};

#[component]
/// Action button; renders an anchor when `href` is set.
///
/// Clicks while disabled or loading are swallowed and never reach `on_click`.
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ControlSize,
    #[prop(optional)] kind: ButtonKind,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] href: Option<String>,
    #[prop(optional, into)] target: Option<String>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(optional, into)] theme: MaybeSignal<ThemeMode>,
    #[prop(optional)] on_click: Option<Callback<ButtonClick<MouseEvent>>>,
    children: Children,
) -> impl IntoView {
    let resolved_theme = use_element_theme(theme);
    let has_href = href.is_some();
    let state = store_value(ButtonState {
        variant,
        size,
        kind,
        href,
        target,
        ..ButtonState::default()
    });
    let current = move || {
        let mut current = state.get_value();
        current.disabled = disabled.get();
        current.loading = loading.get();
        current
    };

    let handle_click = move |ev: MouseEvent| {
        let current = current();
        if current.is_inert() {
            ev.prevent_default();
            ev.stop_propagation();
            return;
        }
        if let Some(click) = current.press(ev) {
            if let Some(on_click) = on_click.as_ref() {
                on_click.call(click);
            }
        }
    };

    let class = merge_layout_class("ui-button", layout_class);
    let spinner = move || {
        loading
            .get()
            .then(|| view! { <span class="ui-button-spinner" aria-hidden="true"></span> })
    };
    let content = view! {
        {spinner}
        <span class="ui-button-label">{children()}</span>
    };

    if has_href {
        view! {
            <a
                class=class
                id=id
                href=move || current().renders_link().then(|| current().href).flatten()
                target=move || state.with_value(|state| state.target.clone())
                role="button"
                aria-label=move || aria_label.get()
                aria-disabled=move || bool_token(disabled.get())
                aria-busy=move || bool_token(loading.get())
                data-ui-primitive="true"
                data-ui-kind="button"
                data-ui-variant=variant.token()
                data-ui-size=size.token()
                data-ui-state=move || current().state_token()
                data-theme=move || resolved_theme.get().as_str()
                on:click=handle_click
            >
                {content}
            </a>
        }
        .into_view()
    } else {
        view! {
            <button
                type=kind.token()
                class=class
                id=id
                aria-label=move || aria_label.get()
                aria-busy=move || bool_token(loading.get())
                disabled=move || current().is_inert()
                data-ui-primitive="true"
                data-ui-kind="button"
                data-ui-variant=variant.token()
                data-ui-size=size.token()
                data-ui-state=move || current().state_token()
                data-ui-disabled=move || bool_token(disabled.get())
                data-theme=move || resolved_theme.get().as_str()
                on:click=handle_click
            >
                {content}
            </button>
        }
        .into_view()
    }
}
