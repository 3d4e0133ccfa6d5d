use leptos::ev::FocusEvent;
use leptos::*;
use ridge_runtime::{
    classify_icon, ControlSize, IconContent, InputBlur, InputChange, InputFocus, InputState,
    InputType, InputVariant,
};
use ridge_tokens::ThemeMode;

use crate::{
    markup::{bool_token, merge_layout_class},
    use_element_theme,
};

fn icon_view(icon: Option<String>, slot: &'static str) -> Option<View> {
    let icon = icon.filter(|icon| !icon.is_empty())?;
    Some(match classify_icon(&icon) {
        IconContent::Glyph(glyph) => {
            let glyph = glyph.to_string();
            view! { <span class="ui-field-icon" data-ui-slot=slot aria-hidden="true">{glyph}</span> }
                .into_view()
        }
        IconContent::Markup(markup) => {
            let markup = markup.to_string();
            view! { <span class="ui-field-icon" data-ui-slot=slot aria-hidden="true" inner_html=markup></span> }
                .into_view()
        }
    })
}

#[component]
/// Labelled text input with helper/error line, optional icons, and a password reveal toggle.
///
/// `on_change` fires on every edit, `on_focus`/`on_blur` on focus transitions. Disabled fields
/// emit nothing; read-only fields emit focus and blur only.
pub fn TextField(
    #[prop(optional)] variant: InputVariant,
    #[prop(optional)] size: ControlSize,
    #[prop(optional)] input_type: InputType,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] readonly: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] error_message: MaybeSignal<Option<String>>,
    #[prop(optional, into)] helper_text: Option<String>,
    #[prop(optional, into)] leading_icon: Option<String>,
    #[prop(optional, into)] trailing_icon: Option<String>,
    #[prop(optional, into)] theme: MaybeSignal<ThemeMode>,
    #[prop(optional)] on_change: Option<Callback<InputChange<web_sys::Event>>>,
    #[prop(optional)] on_focus: Option<Callback<InputFocus<FocusEvent>>>,
    #[prop(optional)] on_blur: Option<Callback<InputBlur<FocusEvent>>>,
) -> impl IntoView {
    let resolved_theme = use_element_theme(theme);
    let state = create_rw_signal(InputState {
        variant,
        size,
        input_type,
        value: value.get_untracked(),
        label,
        placeholder,
        name,
        id,
        required,
        readonly: readonly.get_untracked(),
        disabled: disabled.get_untracked(),
        error_message: error_message.get_untracked(),
        helper_text,
        leading_icon,
        trailing_icon,
        ..InputState::default()
    });

    create_effect(move |_| {
        let value = value.get();
        let readonly = readonly.get();
        let disabled = disabled.get();
        let error_message = error_message.get();
        state.update(|state| {
            state.value = value;
            state.readonly = readonly;
            state.disabled = disabled;
            state.error_message = error_message;
        });
    });

    let handle_input = move |ev: web_sys::Event| {
        let next = event_target_value(&ev);
        let mut change = None;
        state.update(|state| change = state.edit(next, ev));
        if let (Some(change), Some(on_change)) = (change, on_change.as_ref()) {
            on_change.call(change);
        }
    };
    let handle_focus = move |ev: FocusEvent| {
        let mut focus = None;
        state.update(|state| focus = state.focus(ev));
        if let (Some(focus), Some(on_focus)) = (focus, on_focus.as_ref()) {
            on_focus.call(focus);
        }
    };
    let handle_blur = move |ev: FocusEvent| {
        let mut blur = None;
        state.update(|state| blur = state.blur(ev));
        if let (Some(blur), Some(on_blur)) = (blur, on_blur.as_ref()) {
            on_blur.call(blur);
        }
    };

    let snapshot = state.get_untracked();
    let control_id = snapshot.control_id().map(str::to_string);
    let helper_id = control_id.as_ref().map(|id| format!("{id}-helper"));
    let described_by = helper_id.clone();
    let is_password = snapshot.input_type == InputType::Password;

    let label_view = snapshot.label.clone().map(|label| {
        view! {
            <label class="ui-field-label" for=control_id.clone()>
                {label}
                {required.then(|| view! { <span class="ui-field-required" aria-hidden="true">" *"</span> })}
            </label>
        }
    });

    let password_toggle = is_password.then(|| {
        view! {
            <button
                type="button"
                class="ui-field-reveal"
                tabindex="-1"
                aria-label=move || {
                    if state.with(|state| state.show_password) {
                        "Hide password"
                    } else {
                        "Show password"
                    }
                }
                aria-pressed=move || bool_token(state.with(|state| state.show_password))
                disabled=move || state.with(|state| state.disabled)
                on:click=move |_| {
                    state.update(|state| {
                        state.toggle_password_visibility();
                    });
                }
            >
                {move || if state.with(|state| state.show_password) { "🙈" } else { "👁" }}
            </button>
        }
    });

    view! {
        <div
            class=merge_layout_class("ui-field-group", layout_class)
            data-ui-primitive="true"
            data-ui-kind="text-field"
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-state=move || state.with(InputState::state_token)
            data-theme=move || resolved_theme.get().as_str()
        >
            {label_view}
            <div class="ui-field-control">
                {icon_view(snapshot.leading_icon.clone(), "leading")}
                <input
                    class="ui-field"
                    id=control_id
                    name=snapshot.name.clone()
                    placeholder=snapshot.placeholder.clone()
                    type=move || state.with(|state| state.effective_type().token())
                    prop:value=move || state.with(|state| state.value.clone())
                    required=required
                    readonly=move || state.with(|state| state.readonly)
                    disabled=move || state.with(|state| state.disabled)
                    aria-invalid=move || bool_token(state.with(InputState::has_error))
                    aria-describedby=described_by
                    data-ui-disabled=move || bool_token(state.with(|state| state.disabled))
                    on:input=handle_input
                    on:focus=handle_focus
                    on:blur=handle_blur
                />
                {password_toggle}
                {icon_view(snapshot.trailing_icon.clone(), "trailing")}
            </div>
            {move || {
                state.with(|state| state.helper_line().map(str::to_string)).map(|line| {
                    view! {
                        <p
                            class="ui-field-helper"
                            id=helper_id.clone()
                            data-ui-state=move || {
                                if state.with(InputState::has_error) { "error" } else { "idle" }
                            }
                        >
                            {line}
                        </p>
                    }
                })
            }}
        </div>
    }
}
