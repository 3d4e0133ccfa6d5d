use std::time::Duration;

use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::leptos_dom::helpers::WindowListenerHandle;
use leptos::*;
use ridge_runtime::{
    select_view, step_select, ControlSize, NavKey, OptionRowView, OutsideListenerSlot,
    SelectAction, SelectChange, SelectConfig, SelectEffect, SelectOption, SelectState,
    SelectVariant,
};
use ridge_tokens::ThemeMode;
use wasm_bindgen::JsCast;

use crate::{
    markup::{bool_token, merge_layout_class},
    use_element_theme,
};

fn option_state_token(row: &OptionRowView) -> &'static str {
    if row.disabled {
        "disabled"
    } else if row.highlighted {
        "highlighted"
    } else if row.aria_selected {
        "selected"
    } else {
        "idle"
    }
}

fn listbox_dom_id(instance: usize) -> String {
    format!("ui-dropdown-{instance}-listbox")
}

fn event_hits(root: &web_sys::Element, ev: &MouseEvent) -> bool {
    ev.target()
        .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
        .is_some_and(|node| root.contains(Some(&node)))
}

#[component]
/// Selectable list with optional search, multi-value selection, and clear action.
///
/// `on_change` fires once per committed selection change with everything needed to derive the new
/// selection. Host-supplied props are re-applied whenever their signals change.
pub fn Dropdown(
    #[prop(into)] options: MaybeSignal<Vec<SelectOption>>,
    #[prop(optional, into)] value: MaybeSignal<Option<String>>,
    #[prop(optional, into)] values: MaybeSignal<Vec<String>>,
    #[prop(optional, into)] multiselect: MaybeSignal<bool>,
    #[prop(optional, into)] searchable: MaybeSignal<bool>,
    #[prop(optional, into)] clearable: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] search_placeholder: Option<String>,
    #[prop(optional)] variant: SelectVariant,
    #[prop(optional)] size: ControlSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] theme: MaybeSignal<ThemeMode>,
    #[prop(optional)] on_change: Option<Callback<SelectChange>>,
) -> impl IntoView {
    let resolved_theme = use_element_theme(theme);
    let defaults = SelectConfig::default();
    let placeholder = placeholder.unwrap_or(defaults.placeholder);
    let search_placeholder = search_placeholder.unwrap_or(defaults.search_placeholder);
    let config = move || SelectConfig {
        multiselect: multiselect.get(),
        searchable: searchable.get(),
        search_placeholder: search_placeholder.clone(),
        clearable: clearable.get(),
        disabled: disabled.get(),
        variant,
        size,
        placeholder: placeholder.clone(),
    };

    let initial = SelectState {
        value: value.get_untracked(),
        values: values.get_untracked(),
        ..SelectState::new(options.get_untracked(), untrack(&config))
    };
    let state = create_rw_signal(initial);
    let effects = create_rw_signal(Vec::<SelectEffect>::new());
    let outside_listener = store_value(OutsideListenerSlot::<WindowListenerHandle>::default());

    let root_ref = create_node_ref::<html::Div>();
    let trigger_ref = create_node_ref::<html::Button>();
    let search_ref = create_node_ref::<html::Input>();

    let dispatch = Callback::new(move |action: SelectAction| {
        let stepped = state.with_untracked(|current| step_select(current, action));
        let Some((next, new_effects)) = stepped else {
            return;
        };
        state.set(next);
        if !new_effects.is_empty() {
            let mut queue = effects.get_untracked();
            queue.extend(new_effects);
            effects.set(queue);
        }
    });

    let disarm = move || match outside_listener.try_update_value(OutsideListenerSlot::disarm) {
        Some(Some(handle)) => handle.remove(),
        Some(None) => {}
        None => logging::warn!("dropdown listener slot disposed before disarm"),
    };

    create_effect(move |_| {
        let queued = effects.get();
        if queued.is_empty() {
            return;
        }
        effects.set(Vec::new());

        for effect in queued {
            match effect {
                SelectEffect::FocusSearchField => {
                    request_animation_frame(move || {
                        if let Some(input) = search_ref.get_untracked() {
                            if let Err(err) = input.focus() {
                                logging::warn!("focus dropdown search field failed: {err:?}");
                            }
                        }
                    });
                }
                SelectEffect::ArmOutsideListener { generation } => {
                    set_timeout(
                        move || {
                            let register = || {
                                window_event_listener(ev::click, move |ev| {
                                    let inside = root_ref
                                        .get_untracked()
                                        .is_some_and(|root| event_hits(&root, &ev));
                                    dispatch.call(SelectAction::OutsideInteraction { inside });
                                })
                            };
                            let armed = outside_listener.try_update_value(|slot| {
                                state.try_with_untracked(|current| {
                                    slot.arm(current, generation, register)
                                })
                            });
                            if armed.flatten().is_none() {
                                logging::warn!("dropdown unmounted before listener arm");
                            }
                        },
                        Duration::ZERO,
                    );
                }
                SelectEffect::DisarmOutsideListener => disarm(),
                SelectEffect::FocusTrigger => {
                    if let Some(trigger) = trigger_ref.get_untracked() {
                        if let Err(err) = trigger.focus() {
                            logging::warn!("focus dropdown trigger failed: {err:?}");
                        }
                    }
                }
                SelectEffect::EmitChange(change) => {
                    if let Some(on_change) = on_change.as_ref() {
                        on_change.call(change);
                    }
                }
            }
        }
    });

    create_effect(move |previous: Option<()>| {
        let options = options.get();
        if previous.is_some() {
            dispatch.call(SelectAction::SetOptions(options));
        }
    });
    create_effect(move |previous: Option<()>| {
        let value = value.get();
        if previous.is_some() {
            dispatch.call(SelectAction::SetValue(value));
        }
    });
    create_effect(move |previous: Option<()>| {
        let values = values.get();
        if previous.is_some() {
            dispatch.call(SelectAction::SetValues(values));
        }
    });
    create_effect(move |previous: Option<()>| {
        let config = config();
        if previous.is_some() {
            dispatch.call(SelectAction::SetConfig(config));
        }
    });

    on_cleanup(disarm);

    let view_model = create_memo(move |_| state.with(select_view));
    let listbox_id = listbox_dom_id(next_instance());
    let listbox_controls = listbox_id.clone();

    let on_trigger_click = move |ev: MouseEvent| {
        ev.prevent_default();
        dispatch.call(SelectAction::TriggerClick);
    };
    let on_trigger_keydown = move |ev: KeyboardEvent| {
        if let Some(key) = NavKey::from_key(&ev.key()) {
            ev.prevent_default();
            dispatch.call(SelectAction::TriggerKey(key));
        }
    };
    let on_clear = move |ev: MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        dispatch.call(SelectAction::Clear);
    };
    let on_search_input = move |ev: web_sys::Event| {
        dispatch.call(SelectAction::SetSearchTerm(event_target_value(&ev)));
    };
    let on_search_keydown = move |ev: KeyboardEvent| {
        if let Some(key) = NavKey::from_key(&ev.key()) {
            if key != NavKey::Space {
                ev.prevent_default();
            }
            dispatch.call(SelectAction::SearchKey(key));
        }
    };

    let rows = move || {
        let view = view_model.get();
        if let Some(message) = view.empty_message {
            return view! { <div class="ui-dropdown-empty" role="presentation">{message}</div> }
                .into_view();
        }
        let multiselect = view.multiselect;
        view.rows
            .into_iter()
            .map(|row| {
                let value = row.value.clone();
                let disabled = row.disabled;
                let state_token = option_state_token(&row);
                view! {
                    <button
                        type="button"
                        class="ui-dropdown-option"
                        role="option"
                        tabindex="-1"
                        disabled=disabled
                        aria-selected=bool_token(row.aria_selected)
                        data-ui-state=state_token
                        data-ui-selected=bool_token(row.selected)
                        data-ui-highlighted=bool_token(row.highlighted)
                        on:click=move |ev: MouseEvent| {
                            ev.stop_propagation();
                            if !disabled {
                                dispatch.call(SelectAction::CommitValue(value.clone()));
                            }
                        }
                    >
                        {multiselect.then(|| {
                            view! {
                                <span
                                    class="ui-dropdown-checkbox"
                                    aria-hidden="true"
                                    data-ui-checked=bool_token(row.checkbox.unwrap_or(false))
                                >
                                    {row.checkbox.unwrap_or(false).then_some("✓")}
                                </span>
                            }
                        })}
                        <span class="ui-dropdown-option-label">{row.label}</span>
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <div
            class=merge_layout_class("ui-dropdown", layout_class)
            node_ref=root_ref
            data-ui-primitive="true"
            data-ui-kind="dropdown"
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-state=move || {
                let view = view_model.get();
                if view.disabled {
                    "disabled"
                } else if view.is_open {
                    "open"
                } else {
                    "closed"
                }
            }
            data-theme=move || resolved_theme.get().as_str()
        >
            <div class="ui-dropdown-control">
                <button
                    type="button"
                    class="ui-dropdown-trigger"
                    node_ref=trigger_ref
                    disabled=move || view_model.with(|view| view.disabled)
                    aria-haspopup="listbox"
                    aria-expanded=move || bool_token(view_model.with(|view| view.is_open))
                    aria-controls=listbox_controls
                    aria-label=move || view_model.with(|view| view.aria_label.clone())
                    on:click=on_trigger_click
                    on:keydown=on_trigger_keydown
                >
                    <span
                        class="ui-dropdown-value"
                        data-ui-placeholder=move || {
                            bool_token(view_model.with(|view| view.is_placeholder))
                        }
                    >
                        {move || view_model.with(|view| view.trigger_label.clone())}
                    </span>
                    {move || {
                        view_model
                            .with(|view| view.badge)
                            .map(|count| view! { <span class="ui-dropdown-count">{count}</span> })
                    }}
                    <span class="ui-dropdown-chevron" aria-hidden="true"></span>
                </button>
                {move || {
                    view_model.with(|view| view.show_clear).then(|| {
                        view! {
                            <button
                                type="button"
                                class="ui-dropdown-clear"
                                tabindex="-1"
                                aria-label="Clear selection"
                                on:click=on_clear
                            >
                                "✕"
                            </button>
                        }
                    })
                }}
            </div>
            <Show when=move || view_model.with(|view| view.is_open)>
                <div class="ui-dropdown-menu" id=listbox_id.clone() role="listbox">
                    {move || {
                        view_model.with(|view| view.search.clone()).map(|search| {
                            view! {
                                <div class="ui-dropdown-search">
                                    <input
                                        class="ui-dropdown-search-input"
                                        type="text"
                                        node_ref=search_ref
                                        placeholder=search.placeholder
                                        prop:value=search.term
                                        on:input=on_search_input
                                        on:keydown=on_search_keydown
                                    />
                                </div>
                            }
                        })
                    }}
                    {rows}
                </div>
            </Show>
        </div>
    }
}

fn next_instance() -> usize {
    use std::sync::atomic::{AtomicUsize, Ordering};

    static NEXT: AtomicUsize = AtomicUsize::new(1);
    NEXT.fetch_add(1, Ordering::Relaxed)
}
