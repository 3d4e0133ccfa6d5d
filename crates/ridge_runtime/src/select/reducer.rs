use thiserror::Error;

use super::model::{SelectConfig, SelectOption, SelectState};
use super::SelectChange;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Keys the list reacts to.
pub enum NavKey {
    /// Enter.
    Enter,
    /// Space bar.
    Space,
    /// Arrow down.
    ArrowDown,
    /// Arrow up.
    ArrowUp,
    /// Escape.
    Escape,
}

impl NavKey {
    /// Maps a DOM `KeyboardEvent.key` value; other keys yield `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Enter" => Some(Self::Enter),
            " " | "Spacebar" => Some(Self::Space),
            "ArrowDown" | "Down" => Some(Self::ArrowDown),
            "ArrowUp" | "Up" => Some(Self::ArrowUp),
            "Escape" | "Esc" => Some(Self::Escape),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Highlight movement.
pub enum Direction {
    /// Towards the end of the list.
    Next,
    /// Towards the start of the list.
    Previous,
}

#[derive(Debug, Clone, PartialEq)]
/// Inputs to [`reduce_select`].
pub enum SelectAction {
    /// Pointer activation of the trigger.
    TriggerClick,
    /// Key pressed while the trigger has focus.
    TriggerKey(NavKey),
    /// Key pressed while the search field has focus.
    SearchKey(NavKey),
    /// Opens the list.
    Open,
    /// Closes the list and returns focus to the trigger.
    Close,
    /// Moves the highlight within the enabled filtered options.
    Navigate(Direction),
    /// Replaces the search text.
    SetSearchTerm(String),
    /// Commits the highlighted option.
    CommitHighlighted,
    /// Commits the filtered option with this value (option click). Ignored while closed.
    CommitValue(String),
    /// Clears the selection without touching visibility.
    Clear,
    /// Pointer interaction anywhere in the document while the outside listener is armed.
    OutsideInteraction {
        /// Whether the interaction hit the component's own bounds.
        inside: bool,
    },
    /// Replaces the option list.
    SetOptions(Vec<SelectOption>),
    /// Replaces the single-mode selection without notifying.
    SetValue(Option<String>),
    /// Replaces the multi-mode selection without notifying.
    SetValues(Vec<String>),
    /// Replaces mode flags.
    SetConfig(SelectConfig),
    /// The owning widget is going away.
    Teardown,
}

#[derive(Debug, Clone, PartialEq)]
/// Host work requested by a transition.
pub enum SelectEffect {
    /// Focus the search field after the next render pass.
    FocusSearchField,
    /// Register the outside-interaction listener on the next tick, if `generation` is still the
    /// current open.
    ArmOutsideListener {
        /// Open generation the registration belongs to.
        generation: u64,
    },
    /// Remove the outside-interaction listener if registered.
    DisarmOutsideListener,
    /// Return keyboard focus to the trigger.
    FocusTrigger,
    /// Notify observers of a committed selection change.
    EmitChange(SelectChange),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for actions that reference list entries that do not exist.
pub enum SelectError {
    /// The committed value is not among the filtered options.
    #[error("option `{0}` is not in the visible list")]
    OptionNotFound(String),
    /// The highlight points past the filtered options.
    #[error("highlighted index {index} is out of range for {len} visible options")]
    HighlightOutOfRange {
        /// Offending index.
        index: usize,
        /// Filtered option count.
        len: usize,
    },
}

/// Applies a [`SelectAction`] and collects the resulting host effects.
///
/// Effects are ordered: visibility effects first, then [`SelectEffect::EmitChange`].
///
/// # Errors
///
/// Returns [`SelectError::OptionNotFound`] when [`SelectAction::CommitValue`] names a value outside
/// the filtered list, and [`SelectError::HighlightOutOfRange`] when the stored highlight is stale.
pub fn reduce_select(
    state: &mut SelectState,
    action: SelectAction,
) -> Result<Vec<SelectEffect>, SelectError> {
    let mut effects = Vec::new();
    match action {
        SelectAction::TriggerClick => {
            if !state.config.disabled {
                toggle(state, &mut effects);
            }
        }
        SelectAction::TriggerKey(key) => {
            if state.config.disabled {
                return Ok(effects);
            }
            let is_open = state.interaction.is_open;
            match key {
                NavKey::Enter | NavKey::Space => toggle(state, &mut effects),
                NavKey::ArrowDown if !is_open => open(state, &mut effects),
                NavKey::ArrowDown => navigate(state, Direction::Next),
                NavKey::ArrowUp if is_open => navigate(state, Direction::Previous),
                NavKey::Escape if is_open => close(state, &mut effects),
                NavKey::ArrowUp | NavKey::Escape => {}
            }
        }
        SelectAction::SearchKey(key) => {
            if !state.interaction.is_open {
                return Ok(effects);
            }
            match key {
                NavKey::ArrowDown => navigate(state, Direction::Next),
                NavKey::ArrowUp => navigate(state, Direction::Previous),
                NavKey::Enter => return reduce_select(state, SelectAction::CommitHighlighted),
                NavKey::Escape => close(state, &mut effects),
                NavKey::Space => {}
            }
        }
        SelectAction::Open => open(state, &mut effects),
        SelectAction::Close => close(state, &mut effects),
        SelectAction::Navigate(direction) => {
            if state.interaction.is_open {
                navigate(state, direction);
            }
        }
        SelectAction::SetSearchTerm(term) => {
            if state.interaction.is_open && state.config.searchable {
                state.interaction.search_term = term;
                state.interaction.highlighted_index = None;
            }
        }
        SelectAction::CommitHighlighted => {
            if !state.interaction.is_open {
                return Ok(effects);
            }
            let Some(index) = state.interaction.highlighted_index else {
                return Ok(effects);
            };
            let filtered = state.filtered_options();
            let option = filtered
                .get(index)
                .map(|option| (*option).clone())
                .ok_or(SelectError::HighlightOutOfRange {
                    index,
                    len: filtered.len(),
                })?;
            commit(state, option, &mut effects);
        }
        SelectAction::CommitValue(value) => {
            if !state.interaction.is_open {
                return Ok(effects);
            }
            let option = state
                .filtered_options()
                .into_iter()
                .find(|option| option.value == value)
                .cloned()
                .ok_or(SelectError::OptionNotFound(value))?;
            commit(state, option, &mut effects);
        }
        SelectAction::Clear => {
            if state.config.disabled || !state.config.clearable || !state.has_selection() {
                return Ok(effects);
            }
            if state.config.multiselect {
                state.values.clear();
            } else {
                state.value = None;
            }
            effects.push(SelectEffect::EmitChange(state.change()));
        }
        SelectAction::OutsideInteraction { inside } => {
            if !inside {
                close(state, &mut effects);
            }
        }
        SelectAction::SetOptions(options) => {
            state.options = options;
            state.interaction.highlighted_index = None;
        }
        SelectAction::SetValue(value) => {
            state.value = value.filter(|value| !value.is_empty());
        }
        SelectAction::SetValues(values) => {
            state.values = values;
        }
        SelectAction::SetConfig(config) => {
            let becomes_disabled = config.disabled && !state.config.disabled;
            state.config = config;
            state.interaction.highlighted_index = None;
            if becomes_disabled {
                close(state, &mut effects);
            }
        }
        SelectAction::Teardown => {
            if state.interaction.is_open {
                reset_interaction(state, false);
                effects.push(SelectEffect::DisarmOutsideListener);
            }
        }
    }
    Ok(effects)
}

fn reset_interaction(state: &mut SelectState, is_open: bool) {
    let interaction = &mut state.interaction;
    interaction.is_open = is_open;
    interaction.search_term.clear();
    interaction.highlighted_index = None;
}

fn toggle(state: &mut SelectState, effects: &mut Vec<SelectEffect>) {
    if state.interaction.is_open {
        close(state, effects);
    } else {
        open(state, effects);
    }
}

fn open(state: &mut SelectState, effects: &mut Vec<SelectEffect>) {
    if state.config.disabled || state.interaction.is_open {
        return;
    }
    reset_interaction(state, true);
    state.interaction.open_generation += 1;
    if state.config.searchable {
        effects.push(SelectEffect::FocusSearchField);
    }
    effects.push(SelectEffect::ArmOutsideListener {
        generation: state.interaction.open_generation,
    });
}

fn close(state: &mut SelectState, effects: &mut Vec<SelectEffect>) {
    if !state.interaction.is_open {
        return;
    }
    reset_interaction(state, false);
    effects.push(SelectEffect::DisarmOutsideListener);
    effects.push(SelectEffect::FocusTrigger);
}

fn navigate(state: &mut SelectState, direction: Direction) {
    let enabled: Vec<usize> = state
        .filtered_options()
        .iter()
        .enumerate()
        .filter(|(_, option)| !option.disabled)
        .map(|(index, _)| index)
        .collect();
    if enabled.is_empty() {
        return;
    }
    let len = enabled.len();
    let position = state
        .interaction
        .highlighted_index
        .and_then(|current| enabled.iter().position(|index| *index == current));
    let next = match (position, direction) {
        (None, Direction::Next) => 0,
        (None, Direction::Previous) => len - 1,
        (Some(position), Direction::Next) => (position + 1) % len,
        (Some(position), Direction::Previous) => (position + len - 1) % len,
    };
    state.interaction.highlighted_index = Some(enabled[next]);
}

fn commit(state: &mut SelectState, option: SelectOption, effects: &mut Vec<SelectEffect>) {
    if option.disabled || state.config.disabled {
        return;
    }
    if state.config.multiselect {
        if let Some(position) = state.values.iter().position(|value| *value == option.value) {
            state.values.remove(position);
        } else {
            state.values.push(option.value);
        }
    } else {
        state.value = Some(option.value);
        close(state, effects);
    }
    effects.push(SelectEffect::EmitChange(state.change()));
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn options() -> Vec<SelectOption> {
        vec![
            SelectOption::new("a", "Alpha"),
            SelectOption::new("b", "Bravo").with_disabled(true),
            SelectOption::new("c", "Charlie"),
        ]
    }

    fn state_with(config: SelectConfig) -> SelectState {
        SelectState::new(options(), config)
    }

    fn opened(config: SelectConfig) -> SelectState {
        let mut state = state_with(config);
        reduce_select(&mut state, SelectAction::Open).expect("open");
        state
    }

    fn multi() -> SelectConfig {
        SelectConfig {
            multiselect: true,
            ..SelectConfig::default()
        }
    }

    #[test]
    fn open_resets_interaction_and_requests_focus_and_listener() {
        let mut state = state_with(SelectConfig {
            searchable: true,
            ..SelectConfig::default()
        });
        state.interaction.search_term = "stale".to_string();
        let effects = reduce_select(&mut state, SelectAction::TriggerClick).expect("open");

        assert!(state.interaction.is_open);
        assert_eq!(state.interaction.search_term, "");
        assert_eq!(state.interaction.highlighted_index, None);
        assert_eq!(
            effects,
            vec![
                SelectEffect::FocusSearchField,
                SelectEffect::ArmOutsideListener { generation: 1 },
            ]
        );
    }

    #[test]
    fn navigation_skips_disabled_and_wraps_both_ends() {
        let mut state = opened(SelectConfig::default());
        let mut step = |direction| {
            reduce_select(&mut state, SelectAction::Navigate(direction)).expect("navigate");
            state.interaction.highlighted_index
        };
        assert_eq!(step(Direction::Next), Some(0));
        assert_eq!(step(Direction::Next), Some(2));
        assert_eq!(step(Direction::Next), Some(0));
        assert_eq!(step(Direction::Previous), Some(2));
        assert_eq!(step(Direction::Previous), Some(0));
    }

    #[test]
    fn navigating_up_from_no_highlight_lands_on_last_enabled() {
        let mut state = opened(SelectConfig::default());
        reduce_select(&mut state, SelectAction::TriggerKey(NavKey::ArrowUp)).expect("up");
        assert_eq!(state.interaction.highlighted_index, Some(2));
    }

    #[test]
    fn navigation_over_all_disabled_list_is_noop() {
        let mut state = SelectState::new(
            vec![
                SelectOption::new("x", "X").with_disabled(true),
                SelectOption::new("y", "Y").with_disabled(true),
            ],
            SelectConfig::default(),
        );
        reduce_select(&mut state, SelectAction::Open).expect("open");
        for _ in 0..3 {
            reduce_select(&mut state, SelectAction::Navigate(Direction::Next)).expect("nav");
        }
        assert_eq!(state.interaction.highlighted_index, None);
    }

    #[test]
    fn arrow_down_on_closed_trigger_opens_without_highlight() {
        let mut state = state_with(SelectConfig::default());
        reduce_select(&mut state, SelectAction::TriggerKey(NavKey::ArrowDown)).expect("down");
        assert!(state.interaction.is_open);
        assert_eq!(state.interaction.highlighted_index, None);

        reduce_select(&mut state, SelectAction::TriggerKey(NavKey::ArrowDown)).expect("down");
        assert_eq!(state.interaction.highlighted_index, Some(0));
    }

    #[test]
    fn single_commit_closes_and_emits_value_with_option() {
        let mut state = opened(SelectConfig::default());
        let effects =
            reduce_select(&mut state, SelectAction::CommitValue("c".to_string())).expect("commit");

        assert_eq!(state.value.as_deref(), Some("c"));
        assert!(!state.interaction.is_open);
        assert_eq!(
            effects,
            vec![
                SelectEffect::DisarmOutsideListener,
                SelectEffect::FocusTrigger,
                SelectEffect::EmitChange(SelectChange::Single {
                    value: Some("c".to_string()),
                    option: Some(SelectOption::new("c", "Charlie")),
                }),
            ]
        );
    }

    #[test]
    fn committing_disabled_option_changes_nothing() {
        let mut state = opened(SelectConfig::default());
        state.value = Some("a".to_string());
        let before = state.clone();
        let effects =
            reduce_select(&mut state, SelectAction::CommitValue("b".to_string())).expect("commit");
        assert_eq!(effects, Vec::new());
        assert_eq!(state, before);

        let mut state = opened(multi());
        state.interaction.highlighted_index = Some(1);
        let before = state.clone();
        let effects = reduce_select(&mut state, SelectAction::CommitHighlighted).expect("commit");
        assert_eq!(effects, Vec::new());
        assert_eq!(state, before);
    }

    #[test]
    fn committing_unknown_value_is_an_error() {
        let mut state = opened(SelectConfig::default());
        assert_eq!(
            reduce_select(&mut state, SelectAction::CommitValue("zz".to_string())),
            Err(SelectError::OptionNotFound("zz".to_string()))
        );
    }

    #[test]
    fn commit_on_closed_list_is_ignored() {
        let mut state = state_with(SelectConfig::default());
        assert_eq!(
            reduce_select(&mut state, SelectAction::CommitValue("a".to_string())),
            Ok(Vec::new())
        );
        assert_eq!(state.value, None);

        let mut state = state_with(multi());
        assert_eq!(
            reduce_select(&mut state, SelectAction::CommitValue("a".to_string())),
            Ok(Vec::new())
        );
        assert_eq!(state.values, Vec::<String>::new());
    }

    #[test]
    fn stale_highlight_is_reported() {
        let mut state = opened(SelectConfig::default());
        state.interaction.highlighted_index = Some(9);
        assert_eq!(
            reduce_select(&mut state, SelectAction::CommitHighlighted),
            Err(SelectError::HighlightOutOfRange { index: 9, len: 3 })
        );
    }

    #[test]
    fn multiselect_toggle_twice_restores_values_and_order() {
        let mut state = opened(multi());
        state.values = vec!["c".to_string()];
        let original = state.values.clone();

        let effects =
            reduce_select(&mut state, SelectAction::CommitValue("a".to_string())).expect("toggle");
        assert!(state.interaction.is_open);
        assert_eq!(
            effects,
            vec![SelectEffect::EmitChange(SelectChange::Multiple {
                values: vec!["c".to_string(), "a".to_string()],
                options: vec![
                    SelectOption::new("c", "Charlie"),
                    SelectOption::new("a", "Alpha"),
                ],
            })]
        );

        reduce_select(&mut state, SelectAction::CommitValue("a".to_string())).expect("toggle");
        assert_eq!(state.values, original);
    }

    #[test]
    fn multiselect_removal_keeps_remaining_order() {
        let mut state = opened(multi());
        state.values = vec!["c".to_string(), "b".to_string(), "a".to_string()];
        reduce_select(&mut state, SelectAction::CommitValue("c".to_string())).expect("toggle");
        assert_eq!(state.values, vec!["b".to_string(), "a".to_string()]);
    }

    #[test]
    fn search_filters_and_resets_highlight() {
        let mut state = opened(SelectConfig {
            searchable: true,
            ..SelectConfig::default()
        });
        reduce_select(&mut state, SelectAction::Navigate(Direction::Next)).expect("nav");
        reduce_select(&mut state, SelectAction::SetSearchTerm("CHAR".to_string())).expect("type");
        assert_eq!(state.interaction.highlighted_index, None);

        reduce_select(&mut state, SelectAction::SearchKey(NavKey::ArrowDown)).expect("nav");
        assert_eq!(state.interaction.highlighted_index, Some(0));
        let effects =
            reduce_select(&mut state, SelectAction::SearchKey(NavKey::Enter)).expect("commit");
        assert_eq!(state.value.as_deref(), Some("c"));
        assert!(matches!(effects.last(), Some(SelectEffect::EmitChange(_))));
    }

    #[test]
    fn search_enter_in_multiselect_toggles_and_stays_open() {
        let mut state = opened(SelectConfig {
            searchable: true,
            multiselect: true,
            ..SelectConfig::default()
        });
        reduce_select(&mut state, SelectAction::SearchKey(NavKey::ArrowDown)).expect("nav");
        reduce_select(&mut state, SelectAction::SearchKey(NavKey::Enter)).expect("commit");
        assert!(state.interaction.is_open);
        assert_eq!(state.values, vec!["a".to_string()]);
    }

    #[test]
    fn clear_resets_selection_without_touching_visibility() {
        let config = SelectConfig {
            clearable: true,
            ..multi()
        };
        for open_first in [false, true] {
            let mut state = state_with(config.clone());
            if open_first {
                reduce_select(&mut state, SelectAction::Open).expect("open");
            }
            state.values = vec!["a".to_string(), "b".to_string()];
            let effects = reduce_select(&mut state, SelectAction::Clear).expect("clear");

            assert_eq!(state.values, Vec::<String>::new());
            assert_eq!(state.interaction.is_open, open_first);
            assert_eq!(
                effects,
                vec![SelectEffect::EmitChange(SelectChange::Multiple {
                    values: Vec::new(),
                    options: Vec::new(),
                })]
            );
        }
    }

    #[test]
    fn clear_requires_clearable_and_selection() {
        let mut state = state_with(SelectConfig::default());
        state.value = Some("a".to_string());
        assert_eq!(reduce_select(&mut state, SelectAction::Clear), Ok(Vec::new()));
        assert_eq!(state.value.as_deref(), Some("a"));

        state.config.clearable = true;
        state.value = None;
        assert_eq!(reduce_select(&mut state, SelectAction::Clear), Ok(Vec::new()));
    }

    #[test]
    fn close_is_idempotent() {
        let mut state = opened(SelectConfig::default());
        assert_eq!(
            reduce_select(&mut state, SelectAction::Close).expect("close"),
            vec![
                SelectEffect::DisarmOutsideListener,
                SelectEffect::FocusTrigger
            ]
        );
        let after = state.clone();
        assert_eq!(
            reduce_select(&mut state, SelectAction::Close).expect("close"),
            Vec::new()
        );
        assert_eq!(state, after);
    }

    #[test]
    fn disabled_list_refuses_activation() {
        let mut state = state_with(SelectConfig {
            disabled: true,
            ..SelectConfig::default()
        });
        for action in [
            SelectAction::TriggerClick,
            SelectAction::TriggerKey(NavKey::Enter),
            SelectAction::TriggerKey(NavKey::ArrowDown),
            SelectAction::Open,
        ] {
            assert_eq!(reduce_select(&mut state, action), Ok(Vec::new()));
            assert!(!state.interaction.is_open);
        }
    }

    #[test]
    fn disabling_an_open_list_closes_it() {
        let mut state = opened(SelectConfig::default());
        let effects = reduce_select(
            &mut state,
            SelectAction::SetConfig(SelectConfig {
                disabled: true,
                ..SelectConfig::default()
            }),
        )
        .expect("config");
        assert!(!state.interaction.is_open);
        assert!(effects.contains(&SelectEffect::DisarmOutsideListener));
    }

    #[test]
    fn outside_interaction_closes_only_when_outside() {
        let mut state = opened(SelectConfig::default());
        assert_eq!(
            reduce_select(&mut state, SelectAction::OutsideInteraction { inside: true }),
            Ok(Vec::new())
        );
        assert!(state.interaction.is_open);
        reduce_select(&mut state, SelectAction::OutsideInteraction { inside: false })
            .expect("outside");
        assert!(!state.interaction.is_open);
    }

    #[test]
    fn replacing_options_drops_highlight() {
        let mut state = opened(SelectConfig::default());
        reduce_select(&mut state, SelectAction::Navigate(Direction::Previous)).expect("nav");
        reduce_select(
            &mut state,
            SelectAction::SetOptions(vec![SelectOption::new("z", "Zulu")]),
        )
        .expect("options");
        assert_eq!(state.interaction.highlighted_index, None);
    }

    #[test]
    fn teardown_while_open_only_disarms() {
        let mut state = opened(SelectConfig::default());
        assert_eq!(
            reduce_select(&mut state, SelectAction::Teardown),
            Ok(vec![SelectEffect::DisarmOutsideListener])
        );
        assert_eq!(reduce_select(&mut state, SelectAction::Teardown), Ok(Vec::new()));
    }

    #[test]
    fn each_open_gets_a_new_generation() {
        let mut state = opened(SelectConfig::default());
        assert!(state.should_arm(1));
        reduce_select(&mut state, SelectAction::Close).expect("close");
        assert!(!state.should_arm(1));
        reduce_select(&mut state, SelectAction::Open).expect("open");
        assert!(!state.should_arm(1));
        assert!(state.should_arm(2));
    }

    #[test]
    fn nav_key_mapping() {
        assert_eq!(NavKey::from_key(" "), Some(NavKey::Space));
        assert_eq!(NavKey::from_key("Escape"), Some(NavKey::Escape));
        assert_eq!(NavKey::from_key("a"), None);
    }
}
