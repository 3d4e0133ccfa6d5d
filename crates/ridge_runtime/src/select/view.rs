use super::model::SelectState;

/// Empty-list message when there are no options at all.
pub const NO_OPTIONS_MESSAGE: &str = "No options available";
/// Empty-list message when the search term matches nothing.
pub const NO_MATCHES_MESSAGE: &str = "No matching options";

#[derive(Debug, Clone, PartialEq, Eq)]
/// One rendered option row.
pub struct OptionRowView {
    /// Index into the filtered options.
    pub index: usize,
    /// Option value.
    pub value: String,
    /// Option label.
    pub label: String,
    /// Refuses commits.
    pub disabled: bool,
    /// Single-mode selected styling; always false in multi mode.
    pub selected: bool,
    /// Keyboard highlight.
    pub highlighted: bool,
    /// Multi-mode checkbox state; `None` in single mode.
    pub checkbox: Option<bool>,
    /// `aria-selected` value.
    pub aria_selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Search field contents.
pub struct SearchFieldView {
    /// Placeholder text.
    pub placeholder: String,
    /// Current search text.
    pub term: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Everything a renderer needs for one frame of the list.
pub struct SelectView {
    /// List visibility.
    pub is_open: bool,
    /// Trigger refuses interaction.
    pub disabled: bool,
    /// Multi-value mode.
    pub multiselect: bool,
    /// Trigger text.
    pub trigger_label: String,
    /// Whether `trigger_label` is the placeholder.
    pub is_placeholder: bool,
    /// Selected-count badge, shown for more than one resolved selection.
    pub badge: Option<usize>,
    /// Trigger `aria-label`.
    pub aria_label: String,
    /// Clear button visibility.
    pub show_clear: bool,
    /// Present when searchable.
    pub search: Option<SearchFieldView>,
    /// Filtered option rows.
    pub rows: Vec<OptionRowView>,
    /// Replaces the rows when nothing is visible.
    pub empty_message: Option<&'static str>,
}

/// Derives the rendered view from `state`. Pure; call after every transition.
pub fn select_view(state: &SelectState) -> SelectView {
    let config = &state.config;
    let interaction = &state.interaction;

    let (trigger_label, is_placeholder, badge, aria_label) = if config.multiselect {
        let selected = state.selected_options();
        let count = selected.len();
        let summary = format!("{count} items selected");
        match selected.as_slice() {
            [] => (config.placeholder.clone(), true, None, summary),
            [only] => (only.label.clone(), false, None, summary),
            _ => (summary.clone(), false, Some(count), summary),
        }
    } else {
        match state.selected_option() {
            Some(option) => (option.label.clone(), false, None, option.label.clone()),
            None => (
                config.placeholder.clone(),
                true,
                None,
                config.placeholder.clone(),
            ),
        }
    };

    let rows: Vec<OptionRowView> = state
        .filtered_options()
        .into_iter()
        .enumerate()
        .map(|(index, option)| {
            let is_selected = state.is_selected(&option.value);
            OptionRowView {
                index,
                value: option.value.clone(),
                label: option.label.clone(),
                disabled: option.disabled,
                selected: is_selected && !config.multiselect,
                highlighted: interaction.highlighted_index == Some(index),
                checkbox: config.multiselect.then_some(is_selected),
                aria_selected: is_selected,
            }
        })
        .collect();

    let empty_message = rows.is_empty().then(|| {
        if state.is_filtering() {
            NO_MATCHES_MESSAGE
        } else {
            NO_OPTIONS_MESSAGE
        }
    });

    SelectView {
        is_open: interaction.is_open,
        disabled: config.disabled,
        multiselect: config.multiselect,
        trigger_label,
        is_placeholder,
        badge,
        aria_label,
        show_clear: config.clearable && state.has_selection(),
        search: config.searchable.then(|| SearchFieldView {
            placeholder: config.search_placeholder.clone(),
            term: interaction.search_term.clone(),
        }),
        rows,
        empty_message,
    }
}
