use serde::{Deserialize, Serialize};

use crate::field::ControlSize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One selectable entry. `value` is unique within a list.
pub struct SelectOption {
    /// Stable value reported in change notifications.
    pub value: String,
    /// Display text; also the search target.
    pub label: String,
    /// Disabled options render but can never be committed.
    #[serde(default)]
    pub disabled: bool,
}

impl SelectOption {
    /// Enabled option.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }

    /// Same option with the disabled flag set.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Trigger emphasis.
pub enum SelectVariant {
    /// Brand-bordered trigger.
    Primary,
    /// Muted trigger.
    Secondary,
    /// Transparent bordered trigger.
    Outline,
}

impl Default for SelectVariant {
    fn default() -> Self {
        Self::Primary
    }
}

impl SelectVariant {
    /// Stable token used in DOM data attributes.
    pub fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Outline => "outline",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Host-supplied mode flags and presentation tags.
pub struct SelectConfig {
    /// Selection is a set of values instead of one value.
    pub multiselect: bool,
    /// Shows a search field that filters options by label.
    pub searchable: bool,
    /// Placeholder of the search field.
    pub search_placeholder: String,
    /// Offers a clear action while something is selected.
    pub clearable: bool,
    /// Refuses every activating transition.
    pub disabled: bool,
    /// Trigger emphasis.
    pub variant: SelectVariant,
    /// Trigger size.
    pub size: ControlSize,
    /// Trigger text while nothing is selected.
    pub placeholder: String,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            multiselect: false,
            searchable: false,
            search_placeholder: "Search...".to_string(),
            clearable: false,
            disabled: false,
            variant: SelectVariant::default(),
            size: ControlSize::default(),
            placeholder: "Select an option...".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Transient interaction state, reset on every open and close.
pub struct ListInteraction {
    /// Whether the option list is shown.
    pub is_open: bool,
    /// Current search text.
    pub search_term: String,
    /// Index into the filtered options; always valid when set.
    pub highlighted_index: Option<usize>,
    /// Incremented on every open; identifies the outside listener armed for that open.
    pub open_generation: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Complete list state: host-supplied props plus interaction state.
pub struct SelectState {
    /// Options in display order.
    pub options: Vec<SelectOption>,
    /// Single-mode selection.
    pub value: Option<String>,
    /// Multi-mode selection in selection order.
    pub values: Vec<String>,
    /// Mode flags.
    pub config: SelectConfig,
    /// Interaction state.
    pub interaction: ListInteraction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Committed selection change delivered to observers.
pub enum SelectChange {
    /// Single mode: new value and its option (both empty after a clear).
    Single {
        /// Selected value.
        value: Option<String>,
        /// Option carrying the value.
        option: Option<SelectOption>,
    },
    /// Multi mode: every selected value and the options they resolve to.
    Multiple {
        /// Selected values in selection order.
        values: Vec<String>,
        /// Options for `values`, in the same order; stale values are skipped.
        options: Vec<SelectOption>,
    },
}

impl SelectState {
    /// Builds a closed list.
    pub fn new(options: Vec<SelectOption>, config: SelectConfig) -> Self {
        Self {
            options,
            config,
            ..Self::default()
        }
    }

    /// Whether the search filter is currently narrowing the list.
    pub fn is_filtering(&self) -> bool {
        self.config.searchable && !self.interaction.search_term.is_empty()
    }

    /// Options visible under the current search term (case-insensitive label substring).
    pub fn filtered_options(&self) -> Vec<&SelectOption> {
        if !self.is_filtering() {
            return self.options.iter().collect();
        }
        let needle = self.interaction.search_term.to_lowercase();
        self.options
            .iter()
            .filter(|option| option.label.to_lowercase().contains(&needle))
            .collect()
    }

    /// Single-mode option matching `value`, if any.
    pub fn selected_option(&self) -> Option<&SelectOption> {
        let value = self.value.as_deref()?;
        self.options.iter().find(|option| option.value == value)
    }

    /// Multi-mode options for `values`, in selection order, skipping stale values.
    pub fn selected_options(&self) -> Vec<&SelectOption> {
        self.values
            .iter()
            .filter_map(|value| self.options.iter().find(|option| &option.value == value))
            .collect()
    }

    /// Whether `value` is currently selected under the active mode.
    pub fn is_selected(&self, value: &str) -> bool {
        if self.config.multiselect {
            self.values.iter().any(|selected| selected == value)
        } else {
            self.value.as_deref() == Some(value)
        }
    }

    /// Whether any value is selected, stale or not.
    pub fn has_selection(&self) -> bool {
        if self.config.multiselect {
            !self.values.is_empty()
        } else {
            self.value.as_deref().is_some_and(|value| !value.is_empty())
        }
    }

    /// Whether a deferred outside-listener registration for `generation` should still happen.
    pub fn should_arm(&self, generation: u64) -> bool {
        self.interaction.is_open && self.interaction.open_generation == generation
    }

    pub(crate) fn change(&self) -> SelectChange {
        if self.config.multiselect {
            SelectChange::Multiple {
                values: self.values.clone(),
                options: self.selected_options().into_iter().cloned().collect(),
            }
        } else {
            SelectChange::Single {
                value: self.value.clone(),
                option: self.selected_option().cloned(),
            }
        }
    }
}
