//! Headless runtime for the Ridge UI components.
//!
//! Everything here is plain state plus transition functions: the theme resolver that owns the
//! document-level theme marker, the per-element theme binding, the selectable-list reducer behind
//! the dropdown, and the button/input controllers. Rendering lives in `ridge_ui`; host access goes
//! through the `ridge_host` contracts so every transition is testable without a browser.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod element;
pub mod field;
mod observers;
pub mod select;
pub mod theme;

pub use element::ElementTheme;
pub use field::{
    classify_icon, ButtonClick, ButtonKind, ButtonState, ButtonVariant, ControlSize, IconContent,
    InputBlur, InputChange, InputFocus, InputState, InputType, InputVariant,
};
pub use observers::ObserverId;
pub use select::{
    reduce_select, select_view, step_select, Direction, ListInteraction, NavKey, OptionRowView,
    OutsideListenerSlot, SearchFieldView, SelectAction, SelectChange, SelectConfig,
    SelectController, SelectEffect, SelectError, SelectOption, SelectState, SelectVariant,
    SelectView, NO_MATCHES_MESSAGE, NO_OPTIONS_MESSAGE,
};
pub use theme::{ThemeChange, ThemeConfig, ThemeResolver, ThemeSubscription, ThemeWatch};
