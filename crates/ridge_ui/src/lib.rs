//! Leptos components over the Ridge UI runtime.
//!
//! Components render the headless controllers from `ridge_runtime` and expose the stable
//! `data-ui-*` DOM contract (`data-ui-kind`, `data-ui-variant`, `data-ui-size`, `data-ui-state`)
//! plus `data-theme` for the per-element theme binding. Mount [`ThemeProvider`] once near the
//! root; components work without it and fall back to the host's appearance queries.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod button;
mod dropdown;
mod markup;
mod text_field;
mod theme;

pub use button::Button;
pub use dropdown::Dropdown;
pub use text_field::TextField;
pub use theme::{use_element_theme, use_theme, ThemeContext, ThemeProvider};

/// Convenience imports for applications composing Ridge components.
pub mod prelude {
    pub use crate::{
        use_element_theme, use_theme, Button, Dropdown, TextField, ThemeContext, ThemeProvider,
    };
    pub use ridge_runtime::{
        ButtonClick, ButtonKind, ButtonVariant, ControlSize, InputBlur, InputChange, InputFocus,
        InputType, InputVariant, SelectChange, SelectOption, SelectVariant,
    };
    pub use ridge_tokens::{ThemeMode, ThemeName};
}
