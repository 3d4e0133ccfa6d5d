//! Selectable list with open/closed visibility, optional search filter, and optional multi-value
//! selection.
//!
//! [`reduce_select`] is the single transition function. It mutates a [`SelectState`] and returns
//! the host work the transition requires as [`SelectEffect`]s; the caller executes them (focus
//! moves, outside-click listener lifetime) and delivers [`SelectEffect::EmitChange`] to observers.
//! [`select_view`] derives everything a renderer needs from the same state.

mod controller;
mod model;
mod outside;
mod reducer;
mod view;

pub use controller::{step_select, SelectController};
pub use model::{
    ListInteraction, SelectChange, SelectConfig, SelectOption, SelectState, SelectVariant,
};
pub use outside::OutsideListenerSlot;
pub use reducer::{reduce_select, Direction, NavKey, SelectAction, SelectEffect, SelectError};
pub use view::{
    select_view, OptionRowView, SearchFieldView, SelectView, NO_MATCHES_MESSAGE,
    NO_OPTIONS_MESSAGE,
};
