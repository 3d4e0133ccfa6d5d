use std::cell::RefCell;

use leptos::logging;

use super::{
    model::{SelectChange, SelectConfig, SelectOption, SelectState},
    reducer::{reduce_select, SelectAction, SelectEffect},
    view::{select_view, SelectView},
};
use crate::observers::{ObserverId, Observers};

/// One dispatch step: reduces a copy of `current` and returns the next state with its effects.
///
/// Rejected actions are logged and yield `None`, leaving the caller's state untouched.
pub fn step_select(
    current: &SelectState,
    action: SelectAction,
) -> Option<(SelectState, Vec<SelectEffect>)> {
    let mut next = current.clone();
    match reduce_select(&mut next, action) {
        Ok(effects) => Some((next, effects)),
        Err(err) => {
            logging::warn!("select reducer error: {err}");
            None
        }
    }
}

/// Stateful wrapper around [`reduce_select`] for hosts that are not reactive frameworks.
///
/// Change notifications go to registered observers synchronously; the remaining effects are
/// returned to the caller for execution.
pub struct SelectController {
    state: RefCell<SelectState>,
    observers: Observers<SelectChange>,
}

impl SelectController {
    /// Closed controller over `options`.
    pub fn new(options: Vec<SelectOption>, config: SelectConfig) -> Self {
        Self::from_state(SelectState::new(options, config))
    }

    /// Controller resuming from an existing state.
    pub fn from_state(state: SelectState) -> Self {
        Self {
            state: RefCell::new(state),
            observers: Observers::default(),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> SelectState {
        self.state.borrow().clone()
    }

    /// View derived from the current state.
    pub fn view(&self) -> SelectView {
        select_view(&self.state.borrow())
    }

    /// Registers a change observer.
    pub fn subscribe(&self, observer: impl Fn(&SelectChange) + 'static) -> ObserverId {
        self.observers.add(observer)
    }

    /// Removes a change observer; returns whether it was registered.
    pub fn unsubscribe(&self, id: ObserverId) -> bool {
        self.observers.remove(id)
    }

    /// See [`SelectState::should_arm`].
    pub fn should_arm(&self, generation: u64) -> bool {
        self.state.borrow().should_arm(generation)
    }

    /// Applies `action`, notifies observers of committed changes, and returns the host effects.
    ///
    /// Rejected actions leave the state untouched and are logged.
    pub fn dispatch(&self, action: SelectAction) -> Vec<SelectEffect> {
        let stepped = step_select(&self.state.borrow(), action);
        let Some((next, effects)) = stepped else {
            return Vec::new();
        };
        *self.state.borrow_mut() = next;

        let mut host_effects = Vec::with_capacity(effects.len());
        for effect in effects {
            match effect {
                SelectEffect::EmitChange(change) => self.observers.notify(&change),
                other => host_effects.push(other),
            }
        }
        host_effects
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::select::{Direction, NavKey, OutsideListenerSlot};

    /// Effect executor double: the outside listener lives in the same slot the dropdown uses.
    #[derive(Default)]
    struct Host {
        listeners: Rc<Cell<usize>>,
        slot: RefCell<OutsideListenerSlot<u32>>,
        pending_arm: Cell<Option<u64>>,
        trigger_focus: Cell<usize>,
    }

    impl Host {
        fn run(&self, effects: Vec<SelectEffect>) {
            for effect in effects {
                match effect {
                    SelectEffect::ArmOutsideListener { generation } => {
                        self.pending_arm.set(Some(generation));
                    }
                    SelectEffect::DisarmOutsideListener => {
                        if self.slot.borrow_mut().disarm().is_some() {
                            self.listeners.set(self.listeners.get() - 1);
                        }
                    }
                    SelectEffect::FocusTrigger => {
                        self.trigger_focus.set(self.trigger_focus.get() + 1);
                    }
                    SelectEffect::FocusSearchField | SelectEffect::EmitChange(_) => {}
                }
            }
        }

        fn tick(&self, controller: &SelectController) {
            if let Some(generation) = self.pending_arm.take() {
                let listeners = Rc::clone(&self.listeners);
                self.slot
                    .borrow_mut()
                    .arm(&controller.state(), generation, move || {
                        listeners.set(listeners.get() + 1);
                        generation as u32
                    });
            }
        }
    }

    fn options() -> Vec<SelectOption> {
        vec![
            SelectOption::new("a", "A"),
            SelectOption::new("b", "B").with_disabled(true),
            SelectOption::new("c", "C"),
        ]
    }

    #[test]
    fn open_close_cycles_leave_no_listener_behind() {
        let controller = SelectController::new(options(), SelectConfig::default());
        let host = Host::default();

        for cycle in 0..60 {
            host.run(controller.dispatch(SelectAction::TriggerClick));
            if cycle % 3 != 0 {
                host.tick(&controller);
            }
            host.run(controller.dispatch(SelectAction::Navigate(Direction::Next)));
            let close = match cycle % 3 {
                0 => SelectAction::Close,
                1 => SelectAction::OutsideInteraction { inside: false },
                _ => SelectAction::TriggerKey(NavKey::Escape),
            };
            host.run(controller.dispatch(close));
            host.tick(&controller);
            assert_eq!(host.listeners.get(), 0, "cycle {cycle}");
        }
        assert!(!controller.state().interaction.is_open);
    }

    #[test]
    fn repeated_close_has_no_observable_effect() {
        let controller = SelectController::new(options(), SelectConfig::default());
        let host = Host::default();
        host.run(controller.dispatch(SelectAction::Open));
        host.tick(&controller);
        host.run(controller.dispatch(SelectAction::Close));
        let before = controller.state();

        assert_eq!(controller.dispatch(SelectAction::Close), Vec::new());
        assert_eq!(controller.state(), before);
        assert_eq!(host.trigger_focus.get(), 1);
        assert_eq!(host.listeners.get(), 0);
    }

    #[test]
    fn observers_receive_changes_and_effects_exclude_them() {
        let controller = SelectController::new(
            options(),
            SelectConfig {
                multiselect: true,
                clearable: true,
                ..SelectConfig::default()
            },
        );
        let changes = Rc::new(RefCell::new(Vec::new()));
        let sink = changes.clone();
        let id = controller.subscribe(move |change| sink.borrow_mut().push(change.clone()));

        controller.dispatch(SelectAction::Open);
        let effects = controller.dispatch(SelectAction::CommitValue("a".to_string()));
        assert_eq!(effects, Vec::new());
        controller.dispatch(SelectAction::CommitValue("c".to_string()));
        controller.dispatch(SelectAction::Clear);

        assert_eq!(changes.borrow().len(), 3);
        assert_eq!(
            changes.borrow()[1],
            SelectChange::Multiple {
                values: vec!["a".to_string(), "c".to_string()],
                options: vec![SelectOption::new("a", "A"), SelectOption::new("c", "C")],
            }
        );
        assert!(controller.state().interaction.is_open);

        assert!(controller.unsubscribe(id));
        controller.dispatch(SelectAction::CommitValue("a".to_string()));
        assert_eq!(changes.borrow().len(), 3);
    }

    #[test]
    fn disabled_commit_fires_nothing() {
        let controller = SelectController::new(options(), SelectConfig::default());
        let fired = Rc::new(Cell::new(0));
        let counter = fired.clone();
        controller.subscribe(move |_| counter.set(counter.get() + 1));

        controller.dispatch(SelectAction::Open);
        let before = controller.state();
        controller.dispatch(SelectAction::CommitValue("b".to_string()));
        assert_eq!(controller.state(), before);
        assert_eq!(fired.get(), 0);
    }

    #[test]
    fn rejected_actions_leave_state_untouched() {
        let controller = SelectController::new(options(), SelectConfig::default());
        controller.dispatch(SelectAction::Open);
        let before = controller.state();
        assert_eq!(
            controller.dispatch(SelectAction::CommitValue("missing".to_string())),
            Vec::new()
        );
        assert_eq!(controller.state(), before);
        assert_eq!(controller.view().trigger_label, "Select an option...");
    }
}
