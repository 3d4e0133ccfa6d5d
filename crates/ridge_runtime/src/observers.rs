//! Synchronous observer registry shared by the runtime controllers.

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// Handle returned when registering an observer.
pub struct ObserverId(pub u64);

type Observer<T> = Rc<dyn Fn(&T)>;

pub(crate) struct Observers<T> {
    next_id: Cell<u64>,
    entries: RefCell<Vec<(ObserverId, Observer<T>)>>,
}

impl<T> Default for Observers<T> {
    fn default() -> Self {
        Self {
            next_id: Cell::new(0),
            entries: RefCell::new(Vec::new()),
        }
    }
}

impl<T> Observers<T> {
    pub(crate) fn add(&self, observer: impl Fn(&T) + 'static) -> ObserverId {
        let id = ObserverId(self.next_id.get() + 1);
        self.next_id.set(id.0);
        self.entries.borrow_mut().push((id, Rc::new(observer)));
        id
    }

    pub(crate) fn remove(&self, id: ObserverId) -> bool {
        let mut entries = self.entries.borrow_mut();
        let before = entries.len();
        entries.retain(|(entry_id, _)| *entry_id != id);
        entries.len() != before
    }

    /// Calls every observer in registration order.
    ///
    /// The list is snapshotted first, so observers may (un)register during delivery.
    pub(crate) fn notify(&self, value: &T) {
        let snapshot: Vec<Observer<T>> = self
            .entries
            .borrow()
            .iter()
            .map(|(_, observer)| observer.clone())
            .collect();
        for observer in snapshot {
            observer(value);
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.borrow().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observers_notify_in_order_and_unregister() {
        let observers = Rc::new(Observers::<u32>::default());
        let seen = Rc::new(RefCell::new(Vec::new()));

        let seen_a = seen.clone();
        let a = observers.add(move |v| seen_a.borrow_mut().push(("a", *v)));
        let seen_b = seen.clone();
        observers.add(move |v| seen_b.borrow_mut().push(("b", *v)));

        observers.notify(&1);
        assert!(observers.remove(a));
        assert!(!observers.remove(a));
        observers.notify(&2);

        assert_eq!(*seen.borrow(), vec![("a", 1), ("b", 1), ("b", 2)]);
        assert_eq!(observers.len(), 1);
    }

    #[test]
    fn observer_may_unregister_itself_during_delivery() {
        let observers = Rc::new(Observers::<()>::default());
        let id_slot = Rc::new(Cell::new(None));
        let weak = Rc::downgrade(&observers);
        let slot = id_slot.clone();
        let id = observers.add(move |_| {
            if let (Some(observers), Some(id)) = (weak.upgrade(), slot.get()) {
                observers.remove(id);
            }
        });
        id_slot.set(Some(id));

        observers.notify(&());
        assert_eq!(observers.len(), 0);
    }
}
