use std::cell::{Cell, RefCell};
use std::rc::Rc;

pub mod candidate;

type Callback<T> = Rc<RefCell<dyn FnMut(&T)>>;

/// Handle returned by [`Store::subscribe`]; pass it back to
/// [`Store::unsubscribe`] to stop receiving notifications.
#[derive(Debug, PartialEq, Eq)]
pub struct Subscription(u64);

/// Single-threaded observable container.
///
/// One value, any number of subscribers. Mutations apply in issue order and
/// each one synchronously notifies every current subscriber, in
/// subscription order, with the value as of that mutation. Subscribing by
/// itself does not notify. The container is deliberately not `Send`: all
/// access happens on the UI thread, so no locking is involved.
pub struct Store<T> {
    value: RefCell<T>,
    subscribers: RefCell<Vec<(u64, Callback<T>)>>,
    next_id: Cell<u64>,
}

impl<T: Clone> Store<T> {
    pub fn new(initial: T) -> Self {
        Self {
            value: RefCell::new(initial),
            subscribers: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        }
    }

    /// A copy of the current value.
    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }

    pub fn subscribe(&self, callback: impl FnMut(&T) + 'static) -> Subscription {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.subscribers
            .borrow_mut()
            .push((id, Rc::new(RefCell::new(callback))));
        Subscription(id)
    }

    pub fn unsubscribe(&self, subscription: Subscription) {
        self.subscribers
            .borrow_mut()
            .retain(|(id, _)| *id != subscription.0);
    }

    /// Replaces the whole value and notifies.
    pub fn set(&self, value: T) {
        *self.value.borrow_mut() = value;
        self.notify();
    }

    /// Applies `f` to the current value and notifies.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        {
            let mut value = self.value.borrow_mut();
            f(&mut value);
        }
        self.notify();
    }

    fn notify(&self) {
        let value = self.get();
        // Snapshot the subscriber list so a callback may subscribe or
        // unsubscribe without invalidating this pass; membership changes
        // take effect from the next mutation.
        let snapshot: Vec<Callback<T>> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, callback)| Rc::clone(callback))
            .collect();
        for callback in snapshot {
            (callback.borrow_mut())(&value);
        }
    }
}
