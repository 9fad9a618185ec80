//! Fire-and-forget event streams
//!
//! Subscribers only see events published after they subscribe; nothing is
//! buffered or replayed.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

/// Handle returned by [`EventStream::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

type Handler<T> = Rc<dyn Fn(&T)>;

/// A single-producer broadcast stream.
pub struct EventStream<T> {
    next_id: Cell<u64>,
    handlers: RefCell<BTreeMap<SubscriptionId, Handler<T>>>,
}

impl<T> EventStream<T> {
    pub fn new() -> Self {
        Self {
            next_id: Cell::new(0),
            handlers: RefCell::new(BTreeMap::new()),
        }
    }

    pub fn subscribe(&self, handler: impl Fn(&T) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.handlers.borrow_mut().insert(id, Rc::new(handler));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.handlers.borrow_mut().remove(&id).is_some()
    }

    /// Calls every current subscriber, in subscription order.
    pub fn publish(&self, value: &T) {
        // Snapshot so handlers may subscribe or unsubscribe while we iterate.
        let handlers: Vec<Handler<T>> = self.handlers.borrow().values().cloned().collect();
        for handler in handlers {
            handler(value);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.handlers.borrow().len()
    }
}

impl<T> Default for EventStream<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for EventStream<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventStream")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// The two streams observers subscribe to.
#[derive(Debug, Default)]
pub struct NotificationHub {
    /// Test names from each completed discovery, empty on failure.
    pub discovery_results: EventStream<Vec<String>>,
    /// The test name of each run as it is issued, empty for "run all".
    pub test_runs: EventStream<String>,
}

impl NotificationHub {
    pub fn new() -> Self {
        Self::default()
    }
}
