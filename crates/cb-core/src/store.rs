//! Store for the comments slice
//!
//! An explicitly constructed, injectable store: `create -> subscribe /
//! dispatch* -> discard`. Never a hidden singleton, so tests stay isolated.
//! Dispatch is sequential; the reducer runs synchronously on the calling
//! thread and subscribers are notified with the new slice before `dispatch`
//! returns.

use tracing::debug;

use crate::action::Action;
use crate::reducer::reduce;
use crate::types::{Comment, SubscriptionId};

type Subscriber = Box<dyn FnMut(&[Comment])>;

/// State container owning the comments slice
#[derive(Default)]
pub struct Store {
    comments: Vec<Comment>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl Store {
    /// Create a store with an empty slice
    pub fn new() -> Self {
        Self::default()
    }

    /// Current comments slice
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Run the reducer on the given action and notify every subscriber
    pub fn dispatch(&mut self, action: Action) {
        debug!(kind = action.kind(), "dispatching action");
        self.comments = reduce(&self.comments, &action);
        for (_, subscriber) in &mut self.subscribers {
            subscriber(&self.comments);
        }
    }

    /// Register an observer called with the slice after every dispatch
    pub fn subscribe(&mut self, subscriber: impl FnMut(&[Comment]) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Drop a registration. Returns false if the id was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    /// Number of registered subscribers
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("comments", &self.comments)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
