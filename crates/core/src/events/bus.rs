//! The invalidation bus: minimal synchronous pub/sub per collection.

use std::sync::{Arc, Mutex};

use super::topic::Topic;

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Arc<dyn Fn() + Send + Sync>;

struct Subscription {
    id: SubscriptionId,
    topic: Topic,
    callback: Callback,
}

/// Minimal invalidation bus.
///
/// Publishes are synchronous with respect to the mutation's completion:
/// callbacks run to completion, in registration order, on the publishing
/// thread. Callbacks receive no payload. Relative ordering across topics
/// is not guaranteed.
#[derive(Default)]
pub struct InvalidationBus {
    state: Mutex<BusState>,
}

#[derive(Default)]
struct BusState {
    next_id: u64,
    subscriptions: Vec<Subscription>,
}

impl InvalidationBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a callback for one topic.
    pub fn subscribe<F>(&self, topic: Topic, callback: F) -> SubscriptionId
    where
        F: Fn() + Send + Sync + 'static,
    {
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let id = SubscriptionId(state.next_id);
        state.subscriptions.push(Subscription {
            id,
            topic,
            callback: Arc::new(callback),
        });
        id
    }

    /// Removes a subscription. Returns false when the id is unknown.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut state = self.state.lock().unwrap();
        let before = state.subscriptions.len();
        state.subscriptions.retain(|s| s.id != id);
        state.subscriptions.len() != before
    }

    /// Publishes an invalidation on `topic`.
    ///
    /// Callbacks may subscribe or unsubscribe re-entrantly; a publish runs
    /// against the subscription list as it was when the publish started.
    pub fn publish(&self, topic: Topic) {
        let callbacks: Vec<Callback> = {
            let state = self.state.lock().unwrap();
            state
                .subscriptions
                .iter()
                .filter(|s| s.topic == topic)
                .map(|s| s.callback.clone())
                .collect()
        };
        for callback in callbacks {
            callback();
        }
    }

    /// Number of live subscriptions for a topic.
    pub fn subscriber_count(&self, topic: Topic) -> usize {
        self.state
            .lock()
            .unwrap()
            .subscriptions
            .iter()
            .filter(|s| s.topic == topic)
            .count()
    }
}
