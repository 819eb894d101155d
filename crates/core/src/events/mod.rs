//! Invalidation events module.
//!
//! Provides the per-collection topics and the synchronous pub/sub bus that
//! notifies derived views when the underlying entity set changes. The
//! storage layer publishes on the matching topic after each successful
//! mutation; subscribers receive no payload, only the signal to re-fetch.

mod bus;
mod topic;

pub use bus::{InvalidationBus, SubscriptionId};
pub use topic::Topic;
