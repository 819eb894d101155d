//! Invalidation topics, one per mutable collection.

use serde::{Deserialize, Serialize};

/// Coarse invalidation topics.
///
/// A publish on a topic means "rows in this collection changed"; no finer
/// granularity is carried. The read-only camp collection has no topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Children,
    ScheduledItems,
    Interests,
    Squads,
    Profile,
    Favorites,
}

impl Topic {
    pub const ALL: [Topic; 6] = [
        Topic::Children,
        Topic::ScheduledItems,
        Topic::Interests,
        Topic::Squads,
        Topic::Profile,
        Topic::Favorites,
    ];
}
