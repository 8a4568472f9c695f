//! Bounded LIFO stack with an explicit overflow policy.
//!
//! Backed by an `im::Vector` so pushes and pops at either end are cheap and
//! cloning a whole stack is O(1).

use im::Vector;

use crate::core::OverflowPolicy;

/// What happened to a push.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PushOutcome<T> {
    /// The value is now on top.
    Pushed,
    /// The stack was full under `DropNewest`; the value was discarded.
    Dropped(T),
    /// The stack was full under `EvictOldest`; the bottom entry was discarded
    /// and the value is now on top.
    Evicted(T),
}

/// Stack that never holds more than `capacity` entries.
#[derive(Clone, Debug)]
pub struct BoundedStack<T: Clone> {
    items: Vector<T>,
    capacity: usize,
    policy: OverflowPolicy,
}

impl<T: Clone> BoundedStack<T> {
    #[must_use]
    pub fn new(capacity: usize, policy: OverflowPolicy) -> Self {
        Self {
            items: Vector::new(),
            capacity,
            policy,
        }
    }

    /// Push onto the top, applying the overflow policy when full.
    pub fn push(&mut self, value: T) -> PushOutcome<T> {
        if self.items.len() < self.capacity {
            self.items.push_back(value);
            return PushOutcome::Pushed;
        }
        match self.policy {
            OverflowPolicy::DropNewest => PushOutcome::Dropped(value),
            OverflowPolicy::EvictOldest => match self.items.pop_front() {
                Some(oldest) => {
                    self.items.push_back(value);
                    PushOutcome::Evicted(oldest)
                }
                // Zero capacity: nothing to evict, nowhere to put it.
                None => PushOutcome::Dropped(value),
            },
        }
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop_back()
    }

    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.items.back()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn policy(&self) -> OverflowPolicy {
        self.policy
    }

    /// Entries from bottom (oldest) to top (newest).
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}
