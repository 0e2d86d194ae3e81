//! `TimerQueue` — a sparse deadline → event map with cancellation.
//!
//! # Ordering
//!
//! Events fire in deadline order.  Ties break by scheduling order, because
//! the key is `(deadline, id)` and ids increase monotonically.
//!
//! # Performance note
//!
//! `BTreeMap` gives O(log n) insert, pop, and cancel.  The animation keeps
//! at most one pending event per driver, so n is tiny; the structure is
//! chosen for ordering and cancellation semantics, not throughput.

use std::collections::{BTreeMap, HashMap};

use pt_core::Millis;

/// Handle for one scheduled event.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct TimerId(pub u64);

impl std::fmt::Display for TimerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "timer-{}", self.0)
    }
}

/// A popped event together with the deadline it was scheduled for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Timer<E> {
    pub id:       TimerId,
    pub deadline: Millis,
    pub event:    E,
}

pub struct TimerQueue<E> {
    inner:     BTreeMap<(Millis, TimerId), E>,
    /// Reverse index so `cancel` does not need the deadline.
    deadlines: HashMap<TimerId, Millis>,
    next_id:   u64,
}

impl<E> Default for TimerQueue<E> {
    fn default() -> Self {
        Self {
            inner:     BTreeMap::new(),
            deadlines: HashMap::new(),
            next_id:   0,
        }
    }
}

impl<E> TimerQueue<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `event` to fire at `deadline`.
    pub fn schedule(&mut self, deadline: Millis, event: E) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        self.inner.insert((deadline, id), event);
        self.deadlines.insert(id, deadline);
        id
    }

    /// Cancel a pending event, returning it if it had not fired yet.
    pub fn cancel(&mut self, id: TimerId) -> Option<E> {
        let deadline = self.deadlines.remove(&id)?;
        self.inner.remove(&(deadline, id))
    }

    /// `true` if `id` is still waiting to fire.
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.deadlines.contains_key(&id)
    }

    /// Remove and return the earliest event with `deadline <= now`.
    ///
    /// Returns `None` when nothing is due yet.
    pub fn pop_due(&mut self, now: Millis) -> Option<Timer<E>> {
        let (&(deadline, id), _) = self.inner.first_key_value()?;
        if deadline > now {
            return None;
        }
        let event = self.inner.remove(&(deadline, id))?;
        self.deadlines.remove(&id);
        Some(Timer { id, deadline, event })
    }

    /// The earliest pending deadline, or `None` if empty.
    pub fn next_deadline(&self) -> Option<Millis> {
        self.inner.keys().next().map(|&(deadline, _)| deadline)
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
