//! `PrintLedger` — the bounded, insertion-ordered print collection.
//!
//! Appends go to the back, capacity eviction and age pruning both take from
//! the front, so a `VecDeque` keeps every operation amortized O(1) per print.
//! Because prints are appended with non-decreasing `created_at`, the oldest
//! print is always at the front; pruning still scans the whole deque so the
//! result does not depend on that ordering holding.

use std::collections::VecDeque;

use pt_core::{IdCounter, Millis, PrintId};
use tracing::trace;

use crate::Print;

pub struct PrintLedger {
    prints:   VecDeque<Print>,
    capacity: usize,
    ids:      IdCounter,
}

impl PrintLedger {
    /// An empty ledger holding at most `capacity` prints.  A capacity of zero
    /// is treated as one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            prints: VecDeque::with_capacity(capacity + 1),
            capacity,
            ids: IdCounter::new(),
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.prints.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.prints.is_empty()
    }

    /// Next global print id.  Ids keep increasing across evictions.
    pub fn mint_id(&mut self) -> PrintId {
        self.ids.mint()
    }

    /// Prints in creation order, oldest first.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Print> + '_ {
        self.prints.iter()
    }

    pub fn newest(&self) -> Option<&Print> {
        self.prints.back()
    }

    pub fn oldest(&self) -> Option<&Print> {
        self.prints.front()
    }

    /// Append `print`, evicting the oldest entries while over capacity.
    ///
    /// Returns how many prints were evicted.
    pub fn append(&mut self, print: Print) -> usize {
        self.prints.push_back(print);
        let mut evicted = 0;
        while self.prints.len() > self.capacity {
            if let Some(old) = self.prints.pop_front() {
                trace!(print = %old.id, "print evicted at capacity");
                evicted += 1;
            }
        }
        evicted
    }

    /// Remove every print whose age at `now` is at least `max_age_ms`.
    /// Survivors keep their relative order.  Returns the number removed.
    pub fn prune_older_than(&mut self, now: Millis, max_age_ms: u64) -> usize {
        let before = self.prints.len();
        self.prints.retain(|p| !p.is_expired(now, max_age_ms));
        before - self.prints.len()
    }

    /// How many prints are fading at `now`.
    pub fn fading_count(&self, now: Millis, fade_after_ms: u64) -> usize {
        self.prints.iter().filter(|p| p.is_fading(now, fade_after_ms)).count()
    }
}
