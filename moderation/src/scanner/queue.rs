//! Ring buffer of live partial matches.
//!
//! # Invariants
//! - `head < slots.len()` and `len <= slots.len() <= limit`.
//! - The match at logical index `i` lives at `(head + i) % slots.len()`.
//!
//! The buffer starts at [`MATCH_QUEUE_CAPACITY`] slots and doubles when
//! full, up to `limit`. The dictionary sizes `limit` so that unique inserts
//! can never exceed it; overflow and underflow therefore mean the scan loop
//! is broken, not that the input is bad, so both are debug assertions only.

use crate::constants::MATCH_QUEUE_CAPACITY;
use crate::dictionary::NodeId;

/// One hypothesis about a word in progress: where it has reached in the
/// trie and how it got there.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActiveMatch {
    pub node: NodeId,
    /// Matchable characters consumed, including collapsed repeats.
    pub length: usize,
    /// A lookalike or censor mark contributed to this match.
    pub replaced: bool,
    /// The match began at the start of the text or right after a separator.
    pub separate: bool,
}

impl ActiveMatch {
    #[inline(always)]
    pub fn root(separate: bool) -> ActiveMatch {
        ActiveMatch {
            node: NodeId::ROOT,
            length: 0,
            replaced: false,
            separate,
        }
    }

    /// Equal in everything but length.
    #[inline(always)]
    pub fn same_state(&self, other: &ActiveMatch) -> bool {
        self.node == other.node && self.replaced == other.replaced && self.separate == other.separate
    }
}

pub struct MatchQueue {
    slots: Vec<ActiveMatch>,
    head: usize,
    len: usize,
    limit: usize,
}

impl MatchQueue {
    pub fn new(limit: usize) -> MatchQueue {
        let limit = limit.max(1);

        MatchQueue {
            slots: vec![ActiveMatch::default(); MATCH_QUEUE_CAPACITY.min(limit)],
            head: 0,
            len: 0,
            limit,
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Appends to the back.
    #[inline]
    pub fn push(&mut self, m: ActiveMatch) {
        if self.len == self.capacity() {
            self.grow();
        }

        let capacity = self.capacity();
        debug_assert!(self.len < capacity, "match queue overflow");

        let tail = (self.head + self.len) % capacity;
        self.slots[tail] = m;
        self.len = (self.len + 1).min(capacity);
    }

    /// Appends to the back unless an entry in the same state is queued.
    #[inline]
    pub fn push_unique(&mut self, m: ActiveMatch) {
        self.push_unique_after(m, 0);
    }

    /// Appends to the back unless an entry in the same state is queued at
    /// logical index `skip` or later.
    #[inline]
    pub fn push_unique_after(&mut self, m: ActiveMatch, skip: usize) {
        if !self.iter().skip(skip).any(|queued| queued.same_state(&m)) {
            self.push(m);
        }
    }

    /// Removes from the front.
    #[inline]
    pub fn pop(&mut self) -> ActiveMatch {
        debug_assert!(self.len > 0, "match queue underflow");

        let m = self.slots[self.head];
        self.head = (self.head + 1) % self.capacity();
        self.len = self.len.saturating_sub(1);
        m
    }

    pub fn clear(&mut self) {
        self.head = 0;
        self.len = 0;
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActiveMatch> + '_ {
        let capacity = self.capacity();
        (0..self.len).map(move |i| &self.slots[(self.head + i) % capacity])
    }

    fn grow(&mut self) {
        let capacity = (self.capacity() * 2).min(self.limit);
        if capacity == self.capacity() {
            return;
        }

        log::trace!("match queue grows to {} slots", capacity);

        let mut slots = self.iter().copied().collect::<Vec<_>>();
        slots.resize(capacity, ActiveMatch::default());
        self.slots = slots;
        self.head = 0;
    }
}
