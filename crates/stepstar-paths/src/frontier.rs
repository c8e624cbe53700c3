//! Open/closed set bookkeeping.
//!
//! Membership is an index-addressed array, so containment checks are O(1).
//! Selection order comes from a min-heap keyed by `(f, seq)`: lower `f`
//! first, and among equal `f` the entry queued earliest (lowest `seq`).
//! A node whose score improves is queued again with a fresh `seq`; the
//! superseded entry is dropped when it reaches the top of the heap.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use stepstar_core::NodeId;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Membership {
    Unseen,
    Open,
    Closed,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Entry {
    f: i32,
    seq: u64,
    id: NodeId,
}

pub(crate) struct Frontier {
    heap: BinaryHeap<Reverse<Entry>>,
    membership: Vec<Membership>,
    /// Sequence number of the live heap entry for each open node.
    live_seq: Vec<u64>,
    seq: u64,
    open_len: usize,
    closed_len: usize,
}

impl Frontier {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            heap: BinaryHeap::new(),
            membership: vec![Membership::Unseen; len],
            live_seq: vec![0; len],
            seq: 0,
            open_len: 0,
            closed_len: 0,
        }
    }

    /// Forget everything and resize for a grid of `len` cells.
    pub(crate) fn reset(&mut self, len: usize) {
        self.heap.clear();
        self.membership.clear();
        self.membership.resize(len, Membership::Unseen);
        self.live_seq.clear();
        self.live_seq.resize(len, 0);
        self.seq = 0;
        self.open_len = 0;
        self.closed_len = 0;
    }

    #[inline]
    pub(crate) fn is_open(&self, id: NodeId) -> bool {
        self.membership[id.index()] == Membership::Open
    }

    #[inline]
    pub(crate) fn is_closed(&self, id: NodeId) -> bool {
        self.membership[id.index()] == Membership::Closed
    }

    #[inline]
    pub(crate) fn open_len(&self) -> usize {
        self.open_len
    }

    #[inline]
    pub(crate) fn closed_len(&self) -> usize {
        self.closed_len
    }

    /// Add `id` to the open set with priority `f`, or requeue it if it is
    /// already open. Closed nodes are never reopened.
    pub(crate) fn push(&mut self, id: NodeId, f: i32) {
        let i = id.index();
        match self.membership[i] {
            Membership::Closed => return,
            Membership::Unseen => {
                self.membership[i] = Membership::Open;
                self.open_len += 1;
            }
            Membership::Open => {}
        }
        let seq = self.seq;
        self.seq += 1;
        self.live_seq[i] = seq;
        self.heap.push(Reverse(Entry { f, seq, id }));
    }

    /// The open node with the lowest `(f, seq)`, discarding stale entries.
    pub(crate) fn peek_min(&mut self) -> Option<NodeId> {
        while let Some(Reverse(top)) = self.heap.peek().copied() {
            let i = top.id.index();
            if self.membership[i] == Membership::Open && self.live_seq[i] == top.seq {
                return Some(top.id);
            }
            self.heap.pop();
        }
        None
    }

    /// Move the current minimum from the open set to the closed set.
    pub(crate) fn close_min(&mut self) -> Option<NodeId> {
        let id = self.peek_min()?;
        self.heap.pop();
        self.membership[id.index()] = Membership::Closed;
        self.open_len -= 1;
        self.closed_len += 1;
        Some(id)
    }
}
