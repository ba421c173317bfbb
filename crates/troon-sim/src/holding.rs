//! `HoldingArea` — the queue of troons waiting to load onto a link.
//!
//! # Ordering
//!
//! Troons leave in order of arrival tick; ties go to the lower troon id.
//! Both keys are fixed once a troon is queued, so the area is a min-heap
//! keyed by `(arrived, id)` and the selection never depends on which thread
//! happened to push first.
//!
//! # Locking
//!
//! During the advance phase many links may hand troons to the same area at
//! once, so [`enqueue`](HoldingArea::enqueue) takes `&self` and locks for the
//! duration of one heap push.  Every other mutation (spawn, flush) happens in
//! phases where the caller owns the area exclusively and goes through
//! `Mutex::get_mut` without locking.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use troon_core::{Tick, TroonId};

use crate::Troon;

/// A troon together with the tick it joined the holding area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Waiting {
    pub arrived: Tick,
    pub troon:   Troon,
}

impl Waiting {
    #[inline]
    fn key(&self) -> (Tick, TroonId) {
        (self.arrived, self.troon.id)
    }
}

impl Ord for Waiting {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl PartialOrd for Waiting {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Troons that have reached a link but have not yet been selected to load.
#[derive(Debug, Default)]
pub struct HoldingArea {
    queue: Mutex<BinaryHeap<Reverse<Waiting>>>,
}

impl HoldingArea {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a troon handed over by another link.  Safe to call concurrently.
    pub fn enqueue(&self, tick: Tick, troon: Troon) {
        self.lock().push(Reverse(Waiting { arrived: tick, troon }));
    }

    /// Add a freshly spawned troon.
    pub fn spawn(&mut self, tick: Tick, troon: Troon) {
        self.queue_mut().push(Reverse(Waiting { arrived: tick, troon }));
    }

    /// Remove the earliest-arrived troon (lowest id on ties).
    pub fn pop_next(&mut self) -> Option<Waiting> {
        self.queue_mut().pop().map(|Reverse(w)| w)
    }

    /// Copy of every waiting troon, in no particular order.
    pub fn waiting(&self) -> Vec<Waiting> {
        self.lock().iter().map(|Reverse(w)| *w).collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // Poisoning is ignored: every critical section is a single heap op.
    fn lock(&self) -> MutexGuard<'_, BinaryHeap<Reverse<Waiting>>> {
        self.queue.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn queue_mut(&mut self) -> &mut BinaryHeap<Reverse<Waiting>> {
        self.queue.get_mut().unwrap_or_else(PoisonError::into_inner)
    }
}
