//! Frame Clock and Timer Queue
//!
//! The embedder owns real time and pushes it in once per rendering frame.
//! Continuous loops (cursor followers, counter sessions) are stepped once
//! per tick; deferred work goes through the timer queue as fire-and-forget
//! actions. Nothing here blocks and nothing is cancellable: sparkle removal
//! is idempotent, so a timer that outlives its node is harmless.

use alloc::vec::Vec;

use glint_dom::NodeId;

/// Caller-advanced millisecond clock.
#[derive(Debug, Default)]
pub struct FrameClock {
    now_ms: u64,
}

impl FrameClock {
    /// Create a clock at time zero.
    pub fn new() -> Self {
        Self { now_ms: 0 }
    }

    /// Advance to a new timestamp. Time never moves backward.
    pub fn tick(&mut self, now_ms: u64) {
        if now_ms > self.now_ms {
            self.now_ms = now_ms;
        }
    }

    /// Current timestamp in milliseconds.
    pub fn now(&self) -> u64 {
        self.now_ms
    }
}

/// A deferred engine action.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimerAction {
    /// Remove a sparkle element from the tree.
    RemoveSparkle(NodeId),
    /// Spawn one click-burst sparkle near the given pointer position.
    BurstSparkle { x: f64, y: f64 },
}

/// One scheduled action.
#[derive(Debug, Clone, Copy)]
struct TimerEntry {
    deadline_ms: u64,
    /// Insertion order, used to break deadline ties.
    seq: u64,
    action: TimerAction,
}

/// Fire-and-forget timer queue.
///
/// No cancellation handles are handed out; the only observability beyond
/// firing is `len`, which tests use to assert drain-to-empty teardown.
#[derive(Debug, Default)]
pub struct TimerQueue {
    entries: Vec<TimerEntry>,
    next_seq: u64,
}

impl TimerQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_seq: 0,
        }
    }

    /// Schedule an action at an absolute deadline.
    pub fn schedule(&mut self, deadline_ms: u64, action: TimerAction) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(TimerEntry {
            deadline_ms,
            seq,
            action,
        });
    }

    /// Remove and return every action due at `now_ms`, ordered by deadline
    /// then insertion order.
    pub fn pop_due(&mut self, now_ms: u64) -> Vec<TimerAction> {
        let mut due: Vec<TimerEntry> = Vec::new();
        let mut i = 0;
        while i < self.entries.len() {
            if self.entries[i].deadline_ms <= now_ms {
                due.push(self.entries.swap_remove(i));
            } else {
                i += 1;
            }
        }
        due.sort_by_key(|e| (e.deadline_ms, e.seq));
        due.into_iter().map(|e| e.action).collect()
    }

    /// Number of pending timers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no timers are pending.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
