//! Counter Animator
//!
//! Each numeric-display element carrying a `data-count` target runs one
//! time-bounded count-up session with an ease-out-quartic curve. Sessions
//! are independent but the whole batch starts in the same tick and runs at
//! most once per page lifetime (the gate lives on the controller).

use alloc::format;
use alloc::vec::Vec;

use glint_dom::{Document, NodeId};

/// Attribute carrying the target integer.
pub const COUNT_ATTR: &str = "data-count";

/// Ease-out quartic: fast start, long settle.
fn ease_out_quart(progress: f64) -> f64 {
    let inv = 1.0 - progress;
    1.0 - inv * inv * inv * inv
}

/// One element's count-up run.
#[derive(Debug)]
struct CounterSession {
    node: NodeId,
    target: u64,
    start_ms: u64,
    done: bool,
}

/// Drives the count-up sessions.
#[derive(Debug)]
pub struct CounterAnimator {
    sessions: Vec<CounterSession>,
    duration_ms: u64,
}

impl CounterAnimator {
    /// Create an animator with the given session duration.
    pub fn new(duration_ms: u64) -> Self {
        Self {
            sessions: Vec::new(),
            duration_ms,
        }
    }

    /// Start one session per element, all anchored to the same start time.
    /// A missing or malformed target attribute counts as 0; the session
    /// still runs to completion.
    pub fn start(&mut self, doc: &mut Document, nodes: &[NodeId], now_ms: u64) {
        for &node in nodes {
            let target = doc
                .get_attribute(node, COUNT_ATTR)
                .and_then(|v| v.trim().parse::<u64>().ok())
                .unwrap_or(0);

            self.sessions.push(CounterSession {
                node,
                target,
                start_ms: now_ms,
                done: false,
            });
        }

        log::debug!("started {} counter sessions", self.sessions.len());

        // First frame shows 0 immediately
        self.step(doc, now_ms);
    }

    /// Advance every running session to `now_ms`, rewriting displayed text.
    pub fn step(&mut self, doc: &mut Document, now_ms: u64) {
        for session in self.sessions.iter_mut().filter(|s| !s.done) {
            let elapsed = now_ms.saturating_sub(session.start_ms);
            let progress = if elapsed >= self.duration_ms {
                1.0
            } else {
                elapsed as f64 / self.duration_ms as f64
            };

            let value = if progress >= 1.0 {
                // Force the exact target on the final frame; the floored
                // eased value can land one short under floating point.
                session.done = true;
                session.target
            } else {
                libm::floor(ease_out_quart(progress) * session.target as f64) as u64
            };

            doc.set_text(session.node, &format!("{}", value));
        }
    }

    /// Whether sessions have been started.
    pub fn is_started(&self) -> bool {
        !self.sessions.is_empty()
    }

    /// Whether every session has reached its target.
    pub fn is_finished(&self) -> bool {
        self.sessions.iter().all(|s| s.done)
    }
}
