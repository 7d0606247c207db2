//! Cursor Motion Engine
//!
//! Three followers chase the live pointer position with exponential
//! smoothing, stepped once per rendering frame. The smoothing is
//! deliberately frame-coupled rather than time-delta-based: a higher host
//! refresh rate converges faster, matching the production behavior.
//!
//! Sparkles are short-lived decorative nodes: one ambient sparkle per five
//! raw pointer moves, plus a staggered burst of five on primary-button
//! press. Each sparkle is removed by its own fire-and-forget timer.
//!
//! The engine is never constructed on coarse-pointer or reduced-motion
//! hosts; that decision is taken once at startup from the media snapshot.

use alloc::format;

use glint_dom::{Document, NodeId};

use crate::clock::{TimerAction, TimerQueue};
use crate::config::PageConfig;
use crate::events::PointerButton;
use crate::rand::XorShift64Star;

/// Follower visibility class.
pub const ACTIVE_CLASS: &str = "active";
/// Ring state while over an interactive element.
pub const HOVERING_CLASS: &str = "hovering";
/// Dot state while the primary button is held.
pub const CLICKING_CLASS: &str = "clicking";
/// Base sparkle class.
pub const SPARKLE_CLASS: &str = "sparkle";
/// The two sparkle color variants.
pub const SPARKLE_VARIANTS: [&str; 2] = ["sparkle-mint", "sparkle-rose"];

/// Element id of the glow follower.
pub const GLOW_ID: &str = "cursor-glow";
/// Element id of the dot follower.
pub const DOT_ID: &str = "cursor-dot";
/// Element id of the ring follower.
pub const RING_ID: &str = "cursor-ring";

/// A visual element smoothed toward the pointer.
#[derive(Debug)]
struct Follower {
    node: NodeId,
    x: f64,
    y: f64,
    /// Fixed per follower; fraction of the remaining distance covered per
    /// frame.
    smoothing: f64,
}

impl Follower {
    fn new(node: NodeId, smoothing: f64) -> Self {
        Self {
            node,
            x: 0.0,
            y: 0.0,
            smoothing,
        }
    }

    /// One frame of exponential interpolation toward the target.
    fn step(&mut self, target_x: f64, target_y: f64) {
        self.x += (target_x - self.x) * self.smoothing;
        self.y += (target_y - self.y) * self.smoothing;
    }

    /// Write the current position back to the element.
    fn write_transform(&self, doc: &mut Document) {
        let style = format!(
            "transform: translate3d({}px, {}px, 0)",
            self.x, self.y
        );
        doc.set_attribute(self.node, "style", &style);
    }
}

/// The cursor engine: follower loop plus sparkle spawning.
pub struct CursorEngine {
    glow: Follower,
    dot: Follower,
    ring: Follower,
    /// Parent for spawned sparkle nodes.
    sparkle_parent: NodeId,
    /// Ground-truth pointer position, updated on every raw move.
    pointer_x: f64,
    pointer_y: f64,
    /// idle until the pointer has moved at least once.
    started: bool,
    /// Raw move counter for the ambient sparkle throttle.
    move_count: u32,
    rng: XorShift64Star,
    lifetime_ms: u64,
    move_interval: u32,
    burst_count: u32,
    burst_stagger_ms: u64,
    burst_jitter_px: f64,
}

impl CursorEngine {
    /// Build the engine from the follower elements in the document.
    /// Returns None when any follower is missing; the page then simply has
    /// no custom cursor.
    pub fn new(doc: &Document, config: &PageConfig) -> Option<Self> {
        let glow = doc.get_element_by_id(GLOW_ID)?;
        let dot = doc.get_element_by_id(DOT_ID)?;
        let ring = doc.get_element_by_id(RING_ID)?;

        let sparkle_parent = doc
            .get_elements_by_tag_name("body")
            .first()
            .copied()
            .unwrap_or(doc.root());

        Some(Self {
            glow: Follower::new(glow, config.follower_smoothing),
            dot: Follower::new(dot, config.follower_smoothing),
            ring: Follower::new(ring, config.ring_smoothing),
            sparkle_parent,
            pointer_x: 0.0,
            pointer_y: 0.0,
            started: false,
            move_count: 0,
            rng: XorShift64Star::with_seed(config.rng_seed),
            lifetime_ms: config.sparkle_lifetime_ms,
            move_interval: config.sparkle_move_interval,
            burst_count: config.burst_count,
            burst_stagger_ms: config.burst_stagger_ms,
            burst_jitter_px: config.burst_jitter_px,
        })
    }

    /// Raw pointer move: update ground truth, activate on first movement,
    /// and feed the ambient sparkle throttle.
    pub fn pointer_moved(
        &mut self,
        doc: &mut Document,
        timers: &mut TimerQueue,
        now_ms: u64,
        x: f64,
        y: f64,
    ) {
        self.pointer_x = x;
        self.pointer_y = y;

        if !self.started {
            self.started = true;
            self.set_followers_active(doc, true);
            log::debug!("cursor engine active");
        }

        self.move_count += 1;
        if self.move_interval > 0 && self.move_count % self.move_interval == 0 {
            self.spawn_sparkle(doc, timers, now_ms, x, y);
        }
    }

    /// Primary-button press: mark the dot clicking and schedule the burst.
    pub fn pointer_down(
        &mut self,
        doc: &mut Document,
        timers: &mut TimerQueue,
        now_ms: u64,
        button: PointerButton,
        x: f64,
        y: f64,
    ) {
        if button != PointerButton::Primary {
            return;
        }
        doc.add_class(self.dot.node, CLICKING_CLASS);

        for i in 0..self.burst_count as u64 {
            timers.schedule(
                now_ms + i * self.burst_stagger_ms,
                TimerAction::BurstSparkle { x, y },
            );
        }
    }

    /// Primary-button release clears the clicking state.
    pub fn pointer_up(&mut self, doc: &mut Document, button: PointerButton) {
        if button == PointerButton::Primary {
            doc.remove_class(self.dot.node, CLICKING_CLASS);
        }
    }

    /// Pointer entered the viewport: show all followers.
    pub fn pointer_entered(&mut self, doc: &mut Document) {
        self.set_followers_active(doc, true);
    }

    /// Pointer left the viewport: hide all followers.
    pub fn pointer_left(&mut self, doc: &mut Document) {
        self.set_followers_active(doc, false);
    }

    /// Ring hover state, driven by the controller's hit test.
    pub fn set_hovering(&mut self, doc: &mut Document, hovering: bool) {
        doc.set_class(self.ring.node, HOVERING_CLASS, hovering);
    }

    /// One frame of the continuous follower loop.
    pub fn step(&mut self, doc: &mut Document) {
        self.glow.step(self.pointer_x, self.pointer_y);
        self.dot.step(self.pointer_x, self.pointer_y);
        self.ring.step(self.pointer_x, self.pointer_y);

        self.glow.write_transform(doc);
        self.dot.write_transform(doc);
        self.ring.write_transform(doc);
    }

    /// Handle a fired timer action.
    pub fn handle_timer(
        &mut self,
        doc: &mut Document,
        timers: &mut TimerQueue,
        now_ms: u64,
        action: TimerAction,
    ) {
        match action {
            TimerAction::RemoveSparkle(node) => {
                // Idempotent: removing an already-detached node is a no-op
                doc.remove_child(node);
            }
            TimerAction::BurstSparkle { x, y } => {
                let jx = x + self.rng.jitter(self.burst_jitter_px);
                let jy = y + self.rng.jitter(self.burst_jitter_px);
                self.spawn_sparkle(doc, timers, now_ms, jx, jy);
            }
        }
    }

    /// Current smoothed dot position (for tests and debug overlays).
    pub fn dot_position(&self) -> (f64, f64) {
        (self.dot.x, self.dot.y)
    }

    /// Current smoothed ring position.
    pub fn ring_position(&self) -> (f64, f64) {
        (self.ring.x, self.ring.y)
    }

    /// Current smoothed glow position.
    pub fn glow_position(&self) -> (f64, f64) {
        (self.glow.x, self.glow.y)
    }

    fn set_followers_active(&mut self, doc: &mut Document, active: bool) {
        doc.set_class(self.glow.node, ACTIVE_CLASS, active);
        doc.set_class(self.dot.node, ACTIVE_CLASS, active);
        doc.set_class(self.ring.node, ACTIVE_CLASS, active);
    }

    /// Create one sparkle node at a position and schedule its removal
    /// exactly one lifetime later.
    fn spawn_sparkle(
        &mut self,
        doc: &mut Document,
        timers: &mut TimerQueue,
        now_ms: u64,
        x: f64,
        y: f64,
    ) {
        let variant = SPARKLE_VARIANTS[if self.rng.flip() { 0 } else { 1 }];

        let sparkle = doc.create_element("div");
        doc.set_attribute(sparkle, "class", &format!("{} {}", SPARKLE_CLASS, variant));
        doc.set_attribute(sparkle, "style", &format!("left: {}px; top: {}px", x, y));
        doc.append_child(self.sparkle_parent, sparkle);

        timers.schedule(now_ms + self.lifetime_ms, TimerAction::RemoveSparkle(sparkle));
        log::trace!("sparkle {} spawned at ({}, {})", sparkle, x, y);
    }
}
