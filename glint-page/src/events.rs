//! Raw Input Events
//!
//! The embedder translates whatever host events it receives into this small
//! raw vocabulary and feeds them to the controller in arrival order. The
//! engine never talks to the host input layer directly.

use glint_dom::NodeId;

/// Pointer button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary = 0,
    Auxiliary = 1,
    Secondary = 2,
}

/// Pointer device precision class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    /// Mouse, trackpad, stylus.
    Fine,
    /// Touch.
    Coarse,
}

/// Host capabilities captured once at startup.
///
/// Deliberately a snapshot, not a live subscription: the original behavior
/// evaluates touch and reduced-motion detection at init only.
#[derive(Debug, Clone, Copy)]
pub struct MediaSnapshot {
    /// Primary pointer precision.
    pub pointer: PointerKind,
    /// User prefers reduced motion.
    pub reduced_motion: bool,
}

impl MediaSnapshot {
    /// Snapshot for a fine pointer with no motion restriction.
    pub fn desktop() -> Self {
        Self {
            pointer: PointerKind::Fine,
            reduced_motion: false,
        }
    }

    /// Whether the cursor motion engine may run at all.
    pub fn allows_cursor_engine(&self) -> bool {
        self.pointer == PointerKind::Fine && !self.reduced_motion
    }

    /// Whether entrance animations may run (otherwise everything is shown
    /// immediately).
    pub fn allows_entrance_animation(&self) -> bool {
        !self.reduced_motion
    }
}

/// A raw input event from the embedder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawInputEvent {
    /// Pointer moved to viewport coordinates.
    PointerMove { x: f64, y: f64 },
    /// Pointer button pressed.
    PointerDown { button: PointerButton, x: f64, y: f64 },
    /// Pointer button released.
    PointerUp { button: PointerButton, x: f64, y: f64 },
    /// Pointer entered the viewport.
    PointerEnter,
    /// Pointer left the viewport.
    PointerLeave,
    /// Page scrolled to a new vertical offset.
    Scroll { y: f64 },
    /// Viewport resized.
    Resize { width: f64, height: f64 },
    /// An image element failed to load.
    ImageError { node: NodeId },
}
