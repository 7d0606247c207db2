//! Glint Page - Deterministic page-interactivity engine
//!
//! The interactivity layer of a portfolio-style page, reimagined as a
//! host-driven engine:
//! - cursor followers and sparkles (cursor)
//! - scroll-triggered entrance reveals (observer)
//! - count-up number animations (counter)
//! - menu/tab/scroll/theme/language wiring (interactions, theme, i18n)
//! - persisted preferences behind a storage seam (prefs)
//!
//! The embedder owns real time, layout, and raw input; it feeds events and
//! frame ticks to a [`PageController`], which mutates a
//! [`glint_dom::Document`] through a fixed class/ARIA contract (`active`,
//! `visible`, `scrolled`, `hovering`, `clicking`, `aria-expanded`,
//! `aria-label`, `aria-selected`, `aria-checked`).

#![no_std]

extern crate alloc;

pub mod clock;
pub mod config;
pub mod counter;
pub mod cursor;
pub mod events;
pub mod i18n;
pub mod interactions;
pub mod observer;
pub mod page;
pub mod prefs;
pub mod rand;
pub mod theme;

#[cfg(test)]
mod tests;

pub use clock::{FrameClock, TimerAction, TimerQueue};
pub use config::PageConfig;
pub use counter::CounterAnimator;
pub use cursor::CursorEngine;
pub use events::{MediaSnapshot, PointerButton, PointerKind, RawInputEvent};
pub use i18n::{apply_language, Language};
pub use observer::{Viewport, VisibilityObserver};
pub use page::PageController;
pub use prefs::{MemoryStore, PrefStore, Preferences, StoreError};
pub use theme::{apply_theme, Theme};

/// Initialize a controller over a document with default configuration.
pub fn init(
    doc: glint_dom::Document,
    viewport: Viewport,
    media: MediaSnapshot,
    store: alloc::boxed::Box<dyn PrefStore>,
) -> PageController {
    PageController::new(doc, viewport, PageConfig::default(), media, store)
}
