//! Page Controller
//!
//! Single owner of the document, clock, timers, preferences, and the three
//! animated subsystems. The embedder constructs it once at startup, then
//! feeds raw input events in arrival order and calls `tick` once per
//! rendering frame. There is no teardown: the continuous loops run for the
//! controller's lifetime.

use alloc::boxed::Box;
use alloc::vec::Vec;

use glint_dom::{Document, NodeId};

use crate::clock::{FrameClock, TimerQueue};
use crate::config::PageConfig;
use crate::counter::{CounterAnimator, COUNT_ATTR};
use crate::cursor::CursorEngine;
use crate::events::{MediaSnapshot, RawInputEvent};
use crate::i18n::{self, Language};
use crate::interactions;
use crate::observer::{Viewport, VisibilityObserver};
use crate::prefs::{PrefStore, Preferences};
use crate::theme::{self, Theme};

/// Id of the theme toggle switch.
pub const THEME_TOGGLE_ID: &str = "theme-toggle";

/// Element categories whose hover puts the cursor ring into its hovering
/// state: links, buttons, and these content classes.
const HOVER_TAGS: [&str; 2] = ["a", "button"];
const HOVER_CLASSES: [&str; 3] = ["card", "tag", "tab-button"];

/// The page interactivity controller.
pub struct PageController {
    doc: Document,
    config: PageConfig,
    media: MediaSnapshot,
    viewport: Viewport,
    clock: FrameClock,
    timers: TimerQueue,
    prefs: Preferences,
    observer: VisibilityObserver,
    counters: CounterAnimator,
    cursor: Option<CursorEngine>,
    /// Root element the theme class lands on.
    root_el: NodeId,
    /// One-shot gate: the counter batch runs at most once per page
    /// lifetime.
    counters_started: bool,
}

impl PageController {
    /// The single initialization routine: stamps the year, applies the
    /// persisted theme and language, registers observer targets, and starts
    /// the cursor engine when the host allows it.
    pub fn new(
        mut doc: Document,
        viewport: Viewport,
        config: PageConfig,
        media: MediaSnapshot,
        store: Box<dyn PrefStore>,
    ) -> Self {
        let prefs = Preferences::new(store);

        let root_el = doc
            .get_elements_by_tag_name("html")
            .first()
            .copied()
            .unwrap_or(doc.root());

        interactions::stamp_year(&mut doc, config.current_year);

        let toggle = doc.get_element_by_id(THEME_TOGGLE_ID);
        theme::apply_theme(&mut doc, prefs.theme(), root_el, toggle);
        i18n::apply_language(&mut doc, prefs.language());

        let targets = doc.get_elements_by_class_name(&config.reveal_class);
        let highlights = doc.get_element_by_id(&config.highlights_id);
        let observer = VisibilityObserver::new(
            targets,
            highlights,
            config.observer_bottom_margin_px,
            config.observer_threshold,
        );

        let cursor = if media.allows_cursor_engine() {
            CursorEngine::new(&doc, &config)
        } else {
            log::debug!("cursor engine disabled by media snapshot");
            None
        };

        let counters = CounterAnimator::new(config.counter_duration_ms);

        let mut controller = Self {
            doc,
            config,
            media,
            viewport,
            clock: FrameClock::new(),
            timers: TimerQueue::new(),
            prefs,
            observer,
            counters,
            cursor,
            root_el,
            counters_started: false,
        };

        if controller.media.allows_entrance_animation() {
            // Content already in the viewport reveals on the first batch
            if controller.observer.check(&mut controller.doc, &controller.viewport) {
                controller.start_counters();
            }
        } else {
            // Reduced motion: show everything immediately, no animation
            controller.observer.reveal_all(&mut controller.doc);
            controller.show_final_counts();
            controller.counters_started = true;
        }

        log::debug!(
            "page initialized: {} reveal targets, cursor {}",
            controller.observer.target_count(),
            if controller.cursor.is_some() { "on" } else { "off" },
        );
        controller
    }

    /// Process one raw input event.
    pub fn handle_event(&mut self, event: RawInputEvent) {
        let now = self.clock.now();
        match event {
            RawInputEvent::PointerMove { x, y } => {
                let hovering = self.hover_hit_test(x, y);
                if let Some(cursor) = self.cursor.as_mut() {
                    cursor.set_hovering(&mut self.doc, hovering);
                    cursor.pointer_moved(&mut self.doc, &mut self.timers, now, x, y);
                }
            }
            RawInputEvent::PointerDown { button, x, y } => {
                if let Some(cursor) = self.cursor.as_mut() {
                    cursor.pointer_down(&mut self.doc, &mut self.timers, now, button, x, y);
                }
            }
            RawInputEvent::PointerUp { button, .. } => {
                if let Some(cursor) = self.cursor.as_mut() {
                    cursor.pointer_up(&mut self.doc, button);
                }
            }
            RawInputEvent::PointerEnter => {
                if let Some(cursor) = self.cursor.as_mut() {
                    cursor.pointer_entered(&mut self.doc);
                }
            }
            RawInputEvent::PointerLeave => {
                if let Some(cursor) = self.cursor.as_mut() {
                    cursor.pointer_left(&mut self.doc);
                }
            }
            RawInputEvent::Scroll { y } => {
                self.viewport.scroll_y = y;
                interactions::update_scroll_state(&mut self.doc, y, &self.config);
                self.check_visibility();
            }
            RawInputEvent::Resize { width, height } => {
                self.viewport.width = width;
                self.viewport.height = height;
                self.check_visibility();
            }
            RawInputEvent::ImageError { node } => {
                interactions::image_fallback(&mut self.doc, node);
            }
        }
    }

    /// One rendering frame: fire due timers, then step the continuous
    /// loops. Call once per frame with the host timestamp.
    pub fn tick(&mut self, now_ms: u64) {
        self.clock.tick(now_ms);
        let now = self.clock.now();

        for action in self.timers.pop_due(now) {
            if let Some(cursor) = self.cursor.as_mut() {
                cursor.handle_timer(&mut self.doc, &mut self.timers, now, action);
            }
        }

        if let Some(cursor) = self.cursor.as_mut() {
            cursor.step(&mut self.doc);
        }
        if self.counters_started {
            self.counters.step(&mut self.doc, now);
        }
    }

    /// Toggle the mobile menu.
    pub fn toggle_menu(&mut self) {
        interactions::toggle_menu(&mut self.doc);
    }

    /// A nav link was selected: close the menu.
    pub fn select_nav_link(&mut self) {
        interactions::close_menu(&mut self.doc);
    }

    /// Switch the active tab.
    pub fn switch_tab(&mut self, tab: &str) {
        interactions::switch_tab(&mut self.doc, tab);
    }

    /// Flip the theme and persist the choice.
    pub fn toggle_theme(&mut self) {
        let next = self.prefs.theme().toggled();
        self.prefs.set_theme(next);
        let toggle = self.doc.get_element_by_id(THEME_TOGGLE_ID);
        theme::apply_theme(&mut self.doc, next, self.root_el, toggle);
    }

    /// Flip the language, persist it, and rewrite bilingual text.
    pub fn toggle_language(&mut self) {
        let next = self.prefs.language().toggled();
        self.prefs.set_language(next);
        i18n::apply_language(&mut self.doc, next);
    }

    /// Resolve an anchor fragment to its destination scroll offset.
    pub fn scroll_to_anchor(&self, fragment: &str) -> Option<f64> {
        interactions::resolve_anchor(&self.doc, fragment)
    }

    /// Current theme.
    pub fn theme(&self) -> Theme {
        self.prefs.theme()
    }

    /// Current language.
    pub fn language(&self) -> Language {
        self.prefs.language()
    }

    /// The document, for embedder reads.
    pub fn doc(&self) -> &Document {
        &self.doc
    }

    /// Mutable document access, for embedder layout updates.
    pub fn doc_mut(&mut self) -> &mut Document {
        &mut self.doc
    }

    /// Pending timer count (deterministic teardown checks in tests).
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Run a visibility batch against current geometry.
    pub fn check_visibility(&mut self) {
        if !self.media.allows_entrance_animation() {
            return;
        }
        if self.observer.check(&mut self.doc, &self.viewport) {
            self.start_counters();
        }
    }

    fn start_counters(&mut self) {
        if self.counters_started {
            return;
        }
        self.counters_started = true;
        let nodes = self.counter_nodes();
        let now = self.clock.now();
        self.counters.start(&mut self.doc, &nodes, now);
    }

    /// Reduced-motion path: skip the animation, show final values.
    fn show_final_counts(&mut self) {
        let nodes = self.counter_nodes();
        for node in nodes {
            let target = self
                .doc
                .get_attribute(node, COUNT_ATTR)
                .and_then(|v| v.trim().parse::<u64>().ok())
                .unwrap_or(0);
            self.doc.set_text(node, &alloc::format!("{}", target));
        }
    }

    fn counter_nodes(&self) -> Vec<NodeId> {
        self.doc
            .iter()
            .filter(|n| n.has_attribute(COUNT_ATTR))
            .map(|n| n.id)
            .collect()
    }

    /// Whether the pointer rests on a hover-interactive element.
    fn hover_hit_test(&self, x: f64, y: f64) -> bool {
        let page_x = x;
        let page_y = y + self.viewport.scroll_y;

        self.doc.iter().any(|n| {
            if !n.is_element() || !self.doc.is_attached(n.id) {
                return false;
            }
            let interactive = n
                .tag_name()
                .map(|t| HOVER_TAGS.contains(&t))
                .unwrap_or(false)
                || HOVER_CLASSES.iter().any(|c| n.has_class(c));
            if !interactive {
                return false;
            }
            self.doc
                .rect(n.id)
                .map(|r| r.contains(page_x, page_y))
                .unwrap_or(false)
        })
    }
}
