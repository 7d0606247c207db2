//! Page Integration Tests
//!
//! End-to-end tests driving a representative portfolio document through the
//! controller: raw events in, class/text mutations out, with time advanced
//! in simulated frames.

use alloc::boxed::Box;
use alloc::vec::Vec;

use glint_dom::{Document, NodeId, Rect};

use crate::config::PageConfig;
use crate::cursor::{DOT_ID, GLOW_ID, RING_ID, SPARKLE_CLASS};
use crate::events::{MediaSnapshot, PointerButton, PointerKind, RawInputEvent};
use crate::observer::Viewport;
use crate::page::{PageController, THEME_TOGGLE_ID};
use crate::prefs::MemoryStore;
use crate::theme::{Theme, LIGHT_THEME_CLASS};

/// Build a document shaped like the production page: navbar, cursor
/// followers, reveal sections, highlight stats, tabs, a hoverable card.
fn portfolio_doc() -> Document {
    let mut doc = Document::new();
    let html = doc.create_element("html");
    doc.append_child(doc.root(), html);
    let body = doc.create_element("body");
    doc.append_child(html, body);

    let navbar = doc.create_element("nav");
    doc.set_attribute(navbar, "id", "navbar");
    doc.append_child(body, navbar);

    let toggle = doc.create_element("button");
    doc.set_attribute(toggle, "id", "nav-toggle");
    doc.set_attribute(toggle, "aria-expanded", "false");
    doc.append_child(navbar, toggle);

    let menu = doc.create_element("ul");
    doc.set_attribute(menu, "id", "nav-menu");
    doc.append_child(navbar, menu);

    let theme_toggle = doc.create_element("button");
    doc.set_attribute(theme_toggle, "id", THEME_TOGGLE_ID);
    doc.set_attribute(theme_toggle, "role", "switch");
    doc.append_child(navbar, theme_toggle);

    for id in [GLOW_ID, DOT_ID, RING_ID] {
        let el = doc.create_element("div");
        doc.set_attribute(el, "id", id);
        doc.append_child(body, el);
    }

    // Hero section, in view at load
    let hero = doc.create_element("section");
    doc.set_attribute(hero, "class", "reveal");
    doc.set_rect(hero, Rect::new(0.0, 50.0, 800.0, 400.0));
    doc.append_child(body, hero);

    let greeting = doc.create_element("h1");
    doc.set_attribute(greeting, "data-en", "Hi, I build things");
    doc.set_attribute(greeting, "data-de", "Hallo, ich baue Dinge");
    doc.set_text(greeting, "Hi, I build things");
    doc.append_child(hero, greeting);

    // Highlights section with stat counters, below the fold
    let highlights = doc.create_element("section");
    doc.set_attribute(highlights, "id", "highlights");
    doc.set_attribute(highlights, "class", "reveal");
    doc.set_rect(highlights, Rect::new(0.0, 1000.0, 800.0, 300.0));
    doc.append_child(body, highlights);

    for count in ["100", "42"] {
        let stat = doc.create_element("span");
        doc.set_attribute(stat, "class", "stat-number");
        doc.set_attribute(stat, "data-count", count);
        doc.set_text(stat, "0");
        doc.append_child(highlights, stat);
    }

    // Hoverable project card, below the highlights
    let card = doc.create_element("article");
    doc.set_attribute(card, "class", "card reveal");
    doc.set_rect(card, Rect::new(100.0, 1400.0, 600.0, 200.0));
    doc.append_child(body, card);

    let year = doc.create_element("span");
    doc.set_attribute(year, "id", "year");
    doc.append_child(body, year);

    doc
}

fn controller_with(media: MediaSnapshot) -> PageController {
    PageController::new(
        portfolio_doc(),
        Viewport::new(800.0, 600.0),
        PageConfig::default(),
        media,
        Box::new(MemoryStore::new()),
    )
}

fn controller() -> PageController {
    controller_with(MediaSnapshot::desktop())
}

fn attached_sparkles(ctl: &PageController) -> Vec<NodeId> {
    ctl.doc()
        .get_elements_by_class_name(SPARKLE_CLASS)
        .into_iter()
        .filter(|&n| ctl.doc().is_attached(n))
        .collect()
}

fn stat_values(ctl: &PageController) -> Vec<u64> {
    ctl.doc()
        .get_elements_by_class_name("stat-number")
        .into_iter()
        .map(|n| ctl.doc().text_content(n).parse().unwrap())
        .collect()
}

mod init_tests {
    use super::*;

    #[test]
    fn test_init_stamps_year_and_defaults() {
        let ctl = controller();
        let year = ctl.doc().get_element_by_id("year").unwrap();
        assert_eq!(ctl.doc().text_content(year), "2026");

        // Dark by default: no light class, switch unchecked
        let html = ctl.doc().get_elements_by_tag_name("html")[0];
        assert!(!ctl.doc().has_class(html, LIGHT_THEME_CLASS));
        assert_eq!(ctl.theme(), Theme::Dark);
    }

    #[test]
    fn test_init_reveals_above_fold_content_only() {
        let ctl = controller();
        let doc = ctl.doc();
        let hero = doc.get_elements_by_class_name("reveal")[0];
        let highlights = doc.get_element_by_id("highlights").unwrap();

        assert!(doc.has_class(hero, "visible"));
        assert!(!doc.has_class(highlights, "visible"));
        // Counters untouched until the highlights reveal
        assert_eq!(stat_values(&ctl), alloc::vec![0, 0]);
    }

    #[test]
    fn test_persisted_light_theme_applied_at_init() {
        let mut store = MemoryStore::new();
        crate::prefs::PrefStore::set(&mut store, "theme", "light").unwrap();
        let ctl = PageController::new(
            portfolio_doc(),
            Viewport::new(800.0, 600.0),
            PageConfig::default(),
            MediaSnapshot::desktop(),
            Box::new(store),
        );

        let html = ctl.doc().get_elements_by_tag_name("html")[0];
        assert!(ctl.doc().has_class(html, LIGHT_THEME_CLASS));
        let toggle = ctl.doc().get_element_by_id(THEME_TOGGLE_ID).unwrap();
        assert_eq!(ctl.doc().get_attribute(toggle, "aria-checked"), Some("true"));
    }

    #[test]
    fn test_persisted_language_applied_at_init() {
        let mut store = MemoryStore::new();
        crate::prefs::PrefStore::set(&mut store, "language", "de").unwrap();
        let ctl = PageController::new(
            portfolio_doc(),
            Viewport::new(800.0, 600.0),
            PageConfig::default(),
            MediaSnapshot::desktop(),
            Box::new(store),
        );

        let h1 = ctl.doc().get_elements_by_tag_name("h1")[0];
        assert_eq!(ctl.doc().text_content(h1), "Hallo, ich baue Dinge");
    }
}

mod reveal_and_counter_tests {
    use super::*;

    #[test]
    fn test_scroll_reveals_and_runs_counters_to_exact_targets() {
        let mut ctl = controller();
        ctl.tick(0);

        ctl.handle_event(RawInputEvent::Scroll { y: 700.0 });
        let highlights = ctl.doc().get_element_by_id("highlights").unwrap();
        assert!(ctl.doc().has_class(highlights, "visible"));

        // Full 2000 ms of 16 ms frames
        let mut t = 0;
        while t < 2100 {
            t += 16;
            ctl.tick(t);
        }

        assert_eq!(stat_values(&ctl), alloc::vec![100, 42]);
    }

    #[test]
    fn test_counters_run_once_per_page_lifetime() {
        let mut ctl = controller();
        ctl.tick(0);
        ctl.handle_event(RawInputEvent::Scroll { y: 700.0 });
        let mut t = 0;
        while t < 2100 {
            t += 16;
            ctl.tick(t);
        }

        // Out of view and back in: values must not restart from 0
        ctl.handle_event(RawInputEvent::Scroll { y: 0.0 });
        ctl.handle_event(RawInputEvent::Scroll { y: 700.0 });
        ctl.tick(t + 16);
        assert_eq!(stat_values(&ctl), alloc::vec![100, 42]);
    }

    #[test]
    fn test_navbar_and_back_to_top_track_scroll() {
        let mut ctl = controller();
        let navbar = ctl.doc().get_element_by_id("navbar").unwrap();

        ctl.handle_event(RawInputEvent::Scroll { y: 400.0 });
        assert!(ctl.doc().has_class(navbar, "scrolled"));

        ctl.handle_event(RawInputEvent::Scroll { y: 0.0 });
        assert!(!ctl.doc().has_class(navbar, "scrolled"));
    }

    #[test]
    fn test_anchor_resolution_through_controller() {
        let ctl = controller();
        assert_eq!(ctl.scroll_to_anchor("#highlights"), Some(1000.0));
        assert_eq!(ctl.scroll_to_anchor("#nowhere"), None);
    }
}

mod cursor_pipeline_tests {
    use super::*;

    #[test]
    fn test_followers_converge_through_ticks() {
        let mut ctl = controller();
        ctl.handle_event(RawInputEvent::PointerMove { x: 320.0, y: 240.0 });

        // Frame-coupled smoothing: repeated ticks at any cadence converge
        for i in 0..400 {
            ctl.tick(i * 16);
        }

        let dot = ctl.doc().get_element_by_id(DOT_ID).unwrap();
        let style = ctl.doc().get_attribute(dot, "style").unwrap();
        assert!(style.contains("translate3d(3"), "unexpected style {}", style);
    }

    #[test]
    fn test_ambient_sparkles_spawn_and_expire() {
        let mut ctl = controller();
        ctl.tick(100);
        for i in 0..15 {
            ctl.handle_event(RawInputEvent::PointerMove {
                x: i as f64,
                y: 0.0,
            });
        }
        assert_eq!(attached_sparkles(&ctl).len(), 3);
        assert_eq!(ctl.pending_timers(), 3);

        ctl.tick(699);
        assert_eq!(attached_sparkles(&ctl).len(), 3);

        ctl.tick(700);
        assert_eq!(attached_sparkles(&ctl).len(), 0);
        assert_eq!(ctl.pending_timers(), 0);
    }

    #[test]
    fn test_click_burst_through_ticks() {
        let mut ctl = controller();
        ctl.tick(1000);
        ctl.handle_event(RawInputEvent::PointerDown {
            button: PointerButton::Primary,
            x: 200.0,
            y: 150.0,
        });

        ctl.tick(1120);
        assert_eq!(attached_sparkles(&ctl).len(), 5);

        // Every burst sparkle expires on its own 600 ms timer
        ctl.tick(1000 + 120 + 600);
        assert_eq!(attached_sparkles(&ctl).len(), 0);
        assert_eq!(ctl.pending_timers(), 0);
    }

    #[test]
    fn test_hover_over_card_sets_ring_state() {
        let mut ctl = controller();
        ctl.handle_event(RawInputEvent::Scroll { y: 1300.0 });
        let ring = ctl.doc().get_element_by_id(RING_ID).unwrap();

        // Card spans page y 1400..1600; viewport y = page y - 1300
        ctl.handle_event(RawInputEvent::PointerMove { x: 400.0, y: 150.0 });
        assert!(ctl.doc().has_class(ring, "hovering"));

        ctl.handle_event(RawInputEvent::PointerMove { x: 10.0, y: 10.0 });
        assert!(!ctl.doc().has_class(ring, "hovering"));
    }

    #[test]
    fn test_pointer_leave_hides_followers() {
        let mut ctl = controller();
        ctl.handle_event(RawInputEvent::PointerMove { x: 5.0, y: 5.0 });
        let dot = ctl.doc().get_element_by_id(DOT_ID).unwrap();
        assert!(ctl.doc().has_class(dot, "active"));

        ctl.handle_event(RawInputEvent::PointerLeave);
        assert!(!ctl.doc().has_class(dot, "active"));
        ctl.handle_event(RawInputEvent::PointerEnter);
        assert!(ctl.doc().has_class(dot, "active"));
    }
}

mod media_policy_tests {
    use super::*;

    #[test]
    fn test_coarse_pointer_disables_cursor_engine() {
        let mut ctl = controller_with(MediaSnapshot {
            pointer: PointerKind::Coarse,
            reduced_motion: false,
        });

        for i in 0..25 {
            ctl.handle_event(RawInputEvent::PointerMove {
                x: i as f64,
                y: 0.0,
            });
        }
        ctl.tick(100);
        assert!(attached_sparkles(&ctl).is_empty());

        let dot = ctl.doc().get_element_by_id(DOT_ID).unwrap();
        assert!(!ctl.doc().has_class(dot, "active"));
    }

    #[test]
    fn test_reduced_motion_shows_everything_immediately() {
        let ctl = controller_with(MediaSnapshot {
            pointer: PointerKind::Fine,
            reduced_motion: true,
        });

        let highlights = ctl.doc().get_element_by_id("highlights").unwrap();
        assert!(ctl.doc().has_class(highlights, "visible"));
        assert_eq!(stat_values(&ctl), alloc::vec![100, 42]);
    }

    #[test]
    fn test_reduced_motion_counters_never_animate() {
        let mut ctl = controller_with(MediaSnapshot {
            pointer: PointerKind::Fine,
            reduced_motion: true,
        });
        ctl.handle_event(RawInputEvent::Scroll { y: 700.0 });
        ctl.tick(16);
        assert_eq!(stat_values(&ctl), alloc::vec![100, 42]);
    }
}

mod preference_tests {
    use super::*;

    #[test]
    fn test_theme_toggle_updates_class_and_aria() {
        let mut ctl = controller();
        ctl.toggle_theme();

        let html = ctl.doc().get_elements_by_tag_name("html")[0];
        assert!(ctl.doc().has_class(html, LIGHT_THEME_CLASS));
        assert_eq!(ctl.theme(), Theme::Light);

        let toggle = ctl.doc().get_element_by_id(THEME_TOGGLE_ID).unwrap();
        assert_eq!(ctl.doc().get_attribute(toggle, "aria-checked"), Some("true"));

        ctl.toggle_theme();
        assert_eq!(ctl.theme(), Theme::Dark);
        assert!(!ctl.doc().has_class(html, LIGHT_THEME_CLASS));
    }

    #[test]
    fn test_language_toggle_rewrites_bilingual_text() {
        let mut ctl = controller();
        let h1 = ctl.doc().get_elements_by_tag_name("h1")[0];

        ctl.toggle_language();
        assert_eq!(ctl.doc().text_content(h1), "Hallo, ich baue Dinge");

        ctl.toggle_language();
        assert_eq!(ctl.doc().text_content(h1), "Hi, I build things");
    }
}

mod menu_and_tab_tests {
    use super::*;

    #[test]
    fn test_menu_toggle_and_nav_link_close() {
        let mut ctl = controller();
        let toggle = ctl.doc().get_element_by_id("nav-toggle").unwrap();
        let menu = ctl.doc().get_element_by_id("nav-menu").unwrap();

        ctl.toggle_menu();
        assert!(ctl.doc().has_class(menu, "active"));
        assert_eq!(ctl.doc().get_attribute(toggle, "aria-expanded"), Some("true"));

        ctl.select_nav_link();
        assert!(!ctl.doc().has_class(menu, "active"));
        assert_eq!(
            ctl.doc().get_attribute(toggle, "aria-expanded"),
            Some("false")
        );
    }

    #[test]
    fn test_tab_switching_through_controller() {
        let mut ctl = controller();
        // Add a small tab strip
        {
            let doc = ctl.doc_mut();
            let body = doc.get_elements_by_tag_name("body")[0];
            for name in ["projects", "skills"] {
                let button = doc.create_element("button");
                doc.set_attribute(button, "class", "tab-button");
                doc.set_attribute(button, "data-tab", name);
                doc.append_child(body, button);

                let panel = doc.create_element("div");
                doc.set_attribute(panel, "class", "tab-panel");
                doc.set_attribute(panel, "id", name);
                doc.append_child(body, panel);
            }
        }

        ctl.switch_tab("skills");
        let skills = ctl.doc().get_element_by_id("skills").unwrap();
        let projects = ctl.doc().get_element_by_id("projects").unwrap();
        assert!(ctl.doc().has_class(skills, "active"));
        assert!(!ctl.doc().has_class(projects, "active"));
    }
}
