//! Interaction Wiring
//!
//! The thin, stateless-per-call handlers: menu toggle, tab switching,
//! scroll-driven chrome state, anchor resolution, year stamping, and image
//! fallback. Every handler silently skips when its element is absent; a
//! page without a menu simply has no menu behavior.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use glint_dom::{Document, NodeId};

use crate::config::PageConfig;

/// Id of the nav toggle button.
pub const NAV_TOGGLE_ID: &str = "nav-toggle";
/// Id of the nav menu container.
pub const NAV_MENU_ID: &str = "nav-menu";
/// Id of the navbar.
pub const NAVBAR_ID: &str = "navbar";
/// Id of the back-to-top control.
pub const BACK_TO_TOP_ID: &str = "back-to-top";
/// Id of the footer year element.
pub const YEAR_ID: &str = "year";
/// Class of tab buttons; each carries `data-tab` naming its panel.
pub const TAB_BUTTON_CLASS: &str = "tab-button";
/// Class of tab panels; each panel's id matches a button's `data-tab`.
pub const TAB_PANEL_CLASS: &str = "tab-panel";
/// Class set on an image container after a load failure.
pub const IMG_FALLBACK_CLASS: &str = "img-fallback";

/// Toggle the mobile menu open/closed. Returns the new open state, or None
/// when the page has no menu.
pub fn toggle_menu(doc: &mut Document) -> Option<bool> {
    let toggle = doc.get_element_by_id(NAV_TOGGLE_ID)?;
    let open = doc.toggle_class(toggle, "active");
    doc.set_attribute(toggle, "aria-expanded", if open { "true" } else { "false" });

    if let Some(menu) = doc.get_element_by_id(NAV_MENU_ID) {
        doc.set_class(menu, "active", open);
    }
    Some(open)
}

/// Close the menu (used when a nav link is selected).
pub fn close_menu(doc: &mut Document) {
    if let Some(toggle) = doc.get_element_by_id(NAV_TOGGLE_ID) {
        doc.remove_class(toggle, "active");
        doc.set_attribute(toggle, "aria-expanded", "false");
    }
    if let Some(menu) = doc.get_element_by_id(NAV_MENU_ID) {
        doc.remove_class(menu, "active");
    }
}

/// Move the active tab. The selected button and its panel gain `active`;
/// every other button/panel loses it. Unknown tab names deselect everything
/// rather than erroring.
pub fn switch_tab(doc: &mut Document, tab: &str) {
    let buttons: Vec<(NodeId, Option<String>)> = doc
        .get_elements_by_class_name(TAB_BUTTON_CLASS)
        .into_iter()
        .map(|id| (id, doc.get_attribute(id, "data-tab").map(String::from)))
        .collect();

    for (button, name) in buttons {
        let selected = name.as_deref() == Some(tab);
        doc.set_class(button, "active", selected);
        doc.set_attribute(
            button,
            "aria-selected",
            if selected { "true" } else { "false" },
        );
    }

    let panels: Vec<(NodeId, Option<String>)> = doc
        .get_elements_by_class_name(TAB_PANEL_CLASS)
        .into_iter()
        .map(|id| {
            let name = doc.get(id).and_then(|n| n.element_id()).map(String::from);
            (id, name)
        })
        .collect();

    for (panel, name) in panels {
        doc.set_class(panel, "active", name.as_deref() == Some(tab));
    }

    log::debug!("switched to tab {}", tab);
}

/// Scroll-driven chrome: navbar `scrolled` past one threshold, back-to-top
/// `visible` past another. Both are reversible, unlike entrance reveals.
pub fn update_scroll_state(doc: &mut Document, scroll_y: f64, config: &PageConfig) {
    if let Some(navbar) = doc.get_element_by_id(NAVBAR_ID) {
        doc.set_class(navbar, "scrolled", scroll_y > config.navbar_scroll_threshold);
    }
    if let Some(button) = doc.get_element_by_id(BACK_TO_TOP_ID) {
        doc.set_class(button, "visible", scroll_y > config.back_to_top_threshold);
    }
}

/// Resolve a `#fragment` anchor to the destination scroll offset. The
/// embedder performs the actual smooth scroll.
pub fn resolve_anchor(doc: &Document, fragment: &str) -> Option<f64> {
    let id = fragment.strip_prefix('#').unwrap_or(fragment);
    let node = doc.get_element_by_id(id)?;
    doc.rect(node).map(|r| r.y)
}

/// Stamp the current year into the footer.
pub fn stamp_year(doc: &mut Document, year: i32) {
    if let Some(el) = doc.get_element_by_id(YEAR_ID) {
        doc.set_text(el, &format!("{}", year));
    }
}

/// Hide a broken image and mark its container for the CSS fallback.
pub fn image_fallback(doc: &mut Document, image: NodeId) {
    if doc.get(image).map(|n| !n.is_element()).unwrap_or(true) {
        return;
    }
    doc.set_attribute(image, "style", "display: none");
    if let Some(parent) = doc.get(image).and_then(|n| n.parent) {
        doc.add_class(parent, IMG_FALLBACK_CLASS);
    }
    log::debug!("image {} failed to load, fallback applied", image);
}
