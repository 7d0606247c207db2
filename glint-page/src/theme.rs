//! Theme Application
//!
//! Dark is the baseline; light mode is a class on the root element. The
//! theme toggle is a switch control, so it carries `aria-checked` plus a
//! descriptive `aria-label`. A page without a toggle still gets the root
//! class applied.

use glint_dom::{Document, NodeId};

/// Theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Theme flag as stored.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Interpret a stored flag. Only the literal "light" selects light.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    /// The other theme.
    pub fn toggled(&self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// Class set on the root element in light mode.
pub const LIGHT_THEME_CLASS: &str = "light-theme";

/// Apply a theme to the document.
pub fn apply_theme(doc: &mut Document, theme: Theme, root: NodeId, toggle: Option<NodeId>) {
    doc.set_class(root, LIGHT_THEME_CLASS, theme == Theme::Light);

    if let Some(toggle) = toggle {
        let (checked, label) = match theme {
            Theme::Light => ("true", "Switch to dark theme"),
            Theme::Dark => ("false", "Switch to light theme"),
        };
        doc.set_attribute(toggle, "aria-checked", checked);
        doc.set_attribute(toggle, "aria-label", label);
    }

    log::debug!("applied theme {}", theme.as_str());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_class_follows_theme() {
        let mut doc = Document::new();
        let root = doc.create_element("html");
        doc.append_child(doc.root(), root);

        apply_theme(&mut doc, Theme::Light, root, None);
        assert!(doc.has_class(root, LIGHT_THEME_CLASS));

        apply_theme(&mut doc, Theme::Dark, root, None);
        assert!(!doc.has_class(root, LIGHT_THEME_CLASS));
    }

    #[test]
    fn test_toggle_aria_state() {
        let mut doc = Document::new();
        let root = doc.create_element("html");
        let toggle = doc.create_element("button");
        doc.append_child(doc.root(), root);
        doc.append_child(root, toggle);

        apply_theme(&mut doc, Theme::Light, root, Some(toggle));
        assert_eq!(doc.get_attribute(toggle, "aria-checked"), Some("true"));
        assert_eq!(
            doc.get_attribute(toggle, "aria-label"),
            Some("Switch to dark theme")
        );

        apply_theme(&mut doc, Theme::Dark, root, Some(toggle));
        assert_eq!(doc.get_attribute(toggle, "aria-checked"), Some("false"));
    }

    #[test]
    fn test_from_stored_literals() {
        assert_eq!(Theme::from_stored(None), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("Light")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
    }
}
