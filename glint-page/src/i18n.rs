//! Language Application
//!
//! Translatable elements carry both an English and a German text variant as
//! data attributes. Applying a language rewrites the text of every such
//! element to the matching variant; an element whose requested variant is
//! absent or empty is left unchanged.

use alloc::string::String;
use alloc::vec::Vec;

use glint_dom::Document;

/// Page language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    De,
}

impl Language {
    /// Language code as stored/compared.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::De => "de",
        }
    }

    /// Interpret a stored flag. Only the literal "de" selects German.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("de") => Language::De,
            _ => Language::En,
        }
    }

    /// The data attribute carrying this language's text variant.
    pub fn data_attr(&self) -> &'static str {
        match self {
            Language::En => "data-en",
            Language::De => "data-de",
        }
    }

    /// The other language.
    pub fn toggled(&self) -> Self {
        match self {
            Language::En => Language::De,
            Language::De => Language::En,
        }
    }
}

/// Rewrite the text of every bilingual element to the given language.
pub fn apply_language(doc: &mut Document, language: Language) {
    let attr = language.data_attr();

    // Only elements carrying BOTH variants participate
    let updates: Vec<(glint_dom::NodeId, String)> = doc
        .iter()
        .filter(|n| n.has_attribute("data-en") && n.has_attribute("data-de"))
        .filter_map(|n| {
            n.get_attribute(attr)
                .filter(|v| !v.is_empty())
                .map(|v| (n.id, String::from(v)))
        })
        .collect();

    log::debug!(
        "applying language {} to {} elements",
        language.as_str(),
        updates.len()
    );

    for (id, text) in updates {
        doc.set_text(id, &text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bilingual(doc: &mut Document, en: &str, de: &str) -> glint_dom::NodeId {
        let el = doc.create_element("span");
        doc.append_child(doc.root(), el);
        doc.set_attribute(el, "data-en", en);
        doc.set_attribute(el, "data-de", de);
        doc.set_text(el, en);
        el
    }

    #[test]
    fn test_switches_to_german_and_back() {
        let mut doc = Document::new();
        let el = bilingual(&mut doc, "About", "Ueber mich");

        apply_language(&mut doc, Language::De);
        assert_eq!(doc.text_content(el), "Ueber mich");

        apply_language(&mut doc, Language::En);
        assert_eq!(doc.text_content(el), "About");
    }

    #[test]
    fn test_empty_variant_leaves_text_unchanged() {
        let mut doc = Document::new();
        let el = bilingual(&mut doc, "Projects", "");

        apply_language(&mut doc, Language::De);
        assert_eq!(doc.text_content(el), "Projects");
    }

    #[test]
    fn test_single_variant_element_is_not_touched() {
        let mut doc = Document::new();
        let el = doc.create_element("span");
        doc.append_child(doc.root(), el);
        doc.set_attribute(el, "data-en", "English only");
        doc.set_text(el, "original");

        apply_language(&mut doc, Language::En);
        assert_eq!(doc.text_content(el), "original");
    }

    #[test]
    fn test_from_stored_literals() {
        assert_eq!(Language::from_stored(None), Language::En);
        assert_eq!(Language::from_stored(Some("de")), Language::De);
        assert_eq!(Language::from_stored(Some("DE")), Language::En);
        assert_eq!(Language::from_stored(Some("fr")), Language::En);
    }
}
