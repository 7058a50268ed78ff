// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Two layers of localization coexist:
//!
//! - Site content (menu items, captions, narrative text) is supplied
//!   bilingually by the deploying site and selected through [`Localized`].
//! - UI chrome (form labels, weekday names, empty states) is translated
//!   through the Fluent localization system in [`fluent`].
//!
//! A single [`Language`] value is threaded unchanged into every section;
//! no section performs its own language negotiation.

pub mod fluent;

use serde::{Deserialize, Serialize};
use std::fmt;
use unic_langid::LanguageIdentifier;

/// The closed set of content languages supported by the template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    De,
    En,
}

impl Language {
    /// All supported languages in display order.
    pub const ALL: [Language; 2] = [Language::De, Language::En];

    /// Two-letter language code (`de` / `en`).
    pub fn code(self) -> &'static str {
        match self {
            Language::De => "de",
            Language::En => "en",
        }
    }

    /// The matching Fluent locale for UI chrome strings.
    pub fn locale(self) -> LanguageIdentifier {
        match self {
            Language::De => "de".parse().expect("static locale"),
            Language::En => "en".parse().expect("static locale"),
        }
    }

    /// The other language of the pair.
    pub fn toggled(self) -> Language {
        match self {
            Language::De => Language::En,
            Language::En => Language::De,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A bilingual text pair keyed by the closed [`Language`] set.
///
/// Either side may be empty; an empty side renders as empty text, which is a
/// content omission and never an error.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Localized {
    pub de: String,
    pub en: String,
}

impl Localized {
    pub fn new(de: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            de: de.into(),
            en: en.into(),
        }
    }

    /// A pair that reads the same in both languages.
    pub fn same(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            de: text.clone(),
            en: text,
        }
    }

    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::De => &self.de,
            Language::En => &self.en,
        }
    }

    /// True when both sides are empty.
    pub fn is_empty(&self) -> bool {
        self.de.is_empty() && self.en.is_empty()
    }
}

/// Static counterpart of [`Localized`] for build-time data such as theme labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalizedStr {
    pub de: &'static str,
    pub en: &'static str,
}

impl LocalizedStr {
    pub fn get(&self, language: Language) -> &'static str {
        match language {
            Language::De => self.de,
            Language::En => self.en,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_codes_are_stable() {
        assert_eq!(Language::De.code(), "de");
        assert_eq!(Language::En.code(), "en");
    }

    #[test]
    fn toggling_switches_between_the_pair() {
        assert_eq!(Language::De.toggled(), Language::En);
        assert_eq!(Language::En.toggled(), Language::De);
    }

    #[test]
    fn localized_selects_by_language() {
        let text = Localized::new("Speisekarte", "Menu");
        assert_eq!(text.get(Language::De), "Speisekarte");
        assert_eq!(text.get(Language::En), "Menu");
    }

    #[test]
    fn missing_side_renders_as_empty() {
        let text = Localized::new("Nur Deutsch", "");
        assert_eq!(text.get(Language::En), "");
        assert!(!text.is_empty());
    }

    #[test]
    fn same_reads_identically_in_both_languages() {
        let text = Localized::same("Espresso");
        assert_eq!(text.get(Language::De), text.get(Language::En));
    }
}
