// SPDX-License-Identifier: MPL-2.0
//! Theme registry: a closed, enumerable set of named design-token bundles.
//!
//! Each theme contributes the same fixed token set (five colors, two font
//! families, a border radius) so every token always has a value and no
//! partial theme is representable. Themes are defined at build time, looked
//! up at page-load time, and never mutated; the active bundle lives in
//! [`store`] behind a single writer.

mod asian;
mod cafe;
mod italian;
pub mod store;
mod vegan;

use crate::error::ConfigError;
use crate::i18n::LocalizedStr;
use iced::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of theme identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeId {
    #[default]
    Italian,
    Asian,
    Vegan,
    Cafe,
}

impl ThemeId {
    /// All registered themes in display order.
    pub const ALL: [ThemeId; 4] = [
        ThemeId::Italian,
        ThemeId::Asian,
        ThemeId::Vegan,
        ThemeId::Cafe,
    ];

    pub fn id(self) -> &'static str {
        match self {
            ThemeId::Italian => "italian",
            ThemeId::Asian => "asian",
            ThemeId::Vegan => "vegan",
            ThemeId::Cafe => "cafe",
        }
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ThemeId {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThemeId::ALL
            .into_iter()
            .find(|theme| theme.id() == s)
            .ok_or_else(|| ConfigError::UnknownTheme(s.to_string()))
    }
}

/// The five color tokens shared by every theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorTokens {
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub background: Color,
    pub foreground: Color,
}

/// The two font-family tokens shared by every theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontTokens {
    pub heading: &'static str,
    pub body: &'static str,
}

/// A complete, immutable design-token bundle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub id: ThemeId,
    pub label: LocalizedStr,
    pub colors: ColorTokens,
    pub fonts: FontTokens,
    pub border_radius: f32,
}

/// Returns the token bundle for a registered theme.
///
/// Total over [`ThemeId`]: the failure path for unrecognized identifiers is
/// [`ThemeId::from_str`], which rejects them as a configuration error.
pub fn lookup(id: ThemeId) -> &'static Theme {
    match id {
        ThemeId::Italian => &italian::THEME,
        ThemeId::Asian => &asian::THEME,
        ThemeId::Vegan => &vegan::THEME,
        ThemeId::Cafe => &cafe::THEME,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_total_over_the_closed_set() {
        for id in ThemeId::ALL {
            let theme = lookup(id);
            assert_eq!(theme.id, id);
            assert!(!theme.label.de.is_empty());
            assert!(!theme.label.en.is_empty());
            assert!(!theme.fonts.heading.is_empty());
            assert!(!theme.fonts.body.is_empty());
            assert!(theme.border_radius >= 0.0);
        }
    }

    #[test]
    fn every_theme_has_distinct_background_and_foreground() {
        for id in ThemeId::ALL {
            let theme = lookup(id);
            assert_ne!(theme.colors.background, theme.colors.foreground);
        }
    }

    #[test]
    fn theme_ids_round_trip_through_from_str() {
        for id in ThemeId::ALL {
            assert_eq!(id.id().parse::<ThemeId>(), Ok(id));
        }
    }

    #[test]
    fn unknown_identifier_is_a_configuration_error() {
        let err = "steakhouse".parse::<ThemeId>().unwrap_err();
        assert_eq!(err, ConfigError::UnknownTheme("steakhouse".into()));
    }
}
