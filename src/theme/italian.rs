// SPDX-License-Identifier: MPL-2.0
//! Warm trattoria palette: tomato red, gold, and basil green on cream.

use super::{ColorTokens, FontTokens, Theme, ThemeId};
use crate::i18n::LocalizedStr;
use iced::Color;

pub const THEME: Theme = Theme {
    id: ThemeId::Italian,
    label: LocalizedStr {
        de: "Italienisch",
        en: "Italian",
    },
    colors: ColorTokens {
        primary: Color::from_rgb8(0xC4, 0x1E, 0x3A),
        secondary: Color::from_rgb8(0xFF, 0xD7, 0x00),
        accent: Color::from_rgb8(0x22, 0x8B, 0x22),
        background: Color::from_rgb8(0xFF, 0xF8, 0xF0),
        foreground: Color::from_rgb8(0x2C, 0x2C, 0x2C),
    },
    fonts: FontTokens {
        heading: "Playfair Display",
        body: "Inter",
    },
    border_radius: 8.0,
};
