// SPDX-License-Identifier: MPL-2.0
//! Coffee-house palette: roasted browns and tan on linen.

use super::{ColorTokens, FontTokens, Theme, ThemeId};
use crate::i18n::LocalizedStr;
use iced::Color;

pub const THEME: Theme = Theme {
    id: ThemeId::Cafe,
    label: LocalizedStr {
        de: "Café",
        en: "Café",
    },
    colors: ColorTokens {
        primary: Color::from_rgb8(0x6F, 0x4E, 0x37),
        secondary: Color::from_rgb8(0xD2, 0xB4, 0x8C),
        accent: Color::from_rgb8(0xFF, 0xE4, 0xC4),
        background: Color::from_rgb8(0xFA, 0xF0, 0xE6),
        foreground: Color::from_rgb8(0x3E, 0x27, 0x23),
    },
    fonts: FontTokens {
        heading: "Merriweather",
        body: "Lato",
    },
    border_radius: 8.0,
};
