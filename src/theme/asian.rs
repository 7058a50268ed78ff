// SPDX-License-Identifier: MPL-2.0
//! High-contrast palette: near-black, crimson, and gold on white.

use super::{ColorTokens, FontTokens, Theme, ThemeId};
use crate::i18n::LocalizedStr;
use iced::Color;

pub const THEME: Theme = Theme {
    id: ThemeId::Asian,
    label: LocalizedStr {
        de: "Asiatisch",
        en: "Asian",
    },
    colors: ColorTokens {
        primary: Color::from_rgb8(0x1A, 0x1A, 0x1A),
        secondary: Color::from_rgb8(0xDC, 0x14, 0x3C),
        accent: Color::from_rgb8(0xFF, 0xD7, 0x00),
        background: Color::from_rgb8(0xFF, 0xFF, 0xFF),
        foreground: Color::from_rgb8(0x33, 0x33, 0x33),
    },
    fonts: FontTokens {
        heading: "Noto Sans",
        body: "Inter",
    },
    border_radius: 4.0,
};
