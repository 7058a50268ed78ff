// SPDX-License-Identifier: MPL-2.0
//! Earthy palette: forest and sage greens with wheat accents.

use super::{ColorTokens, FontTokens, Theme, ThemeId};
use crate::i18n::LocalizedStr;
use iced::Color;

pub const THEME: Theme = Theme {
    id: ThemeId::Vegan,
    label: LocalizedStr {
        de: "Vegan",
        en: "Vegan",
    },
    colors: ColorTokens {
        primary: Color::from_rgb8(0x2D, 0x50, 0x16),
        secondary: Color::from_rgb8(0x8F, 0xBC, 0x8F),
        accent: Color::from_rgb8(0xF5, 0xDE, 0xB3),
        background: Color::from_rgb8(0xF0, 0xFF, 0xF0),
        foreground: Color::from_rgb8(0x2F, 0x4F, 0x2F),
    },
    fonts: FontTokens {
        heading: "Lora",
        body: "Open Sans",
    },
    border_radius: 12.0,
};
