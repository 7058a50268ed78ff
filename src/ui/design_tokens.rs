// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Layout-side design tokens shared by every section variant. Colors, fonts
and corner radii are NOT defined here; those are theme tokens and live in
[`crate::theme`], swapped at runtime through the theme store. What remains
here is the structural scale that stays constant across themes.

## Organization

- **Opacity**: Standardized overlay opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Shadow**: Shadow definitions
"#]

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    /// Scrim behind the mobile navigation drawer and the lightbox.
    pub const SCRIM: f32 = 0.7;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    /// Muted body copy on theme backgrounds.
    pub const TEXT_MUTED: f32 = 0.75;
    /// Solid header surface once the page has scrolled.
    pub const HEADER_SOLID: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
    /// Vertical rhythm between page sections.
    pub const SECTION: f32 = 80.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const BUTTON_HEIGHT: f32 = 40.0;
    pub const INPUT_HEIGHT: f32 = 40.0;
    pub const HEADER_HEIGHT: f32 = 64.0;
    /// Width of the sidebar header rail and the mobile drawer.
    pub const SIDEBAR_WIDTH: f32 = 280.0;
    /// Content column max width; sections center within it.
    pub const CONTENT_WIDTH: f32 = 1120.0;
    pub const GALLERY_TILE: f32 = 240.0;
    pub const TEAM_PORTRAIT: f32 = 160.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Hero display title.
    pub const DISPLAY: f32 = 48.0;
    /// Section headings.
    pub const TITLE_LG: f32 = 30.0;
    /// Card titles, menu item names.
    pub const TITLE_MD: f32 = 20.0;
    /// Sub-headings, category tabs.
    pub const TITLE_SM: f32 = 18.0;
    /// Lead paragraphs, form inputs.
    pub const BODY_LG: f32 = 16.0;
    /// Most copy.
    pub const BODY: f32 = 14.0;
    /// Dietary tags, captions, footer legal links.
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: Color::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: Color::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: Color::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(spacing::SECTION > spacing::XXL);

    assert!(opacity::SCRIM > 0.0 && opacity::SCRIM < 1.0);
    assert!(opacity::HEADER_SOLID > opacity::SCRIM);

    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::CAPTION);

    assert!(sizing::CONTENT_WIDTH > sizing::SIDEBAR_WIDTH);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }
}
