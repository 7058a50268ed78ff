// SPDX-License-Identifier: MPL-2.0
//! Data contracts shared by the section variants.
//!
//! Every variant of a role accepts the same content shape for that role;
//! variants differ only in layout and interaction style. Content is owned by
//! the deploying site, supplied whole at composition time, and read-only
//! from the perspective of every section.

pub mod sample;

use crate::i18n::{Language, Localized};
use serde::{Deserialize, Serialize};

/// A navigation link with a single display label (header navigation).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
    /// Marks the link for the page currently shown.
    #[serde(default)]
    pub current: bool,
}

/// A navigation link with a bilingual label (footer legal links).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedLink {
    pub label: Localized,
    pub href: String,
}

/// The closed set of social platforms the template knows how to label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Instagram,
    Facebook,
    Twitter,
    Email,
}

impl SocialPlatform {
    pub fn label(self) -> &'static str {
        match self {
            SocialPlatform::Instagram => "Instagram",
            SocialPlatform::Facebook => "Facebook",
            SocialPlatform::Twitter => "Twitter",
            SocialPlatform::Email => "E-Mail",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: SocialPlatform,
    pub url: String,
}

/// Media reference for the hero: an opaque image path, or a video source
/// with a poster frame. Resolution is the asset pipeline's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeroMedia {
    Image { src: String },
    Video { src: String, poster: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroContent {
    pub title: String,
    pub subtitle: String,
    #[serde(default)]
    pub description: Option<String>,
    pub cta_label: String,
    pub cta_href: String,
    /// Optional; media-bearing variants degrade to a flat theme backdrop
    /// when absent.
    #[serde(default)]
    pub media: Option<HeroMedia>,
}

/// The closed set of dietary tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DietaryTag {
    Vegetarian,
    Vegan,
    GlutenFree,
}

impl DietaryTag {
    pub fn label(self, language: Language) -> &'static str {
        match (self, language) {
            (DietaryTag::Vegetarian, Language::De) => "vegetarisch",
            (DietaryTag::Vegetarian, Language::En) => "vegetarian",
            (DietaryTag::Vegan, _) => "vegan",
            (DietaryTag::GlutenFree, Language::De) => "glutenfrei",
            (DietaryTag::GlutenFree, Language::En) => "gluten-free",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: Localized,
    /// Free-form display string; ranges like "12.50 - 18.00" are valid.
    pub price: String,
    #[serde(default)]
    pub description: Localized,
    #[serde(default)]
    pub image: Option<String>,
    /// Key into the category list.
    pub category: String,
    #[serde(default)]
    pub dietary_tags: Vec<DietaryTag>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuCategory {
    pub id: String,
    pub label: Localized,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuContent {
    pub title: Localized,
    #[serde(default)]
    pub subtitle: Option<Localized>,
    pub categories: Vec<MenuCategory>,
    pub items: Vec<MenuItem>,
}

impl MenuContent {
    /// The standard four-course category list (appetizers, mains, desserts,
    /// drinks).
    pub fn default_categories() -> Vec<MenuCategory> {
        vec![
            MenuCategory {
                id: "appetizers".into(),
                label: Localized::new("Vorspeisen", "Appetizers"),
            },
            MenuCategory {
                id: "mains".into(),
                label: Localized::new("Hauptgerichte", "Main Courses"),
            },
            MenuCategory {
                id: "desserts".into(),
                label: Localized::new("Desserts", "Desserts"),
            },
            MenuCategory {
                id: "drinks".into(),
                label: Localized::new("Getränke", "Drinks"),
            },
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub role: Localized,
    #[serde(default)]
    pub image: Option<String>,
}

/// The closed icon set for value cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueIcon {
    Heart,
    Leaf,
    Award,
    Users,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueCard {
    pub icon: ValueIcon,
    pub title: Localized,
    pub description: Localized,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub year: String,
    pub title: Localized,
    pub description: Localized,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutContent {
    pub title: Localized,
    #[serde(default)]
    pub subtitle: Option<Localized>,
    /// Narrative text; blank lines separate paragraphs.
    pub narrative: Localized,
    #[serde(default)]
    pub pull_quote: Option<Localized>,
    #[serde(default)]
    pub team: Vec<TeamMember>,
    #[serde(default)]
    pub values: Vec<ValueCard>,
    #[serde(default)]
    pub milestones: Vec<Milestone>,
}

/// Splits narrative text into display paragraphs on the blank-line convention.
pub fn paragraphs(text: &str) -> Vec<&str> {
    text.split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

/// Layout-size hint for gallery grid placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeHint {
    Small,
    #[default]
    Medium,
    Large,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
    #[serde(default)]
    pub caption: Option<Localized>,
    #[serde(default)]
    pub size: SizeHint,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryContent {
    pub title: Localized,
    #[serde(default)]
    pub subtitle: Option<Localized>,
    pub images: Vec<GalleryImage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactContent {
    pub title: Localized,
    #[serde(default)]
    pub subtitle: Option<Localized>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterContent {
    #[serde(default)]
    pub description: Option<Localized>,
    pub links: Vec<LocalizedLink>,
}

/// All marketing copy and structured data for one deployed site, grouped by
/// section role. Optional roles carry optional content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteContent {
    pub logo: String,
    pub nav_links: Vec<NavLink>,
    /// Optional call-to-action in the header bar.
    #[serde(default)]
    pub header_cta: Option<NavLink>,
    pub hero: HeroContent,
    pub menu: MenuContent,
    #[serde(default)]
    pub about: Option<AboutContent>,
    #[serde(default)]
    pub gallery: Option<GalleryContent>,
    pub contact: ContactContent,
    pub footer: FooterContent,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paragraphs_split_on_blank_lines() {
        let text = "First paragraph.\n\nSecond paragraph,\nstill the same one.\n\nThird.";
        let parts = paragraphs(text);
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "First paragraph.");
        assert!(parts[1].contains("still the same one"));
    }

    #[test]
    fn paragraphs_drop_empty_segments() {
        assert!(paragraphs("").is_empty());
        assert_eq!(paragraphs("only one\n\n\n\n").len(), 1);
    }

    #[test]
    fn dietary_tags_have_labels_in_both_languages() {
        for tag in [DietaryTag::Vegetarian, DietaryTag::Vegan, DietaryTag::GlutenFree] {
            for language in Language::ALL {
                assert!(!tag.label(language).is_empty());
            }
        }
    }

    #[test]
    fn default_categories_cover_the_four_courses() {
        let categories = MenuContent::default_categories();
        let ids: Vec<&str> = categories.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["appetizers", "mains", "desserts", "drinks"]);
    }
}
