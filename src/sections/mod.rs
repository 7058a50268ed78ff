// SPDX-License-Identifier: MPL-2.0
//! The section variant library.
//!
//! A page is built from sections, one per role. Each role has a closed set
//! of interchangeable variants registered under kebab-case identifiers;
//! every variant of a role accepts the same content shape and differs only
//! in layout and interaction. Identifiers are unique within a role, not
//! across roles ("split" names both a hero and a contact variant).

pub mod about;
pub mod contact;
pub mod footer;
pub mod gallery;
pub mod header;
pub mod hero;
pub mod menu;
pub mod scroll_lock;

/// The seven section roles, in their fixed page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionRole {
    Header,
    Hero,
    Menu,
    About,
    Gallery,
    Contact,
    Footer,
}

impl SectionRole {
    pub const ALL: [SectionRole; 7] = [
        SectionRole::Header,
        SectionRole::Hero,
        SectionRole::Menu,
        SectionRole::About,
        SectionRole::Gallery,
        SectionRole::Contact,
        SectionRole::Footer,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SectionRole::Header => "header",
            SectionRole::Hero => "hero",
            SectionRole::Menu => "menu",
            SectionRole::About => "about",
            SectionRole::Gallery => "gallery",
            SectionRole::Contact => "contact",
            SectionRole::Footer => "footer",
        }
    }

    /// About and gallery may be omitted from a page; the rest are required.
    pub fn is_optional(self) -> bool {
        matches!(self, SectionRole::About | SectionRole::Gallery)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_are_in_page_order() {
        assert_eq!(SectionRole::ALL[0], SectionRole::Header);
        assert_eq!(SectionRole::ALL[6], SectionRole::Footer);
    }

    #[test]
    fn only_about_and_gallery_are_optional() {
        let optional: Vec<_> = SectionRole::ALL
            .iter()
            .filter(|r| r.is_optional())
            .collect();
        assert_eq!(optional, [&SectionRole::About, &SectionRole::Gallery]);
    }

    #[test]
    fn variant_ids_are_unique_within_each_role() {
        fn assert_unique(ids: &[&str]) {
            for (i, a) in ids.iter().enumerate() {
                for b in &ids[i + 1..] {
                    assert_ne!(a, b);
                }
            }
        }
        assert_unique(&hero::Variant::ALL.map(|v| v.id()));
        assert_unique(&header::Variant::ALL.map(|v| v.id()));
        assert_unique(&menu::Variant::ALL.map(|v| v.id()));
        assert_unique(&about::Variant::ALL.map(|v| v.id()));
        assert_unique(&gallery::Variant::ALL.map(|v| v.id()));
        assert_unique(&contact::Variant::ALL.map(|v| v.id()));
        assert_unique(&footer::Variant::ALL.map(|v| v.id()));
    }

    #[test]
    fn same_id_may_live_under_two_roles() {
        // Identifiers are keyed by (role, id), not globally.
        assert!(hero::Variant::resolve("split").is_ok());
        assert!(contact::Variant::resolve("split").is_ok());
    }
}
