// SPDX-License-Identifier: MPL-2.0
//! Sample site content used by the preview build and by tests: a small
//! Italian trattoria with nine menu items across four categories.

use super::*;
use crate::i18n::Localized;

/// Complete sample content for the "Trattoria Bella" preview site.
pub fn trattoria_bella() -> SiteContent {
    SiteContent {
        logo: "Trattoria Bella".into(),
        nav_links: vec![
            NavLink {
                label: "Home".into(),
                href: "#".into(),
                current: true,
            },
            NavLink {
                label: "Menu".into(),
                href: "#menu".into(),
                current: false,
            },
            NavLink {
                label: "Über uns".into(),
                href: "#about".into(),
                current: false,
            },
            NavLink {
                label: "Kontakt".into(),
                href: "#contact".into(),
                current: false,
            },
        ],
        header_cta: Some(NavLink {
            label: "Tisch reservieren".into(),
            href: "#contact".into(),
            current: false,
        }),
        hero: HeroContent {
            title: "Trattoria Bella".into(),
            subtitle: "Authentische italienische Küche".into(),
            description: Some(
                "Erleben Sie die wahre italienische Küche in gemütlicher Atmosphäre. \
                 Hausgemachte Pasta, frische Zutaten und traditionelle Rezepte aus ganz Italien."
                    .into(),
            ),
            cta_label: "Speisekarte ansehen".into(),
            cta_href: "#menu".into(),
            media: None,
        },
        menu: sample_menu(),
        about: Some(AboutContent {
            title: Localized::new("Über uns", "About us"),
            subtitle: None,
            narrative: Localized::new(
                "Seit 1998 servieren wir in Hamm italienische Küche, wie wir sie aus \
                 unserer Heimat kennen.\n\nUnsere Pasta wird jeden Morgen frisch \
                 zubereitet, und unser Holzofen brennt seit dem ersten Tag.",
                "Since 1998 we have been serving Italian food in Hamm the way we know \
                 it from home.\n\nOur pasta is made fresh every morning, and our \
                 wood-fired oven has been burning since day one.",
            ),
            pull_quote: Some(Localized::new(
                "Gutes Essen braucht Zeit, gute Zutaten und Liebe.",
                "Good food takes time, good ingredients and love.",
            )),
            team: vec![TeamMember {
                name: "Giuseppe Rossi".into(),
                role: Localized::new("Küchenchef", "Head Chef"),
                image: Some("/team/giuseppe.jpg".into()),
            }],
            values: vec![ValueCard {
                icon: ValueIcon::Heart,
                title: Localized::new("Mit Leidenschaft", "With passion"),
                description: Localized::new(
                    "Jedes Gericht wird mit Sorgfalt zubereitet.",
                    "Every dish is prepared with care.",
                ),
            }],
            milestones: vec![
                Milestone {
                    year: "1998".into(),
                    title: Localized::new("Eröffnung", "Opening"),
                    description: Localized::new(
                        "Die Trattoria öffnet ihre Türen.",
                        "The trattoria opens its doors.",
                    ),
                },
                Milestone {
                    year: "2015".into(),
                    title: Localized::new("Zweite Generation", "Second generation"),
                    description: Localized::new(
                        "Die Familie übernimmt in zweiter Generation.",
                        "The family's second generation takes over.",
                    ),
                },
            ],
        }),
        gallery: Some(GalleryContent {
            title: Localized::new("Galerie", "Gallery"),
            subtitle: None,
            images: vec![
                GalleryImage {
                    src: "/gallery/dining-room.jpg".into(),
                    alt: "Dining room".into(),
                    caption: Some(Localized::new("Unser Gastraum", "Our dining room")),
                    size: SizeHint::Large,
                },
                GalleryImage {
                    src: "/gallery/pasta.jpg".into(),
                    alt: "Fresh pasta".into(),
                    caption: None,
                    size: SizeHint::Medium,
                },
                GalleryImage {
                    src: "/gallery/terrace.jpg".into(),
                    alt: "Terrace".into(),
                    caption: Some(Localized::new("Die Terrasse im Sommer", "The terrace in summer")),
                    size: SizeHint::Small,
                },
            ],
        }),
        contact: ContactContent {
            title: Localized::new("Kontakt", "Contact"),
            subtitle: Some(Localized::new(
                "Wir freuen uns auf Ihren Besuch.",
                "We look forward to your visit.",
            )),
        },
        footer: FooterContent {
            description: Some(Localized::new(
                "Italienische Küche im Herzen von Hamm.",
                "Italian cooking in the heart of Hamm.",
            )),
            links: vec![
                LocalizedLink {
                    label: Localized::new("Impressum", "Imprint"),
                    href: "/impressum".into(),
                },
                LocalizedLink {
                    label: Localized::new("Datenschutz", "Privacy"),
                    href: "/datenschutz".into(),
                },
                LocalizedLink {
                    label: Localized::new("AGB", "Terms"),
                    href: "/agb".into(),
                },
            ],
        },
        social_links: vec![
            SocialLink {
                platform: SocialPlatform::Instagram,
                url: "https://instagram.com/trattoriabella".into(),
            },
            SocialLink {
                platform: SocialPlatform::Facebook,
                url: "https://facebook.com/trattoriabella".into(),
            },
            SocialLink {
                platform: SocialPlatform::Email,
                url: "mailto:info@trattoria-bella.de".into(),
            },
        ],
    }
}

fn sample_menu() -> MenuContent {
    MenuContent {
        title: Localized::new("Speisekarte", "Menu"),
        subtitle: Some(Localized::new(
            "Frisch, hausgemacht, italienisch.",
            "Fresh, homemade, Italian.",
        )),
        categories: MenuContent::default_categories(),
        items: vec![
            MenuItem {
                name: Localized::new("Bruschetta al Pomodoro", "Tomato Bruschetta"),
                price: "8.50".into(),
                description: Localized::new(
                    "Geröstetes Brot mit frischen Tomaten, Basilikum und Olivenöl",
                    "Toasted bread with fresh tomatoes, basil and olive oil",
                ),
                image: Some("/menu/bruschetta.jpg".into()),
                category: "appetizers".into(),
                dietary_tags: vec![DietaryTag::Vegetarian, DietaryTag::Vegan],
            },
            MenuItem {
                name: Localized::new("Carpaccio vom Rind", "Beef Carpaccio"),
                price: "14.50".into(),
                description: Localized::new(
                    "Hauchdünnes Rindfleisch mit Rucola, Parmesan und Balsamico",
                    "Thinly sliced beef with arugula, parmesan and balsamic",
                ),
                image: None,
                category: "appetizers".into(),
                dietary_tags: vec![],
            },
            MenuItem {
                name: Localized::same("Spaghetti Carbonara"),
                price: "16.50".into(),
                description: Localized::new(
                    "Klassische römische Pasta mit Ei, Pecorino und Guanciale",
                    "Classic Roman pasta with egg, pecorino and guanciale",
                ),
                image: Some("/menu/carbonara.jpg".into()),
                category: "mains".into(),
                dietary_tags: vec![],
            },
            MenuItem {
                name: Localized::new("Risotto ai Funghi", "Mushroom Risotto"),
                price: "18.00".into(),
                description: Localized::new(
                    "Cremiges Risotto mit gemischten Pilzen und Parmesan",
                    "Creamy risotto with mixed mushrooms and parmesan",
                ),
                image: None,
                category: "mains".into(),
                dietary_tags: vec![DietaryTag::Vegetarian],
            },
            MenuItem {
                name: Localized::same("Saltimbocca alla Romana"),
                price: "24.50".into(),
                description: Localized::new(
                    "Kalbsschnitzel mit Salbei, Parmaschinken und Weißwein",
                    "Veal cutlet with sage, parma ham and white wine",
                ),
                image: Some("/menu/saltimbocca.jpg".into()),
                category: "mains".into(),
                dietary_tags: vec![],
            },
            MenuItem {
                name: Localized::same("Tiramisu"),
                price: "7.50".into(),
                description: Localized::new(
                    "Hausgemachtes Tiramisu mit Mascarpone und Espresso",
                    "Homemade tiramisu with mascarpone and espresso",
                ),
                image: Some("/menu/tiramisu.jpg".into()),
                category: "desserts".into(),
                dietary_tags: vec![DietaryTag::Vegetarian],
            },
            MenuItem {
                name: Localized::same("Panna Cotta"),
                price: "6.50".into(),
                description: Localized::new(
                    "Italienische Sahnecreme mit Beerensauce",
                    "Italian cream dessert with berry sauce",
                ),
                image: None,
                category: "desserts".into(),
                dietary_tags: vec![DietaryTag::Vegetarian, DietaryTag::GlutenFree],
            },
            MenuItem {
                name: Localized::same("Espresso"),
                price: "2.50".into(),
                description: Localized::new(
                    "Klassischer italienischer Espresso",
                    "Classic Italian espresso",
                ),
                image: None,
                category: "drinks".into(),
                dietary_tags: vec![DietaryTag::Vegan],
            },
            MenuItem {
                name: Localized::same("Cappuccino"),
                price: "3.50".into(),
                description: Localized::new(
                    "Espresso mit aufgeschäumter Milch",
                    "Espresso with steamed milk",
                ),
                image: None,
                category: "drinks".into(),
                dietary_tags: vec![DietaryTag::Vegetarian],
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_menu_has_nine_items_in_four_categories() {
        let content = trattoria_bella();
        assert_eq!(content.menu.items.len(), 9);
        assert_eq!(content.menu.categories.len(), 4);
        for item in &content.menu.items {
            assert!(
                content.menu.categories.iter().any(|c| c.id == item.category),
                "item {} references unknown category {}",
                item.name.de,
                item.category
            );
        }
    }

    #[test]
    fn sample_content_fills_required_roles() {
        let content = trattoria_bella();
        assert!(!content.hero.title.is_empty());
        assert!(!content.nav_links.is_empty());
        assert!(!content.footer.links.is_empty());
        assert!(content.about.is_some());
        assert!(content.gallery.is_some());
    }
}
