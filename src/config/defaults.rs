// SPDX-License-Identifier: MPL-2.0
//! Built-in configuration for the preview site.

use super::{Address, Contact, Features, Modules, SiteConfig, WeeklyHours};
use crate::theme::ThemeId;

/// Configuration of the "Trattoria Bella" preview deployment.
pub fn site_config() -> SiteConfig {
    SiteConfig {
        restaurant_name: "Trattoria Bella".into(),
        tagline: "Authentische italienische Küche".into(),
        description: "Italienisches Restaurant im Herzen von Hamm".into(),
        contact: Contact {
            phone: "+49 2381 123456".into(),
            email: "info@trattoria-bella.de".into(),
            address: Address {
                street: "Weststraße 12".into(),
                zip: "59065".into(),
                city: "Hamm".into(),
                country: "Deutschland".into(),
            },
        },
        hours: WeeklyHours {
            monday: "Ruhetag".into(),
            tuesday: "17:00 - 23:00".into(),
            wednesday: "17:00 - 23:00".into(),
            thursday: "17:00 - 23:00".into(),
            friday: "17:00 - 23:30".into(),
            saturday: "12:00 - 23:30".into(),
            sunday: "12:00 - 22:00".into(),
        },
        maps_url: Some("https://maps.google.com/?q=Trattoria+Bella+Hamm".into()),
        maps_embed_url: None,
        theme: ThemeId::Italian,
        modules: Modules {
            hero: Some("minimal".into()),
            header: Some("overlay".into()),
            menu: Some("tabs".into()),
            about: Some("story".into()),
            gallery: Some("grid".into()),
            contact: Some("split".into()),
            footer: Some("columns".into()),
        },
        features: Features {
            reservations: false,
            menu_cms: false,
            multi_language: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_deployment_uses_the_italian_theme() {
        let config = site_config();
        assert_eq!(config.theme, ThemeId::Italian);
        assert_eq!(config.modules.menu.as_deref(), Some("tabs"));
    }

    #[test]
    fn monday_is_the_rest_day() {
        let config = site_config();
        assert_eq!(config.hours.monday, "Ruhetag");
    }
}
