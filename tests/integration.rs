// SPDX-License-Identifier: MPL-2.0
//! End-to-end exercises of the composition pipeline: configuration in,
//! composed interactive page out.

use tafel::config::{self, SiteConfig};
use tafel::content::sample;
use tafel::error::ConfigError;
use tafel::i18n::fluent::I18n;
use tafel::i18n::Language;
use tafel::page::{self, Page, SectionKind};
use tafel::sections::{contact, gallery, header, menu, SectionRole};
use tafel::theme::{self, ThemeId};

#[test]
fn default_deployment_composes_the_full_page() {
    let config = SiteConfig::default();
    config.validate().expect("default config is valid");

    let sections = page::compose(&config).expect("compose");
    let roles: Vec<SectionRole> = sections.iter().map(|s| s.role()).collect();
    assert_eq!(
        roles,
        [
            SectionRole::Header,
            SectionRole::Hero,
            SectionRole::Menu,
            SectionRole::About,
            SectionRole::Gallery,
            SectionRole::Contact,
            SectionRole::Footer,
        ]
    );
    assert!(matches!(
        sections[2],
        SectionKind::Menu(menu::Variant::Tabs)
    ));
}

#[test]
fn trimmed_deployment_composes_five_sections() {
    let mut config = SiteConfig::default();
    config.modules.about = None;
    config.modules.gallery = None;

    let sections = page::compose(&config).expect("compose");
    assert_eq!(sections.len(), 5);
}

#[test]
fn a_typo_in_one_module_fails_the_whole_composition() {
    let mut config = SiteConfig::default();
    config.modules.footer = Some("colums".into());

    let err = page::compose(&config).unwrap_err();
    assert_eq!(
        err,
        ConfigError::UnknownVariant {
            role: "footer",
            id: "colums".into()
        }
    );
}

#[test]
fn configuration_survives_a_disk_round_trip() {
    let mut config = SiteConfig::default();
    config.theme = ThemeId::Vegan;
    config.modules.hero = Some("split".into());
    config.modules.contact = Some("reservation".into());
    config.features.reservations = true;

    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("site.toml");
    config::save_to_path(&config, &path).expect("save");
    let loaded = config::load_from_path(&path).expect("load");

    assert_eq!(loaded, config);
    loaded.validate().expect("round-tripped config stays valid");
}

#[test]
fn every_registered_theme_resolves() {
    for id in ThemeId::ALL {
        let bundle = theme::lookup(id);
        assert_eq!(bundle.id, id);
    }
    assert!("steakhouse".parse::<ThemeId>().is_err());
}

#[test]
fn the_page_drives_its_sections_end_to_end() {
    let i18n = I18n::new(Some("de".into()));
    let mut page =
        Page::new(SiteConfig::default(), sample::trattoria_bella()).expect("default page");

    // Drawer open, then navigate: drawer closes and the page scrolls.
    page.update(page::Message::Header(header::Message::ToggleDrawer));
    assert!(page.has_open_overlay());
    let event = page.update(page::Message::Header(header::Message::NavPressed(
        "#contact".into(),
    )));
    assert!(matches!(event, page::Event::ScrollTo(offset) if offset > 0.0));
    assert!(!page.has_open_overlay());

    // Tab switch, lightbox wrap, language-independent rendering.
    page.update(page::Message::Menu(menu::Message::CategorySelected(
        "drinks".into(),
    )));
    page.update(page::Message::Gallery(gallery::Message::ImagePressed(0)));
    page.update(page::Message::Gallery(gallery::Message::ViewerPrevious));
    page.update(page::Message::Gallery(gallery::Message::CloseViewer));

    for language in Language::ALL {
        let _element = page.view(&i18n, language);
    }
}

#[test]
fn reservation_deployment_accepts_a_reservation() {
    let mut config = SiteConfig::default();
    config.modules.contact = Some("reservation".into());
    config.features.reservations = true;
    let mut page = Page::new(config, sample::trattoria_bella()).expect("page");

    for (field, value) in [
        (contact::Field::Name, "Anna Beispiel"),
        (contact::Field::Email, "anna@example.org"),
        (contact::Field::Date, "2026-09-12"),
        (contact::Field::Time, "19:30"),
        (contact::Field::Guests, "4"),
    ] {
        page.update(page::Message::Contact(contact::Message::FieldChanged(
            field,
            value.into(),
        )));
    }

    let event = page.update(page::Message::Contact(contact::Message::Submit));
    let page::Event::SubmitEnquiry(values) = event else {
        panic!("expected a submission");
    };
    let reservation = values.reservation.expect("reservation payload");
    assert_eq!(reservation.guests, 4);

    // The in-flight guard refuses a second submit until completion reports.
    let second = page.update(page::Message::Contact(contact::Message::Submit));
    assert!(matches!(second, page::Event::None));
    page.update(page::Message::Contact(contact::Message::SubmissionFinished(
        true,
    )));
}

#[test]
fn chrome_strings_follow_the_selected_language() {
    let mut i18n = I18n::new(Some("de".into()));
    assert_eq!(i18n.tr("contact-hours-label"), "Öffnungszeiten");
    i18n.set_language(Language::En);
    assert_eq!(i18n.tr("contact-hours-label"), "Opening hours");
}
