// SPDX-License-Identifier: MPL-2.0
//! Page composition: one configured variant per role, in fixed order.
//!
//! [`compose`] resolves the configured variant identifiers into a section
//! list; the order is always header, hero, menu, about, gallery, contact,
//! footer, with the optional roles present only when configured. [`Page`]
//! owns the per-section interaction state and routes messages.

use crate::config::{self, SiteConfig};
use crate::content::SiteContent;
use crate::error::ConfigError;
use crate::i18n::fluent::I18n;
use crate::i18n::Language;
use crate::sections::scroll_lock::ScrollLockCounter;
use crate::sections::{about, contact, footer, gallery, header, hero, menu, SectionRole};
use iced::widget::{scrollable, Column, Id};
use iced::{Element, Length};

/// Scroll offset past which the overlay header turns solid.
const SCROLL_THRESHOLD: f32 = 64.0;

/// A resolved section: role plus the variant chosen for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Header(header::Variant),
    Hero(hero::Variant),
    Menu(menu::Variant),
    About(about::Variant),
    Gallery(gallery::Variant),
    Contact(contact::Variant),
    Footer(footer::Variant),
}

impl SectionKind {
    pub fn role(self) -> SectionRole {
        match self {
            SectionKind::Header(_) => SectionRole::Header,
            SectionKind::Hero(_) => SectionRole::Hero,
            SectionKind::Menu(_) => SectionRole::Menu,
            SectionKind::About(_) => SectionRole::About,
            SectionKind::Gallery(_) => SectionRole::Gallery,
            SectionKind::Contact(_) => SectionRole::Contact,
            SectionKind::Footer(_) => SectionRole::Footer,
        }
    }
}

/// Resolves one (role, id) pair against the variant registries.
pub fn resolve(role: SectionRole, id: &str) -> Result<SectionKind, ConfigError> {
    match role {
        SectionRole::Header => header::Variant::resolve(id).map(SectionKind::Header),
        SectionRole::Hero => hero::Variant::resolve(id).map(SectionKind::Hero),
        SectionRole::Menu => menu::Variant::resolve(id).map(SectionKind::Menu),
        SectionRole::About => about::Variant::resolve(id).map(SectionKind::About),
        SectionRole::Gallery => gallery::Variant::resolve(id).map(SectionKind::Gallery),
        SectionRole::Contact => contact::Variant::resolve(id).map(SectionKind::Contact),
        SectionRole::Footer => footer::Variant::resolve(id).map(SectionKind::Footer),
    }
}

/// Builds the section list for a configuration, in page order.
pub fn compose(config: &SiteConfig) -> Result<Vec<SectionKind>, ConfigError> {
    let modules = &config.modules;
    let mut sections = vec![
        resolve(SectionRole::Header, config::required(&modules.header, header::ROLE)?)?,
        resolve(SectionRole::Hero, config::required(&modules.hero, hero::ROLE)?)?,
        resolve(SectionRole::Menu, config::required(&modules.menu, menu::ROLE)?)?,
    ];
    if let Some(id) = &modules.about {
        sections.push(resolve(SectionRole::About, id)?);
    }
    if let Some(id) = &modules.gallery {
        sections.push(resolve(SectionRole::Gallery, id)?);
    }
    sections.push(resolve(
        SectionRole::Contact,
        config::required(&modules.contact, contact::ROLE)?,
    )?);
    sections.push(resolve(
        SectionRole::Footer,
        config::required(&modules.footer, footer::ROLE)?,
    )?);
    Ok(sections)
}

#[derive(Debug, Clone)]
pub enum Message {
    Header(header::Message),
    Hero(hero::Message),
    Menu(menu::Message),
    About(about::Message),
    Gallery(gallery::Message),
    Contact(contact::Message),
    Footer(footer::Message),
    Scrolled { absolute: f32, relative: f32 },
}

/// Events the page cannot handle itself.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    ToggleLanguage,
    /// A validated form submission to run and report back.
    SubmitEnquiry(contact::FormValues),
    /// Scroll the page to this relative offset (0.0 top, 1.0 bottom).
    ScrollTo(f32),
    /// Open an external target (social links, legal pages).
    OpenUrl(String),
}

pub struct Page {
    config: SiteConfig,
    content: SiteContent,
    sections: Vec<SectionKind>,
    locks: ScrollLockCounter,
    scrolled: bool,
    scroll_position: f32,
    header: header::State,
    menu: menu::State,
    gallery: gallery::State,
    contact: contact::State,
    footer: footer::State,
}

impl Page {
    pub fn new(config: SiteConfig, content: SiteContent) -> Result<Self, ConfigError> {
        let sections = compose(&config)?;
        Ok(Self {
            config,
            content,
            sections,
            locks: ScrollLockCounter::new(),
            scrolled: false,
            scroll_position: 0.0,
            header: header::State::default(),
            menu: menu::State::default(),
            gallery: gallery::State::default(),
            contact: contact::State::default(),
            footer: footer::State::default(),
        })
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn sections(&self) -> &[SectionKind] {
        &self.sections
    }

    fn variant_of(&self, role: SectionRole) -> Option<SectionKind> {
        self.sections.iter().copied().find(|s| s.role() == role)
    }

    /// Whether the carousel needs the autoplay tick right now.
    pub fn wants_tick(&self) -> bool {
        matches!(
            self.variant_of(SectionRole::Gallery),
            Some(SectionKind::Gallery(gallery::Variant::Carousel))
        ) && !self.gallery.carousel.paused
            && self
                .content
                .gallery
                .as_ref()
                .is_some_and(|g| g.images.len() > 1)
    }

    /// Closes the drawer and the lightbox (Escape).
    pub fn close_overlays(&mut self) {
        self.header = header::State::default();
        self.gallery.viewer = gallery::Viewer::Closed;
    }

    pub fn has_open_overlay(&self) -> bool {
        self.header.drawer_open() || self.gallery.viewer.open_index().is_some()
    }

    /// Relative scroll offset for a nav anchor, by section position.
    pub fn anchor_offset(&self, anchor: &str) -> f32 {
        let role = match anchor.trim_start_matches('#') {
            "menu" => SectionRole::Menu,
            "about" => SectionRole::About,
            "gallery" => SectionRole::Gallery,
            "contact" => SectionRole::Contact,
            _ => return 0.0,
        };
        let Some(position) = self.sections.iter().position(|s| s.role() == role) else {
            return 0.0;
        };
        if self.sections.len() < 2 {
            return 0.0;
        }
        position as f32 / (self.sections.len() - 1) as f32
    }

    fn gallery_image_count(&self) -> usize {
        self.content.gallery.as_ref().map_or(0, |g| g.images.len())
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Header(message) => {
                match header::update(message, &mut self.header, &self.locks) {
                    header::Event::None => Event::None,
                    header::Event::Navigate(anchor) => {
                        if anchor.starts_with('#') {
                            Event::ScrollTo(self.anchor_offset(&anchor))
                        } else {
                            Event::OpenUrl(anchor)
                        }
                    }
                    header::Event::ToggleLanguage => Event::ToggleLanguage,
                }
            }
            Message::Hero(message) => {
                let hero::Event::Navigate(anchor) = hero::update(message, &self.content.hero);
                Event::ScrollTo(self.anchor_offset(&anchor))
            }
            Message::Menu(message) => {
                menu::update(message, &mut self.menu);
                Event::None
            }
            Message::About(message) => match message {},
            Message::Gallery(message) => {
                let count = self.gallery_image_count();
                gallery::update(message, &mut self.gallery, count, &self.locks);
                Event::None
            }
            Message::Contact(message) => {
                let variant = match self.variant_of(SectionRole::Contact) {
                    Some(SectionKind::Contact(variant)) => variant,
                    _ => contact::Variant::Split,
                };
                match contact::update(message, &mut self.contact, variant) {
                    contact::Event::None => Event::None,
                    contact::Event::Submit(values) => Event::SubmitEnquiry(values),
                }
            }
            Message::Footer(message) => match footer::update(message, &mut self.footer) {
                footer::Event::None => Event::None,
                footer::Event::Navigate(href) => Event::OpenUrl(href),
            },
            Message::Scrolled { absolute, relative } => {
                if self.locks.is_unlocked() {
                    self.scrolled = absolute > SCROLL_THRESHOLD;
                    self.scroll_position = relative;
                    Event::None
                } else {
                    // An open overlay holds the page in place.
                    Event::ScrollTo(self.scroll_position)
                }
            }
        }
    }

    fn section_view<'a>(
        &'a self,
        section: SectionKind,
        i18n: &'a I18n,
        language: Language,
    ) -> Option<Element<'a, Message>> {
        match section {
            SectionKind::Header(variant) => {
                let toggle = self
                    .config
                    .features
                    .multi_language
                    .then(|| i18n.tr("language-toggle"));
                Some(
                    header::view(header::ViewContext {
                        variant,
                        i18n,
                        logo: &self.content.logo,
                        nav_links: &self.content.nav_links,
                        cta: self.content.header_cta.as_ref(),
                        scrolled: self.scrolled,
                        drawer_open: self.header.drawer_open(),
                        language_toggle: toggle,
                    })
                    .map(Message::Header),
                )
            }
            SectionKind::Hero(variant) => Some(
                hero::view(hero::ViewContext {
                    variant,
                    content: &self.content.hero,
                })
                .map(Message::Hero),
            ),
            SectionKind::Menu(variant) => Some(
                menu::view(menu::ViewContext {
                    variant,
                    i18n,
                    language,
                    content: &self.content.menu,
                    state: &self.menu,
                })
                .map(Message::Menu),
            ),
            SectionKind::About(variant) => self.content.about.as_ref().map(|content| {
                about::view(about::ViewContext {
                    variant,
                    language,
                    content,
                })
                .map(Message::About)
            }),
            SectionKind::Gallery(variant) => self.content.gallery.as_ref().map(|content| {
                gallery::view(gallery::ViewContext {
                    variant,
                    i18n,
                    language,
                    content,
                    state: &self.gallery,
                })
                .map(Message::Gallery)
            }),
            SectionKind::Contact(variant) => Some(
                contact::view(contact::ViewContext {
                    variant,
                    i18n,
                    language,
                    content: &self.content.contact,
                    contact: &self.config.contact,
                    hours: &self.config.hours,
                    maps_url: self.config.maps_url.as_deref(),
                    maps_embed_url: self.config.maps_embed_url.as_deref(),
                    state: &self.contact,
                })
                .map(Message::Contact),
            ),
            SectionKind::Footer(variant) => Some(
                footer::view(footer::ViewContext {
                    variant,
                    i18n,
                    language,
                    restaurant_name: &self.config.restaurant_name,
                    content: &self.content.footer,
                    social_links: &self.content.social_links,
                    state: &self.footer,
                })
                .map(Message::Footer),
            ),
        }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n, language: Language) -> Element<'a, Message> {
        let mut column = Column::new().width(Length::Fill);
        for section in &self.sections {
            if let Some(element) = self.section_view(*section, i18n, language) {
                column = column.push(element);
            }
        }

        scrollable(column)
            .id(scroll_id())
            .on_scroll(|viewport| Message::Scrolled {
                absolute: viewport.absolute_offset().y,
                relative: viewport.relative_offset().y,
            })
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

/// Identifier of the page scrollable, shared with the app for scroll tasks.
pub fn scroll_id() -> Id {
    Id::new("page")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::sample;

    fn page() -> Page {
        Page::new(SiteConfig::default(), sample::trattoria_bella()).expect("default page")
    }

    #[test]
    fn compose_keeps_the_fixed_role_order() {
        let sections = compose(&SiteConfig::default()).expect("compose");
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
    }

    #[test]
    fn optional_roles_are_skipped_when_unconfigured() {
        let mut config = SiteConfig::default();
        config.modules.about = None;
        config.modules.gallery = None;
        let sections = compose(&config).expect("compose");
        assert_eq!(sections.len(), 5);
        assert!(sections.iter().all(|s| !s.role().is_optional()));
    }

    #[test]
    fn compose_rejects_unknown_identifiers() {
        let mut config = SiteConfig::default();
        config.modules.hero = Some("parallax".into());
        let err = compose(&config).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownVariant { role: "hero", .. }));
    }

    #[test]
    fn compose_reports_a_missing_required_role() {
        let mut config = SiteConfig::default();
        config.modules.footer = None;
        let err = compose(&config).unwrap_err();
        assert_eq!(err, ConfigError::MissingSection("footer"));
    }

    #[test]
    fn escape_closes_every_overlay() {
        let mut page = page();
        page.update(Message::Header(header::Message::ToggleDrawer));
        page.update(Message::Gallery(gallery::Message::ImagePressed(0)));
        assert!(page.has_open_overlay());

        page.close_overlays();
        assert!(!page.has_open_overlay());
        assert!(page.locks.is_unlocked());
    }

    #[test]
    fn hero_cta_scrolls_to_the_menu_section() {
        let mut page = page();
        let event = page.update(Message::Hero(hero::Message::CtaPressed));
        let Event::ScrollTo(offset) = event else {
            panic!("expected a scroll event");
        };
        assert!(offset > 0.0 && offset < 1.0);
    }

    #[test]
    fn unknown_anchor_scrolls_to_the_top() {
        let page = page();
        assert_eq!(page.anchor_offset("#"), 0.0);
        assert_eq!(page.anchor_offset("#specials"), 0.0);
    }

    #[test]
    fn form_submission_bubbles_to_the_app() {
        let mut page = page();
        page.contact.name = "Anna".into();
        page.contact.email = "anna@example.org".into();
        page.contact.message = "Tisch für zwei?".into();
        let event = page.update(Message::Contact(contact::Message::Submit));
        assert!(matches!(event, Event::SubmitEnquiry(_)));
    }

    #[test]
    fn scrolling_past_the_threshold_flips_the_header() {
        let mut page = page();
        page.update(Message::Scrolled {
            absolute: 10.0,
            relative: 0.01,
        });
        assert!(!page.scrolled);
        page.update(Message::Scrolled {
            absolute: 200.0,
            relative: 0.2,
        });
        assert!(page.scrolled);
    }

    #[test]
    fn an_open_overlay_holds_the_scroll_position() {
        let mut page = page();
        page.update(Message::Scrolled {
            absolute: 300.0,
            relative: 0.3,
        });
        page.update(Message::Header(header::Message::ToggleDrawer));

        let event = page.update(Message::Scrolled {
            absolute: 500.0,
            relative: 0.5,
        });
        let Event::ScrollTo(offset) = event else {
            panic!("expected a snap back to the held position");
        };
        assert_eq!(offset, 0.3);
    }

    #[test]
    fn tick_is_wanted_only_for_an_unpaused_carousel() {
        let mut config = SiteConfig::default();
        config.modules.gallery = Some("carousel".into());
        let mut page = Page::new(config, sample::trattoria_bella()).expect("page");
        assert!(page.wants_tick());

        page.update(Message::Gallery(gallery::Message::ToggleAutoplay));
        assert!(!page.wants_tick());
    }

    #[test]
    fn grid_gallery_needs_no_tick() {
        let page = page();
        assert!(!page.wants_tick());
    }

    #[test]
    fn page_renders_in_both_languages() {
        let i18n = I18n::default();
        let page = page();
        for language in Language::ALL {
            let _element = page.view(&i18n, language);
        }
    }
}
