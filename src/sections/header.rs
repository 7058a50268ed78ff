// SPDX-License-Identifier: MPL-2.0
//! Header role: top navigation with a collapsible drawer.
//!
//! The drawer holds a [`ScrollLock`] while open, so the page behind it
//! cannot scroll. Navigation always closes the drawer before the page
//! scrolls to the target anchor.

use crate::content::NavLink;
use crate::error::ConfigError;
use crate::i18n::fluent::I18n;
use crate::sections::scroll_lock::{ScrollLock, ScrollLockCounter};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, text, Column, Container, Row, Space};
use iced::{Element, Length};

pub const ROLE: &str = "header";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Transparent over the hero, turning solid once the page scrolls.
    Overlay,
    /// Always on a solid surface.
    Solid,
    /// Vertical navigation rail on the left edge.
    Sidebar,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Overlay, Variant::Solid, Variant::Sidebar];

    pub fn id(self) -> &'static str {
        match self {
            Variant::Overlay => "overlay",
            Variant::Solid => "solid",
            Variant::Sidebar => "sidebar",
        }
    }

    pub fn resolve(id: &str) -> Result<Variant, ConfigError> {
        Variant::ALL
            .into_iter()
            .find(|v| v.id() == id)
            .ok_or_else(|| ConfigError::UnknownVariant {
                role: ROLE,
                id: id.to_owned(),
            })
    }
}

/// Drawer state. The scroll hold lives exactly as long as the drawer is
/// open; dropping the state releases it.
#[derive(Debug, Default)]
pub struct State {
    drawer: Option<ScrollLock>,
}

impl State {
    pub fn drawer_open(&self) -> bool {
        self.drawer.is_some()
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    ToggleDrawer,
    CloseDrawer,
    NavPressed(String),
    ToggleLanguage,
}

#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// The page scrolls to this anchor.
    Navigate(String),
    ToggleLanguage,
}

pub fn update(message: Message, state: &mut State, locks: &ScrollLockCounter) -> Event {
    match message {
        Message::ToggleDrawer => {
            state.drawer = match state.drawer.take() {
                Some(_) => None,
                None => Some(locks.acquire()),
            };
            Event::None
        }
        Message::CloseDrawer => {
            state.drawer = None;
            Event::None
        }
        Message::NavPressed(href) => {
            state.drawer = None;
            Event::Navigate(href)
        }
        Message::ToggleLanguage => Event::ToggleLanguage,
    }
}

pub struct ViewContext<'a> {
    pub variant: Variant,
    pub i18n: &'a I18n,
    pub logo: &'a str,
    pub nav_links: &'a [NavLink],
    pub cta: Option<&'a NavLink>,
    /// Whether the page has scrolled past the hero threshold.
    pub scrolled: bool,
    pub drawer_open: bool,
    pub language_toggle: Option<String>,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    match ctx.variant {
        Variant::Overlay | Variant::Solid => horizontal_bar(ctx),
        Variant::Sidebar => sidebar_rail(ctx),
    }
}

fn nav_button(link: &NavLink) -> Element<'_, Message> {
    let label = text(&link.label).size(typography::BODY);
    let label = if link.current {
        label.size(typography::BODY_LG)
    } else {
        label
    };
    button(label)
        .on_press(Message::NavPressed(link.href.clone()))
        .padding([spacing::XS, spacing::SM])
        .style(styles::ghost)
        .into()
}

fn horizontal_bar<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    // Overlay is transparent until the page scrolls; solid never is.
    let transparent = ctx.variant == Variant::Overlay && !ctx.scrolled;

    let mut row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .padding([spacing::SM, spacing::LG])
        .push(text(ctx.logo).size(typography::TITLE_MD))
        .push(Space::new().width(Length::Fill));

    for link in ctx.nav_links {
        row = row.push(nav_button(link));
    }

    if let Some(cta) = ctx.cta {
        row = row.push(
            button(text(&cta.label).size(typography::BODY))
                .on_press(Message::NavPressed(cta.href.clone()))
                .padding([spacing::XS, spacing::MD])
                .style(styles::cta),
        );
    }

    if let Some(toggle_label) = ctx.language_toggle.clone() {
        row = row.push(
            button(text(toggle_label).size(typography::BODY))
                .on_press(Message::ToggleLanguage)
                .padding([spacing::XS, spacing::SM])
                .style(styles::ghost),
        );
    }

    let burger_label = if ctx.drawer_open {
        ctx.i18n.tr("header-close-menu")
    } else {
        ctx.i18n.tr("header-open-menu")
    };
    row = row.push(
        button(text(burger_label).size(typography::BODY))
            .on_press(Message::ToggleDrawer)
            .padding([spacing::XS, spacing::SM])
            .style(styles::ghost),
    );

    let bar = Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::HEADER_HEIGHT))
        .style(if transparent {
            styles::header_transparent
        } else {
            styles::header_solid
        });

    let mut column = Column::new().width(Length::Fill).push(bar);
    if ctx.drawer_open {
        column = column.push(drawer(&ctx));
    }
    column.into()
}

fn sidebar_rail<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::SM)
        .padding(spacing::LG)
        .align_x(Horizontal::Left)
        .push(text(ctx.logo).size(typography::TITLE_MD))
        .push(Space::new().height(Length::Fixed(spacing::LG)));

    for link in ctx.nav_links {
        column = column.push(nav_button(link));
    }

    if let Some(cta) = ctx.cta {
        column = column.push(
            button(text(&cta.label).size(typography::BODY))
                .on_press(Message::NavPressed(cta.href.clone()))
                .padding([spacing::XS, spacing::MD])
                .style(styles::cta),
        );
    }

    if let Some(toggle_label) = ctx.language_toggle.clone() {
        column = column.push(Space::new().height(Length::Fill)).push(
            button(text(toggle_label).size(typography::BODY))
                .on_press(Message::ToggleLanguage)
                .padding([spacing::XS, spacing::SM])
                .style(styles::ghost),
        );
    }

    Container::new(column)
        .width(Length::Fixed(sizing::SIDEBAR_WIDTH))
        .height(Length::Fill)
        .style(styles::header_solid)
        .into()
}

/// Full-width drawer below the bar; one nav entry per row.
fn drawer<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut column = Column::new().spacing(spacing::XS).padding(spacing::LG);
    for link in ctx.nav_links {
        column = column.push(
            button(text(&link.label).size(typography::TITLE_SM))
                .on_press(Message::NavPressed(link.href.clone()))
                .padding([spacing::SM, spacing::MD])
                .width(Length::Fill)
                .style(styles::ghost_inverse),
        );
    }

    Container::new(column)
        .width(Length::Fill)
        .style(styles::scrim)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_id_resolves_back() {
        for variant in Variant::ALL {
            assert_eq!(Variant::resolve(variant.id()), Ok(variant));
        }
    }

    #[test]
    fn toggle_opens_and_closes_the_drawer() {
        let locks = ScrollLockCounter::new();
        let mut state = State::default();

        update(Message::ToggleDrawer, &mut state, &locks);
        assert!(state.drawer_open());
        assert!(!locks.is_unlocked());

        update(Message::ToggleDrawer, &mut state, &locks);
        assert!(!state.drawer_open());
        assert!(locks.is_unlocked());
    }

    #[test]
    fn navigation_closes_the_drawer_and_releases_the_scroll_hold() {
        let locks = ScrollLockCounter::new();
        let mut state = State::default();
        update(Message::ToggleDrawer, &mut state, &locks);

        let event = update(Message::NavPressed("#menu".into()), &mut state, &locks);
        assert!(matches!(event, Event::Navigate(anchor) if anchor == "#menu"));
        assert!(!state.drawer_open());
        assert!(locks.is_unlocked());
    }

    #[test]
    fn close_is_idempotent() {
        let locks = ScrollLockCounter::new();
        let mut state = State::default();
        update(Message::CloseDrawer, &mut state, &locks);
        update(Message::CloseDrawer, &mut state, &locks);
        assert!(!state.drawer_open());
        assert!(locks.is_unlocked());
    }

    #[test]
    fn language_toggle_is_forwarded() {
        let locks = ScrollLockCounter::new();
        let mut state = State::default();
        let event = update(Message::ToggleLanguage, &mut state, &locks);
        assert!(matches!(event, Event::ToggleLanguage));
    }

    #[test]
    fn every_variant_renders() {
        let i18n = I18n::default();
        let nav_links = vec![NavLink {
            label: "Menu".into(),
            href: "#menu".into(),
            current: false,
        }];
        let cta = NavLink {
            label: "Reservieren".into(),
            href: "#contact".into(),
            current: false,
        };
        for variant in Variant::ALL {
            for drawer_open in [false, true] {
                let _element = view(ViewContext {
                    variant,
                    i18n: &i18n,
                    logo: "Trattoria Bella",
                    nav_links: &nav_links,
                    cta: Some(&cta),
                    scrolled: false,
                    drawer_open,
                    language_toggle: Some("EN".into()),
                });
            }
        }
    }
}
