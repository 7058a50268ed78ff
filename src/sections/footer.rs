// SPDX-License-Identifier: MPL-2.0
//! Footer role: legal links, social links and the copyright line.
//!
//! The copyright year is taken from the clock at render time so deployed
//! sites never show a stale year.

use crate::content::{FooterContent, SocialLink};
use crate::error::ConfigError;
use crate::i18n::fluent::I18n;
use crate::i18n::Language;
use crate::sections::contact::is_valid_email;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use chrono::Datelike;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, text, text_input, Column, Container, Row, Space};
use iced::{Element, Length};

pub const ROLE: &str = "footer";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Description, legal links and social links in columns.
    Columns,
    /// Columns plus a newsletter signup row.
    Newsletter,
    /// One compact line.
    Minimal,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Columns, Variant::Newsletter, Variant::Minimal];

    pub fn id(self) -> &'static str {
        match self {
            Variant::Columns => "columns",
            Variant::Newsletter => "newsletter",
            Variant::Minimal => "minimal",
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

#[derive(Debug, Clone, Default)]
pub struct State {
    pub email: String,
    pub subscribed: bool,
    pub invalid: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    EmailChanged(String),
    Subscribe,
    LinkPressed(String),
}

#[derive(Debug, Clone)]
pub enum Event {
    None,
    Navigate(String),
}

pub fn update(message: Message, state: &mut State) -> Event {
    match message {
        Message::EmailChanged(value) => {
            state.email = value;
            state.invalid = false;
            state.subscribed = false;
            Event::None
        }
        Message::Subscribe => {
            if is_valid_email(state.email.trim()) {
                state.subscribed = true;
                state.email.clear();
            } else {
                state.invalid = true;
            }
            Event::None
        }
        Message::LinkPressed(href) => Event::Navigate(href),
    }
}

/// The current year for the copyright line.
pub fn copyright_year() -> i32 {
    chrono::Local::now().year()
}

pub struct ViewContext<'a> {
    pub variant: Variant,
    pub i18n: &'a I18n,
    pub language: Language,
    pub restaurant_name: &'a str,
    pub content: &'a FooterContent,
    pub social_links: &'a [SocialLink],
    pub state: &'a State,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let body: Element<'a, Message> = match ctx.variant {
        Variant::Columns => columns(&ctx, false),
        Variant::Newsletter => columns(&ctx, true),
        Variant::Minimal => minimal(&ctx),
    };

    Container::new(body)
        .width(Length::Fill)
        .padding([spacing::XL, spacing::XL])
        .style(styles::banner)
        .into()
}

fn copyright_line<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    text(format!(
        "© {} {}. {}",
        copyright_year(),
        ctx.restaurant_name,
        ctx.i18n.tr("footer-rights")
    ))
    .size(typography::CAPTION)
    .into()
}

fn legal_links<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::SM);
    for link in &ctx.content.links {
        row = row.push(
            button(text(link.label.get(ctx.language)).size(typography::CAPTION))
                .on_press(Message::LinkPressed(link.href.clone()))
                .padding([spacing::XXS, spacing::XS])
                .style(styles::ghost_inverse),
        );
    }
    row.into()
}

fn social_row<'a>(social_links: &'a [SocialLink]) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::SM);
    for link in social_links {
        row = row.push(
            button(text(link.platform.label()).size(typography::CAPTION))
                .on_press(Message::LinkPressed(link.url.clone()))
                .padding([spacing::XXS, spacing::XS])
                .style(styles::ghost_inverse),
        );
    }
    row.into()
}

fn newsletter_row<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let input = text_input(&ctx.i18n.tr("newsletter-placeholder"), &ctx.state.email)
        .on_input(Message::EmailChanged)
        .on_submit(Message::Subscribe)
        .padding(spacing::SM)
        .width(Length::Fixed(280.0))
        .style(styles::input(!ctx.state.invalid));

    let mut row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(input)
        .push(
            button(text(ctx.i18n.tr("newsletter-submit")).size(typography::BODY))
                .on_press(Message::Subscribe)
                .padding([spacing::SM, spacing::LG])
                .style(styles::cta),
        );

    if ctx.state.subscribed {
        row = row.push(text(ctx.i18n.tr("newsletter-success")).size(typography::BODY));
    }
    row.into()
}

fn columns<'a>(ctx: &ViewContext<'a>, newsletter: bool) -> Element<'a, Message> {
    let mut left = Column::new()
        .spacing(spacing::SM)
        .push(text(ctx.restaurant_name).size(typography::TITLE_MD));
    if let Some(description) = &ctx.content.description {
        left = left.push(text(description.get(ctx.language)).size(typography::BODY));
    }

    let mut right = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Right)
        .push(legal_links(ctx))
        .push(social_row(ctx.social_links));
    if newsletter {
        right = right.push(newsletter_row(ctx));
    }

    Column::new()
        .spacing(spacing::LG)
        .push(
            Row::new()
                .push(left)
                .push(Space::new().width(Length::Fill))
                .push(right),
        )
        .push(copyright_line(ctx))
        .into()
}

fn minimal<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    Row::new()
        .align_y(Vertical::Center)
        .push(copyright_line(ctx))
        .push(Space::new().width(Length::Fill))
        .push(legal_links(ctx))
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
    fn subscribing_with_a_valid_address_succeeds_and_clears() {
        let mut state = State::default();
        update(Message::EmailChanged("gast@example.org".into()), &mut state);
        update(Message::Subscribe, &mut state);
        assert!(state.subscribed);
        assert!(state.email.is_empty());
    }

    #[test]
    fn subscribing_with_an_invalid_address_is_flagged() {
        let mut state = State::default();
        update(Message::EmailChanged("gast".into()), &mut state);
        update(Message::Subscribe, &mut state);
        assert!(!state.subscribed);
        assert!(state.invalid);
        assert_eq!(state.email, "gast");
    }

    #[test]
    fn editing_resets_the_invalid_flag() {
        let mut state = State::default();
        update(Message::EmailChanged("gast".into()), &mut state);
        update(Message::Subscribe, &mut state);
        update(Message::EmailChanged("gast@".into()), &mut state);
        assert!(!state.invalid);
    }

    #[test]
    fn link_presses_navigate() {
        let mut state = State::default();
        let event = update(Message::LinkPressed("/impressum".into()), &mut state);
        assert!(matches!(event, Event::Navigate(href) if href == "/impressum"));
    }

    #[test]
    fn copyright_year_is_current() {
        assert!(copyright_year() >= 2026);
    }

    #[test]
    fn every_variant_renders() {
        let i18n = I18n::default();
        let site = crate::content::sample::trattoria_bella();
        let state = State::default();
        for variant in Variant::ALL {
            let _element = view(ViewContext {
                variant,
                i18n: &i18n,
                language: Language::De,
                restaurant_name: "Trattoria Bella",
                content: &site.footer,
                social_links: &site.social_links,
                state: &state,
            });
        }
    }
}
