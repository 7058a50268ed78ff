// SPDX-License-Identifier: MPL-2.0
//! Hero role: the full-width opening banner.
//!
//! Four variants. All render the same [`HeroContent`]; media-bearing
//! variants degrade to a flat theme backdrop when no media is configured.

use crate::content::{HeroContent, HeroMedia};
use crate::error::ConfigError;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::image::Handle;
use iced::widget::{button, image, text, Column, Container, Row, Space};
use iced::{Element, Length};

pub const ROLE: &str = "hero";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Full-height media backdrop with centered copy.
    Fullscreen,
    /// Copy on the left, media panel on the right.
    Split,
    /// Poster frame with a play affordance over it.
    Video,
    /// Compact centered banner on the primary color, no media.
    Minimal,
}

impl Variant {
    pub const ALL: [Variant; 4] = [
        Variant::Fullscreen,
        Variant::Split,
        Variant::Video,
        Variant::Minimal,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Variant::Fullscreen => "fullscreen",
            Variant::Split => "split",
            Variant::Video => "video",
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

#[derive(Debug, Clone)]
pub enum Message {
    CtaPressed,
}

/// Events propagated to the page.
#[derive(Debug, Clone)]
pub enum Event {
    /// The call-to-action was pressed; the page scrolls to this anchor.
    Navigate(String),
}

pub fn update(message: Message, content: &HeroContent) -> Event {
    match message {
        Message::CtaPressed => Event::Navigate(content.cta_href.clone()),
    }
}

pub struct ViewContext<'a> {
    pub variant: Variant,
    pub content: &'a HeroContent,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    match ctx.variant {
        Variant::Fullscreen => fullscreen(ctx.content),
        Variant::Split => split(ctx.content),
        Variant::Video => video(ctx.content),
        Variant::Minimal => minimal(ctx.content),
    }
}

fn copy_block(content: &HeroContent) -> Column<'_, Message> {
    let mut column = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(text(&content.title).size(typography::DISPLAY))
        .push(text(&content.subtitle).size(typography::TITLE_SM));

    if let Some(description) = &content.description {
        column = column.push(
            text(description)
                .size(typography::BODY_LG)
                .width(Length::Fixed(560.0)),
        );
    }

    column.push(
        button(text(&content.cta_label).size(typography::BODY_LG))
            .on_press(Message::CtaPressed)
            .padding([spacing::SM, spacing::LG])
            .style(styles::cta),
    )
}

fn media_panel(media: &HeroMedia) -> Element<'_, Message> {
    let src = match media {
        HeroMedia::Image { src } => src,
        HeroMedia::Video { poster, .. } => poster,
    };
    image(Handle::from_path(src))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn fullscreen(content: &HeroContent) -> Element<'_, Message> {
    let copy = Container::new(copy_block(content))
        .width(Length::Fill)
        .height(Length::Fixed(520.0))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center);

    match &content.media {
        Some(media) => iced::widget::Stack::new()
            .push(
                Container::new(media_panel(media))
                    .width(Length::Fill)
                    .height(Length::Fixed(520.0)),
            )
            .push(Container::new(copy).style(styles::scrim))
            .into(),
        None => Container::new(copy).style(styles::banner).into(),
    }
}

fn split(content: &HeroContent) -> Element<'_, Message> {
    let copy = Container::new(copy_block(content))
        .width(Length::FillPortion(1))
        .height(Length::Fixed(480.0))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .padding(spacing::XL);

    let panel: Element<'_, Message> = match &content.media {
        Some(media) => Container::new(media_panel(media))
            .width(Length::FillPortion(1))
            .height(Length::Fixed(480.0))
            .into(),
        None => Container::new(Space::new())
            .width(Length::FillPortion(1))
            .height(Length::Fixed(480.0))
            .style(styles::banner)
            .into(),
    };

    Container::new(Row::new().push(copy).push(panel))
        .width(Length::Fill)
        .style(styles::section)
        .into()
}

fn video(content: &HeroContent) -> Element<'_, Message> {
    // Playback is out of scope; the poster frame stands in for the video.
    let play_badge = Container::new(text("▶").size(typography::TITLE_LG))
        .padding(spacing::MD)
        .style(styles::scrim);

    let overlay = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(play_badge)
        .push(copy_block(content));

    let centered = Container::new(overlay)
        .width(Length::Fill)
        .height(Length::Fixed(520.0))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center);

    match &content.media {
        Some(media) => iced::widget::Stack::new()
            .push(
                Container::new(media_panel(media))
                    .width(Length::Fill)
                    .height(Length::Fixed(520.0)),
            )
            .push(Container::new(centered).style(styles::scrim))
            .into(),
        None => Container::new(centered).style(styles::banner).into(),
    }
}

fn minimal(content: &HeroContent) -> Element<'_, Message> {
    Container::new(copy_block(content))
        .width(Length::Fill)
        .padding([sizing::HEADER_HEIGHT + spacing::SECTION, spacing::XL])
        .align_x(Horizontal::Center)
        .style(styles::banner)
        .into()
}
