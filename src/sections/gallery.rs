// SPDX-License-Identifier: MPL-2.0
//! Gallery role: impression photos.
//!
//! The grid variant opens a lightbox on click; while it is open the page
//! scroll is held and navigation wraps at both ends. The carousel variant
//! advances on a timer; any manual step re-arms the timer so the next
//! automatic advance happens a full interval later.

use crate::content::{GalleryContent, SizeHint};
use crate::error::ConfigError;
use crate::i18n::fluent::I18n;
use crate::i18n::Language;
use crate::sections::scroll_lock::{ScrollLock, ScrollLockCounter};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::image::Handle;
use iced::widget::{button, image, text, Column, Container, Row, Space, Stack};
use iced::{Element, Length};
use std::time::{Duration, Instant};

pub const ROLE: &str = "gallery";

/// Time between automatic carousel advances.
pub const AUTOPLAY_INTERVAL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Size-hinted tile grid with a lightbox.
    Grid,
    /// One image at a time, autoplaying.
    Carousel,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::Grid, Variant::Carousel];

    pub fn id(self) -> &'static str {
        match self {
            Variant::Grid => "grid",
            Variant::Carousel => "carousel",
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

/// Lightbox state. The scroll hold lives exactly as long as the lightbox
/// is open.
#[derive(Debug, Default)]
pub enum Viewer {
    #[default]
    Closed,
    Open { index: usize, _hold: ScrollLock },
}

impl Viewer {
    pub fn open_index(&self) -> Option<usize> {
        match self {
            Viewer::Closed => None,
            Viewer::Open { index, .. } => Some(*index),
        }
    }
}

#[derive(Debug)]
pub struct CarouselState {
    pub position: usize,
    pub paused: bool,
    last_advance: Instant,
}

impl Default for CarouselState {
    fn default() -> Self {
        Self {
            position: 0,
            paused: false,
            last_advance: Instant::now(),
        }
    }
}

#[derive(Debug, Default)]
pub struct State {
    pub viewer: Viewer,
    pub carousel: CarouselState,
}

#[derive(Debug, Clone)]
pub enum Message {
    ImagePressed(usize),
    CloseViewer,
    ViewerNext,
    ViewerPrevious,
    CarouselNext,
    CarouselPrevious,
    ToggleAutoplay,
    Tick(Instant),
}

fn wrap_next(index: usize, count: usize) -> usize {
    (index + 1) % count
}

fn wrap_previous(index: usize, count: usize) -> usize {
    (index + count - 1) % count
}

pub fn update(
    message: Message,
    state: &mut State,
    image_count: usize,
    locks: &ScrollLockCounter,
) {
    match message {
        Message::ImagePressed(index) => {
            if index < image_count {
                state.viewer = Viewer::Open {
                    index,
                    _hold: locks.acquire(),
                };
            }
        }
        Message::CloseViewer => {
            state.viewer = Viewer::Closed;
        }
        Message::ViewerNext => {
            if let Viewer::Open { index, .. } = &mut state.viewer {
                if image_count > 0 {
                    *index = wrap_next(*index, image_count);
                }
            }
        }
        Message::ViewerPrevious => {
            if let Viewer::Open { index, .. } = &mut state.viewer {
                if image_count > 0 {
                    *index = wrap_previous(*index, image_count);
                }
            }
        }
        Message::CarouselNext => {
            if image_count > 0 {
                state.carousel.position = wrap_next(state.carousel.position, image_count);
                state.carousel.last_advance = Instant::now();
            }
        }
        Message::CarouselPrevious => {
            if image_count > 0 {
                state.carousel.position = wrap_previous(state.carousel.position, image_count);
                state.carousel.last_advance = Instant::now();
            }
        }
        Message::ToggleAutoplay => {
            state.carousel.paused = !state.carousel.paused;
            // Resuming starts a fresh interval rather than firing instantly.
            state.carousel.last_advance = Instant::now();
        }
        Message::Tick(now) => {
            if !state.carousel.paused
                && image_count > 1
                && now.duration_since(state.carousel.last_advance) >= AUTOPLAY_INTERVAL
            {
                state.carousel.position = wrap_next(state.carousel.position, image_count);
                state.carousel.last_advance = now;
            }
        }
    }
}

pub struct ViewContext<'a> {
    pub variant: Variant,
    pub i18n: &'a I18n,
    pub language: Language,
    pub content: &'a GalleryContent,
    pub state: &'a State,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let body: Element<'a, Message> = match ctx.variant {
        Variant::Grid => grid(&ctx),
        Variant::Carousel => carousel(&ctx),
    };

    let mut column = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(text(ctx.content.title.get(ctx.language)).size(typography::TITLE_LG));

    if let Some(subtitle) = &ctx.content.subtitle {
        column = column.push(
            text(subtitle.get(ctx.language))
                .size(typography::BODY_LG)
                .color(styles::muted_text()),
        );
    }

    let section = Container::new(column.push(body))
        .width(Length::Fill)
        .padding([spacing::SECTION, spacing::XL])
        .style(styles::section);

    match ctx.state.viewer.open_index() {
        Some(index) if ctx.variant == Variant::Grid => Stack::new()
            .push(section)
            .push(lightbox(&ctx, index))
            .into(),
        _ => section.into(),
    }
}

fn tile_height(size: SizeHint) -> f32 {
    match size {
        SizeHint::Small => sizing::GALLERY_TILE * 0.75,
        SizeHint::Medium => sizing::GALLERY_TILE,
        SizeHint::Large => sizing::GALLERY_TILE * 1.5,
    }
}

fn grid<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::MD);
    for (index, entry) in ctx.content.images.iter().enumerate() {
        let tile = button(
            image(Handle::from_path(&entry.src))
                .width(Length::Fixed(sizing::GALLERY_TILE))
                .height(Length::Fixed(tile_height(entry.size))),
        )
        .on_press(Message::ImagePressed(index))
        .padding(0)
        .style(styles::ghost);
        row = row.push(tile);
    }
    row.into()
}

fn lightbox<'a>(ctx: &ViewContext<'a>, index: usize) -> Element<'a, Message> {
    let entry = &ctx.content.images[index.min(ctx.content.images.len().saturating_sub(1))];

    let mut column = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(
            image(Handle::from_path(&entry.src))
                .width(Length::Fixed(sizing::CONTENT_WIDTH * 0.6)),
        );

    if let Some(caption) = &entry.caption {
        column = column.push(text(caption.get(ctx.language)).size(typography::BODY_LG));
    }

    column = column.push(
        Row::new()
            .spacing(spacing::MD)
            .push(
                button(text(ctx.i18n.tr("gallery-previous")))
                    .on_press(Message::ViewerPrevious)
                    .style(styles::ghost_inverse),
            )
            .push(
                text(format!("{} / {}", index + 1, ctx.content.images.len()))
                    .size(typography::BODY),
            )
            .push(
                button(text(ctx.i18n.tr("gallery-next")))
                    .on_press(Message::ViewerNext)
                    .style(styles::ghost_inverse),
            )
            .push(
                button(text(ctx.i18n.tr("gallery-close")))
                    .on_press(Message::CloseViewer)
                    .style(styles::ghost_inverse),
            ),
    );

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::scrim)
        .into()
}

fn carousel<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    if ctx.content.images.is_empty() {
        return Space::new().into();
    }
    let position = ctx.state.carousel.position.min(ctx.content.images.len() - 1);
    let entry = &ctx.content.images[position];

    let autoplay_label = if ctx.state.carousel.paused {
        ctx.i18n.tr("gallery-play")
    } else {
        ctx.i18n.tr("gallery-pause")
    };

    let mut dots = Row::new().spacing(spacing::XS);
    for index in 0..ctx.content.images.len() {
        dots = dots.push(text(if index == position { "●" } else { "○" }).size(typography::BODY));
    }

    let mut column = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(
            image(Handle::from_path(&entry.src))
                .width(Length::Fixed(sizing::CONTENT_WIDTH * 0.6))
                .height(Length::Fixed(sizing::GALLERY_TILE * 1.75)),
        );

    if let Some(caption) = &entry.caption {
        column = column.push(
            text(caption.get(ctx.language))
                .size(typography::BODY_LG)
                .color(styles::muted_text()),
        );
    }

    column
        .push(
            Row::new()
                .spacing(spacing::MD)
                .align_y(Vertical::Center)
                .push(
                    button(text(ctx.i18n.tr("gallery-previous")))
                        .on_press(Message::CarouselPrevious)
                        .style(styles::ghost),
                )
                .push(dots)
                .push(
                    button(text(ctx.i18n.tr("gallery-next")))
                        .on_press(Message::CarouselNext)
                        .style(styles::ghost),
                )
                .push(
                    button(text(autoplay_label))
                        .on_press(Message::ToggleAutoplay)
                        .style(styles::ghost),
                ),
        )
        .into()
}
