// SPDX-License-Identifier: MPL-2.0
//! About role: the restaurant's story.
//!
//! Purely presentational; the three variants emphasize different slices of
//! the same [`AboutContent`] (narrative, team, milestones).

use crate::content::{self, AboutContent, ValueIcon};
use crate::error::ConfigError;
use crate::i18n::Language;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::image::Handle;
use iced::widget::{image, text, Column, Container, Row};
use iced::{Element, Length};

pub const ROLE: &str = "about";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Narrative paragraphs with a pull quote and value cards.
    Story,
    /// Team member portraits front and center.
    Team,
    /// Milestones on a vertical timeline.
    Timeline,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Story, Variant::Team, Variant::Timeline];

    pub fn id(self) -> &'static str {
        match self {
            Variant::Story => "story",
            Variant::Team => "team",
            Variant::Timeline => "timeline",
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

/// The about section emits nothing.
#[derive(Debug, Clone)]
pub enum Message {}

pub struct ViewContext<'a> {
    pub variant: Variant,
    pub language: Language,
    pub content: &'a AboutContent,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let body: Element<'a, Message> = match ctx.variant {
        Variant::Story => story(&ctx),
        Variant::Team => team(&ctx),
        Variant::Timeline => timeline(&ctx),
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

    Container::new(column.push(body))
        .width(Length::Fill)
        .padding([spacing::SECTION, spacing::XL])
        .style(styles::section_alt)
        .into()
}

fn value_glyph(icon: ValueIcon) -> &'static str {
    match icon {
        ValueIcon::Heart => "♥",
        ValueIcon::Leaf => "❧",
        ValueIcon::Award => "★",
        ValueIcon::Users => "☺",
    }
}

fn story<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::MD)
        .width(Length::Fixed(680.0));

    for paragraph in content::paragraphs(ctx.content.narrative.get(ctx.language)) {
        column = column.push(text(paragraph).size(typography::BODY_LG));
    }

    if let Some(quote) = &ctx.content.pull_quote {
        column = column.push(
            Container::new(
                text(format!("\u{201E}{}\u{201C}", quote.get(ctx.language)))
                    .size(typography::TITLE_SM),
            )
            .padding(spacing::LG)
            .width(Length::Fill)
            .align_x(Horizontal::Center)
            .style(styles::card),
        );
    }

    if !ctx.content.values.is_empty() {
        let mut cards = Row::new().spacing(spacing::MD);
        for value in &ctx.content.values {
            cards = cards.push(
                Container::new(
                    Column::new()
                        .spacing(spacing::XS)
                        .align_x(Horizontal::Center)
                        .push(text(value_glyph(value.icon)).size(typography::TITLE_LG))
                        .push(text(value.title.get(ctx.language)).size(typography::TITLE_SM))
                        .push(
                            text(value.description.get(ctx.language))
                                .size(typography::BODY)
                                .color(styles::muted_text()),
                        ),
                )
                .padding(spacing::MD)
                .width(Length::FillPortion(1))
                .style(styles::card),
            );
        }
        column = column.push(cards);
    }

    column.into()
}

fn team<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut cards = Row::new().spacing(spacing::LG);
    for member in &ctx.content.team {
        let portrait: Element<'a, Message> = match &member.image {
            Some(src) => image(Handle::from_path(src))
                .width(Length::Fixed(sizing::TEAM_PORTRAIT))
                .height(Length::Fixed(sizing::TEAM_PORTRAIT))
                .into(),
            None => Container::new(
                text(member.name.chars().next().unwrap_or('?').to_string())
                    .size(typography::DISPLAY),
            )
            .width(Length::Fixed(sizing::TEAM_PORTRAIT))
            .height(Length::Fixed(sizing::TEAM_PORTRAIT))
            .align_x(Horizontal::Center)
            .style(styles::banner)
            .into(),
        };

        cards = cards.push(
            Container::new(
                Column::new()
                    .spacing(spacing::XS)
                    .align_x(Horizontal::Center)
                    .push(portrait)
                    .push(text(&member.name).size(typography::TITLE_SM))
                    .push(
                        text(member.role.get(ctx.language))
                            .size(typography::BODY)
                            .color(styles::muted_text()),
                    ),
            )
            .padding(spacing::MD)
            .style(styles::card),
        );
    }

    // Narrative still appears below the portraits, shortened to one lead.
    let mut column = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(cards);
    if let Some(lead) = content::paragraphs(ctx.content.narrative.get(ctx.language)).first() {
        column = column.push(
            text(*lead)
                .size(typography::BODY_LG)
                .width(Length::Fixed(680.0)),
        );
    }
    column.into()
}

fn timeline<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::LG)
        .width(Length::Fixed(640.0));

    for milestone in &ctx.content.milestones {
        column = column.push(
            Row::new()
                .spacing(spacing::LG)
                .push(
                    Container::new(text(&milestone.year).size(typography::TITLE_SM))
                        .padding([spacing::XS, spacing::SM])
                        .style(styles::banner),
                )
                .push(
                    Column::new()
                        .spacing(spacing::XXS)
                        .push(text(milestone.title.get(ctx.language)).size(typography::TITLE_SM))
                        .push(
                            text(milestone.description.get(ctx.language))
                                .size(typography::BODY)
                                .color(styles::muted_text()),
                        ),
                ),
        );
    }

    column.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::sample;

    #[test]
    fn every_variant_id_resolves_back() {
        for variant in Variant::ALL {
            assert_eq!(Variant::resolve(variant.id()), Ok(variant));
        }
    }

    #[test]
    fn every_variant_renders_the_sample_content() {
        let content = sample::trattoria_bella().about.expect("sample has about");
        for variant in Variant::ALL {
            for language in Language::ALL {
                let _element = view(ViewContext {
                    variant,
                    language,
                    content: &content,
                });
            }
        }
    }

    #[test]
    fn variants_render_with_sparse_content() {
        let content = AboutContent {
            title: crate::i18n::Localized::same("About"),
            subtitle: None,
            narrative: crate::i18n::Localized::same("One paragraph."),
            pull_quote: None,
            team: vec![],
            values: vec![],
            milestones: vec![],
        };
        for variant in Variant::ALL {
            let _element = view(ViewContext {
                variant,
                language: Language::En,
                content: &content,
            });
        }
    }
}
