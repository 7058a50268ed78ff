// SPDX-License-Identifier: MPL-2.0
//! Menu role: the dish list.
//!
//! Four variants over the same [`MenuContent`]. Filtering never reorders:
//! items render in content order within each category. A category with no
//! items renders the translated empty-state line instead of a blank panel.

use crate::content::{MenuContent, MenuItem};
use crate::error::ConfigError;
use crate::i18n::fluent::I18n;
use crate::i18n::Language;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, text, Column, Container, Row, Space};
use iced::{Element, Length};

pub const ROLE: &str = "menu";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Category tab bar over a card grid.
    Tabs,
    /// Single centered column, no images.
    Elegant,
    /// All categories at once in a two-column layout.
    Classic,
    /// One collapsible panel per category.
    Accordion,
}

impl Variant {
    pub const ALL: [Variant; 4] = [
        Variant::Tabs,
        Variant::Elegant,
        Variant::Classic,
        Variant::Accordion,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Variant::Tabs => "tabs",
            Variant::Elegant => "elegant",
            Variant::Classic => "classic",
            Variant::Accordion => "accordion",
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

/// Interaction state shared by the stateful variants. The tab selection and
/// the accordion's open set are independent; switching variants in config
/// never carries stale state across because the page rebuilds it.
#[derive(Debug, Clone, Default)]
pub struct State {
    active_category: Option<String>,
    open_categories: Vec<String>,
}

impl State {
    /// The selected tab, falling back to the first category.
    pub fn active_category<'a>(&'a self, content: &'a MenuContent) -> Option<&'a str> {
        self.active_category
            .as_deref()
            .or_else(|| content.categories.first().map(|c| c.id.as_str()))
    }

    pub fn is_open(&self, category: &str) -> bool {
        self.open_categories.iter().any(|c| c == category)
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    CategorySelected(String),
    CategoryToggled(String),
}

pub fn update(message: Message, state: &mut State) {
    match message {
        Message::CategorySelected(id) => {
            state.active_category = Some(id);
        }
        Message::CategoryToggled(id) => {
            if let Some(position) = state.open_categories.iter().position(|c| *c == id) {
                state.open_categories.remove(position);
            } else {
                state.open_categories.push(id);
            }
        }
    }
}

/// Items of one category, in content order.
pub fn filter_by_category<'a>(items: &'a [MenuItem], category: &str) -> Vec<&'a MenuItem> {
    items.iter().filter(|i| i.category == category).collect()
}

pub struct ViewContext<'a> {
    pub variant: Variant,
    pub i18n: &'a I18n,
    pub language: Language,
    pub content: &'a MenuContent,
    pub state: &'a State,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let body: Element<'a, Message> = match ctx.variant {
        Variant::Tabs => tabs(&ctx),
        Variant::Elegant => elegant(&ctx),
        Variant::Classic => classic(&ctx),
        Variant::Accordion => accordion(&ctx),
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
        .style(styles::section)
        .into()
}

fn item_row<'a>(ctx: &ViewContext<'a>, item: &'a MenuItem) -> Element<'a, Message> {
    let mut heading = Row::new()
        .align_y(Vertical::Center)
        .push(text(item.name.get(ctx.language)).size(typography::TITLE_MD))
        .push(Space::new().width(Length::Fill))
        .push(text(&item.price).size(typography::TITLE_MD));

    for tag in &item.dietary_tags {
        heading = heading.push(
            Container::new(text(tag.label(ctx.language)).size(typography::CAPTION))
                .padding([spacing::XXS, spacing::XS])
                .style(styles::section_alt),
        );
    }

    let column = Column::new()
        .spacing(spacing::XS)
        .push(heading)
        .push(
            text(item.description.get(ctx.language))
                .size(typography::BODY)
                .color(styles::muted_text()),
        );

    Container::new(column)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::card)
        .into()
}

fn empty_state<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    Container::new(
        text(ctx.i18n.tr("menu-empty-state"))
            .size(typography::BODY_LG)
            .color(styles::muted_text()),
    )
    .width(Length::Fill)
    .padding(spacing::XL)
    .align_x(Horizontal::Center)
    .into()
}

fn category_items<'a>(ctx: &ViewContext<'a>, category: &str) -> Element<'a, Message> {
    let items = filter_by_category(&ctx.content.items, category);
    if items.is_empty() {
        return empty_state(ctx);
    }
    let mut column = Column::new().spacing(spacing::MD);
    for item in items {
        column = column.push(item_row(ctx, item));
    }
    column.into()
}

fn tabs<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let active = ctx.state.active_category(ctx.content);

    let mut tab_row = Row::new().spacing(spacing::XS);
    for category in &ctx.content.categories {
        let selected = active == Some(category.id.as_str());
        tab_row = tab_row.push(
            button(text(category.label.get(ctx.language)).size(typography::TITLE_SM))
                .on_press(Message::CategorySelected(category.id.clone()))
                .padding([spacing::XS, spacing::MD])
                .style(styles::tab(selected)),
        );
    }

    let body: Element<'a, Message> = match active {
        Some(category) => category_items(ctx, category),
        None => empty_state(ctx),
    };

    Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(tab_row)
        .push(body)
        .into()
}

fn elegant<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::XL)
        .width(Length::Fixed(640.0));

    for category in &ctx.content.categories {
        let mut group = Column::new()
            .spacing(spacing::SM)
            .align_x(Horizontal::Center)
            .push(text(category.label.get(ctx.language)).size(typography::TITLE_SM));

        let items = filter_by_category(&ctx.content.items, &category.id);
        if items.is_empty() {
            group = group.push(
                text(ctx.i18n.tr("menu-empty-state"))
                    .size(typography::BODY)
                    .color(styles::muted_text()),
            );
        }
        for item in items {
            group = group.push(
                Row::new()
                    .push(text(item.name.get(ctx.language)).size(typography::BODY_LG))
                    .push(Space::new().width(Length::Fill))
                    .push(text(&item.price).size(typography::BODY_LG)),
            );
        }
        column = column.push(group);
    }

    column.into()
}

fn classic<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut left = Column::new().spacing(spacing::LG).width(Length::FillPortion(1));
    let mut right = Column::new().spacing(spacing::LG).width(Length::FillPortion(1));

    for (index, category) in ctx.content.categories.iter().enumerate() {
        let group = Column::new()
            .spacing(spacing::SM)
            .push(text(category.label.get(ctx.language)).size(typography::TITLE_SM))
            .push(category_items(ctx, &category.id));
        if index % 2 == 0 {
            left = left.push(group);
        } else {
            right = right.push(group);
        }
    }

    Row::new().spacing(spacing::XL).push(left).push(right).into()
}

fn accordion<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut column = Column::new().spacing(spacing::SM).width(Length::Fixed(720.0));

    for category in &ctx.content.categories {
        let open = ctx.state.is_open(&category.id);
        let marker = if open { "▾" } else { "▸" };
        let header = button(
            Row::new()
                .align_y(Vertical::Center)
                .push(text(category.label.get(ctx.language)).size(typography::TITLE_SM))
                .push(Space::new().width(Length::Fill))
                .push(text(marker).size(typography::TITLE_SM)),
        )
        .on_press(Message::CategoryToggled(category.id.clone()))
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::ghost);

        let mut panel = Column::new().push(header);
        if open {
            panel = panel.push(category_items(ctx, &category.id));
        }
        column = column.push(Container::new(panel).style(styles::card));
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
    fn first_category_is_active_by_default() {
        let content = sample::trattoria_bella().menu;
        let state = State::default();
        assert_eq!(state.active_category(&content), Some("appetizers"));
    }

    #[test]
    fn selecting_a_tab_changes_the_active_category() {
        let content = sample::trattoria_bella().menu;
        let mut state = State::default();
        update(Message::CategorySelected("desserts".into()), &mut state);
        assert_eq!(state.active_category(&content), Some("desserts"));
    }

    #[test]
    fn toggling_a_category_opens_and_closes_it() {
        let mut state = State::default();
        assert!(!state.is_open("mains"));
        update(Message::CategoryToggled("mains".into()), &mut state);
        assert!(state.is_open("mains"));
        update(Message::CategoryToggled("mains".into()), &mut state);
        assert!(!state.is_open("mains"));
    }

    #[test]
    fn accordion_panels_open_independently() {
        let mut state = State::default();
        update(Message::CategoryToggled("mains".into()), &mut state);
        update(Message::CategoryToggled("drinks".into()), &mut state);
        assert!(state.is_open("mains"));
        assert!(state.is_open("drinks"));
    }

    #[test]
    fn filtering_preserves_content_order() {
        let content = sample::trattoria_bella().menu;
        let mains = filter_by_category(&content.items, "mains");
        let names: Vec<&str> = mains.iter().map(|i| i.name.de.as_str()).collect();
        assert_eq!(
            names,
            ["Spaghetti Carbonara", "Risotto ai Funghi", "Saltimbocca alla Romana"]
        );
    }

    #[test]
    fn filtering_an_unknown_category_yields_nothing() {
        let content = sample::trattoria_bella().menu;
        assert!(filter_by_category(&content.items, "specials").is_empty());
    }

    #[test]
    fn every_variant_renders() {
        let i18n = I18n::default();
        let content = sample::trattoria_bella().menu;
        let state = State::default();
        for variant in Variant::ALL {
            let _element = view(ViewContext {
                variant,
                i18n: &i18n,
                language: Language::De,
                content: &content,
                state: &state,
            });
        }
    }

    #[test]
    fn empty_menu_renders_the_empty_state() {
        let i18n = I18n::default();
        let content = MenuContent {
            title: crate::i18n::Localized::same("Menu"),
            subtitle: None,
            categories: MenuContent::default_categories(),
            items: vec![],
        };
        let state = State::default();
        let _element = view(ViewContext {
            variant: Variant::Tabs,
            i18n: &i18n,
            language: Language::En,
            content: &content,
            state: &state,
        });
    }
}
