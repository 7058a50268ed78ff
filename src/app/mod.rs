// SPDX-License-Identifier: MPL-2.0
//! Application root: config loading, language state and the update loop.
//!
//! The `App` owns the composed [`Page`] and translates its events into side
//! effects (scroll tasks, the simulated form submission, language switches).
//! A configuration that fails validation is not papered over; the app boots
//! into an error screen showing the translated failure.

mod message;
mod subscription;

pub use message::{Flags, Message};

use crate::config;
use crate::content::sample;
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::i18n::Language;
use crate::page::{self, Page};
use crate::sections::contact;
use crate::theme;
use crate::ui::design_tokens::{spacing, typography};
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{container, operation, text, Column};
use iced::{window, Element, Length, Subscription, Task, Theme};
use std::path::Path;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const MIN_WINDOW_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 600;

pub struct App {
    i18n: I18n,
    language: Language,
    page: Result<Page, Error>,
}

impl App {
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang);
        let language = if i18n.current_locale().language.as_str() == "en" {
            Language::En
        } else {
            Language::De
        };

        let config = match &flags.config_path {
            Some(path) => config::load_from_path(Path::new(path)),
            None => config::load(),
        };

        let page = config.and_then(|config| {
            config.validate()?;
            theme::store::apply_global(config.theme);
            Page::new(config, sample::trattoria_bella()).map_err(Error::Config)
        });

        (
            Self {
                i18n,
                language,
                page,
            },
            Task::none(),
        )
    }

    pub fn title(&self) -> String {
        match &self.page {
            Ok(page) => page.config().restaurant_name.clone(),
            Err(_) => self.i18n.tr("window-title"),
        }
    }

    pub fn theme(&self) -> Theme {
        Theme::Light
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let Ok(page) = &mut self.page else {
            return Task::none();
        };

        match message {
            Message::Page(message) => match page.update(message) {
                page::Event::None => Task::none(),
                page::Event::ToggleLanguage => {
                    self.language = self.language.toggled();
                    self.i18n.set_language(self.language);
                    Task::none()
                }
                page::Event::SubmitEnquiry(_values) => {
                    // There is no backend; the submission is simulated and
                    // always succeeds after the processing delay.
                    Task::perform(
                        async {
                            tokio::time::sleep(contact::SUBMISSION_DELAY).await;
                            true
                        },
                        Message::SubmissionFinished,
                    )
                }
                page::Event::ScrollTo(offset) => {
                    operation::snap_to(page::scroll_id(), RelativeOffset { x: 0.0, y: offset })
                }
                page::Event::OpenUrl(_url) => {
                    // External targets are out of scope for the showcase.
                    Task::none()
                }
            },
            Message::SubmissionFinished(success) => {
                page.update(page::Message::Contact(contact::Message::SubmissionFinished(
                    success,
                )));
                Task::none()
            }
            Message::EscapePressed => {
                page.close_overlays();
                Task::none()
            }
            Message::Tick(now) => {
                page.update(page::Message::Gallery(crate::sections::gallery::Message::Tick(now)));
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        match &self.page {
            Ok(page) => page.view(&self.i18n, self.language).map(Message::Page),
            Err(error) => self.error_view(error),
        }
    }

    fn error_view(&self, error: &Error) -> Element<'_, Message> {
        let detail = match error {
            Error::Config(config_error) => self.i18n.tr(config_error.i18n_key()),
            Error::Io(message) => message.clone(),
        };
        let column = Column::new()
            .spacing(spacing::MD)
            .push(text(self.i18n.tr("error-title")).size(typography::TITLE_LG))
            .push(text(detail).size(typography::BODY_LG))
            .push(text(error.to_string()).size(typography::CAPTION));

        container(column)
            .center(Length::Fill)
            .padding(spacing::XL)
            .into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let Ok(page) = &self.page else {
            return Subscription::none();
        };
        Subscription::batch([
            subscription::create_keyboard_subscription(page.has_open_overlay()),
            subscription::create_tick_subscription(page.wants_tick()),
        ])
    }
}

fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booted() -> App {
        let (app, _task) = App::new(Flags {
            lang: Some("de".into()),
            config_path: None,
        });
        app
    }

    #[test]
    fn boot_composes_the_default_page() {
        let _store = theme::store::write_lock().lock().expect("store lock");
        let app = booted();
        assert!(app.page.is_ok());
        assert_eq!(app.title(), "Trattoria Bella");
    }

    #[test]
    fn language_toggle_switches_content_and_chrome() {
        let _store = theme::store::write_lock().lock().expect("store lock");
        let mut app = booted();
        assert_eq!(app.language, Language::De);
        app.update(Message::Page(page::Message::Header(
            crate::sections::header::Message::ToggleLanguage,
        )));
        assert_eq!(app.language, Language::En);
        assert_eq!(app.i18n.current_locale().to_string(), "en");
    }

    #[test]
    fn boot_with_a_broken_config_shows_the_error_screen() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("site.toml");
        std::fs::write(&path, "theme = \"italian\"").expect("write config");
        let (app, _task) = App::new(Flags {
            lang: None,
            config_path: Some(path.to_string_lossy().into_owned()),
        });
        assert!(app.page.is_err());
        let _element = app.view();
    }
}
