// SPDX-License-Identifier: MPL-2.0
//! Contact role: contact details and the enquiry/reservation form.
//!
//! The form is a small state machine: editing clears the previous outcome,
//! submitting is refused while a submission is in flight, and the fields
//! are cleared only on success. Validation never blocks typing; it runs on
//! submit and highlights the offending fields.

use crate::config;
use crate::content::ContactContent;
use crate::error::ConfigError;
use crate::i18n::fluent::I18n;
use crate::i18n::Language;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{button, text, text_input, Column, Container, Row};
use iced::{Element, Length};
use std::time::Duration;

pub const ROLE: &str = "contact";

/// Simulated processing time for a submission; there is no backend.
pub const SUBMISSION_DELAY: Duration = Duration::from_millis(1500);

/// Pre-filled party size for reservation forms.
const DEFAULT_GUESTS: &str = "2";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Contact details beside an enquiry form.
    Split,
    /// Reservation form with date, time and party size.
    Reservation,
    /// Detail cards over a compact enquiry form.
    Cards,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Split, Variant::Reservation, Variant::Cards];

    pub fn id(self) -> &'static str {
        match self {
            Variant::Split => "split",
            Variant::Reservation => "reservation",
            Variant::Cards => "cards",
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

    fn takes_reservations(self) -> bool {
        matches!(self, Variant::Reservation)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    MessageBody,
    Date,
    Time,
    Guests,
}

/// Validated form payload handed to the page on submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormValues {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub reservation: Option<Reservation>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    pub date: String,
    pub time: String,
    pub guests: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

#[derive(Debug, Clone)]
pub struct State {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub date: String,
    pub time: String,
    pub guests: String,
    pub submitting: bool,
    pub outcome: Option<Outcome>,
    invalid: Vec<Field>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            message: String::new(),
            date: String::new(),
            time: String::new(),
            guests: DEFAULT_GUESTS.into(),
            submitting: false,
            outcome: None,
            invalid: Vec::new(),
        }
    }
}

pub(crate) fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

impl State {
    fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::MessageBody => &mut self.message,
            Field::Date => &mut self.date,
            Field::Time => &mut self.time,
            Field::Guests => &mut self.guests,
        }
    }

    pub fn is_invalid(&self, field: Field) -> bool {
        self.invalid.contains(&field)
    }

    /// Validates the current fields, recording failures for the view.
    fn validate(&mut self, reservation: bool) -> Option<FormValues> {
        self.invalid.clear();

        if self.name.trim().is_empty() {
            self.invalid.push(Field::Name);
        }
        if !is_valid_email(self.email.trim()) {
            self.invalid.push(Field::Email);
        }

        let mut reservation_values = None;
        if reservation {
            if self.date.trim().is_empty() {
                self.invalid.push(Field::Date);
            }
            if self.time.trim().is_empty() {
                self.invalid.push(Field::Time);
            }
            match self.guests.trim().parse::<u8>() {
                Ok(guests) if guests > 0 => {
                    reservation_values = Some(Reservation {
                        date: self.date.trim().to_owned(),
                        time: self.time.trim().to_owned(),
                        guests,
                    });
                }
                _ => self.invalid.push(Field::Guests),
            }
        } else if self.message.trim().is_empty() {
            self.invalid.push(Field::MessageBody);
        }

        if !self.invalid.is_empty() {
            return None;
        }
        Some(FormValues {
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            phone: self.phone.trim().to_owned(),
            message: self.message.trim().to_owned(),
            reservation: reservation_values,
        })
    }

    fn clear_fields(&mut self) {
        self.name.clear();
        self.email.clear();
        self.phone.clear();
        self.message.clear();
        self.date.clear();
        self.time.clear();
        self.guests = DEFAULT_GUESTS.into();
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    FieldChanged(Field, String),
    Submit,
    SubmissionFinished(bool),
}

#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// A valid submission; the page runs the (simulated) send and reports
    /// back through [`Message::SubmissionFinished`].
    Submit(FormValues),
}

pub fn update(message: Message, state: &mut State, variant: Variant) -> Event {
    match message {
        Message::FieldChanged(field, value) => {
            *state.field_mut(field) = value;
            state.outcome = None;
            Event::None
        }
        Message::Submit => {
            // One submission at a time.
            if state.submitting {
                return Event::None;
            }
            match state.validate(variant.takes_reservations()) {
                Some(values) => {
                    state.submitting = true;
                    state.outcome = None;
                    Event::Submit(values)
                }
                None => Event::None,
            }
        }
        Message::SubmissionFinished(success) => {
            state.submitting = false;
            state.outcome = Some(if success {
                Outcome::Success
            } else {
                Outcome::Failure
            });
            if success {
                state.clear_fields();
            }
            Event::None
        }
    }
}

pub struct ViewContext<'a> {
    pub variant: Variant,
    pub i18n: &'a I18n,
    pub language: Language,
    pub content: &'a ContactContent,
    pub contact: &'a config::Contact,
    pub hours: &'a config::WeeklyHours,
    pub maps_url: Option<&'a str>,
    pub maps_embed_url: Option<&'a str>,
    pub state: &'a State,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let body: Element<'a, Message> = match ctx.variant {
        Variant::Split => Row::new()
            .spacing(spacing::XL)
            .push(Container::new(details(&ctx)).width(Length::FillPortion(1)))
            .push(Container::new(form(&ctx)).width(Length::FillPortion(1)))
            .into(),
        Variant::Reservation => Column::new()
            .spacing(spacing::XL)
            .align_x(Horizontal::Center)
            .push(form(&ctx))
            .push(details(&ctx))
            .into(),
        Variant::Cards => Column::new()
            .spacing(spacing::XL)
            .align_x(Horizontal::Center)
            .push(detail_cards(&ctx))
            .push(form(&ctx))
            .into(),
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

fn detail_line<'a>(label: String, value: String) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(text(label).size(typography::CAPTION).color(styles::muted_text()))
        .push(text(value).size(typography::BODY_LG))
        .into()
}

fn details<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let address = format!(
        "{}, {} {}, {}",
        ctx.contact.address.street,
        ctx.contact.address.zip,
        ctx.contact.address.city,
        ctx.contact.address.country
    );

    let mut hours = Column::new().spacing(spacing::XXS);
    for (weekday, times) in ctx.hours.entries() {
        hours = hours.push(
            Row::new()
                .spacing(spacing::MD)
                .push(
                    text(ctx.i18n.tr(weekday.i18n_key()))
                        .size(typography::BODY)
                        .width(Length::Fixed(110.0)),
                )
                .push(text(times.to_owned()).size(typography::BODY)),
        );
    }

    let mut column = Column::new()
        .spacing(spacing::MD)
        .push(detail_line(
            ctx.i18n.tr("contact-phone-label"),
            ctx.contact.phone.clone(),
        ))
        .push(detail_line(
            ctx.i18n.tr("contact-email-label"),
            ctx.contact.email.clone(),
        ))
        .push(detail_line(ctx.i18n.tr("contact-address-label"), address));

    // The embed URL stands in for the link when only it is configured.
    if let Some(url) = ctx.maps_url.or(ctx.maps_embed_url) {
        column = column.push(detail_line(
            ctx.i18n.tr("contact-directions-label"),
            url.to_owned(),
        ));
    }

    column
        .push(
            text(ctx.i18n.tr("contact-hours-label"))
                .size(typography::CAPTION)
                .color(styles::muted_text()),
        )
        .push(hours)
        .into()
}

fn detail_cards<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let address = format!(
        "{} {}, {}",
        ctx.contact.address.zip, ctx.contact.address.city, ctx.contact.address.street
    );
    let cards = [
        (ctx.i18n.tr("contact-phone-label"), ctx.contact.phone.clone()),
        (ctx.i18n.tr("contact-email-label"), ctx.contact.email.clone()),
        (ctx.i18n.tr("contact-address-label"), address),
    ];

    let mut row = Row::new().spacing(spacing::MD);
    for (label, value) in cards {
        row = row.push(
            Container::new(detail_line(label, value))
                .padding(spacing::LG)
                .width(Length::FillPortion(1))
                .style(styles::card),
        );
    }
    row.into()
}

fn field_input<'a>(
    ctx: &ViewContext<'a>,
    field: Field,
    placeholder_key: &str,
    value: &str,
) -> Element<'a, Message> {
    text_input(&ctx.i18n.tr(placeholder_key), value)
        .on_input(move |v| Message::FieldChanged(field, v))
        .on_submit(Message::Submit)
        .padding(spacing::SM)
        .style(styles::input(!ctx.state.is_invalid(field)))
        .into()
}

fn form<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::SM)
        .width(Length::Fixed(420.0))
        .push(field_input(ctx, Field::Name, "form-name", &ctx.state.name))
        .push(field_input(ctx, Field::Email, "form-email", &ctx.state.email))
        .push(field_input(ctx, Field::Phone, "form-phone", &ctx.state.phone));

    if ctx.variant.takes_reservations() {
        column = column
            .push(
                Row::new()
                    .spacing(spacing::SM)
                    .push(field_input(ctx, Field::Date, "form-date", &ctx.state.date))
                    .push(field_input(ctx, Field::Time, "form-time", &ctx.state.time)),
            )
            .push(field_input(
                ctx,
                Field::Guests,
                "form-guests",
                &ctx.state.guests,
            ));
    } else {
        column = column.push(field_input(
            ctx,
            Field::MessageBody,
            "form-message",
            &ctx.state.message,
        ));
    }

    let submit_key = if ctx.state.submitting {
        "form-submitting"
    } else if ctx.variant.takes_reservations() {
        "form-submit-reservation"
    } else {
        "form-submit"
    };
    let mut submit = button(text(ctx.i18n.tr(submit_key)).size(typography::BODY_LG))
        .padding([spacing::SM, spacing::LG])
        .style(styles::primary);
    if !ctx.state.submitting {
        submit = submit.on_press(Message::Submit);
    }
    column = column.push(submit);

    if let Some(outcome) = ctx.state.outcome {
        let key = match outcome {
            Outcome::Success => "form-success",
            Outcome::Failure => "form-failure",
        };
        column = column.push(text(ctx.i18n.tr(key)).size(typography::BODY));
    }

    column.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_state() -> State {
        State {
            name: "Anna Beispiel".into(),
            email: "anna@example.org".into(),
            phone: "+49 2381 000000".into(),
            message: "Haben Sie am Samstag einen Tisch frei?".into(),
            ..State::default()
        }
    }

    #[test]
    fn every_variant_id_resolves_back() {
        for variant in Variant::ALL {
            assert_eq!(Variant::resolve(variant.id()), Ok(variant));
        }
    }

    #[test]
    fn email_validation_accepts_plain_addresses() {
        assert!(is_valid_email("anna@example.org"));
        assert!(!is_valid_email("anna"));
        assert!(!is_valid_email("@example.org"));
        assert!(!is_valid_email("anna@example."));
        assert!(!is_valid_email("anna@.org"));
    }

    #[test]
    fn valid_submission_emits_the_payload_and_starts_submitting() {
        let mut state = filled_state();
        let event = update(Message::Submit, &mut state, Variant::Split);
        let Event::Submit(values) = event else {
            panic!("expected a submit event");
        };
        assert_eq!(values.name, "Anna Beispiel");
        assert!(values.reservation.is_none());
        assert!(state.submitting);
    }

    #[test]
    fn submit_is_refused_while_in_flight() {
        let mut state = filled_state();
        update(Message::Submit, &mut state, Variant::Split);
        let second = update(Message::Submit, &mut state, Variant::Split);
        assert!(matches!(second, Event::None));
    }

    #[test]
    fn invalid_fields_block_the_submission() {
        let mut state = filled_state();
        state.email = "not-an-address".into();
        let event = update(Message::Submit, &mut state, Variant::Split);
        assert!(matches!(event, Event::None));
        assert!(state.is_invalid(Field::Email));
        assert!(!state.submitting);
    }

    #[test]
    fn party_size_defaults_to_two() {
        assert_eq!(State::default().guests, "2");
    }

    #[test]
    fn reservation_variant_requires_date_time_and_guests() {
        let mut state = filled_state();
        state.guests.clear();
        let event = update(Message::Submit, &mut state, Variant::Reservation);
        assert!(matches!(event, Event::None));
        assert!(state.is_invalid(Field::Date));
        assert!(state.is_invalid(Field::Time));
        assert!(state.is_invalid(Field::Guests));

        state.date = "2026-09-12".into();
        state.time = "19:30".into();
        state.guests = "4".into();
        let event = update(Message::Submit, &mut state, Variant::Reservation);
        let Event::Submit(values) = event else {
            panic!("expected a submit event");
        };
        let reservation = values.reservation.expect("reservation payload");
        assert_eq!(reservation.guests, 4);
    }

    #[test]
    fn zero_guests_is_rejected() {
        let mut state = filled_state();
        state.date = "2026-09-12".into();
        state.time = "19:30".into();
        state.guests = "0".into();
        let event = update(Message::Submit, &mut state, Variant::Reservation);
        assert!(matches!(event, Event::None));
        assert!(state.is_invalid(Field::Guests));
    }

    #[test]
    fn success_clears_the_fields_and_reports() {
        let mut state = filled_state();
        update(Message::Submit, &mut state, Variant::Split);
        update(Message::SubmissionFinished(true), &mut state, Variant::Split);
        assert!(!state.submitting);
        assert_eq!(state.outcome, Some(Outcome::Success));
        assert!(state.name.is_empty());
    }

    #[test]
    fn failure_keeps_the_fields_for_retry() {
        let mut state = filled_state();
        update(Message::Submit, &mut state, Variant::Split);
        update(Message::SubmissionFinished(false), &mut state, Variant::Split);
        assert_eq!(state.outcome, Some(Outcome::Failure));
        assert_eq!(state.name, "Anna Beispiel");
    }

    #[test]
    fn editing_clears_a_stale_outcome() {
        let mut state = filled_state();
        state.outcome = Some(Outcome::Success);
        update(
            Message::FieldChanged(Field::Name, "B".into()),
            &mut state,
            Variant::Split,
        );
        assert_eq!(state.outcome, None);
    }

    #[test]
    fn every_variant_renders() {
        let i18n = I18n::default();
        let site = crate::config::SiteConfig::default();
        let content = crate::content::sample::trattoria_bella().contact;
        let state = filled_state();
        for variant in Variant::ALL {
            let _element = view(ViewContext {
                variant,
                i18n: &i18n,
                language: Language::De,
                content: &content,
                contact: &site.contact,
                hours: &site.hours,
                maps_url: site.maps_url.as_deref(),
                maps_embed_url: site.maps_embed_url.as_deref(),
                state: &state,
            });
        }
    }
}
