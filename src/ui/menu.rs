// SPDX-License-Identifier: MPL-2.0
//! Fallback menu screen.
//!
//! Anything that is neither the tracker nor the statistics screen lands
//! here. The menu hosts the user preferences (display language, first day
//! of the week) and the support section with its fixed donation links.

use crate::config::WeekStart;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use iced::{
    alignment::Horizontal,
    widget::{button, scrollable, Button, Column, Container, Row, Text},
    Element, Length,
};
use unic_langid::LanguageIdentifier;

/// Donation page URL. Hard-coded on purpose, not configurable.
const DONATION_URL: &str = "https://www.buymeacoffee.com/mrubanau";

/// Donation button image URL shipped by the donation service.
const DONATION_IMAGE_URL: &str = "https://img.buymeacoffee.com/button-api/?text=Buy me a coffee&emoji=&slug=mrubanau&button_colour=FFDD00&font_colour=000000&font_family=Cookie&outline_colour=000000&coffee_colour=ffffff";

/// Contextual data needed to render the menu screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub week_start: WeekStart,
}

/// Messages emitted by the menu screen.
#[derive(Debug, Clone)]
pub enum Message {
    LanguageSelected(LanguageIdentifier),
    WeekStartSelected(WeekStart),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    LanguageSelected(LanguageIdentifier),
    WeekStartSelected(WeekStart),
}

/// Process a menu message and return the corresponding event.
#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::LanguageSelected(locale) => Event::LanguageSelected(locale),
        Message::WeekStartSelected(week_start) => Event::WeekStartSelected(week_start),
    }
}

/// Render the menu screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title = Text::new(ctx.i18n.tr("menu-title")).size(typography::TITLE_LG);

    let content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::MD)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .push(title)
        .push(build_language_section(&ctx))
        .push(build_week_start_section(&ctx))
        .push(build_support_section(&ctx));

    scrollable(content).into()
}

/// Build the language selection section.
fn build_language_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(ctx.i18n.tr("menu-language-label")).size(typography::TITLE_SM));

    for locale in &ctx.i18n.available_locales {
        let display_name = locale.to_string();

        // Check for a translation of the language name, e.g. "language-name-en-US"
        let translated_name_key = format!("language-name-{}", locale);
        let translated_name = ctx.i18n.tr(&translated_name_key);
        let button_text = if translated_name.starts_with("MISSING:") {
            display_name.clone()
        } else {
            format!("{} ({})", translated_name, display_name)
        };

        let is_current_locale = ctx.i18n.current_locale() == locale;
        let mut locale_button = Button::new(Text::new(button_text).size(typography::BODY))
            .on_press(Message::LanguageSelected(locale.clone()));

        if is_current_locale {
            locale_button = locale_button.style(button::primary);
        } else {
            locale_button = locale_button.style(button::secondary);
        }

        column = column.push(locale_button);
    }

    column.into()
}

/// Build the week-start selection section.
fn build_week_start_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let label = Text::new(ctx.i18n.tr("menu-week-start-label")).size(typography::TITLE_SM);

    let monday = week_start_button(
        ctx.i18n.tr("week-start-monday"),
        WeekStart::Monday,
        ctx.week_start,
    );
    let sunday = week_start_button(
        ctx.i18n.tr("week-start-sunday"),
        WeekStart::Sunday,
        ctx.week_start,
    );

    Column::new()
        .spacing(spacing::XS)
        .push(label)
        .push(Row::new().spacing(spacing::SM).push(monday).push(sunday))
        .into()
}

fn week_start_button<'a>(
    label: String,
    value: WeekStart,
    current: WeekStart,
) -> Element<'a, Message> {
    let mut element = Button::new(Text::new(label).size(typography::BODY))
        .on_press(Message::WeekStartSelected(value));

    if value == current {
        element = element.style(button::primary);
    } else {
        element = element.style(button::secondary);
    }

    element.into()
}

/// Build the support section with the donation call-to-action.
fn build_support_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let heading = Text::new(ctx.i18n.tr("menu-support-title")).size(typography::TITLE_SM);
    let pitch = Text::new(ctx.i18n.tr("menu-donation-text")).size(typography::BODY);

    let content = Column::new()
        .spacing(spacing::XS)
        .push(heading)
        .push(pitch)
        .push(build_link_item(
            &ctx.i18n.tr("menu-donation-link"),
            DONATION_URL,
        ))
        .push(build_link_item(
            &ctx.i18n.tr("menu-donation-image"),
            DONATION_IMAGE_URL,
        ));

    Container::new(content).width(Length::Fill).into()
}

/// Build a link item with label and URL.
fn build_link_item<'a>(label: &str, url: &'a str) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::SM)
        .push(Text::new(format!("{label}:")).size(typography::BODY))
        .push(Text::new(url).size(typography::BODY))
        .into()
}
