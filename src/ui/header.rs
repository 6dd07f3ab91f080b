// SPDX-License-Identifier: MPL-2.0
//! Header bar for app-level navigation.
//!
//! The header shows the displayed year with previous/next navigation and the
//! buttons that switch between the tracker, statistics, and menu views. All
//! view transitions after startup originate here.

use crate::app::View;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use iced::{
    alignment::Vertical,
    widget::{button, Container, Row, Space, Text},
    Element, Length,
};

/// Contextual data needed to render the header.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub year: i32,
    /// The currently active view, used to highlight its button.
    pub active: View,
}

/// Messages emitted by the header.
#[derive(Debug, Clone)]
pub enum Message {
    PreviousYear,
    NextYear,
    OpenTracker,
    OpenStatistics,
    OpenMenu,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    PreviousYear,
    NextYear,
    SwitchView(View),
}

/// Process a header message and return the corresponding event.
#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::PreviousYear => Event::PreviousYear,
        Message::NextYear => Event::NextYear,
        Message::OpenTracker => Event::SwitchView(View::Tracker),
        Message::OpenStatistics => Event::SwitchView(View::Statistics),
        Message::OpenMenu => Event::SwitchView(View::Menu),
    }
}

/// Render the header bar.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let previous_button = button(Text::new("‹").size(typography::TITLE_SM))
        .on_press(Message::PreviousYear)
        .padding([spacing::XXS, spacing::SM]);

    let year_label = Text::new(ctx.year.to_string()).size(typography::TITLE_MD);

    let next_button = button(Text::new("›").size(typography::TITLE_SM))
        .on_press(Message::NextYear)
        .padding([spacing::XXS, spacing::SM]);

    let tracker_button = view_button(
        ctx.i18n.tr("header-tracker-button"),
        Message::OpenTracker,
        ctx.active == View::Tracker,
    );
    let statistics_button = view_button(
        ctx.i18n.tr("header-statistics-button"),
        Message::OpenStatistics,
        ctx.active == View::Statistics,
    );
    let menu_button = view_button(
        ctx.i18n.tr("header-menu-button"),
        Message::OpenMenu,
        ctx.active == View::Menu,
    );

    let row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(previous_button)
        .push(year_label)
        .push(next_button)
        .push(Space::new().width(Length::Fill))
        .push(tracker_button)
        .push(statistics_button)
        .push(menu_button);

    Container::new(row).width(Length::Fill).into()
}

/// Build one view-switch button, highlighting the active view.
fn view_button<'a>(label: String, message: Message, is_active: bool) -> Element<'a, Message> {
    let mut element = button(Text::new(label).size(typography::BODY)).on_press(message);

    if is_active {
        element = element.style(button::primary);
    } else {
        element = element.style(button::secondary);
    }

    element.into()
}
