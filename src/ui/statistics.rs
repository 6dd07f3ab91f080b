// SPDX-License-Identifier: MPL-2.0
//! Statistics screen shell.
//!
//! Shows the localized screen frame for the displayed year. Computing the
//! underlying statistics is outside the scope of this shell.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use iced::{
    widget::{Column, Container, Text},
    Element, Length,
};

/// Contextual data needed to render the statistics screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub year: i32,
}

/// Render the statistics screen.
pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("statistics-title")).size(typography::TITLE_MD);

    let year_line = Text::new(format!(
        "{}: {}",
        ctx.i18n.tr("statistics-year-label"),
        ctx.year
    ))
    .size(typography::BODY);

    let empty_hint = Text::new(ctx.i18n.tr("statistics-empty")).size(typography::BODY);

    let content = Column::new()
        .spacing(spacing::MD)
        .push(title)
        .push(year_line)
        .push(empty_hint);

    Container::new(content)
        .padding(spacing::MD)
        .width(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::I18n;

    #[test]
    fn statistics_view_renders() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            year: 2026,
        };
        let _element: Element<'_, ()> = view(ctx);
    }
}
