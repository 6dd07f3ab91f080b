// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders nothing until the displayed year is known, then dispatches on the
//! active [`View`] with the menu screen as the named fallback arm.

use super::{Message, View};
use crate::config::WeekStart;
use crate::i18n::fluent::I18n;
use crate::ui::header::{self, ViewContext as HeaderViewContext};
use crate::ui::menu::{self, ViewContext as MenuViewContext};
use crate::ui::statistics::{self, ViewContext as StatisticsViewContext};
use crate::ui::tracker::{self, ViewContext as TrackerViewContext};
use iced::{
    widget::{Column, Container, Space},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub view: View,
    pub current_year: Option<i32>,
    pub week_start: WeekStart,
}

/// Resolves what the root should render: `None` until the displayed year is
/// known, otherwise the year together with the active view.
fn resolve(ctx: &ViewContext<'_>) -> Option<(i32, View)> {
    ctx.current_year.map(|year| (year, ctx.view))
}

/// Renders the current application view based on the active view state.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    // Not initialized yet: the year is still being resolved.
    let Some((year, active)) = resolve(&ctx) else {
        return Space::new().width(Length::Fill).height(Length::Fill).into();
    };

    let header_view = header::view(HeaderViewContext {
        i18n: ctx.i18n,
        year,
        active,
    })
    .map(Message::Header);

    let body: Element<'_, Message> = match active {
        View::Tracker => tracker::view(TrackerViewContext {
            i18n: ctx.i18n,
            year,
            week_start: ctx.week_start,
        }),
        View::Statistics => statistics::view(StatisticsViewContext {
            i18n: ctx.i18n,
            year,
        }),
        View::Menu => menu::view(MenuViewContext {
            i18n: ctx.i18n,
            week_start: ctx.week_start,
        })
        .map(Message::Menu),
    };

    let column = Column::new()
        .push(header_view)
        .push(Container::new(body).width(Length::Fill).height(Length::Fill));

    Container::new(column.width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::I18n;

    fn ctx_with_year(i18n: &I18n, view: View) -> ViewContext<'_> {
        ViewContext {
            i18n,
            view,
            current_year: Some(2026),
            week_start: WeekStart::Monday,
        }
    }

    #[test]
    fn resolves_to_nothing_without_year_for_every_view() {
        let i18n = I18n::default();
        for view_state in [View::Tracker, View::Statistics, View::Menu] {
            let ctx = ViewContext {
                i18n: &i18n,
                view: view_state,
                current_year: None,
                week_start: WeekStart::Monday,
            };
            assert_eq!(resolve(&ctx), None);
            let _element = view(ctx);
        }
    }

    #[test]
    fn resolves_to_active_view_once_year_is_known() {
        let i18n = I18n::default();
        for view_state in [View::Tracker, View::Statistics, View::Menu] {
            let ctx = ctx_with_year(&i18n, view_state);
            assert_eq!(resolve(&ctx), Some((2026, view_state)));
        }
    }

    #[test]
    fn renders_tracker_view() {
        let i18n = I18n::default();
        let _element = view(ctx_with_year(&i18n, View::Tracker));
    }

    #[test]
    fn renders_statistics_view() {
        let i18n = I18n::default();
        let _element = view(ctx_with_year(&i18n, View::Statistics));
    }

    #[test]
    fn renders_menu_view() {
        let i18n = I18n::default();
        let _element = view(ctx_with_year(&i18n, View::Menu));
    }
}
