// SPDX-License-Identifier: MPL-2.0
//! Yearly heatmap grid.
//!
//! Lays out weekday rows and week columns for the displayed year, honoring
//! the configured first day of the week. This screen is pure presentation:
//! entry data and intensity coloring live outside this shell.

use crate::config::WeekStart;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use chrono::{Datelike, NaiveDate};
use iced::{
    widget::{container, Column, Container, Row, Space, Text},
    Border, Element, Length, Theme,
};

const DAYS_PER_WEEK: usize = 7;

/// Contextual data needed to render the tracker grid.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub year: i32,
    pub week_start: WeekStart,
}

/// Render the heatmap grid for the year.
pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("tracker-title")).size(typography::TITLE_MD);

    let offset = first_day_offset(ctx.year, ctx.week_start);
    let total_days = days_in_year(ctx.year) as usize;
    let weeks = (offset + total_days).div_ceil(DAYS_PER_WEEK);

    let mut grid = Column::new().spacing(spacing::XXS);
    for (row_index, weekday_key) in weekday_keys(ctx.week_start).iter().enumerate() {
        let label = Container::new(
            Text::new(ctx.i18n.tr(weekday_key)).size(typography::CAPTION),
        )
        .width(Length::Fixed(sizing::WEEKDAY_LABEL_WIDTH));

        let mut row = Row::new().spacing(spacing::XXS).push(label);
        for week in 0..weeks {
            let slot = week * DAYS_PER_WEEK + row_index;
            let in_year = slot >= offset && slot < offset + total_days;
            row = row.push(cell(in_year));
        }
        grid = grid.push(row);
    }

    let content = Column::new()
        .spacing(spacing::MD)
        .push(title)
        .push(grid)
        .width(Length::Fill);

    Container::new(content)
        .padding(spacing::MD)
        .width(Length::Fill)
        .into()
}

/// One day cell. Days outside the displayed year render as blanks so the
/// grid keeps its rectangular shape.
fn cell<'a, Message: 'a>(in_year: bool) -> Element<'a, Message> {
    let style = move |theme: &Theme| {
        let palette = theme.extended_palette();
        container::Style {
            background: if in_year {
                Some(palette.background.weak.color.into())
            } else {
                None
            },
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    };

    Container::new(
        Space::new()
            .width(sizing::HEATMAP_CELL)
            .height(sizing::HEATMAP_CELL),
    )
        .style(style)
        .into()
}

/// Weekday label keys in grid-row order for the configured week start.
fn weekday_keys(week_start: WeekStart) -> [&'static str; DAYS_PER_WEEK] {
    match week_start {
        WeekStart::Monday => [
            "weekday-mon",
            "weekday-tue",
            "weekday-wed",
            "weekday-thu",
            "weekday-fri",
            "weekday-sat",
            "weekday-sun",
        ],
        WeekStart::Sunday => [
            "weekday-sun",
            "weekday-mon",
            "weekday-tue",
            "weekday-wed",
            "weekday-thu",
            "weekday-fri",
            "weekday-sat",
        ],
    }
}

/// Offset of January 1st within the first week column.
fn first_day_offset(year: i32, week_start: WeekStart) -> usize {
    let Some(first_day) = NaiveDate::from_ymd_opt(year, 1, 1) else {
        return 0;
    };
    let offset = match week_start {
        WeekStart::Monday => first_day.weekday().num_days_from_monday(),
        WeekStart::Sunday => first_day.weekday().num_days_from_sunday(),
    };
    offset as usize
}

/// Number of days in the year (365, or 366 in leap years).
fn days_in_year(year: i32) -> u32 {
    NaiveDate::from_ymd_opt(year, 12, 31)
        .map(|date| date.ordinal())
        .unwrap_or(365)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::I18n;

    #[test]
    fn tracker_view_renders() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            year: 2026,
            week_start: WeekStart::Monday,
        };
        let _element: Element<'_, ()> = view(ctx);
    }

    #[test]
    fn tracker_view_renders_with_sunday_start() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            year: 2026,
            week_start: WeekStart::Sunday,
        };
        let _element: Element<'_, ()> = view(ctx);
    }

    #[test]
    fn first_day_offset_matches_calendar() {
        // 2024-01-01 was a Monday.
        assert_eq!(first_day_offset(2024, WeekStart::Monday), 0);
        assert_eq!(first_day_offset(2024, WeekStart::Sunday), 1);
        // 2026-01-01 is a Thursday.
        assert_eq!(first_day_offset(2026, WeekStart::Monday), 3);
        assert_eq!(first_day_offset(2026, WeekStart::Sunday), 4);
    }

    #[test]
    fn days_in_year_handles_leap_years() {
        assert_eq!(days_in_year(2024), 366);
        assert_eq!(days_in_year(2026), 365);
        assert_eq!(days_in_year(1900), 365);
        assert_eq!(days_in_year(2000), 366);
    }

    #[test]
    fn weekday_rows_cover_the_whole_week() {
        for week_start in [WeekStart::Monday, WeekStart::Sunday] {
            let keys = weekday_keys(week_start);
            assert_eq!(keys.len(), DAYS_PER_WEEK);
            assert!(keys.contains(&"weekday-mon"));
            assert!(keys.contains(&"weekday-sun"));
        }
    }
}
