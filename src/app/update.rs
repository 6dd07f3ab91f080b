// SPDX-License-Identifier: MPL-2.0
//! Message routing for the root application.
//!
//! Translates component events into view transitions, year navigation, and
//! preference side effects. View transitions only ever originate here; the
//! initial view is fixed at construction and never re-enforced.

use super::{persistence, App, Message};
use crate::ui::header;
use crate::ui::menu;
use iced::Task;

pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::YearLoaded(year) => {
            app.current_year = Some(year);
            Task::none()
        }
        Message::Header(msg) => match header::update(msg) {
            header::Event::SwitchView(view) => {
                app.view = view;
                Task::none()
            }
            header::Event::PreviousYear => {
                app.current_year = app.current_year.map(|year| year - 1);
                Task::none()
            }
            header::Event::NextYear => {
                app.current_year = app.current_year.map(|year| year + 1);
                Task::none()
            }
        },
        Message::Menu(msg) => match menu::update(msg) {
            menu::Event::LanguageSelected(locale) => {
                // Re-selecting the active language is a no-op: the locale
                // switch and the config write only happen on actual change.
                if app.i18n.current_locale() == &locale {
                    Task::none()
                } else {
                    persistence::apply_language_change(&mut app.i18n, locale)
                }
            }
            menu::Event::WeekStartSelected(week_start) => {
                if app.week_start == week_start {
                    Task::none()
                } else {
                    app.week_start = week_start;
                    persistence::persist_week_start(week_start)
                }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::View;
    use crate::config::WeekStart;

    fn app_with_year(year: i32) -> App {
        let mut app = App::default();
        app.current_year = Some(year);
        app
    }

    #[test]
    fn year_loaded_initializes_state() {
        let mut app = App::default();
        assert!(app.current_year().is_none());
        let _ = update(&mut app, Message::YearLoaded(2024));
        assert_eq!(app.current_year(), Some(2024));
    }

    #[test]
    fn header_messages_switch_between_all_views() {
        let mut app = app_with_year(2026);

        let _ = update(&mut app, Message::Header(header::Message::OpenStatistics));
        assert_eq!(app.current_view(), View::Statistics);

        let _ = update(&mut app, Message::Header(header::Message::OpenMenu));
        assert_eq!(app.current_view(), View::Menu);

        let _ = update(&mut app, Message::Header(header::Message::OpenTracker));
        assert_eq!(app.current_view(), View::Tracker);
    }

    #[test]
    fn header_navigates_years() {
        let mut app = app_with_year(2026);

        let _ = update(&mut app, Message::Header(header::Message::PreviousYear));
        assert_eq!(app.current_year(), Some(2025));

        let _ = update(&mut app, Message::Header(header::Message::NextYear));
        assert_eq!(app.current_year(), Some(2026));
    }

    #[test]
    fn year_navigation_is_noop_while_uninitialized() {
        let mut app = App::default();
        let _ = update(&mut app, Message::Header(header::Message::PreviousYear));
        assert!(app.current_year().is_none());
    }

    #[test]
    fn language_selection_switches_locale() {
        let mut app = app_with_year(2026);
        app.i18n.set_locale("en-US".parse().unwrap());

        let _ = update(
            &mut app,
            Message::Menu(menu::Message::LanguageSelected("fr".parse().unwrap())),
        );
        assert_eq!(app.i18n.current_locale().to_string(), "fr");
    }

    #[test]
    fn reselecting_active_language_is_noop() {
        let mut app = app_with_year(2026);
        app.i18n.set_locale("fr".parse().unwrap());

        let _ = update(
            &mut app,
            Message::Menu(menu::Message::LanguageSelected("fr".parse().unwrap())),
        );
        assert_eq!(app.i18n.current_locale().to_string(), "fr");
    }

    #[test]
    fn week_start_selection_updates_state() {
        let mut app = app_with_year(2026);
        assert_eq!(app.week_start(), WeekStart::Monday);

        let _ = update(
            &mut app,
            Message::Menu(menu::Message::WeekStartSelected(WeekStart::Sunday)),
        );
        assert_eq!(app.week_start(), WeekStart::Sunday);
    }
}
