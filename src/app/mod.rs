// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the tracker views and the
//! localization/config layers.
//!
//! The `App` struct owns the shared state the child views read (displayed
//! year, active view, week-start preference, localization runtime) and
//! translates their messages into transitions and side effects like config
//! persistence. The "always start on the tracker" rule lives in construction
//! rather than in a recurring check, so it cannot re-fire later.

mod message;
mod persistence;
mod screen;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::View;

use crate::config::{self, WeekStart};
use crate::i18n::fluent::I18n;
use chrono::Datelike;
use iced::{window, Element, Task, Theme};
use std::fmt;

/// Root Iced application state that bridges UI components, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    view: View,
    current_year: Option<i32>,
    week_start: WeekStart,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("view", &self.view)
            .field("current_year", &self.current_year)
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 820;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 420;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
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

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
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
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            view: View::default(),
            current_year: None,
            week_start: WeekStart::default(),
        }
    }
}

impl App {
    /// Initializes application state from the config file and CLI flags.
    ///
    /// The active view is always the tracker here, whatever a previous
    /// session did; later transitions only come from header messages. The
    /// displayed year stays unset until the boot task delivers it, and the
    /// root view renders nothing in the meantime.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut app = App {
            i18n,
            ..Self::default()
        };
        app.week_start = config.tracker.week_start;

        let task = match flags.year {
            Some(year) => {
                app.current_year = Some(year);
                Task::none()
            }
            None => Task::perform(
                async { chrono::Local::now().year() },
                Message::YearLoaded,
            ),
        };

        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            view: self.view,
            current_year: self.current_year,
            week_start: self.week_start,
        })
    }

    pub fn current_view(&self) -> View {
        self.view
    }

    pub fn current_year(&self) -> Option<i32> {
        self.current_year
    }

    pub fn week_start(&self) -> WeekStart {
        self.week_start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_starts_on_tracker() {
        let (app, _task) = App::new(Flags {
            lang: None,
            year: Some(2026),
        });
        assert_eq!(app.current_view(), View::Tracker);
        assert_eq!(app.current_year(), Some(2026));
    }

    #[test]
    fn default_app_is_uninitialized() {
        let app = App::default();
        assert!(app.current_year().is_none());
        assert_eq!(app.current_view(), View::Tracker);
    }

    #[test]
    fn cli_lang_overrides_locale_resolution() {
        let (app, _task) = App::new(Flags {
            lang: Some("fr".to_string()),
            year: Some(2026),
        });
        assert_eq!(app.i18n.current_locale().to_string(), "fr");
    }

    #[test]
    fn view_renders_before_year_is_loaded() {
        let app = App::default();
        let _element = app.view();
    }
}
