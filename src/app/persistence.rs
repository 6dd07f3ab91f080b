// SPDX-License-Identifier: MPL-2.0
//! Preference persistence logic.
//!
//! Applies language and week-start changes and writes them back to the
//! config file.

use super::Message;
use crate::config::{self, WeekStart};
use crate::i18n::fluent::I18n;
use iced::Task;
use unic_langid::LanguageIdentifier;

/// Applies the newly selected locale and persists it to config.
///
/// Guarded during tests to keep isolation: unit tests exercise the locale
/// switch directly without touching the user's config file.
pub fn apply_language_change(i18n: &mut I18n, locale: LanguageIdentifier) -> Task<Message> {
    i18n.set_locale(locale.clone());

    if cfg!(test) {
        return Task::none();
    }

    let mut cfg = config::load().unwrap_or_default();
    cfg.general.language = Some(locale.to_string());

    if let Err(error) = config::save(&cfg) {
        eprintln!("Failed to save config: {:?}", error);
    }

    Task::none()
}

/// Persists the configured first day of the week.
pub fn persist_week_start(week_start: WeekStart) -> Task<Message> {
    if cfg!(test) {
        return Task::none();
    }

    let mut cfg = config::load().unwrap_or_default();
    cfg.tracker.week_start = week_start;

    if let Err(error) = config::save(&cfg) {
        eprintln!("Failed to save config: {:?}", error);
    }

    Task::none()
}
