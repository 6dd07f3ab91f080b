// SPDX-License-Identifier: MPL-2.0
use heatmap_tracker::config::{self, Config, GeneralConfig, TrackerConfig, WeekStart};
use heatmap_tracker::i18n::fluent::I18n;
use tempfile::tempdir;

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let initial_config = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
        },
        tracker: TrackerConfig::default(),
    };
    config::save_to_path(&initial_config, &config_path).expect("Failed to write initial config");

    let loaded = config::load_from_path(&config_path).expect("Failed to load initial config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to fr
    let french_config = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
        },
        tracker: TrackerConfig::default(),
    };
    config::save_to_path(&french_config, &config_path).expect("Failed to write french config");

    let loaded = config::load_from_path(&config_path).expect("Failed to load french config");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
}

#[test]
fn cli_lang_overrides_config_language() {
    let config = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
        },
        tracker: TrackerConfig::default(),
    };
    let i18n = I18n::new(Some("ru".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "ru");
}

#[test]
fn week_start_round_trips_through_config_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let config = Config {
        general: GeneralConfig::default(),
        tracker: TrackerConfig {
            week_start: WeekStart::Sunday,
        },
    };
    config::save_to_path(&config, &config_path).expect("Failed to write config");

    let loaded = config::load_from_path(&config_path).expect("Failed to load config");
    assert_eq!(loaded.tracker.week_start, WeekStart::Sunday);
}

#[test]
fn all_shipped_locales_translate_the_header() {
    let i18n = I18n::default();
    for locale in i18n.available_locales.clone() {
        let mut localized = I18n::default();
        localized.set_locale(locale.clone());
        let label = localized.tr("header-tracker-button");
        assert!(
            !label.starts_with("MISSING:"),
            "locale {locale} is missing the header-tracker-button message"
        );
    }
}
