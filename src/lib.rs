// SPDX-License-Identifier: MPL-2.0
//! `heatmap_tracker` is a yearly habit heatmap tracker built with the Iced GUI framework.
//!
//! It renders a GitHub-style heatmap for the displayed year and demonstrates
//! internationalization with Fluent, user preference management, and modular
//! UI design.

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod ui;
