// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`tracker`] - Yearly heatmap grid
//! - [`statistics`] - Statistics screen
//! - [`menu`] - Fallback screen with preferences and support links
//!
//! # Shared Infrastructure
//!
//! - [`header`] - Top bar with year navigation and view switching
//! - [`design_tokens`] - Design system constants (spacing, sizing, typography)

pub mod design_tokens;
pub mod header;
pub mod menu;
pub mod statistics;
pub mod tracker;
