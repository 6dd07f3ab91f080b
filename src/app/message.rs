// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::header;
use crate::ui::menu;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
/// View transitions arrive as header messages; there is no other path.
#[derive(Debug, Clone)]
pub enum Message {
    Header(header::Message),
    Menu(menu::Message),
    /// The displayed year resolved at startup.
    YearLoaded(i32),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional year to display instead of the current calendar year.
    pub year: Option<i32>,
}
