// SPDX-License-Identifier: MPL-2.0
//! View enumeration for top-level navigation.

/// Top-level views the root can display.
///
/// `Menu` doubles as the fallback arm of the rendering dispatch. The default
/// is the tracker; construction always starts there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Tracker,
    Statistics,
    Menu,
}
