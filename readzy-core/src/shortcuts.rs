//! Page-level keyboard shortcuts.
//!
//! - Escape closes the navigation menu when it is open
//! - Alt+1 skips to the main content (`#home`)
//!
//! Scrolling and focus belong to the host, so the handler returns a
//! [`PageAction`] instead of performing them.

use crate::keys::{Key, KeyPress};
use crate::menu::NavMenu;

/// Section the skip-to-content shortcut lands on.
pub const MAIN_SECTION: &str = "home";
/// Section the hero call-to-action scrolls to.
pub const CTA_TARGET: &str = "features";

/// What the host should do after a shortcut.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageAction {
    None,
    MenuClosed,
    /// Focus the section and scroll it into view.
    FocusSection(&'static str),
    /// Smooth-scroll the section to the top of the viewport.
    ScrollTo(&'static str),
}

/// Handle a key press at page level.
pub fn handle_key(menu: &mut NavMenu, press: KeyPress) -> PageAction {
    if press.key == Key::Escape && menu.handle_escape() {
        return PageAction::MenuClosed;
    }
    if press.alt && press.key == Key::Char('1') {
        return PageAction::FocusSection(MAIN_SECTION);
    }
    PageAction::None
}

/// Hero call-to-action click.
pub fn call_to_action() -> PageAction {
    PageAction::ScrollTo(CTA_TARGET)
}
