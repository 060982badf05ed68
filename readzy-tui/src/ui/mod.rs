//! Top-level UI layout: header, scrolling page, status bar, overlays.

pub mod header;
pub mod overlays;
pub mod page;
pub mod status_bar;

use ratatui::Frame;

use crate::app::AppState;
use crate::layout::ScreenLayout;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    let screen = ScreenLayout::new(f.area());

    header::render(f, screen.header, app);
    page::render(f, &screen, app);
    status_bar::render(f, screen.status, app);

    // Overlays on top.
    if app.menu.is_open() {
        overlays::render_menu(f, &screen, app);
    }
    overlays::render_toasts(f, screen.body, app);
}

/// Pad `text` with spaces on both sides to `width` columns.
pub(crate) fn center(text: &str, width: u16) -> String {
    let len = text.chars().count();
    let width = usize::from(width);
    if len >= width {
        return text.chars().take(width).collect();
    }
    let left = (width - len) / 2;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(width - len - left))
}
