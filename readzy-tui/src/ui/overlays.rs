//! Overlay widgets: the open navigation menu and toast notifications.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use readzy_core::notify::Toast;

use crate::app::AppState;
use crate::layout::{dropdown_rect, ScreenLayout};
use crate::theme;

/// Width of a toast including its border.
const TOAST_WIDTH: u16 = 50;
const TOAST_HEIGHT: u16 = 3;

/// Dropdown list of nav links under the hamburger.
pub fn render_menu(f: &mut Frame, screen: &ScreenLayout, app: &AppState) {
    let area = dropdown_rect(screen, app.links.len());
    if area.width < 4 || area.height < 3 {
        return;
    }
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::primary())
        .title(" Menu ")
        .title_style(theme::primary_bold());

    let lines: Vec<Line> = app
        .links
        .iter()
        .zip(app.link_states())
        .enumerate()
        .map(|(i, (link, active))| {
            Line::from(vec![
                Span::styled(format!(" {} ", i + 1), theme::muted()),
                Span::styled(link.label.as_str(), theme::nav_link(active)),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines).block(block), area);
}

/// Where a toast is drawn: stacked from the top-right corner, shifted right
/// by its slide offset and clipped to the area.
pub fn toast_rect(area: Rect, slot: u16, slide_offset: f64) -> Option<Rect> {
    let width = TOAST_WIDTH.min(area.width.saturating_sub(2));
    let y = area.y + 1 + slot * TOAST_HEIGHT;
    if width < 6 || y + TOAST_HEIGHT > area.y + area.height {
        return None;
    }
    let shift = (slide_offset.clamp(0.0, 1.0) * f64::from(width + 1)).round() as u16;
    let x = area.x + area.width - 1 - width + shift;
    let visible = (area.x + area.width).saturating_sub(x + 1);
    (visible >= 6).then(|| Rect::new(x, y, width.min(visible), TOAST_HEIGHT))
}

/// Live toasts, oldest on top.
pub fn render_toasts(f: &mut Frame, area: Rect, app: &AppState) {
    for (slot, toast) in app.toasts.iter().enumerate() {
        let Ok(slot) = u16::try_from(slot) else {
            break;
        };
        if let Some(rect) = toast_rect(area, slot, toast.slide_offset()) {
            render_toast(f, rect, toast);
        }
    }
}

fn render_toast(f: &mut Frame, area: Rect, toast: &Toast) {
    f.render_widget(Clear, area);
    let style = theme::toast(toast.kind);
    let block = Block::default().borders(Borders::ALL).style(style);
    let text = Paragraph::new(Line::styled(format!(" {}", toast.message), style)).block(block);
    f.render_widget(text, area);
}
