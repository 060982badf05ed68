//! Top navigation bar: brand, inline links, hamburger toggle.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::AppState;
use crate::layout::{hamburger_columns, header_link_columns, links_fit};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    if area.height == 0 {
        return;
    }
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(theme::muted());
    f.render_widget(block, area);

    let row = Rect::new(area.x, area.y, area.width, 1);
    let labels = app.link_labels();
    let mut spans = vec![Span::styled(" 📚 Readzy", theme::primary_bold())];
    let mut cursor = area.x + 10;

    if links_fit(area, &labels) {
        let columns = header_link_columns(area, &labels).into_iter().zip(&app.links);
        for (((x, _), link), active) in columns.zip(app.link_states()) {
            spans.push(Span::raw(" ".repeat(usize::from(x.saturating_sub(cursor)))));
            spans.push(Span::styled(link.label.as_str(), theme::nav_link(active)));
            cursor = x + u16::try_from(link.label.chars().count()).unwrap_or(0);
        }
    }

    let (hx, _) = hamburger_columns(area);
    if hx > cursor {
        spans.push(Span::raw(" ".repeat(usize::from(hx - cursor))));
        let glyph = if app.menu.is_open() { "[✕]" } else { "[☰]" };
        spans.push(Span::styled(glyph, theme::focus_border(app.menu.is_open())));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), row);
}
