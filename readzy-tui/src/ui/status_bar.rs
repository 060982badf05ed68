//! Bottom status bar: key hints, focus, section in view.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{AppState, Focus};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    if area.height == 0 {
        return;
    }
    let mut spans: Vec<Span> = vec![Span::styled(hints(app.focus), theme::muted())];

    spans.push(Span::raw(" | "));
    spans.push(Span::styled(
        format!("focus: {}", app.focus.label()),
        theme::primary(),
    ));

    if let Some(section) = app.active_section.current() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(format!("#{section}"), theme::secondary()));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn hints(focus: Focus) -> &'static str {
    match focus {
        Focus::Page => " j/k:scroll Enter:explore m:menu Tab:focus q:quit",
        Focus::Carousel => " ←/→:slide 1-4:jump Esc:page Tab:focus",
        Focus::Field(_) => " type to edit Enter:next Esc:page",
        Focus::Submit => " Enter:send Esc:page",
    }
}
