//! The scrolling landing page: hero, carousel, features, stats, contact form.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use readzy_core::contact::Field;
use readzy_core::content;

use crate::app::{AppState, Focus};
use crate::layout::{dots_padding, ScreenLayout, PX_PER_ROW};
use crate::theme;
use crate::ui::center;

pub fn render(f: &mut Frame, screen: &ScreenLayout, app: &AppState) {
    let area = screen.content();
    if area.height == 0 || area.width == 0 {
        return;
    }
    let lines = document(app, area.width);
    f.render_widget(Paragraph::new(lines).scroll((app.scroll, 0)), area);
}

/// Every row of the document at the given content width.
pub fn document(app: &AppState, width: u16) -> Vec<Line<'static>> {
    let page = &app.page;
    let mut lines = vec![Line::default(); usize::from(page.total_rows)];
    let mut put = |row: u16, line: Line<'static>| {
        if let Some(slot) = lines.get_mut(usize::from(row)) {
            *slot = line;
        }
    };

    // Hero
    put(
        page.title_row,
        Line::styled(center(heading("home"), width), theme::primary_bold()),
    );
    put(
        page.tagline_row,
        Line::styled(center(content::TAGLINE, width), theme::text_secondary()),
    );
    put(
        page.cta_row,
        Line::styled(
            center(&format!("[ {} → ]", content::CTA_LABEL), width),
            theme::secondary().add_modifier(Modifier::BOLD),
        ),
    );
    for (row, line) in carousel_lines(app, width) {
        put(row, line);
    }

    // Section headings
    for (id, span) in page.sections.iter().skip(1) {
        put(
            span.top,
            Line::styled(center(heading(id), width), theme::primary_bold()),
        );
    }

    // Feature cards
    for ((span, feature), observed) in page.cards.iter().zip(&app.features).zip(&app.card_reveals) {
        let Some((shift, fade)) = reveal_state(app, *observed) else {
            continue;
        };
        let top = span.top + shift;
        put(
            top,
            Line::from(vec![
                Span::raw(format!("  {} ", feature.icon)),
                Span::styled(feature.title, theme::text().add_modifier(Modifier::BOLD)),
            ])
            .patch_style(fade),
        );
        put(
            top + 1,
            Line::styled(format!("     {}", feature.body), theme::text_secondary().patch(fade)),
        );
    }

    // Stats
    for ((span, stat), observed) in page.stats.iter().zip(&app.stats).zip(&app.stat_reveals) {
        let Some((shift, fade)) = reveal_state(app, *observed) else {
            continue;
        };
        let top = span.top + shift;
        put(
            top,
            Line::styled(
                center(stat.value, width),
                theme::secondary().add_modifier(Modifier::BOLD).patch(fade),
            ),
        );
        put(top + 1, Line::styled(center(stat.label, width), theme::muted().patch(fade)));
    }

    // Contact form
    for field in Field::ALL {
        let focused = app.focus == Focus::Field(field);
        let cursor = if focused { "▏" } else { "" };
        put(
            page.field_row(field),
            Line::from(vec![
                Span::styled(format!("{:>9}  ", field.label()), theme::muted()),
                Span::styled(
                    format!(" {}{cursor} ", app.form.field(field)),
                    theme::field(focused),
                ),
            ]),
        );
    }
    put(
        page.submit_row,
        Line::styled(
            center("[ Send message ]", width),
            theme::field(app.focus == Focus::Submit).add_modifier(Modifier::BOLD),
        ),
    );

    lines
}

fn heading(id: &str) -> &'static str {
    content::SECTIONS
        .iter()
        .find(|(sid, _)| *sid == id)
        .map_or("", |(_, heading)| *heading)
}

/// Row shift and style of an observed element, or `None` while invisible.
/// A fading element sits lower by its remaining offset and is drawn dim.
fn reveal_state(app: &AppState, observed: usize) -> Option<(u16, Style)> {
    let style = app.reveal.style(observed);
    if style.opacity <= 0.0 {
        return None;
    }
    let shift = (style.offset_y / PX_PER_ROW).round() as u16;
    let fade = if style.is_settled() {
        Style::default()
    } else {
        Style::default().add_modifier(Modifier::DIM)
    };
    Some((shift, fade))
}

/// Carousel rows keyed by document row.
fn carousel_lines(app: &AppState, width: u16) -> Vec<(u16, Line<'static>)> {
    let Some(carousel) = app.carousel.as_ref() else {
        return Vec::new();
    };
    let track = carousel.host();
    let focused = carousel.has_focus();
    let border = theme::focus_border(focused);
    let inner = usize::from(width.saturating_sub(2));

    let top = format!("╭{}╮", "─".repeat(inner));
    let paused = carousel.autoplay_handle().is_none() && !carousel.is_empty();
    let bottom = if paused && inner > 12 {
        format!("╰─ paused {}╯", "─".repeat(inner - 9))
    } else {
        format!("╰{}╯", "─".repeat(inner))
    };

    let middle = width.saturating_sub(6);
    let (title, caption) = track
        .visible_slide()
        .map_or(("", ""), |s| (s.title, s.caption));

    let pad = usize::from(dots_padding(width, track.indicators().len()));
    let mut dots = vec![Span::raw(" ".repeat(pad))];
    for (i, indicator) in track.indicators().iter().enumerate() {
        if i > 0 {
            dots.push(Span::raw(" "));
        }
        let glyph = if indicator.active { "●" } else { "○" };
        dots.push(Span::styled(glyph, theme::indicator(indicator.active)));
    }

    let page = &app.page;
    vec![
        (page.carousel.top, Line::styled(top, border)),
        (
            page.carousel_title_row(),
            Line::from(vec![
                Span::styled(" ◀ ", theme::primary_bold()),
                Span::styled(center(title, middle), theme::text().add_modifier(Modifier::BOLD)),
                Span::styled(" ▶ ", theme::primary_bold()),
            ]),
        ),
        (
            page.carousel_caption_row(),
            Line::from(vec![
                Span::raw("   "),
                Span::styled(center(caption, middle), theme::text_secondary()),
            ]),
        ),
        (page.carousel_dots_row(), Line::from(dots)),
        (
            page.carousel.top + page.carousel.height - 1,
            Line::styled(bottom, border),
        ),
    ]
}
