//! Readzy theme tokens.
//!
//! # Color Palette
//! - **Primary**: Cyan (brand, focus, active links)
//! - **Secondary**: Lime (call to action, stat values)
//! - **Success / Error / Info**: notification colours
//! - **Muted**: Gray (captions, hints, inactive indicators)

use ratatui::style::{Color, Modifier, Style};

use readzy_core::notify::NotificationKind;

/// Readzy palette.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Cyan brand colour
    pub primary: Color,
    /// Lime accent for the call to action
    pub secondary: Color,
    pub success: Color,
    pub error: Color,
    pub info: Color,
    pub muted: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::readzy()
    }
}

impl Theme {
    pub fn readzy() -> Self {
        Self {
            primary: Color::Rgb(0, 188, 212),
            secondary: Color::Rgb(118, 255, 3),
            success: rgb(NotificationKind::Success),
            error: rgb(NotificationKind::Error),
            info: rgb(NotificationKind::Info),
            muted: Color::Rgb(120, 120, 130),
            text_primary: Color::White,
            text_secondary: Color::Rgb(170, 170, 170),
        }
    }

    /// Background colour of a toast of the given kind.
    pub fn notification_color(&self, kind: NotificationKind) -> Color {
        match kind {
            NotificationKind::Success => self.success,
            NotificationKind::Error => self.error,
            NotificationKind::Info => self.info,
        }
    }
}

fn rgb(kind: NotificationKind) -> Color {
    let (r, g, b) = kind.rgb();
    Color::Rgb(r, g, b)
}

pub fn primary() -> Style {
    Style::default().fg(Theme::default().primary)
}

pub fn primary_bold() -> Style {
    primary().add_modifier(Modifier::BOLD)
}

pub fn secondary() -> Style {
    Style::default().fg(Theme::default().secondary)
}

pub fn muted() -> Style {
    Style::default().fg(Theme::default().muted)
}

pub fn text() -> Style {
    Style::default().fg(Theme::default().text_primary)
}

pub fn text_secondary() -> Style {
    Style::default().fg(Theme::default().text_secondary)
}

/// Nav link style; the link for the section in view is highlighted.
pub fn nav_link(active: bool) -> Style {
    if active {
        primary_bold().add_modifier(Modifier::UNDERLINED)
    } else {
        text_secondary()
    }
}

/// Border style for a focusable block.
pub fn focus_border(focused: bool) -> Style {
    if focused {
        primary_bold()
    } else {
        muted()
    }
}

/// Form input style.
pub fn field(focused: bool) -> Style {
    if focused {
        text().add_modifier(Modifier::REVERSED)
    } else {
        text()
    }
}

pub fn indicator(active: bool) -> Style {
    if active {
        primary_bold()
    } else {
        muted()
    }
}

/// Toast body: white text on the kind's colour.
pub fn toast(kind: NotificationKind) -> Style {
    Style::default()
        .fg(Color::White)
        .bg(Theme::default().notification_color(kind))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_creation() {
        let theme = Theme::default();
        assert_eq!(theme.primary, Color::Rgb(0, 188, 212));
        assert_eq!(theme.secondary, Color::Rgb(118, 255, 3));
    }

    #[test]
    fn notification_colors_follow_kind() {
        let theme = Theme::default();
        assert_eq!(
            theme.notification_color(NotificationKind::Success),
            Color::Rgb(0x4c, 0xaf, 0x50)
        );
        assert_eq!(
            theme.notification_color(NotificationKind::Error),
            Color::Rgb(0xf4, 0x43, 0x36)
        );
        assert_eq!(
            theme.notification_color(NotificationKind::Info),
            Color::Rgb(0x21, 0x96, 0xf3)
        );
    }

    #[test]
    fn active_link_is_highlighted() {
        assert_ne!(nav_link(true), nav_link(false));
        assert_eq!(nav_link(false).fg, Some(Theme::default().text_secondary));
    }
}
