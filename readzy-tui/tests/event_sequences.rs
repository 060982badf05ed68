//! Arbitrary input sequences against the terminal host.
//!
//! Covers:
//! 1. Scroll position stays within the document for any key/wheel sequence
//! 2. Clicks anywhere keep the carousel index in range with one live timer
//! 3. Rendering never panics at any terminal size
//! 4. A single long tick advances the carousel by at most one slide

use std::time::Duration;

use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use proptest::prelude::*;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;

use readzy_core::config::ReadzyConfig;
use readzy_tui::app::AppState;
use readzy_tui::{input, ui};

fn app(width: u16, height: u16) -> AppState {
    AppState::new(ReadzyConfig::default(), Rect::new(0, 0, width, height))
}

fn key_strategy() -> impl Strategy<Value = KeyCode> {
    prop_oneof![
        Just(KeyCode::Char('j')),
        Just(KeyCode::Char('k')),
        Just(KeyCode::Char('g')),
        Just(KeyCode::Char('G')),
        Just(KeyCode::Char('m')),
        Just(KeyCode::Char('2')),
        Just(KeyCode::PageDown),
        Just(KeyCode::PageUp),
        Just(KeyCode::Enter),
        Just(KeyCode::Esc),
        Just(KeyCode::Tab),
        Just(KeyCode::Left),
        Just(KeyCode::Right),
    ]
}

fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

proptest! {
    #[test]
    fn scroll_stays_in_document(keys in prop::collection::vec(key_strategy(), 0..60)) {
        let mut app = app(100, 30);
        for code in keys {
            input::handle_key(&mut app, KeyEvent::from(code));
            prop_assert!(app.scroll <= app.max_scroll());
        }
        prop_assert!(app.running);
    }

    #[test]
    fn clicks_keep_carousel_consistent(
        clicks in prop::collection::vec((0u16..100, 0u16..30), 0..40),
        dt in 0u64..10_000,
    ) {
        let mut app = app(100, 30);
        for (column, row) in clicks {
            input::handle_mouse(&mut app, click(column, row));
            app.tick(Duration::from_millis(dt));
        }
        let carousel = app.carousel.as_ref().expect("carousel mounted");
        prop_assert!(carousel.current_index() < carousel.len());
        let live = carousel.scheduler().live_count();
        if carousel.is_hovered() {
            prop_assert_eq!(live, 0);
        } else {
            prop_assert_eq!(live, 1);
        }
    }

    #[test]
    fn long_tick_moves_at_most_one_slide(ms in 0u64..120_000) {
        let mut app = app(100, 30);
        app.tick(Duration::from_millis(ms));
        let carousel = app.carousel.as_ref().expect("carousel mounted");
        prop_assert_eq!(carousel.current_index(), usize::from(ms >= 3500));
        prop_assert_eq!(carousel.scheduler().live_count(), 1);
    }

    #[test]
    fn draw_never_panics(width in 1u16..140, height in 1u16..50, scroll in 0i32..100) {
        let mut app = app(width, height);
        app.scroll_by(scroll);
        app.menu.toggle();
        app.welcome();
        let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("test backend");
        terminal.draw(|f| ui::draw(f, &app)).expect("draw");
    }
}
