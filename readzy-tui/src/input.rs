//! Input dispatch: global keys → page shortcuts → open menu → focus-specific handlers.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use readzy_core::carousel::CarouselEvent;
use readzy_core::contact::Field;
use readzy_core::keys::{Key, KeyPress};
use readzy_core::shortcuts::{self, PageAction};

use crate::app::{AppState, Focus};
use crate::layout::Target;

/// Rows moved per wheel notch.
const WHEEL_ROWS: i32 = 3;

/// Translate a terminal key event into a host-neutral key press.
pub fn key_press(key: &KeyEvent) -> KeyPress {
    let code = match key.code {
        KeyCode::Left => Key::ArrowLeft,
        KeyCode::Right => Key::ArrowRight,
        KeyCode::Up => Key::ArrowUp,
        KeyCode::Down => Key::ArrowDown,
        KeyCode::Esc => Key::Escape,
        KeyCode::Enter => Key::Enter,
        KeyCode::Tab | KeyCode::BackTab => Key::Tab,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Char(c) => Key::Char(c),
        _ => Key::Other,
    };
    KeyPress {
        key: code,
        alt: key.modifiers.contains(KeyModifiers::ALT),
        ctrl: key.modifiers.contains(KeyModifiers::CONTROL),
        shift: key.modifiers.contains(KeyModifiers::SHIFT) || key.code == KeyCode::BackTab,
    }
}

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Global keys.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }
    let press = key_press(&key);

    // 2. Page shortcuts (Escape closes the menu, Alt+1 skips to content).
    match shortcuts::handle_key(&mut app.menu, press) {
        PageAction::None => {}
        action => {
            app.apply_page_action(action);
            return;
        }
    }

    // 3. Focus cycling.
    match key.code {
        KeyCode::Tab if !press.shift => {
            app.set_focus(app.focus.next());
            return;
        }
        KeyCode::Tab | KeyCode::BackTab => {
            app.set_focus(app.focus.prev());
            return;
        }
        _ => {}
    }

    // 4. Open menu: digits pick a link, unless a field is taking text.
    let typing = matches!(app.focus, Focus::Field(_));
    if app.menu.is_open() && !typing && handle_menu_key(app, key) {
        return;
    }

    // 5. Focus-specific keys.
    match app.focus {
        Focus::Field(field) => handle_field_key(app, field, key),
        Focus::Submit => handle_submit_key(app, key),
        Focus::Carousel => handle_carousel_key(app, key, press),
        Focus::Page => handle_page_key(app, key),
    }
}

fn handle_menu_key(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            if index < app.links.len() {
                app.follow_link(index);
            }
            true
        }
        KeyCode::Char('m') => {
            app.menu.toggle();
            true
        }
        _ => false,
    }
}

fn handle_field_key(app: &mut AppState, field: Field, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.set_focus(Focus::Page),
        KeyCode::Enter | KeyCode::Down => app.set_focus(app.focus.next()),
        KeyCode::Up => app.set_focus(app.focus.prev()),
        KeyCode::Backspace => {
            app.form.field_mut(field).pop();
        }
        KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            app.form.field_mut(field).push(c);
        }
        _ => {}
    }
}

fn handle_submit_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => app.submit_form(),
        KeyCode::Esc => app.set_focus(Focus::Page),
        KeyCode::Up => app.set_focus(app.focus.prev()),
        KeyCode::Char('q') => app.quit(),
        _ => {}
    }
}

fn handle_carousel_key(app: &mut AppState, key: KeyEvent, press: KeyPress) {
    match key.code {
        KeyCode::Left | KeyCode::Right => app.carousel_event(CarouselEvent::KeyDown(press)),
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            if app.carousel.as_ref().is_some_and(|carousel| index < carousel.len()) {
                app.carousel_event(CarouselEvent::IndicatorClicked(index));
            }
        }
        KeyCode::Esc => app.set_focus(Focus::Page),
        _ => handle_page_key(app, key),
    }
}

fn handle_page_key(app: &mut AppState, key: KeyEvent) {
    let page = i32::from(app.viewport_rows().saturating_sub(2).max(1));
    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('m') => app.menu.toggle(),
        KeyCode::Char('j') | KeyCode::Down => app.scroll_by(1),
        KeyCode::Char('k') | KeyCode::Up => app.scroll_by(-1),
        KeyCode::PageDown | KeyCode::Char(' ') => app.scroll_by(page),
        KeyCode::PageUp => app.scroll_by(-page),
        KeyCode::Char('g') | KeyCode::Home => app.scroll_to(0),
        KeyCode::Char('G') | KeyCode::End => app.scroll_to(app.max_scroll()),
        KeyCode::Enter => app.call_to_action(),
        _ => {}
    }
}

/// Handle a mouse event.
pub fn handle_mouse(app: &mut AppState, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            app.pointer_moved(mouse.column, mouse.row);
        }
        MouseEventKind::Down(MouseButton::Left) => {
            app.pointer_moved(mouse.column, mouse.row);
            match app.target_at(mouse.column, mouse.row) {
                Some(target) => click(app, target),
                None => app.set_focus(Focus::Page),
            }
        }
        MouseEventKind::ScrollDown => app.scroll_by(WHEEL_ROWS),
        MouseEventKind::ScrollUp => app.scroll_by(-WHEEL_ROWS),
        _ => {}
    }
}

/// A click focuses what it lands on, then activates it.
fn click(app: &mut AppState, target: Target) {
    app.set_focus(match target {
        Target::Carousel
        | Target::CarouselPrev
        | Target::CarouselNext
        | Target::Indicator(_) => Focus::Carousel,
        Target::Field(field) => Focus::Field(field),
        Target::Submit => Focus::Submit,
        Target::Hamburger | Target::NavLink(_) | Target::MenuItem(_) | Target::Cta => Focus::Page,
    });
    match target {
        Target::Hamburger => app.menu.toggle(),
        Target::NavLink(i) | Target::MenuItem(i) => app.follow_link(i),
        Target::Cta => app.call_to_action(),
        Target::CarouselPrev => app.carousel_event(CarouselEvent::PrevClicked),
        Target::CarouselNext => app.carousel_event(CarouselEvent::NextClicked),
        Target::Indicator(i) => app.carousel_event(CarouselEvent::IndicatorClicked(i)),
        Target::Submit => app.submit_form(),
        Target::Carousel | Target::Field(_) => {}
    }
}

#[cfg(test)]
mod tests {
    //! Key and mouse routing against a real `AppState`.
    //!
    //! Covers:
    //! 1. Carousel arrows only when the carousel has focus
    //! 2. Escape / Alt+1 page shortcuts
    //! 3. Menu toggling and link selection
    //! 4. Contact form editing and submission
    //! 5. Mouse clicks and hover

    use super::*;
    use crossterm::event::KeyEventState;
    use ratatui::layout::Rect;
    use readzy_core::config::ReadzyConfig;
    use readzy_core::notify::NotificationKind;

    fn app() -> AppState {
        AppState::new(ReadzyConfig::default(), Rect::new(0, 0, 100, 30))
    }

    fn press(app: &mut AppState, code: KeyCode) {
        handle_key(app, KeyEvent::from(code));
    }

    fn type_str(app: &mut AppState, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn current(app: &AppState) -> usize {
        app.carousel.as_ref().map_or(usize::MAX, |c| c.current_index())
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn arrows_ignored_without_carousel_focus() {
        let mut app = app();
        press(&mut app, KeyCode::Right);
        assert_eq!(current(&app), 0);
    }

    #[test]
    fn arrows_navigate_focused_carousel() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Carousel);
        press(&mut app, KeyCode::Left);
        assert_eq!(current(&app), 3);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        assert_eq!(current(&app), 1);
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = app();
        let mut key = KeyEvent::from(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;
        key.state = KeyEventState::NONE;
        handle_key(&mut app, key);
        assert!(app.running);
    }

    #[test]
    fn quit_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.running);

        let mut app = self::app();
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(!app.running);
    }

    #[test]
    fn escape_closes_menu() {
        let mut app = app();
        press(&mut app, KeyCode::Char('m'));
        assert!(app.menu.is_open());
        press(&mut app, KeyCode::Esc);
        assert!(!app.menu.is_open());
    }

    #[test]
    fn menu_digit_follows_link() {
        let mut app = app();
        press(&mut app, KeyCode::Char('m'));
        press(&mut app, KeyCode::Char('3'));
        assert!(!app.menu.is_open());
        let stats = app.page.section_row("stats").unwrap_or(0);
        assert_eq!(app.scroll, stats.min(app.max_scroll()));
    }

    #[test]
    fn alt_one_skips_to_main_content() {
        let mut app = app();
        app.scroll_to(20);
        app.set_focus(Focus::Field(Field::Email));
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('1'), KeyModifiers::ALT));
        assert_eq!(app.scroll, 0);
        assert_eq!(app.focus, Focus::Page);
        assert!(app.form.email.is_empty());
    }

    #[test]
    fn enter_on_page_runs_call_to_action() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        let features = app.page.section_row("features").unwrap_or(0);
        assert_eq!(app.scroll, features);
    }

    #[test]
    fn typing_fills_focused_field_only() {
        let mut app = app();
        app.set_focus(Focus::Field(Field::Name));
        type_str(&mut app, "Ada q");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.form.name, "Ada ");
        assert!(app.running);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.focus, Focus::Field(Field::Email));
    }

    #[test]
    fn open_menu_leaves_field_typing_alone() {
        let mut app = app();
        app.set_focus(Focus::Field(Field::Message));
        let scroll = app.scroll;
        app.menu.toggle();
        type_str(&mut app, "2 min");
        assert_eq!(app.form.message, "2 min");
        assert_eq!(app.scroll, scroll);
        assert!(app.menu.is_open());
        press(&mut app, KeyCode::Esc);
        assert!(!app.menu.is_open());
        assert_eq!(app.focus, Focus::Field(Field::Message));
    }

    #[test]
    fn submit_valid_form_clears_it() {
        let mut app = app();
        app.set_focus(Focus::Field(Field::Name));
        type_str(&mut app, "Ada");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "ada@example.com");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "Hello there, Readzy!");
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Submit);
        press(&mut app, KeyCode::Enter);

        assert!(app.form.name.is_empty());
        assert!(app.form.message.is_empty());
        let toast = app.toasts.iter().last().expect("toast shown");
        assert_eq!(toast.kind, NotificationKind::Success);
    }

    #[test]
    fn short_message_is_rejected() {
        let mut app = app();
        app.form.email = "ada@example.com".into();
        app.form.message = "too short".into();
        app.set_focus(Focus::Submit);
        press(&mut app, KeyCode::Enter);
        let toast = app.toasts.iter().last().expect("toast shown");
        assert_eq!(toast.kind, NotificationKind::Error);
        assert_eq!(app.form.message, "too short");
    }

    #[test]
    fn clicking_next_advances_carousel() {
        let mut app = app();
        let content = app.screen.content();
        let row = content.y + app.page.carousel_title_row();
        handle_mouse(
            &mut app,
            mouse(
                MouseEventKind::Down(MouseButton::Left),
                content.x + content.width - 1,
                row,
            ),
        );
        assert_eq!(current(&app), 1);
    }

    #[test]
    fn clicked_carousel_button_takes_arrow_keys() {
        let mut app = app();
        let content = app.screen.content();
        let row = content.y + app.page.carousel_title_row();
        handle_mouse(
            &mut app,
            mouse(MouseEventKind::Down(MouseButton::Left), content.x, row),
        );
        assert_eq!(app.focus, Focus::Carousel);
        assert_eq!(current(&app), 3);
        press(&mut app, KeyCode::Right);
        assert_eq!(current(&app), 0);
    }

    #[test]
    fn clicking_elsewhere_blurs_carousel() {
        let mut app = app();
        app.set_focus(Focus::Carousel);
        let content = app.screen.content();
        handle_mouse(
            &mut app,
            mouse(MouseEventKind::Down(MouseButton::Left), content.x, content.y),
        );
        assert_eq!(app.focus, Focus::Page);
        assert!(app.carousel.as_ref().is_some_and(|c| !c.has_focus()));
        press(&mut app, KeyCode::Right);
        assert_eq!(current(&app), 0);
    }

    #[test]
    fn hover_pauses_autoplay() {
        let mut app = app();
        let content = app.screen.content();
        let row = content.y + app.page.carousel.top;
        handle_mouse(&mut app, mouse(MouseEventKind::Moved, content.x + 10, row));
        assert!(app.pointer_over_carousel);
        app.tick(std::time::Duration::from_secs(10));
        assert_eq!(current(&app), 0);

        handle_mouse(&mut app, mouse(MouseEventKind::Moved, 0, 0));
        assert!(!app.pointer_over_carousel);
        app.tick(std::time::Duration::from_millis(3500));
        assert_eq!(current(&app), 1);
    }

    #[test]
    fn scrolling_away_ends_hover() {
        let mut app = app();
        let content = app.screen.content();
        let row = content.y + app.page.carousel.top;
        handle_mouse(&mut app, mouse(MouseEventKind::Moved, content.x + 10, row));
        app.scroll_to(app.max_scroll());
        assert!(!app.pointer_over_carousel);
        assert!(app
            .carousel
            .as_ref()
            .is_some_and(|c| c.autoplay_handle().is_some()));
    }

    #[test]
    fn wheel_scrolls() {
        let mut app = app();
        handle_mouse(&mut app, mouse(MouseEventKind::ScrollDown, 5, 5));
        assert_eq!(app.scroll, 3);
        handle_mouse(&mut app, mouse(MouseEventKind::ScrollUp, 5, 5));
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn hamburger_click_toggles_menu() {
        let mut app = app();
        let (x, _) = crate::layout::hamburger_columns(app.screen.header);
        let y = app.screen.header.y;
        handle_mouse(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), x, y));
        assert!(app.menu.is_open());
    }

    #[test]
    fn key_translation_keeps_modifiers() {
        let p = key_press(&KeyEvent::new(KeyCode::Char('1'), KeyModifiers::ALT));
        assert_eq!(p, KeyPress::with_alt(Key::Char('1')));
        assert_eq!(key_press(&KeyEvent::from(KeyCode::Left)).key, Key::ArrowLeft);
        assert!(key_press(&KeyEvent::from(KeyCode::BackTab)).shift);
    }
}
