//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::event::keymap::{matches_any, DefaultKeymap};
use crate::message::{AppMessage, MenuMessage};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event),
        Event::Resize(width, height) => AppMessage::Resize(width, height),
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
///
/// 菜单按键不区分子菜单是否打开，由 update 层按菜单状态路由。
fn handle_key_event(key: KeyEvent) -> AppMessage {
    // 重要：只处理 Press 事件，忽略 Release 和 Repeat
    // 避免 Windows 终端上按键重复问题的发生
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if matches_any(DefaultKeymap::QUIT, &key) {
        AppMessage::Quit
    } else if matches_any(DefaultKeymap::BACK, &key) {
        AppMessage::Menu(MenuMessage::Back)
    } else if matches_any(DefaultKeymap::TOGGLE_POWER, &key) {
        AppMessage::TogglePower
    } else if matches_any(DefaultKeymap::UP, &key) {
        AppMessage::Menu(MenuMessage::CursorUp)
    } else if matches_any(DefaultKeymap::DOWN, &key) {
        AppMessage::Menu(MenuMessage::CursorDown)
    } else if matches_any(DefaultKeymap::CLOSE, &key) {
        AppMessage::Menu(MenuMessage::Close)
    } else if matches_any(DefaultKeymap::OPEN, &key) {
        AppMessage::Menu(MenuMessage::Open)
    } else if matches_any(DefaultKeymap::ACTIVATE, &key) {
        AppMessage::Menu(MenuMessage::Activate)
    } else {
        AppMessage::Noop
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    fn key(code: KeyCode) -> AppMessage {
        handle_event(press(code, KeyModifiers::NONE))
    }

    #[test]
    fn arrow_and_vim_keys_move_the_cursor() {
        assert_eq!(key(KeyCode::Up), AppMessage::Menu(MenuMessage::CursorUp));
        assert_eq!(key(KeyCode::Char('k')), AppMessage::Menu(MenuMessage::CursorUp));
        assert_eq!(key(KeyCode::Down), AppMessage::Menu(MenuMessage::CursorDown));
        assert_eq!(key(KeyCode::Char('j')), AppMessage::Menu(MenuMessage::CursorDown));
        assert_eq!(key(KeyCode::Left), AppMessage::Menu(MenuMessage::Close));
        assert_eq!(key(KeyCode::Char('h')), AppMessage::Menu(MenuMessage::Close));
        assert_eq!(key(KeyCode::Right), AppMessage::Menu(MenuMessage::Open));
        assert_eq!(key(KeyCode::Char('l')), AppMessage::Menu(MenuMessage::Open));
        assert_eq!(key(KeyCode::Enter), AppMessage::Menu(MenuMessage::Activate));
        assert_eq!(key(KeyCode::Char(' ')), AppMessage::Menu(MenuMessage::Activate));
    }

    #[test]
    fn global_keys() {
        assert_eq!(key(KeyCode::Char('q')), AppMessage::Quit);
        assert_eq!(
            handle_event(press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            AppMessage::Quit
        );
        assert_eq!(key(KeyCode::Esc), AppMessage::Menu(MenuMessage::Back));
        assert_eq!(key(KeyCode::Char('.')), AppMessage::TogglePower);
        assert_eq!(
            handle_event(press(KeyCode::Char('.'), KeyModifiers::SHIFT)),
            AppMessage::TogglePower
        );
        assert_eq!(key(KeyCode::Char('x')), AppMessage::Noop);
        assert_eq!(
            handle_event(press(KeyCode::Char('j'), KeyModifiers::ALT)),
            AppMessage::Noop
        );
    }

    #[test]
    fn only_presses_are_handled() {
        let release = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(handle_event(Event::Key(release)), AppMessage::Noop);
    }

    #[test]
    fn resize_is_forwarded() {
        assert_eq!(handle_event(Event::Resize(80, 24)), AppMessage::Resize(80, 24));
    }
}
