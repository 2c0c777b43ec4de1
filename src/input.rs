//! Keyboard mapping for each session phase.

use crate::session::{Phase, SessionInput};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press means to the main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Session(SessionInput),
    Quit,
}

/// Map a key event to an action. Key releases and unbound keys map to `None`.
pub fn map_key(phase: Phase, key: KeyEvent) -> Option<KeyAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(KeyAction::Quit);
    }

    let input = match phase {
        Phase::Lobby => match key.code {
            KeyCode::Char(c) => SessionInput::Char(c),
            KeyCode::Backspace => SessionInput::Backspace,
            KeyCode::Enter => SessionInput::Confirm,
            KeyCode::Esc => return Some(KeyAction::Quit),
            _ => return None,
        },
        Phase::Playing => match key.code {
            KeyCode::Char(' ') | KeyCode::Up => SessionInput::Jump,
            KeyCode::Esc => SessionInput::Abandon,
            _ => return None,
        },
        Phase::GameOver => match key.code {
            KeyCode::Char('r') | KeyCode::Char('R') => SessionInput::Restart,
            KeyCode::Esc => SessionInput::Abandon,
            _ => return None,
        },
    };

    Some(KeyAction::Session(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_lobby_keys() {
        assert_eq!(
            map_key(Phase::Lobby, press(KeyCode::Char('x'))),
            Some(KeyAction::Session(SessionInput::Char('x')))
        );
        assert_eq!(
            map_key(Phase::Lobby, press(KeyCode::Enter)),
            Some(KeyAction::Session(SessionInput::Confirm))
        );
        assert_eq!(
            map_key(Phase::Lobby, press(KeyCode::Esc)),
            Some(KeyAction::Quit)
        );
    }

    #[test]
    fn test_playing_keys() {
        assert_eq!(
            map_key(Phase::Playing, press(KeyCode::Char(' '))),
            Some(KeyAction::Session(SessionInput::Jump))
        );
        assert_eq!(
            map_key(Phase::Playing, press(KeyCode::Up)),
            Some(KeyAction::Session(SessionInput::Jump))
        );
        assert_eq!(
            map_key(Phase::Playing, press(KeyCode::Esc)),
            Some(KeyAction::Session(SessionInput::Abandon))
        );
        assert_eq!(map_key(Phase::Playing, press(KeyCode::Char('r'))), None);
    }

    #[test]
    fn test_game_over_keys() {
        assert_eq!(
            map_key(Phase::GameOver, press(KeyCode::Char('R'))),
            Some(KeyAction::Session(SessionInput::Restart))
        );
        assert_eq!(
            map_key(Phase::GameOver, press(KeyCode::Esc)),
            Some(KeyAction::Session(SessionInput::Abandon))
        );
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        for phase in [Phase::Lobby, Phase::Playing, Phase::GameOver] {
            assert_eq!(map_key(phase, ctrl_c), Some(KeyAction::Quit));
        }
    }

    #[test]
    fn test_release_events_ignored() {
        let mut key = press(KeyCode::Char(' '));
        key.kind = KeyEventKind::Release;
        assert_eq!(map_key(Phase::Playing, key), None);
    }
}
