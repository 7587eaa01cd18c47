//! Key bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press asks for. Interpreted by the driver per screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Space, Up or Enter.
    Flap,
    /// R: new session after game over, or retry a failed asset load.
    Restart,
    /// Esc, Q or Ctrl+C.
    Quit,
}

/// Map a terminal key event to an action. Releases and repeats are ignored.
pub fn map_key(key: KeyEvent) -> Option<InputAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') => Some(InputAction::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => Some(InputAction::Flap),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(InputAction::Restart),
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(InputAction::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_flap_keys() {
        assert_eq!(map_key(press(KeyCode::Char(' '))), Some(InputAction::Flap));
        assert_eq!(map_key(press(KeyCode::Up)), Some(InputAction::Flap));
        assert_eq!(map_key(press(KeyCode::Enter)), Some(InputAction::Flap));
    }

    #[test]
    fn test_restart_and_quit_keys() {
        assert_eq!(map_key(press(KeyCode::Char('r'))), Some(InputAction::Restart));
        assert_eq!(map_key(press(KeyCode::Char('R'))), Some(InputAction::Restart));
        assert_eq!(map_key(press(KeyCode::Esc)), Some(InputAction::Quit));
        assert_eq!(map_key(press(KeyCode::Char('q'))), Some(InputAction::Quit));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(InputAction::Quit)
        );
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(map_key(press(KeyCode::Char('x'))), None);
        assert_eq!(map_key(press(KeyCode::Down)), None);
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char(' '), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn test_release_ignored() {
        let release = KeyEvent {
            code: KeyCode::Char(' '),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key(release), None);
    }
}
