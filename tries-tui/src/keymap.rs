use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tries_core::Action;

/// Resolve a key event into an Action
pub fn resolve_action(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return resolve_control_key(key.code);
    }

    match key.code {
        KeyCode::Esc => Some(Action::Cancel),
        KeyCode::Enter => Some(Action::Confirm),
        KeyCode::Up => Some(Action::MoveSelection(-1)),
        KeyCode::Down => Some(Action::MoveSelection(1)),
        KeyCode::Backspace => Some(Action::SearchPop),
        KeyCode::Char(c) => Some(Action::SearchPush(c)),
        _ => None,
    }
}

fn resolve_control_key(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Char('c') => Some(Action::Cancel),
        KeyCode::Char('n' | 'j') => Some(Action::MoveSelection(1)),
        KeyCode::Char('p' | 'k') => Some(Action::MoveSelection(-1)),
        KeyCode::Char('d') => Some(Action::Delete),
        // Some terminals report Ctrl-H for backspace
        KeyCode::Char('h') | KeyCode::Backspace => Some(Action::SearchPop),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_printable_chars_push() {
        assert_eq!(resolve_action(key(KeyCode::Char('a'))), Some(Action::SearchPush('a')));
        let shifted = KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT);
        assert_eq!(resolve_action(shifted), Some(Action::SearchPush('A')));
    }

    #[test]
    fn test_navigation_keys() {
        for event in [key(KeyCode::Down), ctrl('n'), ctrl('j')] {
            assert_eq!(resolve_action(event), Some(Action::MoveSelection(1)));
        }
        for event in [key(KeyCode::Up), ctrl('p'), ctrl('k')] {
            assert_eq!(resolve_action(event), Some(Action::MoveSelection(-1)));
        }
    }

    #[test]
    fn test_terminal_keys() {
        assert_eq!(resolve_action(key(KeyCode::Enter)), Some(Action::Confirm));
        assert_eq!(resolve_action(key(KeyCode::Esc)), Some(Action::Cancel));
        assert_eq!(resolve_action(ctrl('c')), Some(Action::Cancel));
    }

    #[test]
    fn test_backspace() {
        assert_eq!(resolve_action(key(KeyCode::Backspace)), Some(Action::SearchPop));
        assert_eq!(resolve_action(ctrl('h')), Some(Action::SearchPop));
    }

    #[test]
    fn test_ctrl_d_deletes() {
        assert_eq!(resolve_action(ctrl('d')), Some(Action::Delete));
        assert_eq!(resolve_action(key(KeyCode::Char('d'))), Some(Action::SearchPush('d')));
    }

    #[test]
    fn test_unbound_keys_are_ignored() {
        assert_eq!(resolve_action(key(KeyCode::Tab)), None);
        assert_eq!(resolve_action(ctrl('x')), None);
    }

    #[test]
    fn test_release_events_are_ignored() {
        let release = KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(resolve_action(release), None);
    }
}
