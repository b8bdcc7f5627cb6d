//! Keyboard shortcut handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// TUI keyboard actions.
///
/// The mapping is context-free; the model decides what an action means
/// for the focused widget or the open dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Input(char),
    Backspace,
    Enter,
    NextField,
    PrevField,
    NextTab,
    PrevTab,
    ShowVitalSigns,
    ShowNotes,
    Save,
    Close,
    None,
}

/// Map a key event to an action.
#[must_use]
pub fn map_key(key: KeyEvent) -> KeyAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => KeyAction::Close,
        KeyCode::Char('s') if ctrl => KeyAction::Save,
        KeyCode::Right if ctrl => KeyAction::NextTab,
        KeyCode::Left if ctrl => KeyAction::PrevTab,
        KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
            KeyAction::Input(c)
        }
        KeyCode::Esc => KeyAction::Close,
        KeyCode::F(1) => KeyAction::ShowVitalSigns,
        KeyCode::F(2) => KeyAction::ShowNotes,
        KeyCode::Tab | KeyCode::Down => KeyAction::NextField,
        KeyCode::BackTab | KeyCode::Up => KeyAction::PrevField,
        KeyCode::Enter => KeyAction::Enter,
        KeyCode::Backspace => KeyAction::Backspace,
        _ => KeyAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_keys() {
        let event = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(map_key(event), KeyAction::Close);

        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(event), KeyAction::Close);
    }

    #[test]
    fn ctrl_s_saves() {
        let event = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert_eq!(map_key(event), KeyAction::Save);
    }

    #[test]
    fn plain_chars_are_input() {
        let event = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::NONE);
        assert_eq!(map_key(event), KeyAction::Input('s'));

        let event = KeyEvent::new(KeyCode::Char('/'), KeyModifiers::NONE);
        assert_eq!(map_key(event), KeyAction::Input('/'));

        let event = KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT);
        assert_eq!(map_key(event), KeyAction::Input('A'));
    }

    #[test]
    fn alt_chars_are_ignored() {
        let event = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT);
        assert_eq!(map_key(event), KeyAction::None);
    }

    #[test]
    fn focus_keys() {
        let event = KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(map_key(event), KeyAction::NextField);

        let event = KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT);
        assert_eq!(map_key(event), KeyAction::PrevField);

        let event = KeyEvent::new(KeyCode::Down, KeyModifiers::NONE);
        assert_eq!(map_key(event), KeyAction::NextField);

        let event = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
        assert_eq!(map_key(event), KeyAction::PrevField);
    }

    #[test]
    fn tab_keys() {
        let event = KeyEvent::new(KeyCode::F(1), KeyModifiers::NONE);
        assert_eq!(map_key(event), KeyAction::ShowVitalSigns);

        let event = KeyEvent::new(KeyCode::F(2), KeyModifiers::NONE);
        assert_eq!(map_key(event), KeyAction::ShowNotes);

        let event = KeyEvent::new(KeyCode::Right, KeyModifiers::CONTROL);
        assert_eq!(map_key(event), KeyAction::NextTab);

        let event = KeyEvent::new(KeyCode::Left, KeyModifiers::CONTROL);
        assert_eq!(map_key(event), KeyAction::PrevTab);
    }

    #[test]
    fn editing_keys() {
        let event = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(map_key(event), KeyAction::Enter);

        let event = KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(map_key(event), KeyAction::Backspace);
    }

    #[test]
    fn unknown_key() {
        let event = KeyEvent::new(KeyCode::F(9), KeyModifiers::NONE);
        assert_eq!(map_key(event), KeyAction::None);
    }
}
