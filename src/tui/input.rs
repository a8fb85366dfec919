//! Key handling for the password form.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::form::Action;
use crate::pass::CharacterClass;

/// Digits accepted in the length field. Enough to type an out-of-range
/// value and see the error.
const MAX_LENGTH_DIGITS: usize = 4;

/// Focusable controls, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Length,
    Lower,
    Upper,
    Digits,
    Symbols,
    Generate,
    Reset,
}

impl Focus {
    const ORDER: [Focus; 7] = [
        Focus::Length,
        Focus::Lower,
        Focus::Upper,
        Focus::Digits,
        Focus::Symbols,
        Focus::Generate,
        Focus::Reset,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    pub fn class(self) -> Option<CharacterClass> {
        match self {
            Focus::Lower => Some(CharacterClass::Lower),
            Focus::Upper => Some(CharacterClass::Upper),
            Focus::Digits => Some(CharacterClass::Digits),
            Focus::Symbols => Some(CharacterClass::Symbols),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Act(Action),
    Next,
    Prev,
    Copy,
    Quit,
}

/// Translate a key press into a command for the focused control.
pub fn command(focus: Focus, length_input: &str, key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Command::Quit),
            KeyCode::Char('r') => Some(Command::Act(Action::Reset)),
            KeyCode::Char('y') => Some(Command::Copy),
            KeyCode::Char('u') if focus == Focus::Length => {
                Some(Command::Act(Action::EditLength(String::new())))
            }
            _ => None,
        };
    }

    match key.code {
        KeyCode::Esc => return Some(Command::Quit),
        KeyCode::Tab | KeyCode::Down => return Some(Command::Next),
        KeyCode::BackTab | KeyCode::Up => return Some(Command::Prev),
        _ => {}
    }

    match focus {
        Focus::Length => match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() && length_input.len() < MAX_LENGTH_DIGITS => {
                let mut text = length_input.to_string();
                text.push(c);
                Some(Command::Act(Action::EditLength(text)))
            }
            KeyCode::Backspace if !length_input.is_empty() => {
                let mut text = length_input.to_string();
                text.pop();
                Some(Command::Act(Action::EditLength(text)))
            }
            KeyCode::Enter => Some(Command::Act(Action::Submit)),
            _ => None,
        },
        _ => match key.code {
            KeyCode::Char('c') => Some(Command::Copy),
            KeyCode::Char('q') => Some(Command::Quit),
            KeyCode::Char(' ') | KeyCode::Enter => match focus {
                Focus::Generate => Some(Command::Act(Action::Submit)),
                Focus::Reset => Some(Command::Act(Action::Reset)),
                other => other.class().map(|class| Command::Act(Action::Toggle(class))),
            },
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn focus_wraps() {
        assert_eq!(Focus::Length.prev(), Focus::Reset);
        assert_eq!(Focus::Reset.next(), Focus::Length);
        assert_eq!(Focus::Upper.next(), Focus::Digits);
    }

    #[test]
    fn typing_digits_edits_length() {
        assert_eq!(
            command(Focus::Length, "1", key(KeyCode::Char('2'))),
            Some(Command::Act(Action::EditLength("12".into())))
        );
        assert_eq!(command(Focus::Length, "1", key(KeyCode::Char('x'))), None);
        assert_eq!(command(Focus::Length, "1234", key(KeyCode::Char('5'))), None);
        assert_eq!(
            command(Focus::Length, "12", key(KeyCode::Backspace)),
            Some(Command::Act(Action::EditLength("1".into())))
        );
        assert_eq!(command(Focus::Length, "", key(KeyCode::Backspace)), None);
        assert_eq!(
            command(Focus::Length, "12", ctrl('u')),
            Some(Command::Act(Action::EditLength(String::new())))
        );
    }

    #[test]
    fn space_toggles_checkboxes() {
        assert_eq!(
            command(Focus::Symbols, "", key(KeyCode::Char(' '))),
            Some(Command::Act(Action::Toggle(CharacterClass::Symbols)))
        );
        assert_eq!(
            command(Focus::Lower, "", key(KeyCode::Enter)),
            Some(Command::Act(Action::Toggle(CharacterClass::Lower)))
        );
    }

    #[test]
    fn buttons() {
        assert_eq!(
            command(Focus::Generate, "8", key(KeyCode::Enter)),
            Some(Command::Act(Action::Submit))
        );
        assert_eq!(
            command(Focus::Reset, "8", key(KeyCode::Enter)),
            Some(Command::Act(Action::Reset))
        );
        assert_eq!(
            command(Focus::Length, "8", key(KeyCode::Enter)),
            Some(Command::Act(Action::Submit))
        );
    }

    #[test]
    fn copy_and_quit_keys() {
        assert_eq!(command(Focus::Upper, "", key(KeyCode::Char('c'))), Some(Command::Copy));
        assert_eq!(command(Focus::Length, "", key(KeyCode::Char('c'))), None);
        assert_eq!(command(Focus::Length, "", ctrl('y')), Some(Command::Copy));
        assert_eq!(command(Focus::Length, "", ctrl('c')), Some(Command::Quit));
        assert_eq!(command(Focus::Generate, "", key(KeyCode::Esc)), Some(Command::Quit));
        assert_eq!(command(Focus::Generate, "", ctrl('r')), Some(Command::Act(Action::Reset)));
    }

    #[test]
    fn navigation() {
        assert_eq!(command(Focus::Length, "", key(KeyCode::Tab)), Some(Command::Next));
        assert_eq!(command(Focus::Reset, "", key(KeyCode::Up)), Some(Command::Prev));
        assert_eq!(command(Focus::Reset, "", key(KeyCode::BackTab)), Some(Command::Prev));
    }
}
