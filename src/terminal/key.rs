//! Key decoding.
//!
//! Maps crossterm key events onto the small vocabulary the behaviors
//! understand: four directions, four actions, plus a few navigation extras.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Enter,
    Space,
    Quit,
    Backspace,
    /// Multi-select: select everything
    SelectAll,
    /// Multi-select: clear the selection
    SelectNone,
    /// Multi-select: flip every option
    Invert,
}

/// Cursor jumps larger than one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Jump {
    Home,
    End,
    PageUp,
    PageDown,
}

/// A decoded input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Direction(Direction),
    Action(Action),
    Jump(Jump),
    /// Ctrl-C while raw mode swallows SIGINT
    Interrupt,
    /// Terminal was resized
    Resize,
    /// Anything else; ignored by the engine
    Other,
}

/// Convert a keyboard event to a Key. `vim` enables `hjkl` and `g`/`G`.
pub fn decode_key(key: KeyEvent, vim: bool) -> Key {
    if key.kind == KeyEventKind::Release {
        return Key::Other;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Key::Interrupt,
            KeyCode::Char('n') => Key::Direction(Direction::Down),
            KeyCode::Char('p') => Key::Direction(Direction::Up),
            _ => Key::Other,
        };
    }

    match key.code {
        KeyCode::Up => Key::Direction(Direction::Up),
        KeyCode::Down => Key::Direction(Direction::Down),
        KeyCode::Left => Key::Direction(Direction::Left),
        KeyCode::Right => Key::Direction(Direction::Right),
        KeyCode::Char('k') if vim => Key::Direction(Direction::Up),
        KeyCode::Char('j') if vim => Key::Direction(Direction::Down),
        KeyCode::Char('h') if vim => Key::Direction(Direction::Left),
        KeyCode::Char('l') if vim => Key::Direction(Direction::Right),
        KeyCode::Home => Key::Jump(Jump::Home),
        KeyCode::End => Key::Jump(Jump::End),
        KeyCode::Char('g') if vim => Key::Jump(Jump::Home),
        KeyCode::Char('G') if vim => Key::Jump(Jump::End),
        KeyCode::PageUp => Key::Jump(Jump::PageUp),
        KeyCode::PageDown => Key::Jump(Jump::PageDown),
        KeyCode::Enter => Key::Action(Action::Enter),
        KeyCode::Char(' ') => Key::Action(Action::Space),
        KeyCode::Char('q') | KeyCode::Esc => Key::Action(Action::Quit),
        KeyCode::Backspace => Key::Action(Action::Backspace),
        KeyCode::Char('a') => Key::Action(Action::SelectAll),
        KeyCode::Char('n') => Key::Action(Action::SelectNone),
        KeyCode::Char('i') => Key::Action(Action::Invert),
        _ => Key::Other,
    }
}
