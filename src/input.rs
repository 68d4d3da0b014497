//! Keyboard mapping.
//!
//! Each key press (or OS key repeat) becomes at most one `Command`; the loop
//! applies commands between simulation steps.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::entities::GameStatus;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    Fire,
    Restart,
    Quit,
}

/// Translate a key event given the current game status.
///
/// While playing: ← / A, → / D, SPACE.  After a game over: SPACE or R
/// restarts.  Q, Esc and Ctrl-C quit at any time.
pub fn command_for(event: &KeyEvent, status: GameStatus) -> Option<Command> {
    if event.kind == KeyEventKind::Release {
        return None;
    }

    match event.code {
        KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => {
            return Some(Command::Quit);
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Some(Command::Quit),
        _ => {}
    }

    match status {
        GameStatus::Playing => match event.code {
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Command::MoveLeft),
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Command::MoveRight),
            KeyCode::Char(' ') => Some(Command::Fire),
            _ => None,
        },
        GameStatus::GameOver => match event.code {
            KeyCode::Char(' ') | KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Restart),
            _ => None,
        },
    }
}
