//! Keystroke input handling using crossterm

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io::Result;

/// What a key press asks the session to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    MoveUp,
    MoveDown,
    Extract,
    /// Any other key; also dismisses notifications
    Other,
}

impl Command {
    /// Map a key event to a command.
    ///
    /// `q` and Ctrl+C quit (raw mode swallows SIGINT), arrows move, `x`
    /// extracts.
    pub fn from_key(key: &KeyEvent) -> Self {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Command::Quit,
            KeyCode::Char('q') => Command::Quit,
            KeyCode::Char('x') => Command::Extract,
            KeyCode::Up => Command::MoveUp,
            KeyCode::Down => Command::MoveDown,
            _ => Command::Other,
        }
    }
}

/// One thing that happened at the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Key(Command),
    /// New terminal size in `(columns, lines)`
    Resize(u16, u16),
}

/// Blocking source of input events
pub trait InputSource {
    /// Wait for the next event
    fn next_event(&mut self) -> Result<InputEvent>;
}

/// Reads events from the real terminal
#[derive(Debug, Default)]
pub struct TerminalInput;

impl InputSource for TerminalInput {
    fn next_event(&mut self) -> Result<InputEvent> {
        loop {
            match event::read()? {
                // Releases and repeats show up on some platforms; count presses only
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    return Ok(InputEvent::Key(Command::from_key(&key)));
                }
                Event::Resize(columns, lines) => return Ok(InputEvent::Resize(columns, lines)),
                _ => {}
            }
        }
    }
}
