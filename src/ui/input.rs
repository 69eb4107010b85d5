use std::io::{self, BufRead};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::game::Direction;

/// What the player asked for on one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    Move(Direction),
    Quit,
    /// Anything that is not a known binding; the turn passes without a move
    Unrecognized,
}

/// Source of one directive per turn.
pub trait InputSource {
    /// Block until the player produces a directive.
    fn next_directive(&mut self) -> io::Result<Directive>;
}

/// Character bindings for the four directions, the `[controls]` config table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct KeyMap {
    pub up: char,
    pub down: char,
    pub left: char,
    pub right: char,
}

impl KeyMap {
    pub fn direction_for(&self, c: char) -> Option<Direction> {
        match c {
            c if c == self.up => Some(Direction::Up),
            c if c == self.down => Some(Direction::Down),
            c if c == self.left => Some(Direction::Left),
            c if c == self.right => Some(Direction::Right),
            _ => None,
        }
    }

    /// Map a key press from the full-screen front end
    pub fn directive_for_key(&self, key: KeyEvent) -> Directive {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Directive::Quit,
            KeyCode::Char('q') | KeyCode::Esc => Directive::Quit,
            KeyCode::Up => Directive::Move(Direction::Up),
            KeyCode::Down => Directive::Move(Direction::Down),
            KeyCode::Left => Directive::Move(Direction::Left),
            KeyCode::Right => Directive::Move(Direction::Right),
            KeyCode::Char(c) => self
                .direction_for(c)
                .map_or(Directive::Unrecognized, Directive::Move),
            _ => Directive::Unrecognized,
        }
    }

    /// Map one line of text input. Only the first character counts.
    pub fn directive_for_line(&self, line: &str) -> Directive {
        line.chars()
            .next()
            .and_then(|c| self.direction_for(c))
            .map_or(Directive::Unrecognized, Directive::Move)
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        KeyMap {
            up: 'w',
            down: 's',
            left: 'a',
            right: 'd',
        }
    }
}

/// Reads key presses from the terminal through crossterm.
pub struct KeyInput {
    keys: KeyMap,
}

impl KeyInput {
    pub fn new(keys: KeyMap) -> Self {
        KeyInput { keys }
    }
}

impl InputSource for KeyInput {
    fn next_directive(&mut self) -> io::Result<Directive> {
        loop {
            // resize, focus and release events are not turns
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(self.keys.directive_for_key(key));
                }
            }
        }
    }
}

/// Reads one line per turn, e.g. from stdin. End of input quits.
pub struct LineInput<R> {
    reader: R,
    keys: KeyMap,
    buf: String,
}

impl<R: BufRead> LineInput<R> {
    pub fn new(reader: R, keys: KeyMap) -> Self {
        LineInput {
            reader,
            keys,
            buf: String::new(),
        }
    }
}

impl<R: BufRead> InputSource for LineInput<R> {
    fn next_directive(&mut self) -> io::Result<Directive> {
        self.buf.clear();
        if self.reader.read_line(&mut self.buf)? == 0 {
            return Ok(Directive::Quit);
        }
        Ok(self.keys.directive_for_line(&self.buf))
    }
}
