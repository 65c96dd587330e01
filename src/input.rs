use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the movement vector for one step of `cell_size` pixels.
    #[must_use]
    pub fn offset(self, cell_size: i32) -> (i32, i32) {
        match self {
            Self::Up => (0, -cell_size),
            Self::Down => (0, cell_size),
            Self::Left => (-cell_size, 0),
            Self::Right => (cell_size, 0),
        }
    }
}

/// Which directional keys were held during the current frame.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct KeyState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl KeyState {
    /// Marks the key for `direction` as held.
    pub fn press(&mut self, direction: Direction) {
        match direction {
            Direction::Up => self.up = true,
            Direction::Down => self.down = true,
            Direction::Left => self.left = true,
            Direction::Right => self.right = true,
        }
    }

    /// Maps held keys to a direction request; first match wins in the order
    /// up, down, left, right.
    #[must_use]
    pub fn requested_direction(self) -> Option<Direction> {
        if self.up {
            Some(Direction::Up)
        } else if self.down {
            Some(Direction::Down)
        } else if self.left {
            Some(Direction::Left)
        } else if self.right {
            Some(Direction::Right)
        } else {
            None
        }
    }
}

/// Input sampled once per frame.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct FrameInput {
    pub keys: KeyState,
    pub quit: bool,
}

/// What a single key press means to the game.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum KeyAction {
    Direction(Direction),
    Quit,
}

/// Translates a terminal key event, ignoring anything unrecognized.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<KeyAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char('c' | 'C')).then_some(KeyAction::Quit);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('w' | 'W') => Some(KeyAction::Direction(Direction::Up)),
        KeyCode::Down | KeyCode::Char('s' | 'S') => Some(KeyAction::Direction(Direction::Down)),
        KeyCode::Left | KeyCode::Char('a' | 'A') => Some(KeyAction::Direction(Direction::Left)),
        KeyCode::Right | KeyCode::Char('d' | 'D') => Some(KeyAction::Direction(Direction::Right)),
        KeyCode::Esc | KeyCode::Char('q' | 'Q') => Some(KeyAction::Quit),
        _ => None,
    }
}

/// Folds one key action into the frame's input.
pub fn apply_action(input: &mut FrameInput, action: KeyAction) {
    match action {
        KeyAction::Direction(direction) => input.keys.press(direction),
        KeyAction::Quit => input.quit = true,
    }
}

/// Samples terminal events without blocking the frame.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Drains every event queued since the previous frame.
    ///
    /// Terminals report presses rather than held state, so a key counts as
    /// held for this frame when at least one press for it was queued.
    pub fn poll_frame(&mut self) -> io::Result<FrameInput> {
        let mut input = FrameInput::default();

        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if let Some(action) = map_key(key) {
                    apply_action(&mut input, action);
                }
            }
        }

        Ok(input)
    }
}
