use ratatui::style::Color;
use thiserror::Error;

use crate::input::Direction;
use crate::snake::Position;

/// Default play field width in pixels.
pub const DEFAULT_WIDTH: i32 = 640;

/// Default play field height in pixels.
pub const DEFAULT_HEIGHT: i32 = 480;

/// Default edge length of one square cell in pixels.
pub const DEFAULT_CELL_SIZE: i32 = 20;

/// Length target a fresh snake starts with.
pub const INITIAL_LENGTH: usize = 4;

/// Frames per second a fresh snake starts with.
pub const INITIAL_SPEED: u32 = 10;

/// Rejected grid dimensions.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum ConfigError {
    #[error("cell size must be positive, got {0}")]
    CellSize(i32),
    #[error("{axis} of {value} is not a positive multiple of the cell size {cell_size}")]
    Misaligned {
        axis: &'static str,
        value: i32,
        cell_size: i32,
    },
}

/// Pixel dimensions of the play field and its square cell size.
///
/// Positions on the field are pixel coordinates that are always a multiple
/// of `cell_size`, so the grid has `width / cell_size` columns and
/// `height / cell_size` rows.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridGeometry {
    width: i32,
    height: i32,
    cell_size: i32,
}

impl GridGeometry {
    /// Builds a geometry, rejecting sizes that do not tile into whole cells.
    pub fn new(width: i32, height: i32, cell_size: i32) -> Result<Self, ConfigError> {
        if cell_size <= 0 {
            return Err(ConfigError::CellSize(cell_size));
        }

        for (axis, value) in [("width", width), ("height", height)] {
            if value <= 0 || value % cell_size != 0 {
                return Err(ConfigError::Misaligned {
                    axis,
                    value,
                    cell_size,
                });
            }
        }

        Ok(Self {
            width,
            height,
            cell_size,
        })
    }

    #[must_use]
    pub fn width(self) -> i32 {
        self.width
    }

    #[must_use]
    pub fn height(self) -> i32 {
        self.height
    }

    #[must_use]
    pub fn cell_size(self) -> i32 {
        self.cell_size
    }

    /// Number of cells along the x axis.
    #[must_use]
    pub fn columns(self) -> i32 {
        self.width / self.cell_size
    }

    /// Number of cells along the y axis.
    #[must_use]
    pub fn rows(self) -> i32 {
        self.height / self.cell_size
    }

    /// Returns the grid-aligned cell at the middle of the field.
    #[must_use]
    pub fn center(self) -> Position {
        Position {
            x: self.columns() / 2 * self.cell_size,
            y: self.rows() / 2 * self.cell_size,
        }
    }

    /// Returns true when `position` lies inside `[0, width) x [0, height)`.
    #[must_use]
    pub fn contains(self, position: Position) -> bool {
        position.x >= 0 && position.y >= 0 && position.x < self.width && position.y < self.height
    }

    /// Converts a pixel position into `(column, row)` cell indices.
    #[must_use]
    pub fn cell_index(self, position: Position) -> Option<(usize, usize)> {
        if !self.contains(position) {
            return None;
        }

        let column = usize::try_from(position.x / self.cell_size).ok()?;
        let row = usize::try_from(position.y / self.cell_size).ok()?;
        Some((column, row))
    }
}

impl Default for GridGeometry {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            cell_size: DEFAULT_CELL_SIZE,
        }
    }
}

/// Colors used to paint the frame.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub snake: Color,
    pub apple: Color,
    pub border: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::Rgb(0, 0, 0),
            snake: Color::Rgb(0, 255, 0),
            apple: Color::Rgb(255, 0, 0),
            border: Color::DarkGray,
        }
    }
}

/// Immutable settings handed to the snake, the apple and the game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GameConfig {
    pub geometry: GridGeometry,
    pub palette: Palette,
    pub initial_length: usize,
    pub initial_speed: u32,
    pub initial_direction: Direction,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            geometry: GridGeometry::default(),
            palette: Palette::default(),
            initial_length: INITIAL_LENGTH,
            initial_speed: INITIAL_SPEED,
            initial_direction: Direction::Right,
        }
    }
}
