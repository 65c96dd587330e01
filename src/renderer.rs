use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Widget};
use ratatui::Frame;

use crate::apple::Apple;
use crate::config::{GridGeometry, Palette};
use crate::game::GameState;
use crate::snake::{Position, Snake};

/// Upper half-block glyph: foreground paints the top cell, background the bottom.
pub const GLYPH_HALF_UPPER: &str = "▀";

/// Surface that accepts a cleared frame and filled cell-sized squares.
pub trait Canvas {
    fn clear(&mut self, color: Color);
    fn fill_square(&mut self, position: Position, color: Color);
}

/// Anything drawn as a set of cells in one color.
pub trait Sprite {
    fn color(&self, palette: &Palette) -> Color;
    fn cells(&self) -> impl Iterator<Item = Position> + '_;
}

impl Sprite for Snake {
    fn color(&self, palette: &Palette) -> Color {
        palette.snake
    }

    fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.segments().copied()
    }
}

impl Sprite for Apple {
    fn color(&self, palette: &Palette) -> Color {
        palette.apple
    }

    fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        std::iter::once(self.position())
    }
}

/// Fills every cell of `sprite` on `canvas`.
pub fn paint<C, S>(canvas: &mut C, sprite: &S, palette: &Palette)
where
    C: Canvas + ?Sized,
    S: Sprite,
{
    let color = sprite.color(palette);
    for cell in sprite.cells() {
        canvas.fill_square(cell, color);
    }
}

/// In-memory grid of cell colors, rendered as half-block terminal cells.
#[derive(Debug, Clone)]
pub struct CellCanvas {
    geometry: GridGeometry,
    columns: usize,
    rows: usize,
    cells: Vec<Color>,
}

impl CellCanvas {
    #[must_use]
    pub fn new(geometry: GridGeometry, background: Color) -> Self {
        let columns = usize::try_from(geometry.columns()).unwrap_or(0);
        let rows = usize::try_from(geometry.rows()).unwrap_or(0);

        Self {
            geometry,
            columns,
            rows,
            cells: vec![background; columns * rows],
        }
    }

    /// Returns the color of the cell at `(column, row)`.
    #[must_use]
    pub fn color_at(&self, column: usize, row: usize) -> Option<Color> {
        if column >= self.columns || row >= self.rows {
            return None;
        }
        self.cells.get(row * self.columns + column).copied()
    }

    /// Terminal footprint: one column per cell, two cell rows per line.
    #[must_use]
    pub fn terminal_size(&self) -> (u16, u16) {
        let width = u16::try_from(self.columns).unwrap_or(u16::MAX);
        let height = u16::try_from(self.rows.div_ceil(2)).unwrap_or(u16::MAX);
        (width, height)
    }
}

impl Canvas for CellCanvas {
    fn clear(&mut self, color: Color) {
        self.cells.fill(color);
    }

    fn fill_square(&mut self, position: Position, color: Color) {
        let Some((column, row)) = self.geometry.cell_index(position) else {
            return;
        };

        if let Some(cell) = self.cells.get_mut(row * self.columns + column) {
            *cell = color;
        }
    }
}

impl Widget for &CellCanvas {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (_, line_count) = self.terminal_size();

        for line in 0..line_count {
            let y = area.y.saturating_add(line);
            if y >= area.bottom() {
                break;
            }

            let upper_row = usize::from(line) * 2;
            for column in 0..self.columns {
                let Ok(offset) = u16::try_from(column) else {
                    break;
                };
                let x = area.x.saturating_add(offset);
                if x >= area.right() {
                    break;
                }

                let Some(upper) = self.color_at(column, upper_row) else {
                    continue;
                };
                // An odd row count leaves the last line without a lower cell.
                let lower = self.color_at(column, upper_row + 1).unwrap_or(Color::Reset);

                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_symbol(GLYPH_HALF_UPPER).set_fg(upper).set_bg(lower);
                }
            }
        }
    }
}

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, state: &GameState) {
    let config = state.config();
    let palette = &config.palette;

    let mut canvas = CellCanvas::new(config.geometry, palette.background);
    canvas.clear(palette.background);
    paint(&mut canvas, &state.apple, palette);
    paint(&mut canvas, &state.snake, palette);

    let (width, height) = canvas.terminal_size();
    let area = centered(
        frame.area(),
        width.saturating_add(2),
        height.saturating_add(2),
    );

    let block = Block::bordered()
        .title(format!(
            " snake · speed {} · length {} ",
            state.speed,
            state.snake.len()
        ))
        .border_style(Style::new().fg(palette.border));
    let inner = block.inner(area);

    frame.render_widget(block, area);
    frame.render_widget(&canvas, inner);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect;
    use ratatui::style::Color;
    use ratatui::widgets::Widget;

    use crate::apple::Apple;
    use crate::config::{GameConfig, GridGeometry, Palette};
    use crate::input::Direction;
    use crate::snake::{Position, Snake};

    use super::{centered, paint, Canvas, CellCanvas, GLYPH_HALF_UPPER};

    #[derive(Default)]
    struct RecordingCanvas {
        calls: Vec<(Option<Position>, Color)>,
    }

    impl Canvas for RecordingCanvas {
        fn clear(&mut self, color: Color) {
            self.calls.push((None, color));
        }

        fn fill_square(&mut self, position: Position, color: Color) {
            self.calls.push((Some(position), color));
        }
    }

    #[test]
    fn sprites_paint_their_cells_in_their_color() {
        let config = GameConfig::default();
        let palette = Palette::default();
        let snake = Snake::from_segments(
            vec![Position { x: 40, y: 0 }, Position { x: 20, y: 0 }],
            Direction::Right,
            &config,
        );
        let apple = Apple::at(Position { x: 100, y: 100 });
        let mut canvas = RecordingCanvas::default();

        canvas.clear(palette.background);
        paint(&mut canvas, &apple, &palette);
        paint(&mut canvas, &snake, &palette);

        assert_eq!(
            canvas.calls,
            vec![
                (None, palette.background),
                (Some(Position { x: 100, y: 100 }), palette.apple),
                (Some(Position { x: 40, y: 0 }), palette.snake),
                (Some(Position { x: 20, y: 0 }), palette.snake),
            ]
        );
    }

    #[test]
    fn snake_is_painted_over_apple() {
        let config = GameConfig::default();
        let palette = Palette::default();
        let snake = Snake::from_segments(vec![Position { x: 60, y: 40 }], Direction::Up, &config);
        let apple = Apple::at(Position { x: 60, y: 40 });
        let mut canvas = CellCanvas::new(config.geometry, palette.background);

        paint(&mut canvas, &apple, &palette);
        paint(&mut canvas, &snake, &palette);

        assert_eq!(canvas.color_at(3, 2), Some(palette.snake));
        assert_eq!(canvas.color_at(0, 0), Some(palette.background));
    }

    #[test]
    fn out_of_bounds_squares_are_dropped() {
        let palette = Palette::default();
        let mut canvas = CellCanvas::new(GridGeometry::default(), palette.background);

        canvas.fill_square(Position { x: 640, y: 0 }, palette.apple);

        assert!(
            (0..32).all(|column| canvas.color_at(column, 0) == Some(palette.background))
        );
    }

    #[test]
    fn half_blocks_pair_vertically_adjacent_cells() {
        let palette = Palette::default();
        let geometry = GridGeometry::new(80, 60, 20).expect("geometry should be valid");
        let mut canvas = CellCanvas::new(geometry, palette.background);
        canvas.fill_square(Position { x: 20, y: 0 }, palette.snake);
        canvas.fill_square(Position { x: 20, y: 20 }, palette.apple);
        canvas.fill_square(Position { x: 0, y: 40 }, palette.snake);

        assert_eq!(canvas.terminal_size(), (4, 2));

        let area = Rect::new(0, 0, 4, 2);
        let mut buffer = Buffer::empty(area);
        (&canvas).render(area, &mut buffer);

        let paired = buffer.cell((1, 0)).expect("cell should exist");
        assert_eq!(paired.symbol(), GLYPH_HALF_UPPER);
        assert_eq!(paired.fg, palette.snake);
        assert_eq!(paired.bg, palette.apple);

        let last_line = buffer.cell((0, 1)).expect("cell should exist");
        assert_eq!(last_line.fg, palette.snake);
        assert_eq!(last_line.bg, Color::Reset);
    }

    #[test]
    fn rendering_clips_to_area() {
        let palette = Palette::default();
        let canvas = CellCanvas::new(GridGeometry::default(), palette.background);

        let area = Rect::new(0, 0, 5, 3);
        let mut buffer = Buffer::empty(area);
        (&canvas).render(area, &mut buffer);

        let cell = buffer.cell((4, 2)).expect("cell should exist");
        assert_eq!(cell.fg, palette.background);
    }

    #[test]
    fn centered_rect_shrinks_to_fit() {
        let area = Rect::new(0, 0, 80, 24);

        assert_eq!(centered(area, 34, 14), Rect::new(23, 5, 34, 14));
        assert_eq!(centered(area, 100, 30), area);
    }
}
