//! The 3x3 board view.

use ratatui::{
    Frame,
    layout::{Position as ScreenPosition, Rect},
};

use super::cell::{CELL_HEIGHT, CELL_WIDTH, Cell};
use crate::games::tictactoe::{Board, Position};

/// Stateless board view.
///
/// Built fresh from a board snapshot for every render or hit test. Each cell
/// is wired to call `on_cell_click` with its own position, whether or not the
/// game is already decided; deciding what a click means is the controller's
/// job.
#[derive(Debug)]
pub struct Grid<'a> {
    cells: [Cell<'a>; 9],
}

impl<'a> Grid<'a> {
    /// Total width of the grid in terminal columns.
    pub const WIDTH: u16 = CELL_WIDTH * 3;
    /// Total height of the grid in terminal rows.
    pub const HEIGHT: u16 = CELL_HEIGHT * 3;

    /// Builds the nine cells for `board`.
    pub fn new(
        board: &Board,
        cursor: Option<Position>,
        on_cell_click: &'a dyn Fn(Position),
    ) -> Self {
        let cells = Position::ALL.map(|pos| {
            Cell::new(board.get(pos), move || on_cell_click(pos)).highlighted(cursor == Some(pos))
        });
        Self { cells }
    }

    /// The cell at `pos`.
    pub fn cell(&self, pos: Position) -> &Cell<'a> {
        &self.cells[pos.to_index()]
    }

    /// Screen rectangles of all nine cells, in position order.
    ///
    /// Cells that fall outside `area` are clipped to it.
    pub fn cell_areas(area: Rect) -> [Rect; 9] {
        Position::ALL.map(|pos| {
            Rect::new(
                area.x.saturating_add(pos.col() as u16 * CELL_WIDTH),
                area.y.saturating_add(pos.row() as u16 * CELL_HEIGHT),
                CELL_WIDTH,
                CELL_HEIGHT,
            )
            .intersection(area)
        })
    }

    /// The position whose cell contains the screen point, if any.
    pub fn position_at(area: Rect, point: ScreenPosition) -> Option<Position> {
        Self::cell_areas(area)
            .iter()
            .position(|cell| cell.contains(point))
            .and_then(Position::from_index)
    }

    /// Activates the cell at `pos`.
    pub fn click(&self, pos: Position) {
        self.cell(pos).click();
    }

    /// Activates whichever cell contains the screen point.
    pub fn click_at(&self, area: Rect, point: ScreenPosition) -> Option<Position> {
        let pos = Self::position_at(area, point)?;
        self.click(pos);
        Some(pos)
    }

    /// Draws all cells into `area`.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        for (cell, cell_area) in self.cells.iter().zip(Self::cell_areas(area)) {
            if !cell_area.is_empty() {
                cell.render(frame, cell_area);
            }
        }
    }
}
