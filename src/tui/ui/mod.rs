//! View tree for the game screen.
//!
//! Nothing here owns state. [`GameScreen`] is rebuilt from a
//! [`GameView`] snapshot whenever the terminal is drawn or an input needs
//! hit testing, and every interaction is forwarded through the
//! [`Dispatcher`] as an [`Action`].

mod cell;
mod grid;
mod moves;

pub use cell::{CELL_HEIGHT, CELL_WIDTH, Cell};
pub use grid::Grid;
pub use moves::MoveList;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Position as ScreenPosition, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use super::app::{App, Focus};
use super::dispatch::Dispatcher;
use crate::games::tictactoe::{Action, GameView, Position};

/// Screen regions for one terminal size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title bar.
    pub title: Rect,
    /// Bordered pane around the board.
    pub board_pane: Rect,
    /// The grid itself, centred in the board pane.
    pub grid: Rect,
    /// Status line.
    pub status: Rect,
    /// Move list.
    pub moves: Rect,
    /// Key help.
    pub help: Rect,
}

impl ScreenLayout {
    /// Splits the terminal area into regions.
    pub fn new(area: Rect) -> Self {
        let [title, body, help] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(Grid::HEIGHT + 2),
            Constraint::Length(3),
        ])
        .areas(area);

        let [board_pane, info] = Layout::horizontal([
            Constraint::Length(Grid::WIDTH + 4),
            Constraint::Min(24),
        ])
        .areas(body);

        let [status, moves] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(3)]).areas(info);

        let grid_pane = Block::default().borders(Borders::ALL).inner(board_pane);

        Self {
            title,
            board_pane,
            grid: center_rect(grid_pane, Grid::WIDTH, Grid::HEIGHT),
            status,
            moves,
            help,
        }
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [column] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [centered] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(column);
    centered
}

/// What a mouse click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// A board cell.
    Cell(Position),
    /// A row of the move list.
    Move(usize),
}

/// The top-level view, built from one snapshot.
#[derive(Debug)]
pub struct GameScreen<'a> {
    title: &'a str,
    view: GameView,
    focus: Focus,
    cursor: Position,
    selection: usize,
    dispatcher: &'a Dispatcher,
}

impl<'a> GameScreen<'a> {
    /// Builds the screen for `view`.
    pub fn new(
        title: &'a str,
        view: GameView,
        focus: Focus,
        cursor: Position,
        selection: usize,
        dispatcher: &'a Dispatcher,
    ) -> Self {
        Self {
            title,
            view,
            focus,
            cursor,
            selection,
            dispatcher,
        }
    }

    /// Runs `f` against the grid wired to the dispatcher.
    fn with_grid<R>(&self, f: impl FnOnce(&Grid<'_>) -> R) -> R {
        let on_cell_click = |pos: Position| self.dispatcher.dispatch(Action::Click(pos));
        let cursor = (self.focus == Focus::Board).then_some(self.cursor);
        let grid = Grid::new(self.view.board(), cursor, &on_cell_click);
        f(&grid)
    }

    /// Runs `f` against the move list wired to the dispatcher.
    fn with_moves<R>(&self, f: impl FnOnce(&MoveList<'_>) -> R) -> R {
        let on_jump = |step: usize| self.dispatcher.dispatch(Action::JumpTo(step));
        let selected = (self.focus == Focus::Moves).then_some(self.selection);
        let list = MoveList::new(
            self.view.moves(),
            *self.view.step_number(),
            selected,
            &on_jump,
        );
        f(&list)
    }

    /// Activates the cell at `pos`, as a click on it would.
    pub fn click_cell(&self, pos: Position) {
        self.with_grid(|grid| grid.click(pos));
    }

    /// Activates move-list row `index`.
    pub fn activate_move(&self, index: usize) {
        self.with_moves(|list| list.activate(index));
    }

    /// Routes a mouse click at (`column`, `row`) to whatever lies beneath it.
    pub fn click_at(&self, area: Rect, column: u16, row: u16) -> Option<Hit> {
        let layout = ScreenLayout::new(area);
        let point = ScreenPosition::new(column, row);

        if let Some(pos) = self.with_grid(|grid| grid.click_at(layout.grid, point)) {
            return Some(Hit::Cell(pos));
        }
        self.with_moves(|list| list.click_at(layout.moves, point))
            .map(Hit::Move)
    }

    /// Draws the whole screen.
    pub fn render(&self, frame: &mut Frame) {
        let layout = ScreenLayout::new(frame.area());

        let title = Paragraph::new(self.title)
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, layout.title);

        let board_border = if self.focus == Focus::Board {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        frame.render_widget(
            Block::default()
                .borders(Borders::ALL)
                .title("Board")
                .border_style(board_border),
            layout.board_pane,
        );
        self.with_grid(|grid| grid.render(frame, layout.grid));

        let status_color = if self.view.winner().is_some() {
            Color::Green
        } else {
            Color::Yellow
        };
        let status = Paragraph::new(self.view.status().as_str())
            .style(Style::default().fg(status_color).add_modifier(Modifier::BOLD))
            .block(Block::default().borders(Borders::ALL).title("Status"));
        frame.render_widget(status, layout.status);

        self.with_moves(|list| list.render(frame, layout.moves));

        let help = Paragraph::new(
            "Click or 1-9: place | Arrows+Enter: select | Tab: board/moves | R: restart | Q: quit",
        )
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, layout.help);
    }
}

/// Draws the main UI for the app's current state.
pub fn draw(frame: &mut Frame, app: &App) {
    app.screen().render(frame);
}
