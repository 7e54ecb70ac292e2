//! A single board square.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::games::tictactoe::{Player, Square};

/// Width of one cell in terminal columns, borders included.
pub const CELL_WIDTH: u16 = 7;
/// Height of one cell in terminal rows, borders included.
pub const CELL_HEIGHT: u16 = 3;

/// Leaf view: shows one square and reports activation to its owner.
///
/// A cell holds no game state. It displays the value it was built with and
/// calls `on_click` once each time [`Cell::click`] is invoked.
pub struct Cell<'a> {
    value: Square,
    highlighted: bool,
    on_click: Box<dyn Fn() + 'a>,
}

impl<'a> Cell<'a> {
    /// Creates a cell showing `value`.
    pub fn new(value: Square, on_click: impl Fn() + 'a) -> Self {
        Self {
            value,
            highlighted: false,
            on_click: Box::new(on_click),
        }
    }

    /// Marks this cell as the keyboard cursor.
    pub fn highlighted(mut self, highlighted: bool) -> Self {
        self.highlighted = highlighted;
        self
    }

    /// The square shown.
    pub fn value(&self) -> Square {
        self.value
    }

    /// Whether the cursor sits on this cell.
    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    /// Reports one activation to the owner.
    pub fn click(&self) {
        (self.on_click)()
    }

    /// Draws the cell into `area`.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let mark_style = match self.value {
            Square::Empty => Style::default().fg(Color::DarkGray),
            Square::Occupied(Player::X) => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            Square::Occupied(Player::O) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        };

        let (border_style, mark_style) = if self.is_highlighted() {
            (
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                mark_style.bg(Color::White),
            )
        } else {
            (Style::default().fg(Color::DarkGray), mark_style)
        };

        let paragraph = Paragraph::new(self.value.symbol())
            .style(mark_style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(border_style));

        frame.render_widget(paragraph, area);
    }
}

impl std::fmt::Debug for Cell<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cell")
            .field("value", &self.value)
            .field("highlighted", &self.highlighted)
            .finish_non_exhaustive()
    }
}
