//! Move history list.

use ratatui::{
    Frame,
    layout::{Position as ScreenPosition, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};

use crate::games::tictactoe::MoveDescriptor;

/// One row per history entry; activating a row jumps to that step.
pub struct MoveList<'a> {
    moves: &'a [MoveDescriptor],
    current_step: usize,
    selected: Option<usize>,
    on_jump: &'a dyn Fn(usize),
}

impl<'a> MoveList<'a> {
    /// Creates the list. `selected` is `Some` only while the list has focus.
    pub fn new(
        moves: &'a [MoveDescriptor],
        current_step: usize,
        selected: Option<usize>,
        on_jump: &'a dyn Fn(usize),
    ) -> Self {
        Self {
            moves,
            current_step,
            selected,
            on_jump,
        }
    }

    fn block() -> Block<'static> {
        Block::default().borders(Borders::ALL).title("Moves")
    }

    /// First visible row for a list drawn in `inner`.
    ///
    /// Keeps the selected row (or the current step) on screen. Rendering and
    /// hit testing both go through here so they agree on scrolling.
    fn offset(&self, inner: Rect) -> usize {
        let anchor = self.selected.unwrap_or(self.current_step);
        anchor.saturating_sub((inner.height as usize).saturating_sub(1))
    }

    /// Activates row `index`.
    pub fn activate(&self, index: usize) {
        if let Some(entry) = self.moves.get(index) {
            (self.on_jump)(*entry.step());
        }
    }

    /// Activates the row under the screen point, returning its index.
    pub fn click_at(&self, area: Rect, point: ScreenPosition) -> Option<usize> {
        let inner = Self::block().inner(area);
        if !inner.contains(point) {
            return None;
        }
        let index = self.offset(inner) + (point.y - inner.y) as usize;
        if index >= self.moves.len() {
            return None;
        }
        self.activate(index);
        Some(index)
    }

    /// Draws the list into `area`.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let inner = Self::block().inner(area);

        let items: Vec<ListItem> = self
            .moves
            .iter()
            .map(|entry| {
                let is_current = *entry.step() == self.current_step;
                let marker = if is_current { "> " } else { "  " };
                let style = if is_current {
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(Line::from(vec![
                    Span::raw(marker),
                    Span::styled(entry.label().as_str(), style),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(Self::block())
            .highlight_style(Style::default().bg(Color::DarkGray));

        let mut state = ListState::default()
            .with_offset(self.offset(inner))
            .with_selected(self.selected);
        frame.render_stateful_widget(list, area, &mut state);
    }
}

impl std::fmt::Debug for MoveList<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MoveList")
            .field("moves", &self.moves.len())
            .field("current_step", &self.current_step)
            .field("selected", &self.selected)
            .finish_non_exhaustive()
    }
}
