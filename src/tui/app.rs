//! Application state and input handling.

use std::sync::mpsc;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use tracing::{debug, instrument, warn};

use super::dispatch::Dispatcher;
use super::input::{digit_position, move_cursor, move_selection};
use super::ui::{GameScreen, Hit};
use crate::UiConfig;
use crate::games::tictactoe::{Action, GameController, Position};

/// Which pane receives arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move through the move list.
    Moves,
}

impl Focus {
    fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::Moves,
            Focus::Moves => Focus::Board,
        }
    }
}

/// Main application state.
///
/// Holds the controller plus purely presentational bits (cursor, focus,
/// list selection). Input is turned into [`Action`]s by the view tree and
/// reaches the controller only through [`App::process_actions`].
#[derive(Debug)]
pub struct App {
    controller: GameController,
    config: UiConfig,
    dispatcher: Dispatcher,
    actions: mpsc::Receiver<Action>,
    cursor: Position,
    focus: Focus,
    selection: usize,
    viewport: Rect,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    #[instrument(skip(config))]
    pub fn new(config: UiConfig) -> Self {
        let (dispatcher, actions) = Dispatcher::channel();
        Self {
            controller: GameController::new(),
            config,
            dispatcher,
            actions,
            cursor: Position::Center,
            focus: Focus::Board,
            selection: 0,
            viewport: Rect::default(),
            should_quit: false,
        }
    }

    /// The game controller.
    pub fn controller(&self) -> &GameController {
        &self.controller
    }

    /// Board cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Pane with keyboard focus.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Selected move-list row.
    pub fn selection(&self) -> usize {
        self.selection
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Records the terminal area of the last draw, used for mouse hit tests.
    pub fn set_viewport(&mut self, area: Rect) {
        self.viewport = area;
    }

    /// Builds the view tree for the current state.
    pub fn screen(&self) -> GameScreen<'_> {
        GameScreen::new(
            self.config.title(),
            self.controller.view(),
            self.focus,
            self.cursor,
            self.selection,
            &self.dispatcher,
        )
    }

    /// Handles one terminal event and applies any resulting actions.
    #[instrument(skip(self))]
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
        self.process_actions();
    }

    fn handle_key(&mut self, key: KeyEvent) {
        // crossterm reports both press and release on some platforms
        if key.kind == KeyEventKind::Release {
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                debug!("Quit requested");
                self.should_quit = true;
            }
            KeyCode::Char('r') | KeyCode::Char('R') => self.dispatcher.dispatch(Action::Restart),
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = self.focus.toggle();
                if self.focus == Focus::Moves {
                    self.selection = *self.controller.state().step_number();
                }
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(pos) = digit_position(c) {
                    self.cursor = pos;
                    self.screen().click_cell(pos);
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.focus {
                Focus::Board => self.screen().click_cell(self.cursor),
                Focus::Moves => self.screen().activate_move(self.selection),
            },
            code => match self.focus {
                Focus::Board => self.cursor = move_cursor(self.cursor, code),
                Focus::Moves => {
                    let len = self.controller.state().history().len();
                    self.selection = move_selection(self.selection, len, code);
                }
            },
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        let hit = self.screen().click_at(self.viewport, mouse.column, mouse.row);
        debug!(?hit, column = mouse.column, row = mouse.row, "Mouse click");
        match hit {
            Some(Hit::Cell(pos)) => {
                self.focus = Focus::Board;
                self.cursor = pos;
            }
            Some(Hit::Move(index)) => {
                self.focus = Focus::Moves;
                self.selection = index;
            }
            None => {}
        }
    }

    /// Drains queued actions into the controller. Returns how many ran.
    pub fn process_actions(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(action) = self.actions.try_recv() {
            if let Err(e) = self.controller.dispatch(action) {
                warn!(error = %e, %action, "Action rejected");
            }
            applied += 1;
        }

        let len = self.controller.state().history().len();
        self.selection = self.selection.min(len - 1);
        applied
    }
}
