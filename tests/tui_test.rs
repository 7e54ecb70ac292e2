//! Tests for the terminal views and input handling.

use std::cell::{Cell as Counter, RefCell};

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{
    Terminal,
    backend::TestBackend,
    layout::{Position as ScreenPosition, Rect},
};
use tictactoe_history::tui::ui::{Cell, Grid, ScreenLayout};
use tictactoe_history::tui::{App, Focus, ui};
use tictactoe_history::{Board, Player, Position, Square, UiConfig};

fn area() -> Rect {
    Rect::new(0, 0, 80, 24)
}

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn left_click(column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn new_app() -> App {
    let mut app = App::new(UiConfig::default());
    app.set_viewport(area());
    app
}

fn press_digits(app: &mut App, digits: &str) {
    for c in digits.chars() {
        app.handle_event(key(KeyCode::Char(c)));
    }
}

fn render(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(area().width, area().height)).expect("terminal");
    terminal.draw(|f| ui::draw(f, app)).expect("draw");
    let buffer = terminal.backend().buffer();
    (0..area().height)
        .map(|y| {
            (0..area().width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_cell_reports_each_click_once() {
    let clicks = Counter::new(0);
    let cell = Cell::new(Square::Occupied(Player::O), || clicks.set(clicks.get() + 1));
    assert_eq!(cell.value(), Square::Occupied(Player::O));

    cell.click();
    assert_eq!(clicks.get(), 1);
    cell.click();
    assert_eq!(clicks.get(), 2);
}

#[test]
fn test_grid_relays_fixed_positions_even_on_won_board() {
    let board = [Position::TopLeft, Position::TopCenter, Position::TopRight]
        .iter()
        .fold(Board::new(), |b, &pos| b.with_mark(pos, Player::X));
    let seen = RefCell::new(Vec::new());
    let on_click = |pos: Position| seen.borrow_mut().push(pos);
    let grid = Grid::new(&board, None, &on_click);

    for pos in Position::ALL {
        assert_eq!(grid.cell(pos).value(), board.get(pos));
        grid.click(pos);
    }
    assert_eq!(*seen.borrow(), Position::ALL.to_vec());
}

#[test]
fn test_grid_highlights_only_the_cursor_cell() {
    let on_click = |_: Position| {};
    let grid = Grid::new(&Board::new(), Some(Position::Center), &on_click);
    for pos in Position::ALL {
        assert_eq!(grid.cell(pos).is_highlighted(), pos == Position::Center);
    }

    let unfocused = Grid::new(&Board::new(), None, &on_click);
    assert!(Position::ALL.iter().all(|&pos| !unfocused.cell(pos).is_highlighted()));
}

#[test]
fn test_grid_hit_testing() {
    let area = Rect::new(10, 5, Grid::WIDTH, Grid::HEIGHT);
    let areas = Grid::cell_areas(area);
    for pos in Position::ALL {
        let cell = areas[pos.to_index()];
        let inside = ScreenPosition::new(cell.x + 1, cell.y + 1);
        assert_eq!(Grid::position_at(area, inside), Some(pos));
    }
    assert_eq!(Grid::position_at(area, ScreenPosition::new(9, 5)), None);
    assert_eq!(Grid::position_at(area, ScreenPosition::new(10, 5 + Grid::HEIGHT)), None);
}

#[test]
fn test_digit_keys_play_moves() {
    let mut app = new_app();
    press_digits(&mut app, "51");

    let board = app.controller().state().current_board();
    assert_eq!(board.get(Position::Center), Square::Occupied(Player::X));
    assert_eq!(board.get(Position::TopLeft), Square::Occupied(Player::O));
    assert_eq!(app.cursor(), Position::TopLeft);
}

#[test]
fn test_key_release_is_ignored() {
    let mut app = new_app();
    app.handle_event(Event::Key(KeyEvent::new_with_kind(
        KeyCode::Char('5'),
        KeyModifiers::NONE,
        KeyEventKind::Release,
    )));
    assert_eq!(app.controller().state().history().len(), 1);
}

#[test]
fn test_arrows_and_enter_click_cursor_cell() {
    let mut app = new_app();
    assert_eq!(app.cursor(), Position::Center);
    app.handle_event(key(KeyCode::Up));
    app.handle_event(key(KeyCode::Right));
    app.handle_event(key(KeyCode::Enter));

    assert_eq!(app.cursor(), Position::TopRight);
    assert_eq!(
        app.controller().state().current_board().get(Position::TopRight),
        Square::Occupied(Player::X)
    );
}

#[test]
fn test_mouse_click_on_cell_places_mark() {
    let mut app = new_app();
    let layout = ScreenLayout::new(area());
    let target = Grid::cell_areas(layout.grid)[Position::BottomRight.to_index()];

    app.handle_event(left_click(target.x + 3, target.y + 1));

    assert_eq!(
        app.controller().state().current_board().get(Position::BottomRight),
        Square::Occupied(Player::X)
    );
    assert_eq!(app.cursor(), Position::BottomRight);
}

#[test]
fn test_mouse_click_on_move_list_jumps() {
    let mut app = new_app();
    press_digits(&mut app, "123");
    let layout = ScreenLayout::new(area());

    // Border row, then one row per entry: row 2 inside the pane is step 1.
    app.handle_event(left_click(layout.moves.x + 3, layout.moves.y + 2));

    assert_eq!(*app.controller().state().step_number(), 1);
    assert_eq!(app.focus(), Focus::Moves);
    assert_eq!(app.selection(), 1);
}

#[test]
fn test_click_outside_anything_does_nothing() {
    let mut app = new_app();
    app.handle_event(left_click(0, 0));
    assert_eq!(app.controller().state().history().len(), 1);
}

#[test]
fn test_move_list_keyboard_jump() {
    let mut app = new_app();
    press_digits(&mut app, "123");

    app.handle_event(key(KeyCode::Tab));
    assert_eq!(app.focus(), Focus::Moves);
    assert_eq!(app.selection(), 3);

    app.handle_event(key(KeyCode::Up));
    app.handle_event(key(KeyCode::Up));
    app.handle_event(key(KeyCode::Enter));

    let state = app.controller().state();
    assert_eq!(*state.step_number(), 1);
    assert!(!*state.x_is_next());
    assert_eq!(state.history().len(), 4);
}

#[test]
fn test_restart_and_quit_keys() {
    let mut app = new_app();
    press_digits(&mut app, "123");
    app.handle_event(key(KeyCode::Char('r')));
    assert_eq!(app.controller().state().history().len(), 1);
    assert_eq!(app.selection(), 0);

    assert!(!app.should_quit());
    app.handle_event(key(KeyCode::Char('q')));
    assert!(app.should_quit());
}

#[test]
fn test_render_shows_status_and_moves() {
    let app = new_app();
    let screen = render(&app);
    assert!(screen.contains("Tic-Tac-Toe"));
    assert!(screen.contains("Next player: X"));
    assert!(screen.contains("Go to game start"));
    assert!(!screen.contains("Go to move #1"));
}

#[test]
fn test_render_after_win() {
    let mut app = new_app();
    // Cells 0, 1, 3, 4, 6: X takes the left column.
    press_digits(&mut app, "12457");
    let screen = render(&app);
    assert!(screen.contains("Winner: X"));
    assert!(screen.contains("Go to move #5"));
}
