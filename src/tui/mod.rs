//! Terminal front end.
//!
//! The terminal is the rendering collaborator: it draws the view tree built
//! from the controller's snapshot and feeds mouse and keyboard input back to
//! the callbacks in that tree.

mod app;
mod dispatch;
mod input;
pub mod ui;

pub use app::{App, Focus};
pub use dispatch::Dispatcher;
pub use input::{digit_position, move_cursor, move_selection};

use std::io::{self, Stdout, Write};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use tracing::{error, info, instrument, warn};

use crate::UiConfig;

/// Raw-mode terminal that is restored when dropped.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    mouse_capture: bool,
}

impl TerminalSession {
    #[instrument]
    fn enter(mouse_capture: bool) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        let setup = execute!(stdout, EnterAlternateScreen).and_then(|()| {
            if mouse_capture {
                execute!(stdout, EnableMouseCapture)
            } else {
                Ok(())
            }
        });

        match setup.and_then(|()| Terminal::new(CrosstermBackend::new(io::stdout()))) {
            Ok(terminal) => Ok(Self {
                terminal,
                mouse_capture,
            }),
            Err(e) => {
                error!(error = %e, "Terminal setup failed");
                restore_terminal(&mut io::stdout(), mouse_capture);
                Err(e)
            }
        }
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        info!("Restoring terminal");
        restore_terminal(self.terminal.backend_mut(), self.mouse_capture);
        if let Err(e) = self.terminal.show_cursor() {
            warn!(error = %e, "Failed to show cursor");
        }
    }
}

/// Leaves raw mode, mouse capture and the alternate screen.
///
/// Safe to call after a partial setup; each step is attempted and failures
/// are logged.
fn restore_terminal<W: Write>(out: &mut W, mouse_capture: bool) {
    if let Err(e) = disable_raw_mode() {
        warn!(error = %e, "Failed to disable raw mode");
    }
    if mouse_capture && let Err(e) = execute!(out, DisableMouseCapture) {
        warn!(error = %e, "Failed to disable mouse capture");
    }
    if let Err(e) = execute!(out, LeaveAlternateScreen) {
        warn!(error = %e, "Failed to leave alternate screen");
    }
}

/// Runs the interactive game until the user quits.
#[instrument(skip(config), fields(title = %config.title()))]
pub fn run_tui(config: UiConfig) -> Result<()> {
    info!("Starting terminal UI");

    let mut session = TerminalSession::enter(*config.mouse_capture())?;
    let mut app = App::new(config);

    let res = run_app(&mut session.terminal, &mut app);
    drop(session);

    if let Err(e) = &res {
        error!(error = ?e, "Event loop failed");
    }
    res
}

/// Draw, wait for one event, apply it, repeat.
///
/// Each state change is drawn before the next event is read.
pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    while !app.should_quit() {
        let frame = terminal.draw(|f| ui::draw(f, app))?;
        app.set_viewport(frame.area);

        let event = event::read()?;
        app.handle_event(event);
    }

    info!(moves = app.controller().state().history().len() - 1, "Leaving game");
    Ok(())
}
