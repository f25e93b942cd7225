//! Terminal setup and teardown.

use std::io::{self, IsTerminal, Stdout};

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::{Result, TrendviewError};

use super::app::App;

/// Terminal type the viewer draws on.
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

fn io_error(context: &str) -> impl FnOnce(io::Error) -> TrendviewError + '_ {
    move |e| TrendviewError::Io(format!("{context}: {e}"))
}

/// Switches the terminal into raw mode on the alternate screen.
///
/// Also installs a panic hook that puts the terminal back before the panic
/// message is printed.
///
/// # Errors
///
/// Returns [`TrendviewError::Io`] if stdout is not a TTY or the terminal
/// cannot be configured.
pub fn setup_terminal() -> Result<Tui> {
    if !io::stdout().is_terminal() {
        return Err(TrendviewError::Io(
            "the viewer needs an interactive terminal (TTY)".to_string(),
        ));
    }

    enable_raw_mode().map_err(io_error("failed to enable raw mode"))?;

    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(io_error("failed to enter alternate screen")(e));
    }

    let terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
        Ok(terminal) => terminal,
        Err(e) => {
            let _ = leave_screen();
            return Err(io_error("failed to create terminal")(e));
        }
    };

    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = leave_screen();
        default_hook(info);
    }));

    Ok(terminal)
}

fn leave_screen() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)
}

/// Restores the terminal to its original state.
///
/// # Errors
///
/// Returns [`TrendviewError::Io`] if the terminal cannot be restored.
pub fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode().map_err(io_error("failed to disable raw mode"))?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .map_err(io_error("failed to leave alternate screen"))?;
    terminal.show_cursor().map_err(io_error("failed to show cursor"))?;
    Ok(())
}

/// Draws one frame of `app`.
///
/// # Errors
///
/// Returns [`TrendviewError::Io`] if the frame cannot be written.
pub fn draw(terminal: &mut Tui, app: &App) -> Result<()> {
    terminal
        .draw(|frame| super::ui::render(frame, app))
        .map_err(io_error("failed to draw frame"))?;
    Ok(())
}
