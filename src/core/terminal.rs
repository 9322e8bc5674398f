//! Terminal rendering and event source for heft.
//!
//! Handles setup/teardown of raw mode and the alternate screen, and implements
//! [Viewer] on top of a crossterm backed ratatui terminal.

use crate::app::{self, AppState, ViewModel, Viewer, ViewerEvent};
use crate::config::Config;
use crate::ui;

use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io::{self, Stdout};

/// The interactive table view on stdout.
pub struct TerminalViewer<'a> {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    config: &'a Config,
}

impl<'a> TerminalViewer<'a> {
    /// Wraps stdout. The caller is responsible for raw mode and the alternate screen.
    pub fn new(config: &'a Config) -> io::Result<Self> {
        let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        Ok(TerminalViewer { terminal, config })
    }
}

impl Viewer for TerminalViewer<'_> {
    fn render(&mut self, view: &ViewModel<'_>) -> io::Result<()> {
        let config = self.config;
        self.terminal
            .draw(|f| ui::render(f, view, config, None))?;
        Ok(())
    }

    fn show_confirmation(&mut self, view: &ViewModel<'_>, prompt: &str) -> io::Result<()> {
        let config = self.config;
        self.terminal
            .draw(|f| ui::render(f, view, config, Some(prompt)))?;
        Ok(())
    }

    fn next_event(&mut self) -> io::Result<ViewerEvent> {
        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    return Ok(ViewerEvent::Key(key));
                }
                Event::Resize(_, _) => return Ok(ViewerEvent::Redraw),
                _ => {}
            }
        }
    }
}

/// Initializes the terminal in raw mode and alternate screen and runs the app until quit.
///
/// Every teardown step runs even when the loop or an earlier step fails; the
/// loop's error wins over teardown errors.
///
/// Returns an std::io::Error if terminal setup or teardown fails.
pub fn run_terminal(app: &mut AppState) -> io::Result<()> {
    let config = app.config();
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Hide)?;

    let result = TerminalViewer::new(config).and_then(|mut viewer| app::run(app, &mut viewer));

    let raw = disable_raw_mode();
    let screen = execute!(io::stdout(), LeaveAlternateScreen, Show);
    first_error(result, [raw, screen])
}

/// `result` if it failed, otherwise the first failed teardown step.
fn first_error(result: io::Result<()>, teardown: [io::Result<()>; 2]) -> io::Result<()> {
    teardown.into_iter().fold(result, |acc, step| acc.and(step))
}
