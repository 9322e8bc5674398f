//! main.rs
//! Entry point for heft

use heft_tui::app::AppState;
use heft_tui::config::Config;
use heft_tui::core::terminal;
use heft_tui::logging::init_logging;
use heft_tui::utils::cli::{CliAction, handle_args};

use std::path::PathBuf;

fn main() -> std::io::Result<()> {
    std::panic::set_hook(Box::new(|info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let mut stdout = std::io::stdout();
        let _ = crossterm::execute!(
            stdout,
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::cursor::Show
        );

        eprintln!("\n[heft] Error occurred: {}", info);

        #[cfg(debug_assertions)]
        {
            let bt = std::backtrace::Backtrace::force_capture();
            eprintln!("\nStack Backtrace:\n{}", bt);
        }
    }));

    let root = match handle_args() {
        CliAction::Exit => return Ok(()),
        CliAction::ExitWithError => std::process::exit(1),
        CliAction::RunApp => PathBuf::from("."),
        CliAction::RunAppAtPath(path_arg) => PathBuf::from(path_arg),
    };

    let config = Config::load();

    if let Err(e) = init_logging(config.log()) {
        eprintln!("[heft] Warning: {e}. Logging disabled.");
    }

    let mut app = match AppState::new(&config, &root) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, root = %root.display(), "scan failed");
            eprintln!("[heft] Error: {e}");
            std::process::exit(1);
        }
    };

    terminal::run_terminal(&mut app)
}
