//! Application state and the viewer-driven event loop of heft.
//!
//! - [state]: [AppState], the ranked list, selection and delete flow
//! - [confirm]: the yes/no state machine guarding deletes
//! - [keymap]: key to action mapping built from the config
//! - [viewer]: the [Viewer] seam between the state and whatever draws it

pub mod confirm;
pub mod keymap;
pub mod state;
pub mod viewer;

pub use confirm::{ConfirmState, PendingDelete};
pub use keymap::{Action, ConfirmAction, FileAction, Keymap, NavAction, SystemAction};
pub use state::{AppState, ConfirmOutcome, KeypressResult};
pub use viewer::{HelpEntry, ScanSummary, StatusMessage, ViewModel, Viewer, ViewerEvent};

use std::io;

/// Drives `app` with `viewer` until a quit key is pressed or the viewer closes.
///
/// Each turn draws either the plain table or the table under the confirm
/// prompt, then feeds the next event back into the app.
pub fn run<V: Viewer + ?Sized>(app: &mut AppState, viewer: &mut V) -> io::Result<()> {
    loop {
        match app.prompt() {
            Some(prompt) => viewer.show_confirmation(&app.view(), &prompt)?,
            None => viewer.render(&app.view())?,
        }

        match viewer.next_event()? {
            ViewerEvent::Key(key) => {
                if app.handle_keypress(key) == KeypressResult::Quit {
                    break;
                }
            }
            ViewerEvent::Redraw => {}
            ViewerEvent::Closed => break,
        }
    }
    tracing::debug!("event loop finished");
    Ok(())
}
