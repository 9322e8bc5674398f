//! Application State and main controller module for heft.
//!
//! This module defines the [AppState] struct, which holds:
//! - The configuration and keymap
//! - The ranked list of the largest files and its display rows
//! - The current selection
//! - The confirm-before-delete state machine
//! - The status line message
//!
//! It owns the only two mutation paths of the ranked list: a confirmed delete,
//! which removes one row in place, and a rescan, which rebuilds the list from disk.

use crate::app::confirm::{Answer, ConfirmState, PendingDelete};
use crate::app::keymap::{Action, ConfirmAction, FileAction, Keymap, NavAction, SystemAction, key_label};
use crate::app::viewer::{HelpEntry, ScanSummary, StatusMessage, ViewModel};
use crate::config::Config;
use crate::core::delete::{Deleter, deleter_for};
use crate::core::{DisplayRow, FileEntry, display_rows, human_readable, rank, scan_dir};
use crate::error::{DeleteError, ScanError};

use crossterm::event::KeyEvent;
use std::path::{Path, PathBuf};

/// Enumeration for each individual keypress result processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeypressResult {
    Continue,
    Consumed,
    Quit,
}

/// What happened when the confirm dialog was answered.
#[derive(Debug)]
pub enum ConfirmOutcome {
    /// No dialog was open.
    NotConfirming,
    Declined,
    Deleted(PathBuf),
    /// The list is unchanged.
    Failed(DeleteError),
}

/// Main struct which holds the central application state of heft
pub struct AppState<'a> {
    config: &'a Config,
    keymap: Keymap,

    root: PathBuf,
    entries: Vec<FileEntry>,
    rows: Vec<DisplayRow>,
    selected: Option<usize>,
    summary: ScanSummary,

    confirm: ConfirmState,
    deleter: Box<dyn Deleter>,

    status: Option<StatusMessage>,
    help: Vec<HelpEntry>,
    confirm_help: Vec<HelpEntry>,
}

impl<'a> AppState<'a> {
    /// Scans `root` and ranks the result. The deleter follows `general.move_to_trash`.
    pub fn new(config: &'a Config, root: &Path) -> Result<Self, ScanError> {
        let deleter = deleter_for(config.general().move_to_trash());
        Self::with_deleter(config, root, deleter)
    }

    pub fn with_deleter(
        config: &'a Config,
        root: &Path,
        deleter: Box<dyn Deleter>,
    ) -> Result<Self, ScanError> {
        let scanned = scan_dir(root)?;
        Ok(Self::from_entries(config, root.to_path_buf(), scanned, deleter))
    }

    /// Builds the state from an already scanned set of entries.
    pub fn from_entries(
        config: &'a Config,
        root: PathBuf,
        scanned: Vec<FileEntry>,
        deleter: Box<dyn Deleter>,
    ) -> Self {
        let mut app = Self {
            config,
            keymap: Keymap::from_config(config),
            root,
            entries: Vec::new(),
            rows: Vec::new(),
            selected: None,
            summary: ScanSummary::default(),
            confirm: ConfirmState::default(),
            deleter,
            status: None,
            help: build_help(config),
            confirm_help: build_confirm_help(config),
        };
        app.replace_entries(scanned);
        app
    }

    // Getters/ accessors

    #[inline]
    pub fn config(&self) -> &'a Config {
        self.config
    }

    #[inline]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The ranked list, largest first.
    #[inline]
    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    #[inline]
    pub fn rows(&self) -> &[DisplayRow] {
        &self.rows
    }

    #[inline]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    #[inline]
    pub fn summary(&self) -> ScanSummary {
        self.summary
    }

    #[inline]
    pub fn confirm_state(&self) -> &ConfirmState {
        &self.confirm
    }

    #[inline]
    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    /// Snapshot handed to the viewer for one frame.
    pub fn view(&self) -> ViewModel<'_> {
        let help = if self.confirm.is_confirming() {
            &self.confirm_help
        } else {
            &self.help
        };
        ViewModel {
            root: &self.root,
            rows: &self.rows,
            selected: self.selected,
            summary: self.summary,
            status: self.status.as_ref(),
            help,
        }
    }

    /// The yes/no prompt while the confirm dialog is open.
    pub fn prompt(&self) -> Option<String> {
        self.confirm
            .pending()
            .map(|pending| pending.prompt(self.deleter.verb()))
    }

    // Selection

    pub fn move_up(&mut self) -> bool {
        match self.selected {
            Some(idx) if idx > 0 => {
                self.selected = Some(idx - 1);
                true
            }
            _ => false,
        }
    }

    pub fn move_down(&mut self) -> bool {
        match self.selected {
            Some(idx) if idx + 1 < self.entries.len() => {
                self.selected = Some(idx + 1);
                true
            }
            _ => false,
        }
    }

    pub fn move_to_top(&mut self) -> bool {
        let target = (!self.entries.is_empty()).then_some(0);
        let changed = target != self.selected;
        self.selected = target;
        changed
    }

    pub fn move_to_bottom(&mut self) -> bool {
        let target = self.entries.len().checked_sub(1);
        let changed = target != self.selected;
        self.selected = target;
        changed
    }

    // Delete flow

    /// Opens the confirm dialog for the selected row.
    ///
    /// Returns `None` with no selection, or when a dialog is already open.
    pub fn request_delete(&mut self) -> Option<PendingDelete> {
        let target = self
            .selected
            .and_then(|idx| self.entries.get(idx).map(|e| PendingDelete::new(idx, e.resolve())));

        let pending = self.confirm.request(target).cloned();
        if let Some(p) = &pending {
            tracing::debug!(path = %p.path().display(), index = p.index(), "delete requested");
        }
        pending
    }

    /// Answers the confirm dialog.
    ///
    /// On `yes` the file is removed through the deleter; only on success is the
    /// row dropped from the list. Either way the dialog closes.
    pub fn confirm_delete(&mut self, yes: bool) -> ConfirmOutcome {
        match self.confirm.answer(yes) {
            Answer::Nothing => ConfirmOutcome::NotConfirming,
            Answer::Declined(pending) => {
                tracing::debug!(path = %pending.path().display(), "delete declined");
                self.status = None;
                ConfirmOutcome::Declined
            }
            Answer::Accepted(pending) => match self.deleter.delete(pending.path()) {
                Ok(()) => {
                    tracing::info!(path = %pending.path().display(), "deleted");
                    self.status = Some(StatusMessage::info(format!(
                        "Deleted {}",
                        pending.file_name()
                    )));
                    self.remove_at(pending.index());
                    ConfirmOutcome::Deleted(pending.into_path())
                }
                Err(e) => {
                    tracing::warn!(error = %e, "delete failed");
                    self.status = Some(StatusMessage::error(e.to_string()));
                    ConfirmOutcome::Failed(e)
                }
            },
        }
    }

    /// Walks the root again and rebuilds the ranked list.
    ///
    /// On failure the current list is kept.
    pub fn rescan(&mut self) -> Result<(), ScanError> {
        self.confirm.cancel();
        let scanned = scan_dir(&self.root)?;
        self.replace_entries(scanned);
        tracing::info!(root = %self.root.display(), files = self.summary.files, "rescanned");
        Ok(())
    }

    // Key handling

    /// Dispatches a key press. While the dialog is open only yes/no keys act;
    /// everything else is swallowed.
    pub fn handle_keypress(&mut self, key: KeyEvent) -> KeypressResult {
        if self.confirm.is_confirming() {
            match self.keymap.lookup_confirm(key) {
                Some(ConfirmAction::Yes) => {
                    self.confirm_delete(true);
                }
                Some(ConfirmAction::No) => {
                    self.confirm_delete(false);
                }
                None => {}
            }
            return KeypressResult::Consumed;
        }

        match self.keymap.lookup(key) {
            Some(Action::Nav(action)) => self.handle_nav_action(action),
            Some(Action::File(action)) => self.handle_file_action(action),
            Some(Action::System(SystemAction::Quit)) => KeypressResult::Quit,
            None => KeypressResult::Continue,
        }
    }

    fn handle_nav_action(&mut self, action: NavAction) -> KeypressResult {
        match action {
            NavAction::GoUp => self.move_up(),
            NavAction::GoDown => self.move_down(),
            NavAction::GoToTop => self.move_to_top(),
            NavAction::GoToBottom => self.move_to_bottom(),
        };
        KeypressResult::Continue
    }

    fn handle_file_action(&mut self, action: FileAction) -> KeypressResult {
        match action {
            FileAction::Delete => {
                self.request_delete();
            }
            FileAction::Rescan => {
                self.status = Some(match self.rescan() {
                    Ok(()) => StatusMessage::info(format!(
                        "Rescanned {} files ({})",
                        self.summary.files,
                        human_readable(self.summary.bytes)
                    )),
                    Err(e) => {
                        tracing::warn!(error = %e, "rescan failed");
                        StatusMessage::error(format!("Rescan failed: {}", e))
                    }
                });
            }
        }
        KeypressResult::Consumed
    }

    // Helpers

    fn replace_entries(&mut self, scanned: Vec<FileEntry>) {
        self.summary = ScanSummary {
            files: scanned.len(),
            bytes: scanned.iter().map(FileEntry::size).sum(),
        };
        self.entries = rank(scanned, self.config.general().limit());
        tracing::debug!(ranked = self.entries.len(), "ranked");
        self.rows = display_rows(&self.entries);
        self.selected = (!self.entries.is_empty()).then_some(0);
    }

    /// Drops one row and keeps the selection on the same index when possible.
    fn remove_at(&mut self, index: usize) {
        if index >= self.entries.len() {
            return;
        }
        let removed = self.entries.remove(index);
        self.summary.files = self.summary.files.saturating_sub(1);
        self.summary.bytes = self.summary.bytes.saturating_sub(removed.size());
        self.rows = display_rows(&self.entries);
        self.selected = match self.selected {
            _ if self.entries.is_empty() => None,
            Some(idx) => Some(idx.min(self.entries.len() - 1)),
            None => Some(0),
        };
    }
}

fn help_keys(bound: &[String]) -> String {
    bound
        .iter()
        .take(2)
        .map(|k| key_label(k))
        .collect::<Vec<_>>()
        .join("/")
}

fn build_help(config: &Config) -> Vec<HelpEntry> {
    let keys = config.keys();
    let entries: [(&[String], &'static str); 5] = [
        (keys.go_up(), "up"),
        (keys.go_down(), "down"),
        (keys.delete(), "delete"),
        (keys.rescan(), "rescan"),
        (keys.quit(), "quit"),
    ];
    entries
        .into_iter()
        .filter(|(bound, _)| !bound.is_empty())
        .map(|(bound, description)| HelpEntry {
            keys: help_keys(bound),
            description,
        })
        .collect()
}

fn build_confirm_help(config: &Config) -> Vec<HelpEntry> {
    let keys = config.keys();
    vec![
        HelpEntry {
            keys: help_keys(keys.confirm_yes()),
            description: "yes",
        },
        HelpEntry {
            keys: help_keys(keys.confirm_no()),
            description: "no",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records paths instead of touching the filesystem; fails on demand.
    struct FakeDeleter {
        deleted: Rc<RefCell<Vec<PathBuf>>>,
        fail: bool,
    }

    impl Deleter for FakeDeleter {
        fn delete(&self, path: &Path) -> Result<(), DeleteError> {
            if self.fail {
                return Err(DeleteError::Io {
                    path: path.to_path_buf(),
                    source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
                });
            }
            self.deleted.borrow_mut().push(path.to_path_buf());
            Ok(())
        }

        fn verb(&self) -> &'static str {
            "delete"
        }
    }

    fn sample() -> Vec<FileEntry> {
        [
            ("root/a.bin", 500),
            ("root/b.bin", 2048),
            ("root/c.bin", 10),
            ("root/sub/d.bin", 1_048_576),
            ("root/e.bin", 300),
        ]
        .into_iter()
        .map(|(p, s)| FileEntry::new(PathBuf::from(p), s))
        .collect()
    }

    fn app(config: &Config, fail: bool) -> (AppState<'_>, Rc<RefCell<Vec<PathBuf>>>) {
        let deleted = Rc::new(RefCell::new(Vec::new()));
        let deleter = FakeDeleter {
            deleted: Rc::clone(&deleted),
            fail,
        };
        let app = AppState::from_entries(config, PathBuf::from("root"), sample(), Box::new(deleter));
        (app, deleted)
    }

    fn key(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    fn sizes(app: &AppState) -> Vec<u64> {
        app.entries().iter().map(FileEntry::size).collect()
    }

    #[test]
    fn initial_ranking_and_rows() {
        let config = Config::default();
        let (app, _) = app(&config, false);

        assert_eq!(sizes(&app), vec![1_048_576, 2048, 500, 300, 10]);
        let formatted: Vec<&str> = app.rows().iter().map(DisplayRow::size).collect();
        assert_eq!(formatted, vec!["1.0 MB", "2.0 KB", "500 B", "300 B", "10 B"]);
        assert_eq!(app.selected(), Some(0));
        assert_eq!(app.summary(), ScanSummary { files: 5, bytes: 1_051_434 });
    }

    #[test]
    fn confirmed_delete_removes_exactly_one_row() {
        let config = Config::default();
        let (mut app, deleted) = app(&config, false);

        let pending = app.request_delete().map(|p| p.path().to_path_buf());
        assert_eq!(pending, Some(PathBuf::from("root/sub/d.bin")));
        assert_eq!(
            app.prompt().as_deref(),
            Some("Are you sure you want to delete d.bin? (y/n)")
        );

        let outcome = app.confirm_delete(true);
        assert!(matches!(outcome, ConfirmOutcome::Deleted(ref p) if p == Path::new("root/sub/d.bin")));
        assert_eq!(*deleted.borrow(), vec![PathBuf::from("root/sub/d.bin")]);
        assert_eq!(sizes(&app), vec![2048, 500, 300, 10]);
        assert_eq!(app.rows()[0].index(), 1);
        assert_eq!(app.rows()[0].filename(), "b.bin");
        assert_eq!(app.confirm_state(), &ConfirmState::Idle);
        assert_eq!(app.summary().files, 4);
    }

    #[test]
    fn declined_delete_changes_nothing() {
        let config = Config::default();
        let (mut app, deleted) = app(&config, false);
        let before = app.rows().to_vec();

        assert_eq!(app.handle_keypress(key('d')), KeypressResult::Consumed);
        assert!(app.confirm_state().is_confirming());
        assert_eq!(app.handle_keypress(key('n')), KeypressResult::Consumed);

        assert!(deleted.borrow().is_empty());
        assert_eq!(app.rows(), before.as_slice());
        assert_eq!(app.confirm_state(), &ConfirmState::Idle);

        // A new request works after declining.
        assert!(app.request_delete().is_some());
    }

    #[test]
    fn failed_delete_keeps_row_and_reports() {
        let config = Config::default();
        let (mut app, _) = app(&config, true);
        let before = app.rows().to_vec();

        app.request_delete();
        let outcome = app.confirm_delete(true);

        assert!(matches!(outcome, ConfirmOutcome::Failed(DeleteError::Io { .. })));
        assert_eq!(app.rows(), before.as_slice());
        assert_eq!(app.confirm_state(), &ConfirmState::Idle);
        assert!(app.status().is_some_and(StatusMessage::is_error));
    }

    #[test]
    fn keys_other_than_yes_no_are_swallowed_while_confirming() {
        let config = Config::default();
        let (mut app, deleted) = app(&config, false);

        app.handle_keypress(key('d'));
        assert_eq!(app.handle_keypress(key('j')), KeypressResult::Consumed);
        assert_eq!(app.handle_keypress(key('q')), KeypressResult::Consumed);
        assert_eq!(app.selected(), Some(0));
        assert!(app.confirm_state().is_confirming());

        app.handle_keypress(key('y'));
        assert_eq!(deleted.borrow().len(), 1);
    }

    #[test]
    fn selection_clamps_after_deleting_last_row() {
        let config = Config::default();
        let (mut app, _) = app(&config, false);

        app.move_to_bottom();
        assert_eq!(app.selected(), Some(4));
        app.request_delete();
        app.confirm_delete(true);

        assert_eq!(sizes(&app), vec![1_048_576, 2048, 500, 300]);
        assert_eq!(app.selected(), Some(3));
    }

    #[test]
    fn deleting_everything_leaves_no_selection() {
        let config = Config::default();
        let (mut app, deleted) = app(&config, false);

        for _ in 0..5 {
            app.request_delete();
            app.confirm_delete(true);
        }
        assert!(app.entries().is_empty());
        assert_eq!(app.selected(), None);
        assert!(app.request_delete().is_none());
        assert!(matches!(app.confirm_delete(true), ConfirmOutcome::NotConfirming));
        assert_eq!(deleted.borrow().len(), 5);
    }

    #[test]
    fn navigation_stays_in_bounds() {
        let config = Config::default();
        let (mut app, _) = app(&config, false);

        assert!(!app.move_up());
        assert!(app.move_down());
        assert_eq!(app.selected(), Some(1));
        assert!(app.move_to_bottom());
        assert!(!app.move_down());
        assert!(app.move_to_top());
        assert_eq!(app.selected(), Some(0));
    }

    #[test]
    fn quit_key() {
        let config = Config::default();
        let (mut app, _) = app(&config, false);
        assert_eq!(app.handle_keypress(key('q')), KeypressResult::Quit);
        assert_eq!(app.handle_keypress(key('x')), KeypressResult::Continue);
    }

    #[test]
    fn limit_truncates_ranked_list() -> Result<(), Box<dyn std::error::Error>> {
        let raw: crate::config::RawConfig = toml::from_str("[general]\nlimit = 2")?;
        let config = Config::from(raw);
        let (app, _) = app(&config, false);

        assert_eq!(sizes(&app), vec![1_048_576, 2048]);
        assert_eq!(app.summary().files, 5);
        Ok(())
    }

    #[test]
    fn help_line_follows_mode() {
        let config = Config::default();
        let (mut app, _) = app(&config, false);

        let normal: Vec<&str> = app.view().help.iter().map(|h| h.description).collect();
        assert_eq!(normal, vec!["up", "down", "delete", "rescan", "quit"]);

        app.request_delete();
        let confirming: Vec<&str> = app.view().help.iter().map(|h| h.description).collect();
        assert_eq!(confirming, vec!["yes", "no"]);
    }
}
