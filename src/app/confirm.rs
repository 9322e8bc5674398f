//! Confirm-before-delete state machine.
//!
//! Two states, [ConfirmState::Idle] and [ConfirmState::Confirming]. A delete
//! request moves Idle to Confirming; an answer always moves back to Idle.
//! Requests made while already confirming are ignored.
//!
//! Nothing here touches the filesystem or the terminal. [crate::app::AppState]
//! performs the deletion once [ConfirmState::answer] hands back an accepted target.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// The row waiting for a yes/no answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDelete {
    index: usize,
    path: PathBuf,
}

impl PendingDelete {
    pub fn new(index: usize, path: PathBuf) -> Self {
        PendingDelete { index, path }
    }

    /// Position of the row in the ranked list.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_name(&self) -> Cow<'_, str> {
        self.path
            .file_name()
            .unwrap_or(self.path.as_os_str())
            .to_string_lossy()
    }

    /// Text shown by the viewer while waiting for an answer.
    pub fn prompt(&self, verb: &str) -> String {
        format!("Are you sure you want to {} {}? (y/n)", verb, self.file_name())
    }

    pub fn into_path(self) -> PathBuf {
        self.path
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfirmState {
    #[default]
    Idle,
    Confirming(PendingDelete),
}

/// Result of answering the dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// No dialog was open.
    Nothing,
    Accepted(PendingDelete),
    Declined(PendingDelete),
}

impl ConfirmState {
    #[inline]
    pub fn is_confirming(&self) -> bool {
        matches!(self, ConfirmState::Confirming(_))
    }

    pub fn pending(&self) -> Option<&PendingDelete> {
        match self {
            ConfirmState::Confirming(pending) => Some(pending),
            ConfirmState::Idle => None,
        }
    }

    /// Idle -> Confirming when a target is selected.
    ///
    /// Returns the pending target when the transition happened. With no
    /// selection, or while already confirming, the state is left as is.
    pub fn request(&mut self, target: Option<PendingDelete>) -> Option<&PendingDelete> {
        if self.is_confirming() {
            return None;
        }
        *self = ConfirmState::Confirming(target?);
        self.pending()
    }

    /// Confirming -> Idle, handing back the target with the answer.
    pub fn answer(&mut self, yes: bool) -> Answer {
        match std::mem::take(self) {
            ConfirmState::Idle => Answer::Nothing,
            ConfirmState::Confirming(pending) if yes => Answer::Accepted(pending),
            ConfirmState::Confirming(pending) => Answer::Declined(pending),
        }
    }

    /// Drops any open dialog without answering it.
    pub fn cancel(&mut self) {
        *self = ConfirmState::Idle;
    }
}
