//! Selection/delete workflow.
//!
//! Owns the selected path, selection mode, busy flag and status message, and
//! sequences the picker and filesystem gateways for the two user actions:
//! *select* and *delete*. Every state change is published as a
//! [`WorkflowSnapshot`] for the frontend.
//!
//! State sits behind a synchronous mutex that is never held across an
//! `.await`; the busy check and the busy set happen under one lock, so two
//! concurrent delete requests can never both reach the filesystem.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::gateway::{Filesystem, PathPicker, PickResult, WindowHost};
use crate::types::{SelectionMode, Status, WorkflowSnapshot, WorkflowState};
use crate::window::WindowSizer;

pub const SELECT_FIRST: &str = "select a file or folder first";
pub const DELETING: &str = "deleting…";
pub const PATH_NOT_FOUND: &str = "path does not exist";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectOutcome {
    Picked(PathBuf),
    Cancelled,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted(PathBuf),
    /// No path selected; nothing was touched.
    NothingSelected,
    /// Another delete is in flight; this call did nothing.
    Busy,
    NotFound,
    Failed(String),
}

pub struct Workflow {
    state: Mutex<WorkflowState>,
    picker: Arc<dyn PathPicker>,
    disk: Arc<dyn Filesystem>,
    sizer: WindowSizer,
    changes: watch::Sender<WorkflowSnapshot>,
}

impl Workflow {
    pub fn new(
        mode: SelectionMode,
        picker: Arc<dyn PathPicker>,
        disk: Arc<dyn Filesystem>,
        window: Arc<dyn WindowHost>,
    ) -> Self {
        let state = WorkflowState {
            mode,
            ..WorkflowState::default()
        };
        let (changes, _) = watch::channel(WorkflowSnapshot::from(&state));
        Self {
            state: Mutex::new(state),
            picker,
            disk,
            sizer: WindowSizer::new(window),
            changes,
        }
    }

    pub fn snapshot(&self) -> WorkflowSnapshot {
        WorkflowSnapshot::from(&*self.state.lock())
    }

    /// Receives a snapshot after every state change.
    pub fn subscribe(&self) -> watch::Receiver<WorkflowSnapshot> {
        self.changes.subscribe()
    }

    pub fn sizer(&self) -> &WindowSizer {
        &self.sizer
    }

    /// Changes the mode used by the next select or delete.
    ///
    /// Keeps the current selection and status. A delete already in flight
    /// keeps the recursion flag it started with.
    pub fn set_mode(&self, mode: SelectionMode) {
        self.update(|state| state.mode = mode);
        debug!(%mode, "selection mode changed");
    }

    /// Shows the picker for the current mode and records the result.
    pub async fn select_path(&self) -> SelectOutcome {
        let mode = self.state.lock().mode;

        let outcome = match self.picker.pick_path(mode).await {
            PickResult::Picked(path) => {
                info!(path = %path.display(), %mode, "path selected");
                self.update(|state| {
                    state.selected_path = Some(path.clone());
                    state.status = None;
                });
                SelectOutcome::Picked(path)
            }
            PickResult::Cancelled => {
                debug!("selection cancelled");
                SelectOutcome::Cancelled
            }
            PickResult::Failed(detail) => {
                warn!(error = %detail, "path selection failed");
                self.update(|state| {
                    state.status = Some(Status::error(format!("error selecting path: {detail}")));
                });
                SelectOutcome::Failed(detail)
            }
        };

        self.sizer.recompute();
        outcome
    }

    /// Permanently deletes the selected path.
    ///
    /// Folders are removed recursively. On success the selection is cleared;
    /// on any failure it is kept so the user can retry. `busy` is reset on
    /// every exit path.
    pub async fn delete_selected(&self) -> DeleteOutcome {
        let started = self.update(|state| {
            if state.busy {
                return Err(DeleteOutcome::Busy);
            }
            let Some(path) = state.selected_path.clone() else {
                state.status = Some(Status::info(SELECT_FIRST));
                return Err(DeleteOutcome::NothingSelected);
            };
            state.busy = true;
            state.status = Some(Status::info(DELETING));
            Ok((path, state.mode.is_recursive()))
        });

        let (path, recursive) = match started {
            Ok(target) => target,
            Err(DeleteOutcome::Busy) => {
                debug!("delete already in progress, ignoring request");
                return DeleteOutcome::Busy;
            }
            Err(outcome) => {
                self.sizer.recompute();
                return outcome;
            }
        };

        info!(path = %path.display(), recursive, "deleting");
        self.sizer.recompute();

        let guard = BusyGuard::new(self);
        let outcome = self.remove_checked(&path, recursive).await;
        guard.finish(|state| match &outcome {
            DeleteOutcome::Deleted(deleted) => {
                state.status = Some(Status::success(format!(
                    "successfully deleted: {}",
                    deleted.display()
                )));
                // The user may have picked something else while we were busy.
                if state.selected_path.as_deref() == Some(deleted.as_path()) {
                    state.selected_path = None;
                }
            }
            DeleteOutcome::NotFound => {
                state.status = Some(Status::error(PATH_NOT_FOUND));
            }
            DeleteOutcome::Failed(detail) => {
                state.status = Some(Status::error(format!("delete error: {detail}")));
            }
            DeleteOutcome::NothingSelected | DeleteOutcome::Busy => {}
        });

        match &outcome {
            DeleteOutcome::Deleted(_) => info!(path = %path.display(), "deleted"),
            DeleteOutcome::NotFound => warn!(path = %path.display(), "path does not exist"),
            DeleteOutcome::Failed(detail) => {
                warn!(path = %path.display(), error = %detail, "delete failed")
            }
            DeleteOutcome::NothingSelected | DeleteOutcome::Busy => {}
        }

        self.sizer.recompute();
        outcome
    }

    async fn remove_checked(&self, path: &Path, recursive: bool) -> DeleteOutcome {
        match self.disk.exists(path).await {
            Ok(true) => {}
            Ok(false) => return DeleteOutcome::NotFound,
            Err(e) => return DeleteOutcome::Failed(e.to_string()),
        }

        match self.disk.remove(path, recursive).await {
            Ok(()) => DeleteOutcome::Deleted(path.to_path_buf()),
            Err(e) => DeleteOutcome::Failed(e.to_string()),
        }
    }

    fn update<R>(&self, f: impl FnOnce(&mut WorkflowState) -> R) -> R {
        let mut state = self.state.lock();
        let result = f(&mut state);
        self.changes.send_replace(WorkflowSnapshot::from(&*state));
        result
    }
}

/// Clears `busy` when a delete ends, including when its future is dropped
/// or unwinds before an outcome was recorded.
struct BusyGuard<'a> {
    workflow: &'a Workflow,
    armed: bool,
}

impl<'a> BusyGuard<'a> {
    fn new(workflow: &'a Workflow) -> Self {
        Self {
            workflow,
            armed: true,
        }
    }

    /// Applies the outcome and clears `busy` in one state change.
    fn finish(mut self, apply: impl FnOnce(&mut WorkflowState)) {
        self.armed = false;
        self.workflow.update(|state| {
            apply(state);
            state.busy = false;
        });
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        warn!("delete interrupted before completion");
        self.workflow.update(|state| {
            state.busy = false;
            state.status = Some(Status::error("delete error: operation interrupted"));
        });
        self.workflow.sizer.recompute();
    }
}
