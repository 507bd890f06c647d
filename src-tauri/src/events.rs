//! Forwards workflow state changes to the frontend.

use tauri::{AppHandle, Emitter};
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::types::WorkflowSnapshot;

pub const WORKFLOW_CHANGED: &str = "workflow:changed";

pub async fn forward_workflow_changes(handle: AppHandle, mut rx: watch::Receiver<WorkflowSnapshot>) {
    debug!("workflow event loop started");

    while rx.changed().await.is_ok() {
        let snapshot = rx.borrow_and_update().clone();
        if let Err(e) = handle.emit(WORKFLOW_CHANGED, &snapshot) {
            warn!(error = %e, "failed to emit workflow change");
        }
    }

    debug!("workflow change stream closed");
}
