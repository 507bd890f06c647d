use std::sync::Arc;

use crate::gateway::WindowHost;
use crate::workflow::Workflow;

/// Shared application state managed by Tauri.
pub struct AppState {
    pub workflow: Arc<Workflow>,
    pub window: Arc<dyn WindowHost>,
}
