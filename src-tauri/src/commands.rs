//! Tauri commands invoked by the frontend.

use tauri::State;

use crate::state::AppState;
use crate::types::{SelectionMode, WorkflowSnapshot};

#[tauri::command]
pub async fn get_workflow_state(state: State<'_, AppState>) -> Result<WorkflowSnapshot, String> {
    Ok(state.workflow.snapshot())
}

#[tauri::command]
pub async fn set_selection_mode(
    state: State<'_, AppState>,
    mode: SelectionMode,
) -> Result<WorkflowSnapshot, String> {
    state.workflow.set_mode(mode);
    Ok(state.workflow.snapshot())
}

#[tauri::command]
pub async fn select_path(state: State<'_, AppState>) -> Result<WorkflowSnapshot, String> {
    state.workflow.select_path().await;
    Ok(state.workflow.snapshot())
}

#[tauri::command]
pub async fn delete_selected(state: State<'_, AppState>) -> Result<WorkflowSnapshot, String> {
    state.workflow.delete_selected().await;
    Ok(state.workflow.snapshot())
}

#[tauri::command]
pub async fn report_content_height(state: State<'_, AppState>, height: f64) -> Result<(), String> {
    state.workflow.sizer().report_content_height(height);
    Ok(())
}

#[tauri::command]
pub async fn minimize_window(state: State<'_, AppState>) -> Result<(), String> {
    state.window.minimize().map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn close_window(state: State<'_, AppState>) -> Result<(), String> {
    state.window.close().map_err(|e| e.to_string())
}
