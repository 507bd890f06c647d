#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]

mod commands;
mod config;
mod disk_ops;
mod error;
mod events;
mod gateway;
mod picker;
mod state;
mod types;
mod window;
mod workflow;

#[cfg(test)]
mod testing;

use std::sync::Arc;

use tauri::Manager;
use tracing_subscriber::EnvFilter;

use config::AppConfig;
use disk_ops::LocalDisk;
use gateway::WindowHost;
use picker::DialogPicker;
use state::AppState;
use window::TauriWindow;
use workflow::Workflow;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,file_killer=debug")),
        )
        .init();

    let cfg = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to load config, using defaults");
        AppConfig::default()
    });
    tracing::info!(default_mode = %cfg.default_mode, "starting file killer");

    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .setup(move |app| {
            let main_window = app
                .get_webview_window("main")
                .ok_or("main window is missing")?;
            let window: Arc<dyn WindowHost> = Arc::new(TauriWindow::new(main_window));

            let workflow = Arc::new(Workflow::new(
                cfg.default_mode,
                Arc::new(DialogPicker::new(app.handle().clone())),
                Arc::new(LocalDisk),
                window.clone(),
            ));

            let handle = app.handle().clone();
            let changes = workflow.subscribe();
            tauri::async_runtime::spawn(async move {
                events::forward_workflow_changes(handle, changes).await;
            });

            app.manage(AppState { workflow, window });
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::get_workflow_state,
            commands::set_selection_mode,
            commands::select_path,
            commands::delete_selected,
            commands::report_content_height,
            commands::minimize_window,
            commands::close_window,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
