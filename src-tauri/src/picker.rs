use tauri::AppHandle;
use tauri_plugin_dialog::DialogExt;
use tokio::sync::oneshot;
use tracing::debug;

use crate::error::GatewayError;
use crate::gateway::{GatewayFuture, PathPicker, PickResult};
use crate::types::SelectionMode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFilter {
    pub name: &'static str,
    pub extensions: &'static [&'static str],
}

/// How the native dialog is configured for a selection mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerConfig {
    pub directory: bool,
    pub title: String,
    pub filters: Vec<FileFilter>,
}

impl PickerConfig {
    pub fn for_mode(mode: SelectionMode) -> Self {
        let filters = match mode {
            SelectionMode::Folder => Vec::new(),
            SelectionMode::File => vec![FileFilter {
                name: "All Files",
                extensions: &["*"],
            }],
        };
        Self {
            directory: mode == SelectionMode::Folder,
            title: format!("Select {mode} to delete"),
            filters,
        }
    }
}

/// `PathPicker` backed by the Tauri dialog plugin.
pub struct DialogPicker {
    app: AppHandle,
}

impl DialogPicker {
    pub fn new(app: AppHandle) -> Self {
        Self { app }
    }
}

impl PathPicker for DialogPicker {
    fn pick_path(&self, mode: SelectionMode) -> GatewayFuture<'_, PickResult> {
        let config = PickerConfig::for_mode(mode);
        Box::pin(async move {
            let (tx, rx) = oneshot::channel();

            let mut dialog = self.app.dialog().file().set_title(config.title);
            for filter in &config.filters {
                dialog = dialog.add_filter(filter.name, filter.extensions);
            }

            // blocking_pick_* must not run on an async worker.
            if config.directory {
                dialog.pick_folder(move |path| {
                    let _ = tx.send(path);
                });
            } else {
                dialog.pick_file(move |path| {
                    let _ = tx.send(path);
                });
            }

            let result = match rx.await {
                Ok(Some(path)) => match path.into_path() {
                    Ok(path) => PickResult::Picked(path),
                    Err(e) => PickResult::Failed(
                        GatewayError::Dialog(format!("unsupported path: {e}")).to_string(),
                    ),
                },
                Ok(None) => PickResult::Cancelled,
                Err(_) => PickResult::Failed(
                    GatewayError::Dialog("closed without a response".into()).to_string(),
                ),
            };
            debug!(%mode, ?result, "picker finished");
            result
        })
    }
}
