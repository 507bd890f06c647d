//! Errors reported by the host gateways.

/// Failure of a picker, filesystem or window call.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("dialog error: {0}")]
    Dialog(String),

    #[error("window error: {0}")]
    Window(String),

    #[error("background task failed: {0}")]
    Task(String),
}

impl From<tauri::Error> for GatewayError {
    fn from(e: tauri::Error) -> Self {
        GatewayError::Window(e.to_string())
    }
}
