//! Window-size hint and the Tauri window gateway.

use std::sync::Arc;

use parking_lot::Mutex;
use tauri::{LogicalSize, WebviewWindow};
use tracing::{debug, warn};

use crate::error::GatewayError;
use crate::gateway::WindowHost;

pub const WINDOW_WIDTH: f64 = 446.0;
pub const MIN_HEIGHT: f64 = 430.0;
pub const MAX_HEIGHT: f64 = 800.0;

/// Clamps a measured content height into the allowed window range.
///
/// Missing measurements (zero, negative, NaN) fall back to `MIN_HEIGHT`.
pub fn clamp_height(content_height: f64) -> f64 {
    if !content_height.is_finite() || content_height <= 0.0 {
        return MIN_HEIGHT;
    }
    content_height.clamp(MIN_HEIGHT, MAX_HEIGHT)
}

/// Keeps the window sized to the rendered content.
///
/// The frontend reports its natural height; every recompute resizes the
/// window to the clamped value. Resizing is best effort.
pub struct WindowSizer {
    host: Arc<dyn WindowHost>,
    content_height: Mutex<f64>,
}

impl WindowSizer {
    pub fn new(host: Arc<dyn WindowHost>) -> Self {
        Self {
            host,
            content_height: Mutex::new(MIN_HEIGHT),
        }
    }

    pub fn report_content_height(&self, height: f64) {
        *self.content_height.lock() = height;
        self.recompute();
    }

    pub fn recompute(&self) {
        let target = clamp_height(*self.content_height.lock());
        match self.host.resize(WINDOW_WIDTH, target) {
            Ok(()) => debug!(height = target, "resized window"),
            Err(e) => warn!(height = target, error = %e, "failed to resize window"),
        }
    }
}

/// `WindowHost` backed by a Tauri webview window.
pub struct TauriWindow {
    window: WebviewWindow,
}

impl TauriWindow {
    pub fn new(window: WebviewWindow) -> Self {
        Self { window }
    }
}

impl WindowHost for TauriWindow {
    fn resize(&self, width: f64, height: f64) -> Result<(), GatewayError> {
        self.window.set_size(LogicalSize::new(width, height))?;
        Ok(())
    }

    fn minimize(&self) -> Result<(), GatewayError> {
        self.window.minimize()?;
        Ok(())
    }

    fn close(&self) -> Result<(), GatewayError> {
        self.window.close()?;
        Ok(())
    }
}
