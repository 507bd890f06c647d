//! Capabilities the workflow calls but does not implement.
//!
//! The application wires these to Tauri and the local disk; tests swap in
//! recording mocks.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;

use crate::error::GatewayError;
use crate::types::SelectionMode;

pub type GatewayFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Result of showing the native picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickResult {
    Picked(PathBuf),
    Cancelled,
    Failed(String),
}

/// Native file/folder picker.
pub trait PathPicker: Send + Sync {
    fn pick_path(&self, mode: SelectionMode) -> GatewayFuture<'_, PickResult>;
}

/// Filesystem primitives used by delete.
pub trait Filesystem: Send + Sync {
    /// `Ok(false)` for a missing path. Any other failure is an error.
    fn exists<'a>(&'a self, path: &'a Path) -> GatewayFuture<'a, Result<bool, GatewayError>>;

    fn remove<'a>(
        &'a self,
        path: &'a Path,
        recursive: bool,
    ) -> GatewayFuture<'a, Result<(), GatewayError>>;
}

/// Host window surface, in logical units.
pub trait WindowHost: Send + Sync {
    fn resize(&self, width: f64, height: f64) -> Result<(), GatewayError>;

    fn minimize(&self) -> Result<(), GatewayError>;

    fn close(&self) -> Result<(), GatewayError>;
}
