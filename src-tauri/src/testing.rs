//! Recording gateway mocks shared by the unit tests.

use std::collections::VecDeque;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::Notify;

use crate::error::GatewayError;
use crate::gateway::{Filesystem, GatewayFuture, PathPicker, PickResult, WindowHost};
use crate::types::SelectionMode;

/// Returns queued results in order, `Cancelled` once empty.
#[derive(Default)]
pub struct MockPicker {
    results: Mutex<VecDeque<PickResult>>,
    pub calls: Mutex<Vec<SelectionMode>>,
}

impl MockPicker {
    pub fn new(results: impl IntoIterator<Item = PickResult>) -> Self {
        Self {
            results: Mutex::new(results.into_iter().collect()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn picking(path: &str) -> Self {
        Self::new([PickResult::Picked(PathBuf::from(path))])
    }
}

impl PathPicker for MockPicker {
    fn pick_path(&self, mode: SelectionMode) -> GatewayFuture<'_, PickResult> {
        self.calls.lock().push(mode);
        let result = self
            .results
            .lock()
            .pop_front()
            .unwrap_or(PickResult::Cancelled);
        Box::pin(async move { result })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiskCall {
    Exists(PathBuf),
    Remove(PathBuf, bool),
}

/// Filesystem double. `exists` answers `existing` (or fails when `None`);
/// `remove` fails with `remove_error` when set.
pub struct MockDisk {
    existing: Option<bool>,
    remove_error: Option<String>,
    gate: Option<Arc<Notify>>,
    pub entered: Arc<Notify>,
    pub calls: Mutex<Vec<DiskCall>>,
}

impl MockDisk {
    pub fn existing() -> Self {
        Self {
            existing: Some(true),
            remove_error: None,
            gate: None,
            entered: Arc::new(Notify::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn missing() -> Self {
        Self {
            existing: Some(false),
            ..Self::existing()
        }
    }

    pub fn broken_exists() -> Self {
        Self {
            existing: None,
            ..Self::existing()
        }
    }

    pub fn failing_remove(detail: &str) -> Self {
        Self {
            remove_error: Some(detail.to_string()),
            ..Self::existing()
        }
    }

    /// Makes `remove` wait for `release` before returning.
    pub fn gated(mut self) -> Self {
        self.gate = Some(Arc::new(Notify::new()));
        self
    }

    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    pub fn calls(&self) -> Vec<DiskCall> {
        self.calls.lock().clone()
    }
}

impl Filesystem for MockDisk {
    fn exists<'a>(&'a self, path: &'a Path) -> GatewayFuture<'a, Result<bool, GatewayError>> {
        self.calls.lock().push(DiskCall::Exists(path.to_path_buf()));
        Box::pin(async move {
            self.existing
                .ok_or_else(|| GatewayError::Io(io::Error::other("stat failed")))
        })
    }

    fn remove<'a>(
        &'a self,
        path: &'a Path,
        recursive: bool,
    ) -> GatewayFuture<'a, Result<(), GatewayError>> {
        self.calls
            .lock()
            .push(DiskCall::Remove(path.to_path_buf(), recursive));
        Box::pin(async move {
            self.entered.notify_one();
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            match &self.remove_error {
                Some(detail) => Err(GatewayError::Io(io::Error::other(detail.clone()))),
                None => Ok(()),
            }
        })
    }
}

#[derive(Default)]
pub struct MockWindow {
    pub fail: bool,
    pub resizes: Mutex<Vec<(f64, f64)>>,
    pub minimized: Mutex<u32>,
    pub closed: Mutex<u32>,
}

impl MockWindow {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn resizes(&self) -> Vec<(f64, f64)> {
        self.resizes.lock().clone()
    }

    fn outcome(&self) -> Result<(), GatewayError> {
        if self.fail {
            Err(GatewayError::Window("window is gone".into()))
        } else {
            Ok(())
        }
    }
}

impl WindowHost for MockWindow {
    fn resize(&self, width: f64, height: f64) -> Result<(), GatewayError> {
        self.resizes.lock().push((width, height));
        self.outcome()
    }

    fn minimize(&self) -> Result<(), GatewayError> {
        *self.minimized.lock() += 1;
        self.outcome()
    }

    fn close(&self) -> Result<(), GatewayError> {
        *self.closed.lock() += 1;
        self.outcome()
    }
}
