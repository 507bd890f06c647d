use std::fs;
use std::io;
use std::path::Path;

use tracing::info;

use crate::error::GatewayError;
use crate::gateway::{Filesystem, GatewayFuture};

/// `Filesystem` backed by the local disk.
pub struct LocalDisk;

impl Filesystem for LocalDisk {
    fn exists<'a>(&'a self, path: &'a Path) -> GatewayFuture<'a, Result<bool, GatewayError>> {
        Box::pin(async move {
            // Does not follow links: a dangling symlink counts as existing and
            // gets removed instead of reported as missing.
            match tokio::fs::symlink_metadata(path).await {
                Ok(_) => Ok(true),
                Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
                Err(e) => Err(GatewayError::from(e)),
            }
        })
    }

    fn remove<'a>(
        &'a self,
        path: &'a Path,
        recursive: bool,
    ) -> GatewayFuture<'a, Result<(), GatewayError>> {
        let path = path.to_path_buf();
        Box::pin(async move {
            tokio::task::spawn_blocking(move || remove_path(&path, recursive))
                .await
                .unwrap_or_else(|e| Err(GatewayError::Task(e.to_string())))
        })
    }
}

/// Removes a single file, or a directory tree when `recursive` is set.
pub fn remove_path(path: &Path, recursive: bool) -> Result<(), GatewayError> {
    if recursive {
        fs::remove_dir_all(path)?;
    } else {
        fs::remove_file(path)?;
    }
    info!(path = %path.display(), recursive, "removed path");
    Ok(())
}
