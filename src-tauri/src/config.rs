//! Application configuration.
//!
//! Read once at startup from `<config dir>/file-killer/config.json`.
//! Every field is optional; a missing or unreadable file means defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::types::SelectionMode;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// Selection mode the app starts in.
    pub default_mode: SelectionMode,
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&config_path()?)
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        match serde_json::from_str::<AppConfig>(&content) {
            Ok(config) => Ok(config),
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "failed to parse config, using defaults"
                );
                Ok(Self::default())
            }
        }
    }
}

pub fn config_path() -> anyhow::Result<PathBuf> {
    Ok(config_base_dir()?.join("file-killer").join("config.json"))
}

fn config_base_dir() -> anyhow::Result<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        let appdata = std::env::var("APPDATA")?;
        Ok(PathBuf::from(appdata))
    }

    #[cfg(target_os = "macos")]
    {
        let home = std::env::var("HOME")?;
        Ok(PathBuf::from(home).join("Library").join("Application Support"))
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            if !xdg.is_empty() {
                return Ok(PathBuf::from(xdg));
            }
        }
        let home = std::env::var("HOME")?;
        Ok(PathBuf::from(home).join(".config"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&tmp.path().join("config.json")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.default_mode, SelectionMode::Folder);
    }

    #[test]
    fn reads_default_mode() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.json");
        std::fs::write(&path, r#"{ "defaultMode": "file" }"#).unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.default_mode, SelectionMode::File);
    }

    #[test]
    fn empty_object_gives_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.json");
        std::fs::write(&path, "{}").unwrap();

        assert_eq!(AppConfig::load_from(&path).unwrap(), AppConfig::default());
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.json");
        std::fs::write(&path, r#"{ "defaultMode": "everything" }"#).unwrap();

        assert_eq!(AppConfig::load_from(&path).unwrap(), AppConfig::default());
    }

    #[test]
    fn unreadable_path_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        // A directory exists but cannot be read as a file.
        assert!(AppConfig::load_from(tmp.path()).is_err());
    }

    #[test]
    fn config_path_ends_with_app_dir() {
        if let Ok(path) = config_path() {
            assert!(path.ends_with(Path::new("file-killer").join("config.json")));
        }
    }
}
