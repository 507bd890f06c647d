use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Whether the picker selects a single file or a whole folder.
///
/// Folder mode also makes the delete recursive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    File,
    #[default]
    Folder,
}

impl SelectionMode {
    pub fn is_recursive(self) -> bool {
        self == SelectionMode::Folder
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SelectionMode::File => "file",
            SelectionMode::Folder => "folder",
        }
    }
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

/// The single user-visible outcome message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    pub kind: StatusKind,
    pub text: String,
}

impl Status {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Info,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }
}

/// In-memory workflow state. Owned by `Workflow`, never persisted.
#[derive(Debug, Clone, Default)]
pub struct WorkflowState {
    pub selected_path: Option<PathBuf>,
    pub mode: SelectionMode,
    pub busy: bool,
    pub status: Option<Status>,
}

/// Workflow state as sent to the frontend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowSnapshot {
    pub selected_path: Option<String>,
    pub mode: SelectionMode,
    pub busy: bool,
    pub status: Option<Status>,
}

impl From<&WorkflowState> for WorkflowSnapshot {
    fn from(state: &WorkflowState) -> Self {
        Self {
            selected_path: state
                .selected_path
                .as_ref()
                .map(|p| p.display().to_string()),
            mode: state.mode,
            busy: state.busy,
            status: state.status.clone(),
        }
    }
}
