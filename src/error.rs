use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InstallError {
    #[error(
        "✘ Workspace not found (missing file 'angular.json').\nRun this command inside an Angular project."
    )]
    WorkspaceMissing,

    #[error("✘ Workspace file 'angular.json' could not be parsed.\n{0}")]
    WorkspaceInvalid(#[from] serde_json::Error),

    #[error(
        "✘ No default project configured.\nSpecify a project with '--project <project-name>'.\nAvailable projects: {}",
        .available.join(", ")
    )]
    NoDefaultProject { available: Vec<String> },

    #[error("✘ Project not found.\nAvailable projects: {}", .available.join(", "))]
    ProjectNotFound {
        name: String,
        available: Vec<String>,
    },

    #[error("file already exists: {0}")]
    FileConflict(String),

    #[error("file not found: {0}")]
    FileMissing(String),

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, InstallError>;
