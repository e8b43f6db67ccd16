use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("duplicate example name in registry: {0}")]
    DuplicateExample(String),

    #[error("example name must not be empty")]
    EmptyName,

    #[error("entrypoint for example {0} must not be empty")]
    EmptyEntrypoint(String),
}

/// Failures while collecting example files. Any one of these aborts the
/// whole build; there is no partial manifest.
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("cannot access examples root {}", path.display())]
    RootUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("examples root {} is not a directory", .0.display())]
    RootNotADirectory(PathBuf),

    #[error("failed to list example {example} at {}", path.display())]
    ReadDir {
        example: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read {}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not a regular file", .0.display())]
    NotAFile(PathBuf),

    #[error("{} does not contain valid UTF-8 text", path.display())]
    InvalidUtf8 {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("file name {0:?} is not valid UTF-8")]
    InvalidFileName(PathBuf),

    #[error("read task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
