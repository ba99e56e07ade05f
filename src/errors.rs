/// Top-level errors: everything that aborts a run before the flow is called.
use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;
use crate::upload::UploadError;

/// Errors that stop the process with a non-zero exit code.
#[derive(Debug, Error)]
pub enum AppError {
    /// Missing or invalid token, flow id, namespace, tweaks, or components.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// `--upload_file` does not name an existing regular file.
    #[error("File '{}' does not exist", path.display())]
    FileNotFound {
        /// The path as given.
        path: PathBuf,
    },

    /// Upload support missing, or the upload itself failed.
    #[error(transparent)]
    Upload(#[from] UploadError),
}

/// Exit code mapping for `AppError` variants.
impl AppError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => 2,
            Self::FileNotFound { .. } => 3,
            Self::Upload(UploadError::Unavailable) => 4,
            Self::Upload(_) => 1,
        }
    }
}
