/// Errors from the file upload capability.
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while uploading a file for a flow.
#[derive(Debug, Error)]
pub enum UploadError {
    /// The binary was built without the `upload` feature.
    #[error("File upload is not available. Rebuild with: cargo install langflow-runner --features upload")]
    Unavailable,

    /// The file could not be read.
    #[error("Could not read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No response from the upload endpoint.
    #[error("Upload request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The upload endpoint rejected the file.
    #[error("Error uploading file: HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The upload endpoint answered without telling us where the file went.
    #[error("Error uploading file: response has no file_path")]
    MissingFilePath,
}
