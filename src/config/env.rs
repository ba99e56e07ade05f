/// `.env` / `.env.local` loading.
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

/// Base environment file.
pub const ENV_FILE: &str = ".env";
/// Local overrides, applied on top of the process environment and `.env`.
pub const ENV_LOCAL_FILE: &str = ".env.local";

/// What happened to one env file. Files are loaded before logging is set up
/// (so `RUST_LOG` can come from them); call [`EnvFileStatus::log`] afterwards.
#[derive(Debug)]
pub struct EnvFileStatus {
    pub path: PathBuf,
    pub result: Result<(), dotenvy::Error>,
}

impl EnvFileStatus {
    /// Whether the file existed and was applied.
    #[must_use]
    pub fn loaded(&self) -> bool {
        self.result.is_ok()
    }

    /// Report the outcome. Missing files are silent.
    pub fn log(&self) {
        match &self.result {
            Ok(()) => debug!(path = %self.path.display(), "loaded env file"),
            Err(e) if e.not_found() => {}
            Err(e) => warn!(path = %self.path.display(), error = %e, "failed to load env file"),
        }
    }
}

/// Load `dir/.env`, then `dir/.env.local` with override.
///
/// Variables already set in the process are kept when loading `.env`.
#[must_use]
pub fn load_env_files(dir: &Path) -> [EnvFileStatus; 2] {
    let base = dir.join(ENV_FILE);
    let base_result = dotenvy::from_path(&base);

    let local = dir.join(ENV_LOCAL_FILE);
    let local_result = dotenvy::from_path_override(&local);

    [
        EnvFileStatus {
            path: base,
            result: base_result,
        },
        EnvFileStatus {
            path: local,
            result: local_result,
        },
    ]
}
