/// File upload capability: push a local file to the flow host and point
/// component tweaks at the stored copy.
pub mod errors;
#[cfg(feature = "upload")]
pub mod http;

use std::path::Path;

use serde_json::{Map, Value};

use crate::config::Tweaks;
pub use errors::UploadError;
#[cfg(feature = "upload")]
pub use http::HttpUploader;

/// Tweak key that receives the uploaded file's server-side path.
pub const PATH_KEY: &str = "path";

/// Everything the uploader needs for one file.
#[derive(Debug, Clone)]
pub struct UploadRequest<'a> {
    pub file_path: &'a Path,
    /// API host, e.g. `https://api.langflow.astra.datastax.com`.
    pub host: &'a str,
    pub flow_id: &'a str,
    pub token: &'a str,
    /// Components whose tweaks get the file path.
    pub components: &'a [String],
    /// Current tweaks; the result is built from these.
    pub tweaks: &'a Tweaks,
}

/// Uploads a file and returns tweaks annotated with its location.
pub trait FileUploader {
    /// Fail early if this uploader can never succeed.
    ///
    /// # Errors
    ///
    /// `UploadError::Unavailable` when upload support is compiled out.
    fn ensure_available(&self) -> Result<(), UploadError> {
        Ok(())
    }

    /// Upload `request.file_path` and return the updated tweaks.
    ///
    /// # Errors
    ///
    /// Any `UploadError`.
    fn upload_file(&self, request: &UploadRequest<'_>) -> Result<Tweaks, UploadError>;
}

/// Stand-in used when the `upload` feature is off.
#[cfg_attr(feature = "upload", allow(dead_code))]
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableUploader;

impl FileUploader for UnavailableUploader {
    fn ensure_available(&self) -> Result<(), UploadError> {
        Err(UploadError::Unavailable)
    }

    fn upload_file(&self, _request: &UploadRequest<'_>) -> Result<Tweaks, UploadError> {
        Err(UploadError::Unavailable)
    }
}

/// The uploader this binary was built with.
#[must_use]
pub fn default_uploader() -> Box<dyn FileUploader> {
    #[cfg(feature = "upload")]
    {
        Box::new(HttpUploader)
    }
    #[cfg(not(feature = "upload"))]
    {
        Box::new(UnavailableUploader)
    }
}

/// Split `--components` on commas, trimming and dropping empty entries.
#[must_use]
pub fn parse_components(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Set `path` on each named component's tweaks.
///
/// Existing override keys are kept. Missing components are added; a
/// non-object entry is replaced.
#[must_use]
pub fn apply_file_path(tweaks: &Tweaks, components: &[String], file_path: &str) -> Tweaks {
    let mut updated = tweaks.clone();
    for component in components {
        let entry = updated
            .entry(component.clone())
            .or_insert_with(|| Value::Object(Map::new()));
        if !entry.is_object() {
            *entry = Value::Object(Map::new());
        }
        if let Value::Object(overrides) = entry {
            overrides.insert(PATH_KEY.to_owned(), Value::String(file_path.to_owned()));
        }
    }
    updated
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tweaks(value: Value) -> Tweaks {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_parse_components() {
        assert_eq!(
            parse_components(" ParseData-r4Fhk, File-1 ,,"),
            vec!["ParseData-r4Fhk".to_owned(), "File-1".to_owned()]
        );
        assert!(parse_components(" , ").is_empty());
    }

    #[test]
    fn test_apply_keeps_existing_overrides() {
        let before = tweaks(json!({
            "ParseData-r4Fhk": {"sep": "\n"},
            "ChatInput-D9hjW": {}
        }));
        let after = apply_file_path(&before, &["ParseData-r4Fhk".to_owned()], "flow/data.csv");
        assert_eq!(
            Value::Object(after),
            json!({
                "ParseData-r4Fhk": {"sep": "\n", "path": "flow/data.csv"},
                "ChatInput-D9hjW": {}
            })
        );
    }

    #[test]
    fn test_apply_adds_missing_and_replaces_non_objects() {
        let before = tweaks(json!({"File-1": "junk"}));
        let components = vec!["File-1".to_owned(), "File-2".to_owned()];
        let after = apply_file_path(&before, &components, "f/x.pdf");
        assert_eq!(
            Value::Object(after),
            json!({"File-1": {"path": "f/x.pdf"}, "File-2": {"path": "f/x.pdf"}})
        );
    }

    #[test]
    fn test_unavailable_uploader() {
        assert!(matches!(
            UnavailableUploader.ensure_available(),
            Err(UploadError::Unavailable)
        ));
    }
}
