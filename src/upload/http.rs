/// Multipart upload to `{host}/api/v1/upload/{flow_id}`.
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::blocking::multipart::Form;
use reqwest::header::AUTHORIZATION;
use serde::Deserialize;
use tracing::{debug, info};

use super::errors::UploadError;
use super::{FileUploader, UploadRequest, apply_file_path};
use crate::config::Tweaks;

/// Body returned by the upload endpoint.
#[derive(Debug, Deserialize)]
struct UploadResponse {
    #[serde(default)]
    file_path: Option<String>,
}

/// Uploads over HTTP with the flow's bearer token.
#[derive(Debug, Default, Clone, Copy)]
pub struct HttpUploader;

impl HttpUploader {
    /// Send the file, return the server-side path it was stored under.
    fn upload(request: &UploadRequest<'_>) -> Result<String, UploadError> {
        let url = format!("{}/api/v1/upload/{}", request.host, request.flow_id);
        let form = Form::new()
            .file("file", request.file_path)
            .map_err(|source| UploadError::Io {
                path: request.file_path.to_path_buf(),
                source,
            })?;

        info!(file = %request.file_path.display(), %url, "uploading file");
        let client = Client::builder().timeout(None::<Duration>).build()?;
        let response = client
            .post(&url)
            .header(AUTHORIZATION, format!("Bearer {}", request.token))
            .multipart(form)
            .send()?;

        let status = response.status();
        if !matches!(status.as_u16(), 200 | 201) {
            return Err(UploadError::Http {
                status: status.as_u16(),
                body: response.text()?,
            });
        }

        let body: UploadResponse = response.json()?;
        debug!(file_path = ?body.file_path, "upload accepted");
        body.file_path
            .filter(|p| !p.is_empty())
            .ok_or(UploadError::MissingFilePath)
    }
}

impl FileUploader for HttpUploader {
    fn upload_file(&self, request: &UploadRequest<'_>) -> Result<Tweaks, UploadError> {
        let file_path = Self::upload(request)?;
        Ok(apply_file_path(request.tweaks, request.components, &file_path))
    }
}
