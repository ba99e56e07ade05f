/// One invocation: resolve config, attach the upload, run the flow, print.
use tracing::info;

use crate::cli::{Cli, OutputCtx, write_response};
use crate::config::{self, Config, ConfigError};
use crate::errors::AppError;
use crate::flow::{into_response, run_flow};
use crate::upload::{FileUploader, UploadRequest, parse_components};

/// Resolve and validate everything needed for the flow call.
///
/// Nothing here touches the flow endpoint; an error means no request was sent.
///
/// # Errors
///
/// `AppError` on configuration, missing file, or upload failures.
pub fn prepare<F>(cli: &Cli, env: F, uploader: &dyn FileUploader) -> Result<Config, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    let config = config::resolve(&cli.overrides(), env)?;
    attach_upload(cli, config, uploader)
}

/// Run the whole invocation. Once the flow is called the run succeeds, even if
/// the response is an error object.
///
/// # Errors
///
/// See [`prepare`].
pub fn run<F>(cli: &Cli, env: F, uploader: &dyn FileUploader) -> Result<(), AppError>
where
    F: Fn(&str) -> Option<String>,
{
    let config = prepare(cli, env, uploader)?;
    let response = into_response(run_flow(&config, &cli.message, cli.verbose));
    write_response(
        &response,
        &OutputCtx::new(cli.raw, cli.save_output.as_deref()),
    );
    Ok(())
}

fn attach_upload(
    cli: &Cli,
    mut config: Config,
    uploader: &dyn FileUploader,
) -> Result<Config, AppError> {
    let Some(file_path) = cli.upload_file.as_deref() else {
        return Ok(config);
    };

    uploader.ensure_available()?;

    if !file_path.is_file() {
        return Err(AppError::FileNotFound {
            path: file_path.to_path_buf(),
        });
    }

    let components = cli
        .components
        .as_deref()
        .map(parse_components)
        .unwrap_or_default();
    if components.is_empty() {
        return Err(ConfigError::MissingComponents.into());
    }

    let request = UploadRequest {
        file_path,
        host: &config.base_url,
        flow_id: &config.endpoint,
        token: &config.application_token,
        components: &components,
        tweaks: &config.tweaks,
    };
    let tweaks = uploader.upload_file(&request)?;
    info!(components = ?components, "attached uploaded file");

    config.tweaks = tweaks;
    Ok(config)
}
