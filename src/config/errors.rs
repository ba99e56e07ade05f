/// Errors from configuration resolution.
use thiserror::Error;

/// Errors raised while merging environment values with CLI overrides.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No application token in the environment or on the command line.
    #[error("Please set your actual APPLICATION_TOKEN via --application_token or .env file")]
    MissingToken,

    /// The token still holds the placeholder copied from the example env file.
    #[error(
        "APPLICATION_TOKEN is still the placeholder value. \
         Please set your actual token via --application_token or .env file"
    )]
    PlaceholderToken,

    /// No flow id to put in the request path.
    #[error("Missing flow ID. Please provide --endpoint or set FLOW_ID in your .env file")]
    MissingFlowId,

    /// No Langflow namespace to put in the request path.
    #[error("Missing Langflow ID. Please provide --langflow_id or set LANGFLOW_ID in your .env file")]
    MissingNamespace,

    /// `--tweaks` was not valid JSON.
    #[error("Invalid tweaks JSON string: {0}")]
    InvalidTweaks(#[from] serde_json::Error),

    /// `--tweaks` parsed as an array or scalar instead of an object keyed by component id.
    #[error("Invalid tweaks JSON string: expected an object keyed by component ID")]
    TweaksNotObject,

    /// `--upload_file` given without any target component.
    #[error("You must provide --components to upload a file")]
    MissingComponents,
}
