/// Request body and target URL for a flow run.
use serde::Serialize;

use crate::config::{Config, Tweaks};

/// JSON body of `POST /lf/{namespace}/api/v1/run/{endpoint}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunRequest<'a> {
    pub input_value: &'a str,
    pub output_type: &'a str,
    pub input_type: &'a str,
    /// Omitted when there are no tweaks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tweaks: Option<&'a Tweaks>,
}

impl<'a> RunRequest<'a> {
    /// Build the body for `message` under `config`.
    #[must_use]
    pub fn new(message: &'a str, config: &'a Config) -> Self {
        Self {
            input_value: message,
            output_type: &config.output_type,
            input_type: &config.input_type,
            tweaks: (!config.tweaks.is_empty()).then_some(&config.tweaks),
        }
    }
}

/// `{base}/lf/{namespace}/api/v1/run/{endpoint}`.
#[must_use]
pub fn run_url(config: &Config) -> String {
    format!(
        "{}/lf/{}/api/v1/run/{}",
        config.base_url, config.namespace, config.endpoint
    )
}
