/// Merge environment defaults with CLI overrides into a validated `Config`.
use serde_json::{Map, Value};
use tracing::debug;

use super::errors::ConfigError;

/// Tweaks: component id → object of override key/values. Key order is preserved.
pub type Tweaks = Map<String, Value>;

/// Hosted Langflow API.
pub const BASE_API_URL: &str = "https://api.langflow.astra.datastax.com";

/// Placeholder shipped in the example env file. A token containing it is rejected.
pub const TOKEN_PLACEHOLDER: &str = "<YOUR_APPLICATION_TOKEN>";

/// Components of the default flow, each with no overrides.
pub const DEFAULT_COMPONENTS: [&str; 6] = [
    "AstraDBToolComponent-Dg6cx",
    "ParseData-r4Fhk",
    "GroqModel-ZMgtx",
    "ChatInput-D9hjW",
    "ChatOutput-ee0wn",
    "CombineText-SgCav",
];

/// Account flow namespace.
pub const ENV_NAMESPACE: &str = "LANGFLOW_ID";
/// Default flow id, overridden by `--endpoint`.
pub const ENV_FLOW_ID: &str = "FLOW_ID";
/// Bearer token, overridden by `--application_token`.
pub const ENV_TOKEN: &str = "APPLICATION_TOKEN";
/// API host override for self-hosted instances.
pub const ENV_BASE_URL: &str = "LANGFLOW_BASE_URL";

/// Fully resolved run configuration. Built once, then only read.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// API host, no trailing slash.
    pub base_url: String,
    /// Account flow namespace (`LANGFLOW_ID`).
    pub namespace: String,
    /// Flow id or custom endpoint name.
    pub endpoint: String,
    /// Bearer token.
    pub application_token: String,
    pub output_type: String,
    pub input_type: String,
    pub tweaks: Tweaks,
}

/// Values given explicitly on the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides<'a> {
    pub namespace: Option<&'a str>,
    pub endpoint: Option<&'a str>,
    pub application_token: Option<&'a str>,
    /// Raw JSON string from `--tweaks`.
    pub tweaks: Option<&'a str>,
    pub output_type: &'a str,
    pub input_type: &'a str,
}

/// The default tweaks mapping: every default component with an empty override object.
#[must_use]
pub fn default_tweaks() -> Tweaks {
    DEFAULT_COMPONENTS
        .iter()
        .map(|id| ((*id).to_owned(), Value::Object(Map::new())))
        .collect()
}

/// Resolve the run configuration.
///
/// `env` looks up an environment variable; empty values count as unset.
/// Explicit overrides win over the environment.
///
/// # Errors
///
/// Returns `ConfigError` when the token is missing or a placeholder, when no
/// flow id or namespace is resolvable, or when `--tweaks` is not a JSON object.
pub fn resolve<F>(overrides: &Overrides<'_>, env: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let lookup = |flag: Option<&str>, var: &str| -> Option<String> {
        flag.filter(|v| !v.is_empty())
            .map(str::to_owned)
            .or_else(|| env(var).filter(|v| !v.is_empty()))
    };

    let application_token =
        lookup(overrides.application_token, ENV_TOKEN).ok_or(ConfigError::MissingToken)?;
    if application_token.contains(TOKEN_PLACEHOLDER) {
        return Err(ConfigError::PlaceholderToken);
    }

    let endpoint = lookup(overrides.endpoint, ENV_FLOW_ID).ok_or(ConfigError::MissingFlowId)?;

    let tweaks = match overrides.tweaks {
        Some(raw) => parse_tweaks(raw)?,
        None => default_tweaks(),
    };

    let namespace =
        lookup(overrides.namespace, ENV_NAMESPACE).ok_or(ConfigError::MissingNamespace)?;

    let base_url = env(ENV_BASE_URL)
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| BASE_API_URL.to_owned())
        .trim_end_matches('/')
        .to_owned();

    debug!(%base_url, %namespace, %endpoint, components = tweaks.len(), "resolved configuration");

    Ok(Config {
        base_url,
        namespace,
        endpoint,
        application_token,
        output_type: overrides.output_type.to_owned(),
        input_type: overrides.input_type.to_owned(),
        tweaks,
    })
}

/// Parse a `--tweaks` argument: a JSON object, or `null` for no tweaks.
///
/// # Errors
///
/// `InvalidTweaks` on malformed JSON, `TweaksNotObject` on arrays and scalars.
pub fn parse_tweaks(raw: &str) -> Result<Tweaks, ConfigError> {
    match serde_json::from_str::<Value>(raw)? {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Tweaks::new()),
        _ => Err(ConfigError::TweaksNotObject),
    }
}

#[cfg(test)]
impl Config {
    /// A valid config pointed at `base_url`, for tests that talk to a mock server.
    pub fn for_tests(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            namespace: "ns-123".to_owned(),
            endpoint: "flow-abc".to_owned(),
            application_token: "AstraCS:test-token".to_owned(),
            output_type: "chat".to_owned(),
            input_type: "chat".to_owned(),
            tweaks: default_tweaks(),
        }
    }
}
