/// CLI argument definitions via clap derive.
use std::path::PathBuf;

use clap::Parser;

use crate::config::Overrides;

const EXAMPLES: &str = "\
Examples:
  langflow-runner \"Hello!\" --endpoint my_chat --application_token ABC123
  langflow-runner \"Analyze\" --upload_file ./data.csv --components ParseData-r4Fhk --application_token ABC123

Environment (also read from .env, then .env.local):
  LANGFLOW_ID, FLOW_ID, APPLICATION_TOKEN, LANGFLOW_BASE_URL, RUST_LOG";

/// langflow-runner — run a Langflow flow from the CLI.
#[derive(Debug, Parser)]
#[command(
    name = "langflow-runner",
    about = "Run a Langflow flow from the CLI with optional tweaks and file upload",
    version,
    after_help = EXAMPLES
)]
pub struct Cli {
    /// The message to send to the flow.
    pub message: String,

    /// Flow ID or custom endpoint name. Defaults to $FLOW_ID.
    #[arg(long, value_name = "FLOW_ID")]
    pub endpoint: Option<String>,

    /// Tweaks as a JSON object string, keyed by component ID.
    /// Replaces the built-in default tweaks.
    #[arg(long, value_name = "JSON")]
    pub tweaks: Option<String>,

    /// Your Langflow application token. Defaults to $APPLICATION_TOKEN.
    #[arg(long = "application_token", value_name = "TOKEN")]
    pub application_token: Option<String>,

    /// Account flow namespace. Defaults to $LANGFLOW_ID.
    #[arg(long = "langflow_id", value_name = "ID")]
    pub langflow_id: Option<String>,

    /// Output type.
    #[arg(long = "output_type", value_name = "TYPE", default_value = "chat")]
    pub output_type: String,

    /// Input type.
    #[arg(long = "input_type", value_name = "TYPE", default_value = "chat")]
    pub input_type: String,

    /// Path to a file to upload and attach to --components.
    #[arg(long = "upload_file", value_name = "PATH")]
    pub upload_file: Option<PathBuf>,

    /// Comma-separated component IDs that receive the uploaded file.
    #[arg(long, value_name = "IDS")]
    pub components: Option<String>,

    /// Also save the response (indented JSON) to this file.
    #[arg(long = "save_output", value_name = "PATH")]
    pub save_output: Option<PathBuf>,

    /// Log the request URL, headers, and payload to stderr.
    /// Headers include the bearer token in plain text.
    #[arg(long)]
    pub verbose: bool,

    /// Print single-line JSON instead of indented JSON.
    #[arg(long)]
    pub raw: bool,
}

impl Cli {
    /// Explicit values to merge over the environment.
    #[must_use]
    pub fn overrides(&self) -> Overrides<'_> {
        Overrides {
            namespace: self.langflow_id.as_deref(),
            endpoint: self.endpoint.as_deref(),
            application_token: self.application_token.as_deref(),
            tweaks: self.tweaks.as_deref(),
            output_type: &self.output_type,
            input_type: &self.input_type,
        }
    }
}
