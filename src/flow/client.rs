/// Blocking HTTP client for the flow run endpoint.
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;
use tracing::{debug, info};

use super::errors::RunError;
use super::request::{RunRequest, run_url};
use crate::config::Config;

/// Sends one run request per call. No retries, no client-side timeout.
pub struct FlowClient {
    http: Client,
    verbose: bool,
}

impl FlowClient {
    /// Build the client. With `verbose`, every request is logged before it is sent,
    /// bearer token included.
    ///
    /// # Errors
    ///
    /// `RunError::Transport` if the TLS backend cannot be initialised.
    pub fn new(verbose: bool) -> Result<Self, RunError> {
        let http = Client::builder()
            .timeout(None::<Duration>)
            .build()
            .map_err(|e| RunError::Transport(e.to_string()))?;
        Ok(Self { http, verbose })
    }

    /// POST `message` to the flow described by `config`.
    ///
    /// # Errors
    ///
    /// `Http` for 4xx/5xx statuses, `Transport` when no response arrived,
    /// `Decode` when a successful response was not JSON.
    pub fn run(&self, config: &Config, message: &str) -> Result<Value, RunError> {
        let url = run_url(config);
        let body = RunRequest::new(message, config);
        let bearer = format!("Bearer {}", config.application_token);

        if self.verbose {
            debug!(">>> Sending Request To: {url}");
            debug!(">>> Headers: {{\"Authorization\": \"{bearer}\", \"Content-Type\": \"application/json\"}}");
            match serde_json::to_string_pretty(&body) {
                Ok(payload) => debug!(">>> Payload: {payload}"),
                Err(e) => debug!(">>> Payload not printable: {e}"),
            }
        }

        info!(endpoint = %config.endpoint, "running flow");
        let response = self
            .http
            .post(&url)
            .header(AUTHORIZATION, &bearer)
            .header(CONTENT_TYPE, "application/json")
            .json(&body)
            .send()
            .map_err(|e| RunError::Transport(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .map_err(|e| RunError::Transport(e.to_string()))?;
        debug!(status = status.as_u16(), bytes = text.len(), "flow responded");

        if status.is_client_error() || status.is_server_error() {
            return Err(RunError::Http {
                status: status.as_u16(),
                body: text,
            });
        }

        serde_json::from_str(&text).map_err(|e| RunError::Decode(e.to_string()))
    }
}

/// Build a client and run the flow once.
///
/// # Errors
///
/// See [`FlowClient::new`] and [`FlowClient::run`].
pub fn run_flow(config: &Config, message: &str, verbose: bool) -> Result<Value, RunError> {
    FlowClient::new(verbose)?.run(config, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const RUN_PATH: &str = "/lf/ns-123/api/v1/run/flow-abc";

    async fn run_blocking(config: Config, message: &'static str) -> Result<Value, RunError> {
        tokio::task::spawn_blocking(move || run_flow(&config, message, true))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_success_returns_body_verbatim() {
        let server = MockServer::start().await;
        let config = Config::for_tests(&server.uri());

        Mock::given(method("POST"))
            .and(path(RUN_PATH))
            .and(header("authorization", "Bearer AstraCS:test-token"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({
                "input_value": "Hello!",
                "output_type": "chat",
                "input_type": "chat",
                "tweaks": {
                    "AstraDBToolComponent-Dg6cx": {},
                    "ParseData-r4Fhk": {},
                    "GroqModel-ZMgtx": {},
                    "ChatInput-D9hjW": {},
                    "ChatOutput-ee0wn": {},
                    "CombineText-SgCav": {}
                }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": "ok"})))
            .expect(1)
            .mount(&server)
            .await;

        let result = run_blocking(config, "Hello!").await.unwrap();
        assert_eq!(result, json!({"result": "ok"}));
    }

    #[tokio::test]
    async fn test_server_error_becomes_http_error() {
        let server = MockServer::start().await;
        let config = Config::for_tests(&server.uri());

        Mock::given(method("POST"))
            .and(path(RUN_PATH))
            .respond_with(ResponseTemplate::new(500).set_body_string("server error"))
            .expect(1)
            .mount(&server)
            .await;

        let err = run_blocking(config, "Hello!").await.unwrap_err();
        assert_eq!(err.to_json(), json!({"error": "HTTP 500: server error"}));
    }

    #[tokio::test]
    async fn test_not_found_is_http_error() {
        let server = MockServer::start().await;
        let config = Config::for_tests(&server.uri());

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(404).set_body_string("Flow not found"))
            .mount(&server)
            .await;

        let err = run_blocking(config, "Hello!").await.unwrap_err();
        assert!(matches!(err, RunError::Http { status: 404, .. }));
        assert_eq!(err.to_string(), "HTTP 404: Flow not found");
    }

    #[tokio::test]
    async fn test_malformed_json_is_decode_error() {
        let server = MockServer::start().await;
        let config = Config::for_tests(&server.uri());

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = run_blocking(config, "Hello!").await.unwrap_err();
        assert!(matches!(err, RunError::Decode(_)));
        assert!(err.to_json()["error"].is_string());
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let uri = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let err = run_blocking(Config::for_tests(&uri), "Hello!")
            .await
            .unwrap_err();
        assert!(matches!(err, RunError::Transport(_)));
        assert!(err.to_json()["error"].is_string());
    }
}
