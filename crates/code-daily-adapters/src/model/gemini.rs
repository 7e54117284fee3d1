//! Gemini `generateContent` client using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument, warn};
use url::Url;

use code_daily_core::{
    application::{ApplicationError, ports::ContentModel},
    domain::Credential,
    error::{CoreError, CoreResult},
};

const X_GOOG_API_KEY: &str = "x-goog-api-key";

pub const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Where and how to reach the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeminiConfig {
    /// Base URL up to and including the API version segment.
    pub api_url: String,
    pub model: String,
    pub timeout_secs: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Error)]
enum GeminiError {
    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("invalid endpoint: {0}")]
    Endpoint(#[from] url::ParseError),

    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("unreadable response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("prompt blocked by the model ({0})")]
    Blocked(String),

    #[error("response contained no text")]
    Empty,
}

impl From<GeminiError> for CoreError {
    fn from(e: GeminiError) -> Self {
        ApplicationError::ModelRequest {
            reason: e.to_string(),
        }
        .into()
    }
}

/// HTTP transport for the Gemini API.
///
/// One request per call and no retries. The key travels per call in the
/// `x-goog-api-key` header and is never stored here.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    endpoint: Url,
    client: Client,
}

impl GeminiClient {
    pub fn new(config: &GeminiConfig) -> CoreResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(GeminiError::Client)?;

        let base = config.api_url.trim_end_matches('/');
        let endpoint = Url::parse(&format!("{base}/models/{}:generateContent", config.model))
            .map_err(GeminiError::from)?;

        Ok(Self { endpoint, client })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn send_request(&self, credential: &Credential, prompt: &str) -> Result<String, GeminiError> {
        let request = ApiRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(X_GOOG_API_KEY, credential.expose())
            .header(CONTENT_TYPE, "application/json")
            .json(&request)
            .send()
            .map_err(GeminiError::Transport)?;

        let status = response.status();
        let body_text = response.text().map_err(GeminiError::Transport)?;

        if !status.is_success() {
            let message = extract_error_message(&body_text).unwrap_or_else(|| {
                if body_text.trim().is_empty() {
                    status
                        .canonical_reason()
                        .unwrap_or("Gemini API request failed")
                        .to_string()
                } else {
                    body_text.clone()
                }
            });
            return Err(GeminiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ApiResponse = serde_json::from_str(&body_text)?;
        let text = parsed
            .candidates
            .into_iter()
            .next()
            .map(|c| {
                c.content
                    .parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<String>()
            })
            .unwrap_or_default();

        if !text.is_empty() {
            return Ok(text);
        }
        match parsed.prompt_feedback.and_then(|f| f.block_reason) {
            Some(reason) => Err(GeminiError::Blocked(reason)),
            None => Err(GeminiError::Empty),
        }
    }
}

impl ContentModel for GeminiClient {
    #[instrument(skip_all, fields(endpoint = %self.endpoint, prompt_len = prompt.len()))]
    fn generate(&self, credential: &Credential, prompt: &str) -> CoreResult<String> {
        match self.send_request(credential, prompt) {
            Ok(text) => {
                debug!(bytes = text.len(), "Model responded");
                Ok(text)
            }
            Err(e) => {
                warn!(error = %e, "Model request failed");
                Err(e.into())
            }
        }
    }
}

// ── Wire types ───────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct ApiRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: CandidateContent,
}

#[derive(Debug, Default, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;
    parsed
        .get("error")
        .and_then(|error| error.get("message"))
        .and_then(|message| message.as_str())
        .map(ToOwned::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    const PATH: &str = "/models/gemini-1.5-flash:generateContent";

    fn client_for(server: &mockito::Server) -> GeminiClient {
        let config = GeminiConfig {
            api_url: server.url(),
            model: DEFAULT_MODEL.into(),
            timeout_secs: 1,
        };
        GeminiClient::new(&config).unwrap()
    }

    fn key() -> Credential {
        Credential::new("AIza-test-key").unwrap()
    }

    #[test]
    fn default_config_points_at_public_api() {
        let client = GeminiClient::new(&GeminiConfig::default()).unwrap();
        assert_eq!(
            client.endpoint().as_str(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent"
        );
    }

    #[test]
    fn malformed_base_url_is_rejected() {
        let config = GeminiConfig {
            api_url: "not a url".into(),
            ..GeminiConfig::default()
        };
        let err = GeminiClient::new(&config).unwrap_err();
        assert!(err.to_string().contains("invalid endpoint"));
    }

    #[test]
    fn sends_prompt_and_key_and_joins_parts() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", PATH)
            .match_header(X_GOOG_API_KEY, "AIza-test-key")
            .match_body(Matcher::Json(serde_json::json!({
                "contents": [{ "parts": [{ "text": "Generate 5 coding exercises" }] }]
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r##"{"candidates":[{"content":{"parts":[{"text":"# Exercise 1\n"},{"text":"Sum."}],"role":"model"}}]}"##,
            )
            .expect(1)
            .create();

        let text = client_for(&server)
            .generate(&key(), "Generate 5 coding exercises")
            .unwrap();

        assert_eq!(text, "# Exercise 1\nSum.");
        mock.assert();
    }

    #[test]
    fn rejected_key_surfaces_api_message_without_retry() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", PATH)
            .with_status(400)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error":{"code":400,"message":"API key not valid. Please pass a valid API key.","status":"INVALID_ARGUMENT"}}"#)
            .expect(1)
            .create();

        let err = client_for(&server).generate(&key(), "test").unwrap_err();

        match err {
            CoreError::Application(ApplicationError::ModelRequest { reason }) => {
                assert_eq!(reason, "HTTP 400: API key not valid. Please pass a valid API key.");
            }
            other => panic!("unexpected error variant: {other:?}"),
        }
        mock.assert();
    }

    #[test]
    fn server_error_without_body_uses_status_text() {
        let mut server = mockito::Server::new();
        let mock = server.mock("POST", PATH).with_status(503).expect(1).create();

        let err = client_for(&server).generate(&key(), "test").unwrap_err();

        assert!(err.to_string().contains("HTTP 503: Service Unavailable"));
        mock.assert();
    }

    #[test]
    fn blocked_prompt_is_an_error() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("POST", PATH)
            .with_status(200)
            .with_body(r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#)
            .create();

        let err = client_for(&server).generate(&key(), "test").unwrap_err();

        assert!(err.to_string().contains("blocked by the model (SAFETY)"));
    }

    #[test]
    fn empty_candidates_is_an_error() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("POST", PATH)
            .with_status(200)
            .with_body(r#"{"candidates":[]}"#)
            .create();

        let err = client_for(&server).generate(&key(), "test").unwrap_err();

        assert!(err.to_string().contains("no text"));
    }

    #[test]
    fn malformed_json_is_a_decode_error() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("POST", PATH)
            .with_status(200)
            .with_body("<html>")
            .create();

        let err = client_for(&server).generate(&key(), "test").unwrap_err();

        assert!(err.to_string().contains("unreadable response"));
    }

    #[test]
    fn truncated_body_is_a_transport_error() {
        use std::io::{Read, Write};
        use std::net::TcpListener;

        // Promises more bytes than it sends, then hangs up.
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let server = std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = [0u8; 4096];
            let _ = stream.read(&mut request);
            stream
                .write_all(b"HTTP/1.1 200 OK\r\ncontent-length: 100\r\n\r\n{\"cand")
                .unwrap();
        });

        let config = GeminiConfig {
            api_url: format!("http://{addr}"),
            model: DEFAULT_MODEL.into(),
            timeout_secs: 5,
        };
        let err = GeminiClient::new(&config)
            .unwrap()
            .generate(&key(), "test")
            .unwrap_err();
        server.join().unwrap();

        assert!(err.to_string().contains("request failed"), "{err}");
        assert!(!err.to_string().contains("unreadable response"));
    }
}
