use crate::error::CodegenError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Default address of the code generation service.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8080/api/generate-code";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Body posted to the code generation service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub parameters: serde_json::Value,
}

/// Expected reply. Any other field is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub code: Option<String>,
}

/// Sends one generation request and returns the decoded reply.
pub trait CodegenTransport {
    fn request(&self, body: &GenerateRequest) -> Result<GenerateResponse, CodegenError>;
}

/// Posts requests as JSON over HTTP.
#[derive(Clone)]
pub struct HttpTransport {
    agent: ureq::Agent,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();
        Self {
            agent,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpTransport")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT, DEFAULT_TIMEOUT)
    }
}

impl CodegenTransport for HttpTransport {
    fn request(&self, body: &GenerateRequest) -> Result<GenerateResponse, CodegenError> {
        let mut response = self
            .agent
            .post(&self.endpoint)
            .send_json(body)
            .map_err(|e| CodegenError::Transport {
                endpoint: self.endpoint.clone(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CodegenError::Status(status.as_u16()));
        }

        response
            .body_mut()
            .read_json::<GenerateResponse>()
            .map_err(|e| CodegenError::MalformedResponse(e.to_string()))
    }
}
