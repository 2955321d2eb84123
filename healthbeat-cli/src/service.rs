//! HTTP-backed prediction service.

use healthbeat_core::{HealthbeatError, PredictionService, ProjectProfile, ServicePredictions};
use reqwest::blocking::Client;

const USER_AGENT: &str = concat!("healthbeat-cli/", env!("CARGO_PKG_VERSION"));

/// Posts project profiles to a remote prediction endpoint.
#[derive(Debug, Clone)]
pub struct HttpPredictionService {
    endpoint: String,
    token: Option<String>,
    client: Client,
}

impl HttpPredictionService {
    /// Create a service for the given endpoint and optional bearer token.
    pub fn new(endpoint: impl Into<String>, token: Option<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: token.filter(|token| !token.trim().is_empty()),
            client: Client::new(),
        }
    }
}

impl PredictionService for HttpPredictionService {
    fn predict(&self, profile: &ProjectProfile) -> healthbeat_core::Result<ServicePredictions> {
        let mut request = self
            .client
            .post(&self.endpoint)
            .header("User-Agent", USER_AGENT)
            .json(profile);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        let response = request
            .send()
            .map_err(|err| HealthbeatError::Service(format!("request failed: {err}")))?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().unwrap_or_default();
            return Err(HealthbeatError::Service(format!(
                "endpoint returned {status}: {body}"
            )));
        }
        response
            .json::<ServicePredictions>()
            .map_err(|err| HealthbeatError::Service(format!("response decode failed: {err}")))
    }
}
