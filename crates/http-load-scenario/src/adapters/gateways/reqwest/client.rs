use async_trait::async_trait;

use crate::entities::Action;
use crate::error::ScenarioError;
use crate::use_cases::ports::HttpClient;

/// Reqwest-based HTTP client issuing actions against a base URL
#[derive(Clone, Debug)]
pub struct Reqwest {
    client: reqwest::Client,
    base_url: String,
}

impl Reqwest {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Reuse a preconfigured client (timeouts, proxies, TLS, ...)
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl HttpClient for Reqwest {
    async fn send(&self, action: &Action) -> Result<u16, ScenarioError> {
        let method = reqwest::Method::from_bytes(action.method.as_str().as_bytes())
            .map_err(|e| ScenarioError::Transport(e.to_string()))?;

        let mut request = self.client.request(method, self.url(&action.path));
        if let Some(payload) = &action.payload {
            request = request.json(payload);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ScenarioError::Transport(e.to_string()))?;

        Ok(response.status().as_u16())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base_and_path() {
        let client = Reqwest::new("http://localhost:8080/");
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(client.url("/"), "http://localhost:8080/");
        assert_eq!(client.url("/healthcheck"), "http://localhost:8080/healthcheck");
    }

    #[tokio::test]
    async fn test_send_reports_connection_failure() {
        // Port 9 (discard) is not expected to accept HTTP on loopback.
        let client = Reqwest::new("http://127.0.0.1:9");
        let err = client.send(&Action::get("index", "/")).await.unwrap_err();
        assert!(matches!(err, ScenarioError::Transport(_)));
    }
}
