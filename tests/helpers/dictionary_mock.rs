//! Mock dictionary server for testing
//!
//! Serves `{code}.json` resources under `/locales` with wiremock so the
//! HTTP loader can be exercised end to end.

use serde_json::Value;
use std::time::Duration;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, Request, ResponseTemplate,
};

/// Mock static-file server for dictionaries
pub struct DictionaryMockServer {
    pub server: MockServer,
}

/// Configuration for mock responses
#[derive(Debug, Clone)]
pub struct MockResponseConfig {
    pub status: u16,
    pub delay_ms: Option<u64>,
    pub body: MockBody,
}

#[derive(Debug, Clone)]
pub enum MockBody {
    Json(Value),
    Raw(String),
}

impl MockResponseConfig {
    pub fn json(value: Value) -> Self {
        Self {
            status: 200,
            delay_ms: None,
            body: MockBody::Json(value),
        }
    }

    pub fn raw(status: u16, body: &str) -> Self {
        Self {
            status,
            delay_ms: None,
            body: MockBody::Raw(body.to_string()),
        }
    }
}

impl DictionaryMockServer {
    /// Create a new mock dictionary server
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    /// Base URL to configure the HTTP source with
    pub fn base_url(&self) -> String {
        format!("{}/locales", self.server.uri())
    }

    /// Setup the response for one language resource
    pub async fn mock_dictionary(&self, code: &str, config: MockResponseConfig) {
        let mut response = ResponseTemplate::new(config.status);
        response = match config.body {
            MockBody::Json(value) => response.set_body_json(value),
            MockBody::Raw(body) => response.set_body_string(body),
        };

        if let Some(delay) = config.delay_ms {
            response = response.set_delay(Duration::from_millis(delay));
        }

        Mock::given(method("GET"))
            .and(path(format!("/locales/{}.json", code)))
            .respond_with(response)
            .mount(&self.server)
            .await;
    }

    /// Requests the server has seen so far
    pub async fn requests(&self) -> Vec<Request> {
        self.server.received_requests().await.unwrap_or_default()
    }

    /// Reset all mocks
    pub async fn reset(&self) {
        self.server.reset().await;
    }
}
