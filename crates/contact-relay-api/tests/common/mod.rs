//! Common test utilities for relay integration tests
#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{HeaderMap, Method, Request, StatusCode};
use contact_relay_api::RelayContext;
use contact_relay_core::RelayConfig;
use contact_relay_core::RelayError;
use contact_relay_core::models::{OutboundEmail, SendReceipt};
use contact_relay_core::services::EmailProvider;
use serde_json::Value;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

pub const VALID_BODY: &str =
    r#"{"nombre":"Ana Pérez","email":"ana@example.com","mensaje":"Hola\nQuisiera un presupuesto"}"#;

/// What the mock provider answers with
#[derive(Clone)]
pub enum MockReply {
    Sent(Option<String>),
    Fail(String),
}

/// Provider that records every email it is asked to send
pub struct MockProvider {
    reply: MockReply,
    pub sent: Mutex<Vec<OutboundEmail>>,
}

impl MockProvider {
    pub fn new(reply: MockReply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            sent: Mutex::new(Vec::new()),
        })
    }

    pub fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailProvider for MockProvider {
    async fn send(&self, email: &OutboundEmail) -> Result<SendReceipt, RelayError> {
        self.sent.lock().unwrap().push(email.clone());
        match &self.reply {
            MockReply::Sent(id) => Ok(SendReceipt { id: id.clone() }),
            MockReply::Fail(detail) => Err(RelayError::Provider(detail.clone())),
        }
    }
}

pub fn test_config() -> RelayConfig {
    RelayConfig {
        api_key: Some("re_test".to_string()),
        recipient: "owner@example.com".to_string(),
        ..RelayConfig::default()
    }
}

pub fn context(provider: Arc<MockProvider>) -> Arc<RelayContext> {
    RelayContext::with_provider(test_config(), provider)
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

/// Drive the router with a single request
pub async fn call(ctx: Arc<RelayContext>, method: Method, body: &str) -> TestResponse {
    let request = Request::builder()
        .method(method)
        .uri("/.netlify/functions/send-email")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = contact_relay_api::router(ctx)
        .oneshot(request)
        .await
        .unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    TestResponse {
        status,
        headers,
        body,
    }
}

pub fn assert_cors(headers: &HeaderMap) {
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert_eq!(headers["access-control-allow-headers"], "Content-Type");
    assert_eq!(headers["access-control-allow-methods"], "POST, OPTIONS");
}
