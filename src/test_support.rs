use std::sync::{Arc, Mutex};

use anyhow::Result;
use async_trait::async_trait;
use axum::{
  body::{Body, Bytes},
  http::{Request, StatusCode},
  Router,
};
use serde::Serialize;
use tower::ServiceExt;

use crate::{
  app::create_app,
  email::{EmailTransport, OutboundEmail},
  state::SharedAppState,
};

/// Transport double that records every envelope instead of delivering it.
pub struct RecordingTransport {
  sent: Mutex<Vec<OutboundEmail>>,
}

impl RecordingTransport {
  pub fn new() -> Self {
    Self {
      sent: Mutex::new(Vec::new()),
    }
  }

  pub fn sent(&self) -> Vec<OutboundEmail> {
    self.sent.lock().expect("sent mailbox lock").clone()
  }
}

#[async_trait]
impl EmailTransport for RecordingTransport {
  async fn send(&self, email: &OutboundEmail) -> Result<()> {
    self.sent.lock().expect("sent mailbox lock").push(email.clone());
    Ok(())
  }
}

/// Transport double that fails every send with a fixed detail message.
pub struct FailingTransport {
  detail: String,
}

impl FailingTransport {
  pub fn new(detail: &str) -> Self {
    Self {
      detail: detail.to_string(),
    }
  }
}

#[async_trait]
impl EmailTransport for FailingTransport {
  async fn send(&self, _email: &OutboundEmail) -> Result<()> {
    Err(anyhow::anyhow!("{}", self.detail))
  }
}

pub fn app_with_transport(transport: Arc<dyn EmailTransport>) -> Router {
  let state = SharedAppState::new(transport, "GateGuard Residencial <noreply@gateguard.example>".to_string());
  create_app(state)
}

pub async fn post_json<T: Serialize>(app: Router, uri: &str, body: &T) -> (StatusCode, Bytes) {
  let request = Request::builder()
    .method("POST")
    .uri(uri)
    .header("content-type", "application/json")
    .body(Body::from(serde_json::to_vec(body).expect("serialize request body")))
    .expect("build request");

  let response = app.oneshot(request).await.expect("handle request");
  let status = response.status();
  let body = axum::body::to_bytes(response.into_body(), usize::MAX)
    .await
    .expect("read response body");
  (status, body)
}
