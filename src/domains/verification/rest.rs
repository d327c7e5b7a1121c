use axum::{
  extract::{Json, State},
  response::Json as JsonResponse,
  routing::{post, Router},
};

use super::model::{SendVerificationRequest, SendVerificationResponse};
use crate::{
  state::{AppState, SharedAppState},
  utils::error::AppError,
};

pub fn verification_routes() -> Router<SharedAppState> {
  Router::new().route("/verification/send", post(send_verification_code_handler))
}

pub async fn send_verification_code_handler(
  State(state): State<SharedAppState>,
  Json(payload): Json<SendVerificationRequest>,
) -> Result<JsonResponse<SendVerificationResponse>, AppError> {
  let response = state.send_verification_code(payload).await?;
  Ok(JsonResponse(response))
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use axum::http::StatusCode;
  use serde_json::json;

  use super::super::model::SendVerificationRequest;
  use crate::test_support::{app_with_transport, post_json, FailingTransport, RecordingTransport};

  #[tokio::test]
  async fn send_endpoint_returns_success_body() {
    let transport = Arc::new(RecordingTransport::new());
    let app = app_with_transport(transport.clone());

    let payload = SendVerificationRequest {
      email: "a@b.com".to_string(),
      user_name: "Ana".to_string(),
      verification_code: "483920".to_string(),
    };
    let (status, body) = post_json(app, "/api/v1/verification/send", &payload).await;
    assert_eq!(status, StatusCode::OK);

    let response: serde_json::Value = serde_json::from_slice(&body).expect("deserialize response");
    assert_eq!(response["success"], json!(true));
    assert_eq!(response["message"], json!("email sent"));
    assert_eq!(transport.sent().len(), 1);
  }

  #[tokio::test]
  async fn send_endpoint_rejects_empty_email() {
    let transport = Arc::new(RecordingTransport::new());
    let app = app_with_transport(transport.clone());

    let payload = SendVerificationRequest {
      email: "".to_string(),
      user_name: "Ana".to_string(),
      verification_code: "483920".to_string(),
    };
    let (status, body) = post_json(app, "/api/v1/verification/send", &payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let response: serde_json::Value = serde_json::from_slice(&body).expect("deserialize response");
    assert_eq!(response["kind"], json!("invalid-argument"));
    assert!(transport.sent().is_empty());
  }

  #[tokio::test]
  async fn send_endpoint_maps_transport_failure_to_internal() {
    let transport = Arc::new(FailingTransport::new("relay unreachable"));
    let app = app_with_transport(transport);

    let payload = SendVerificationRequest {
      email: "a@b.com".to_string(),
      user_name: "Ana".to_string(),
      verification_code: "483920".to_string(),
    };
    let (status, body) = post_json(app, "/api/v1/verification/send", &payload).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let response: serde_json::Value = serde_json::from_slice(&body).expect("deserialize response");
    assert_eq!(response["kind"], json!("internal"));
    assert!(
      response["message"]
        .as_str()
        .expect("message should be a string")
        .contains("relay unreachable")
    );
  }
}
