use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use serde_json::json;

/// Boundary error for the HTTP surface. Carries the coarse error kind the
/// client contract expects alongside the status code and message.
#[derive(Debug)]
pub struct AppError {
  pub status_code: StatusCode,
  pub kind: &'static str,
  pub message: String,
}

impl AppError {
  pub fn new(status_code: StatusCode, kind: &'static str, message: impl Into<String>) -> Self {
    Self {
      status_code,
      kind,
      message: message.into(),
    }
  }

  pub fn invalid_argument(message: impl Into<String>) -> Self {
    Self::new(StatusCode::BAD_REQUEST, "invalid-argument", message)
  }

  pub fn internal(message: impl Into<String>) -> Self {
    Self::new(StatusCode::INTERNAL_SERVER_ERROR, "internal", message)
  }
}

impl IntoResponse for AppError {
  fn into_response(self) -> Response {
    let body = Json(json!({
      "kind": self.kind,
      "message": self.message,
      "status_code": self.status_code.as_u16(),
    }));

    (self.status_code, body).into_response()
  }
}

impl From<crate::domains::verification::service::VerificationServiceError> for AppError {
  fn from(error: crate::domains::verification::service::VerificationServiceError) -> Self {
    use crate::domains::verification::service::VerificationServiceError;
    match error {
      VerificationServiceError::InvalidArgument(msg) => AppError::invalid_argument(msg),
      VerificationServiceError::Internal(msg) => AppError::internal(msg),
    }
  }
}
