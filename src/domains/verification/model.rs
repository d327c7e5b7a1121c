use serde::{Deserialize, Serialize};
use validator::Validate;

/// Wire names are camelCase to match the client contract. Absent keys default
/// to empty strings so that "missing" and "empty" take the same validation
/// path instead of being rejected by the JSON extractor.
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct SendVerificationRequest {
  #[validate(length(min = 1, message = "email is required"))]
  pub email: String,
  #[validate(length(min = 1, message = "userName is required"))]
  pub user_name: String,
  #[validate(length(min = 1, message = "verificationCode is required"))]
  pub verification_code: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SendVerificationResponse {
  pub success: bool,
  pub message: String,
}
