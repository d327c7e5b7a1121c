use std::error::Error;
use std::sync::Arc;

use async_trait::async_trait;
use validator::Validate;

use super::{
  model::{SendVerificationRequest, SendVerificationResponse},
  template::{render_verification_email, VERIFICATION_SUBJECT},
};
use crate::email::{EmailTransport, OutboundEmail};

#[derive(Debug)]
pub enum VerificationServiceError {
  InvalidArgument(String),
  Internal(String),
}

impl Error for VerificationServiceError {}

impl std::fmt::Display for VerificationServiceError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      VerificationServiceError::InvalidArgument(msg) => write!(f, "Invalid Argument: {}", msg),
      VerificationServiceError::Internal(msg) => write!(f, "Internal Error: {}", msg),
    }
  }
}

#[async_trait]
pub trait VerificationService: Send + Sync {
  async fn send_verification_code(
    &self,
    req: SendVerificationRequest,
  ) -> Result<SendVerificationResponse, VerificationServiceError>;
}

/// Validates the request, renders the fixed HTML notification and hands the
/// envelope to the transport. The transport is a process-wide resource shared
/// across invocations; each call is otherwise self-contained.
pub struct VerificationMailer {
  transport: Arc<dyn EmailTransport>,
  sender: String,
}

impl VerificationMailer {
  pub fn new(transport: Arc<dyn EmailTransport>, sender: String) -> Self {
    Self { transport, sender }
  }
}

#[async_trait]
impl VerificationService for VerificationMailer {
  async fn send_verification_code(
    &self,
    req: SendVerificationRequest,
  ) -> Result<SendVerificationResponse, VerificationServiceError> {
    req.validate().map_err(|e| {
      tracing::error!("Rejected verification email request for {:?}: {}", req.email, e);
      VerificationServiceError::InvalidArgument(format!("Missing required parameters: {}", e))
    })?;

    let html_body = render_verification_email(&req.user_name, &req.verification_code);

    let email = OutboundEmail::new(
      self.sender.clone(),
      req.email.clone(),
      VERIFICATION_SUBJECT.to_string(),
      html_body,
    );

    match self.transport.send(&email).await {
      Ok(_) => {
        tracing::info!("Verification email sent to {}", req.email);
        Ok(SendVerificationResponse {
          success: true,
          message: "email sent".to_string(),
        })
      }
      Err(e) => {
        tracing::error!("Failed to send verification email to {}: {:?}", req.email, e);
        Err(VerificationServiceError::Internal(format!(
          "Failed to send email: {}",
          e
        )))
      }
    }
  }
}
