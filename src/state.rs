use std::sync::Arc;

use crate::domains::verification::{
  model::{SendVerificationRequest, SendVerificationResponse},
  service::{VerificationMailer, VerificationService, VerificationServiceError},
};
use crate::email::EmailTransport;

pub trait AppState: Clone + Send + Sync + 'static {
  fn send_verification_code(
    &self,
    req: SendVerificationRequest,
  ) -> impl std::future::Future<Output = Result<SendVerificationResponse, VerificationServiceError>> + Send;
}

#[derive(Clone)]
pub struct SharedAppState {
  pub verification_service: Arc<dyn VerificationService>,
}

impl SharedAppState {
  pub fn new(transport: Arc<dyn EmailTransport>, sender: String) -> Self {
    let verification_service = Arc::new(VerificationMailer::new(transport, sender));

    Self { verification_service }
  }
}

impl AppState for SharedAppState {
  async fn send_verification_code(
    &self,
    req: SendVerificationRequest,
  ) -> Result<SendVerificationResponse, VerificationServiceError> {
    self.verification_service.send_verification_code(req).await
  }
}
