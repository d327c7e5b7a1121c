//! Email transport module
//!
//! This module provides the outbound email transport used by the
//! verification mailer, implemented with lettre over SMTP.

mod service;
mod types;

pub use service::{EmailTransport, SmtpEmailTransport};
pub use types::{OutboundEmail, SmtpConfig};
