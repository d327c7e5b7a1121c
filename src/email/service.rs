use anyhow::Result;
use async_trait::async_trait;
use lettre::{
  message::header::ContentType, transport::smtp::authentication::Credentials, AsyncSmtpTransport, AsyncTransport,
  Message, Tokio1Executor,
};

use crate::email::types::{OutboundEmail, SmtpConfig};

/// The single send capability the mailer depends on. The transport instance
/// is created once at startup and must be safe for concurrent use.
#[async_trait]
pub trait EmailTransport: Send + Sync {
  async fn send(&self, email: &OutboundEmail) -> Result<()>;
}

pub struct SmtpEmailTransport {
  transporter: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpEmailTransport {
  pub fn new(smtp_config: &SmtpConfig) -> Result<Self> {
    let creds = Credentials::new(smtp_config.username.clone(), smtp_config.password.clone());

    let transporter = if smtp_config.host == "localhost" || smtp_config.host == "mailhog" {
      AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&smtp_config.host)
        .credentials(creds)
        .port(smtp_config.port)
        .build()
    } else {
      AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&smtp_config.host)?
        .credentials(creds)
        .port(smtp_config.port)
        .build()
    };

    Ok(SmtpEmailTransport { transporter })
  }
}

#[async_trait]
impl EmailTransport for SmtpEmailTransport {
  async fn send(&self, email: &OutboundEmail) -> Result<()> {
    let message = Message::builder()
      .from(email.from.parse()?)
      .to(email.to.parse()?)
      .subject(&email.subject)
      .header(ContentType::TEXT_HTML)
      .body(email.html_body.clone())?;

    self.transporter.send(message).await?;

    Ok(())
  }
}
