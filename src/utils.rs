use crate::email::{SmtpConfig, SmtpEmailTransport};

pub mod error;

/// Reads the SMTP configuration from the environment. Credentials are loaded
/// once at startup and never leave the transport.
pub fn load_smtp_config() -> anyhow::Result<SmtpConfig> {
  use std::env;

  let smtp_config = SmtpConfig {
    host: env::var("SMTP_HOST").unwrap_or_else(|_| "smtp.gmail.com".to_string()),
    port: env::var("SMTP_PORT")
      .unwrap_or_else(|_| "587".to_string())
      .parse()
      .unwrap_or(587),
    username: env::var("SMTP_USERNAME").map_err(|_| anyhow::anyhow!("SMTP_USERNAME environment variable must be set."))?,
    password: env::var("SMTP_PASSWORD").map_err(|_| anyhow::anyhow!("SMTP_PASSWORD environment variable must be set."))?,
    from_email: env::var("SMTP_FROM_EMAIL")
      .map_err(|_| anyhow::anyhow!("SMTP_FROM_EMAIL environment variable must be set."))?,
    from_name: env::var("SMTP_FROM_NAME").unwrap_or_else(|_| "GateGuard Residencial".to_string()),
  };

  Ok(smtp_config)
}

pub fn init_email_transport(smtp_config: &SmtpConfig) -> anyhow::Result<SmtpEmailTransport> {
  let transport = SmtpEmailTransport::new(smtp_config)?;
  Ok(transport)
}
