use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct SmtpConfig {
  pub host: String,
  pub port: u16,
  pub username: String,
  pub password: String,
  pub from_email: String,
  pub from_name: String,
}

impl SmtpConfig {
  /// The fixed sender mailbox used as the envelope `from` for every message.
  pub fn sender_mailbox(&self) -> String {
    format!("{} <{}>", self.from_name, self.from_email)
  }
}

impl Default for SmtpConfig {
  fn default() -> Self {
    SmtpConfig {
      host: "smtp.gmail.com".to_string(),
      port: 587,
      username: "".to_string(),
      password: "".to_string(),
      from_email: "".to_string(),
      from_name: "GateGuard Residencial".to_string(),
    }
  }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutboundEmail {
  pub from: String,
  pub to: String,
  pub subject: String,
  pub html_body: String,
}

impl OutboundEmail {
  pub fn new(from: String, to: String, subject: String, html_body: String) -> Self {
    OutboundEmail {
      from,
      to,
      subject,
      html_body,
    }
  }
}
