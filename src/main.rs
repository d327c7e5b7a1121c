use std::sync::Arc;

use tokio::signal;

use dotenvy::dotenv;

use gateguard_mailer_api::app::create_app;
use gateguard_mailer_api::state::SharedAppState;
use gateguard_mailer_api::utils::{init_email_transport, load_smtp_config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  dotenv().ok();

  tracing_subscriber::fmt::init();

  let smtp_config = load_smtp_config()?;
  let sender = smtp_config.sender_mailbox();
  let transport = init_email_transport(&smtp_config)?;

  let app_state = SharedAppState::new(Arc::new(transport), sender);
  let app = create_app(app_state);

  let listener = tokio::net::TcpListener::bind("0.0.0.0:8000").await?;

  println!("Server running on http://0.0.0.0:8000");

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await?;

  Ok(())
}

async fn shutdown_signal() {
  let ctrl_c = async {
    signal::ctrl_c().await.expect("Failed to install Ctrl+C handler");
  };

  #[cfg(unix)]
  let terminate = async {
    signal::unix::signal(signal::unix::SignalKind::terminate())
      .expect("Failed to install signal handler")
      .recv()
      .await;
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
      _ = ctrl_c => {},
      _ = terminate => {},
  }

  println!("Received termination signal, shutting down gracefully...");
}
