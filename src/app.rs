use axum::{response::Html, routing::get, Router};

use crate::{domains::verification::rest::verification_routes, state::SharedAppState};

pub fn create_app(state: SharedAppState) -> Router {
  Router::new()
    .route("/", get(root_handler))
    .nest("/api/v1", verification_routes())
    .with_state(state)
}

pub async fn root_handler() -> Html<String> {
  Html("<h1>GateGuard Mailer API</h1>".to_string())
}
