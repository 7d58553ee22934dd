use std::sync::Arc;

use axum::{
    Router, middleware,
    response::Html,
    routing::{get, post},
};
use tokio::net::TcpListener;
use tower_http::services::ServeDir;

use crate::chat;
use crate::config::Config;
use crate::login;

/// Shared application state: the loaded configuration plus one HTTP
/// client reused across chat turns.
pub struct AppState {
    pub config: Config,
    pub http: reqwest::Client,
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load();
    let bind_addr = config.bind_addr.clone();

    // Setup app state
    let app_state = Arc::new(AppState {
        config,
        http: reqwest::Client::new(),
    });

    // Build router
    let app = Router::new()
        .route("/", get(serve_landing))
        .route("/login", get(login::serve_login_page).post(login::handle_login))
        .route("/logout", get(login::handle_logout))
        .route("/dashboard", get(serve_dashboard))
        .route("/api/chat", post(chat::handle_chat))
        .nest_service("/static", ServeDir::new("static"))
        .layer(middleware::from_fn(login::admin_gate))
        .with_state(app_state);

    // Start server
    let listener = TcpListener::bind(&bind_addr).await?;
    log::info!("Listening on http://{bind_addr}");
    axum::serve(listener, app).await?;

    Ok(())
}

async fn serve_landing() -> Html<&'static str> {
    Html(include_str!("./static/landing.html"))
}

async fn serve_dashboard() -> Html<&'static str> {
    Html(include_str!("./static/chat.html"))
}
