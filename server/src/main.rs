#![recursion_limit = "256"]

mod config;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    // A missing .env is fine; the environment alone is enough.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .init();

    let config = config::HostConfig::from_env().expect("invalid host configuration");
    let state = state::AppState::from_config(&config).expect("http client init failed");
    tracing::info!(backend = %config.backend_url, "forwarding /api requests");

    let app = routes::leptos_app(state).expect("leptos app init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "escrow portal listening");
    axum::serve(listener, app).await.expect("server failed");
}
