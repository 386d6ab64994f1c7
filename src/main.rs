mod config;
mod db;
mod routes;
mod state;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // A missing .env file is fine; real deployments set the environment directly.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::RelayConfig::from_env().expect("invalid relay configuration");

    let source = db::supabase::SupabaseClient::new(
        &config.supabase_url,
        config.supabase_key.clone(),
        config.table.clone(),
    )
    .expect("database client init failed");
    let state = state::AppState::new(Arc::new(source));

    let app = routes::app(state, config.cors_origin.clone());
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, table = %config.table, upstream = %config.supabase_url, "relay listening");
    axum::serve(listener, app).await.expect("server failed");
}
