mod model;
mod server;

use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::server::{config::Config, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "terracerent=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session_layer = startup::connect_to_session(&db).await?;

    // The mobile clients are served from other origins and authenticate with
    // session cookies, so the CORS policy must allow credentials.
    let app = router::router()
        .with_state(AppState::new(db))
        .layer(session_layer)
        .layer(CorsLayer::very_permissive());

    let listener = tokio::net::TcpListener::bind(&config.listen_address).await?;

    tracing::info!("Server listening on {}", config.listen_address);

    axum::serve(listener, app).await?;

    Ok(())
}
