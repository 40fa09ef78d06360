use anyhow::Context;
use axum::{routing::get, Router};
use std::net::{IpAddr, SocketAddr};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use stadium_seating::{config::Config, controllers, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::load().context("Failed to load configuration")?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.app.rust_log))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting stadium seating service ({})",
        config.app.environment
    );

    let host: IpAddr = config
        .app
        .host
        .parse()
        .with_context(|| format!("Invalid HOST {}", config.app.host))?;
    let addr = SocketAddr::new(host, config.app.port);

    // Строим стадион один раз при старте
    let app_state = AppState::new(config).context("Failed to build stadium")?;
    for stadium in app_state.registry.iter() {
        info!("Serving {} ({} floors, {} sections)", stadium, stadium.num_floors(), stadium.num_sections());
    }

    let app = Router::new()
        .route("/", get(|| async { "Stadium Seating API v1.0" }))
        .route("/health", get(|| async { "OK" }))
        .nest("/api", controllers::routes())
        .with_state(app_state)
        .layer(TraceLayer::new_for_http());

    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app.into_make_service())
        .await
        .context("Server error")?;

    Ok(())
}
