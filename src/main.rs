use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use oxitrash::{create_app, AppConfig, AppServiceFactory};

/// OxiTrash - XDG trash service for notebook front-ends
///
/// Exposes the user's freedesktop trash (`$XDG_DATA_HOME/Trash`) over a small
/// JSON API: status, list, restore, delete and empty.
///
/// The layout follows the Clean/Hexagonal Architecture pattern:
///
/// - Domain Layer: trash entities, location and size rules (domain/*)
/// - Application Layer: the trash use case and DTOs (application/*)
/// - Infrastructure Layer: filesystem repository and `.trashinfo` parsing (infrastructure/*)
/// - Interface Layer: axum handlers and routes (interfaces/*)
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from environment variables
    let config = AppConfig::from_env();
    config.validate()?;
    tracing::info!("Delete to trash enabled: {}", config.features.delete_to_trash);

    let addr = config.server.socket_addr();
    let app_state = AppServiceFactory::new(config).build_app_state()?;
    let app = create_app(app_state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Starting OxiTrash server on http://{}", addr);

    axum::serve(listener, app).await?;

    tracing::info!("Server shutdown completed");
    Ok(())
}
