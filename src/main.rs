//! Tourvia Server - Tourism Content API
//!
//! A Rust REST API server for tourism content.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tourvia_server::{
    api,
    config::AppConfig,
    repository::Repository,
    services::{assistant::HttpCompletionProvider, Services},
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("tourvia_server={},tower_http=debug", config.logging.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Tourvia Server v{}", env!("CARGO_PKG_VERSION"));

    // Create database connection pool
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect(&config.database.url)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Database migrations completed");

    // Build the text-completion provider once; the assistant receives it as
    // an injected dependency
    let provider = HttpCompletionProvider::new(config.assistant.clone())
        .expect("Failed to create completion provider");

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create repository and services
    let repository = Repository::new(pool);
    let services = Services::new(
        repository,
        config.auth.clone(),
        config.bookings.clone(),
        Arc::new(provider),
    );

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(
        server_host.parse().expect("Invalid host address"),
        server_port,
    );

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Authentication
        .route("/auth/register", post(api::auth::register))
        .route("/auth/login", post(api::auth::login))
        .route("/auth/me", get(api::auth::me))
        // Attractions
        .route("/attractions", get(api::attractions::list_attractions))
        .route("/attractions", post(api::attractions::create_attraction))
        .route("/attractions/:id", get(api::attractions::get_attraction))
        .route("/attractions/:id", put(api::attractions::update_attraction))
        .route("/attractions/:id", delete(api::attractions::delete_attraction))
        .route("/attractions/:id/favorite", post(api::attractions::toggle_favorite))
        // Regions & categories
        .route("/regions", get(api::taxonomy::list_regions))
        .route("/regions", post(api::taxonomy::create_region))
        .route("/regions/:id", delete(api::taxonomy::delete_region))
        .route("/categories", get(api::taxonomy::list_categories))
        .route("/categories", post(api::taxonomy::create_category))
        .route("/categories/:id", delete(api::taxonomy::delete_category))
        // Reviews
        .route("/reviews", get(api::reviews::list_reviews))
        .route("/reviews", post(api::reviews::submit_review))
        .route("/reviews/:id/moderate", post(api::reviews::moderate_review))
        // Routes
        .route("/routes", get(api::routes::list_routes))
        .route("/routes", post(api::routes::create_route))
        .route("/routes/:id", get(api::routes::get_route))
        .route("/routes/:id", put(api::routes::update_route))
        .route("/routes/:id", delete(api::routes::delete_route))
        .route("/routes/:id/stops", post(api::routes::create_route_stop))
        .route("/routes/stops/:stop_id", delete(api::routes::delete_route_stop))
        // Bookings
        .route("/bookings", get(api::bookings::list_bookings))
        .route("/bookings", post(api::bookings::create_booking))
        .route("/bookings/:id/pay", post(api::bookings::pay_booking))
        // Chat
        .route("/chat/ask", post(api::assistant::ask))
        // Statistics
        .route("/admin/stats", get(api::stats::get_stats))
        .with_state(state.clone());

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
