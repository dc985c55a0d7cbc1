use sigma_books::{
    adapters::sqlite::SqliteBookRepository,
    api::{handlers::AppState, router::create_router},
    application::book::ServiceDependencies,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sigma_books=debug,tower_http=debug,axum=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection URL (the backing file is created on first start)
    let database_url = std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:sigma.db".into());

    tracing::info!("Database URL: {}", database_url);

    // Initialize database connection pool
    let options = database_url
        .parse::<sqlx::sqlite::SqliteConnectOptions>()
        .expect("Invalid database URL")
        .create_if_missing(true);

    let pool = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
        .expect("Failed to connect to database");

    // Initialize the repository and synchronize the schema
    let repository = Arc::new(SqliteBookRepository::new(pool.clone()));
    repository
        .init_schema()
        .await
        .expect("Failed to synchronize database schema");

    // Create service dependencies
    let service_deps = ServiceDependencies { repository };

    // Create application state
    let app_state = Arc::new(AppState { service_deps });

    // Create router
    let app = create_router(app_state);

    // Server configuration
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".into());
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", addr);

    // Start server
    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
