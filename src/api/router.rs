use axum::{
    Router,
    routing::{delete, get, post, put},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handlers::{AppState, create_book, delete_book, get_book, list_books, update_book};

/// Creates the API router with all book catalog endpoints
///
/// Query endpoints (Read operations):
/// - GET /books - List all books
/// - GET /books/:id - Get a single book (JSON null when absent)
///
/// Command endpoints (Write operations):
/// - POST /books - Create a book
/// - PUT /books/:id - Partially update a book
/// - DELETE /books/:id - Delete a book
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(health_check))
        // Query endpoints (Read operations)
        .route("/books", get(list_books))
        .route("/books/:id", get(get_book))
        // Command endpoints (Write operations)
        .route("/books", post(create_book))
        .route("/books/:id", put(update_book))
        .route("/books/:id", delete(delete_book))
        // Add tracing middleware
        .layer(TraceLayer::new_for_http())
        // Add application state
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
