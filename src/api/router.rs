use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handlers::{
    AppState, add_item, add_member, create_loan, list_available_items, list_member_loans,
    return_loan,
};

/// Creates the API router with the six lending operations
///
/// Command endpoints (Write operations):
/// - POST /items - Add an item to the catalog
/// - POST /members - Register a member
/// - POST /loans - Create a new loan
/// - POST /loans/:id/return - Return a loan
///
/// Query endpoints (Read operations):
/// - GET /items/available - List available items
/// - GET /members/:id/loans - List a member's active loans
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(health_check))
        // Command endpoints (Write operations)
        .route("/items", post(add_item))
        .route("/members", post(add_member))
        .route("/loans", post(create_loan))
        .route("/loans/:id/return", post(return_loan))
        // Query endpoints (Read operations)
        .route("/items/available", get(list_available_items))
        .route("/members/:id/loans", get(list_member_loans))
        // Add tracing middleware
        .layer(TraceLayer::new_for_http())
        // Add application state
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
