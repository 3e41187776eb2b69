//! HTTP surface: route table and page handlers

pub mod books;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{compression::CompressionLayer, services::ServeDir, trace::TraceLayer};

use crate::AppState;

/// Build the application router with all routes
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(books::home))
        .route("/create", get(books::create_form).post(books::create_book))
        .route("/update/:id", get(books::edit_form).post(books::update_book))
        .route(
            "/delete/:id",
            get(books::delete_confirm).post(books::delete_book),
        )
        .route("/update-book-one", post(books::update_book_one))
        .route("/delete-highest-id", post(books::delete_highest_id))
        .nest_service("/static", ServeDir::new("public"))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .with_state(state)
}
