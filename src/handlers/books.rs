use crate::{
    config::Config,
    error::AppError,
    models::{Book, BookInput},
    store::BookStore,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Arc<BookStore>,
}

/// Handle GET /books
pub async fn list_books(State(state): State<AppState>) -> Json<Vec<Book>> {
    let books = state.store.list();

    tracing::debug!(count = books.len(), "Listing books");

    Json(books)
}

/// Handle POST /books
pub async fn create_book(
    State(state): State<AppState>,
    Json(input): Json<BookInput>,
) -> Result<(StatusCode, Json<Book>), AppError> {
    let fields = input.validate().map_err(invalid_input)?;
    let book = state.store.create(fields);

    tracing::info!(id = %book.id, title = %book.title, "Created book");

    Ok((StatusCode::CREATED, Json(book)))
}

/// Handle GET /books/:id
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Book>, AppError> {
    let book = state.store.get(&id)?;

    tracing::debug!(id = %book.id, "Fetched book");

    Ok(Json(book))
}

/// Handle PUT /books/:id
///
/// Replaces every field of the stored book with the supplied payload.
/// Existence is checked before payload validation, so an unknown id yields
/// 404 even when the payload is incomplete.
pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<BookInput>,
) -> Result<Json<Book>, AppError> {
    state.store.get(&id)?;

    let fields = input.validate().map_err(invalid_input)?;
    let book = state.store.update(&id, fields)?;

    tracing::info!(id = %book.id, title = %book.title, "Updated book");

    Ok(Json(book))
}

/// Handle DELETE /books/:id
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let book = state.store.remove(&id)?;

    tracing::info!(id = %book.id, title = %book.title, "Deleted book");

    Ok(StatusCode::NO_CONTENT)
}

fn invalid_input(missing: Vec<&'static str>) -> AppError {
    AppError::InvalidInput(format!(
        "missing required field(s): {}",
        missing.join(", ")
    ))
}
