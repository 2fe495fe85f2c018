//! HTTP routes for the books module.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use biblio_http::error::ApiError;
use biblio_http::extract::AppJson;

use crate::modules::books::models::{Book, NewBook};
use crate::modules::books::store::StoreError;
use crate::state::AppState;
use crate::utils::is_truthy;

/// Registers the books module routes on the shared application state.
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/books", get(list_books))
        .route("/add", post(create_book))
        .route("/books/{id}", get(book_details))
        .route("/books/{id}/update", put(update_book))
        .route("/books/{id}/delete", delete(delete_book))
        .with_state(state)
}

#[derive(Serialize)]
struct BookResponse {
    message: &'static str,
    book: Book,
}

#[derive(Serialize)]
struct MessageResponse {
    message: &'static str,
}

/// Create payload. Every field is optional at the wire level; the presence
/// rules in [`CreateBookRequest::into_new_book`] decide what counts as
/// supplied.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateBookRequest {
    title: Option<String>,
    author: Option<String>,
    publish_year: Option<i32>,
    price: Option<f64>,
    genre: Option<String>,
}

impl CreateBookRequest {
    /// Applies the presence rules: a required field counts as supplied only
    /// when it is non-empty and non-zero. Genre passes through untouched.
    fn into_new_book(self) -> Option<NewBook> {
        let title = self.title.filter(|title| !title.is_empty())?;
        let author = self.author.filter(|author| !author.is_empty())?;
        let publish_year = self.publish_year.filter(|year| *year != 0)?;
        let price = self.price.filter(|price| *price != 0.0)?;
        Some(NewBook {
            title,
            author,
            publish_year,
            price,
            genre: self.genre,
        })
    }
}

/// Update payload. Fields stay raw JSON values so that each one can apply
/// its own presence and shape rules.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateBookRequest {
    title: Option<Value>,
    author: Option<Value>,
    publish_year: Option<Value>,
    price: Option<Value>,
    genre: Option<Value>,
}

async fn list_books(State(state): State<AppState>) -> Result<Json<Vec<Book>>, ApiError> {
    let books = state
        .store
        .find_all()
        .await
        .map_err(|err| ApiError::internal("Error retrieving books", err))?;
    Ok(Json(books))
}

async fn create_book(
    State(state): State<AppState>,
    AppJson(request): AppJson<CreateBookRequest>,
) -> Result<(StatusCode, Json<BookResponse>), ApiError> {
    let book = request.into_new_book().ok_or_else(|| {
        ApiError::bad_request("All fields (title, author, publishYear, price) are required")
    })?;

    // The duplicate check runs on the values as supplied, before the store
    // trims them.
    let existing = state
        .store
        .find_one(&book.title, &book.author)
        .await
        .map_err(|err| ApiError::internal("Error adding book", err))?;
    if existing.is_some() {
        return Err(ApiError::bad_request(
            "A book with the same title and author already exists",
        ));
    }

    let book = state.store.insert(book).await.map_err(|err| match err {
        StoreError::Validation(errors) => {
            ApiError::bad_request(format!("Validation error: {errors}"))
        }
        other => ApiError::internal("Error adding book", other),
    })?;

    Ok((
        StatusCode::CREATED,
        Json(BookResponse {
            message: "Book added successfully",
            book,
        }),
    ))
}

async fn book_details(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Book>, ApiError> {
    let book = state.store.find_by_id(&id).await.map_err(|err| match err {
        StoreError::MalformedId(_) => ApiError::bad_request("Invalid book ID format"),
        other => ApiError::internal("Error retrieving book details", other),
    })?;

    let book = book.ok_or_else(|| ApiError::not_found("Book not found"))?;
    Ok(Json(book))
}

async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(changes): AppJson<UpdateBookRequest>,
) -> Result<Json<BookResponse>, ApiError> {
    // A malformed identifier is not distinguished here; it surfaces as the
    // generic update failure.
    let book = state
        .store
        .find_by_id(&id)
        .await
        .map_err(|err| ApiError::internal("Error updating book", err))?;

    let mut book = book.ok_or_else(|| ApiError::not_found("Book not found"))?;
    apply_update(&mut book, &changes)?;

    let book = state
        .store
        .save(book)
        .await
        .map_err(|err| ApiError::internal("Error updating book", err))?;

    Ok(Json(BookResponse {
        message: "Book updated successfully",
        book,
    }))
}

async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let removed = state
        .store
        .delete_by_id(&id)
        .await
        .map_err(|err| match err {
            StoreError::MalformedId(_) => ApiError::bad_request("Invalid ID"),
            other => ApiError::internal("Error deleting the book", other),
        })?;

    if !removed {
        return Err(ApiError::not_found("Book not found"));
    }

    Ok(Json(MessageResponse {
        message: "Book successfully deleted",
    }))
}

/// Applies the supplied fields to the record. Absent and falsy values are
/// skipped; a value that fails its field rule aborts the whole update.
fn apply_update(book: &mut Book, changes: &UpdateBookRequest) -> Result<(), ApiError> {
    if let Some(title) = changes.title.as_ref().filter(|value| is_truthy(value)) {
        book.title = text_value(title).ok_or_else(|| {
            ApiError::bad_request("Title must be a non-empty string and cannot be a number")
        })?;
    }

    if let Some(author) = changes.author.as_ref().filter(|value| is_truthy(value)) {
        book.author = text_value(author).ok_or_else(|| {
            ApiError::bad_request("Author must be a non-empty string and cannot be a number")
        })?;
    }

    if let Some(publish_year) = changes.publish_year.as_ref().filter(|value| is_truthy(value)) {
        book.publish_year = year_value(publish_year)
            .ok_or_else(|| ApiError::bad_request("Publish year must be a positive integer"))?;
    }

    if let Some(price) = changes.price.as_ref().filter(|value| is_truthy(value)) {
        book.price = price_value(price)
            .ok_or_else(|| ApiError::bad_request("Price must be a positive number"))?;
    }

    if let Some(genre) = changes.genre.as_ref().filter(|value| is_truthy(value)) {
        book.genre = Some(genre_value(genre).ok_or_else(|| {
            ApiError::bad_request("Genre must be a non-empty string if provided")
        })?);
    }

    Ok(())
}

/// Accepts a non-empty string that does not read as a number. The raw value
/// is kept; trimming happens at save time.
fn text_value(value: &Value) -> Option<String> {
    let text = value.as_str()?;
    if text.trim().is_empty() || reads_as_number(text) {
        return None;
    }
    Some(text.to_string())
}

/// A string reads as a number when the whole trimmed text parses as one.
/// "NaN" itself is not a numeric value here.
fn reads_as_number(text: &str) -> bool {
    text.trim()
        .parse::<f64>()
        .map(|number| !number.is_nan())
        .unwrap_or(false)
}

/// Accepts a positive whole number that fits the year field.
fn year_value(value: &Value) -> Option<i32> {
    let number = value.as_f64()?;
    if number <= 0.0 || number.fract() != 0.0 || number > f64::from(i32::MAX) {
        return None;
    }
    Some(number as i32)
}

/// Accepts a strictly positive number.
fn price_value(value: &Value) -> Option<f64> {
    value.as_f64().filter(|number| *number > 0.0)
}

/// Accepts a non-empty string. Unlike titles, numeric text is allowed.
fn genre_value(value: &Value) -> Option<String> {
    let text = value.as_str()?;
    if text.trim().is_empty() {
        return None;
    }
    Some(text.to_string())
}
