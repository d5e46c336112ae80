//! Book endpoints under `/api/books`.
//!
//! ```text
//! GET    /api/books/all
//! GET    /api/books?id=7
//! POST   /api/books/post?title=…&author=…&description=…&genre=…
//! PUT    /api/books?id=7        (JSON body: full field set)
//! DELETE /api/books?id=7
//! ```

use actix_web::{delete, get, post, put, web};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::domain::{Book, BookFields, DeletionReceipt};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Key query parameter for single-record book operations.
#[derive(Debug, Deserialize, IntoParams)]
pub struct BookKey {
    /// Store-assigned numeric identity.
    pub id: i64,
}

/// Field set accepted by `POST /api/books/post` as query parameters.
#[derive(Debug, Deserialize, IntoParams)]
pub struct NewBookParams {
    pub title: String,
    pub author: String,
    pub description: String,
    pub genre: String,
}

impl From<NewBookParams> for BookFields {
    fn from(params: NewBookParams) -> Self {
        let NewBookParams {
            title,
            author,
            description,
            genre,
        } = params;
        Self {
            title,
            author,
            description,
            genre,
        }
    }
}

/// List all books.
#[utoipa::path(
    get,
    path = "/api/books/all",
    responses(
        (status = 200, description = "All stored books", body = [Book]),
        (status = 403, description = "Caller lacks the user role")
    ),
    tags = ["books"],
    operation_id = "listBooks"
)]
#[get("/all")]
pub async fn list_books(
    session: SessionContext,
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<Book>>> {
    let caller = session.caller()?;
    Ok(web::Json(state.books.list(&caller).await?))
}

/// Get a single book.
#[utoipa::path(
    get,
    path = "/api/books",
    params(BookKey),
    responses(
        (status = 200, description = "The matching book", body = Book),
        (status = 403, description = "Caller lacks the user role"),
        (status = 404, description = "No book under that id")
    ),
    tags = ["books"],
    operation_id = "getBook"
)]
#[get("")]
pub async fn get_book(
    session: SessionContext,
    state: web::Data<HttpState>,
    query: web::Query<BookKey>,
) -> ApiResult<web::Json<Book>> {
    let caller = session.caller()?;
    Ok(web::Json(state.books.get(&caller, &query.id).await?))
}

/// Create a new book; the store assigns the id.
#[utoipa::path(
    post,
    path = "/api/books/post",
    params(NewBookParams),
    responses(
        (status = 200, description = "The stored book with its assigned id", body = Book),
        (status = 403, description = "Caller lacks the admin role")
    ),
    tags = ["books"],
    operation_id = "postBook"
)]
#[post("/post")]
pub async fn post_book(
    session: SessionContext,
    state: web::Data<HttpState>,
    params: web::Query<NewBookParams>,
) -> ApiResult<web::Json<Book>> {
    let caller = session.caller()?;
    let draft = Book::draft(params.into_inner().into());
    Ok(web::Json(state.books.create(&caller, draft).await?))
}

/// Replace every data field of a single book.
#[utoipa::path(
    put,
    path = "/api/books",
    params(BookKey),
    request_body = BookFields,
    responses(
        (status = 200, description = "The updated book", body = Book),
        (status = 403, description = "Caller lacks the admin role"),
        (status = 404, description = "No book under that id")
    ),
    tags = ["books"],
    operation_id = "updateBook"
)]
#[put("")]
pub async fn update_book(
    session: SessionContext,
    state: web::Data<HttpState>,
    query: web::Query<BookKey>,
    body: web::Json<BookFields>,
) -> ApiResult<web::Json<Book>> {
    let caller = session.caller()?;
    Ok(web::Json(
        state
            .books
            .update(&caller, &query.id, body.into_inner())
            .await?,
    ))
}

/// Delete a single book.
#[utoipa::path(
    delete,
    path = "/api/books",
    params(BookKey),
    responses(
        (status = 200, description = "Deletion confirmation", body = DeletionReceipt),
        (status = 403, description = "Caller lacks the admin role"),
        (status = 404, description = "No book under that id")
    ),
    tags = ["books"],
    operation_id = "deleteBook"
)]
#[delete("")]
pub async fn delete_book(
    session: SessionContext,
    state: web::Data<HttpState>,
    query: web::Query<BookKey>,
) -> ApiResult<web::Json<DeletionReceipt>> {
    let caller = session.caller()?;
    Ok(web::Json(state.books.delete(&caller, &query.id).await?))
}
