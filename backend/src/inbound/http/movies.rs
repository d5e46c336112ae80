//! Movie endpoints under `/api/movies`.
//!
//! Same shape as the book endpoints, except the identity is a
//! caller-assigned string supplied on creation.

use actix_web::{delete, get, post, put, web};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::domain::{DeletionReceipt, Movie, MovieFields};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Key query parameter for single-record movie operations. Kept as a string
/// so spellings like `0000000` survive verbatim.
#[derive(Debug, Deserialize, IntoParams)]
pub struct MovieKey {
    pub id: String,
}

/// Field set accepted by `POST /api/movies/post`, identity included.
#[derive(Debug, Deserialize, IntoParams)]
pub struct NewMovieParams {
    pub id: String,
    pub title: String,
    pub director: String,
    pub release_year: i64,
}

impl From<NewMovieParams> for Movie {
    fn from(params: NewMovieParams) -> Self {
        let NewMovieParams {
            id,
            title,
            director,
            release_year,
        } = params;
        Self {
            id,
            title,
            director,
            release_year,
        }
    }
}

/// List all movies.
#[utoipa::path(
    get,
    path = "/api/movies/all",
    responses(
        (status = 200, description = "All stored movies", body = [Movie]),
        (status = 403, description = "Caller lacks the user role")
    ),
    tags = ["movies"],
    operation_id = "listMovies"
)]
#[get("/all")]
pub async fn list_movies(
    session: SessionContext,
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<Movie>>> {
    let caller = session.caller()?;
    Ok(web::Json(state.movies.list(&caller).await?))
}

/// Get a single movie.
#[utoipa::path(
    get,
    path = "/api/movies",
    params(MovieKey),
    responses(
        (status = 200, description = "The matching movie", body = Movie),
        (status = 403, description = "Caller lacks the user role"),
        (status = 404, description = "No movie under that id")
    ),
    tags = ["movies"],
    operation_id = "getMovie"
)]
#[get("")]
pub async fn get_movie(
    session: SessionContext,
    state: web::Data<HttpState>,
    query: web::Query<MovieKey>,
) -> ApiResult<web::Json<Movie>> {
    let caller = session.caller()?;
    Ok(web::Json(state.movies.get(&caller, &query.id).await?))
}

/// Create a new movie under the caller-supplied id. A pre-existing id
/// follows the store's overwrite semantics; no uniqueness check runs here.
#[utoipa::path(
    post,
    path = "/api/movies/post",
    params(NewMovieParams),
    responses(
        (status = 200, description = "The stored movie", body = Movie),
        (status = 403, description = "Caller lacks the admin role")
    ),
    tags = ["movies"],
    operation_id = "postMovie"
)]
#[post("/post")]
pub async fn post_movie(
    session: SessionContext,
    state: web::Data<HttpState>,
    params: web::Query<NewMovieParams>,
) -> ApiResult<web::Json<Movie>> {
    let caller = session.caller()?;
    let draft = Movie::from(params.into_inner());
    Ok(web::Json(state.movies.create(&caller, draft).await?))
}

/// Replace every data field of a single movie.
#[utoipa::path(
    put,
    path = "/api/movies",
    params(MovieKey),
    request_body = MovieFields,
    responses(
        (status = 200, description = "The updated movie", body = Movie),
        (status = 403, description = "Caller lacks the admin role"),
        (status = 404, description = "No movie under that id")
    ),
    tags = ["movies"],
    operation_id = "updateMovie"
)]
#[put("")]
pub async fn update_movie(
    session: SessionContext,
    state: web::Data<HttpState>,
    query: web::Query<MovieKey>,
    body: web::Json<MovieFields>,
) -> ApiResult<web::Json<Movie>> {
    let caller = session.caller()?;
    Ok(web::Json(
        state
            .movies
            .update(&caller, &query.id, body.into_inner())
            .await?,
    ))
}

/// Delete a single movie.
#[utoipa::path(
    delete,
    path = "/api/movies",
    params(MovieKey),
    responses(
        (status = 200, description = "Deletion confirmation", body = DeletionReceipt),
        (status = 403, description = "Caller lacks the admin role"),
        (status = 404, description = "No movie under that id")
    ),
    tags = ["movies"],
    operation_id = "deleteMovie"
)]
#[delete("")]
pub async fn delete_movie(
    session: SessionContext,
    state: web::Data<HttpState>,
    query: web::Query<MovieKey>,
) -> ApiResult<web::Json<DeletionReceipt>> {
    let caller = session.caller()?;
    Ok(web::Json(state.movies.delete(&caller, &query.id).await?))
}
