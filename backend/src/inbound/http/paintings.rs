//! Painting endpoints under `/api/painting`.
//!
//! The path is singular and the key parameter is named `code`, matching the
//! public API this service replaces.

use actix_web::{delete, get, post, put, web};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::domain::{DeletionReceipt, Painting, PaintingFields};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Key query parameter for single-record painting operations.
#[derive(Debug, Deserialize, IntoParams)]
pub struct PaintingKey {
    pub code: String,
}

/// Field set accepted by `POST /api/painting/post`, identity included.
#[derive(Debug, Deserialize, IntoParams)]
pub struct NewPaintingParams {
    pub code: String,
    pub name: String,
    pub artist: String,
    pub year: i32,
    pub medium: String,
    pub period: String,
}

impl From<NewPaintingParams> for Painting {
    fn from(params: NewPaintingParams) -> Self {
        let NewPaintingParams {
            code,
            name,
            artist,
            year,
            medium,
            period,
        } = params;
        Self {
            code,
            name,
            artist,
            year,
            medium,
            period,
        }
    }
}

/// List all paintings.
#[utoipa::path(
    get,
    path = "/api/painting/all",
    responses(
        (status = 200, description = "All stored paintings", body = [Painting]),
        (status = 403, description = "Caller lacks the user role")
    ),
    tags = ["paintings"],
    operation_id = "listPaintings"
)]
#[get("/all")]
pub async fn list_paintings(
    session: SessionContext,
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<Painting>>> {
    let caller = session.caller()?;
    Ok(web::Json(state.paintings.list(&caller).await?))
}

/// Get a single painting.
#[utoipa::path(
    get,
    path = "/api/painting",
    params(PaintingKey),
    responses(
        (status = 200, description = "The matching painting", body = Painting),
        (status = 403, description = "Caller lacks the user role"),
        (status = 404, description = "No painting under that code")
    ),
    tags = ["paintings"],
    operation_id = "getPainting"
)]
#[get("")]
pub async fn get_painting(
    session: SessionContext,
    state: web::Data<HttpState>,
    query: web::Query<PaintingKey>,
) -> ApiResult<web::Json<Painting>> {
    let caller = session.caller()?;
    Ok(web::Json(state.paintings.get(&caller, &query.code).await?))
}

/// Create a new painting under the caller-supplied code.
#[utoipa::path(
    post,
    path = "/api/painting/post",
    params(NewPaintingParams),
    responses(
        (status = 200, description = "The stored painting", body = Painting),
        (status = 403, description = "Caller lacks the admin role")
    ),
    tags = ["paintings"],
    operation_id = "postPainting"
)]
#[post("/post")]
pub async fn post_painting(
    session: SessionContext,
    state: web::Data<HttpState>,
    params: web::Query<NewPaintingParams>,
) -> ApiResult<web::Json<Painting>> {
    let caller = session.caller()?;
    let draft = Painting::from(params.into_inner());
    Ok(web::Json(state.paintings.create(&caller, draft).await?))
}

/// Replace every data field of a single painting. A `code` in the body is
/// ignored; the stored identity is kept.
#[utoipa::path(
    put,
    path = "/api/painting",
    params(PaintingKey),
    request_body = PaintingFields,
    responses(
        (status = 200, description = "The updated painting", body = Painting),
        (status = 403, description = "Caller lacks the admin role"),
        (status = 404, description = "No painting under that code")
    ),
    tags = ["paintings"],
    operation_id = "updatePainting"
)]
#[put("")]
pub async fn update_painting(
    session: SessionContext,
    state: web::Data<HttpState>,
    query: web::Query<PaintingKey>,
    body: web::Json<PaintingFields>,
) -> ApiResult<web::Json<Painting>> {
    let caller = session.caller()?;
    Ok(web::Json(
        state
            .paintings
            .update(&caller, &query.code, body.into_inner())
            .await?,
    ))
}

/// Delete a single painting.
#[utoipa::path(
    delete,
    path = "/api/painting",
    params(PaintingKey),
    responses(
        (status = 200, description = "Deletion confirmation", body = DeletionReceipt),
        (status = 403, description = "Caller lacks the admin role"),
        (status = 404, description = "No painting under that code")
    ),
    tags = ["paintings"],
    operation_id = "deletePainting"
)]
#[delete("")]
pub async fn delete_painting(
    session: SessionContext,
    state: web::Data<HttpState>,
    query: web::Query<PaintingKey>,
) -> ApiResult<web::Json<DeletionReceipt>> {
    let caller = session.caller()?;
    Ok(web::Json(
        state.paintings.delete(&caller, &query.code).await?,
    ))
}
