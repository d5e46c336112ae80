//! Login and logout endpoints establishing the caller's role set.
//!
//! Credential checks stay here so the resource handlers only deal with
//! request/response mapping. The fixture table stands in for a real
//! identity provider, which is outside this service's scope.

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};

use crate::domain::{Error, Role, RoleSet};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;

/// Login request body for `POST /api/login`.
///
/// Example JSON: `{"username":"admin","password":"password"}`
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Resolve a role set for the supplied credentials.
pub fn authenticate(credentials: &LoginRequest) -> ApiResult<RoleSet> {
    match (credentials.username.as_str(), credentials.password.as_str()) {
        ("admin", "password") => Ok(RoleSet::from_roles([Role::User, Role::Admin])),
        ("user", "password") => Ok(RoleSet::from_roles([Role::User])),
        _ => Err(Error::unauthorized("invalid credentials")),
    }
}

/// Authenticate the caller and persist their role set in the session.
#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login success", headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 401, description = "Invalid credentials")
    ),
    tags = ["auth"],
    operation_id = "login",
    security([])
)]
#[post("/login")]
pub async fn login(
    session: SessionContext,
    payload: web::Json<LoginRequest>,
) -> ApiResult<HttpResponse> {
    let roles = authenticate(&payload)?;
    session.persist_roles(&roles)?;
    Ok(HttpResponse::Ok().finish())
}

/// Drop the caller's session.
#[utoipa::path(
    post,
    path = "/api/logout",
    responses((status = 200, description = "Session cleared")),
    tags = ["auth"],
    operation_id = "logout",
    security([])
)]
#[post("/logout")]
pub async fn logout(session: SessionContext) -> HttpResponse {
    session.clear();
    HttpResponse::Ok().finish()
}
