//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while letting actix
//! handlers turn domain failures into consistent status codes. Only a
//! lookup miss carries a body; role failures are bare statuses, and store
//! detail is logged rather than leaked.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::domain::Error;

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Wire shape of a 404 body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct NotFoundBody {
    /// Failure class, always `EntityNotFoundException`.
    #[serde(rename = "type")]
    pub kind: String,
    /// `"<EntityType> with id <key> not found"`.
    pub message: String,
}

impl NotFoundBody {
    fn for_error(error: &Error) -> Self {
        Self {
            kind: "EntityNotFoundException".into(),
            message: error.to_string(),
        }
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::Unavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            Self::NotFound { .. } => {
                HttpResponse::build(self.status_code()).json(NotFoundBody::for_error(self))
            }
            Self::Unavailable { message } | Self::Internal { message } => {
                // Do not leak store detail to clients.
                error!(error = %message, "request failed on the record store");
                HttpResponse::build(self.status_code()).finish()
            }
            Self::Forbidden { .. } | Self::Unauthorized { .. } => {
                HttpResponse::build(self.status_code()).finish()
            }
        }
    }
}
