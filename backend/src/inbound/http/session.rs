//! Session helpers to keep HTTP handlers free of framework-specific logic.
//!
//! A thin wrapper around actix sessions so handlers only deal with the
//! caller's role set. Role resolution happens here, before any request
//! reaches the domain services; the services re-check preconditions against
//! the explicit set they are handed.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;

use crate::domain::{Error, Role, RoleSet};

pub(crate) const ROLES_KEY: &str = "roles";

/// Newtype wrapper exposing higher-level session operations.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    /// Construct a new wrapper from the underlying actix session.
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Persist the authenticated caller's role set in the session cookie.
    pub fn persist_roles(&self, roles: &RoleSet) -> Result<(), Error> {
        self.0
            .insert(ROLES_KEY, roles)
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }

    /// Resolve the caller's role set. Anonymous or tampered sessions yield
    /// the empty set and fail the services' preconditions downstream.
    pub fn caller(&self) -> Result<RoleSet, Error> {
        let roles = self
            .0
            .get::<Vec<Role>>(ROLES_KEY)
            .map_err(|error| {
                tracing::warn!("unreadable role set in session cookie: {error}");
                error
            })
            .unwrap_or_default();
        Ok(roles.map_or_else(RoleSet::anonymous, RoleSet::from_roles))
    }

    /// Drop the session, ending any authenticated state.
    pub fn clear(&self) {
        self.0.purge();
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}
