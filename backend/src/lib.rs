//! Shelfmark: a role-gated REST catalogue over books, movies, and paintings.
//!
//! The layout follows hexagonal lines: `domain` holds the transport-agnostic
//! CRUD engine and its ports, `inbound` the actix-web adapter, `outbound`
//! the persistence adapters, and `server` the wiring.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
