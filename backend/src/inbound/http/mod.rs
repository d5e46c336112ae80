//! HTTP inbound adapter exposing the REST endpoints.

pub mod auth;
pub mod books;
pub mod error;
pub mod health;
pub mod movies;
pub mod paintings;
pub mod session;
pub mod state;

pub use error::ApiResult;
