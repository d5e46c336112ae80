//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Key, SameSite};
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use crate::ApiDoc;
use crate::domain::{Book, ResourceService};
use crate::inbound::http::auth::{login, logout};
use crate::inbound::http::books::{delete_book, get_book, list_books, post_book, update_book};
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::movies::{
    delete_movie, get_movie, list_movies, post_movie, update_movie,
};
use crate::inbound::http::paintings::{
    delete_painting, get_painting, list_paintings, post_painting, update_painting,
};
use crate::inbound::http::state::HttpState;
use crate::outbound::persistence::{
    DbPool, DieselBookStore, DieselMovieStore, DieselPaintingStore, MemoryRecordStore,
};

/// Build the handler state from the configured persistence backend.
///
/// With a pool, every resource is served from its Diesel store; without
/// one, from in-memory stores (the no-database mode used by tests and local
/// runs).
pub fn build_state(db_pool: Option<&DbPool>) -> HttpState {
    match db_pool {
        Some(pool) => HttpState {
            books: ResourceService::new(Arc::new(DieselBookStore::new(pool.clone()))),
            movies: ResourceService::new(Arc::new(DieselMovieStore::new(pool.clone()))),
            paintings: ResourceService::new(Arc::new(DieselPaintingStore::new(pool.clone()))),
        },
        None => memory_state(),
    }
}

/// Handler state over fresh in-memory stores. Books get a sequence hook
/// standing in for the database serial.
pub fn memory_state() -> HttpState {
    HttpState {
        books: ResourceService::new(Arc::new(MemoryRecordStore::with_key_assigner(
            |book: &mut Book, next| {
                if book.id == Book::UNASSIGNED {
                    book.id = next;
                }
            },
        ))),
        movies: ResourceService::new(Arc::new(MemoryRecordStore::new())),
        paintings: ResourceService::new(Arc::new(MemoryRecordStore::new())),
    }
}

/// Assemble the application: session middleware on the `/api` scope, the
/// three resource scopes, login/logout, health probes, and (debug builds)
/// Swagger UI.
pub fn build_app(
    state: HttpState,
    health_state: web::Data<HealthState>,
    key: Key,
    cookie_secure: bool,
    same_site: SameSite,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let session = SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name("session".into())
        .cookie_path("/".into())
        .cookie_secure(cookie_secure)
        .cookie_http_only(true)
        .cookie_same_site(same_site)
        .build();

    let api = web::scope("/api")
        .wrap(session)
        .service(login)
        .service(logout)
        .service(
            web::scope("/books")
                .service(list_books)
                .service(post_book)
                .service(get_book)
                .service(update_book)
                .service(delete_book),
        )
        .service(
            web::scope("/movies")
                .service(list_movies)
                .service(post_movie)
                .service(get_movie)
                .service(update_movie)
                .service(delete_movie),
        )
        .service(
            web::scope("/painting")
                .service(list_paintings)
                .service(post_painting)
                .service(get_painting)
                .service(update_painting)
                .service(delete_painting),
        );

    let app = App::new()
        .app_data(web::Data::new(state))
        .app_data(health_state)
        .service(api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Bind and start the server described by `config`.
///
/// # Errors
///
/// Returns [`std::io::Error`] when the bind address cannot be claimed.
pub fn run(config: ServerConfig) -> std::io::Result<Server> {
    let ServerConfig {
        key,
        cookie_secure,
        same_site,
        bind_addr,
        db_pool,
    } = config;

    let state = build_state(db_pool.as_ref());
    let health_state = web::Data::new(HealthState::new());
    // Clone for the server factory so the readiness probe stays reachable.
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        build_app(
            state.clone(),
            server_health_state.clone(),
            key.clone(),
            cookie_secure,
            same_site,
        )
    })
    .bind(bind_addr)?;

    health_state.mark_ready();
    Ok(server.run())
}
