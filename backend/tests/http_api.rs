//! End-to-end HTTP scenarios over the in-memory stores.
//!
//! Each test builds the real application (session middleware, resource
//! scopes, error mapping) and drives it through `actix_web::test`, logging
//! in first when a role is needed.

use std::sync::Arc;

use actix_web::cookie::{Cookie, Key, SameSite};
use actix_web::http::StatusCode;
use actix_web::{test, web};
use serde_json::{Value, json};

use shelfmark::domain::{Book, Painting, ResourceService};
use shelfmark::inbound::http::health::HealthState;
use shelfmark::inbound::http::state::HttpState;
use shelfmark::outbound::persistence::MemoryRecordStore;
use shelfmark::server::{build_app, memory_state};

async fn init(
    state: HttpState,
) -> impl actix_web::dev::Service<
    actix_http::Request,
    Response = actix_web::dev::ServiceResponse,
    Error = actix_web::Error,
> {
    test::init_service(build_app(
        state,
        web::Data::new(HealthState::new()),
        Key::generate(),
        false,
        SameSite::Lax,
    ))
    .await
}

/// Log in under the given fixture account and return the session cookie.
async fn login<S>(app: &S, username: &str) -> Cookie<'static>
where
    S: actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
{
    let response = test::call_service(
        app,
        test::TestRequest::post()
            .uri("/api/login")
            .set_json(json!({ "username": username, "password": "password" }))
            .to_request(),
    )
    .await;
    assert!(response.status().is_success(), "login should succeed");
    response
        .response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .expect("session cookie")
        .into_owned()
}

fn seeded_book_state() -> HttpState {
    let mut state = memory_state();
    state.books = ResourceService::new(Arc::new(MemoryRecordStore::with_records(vec![Book {
        id: 7,
        title: "Hello".into(),
        author: "me".into(),
        description: "nothing".into(),
        genre: "Action".into(),
    }])));
    state
}

#[actix_web::test]
async fn user_reads_a_seeded_book_by_id() {
    let app = init(seeded_book_state()).await;
    let cookie = login(&app, "user").await;

    let response = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/books?id=7")
            .cookie(cookie)
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(
        body,
        json!({
            "id": 7,
            "title": "Hello",
            "author": "me",
            "description": "nothing",
            "genre": "Action",
        })
    );
}

#[actix_web::test]
async fn anonymous_reads_are_forbidden_with_an_empty_body() {
    let app = init(seeded_book_state()).await;

    let response = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/books?id=7").to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = test::read_body(response).await;
    assert!(body.is_empty());
}

#[actix_web::test]
async fn deleting_an_absent_movie_returns_the_exact_error_payload() {
    let app = init(memory_state()).await;
    let cookie = login(&app, "admin").await;

    let response = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri("/api/movies?id=0000000")
            .cookie(cookie)
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(
        body,
        json!({
            "type": "EntityNotFoundException",
            "message": "Movie with id 0000000 not found",
        })
    );
}

#[actix_web::test]
async fn putting_a_painting_replaces_fields_and_keeps_the_code() {
    let mut state = memory_state();
    state.paintings = ResourceService::new(Arc::new(MemoryRecordStore::with_records(vec![
        Painting {
            code: "mona-lisa".into(),
            name: "Mona Lisa".into(),
            artist: "Leonardo".into(),
            year: 1503,
            medium: "Oil on poplar".into(),
            period: "High Renaissance".into(),
        },
    ])));
    let app = init(state).await;
    let cookie = login(&app, "admin").await;

    let response = test::call_service(
        &app,
        test::TestRequest::put()
            .uri("/api/painting?code=mona-lisa")
            .cookie(cookie.clone())
            .set_json(json!({
                "name": "Mona Lisa Painting",
                "artist": "Leonardo da Vinci",
                "year": 1517,
                "medium": "Oil",
                "period": "Renaissance",
            }))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let updated: Value = test::read_body_json(response).await;
    assert_eq!(updated["code"], "mona-lisa");
    assert_eq!(updated["name"], "Mona Lisa Painting");

    // Stored state reflects the replacement on a fresh read.
    let fetched = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/painting?code=mona-lisa")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    let body: Value = test::read_body_json(fetched).await;
    assert_eq!(body["name"], "Mona Lisa Painting");
    assert_eq!(body["year"], 1517);
    assert_eq!(body["code"], "mona-lisa");
}

#[actix_web::test]
async fn update_ignores_an_identity_supplied_in_the_body() {
    let app = init(seeded_book_state()).await;
    let cookie = login(&app, "admin").await;

    let response = test::call_service(
        &app,
        test::TestRequest::put()
            .uri("/api/books?id=7")
            .cookie(cookie)
            .set_json(json!({
                "id": 99,
                "title": "Goodbye",
                "author": "you",
                "description": "everything",
                "genre": "Drama",
            }))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["id"], 7);
    assert_eq!(body["title"], "Goodbye");
}

#[actix_web::test]
async fn book_lifecycle_create_read_update_delete() {
    let app = init(memory_state()).await;
    let cookie = login(&app, "admin").await;

    // Create via query parameters; the store assigns the id.
    let created = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/books/post?title=Hello&author=me&description=nothing&genre=Action")
            .cookie(cookie.clone())
            .to_request(),
    )
    .await;
    assert_eq!(created.status(), StatusCode::OK);
    let created: Value = test::read_body_json(created).await;
    let id = created["id"].as_i64().expect("assigned id");
    assert!(id > 0);

    // Round-trip.
    let fetched = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/books?id={id}"))
            .cookie(cookie.clone())
            .to_request(),
    )
    .await;
    let fetched: Value = test::read_body_json(fetched).await;
    assert_eq!(fetched, created);

    // Delete confirms with the key, then the record is gone.
    let deleted = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/api/books?id={id}"))
            .cookie(cookie.clone())
            .to_request(),
    )
    .await;
    assert_eq!(deleted.status(), StatusCode::OK);
    let receipt: Value = test::read_body_json(deleted).await;
    assert_eq!(
        receipt,
        json!({ "message": format!("Book with id {id} deleted") })
    );

    let missing = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/books?id={id}"))
            .cookie(cookie)
            .to_request(),
    )
    .await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn movie_creation_preserves_leading_zeros_in_the_key() {
    let app = init(memory_state()).await;
    let cookie = login(&app, "admin").await;

    let created = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/movies/post?id=0070047&title=The%20Exorcist&director=Friedkin&release_year=1973")
            .cookie(cookie.clone())
            .to_request(),
    )
    .await;
    assert_eq!(created.status(), StatusCode::OK);
    let created: Value = test::read_body_json(created).await;
    assert_eq!(created["id"], "0070047");

    let listed = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/movies/all")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    let listed: Value = test::read_body_json(listed).await;
    assert_eq!(listed, json!([{
        "id": "0070047",
        "title": "The Exorcist",
        "director": "Friedkin",
        "release_year": 1973,
    }]));
}

#[actix_web::test]
async fn readers_cannot_write() {
    let app = init(seeded_book_state()).await;
    let cookie = login(&app, "user").await;

    let create = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/books/post?title=x&author=y&description=z&genre=w")
            .cookie(cookie.clone())
            .to_request(),
    )
    .await;
    assert_eq!(create.status(), StatusCode::FORBIDDEN);

    let delete = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri("/api/books?id=7")
            .cookie(cookie.clone())
            .to_request(),
    )
    .await;
    assert_eq!(delete.status(), StatusCode::FORBIDDEN);

    // The seeded record is untouched.
    let fetched = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/books?id=7")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    assert_eq!(fetched.status(), StatusCode::OK);
}

#[actix_web::test]
async fn bad_credentials_are_rejected_without_a_session() {
    let app = init(memory_state()).await;

    let response = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/login")
            .set_json(json!({ "username": "admin", "password": "wrong" }))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(
        response
            .response()
            .cookies()
            .all(|cookie| cookie.name() != "session")
    );
}

#[actix_web::test]
async fn logout_drops_the_role_set() {
    let app = init(seeded_book_state()).await;
    let cookie = login(&app, "user").await;

    let logout = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/logout")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    assert_eq!(logout.status(), StatusCode::OK);
    let cleared = logout
        .response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .expect("clearing cookie")
        .into_owned();

    let response = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/books/all")
            .cookie(cleared)
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn health_probes_answer_without_a_session() {
    let app = init(memory_state()).await;

    let live = test::call_service(
        &app,
        test::TestRequest::get().uri("/health/live").to_request(),
    )
    .await;
    assert_eq!(live.status(), StatusCode::OK);

    // Readiness is only flagged by the full `server::run` path.
    let ready = test::call_service(
        &app,
        test::TestRequest::get().uri("/health/ready").to_request(),
    )
    .await;
    assert_eq!(ready.status(), StatusCode::SERVICE_UNAVAILABLE);
}
