//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] generates the OpenAPI specification for the REST API: every
//! resource endpoint, the auth endpoints, the health probes, and the schema
//! components, secured by the session cookie issued at login. The document
//! feeds Swagger UI in debug builds.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::{Book, BookFields, DeletionReceipt, Movie, MovieFields, Painting, PaintingFields, Role};
use crate::inbound::http::auth::LoginRequest;
use crate::inbound::http::error::NotFoundBody;

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /api/login.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Shelfmark catalogue API",
        description = "Role-gated CRUD over books, movies, and paintings."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::auth::login,
        crate::inbound::http::auth::logout,
        crate::inbound::http::books::list_books,
        crate::inbound::http::books::get_book,
        crate::inbound::http::books::post_book,
        crate::inbound::http::books::update_book,
        crate::inbound::http::books::delete_book,
        crate::inbound::http::movies::list_movies,
        crate::inbound::http::movies::get_movie,
        crate::inbound::http::movies::post_movie,
        crate::inbound::http::movies::update_movie,
        crate::inbound::http::movies::delete_movie,
        crate::inbound::http::paintings::list_paintings,
        crate::inbound::http::paintings::get_painting,
        crate::inbound::http::paintings::post_painting,
        crate::inbound::http::paintings::update_painting,
        crate::inbound::http::paintings::delete_painting,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Book,
        BookFields,
        Movie,
        MovieFields,
        Painting,
        PaintingFields,
        DeletionReceipt,
        NotFoundBody,
        LoginRequest,
        Role,
    )),
    tags(
        (name = "auth", description = "Session establishment"),
        (name = "books", description = "Book catalogue"),
        (name = "movies", description = "Movie catalogue"),
        (name = "paintings", description = "Painting catalogue"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use utoipa::OpenApi;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    use super::*;

    /// Assert that an Object schema contains a field with the given name.
    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[test]
    fn openapi_not_found_schema_uses_the_wire_field_name() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let schema = schemas.get("NotFoundBody").expect("NotFoundBody schema");

        assert_object_schema_has_field(schema, "type");
        assert_object_schema_has_field(schema, "message");
    }

    #[test]
    fn openapi_registers_every_resource_collection_path() {
        let doc = ApiDoc::openapi();
        for path in ["/api/books/all", "/api/movies/all", "/api/painting/all"] {
            assert!(
                doc.paths.paths.contains_key(path),
                "document should describe {path}"
            );
        }
    }
}
