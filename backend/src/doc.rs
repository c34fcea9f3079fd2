//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] aggregate that generates the OpenAPI specification
//! for the REST API: the user CRUD endpoints, the health probes, and the
//! shared transport schemas. Swagger UI serves the document at `/docs` in
//! debug builds only.

use utoipa::OpenApi;

use crate::domain::UserView;
use crate::inbound::http::error::ErrorBody;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User service API",
        description = "CRUD operations over an in-memory user store."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(UserView, ErrorBody)),
    tags(
        (name = "users", description = "CRUD operations on the user resource"),
        (name = "health", description = "Liveness and readiness probes")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::OpenApi;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

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
    fn user_view_schema_exposes_the_transport_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let schema = schemas.get("UserView").expect("UserView schema");

        for field in ["id", "name", "username", "email", "phone", "website"] {
            assert_object_schema_has_field(schema, field);
        }
    }

    #[test]
    fn error_body_schema_matches_the_envelope_contract() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let schema = schemas.get("ErrorBody").expect("ErrorBody schema");

        for field in ["message", "status", "timestamp"] {
            assert_object_schema_has_field(schema, field);
        }
    }

    #[test]
    fn all_user_paths_are_documented() {
        let doc = ApiDoc::openapi();
        for path in ["/users", "/users/{id}", "/health/ready", "/health/live"] {
            assert!(
                doc.paths.paths.contains_key(path),
                "missing documented path {path}"
            );
        }
    }
}
