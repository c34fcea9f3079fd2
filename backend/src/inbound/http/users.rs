//! Users API handlers.
//!
//! ```text
//! GET    /users        list all users
//! GET    /users/{id}   fetch one user
//! POST   /users        create (201; body id ignored)
//! PUT    /users/{id}   full replacement (200)
//! DELETE /users/{id}   remove (204)
//! ```
//!
//! Handlers are thin: extract, delegate to the domain
//! [`UserService`](crate::domain::UserService), and let the shared
//! `ResponseError` implementation shape every failure.

use actix_web::{HttpResponse, delete, get, post, put, web};
use tracing::{debug, info};

use crate::domain::{UserId, UserView};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::state::HttpState;

/// List all users.
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All stored users", body = [UserView]),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "getAllUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<UserView>>> {
    debug!("retrieving all users");
    let users = state.users.get_all_users().await?;
    Ok(web::Json(users))
}

/// Fetch a single user by identifier.
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = u64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "The requested user", body = UserView),
        (status = 400, description = "Malformed identifier", body = ErrorBody),
        (status = 404, description = "No user with this identifier", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "getUserById"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<UserId>,
) -> ApiResult<web::Json<UserView>> {
    let id = path.into_inner();
    debug!(id, "retrieving user");
    let user = state.users.get_user_by_id(id).await?;
    Ok(web::Json(user))
}

/// Create a user. Any identifier in the body is ignored; the store assigns
/// a fresh one.
#[utoipa::path(
    post,
    path = "/users",
    request_body = UserView,
    responses(
        (status = 201, description = "Created user with assigned id", body = UserView),
        (status = 400, description = "Missing or blank required fields", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<UserView>,
) -> ApiResult<HttpResponse> {
    let created = state.users.create_user(payload.into_inner()).await?;
    info!(id = ?created.id, "created user");
    Ok(HttpResponse::Created().json(created))
}

/// Replace the user stored under the path identifier.
#[utoipa::path(
    put,
    path = "/users/{id}",
    params(("id" = u64, Path, description = "User identifier")),
    request_body = UserView,
    responses(
        (status = 200, description = "Updated user", body = UserView),
        (status = 400, description = "Missing or blank required fields", body = ErrorBody),
        (status = 404, description = "No user with this identifier", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/users/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<UserId>,
    payload: web::Json<UserView>,
) -> ApiResult<web::Json<UserView>> {
    let id = path.into_inner();
    let updated = state.users.update_user(id, payload.into_inner()).await?;
    info!(id, "updated user");
    Ok(web::Json(updated))
}

/// Delete the user stored under the path identifier.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = u64, Path, description = "User identifier")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 400, description = "Malformed identifier", body = ErrorBody),
        (status = 404, description = "No user with this identifier", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<UserId>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    state.users.delete_user(id).await?;
    info!(id, "deleted user");
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outbound::persistence::InMemoryUserRepository;
    use crate::server::configure_api;
    use actix_web::{App, test as actix_test};
    use serde_json::{Value, json};
    use std::sync::Arc;

    fn test_app(
        repo: InMemoryUserRepository,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let state = web::Data::new(HttpState::new(Arc::new(repo)));
        App::new().configure(|cfg| configure_api(cfg, state.clone()))
    }

    async fn read_json(response: actix_web::dev::ServiceResponse) -> Value {
        let body = actix_test::read_body(response).await;
        serde_json::from_slice(&body).expect("JSON body")
    }

    #[actix_web::test]
    async fn list_on_empty_store_returns_empty_array() {
        let app = actix_test::init_service(test_app(InMemoryUserRepository::new())).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/users").to_request(),
        )
        .await;

        assert_eq!(response.status(), actix_web::http::StatusCode::OK);
        assert_eq!(read_json(response).await, json!([]));
    }

    #[actix_web::test]
    async fn get_missing_user_returns_404_envelope() {
        let app = actix_test::init_service(test_app(InMemoryUserRepository::new())).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/users/99").to_request(),
        )
        .await;

        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
        let value = read_json(response).await;
        assert_eq!(
            value.get("message").and_then(Value::as_str),
            Some("User not found with id: 99")
        );
        assert_eq!(value.get("status").and_then(Value::as_u64), Some(404));
        assert!(value.get("timestamp").and_then(Value::as_i64).is_some());
    }

    #[actix_web::test]
    async fn create_returns_201_with_assigned_id() {
        let app = actix_test::init_service(test_app(InMemoryUserRepository::new())).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/users")
                .set_json(json!({
                    "name": "A",
                    "username": "a",
                    "email": "a@x.com"
                }))
                .to_request(),
        )
        .await;

        assert_eq!(response.status(), actix_web::http::StatusCode::CREATED);
        let value = read_json(response).await;
        assert_eq!(value.get("id").and_then(Value::as_u64), Some(1));
        assert_eq!(value.get("name").and_then(Value::as_str), Some("A"));
    }

    #[actix_web::test]
    async fn create_with_blank_name_returns_400_with_field_entry() {
        let app = actix_test::init_service(test_app(InMemoryUserRepository::new())).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/users")
                .set_json(json!({
                    "name": "",
                    "username": "a",
                    "email": "a@x.com"
                }))
                .to_request(),
        )
        .await;

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
        let value = read_json(response).await;
        let errors = value.get("errors").and_then(Value::as_array).expect("errors");
        assert!(
            errors
                .iter()
                .any(|e| e.as_str().is_some_and(|s| s.starts_with("name:")))
        );
    }

    #[actix_web::test]
    async fn malformed_json_body_returns_400_envelope() {
        let app = actix_test::init_service(test_app(InMemoryUserRepository::new())).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/users")
                .insert_header(("content-type", "application/json"))
                .set_payload("{not json")
                .to_request(),
        )
        .await;

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
        let value = read_json(response).await;
        assert_eq!(
            value.get("message").and_then(Value::as_str),
            Some("Invalid JSON format in request body")
        );
    }

    #[actix_web::test]
    async fn non_numeric_id_returns_400_envelope() {
        let app = actix_test::init_service(test_app(InMemoryUserRepository::new())).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/users/abc").to_request(),
        )
        .await;

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
        let value = read_json(response).await;
        assert_eq!(
            value.get("message").and_then(Value::as_str),
            Some("Invalid parameter type provided")
        );
    }

    #[actix_web::test]
    async fn unsupported_verb_on_users_returns_405_with_allowed_methods() {
        let app = actix_test::init_service(test_app(InMemoryUserRepository::new())).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::patch().uri("/users").to_request(),
        )
        .await;

        assert_eq!(
            response.status(),
            actix_web::http::StatusCode::METHOD_NOT_ALLOWED
        );
        let value = read_json(response).await;
        let errors = value.get("errors").and_then(Value::as_array).expect("errors");
        assert!(
            errors
                .iter()
                .any(|e| e.as_str().is_some_and(|s| s.contains("GET, POST")))
        );
    }

    #[actix_web::test]
    async fn unknown_path_returns_404_envelope() {
        let app = actix_test::init_service(test_app(InMemoryUserRepository::new())).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/nothing/here").to_request(),
        )
        .await;

        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
        let value = read_json(response).await;
        assert_eq!(
            value.get("message").and_then(Value::as_str),
            Some("Resource not found")
        );
    }

    #[actix_web::test]
    async fn delete_returns_204_with_empty_body() {
        let app = actix_test::init_service(test_app(InMemoryUserRepository::with_sample_data())).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::delete().uri("/users/1").to_request(),
        )
        .await;

        assert_eq!(response.status(), actix_web::http::StatusCode::NO_CONTENT);
        let body = actix_test::read_body(response).await;
        assert!(body.is_empty());
    }

    #[actix_web::test]
    async fn absent_phone_is_serialized_as_explicit_null() {
        let app = actix_test::init_service(test_app(InMemoryUserRepository::new())).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/users")
                .set_json(json!({
                    "name": "A",
                    "username": "a",
                    "email": "a@x.com"
                }))
                .to_request(),
        )
        .await;
        let value = read_json(response).await;
        assert_eq!(value.get("phone"), Some(&Value::Null));
        assert_eq!(value.get("website"), Some(&Value::Null));
    }
}
