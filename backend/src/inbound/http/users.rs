//! User echo handler.
//!
//! ```text
//! POST /create_user/ {"user_id":1,"username":"testuser"}
//! ```
//!
//! Nothing is persisted; the payload is returned as received.

use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;

/// Acknowledgement returned by `POST /create_user/`.
pub const USER_RECEIVED_MESSAGE: &str = "we got data succesfully";

/// Request payload for `POST /create_user/`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct CreateUserRequest {
    #[schema(example = 1)]
    pub user_id: i64,
    #[schema(example = "testuser")]
    pub username: String,
}

/// Response payload echoing the submitted user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct CreateUserResponse {
    #[schema(example = "we got data succesfully")]
    pub msg: String,
    pub user_id: i64,
    pub username: String,
}

/// Echo a user payload back to the caller.
#[utoipa::path(
    post,
    path = "/create_user/",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "Payload received", body = CreateUserResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/create_user/")]
pub async fn create_user(
    payload: web::Json<CreateUserRequest>,
) -> ApiResult<web::Json<CreateUserResponse>> {
    let CreateUserRequest { user_id, username } = payload.into_inner();
    Ok(web::Json(CreateUserResponse {
        msg: USER_RECEIVED_MESSAGE.to_owned(),
        user_id,
        username,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbound::http::error::json_error_handler;
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use rstest::rstest;
    use serde_json::{Value, json};

    #[rstest]
    #[actix_web::test]
    async fn create_user_echoes_payload() {
        let app = actix_test::init_service(App::new().service(create_user)).await;

        let request = actix_test::TestRequest::post()
            .uri("/create_user/")
            .set_json(json!({ "user_id": 1, "username": "testuser" }))
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(
            body,
            json!({ "msg": "we got data succesfully", "user_id": 1, "username": "testuser" })
        );
    }

    #[rstest]
    #[case(json!({ "username": "testuser" }))]
    #[case(json!({ "user_id": "one", "username": "testuser" }))]
    #[actix_web::test]
    async fn create_user_rejects_malformed_payload(#[case] payload: Value) {
        let app = actix_test::init_service(
            App::new()
                .app_data(web::JsonConfig::default().error_handler(json_error_handler))
                .service(create_user),
        )
        .await;

        let request = actix_test::TestRequest::post()
            .uri("/create_user/")
            .set_json(payload)
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
