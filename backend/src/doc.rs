//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint of the inbound layer together
//! with the schema wrappers for domain types ([`ErrorSchema`],
//! [`ErrorCodeSchema`]). Swagger UI serves it in debug builds and
//! `cargo run --bin openapi-dump` prints it for external tooling.

use crate::inbound::http::details::{
    CreateDetailRequest, CreateDetailResponse, DetailBody, GetDetailResponse,
};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::users::{CreateUserRequest, CreateUserResponse};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Detail relay API",
        description = "Writes details to a primary store and serves reads from a delayed replica."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::details::create_detail,
        crate::inbound::http::details::get_detail,
        crate::inbound::http::users::create_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        CreateDetailRequest,
        CreateDetailResponse,
        DetailBody,
        GetDetailResponse,
        CreateUserRequest,
        CreateUserResponse,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "details", description = "Primary writes and replica reads"),
        (name = "users", description = "User payload echo"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
