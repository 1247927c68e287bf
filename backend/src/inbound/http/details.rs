//! Detail HTTP handlers.
//!
//! ```text
//! POST /data {"email":"a@x.com","name":"Ann"}
//! GET /data/{id}
//! ```
//!
//! Writes land in the primary store; reads come from the replica only, so a
//! freshly written id may answer 404 until replication catches up.

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::{
    Detail, DetailDraft, DetailId, DetailValidationError, Error, replica_not_found,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Message returned once the primary write commits.
pub const DETAIL_CREATED_MESSAGE: &str = "Data added successfully to primary database";
/// Message returned alongside a replica read.
pub const DETAIL_RETRIEVED_MESSAGE: &str = "Data retrieved from replica database";

/// Request payload for `POST /data`.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CreateDetailRequest {
    #[schema(example = "a@x.com", max_length = 255)]
    pub email: String,
    #[serde(default)]
    #[schema(example = "Ann", max_length = 100)]
    pub name: Option<String>,
}

impl TryFrom<CreateDetailRequest> for DetailDraft {
    type Error = DetailValidationError;

    fn try_from(value: CreateDetailRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(value.email, value.name)
    }
}

/// Response payload for `POST /data`.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CreateDetailResponse {
    #[schema(example = "Data added successfully to primary database")]
    pub msg: String,
    /// Identifier assigned by the primary store.
    pub id: i32,
    pub email: String,
    pub name: Option<String>,
}

/// Stored fields of a detail.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct DetailBody {
    pub id: i32,
    pub email: String,
    pub name: Option<String>,
}

impl From<&Detail> for DetailBody {
    fn from(value: &Detail) -> Self {
        Self {
            id: value.id().get(),
            email: value.email().to_string(),
            name: value.name().map(|name| name.as_ref().to_owned()),
        }
    }
}

/// Response payload for `GET /data/{id}`.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct GetDetailResponse {
    #[schema(example = "success")]
    pub status: String,
    #[schema(example = "Data retrieved from replica database")]
    pub message: String,
    pub data: DetailBody,
}

fn map_detail_validation_error(err: DetailValidationError) -> Error {
    let (field, code) = match err {
        DetailValidationError::EmptyEmail => ("email", "empty_email"),
        DetailValidationError::EmailTooLong { .. } => ("email", "email_too_long"),
        DetailValidationError::NameTooLong { .. } => ("name", "name_too_long"),
    };
    Error::invalid_request(err.to_string()).with_details(json!({ "field": field, "code": code }))
}

/// Write a detail to the primary store and schedule its replica copy.
///
/// The response reports the primary id; the replica assigns its own id when
/// the delayed copy lands.
#[utoipa::path(
    post,
    path = "/data",
    request_body = CreateDetailRequest,
    responses(
        (status = 200, description = "Written to primary", body = CreateDetailResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 500, description = "Primary write failed", body = ErrorSchema)
    ),
    tags = ["details"],
    operation_id = "createDetail"
)]
#[post("/data")]
pub async fn create_detail(
    state: web::Data<HttpState>,
    payload: web::Json<CreateDetailRequest>,
) -> ApiResult<web::Json<CreateDetailResponse>> {
    let draft = DetailDraft::try_from(payload.into_inner()).map_err(map_detail_validation_error)?;
    let detail = state.details.create_detail(draft).await?;
    let DetailBody { id, email, name } = DetailBody::from(&detail);
    Ok(web::Json(CreateDetailResponse {
        msg: DETAIL_CREATED_MESSAGE.to_owned(),
        id,
        email,
        name,
    }))
}

/// Read a detail from the replica store.
///
/// Any integer id is accepted; ids outside the column's range answer 404
/// without querying the replica.
#[utoipa::path(
    get,
    path = "/data/{id}",
    params(("id" = i64, Path, description = "Detail identifier")),
    responses(
        (status = 200, description = "Found in replica", body = GetDetailResponse),
        (status = 400, description = "Identifier is not an integer", body = ErrorSchema),
        (status = 404, description = "Not (yet) in replica", body = ErrorSchema),
        (status = 500, description = "Replica read failed", body = ErrorSchema)
    ),
    tags = ["details"],
    operation_id = "getDetail"
)]
#[get("/data/{id}")]
pub async fn get_detail(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<GetDetailResponse>> {
    let raw = path.into_inner();
    let id = i32::try_from(raw)
        .map(DetailId::new)
        .map_err(|_| replica_not_found(raw))?;
    let detail = state.details_query.get_detail(id).await?;
    Ok(web::Json(GetDetailResponse {
        status: "success".to_owned(),
        message: DETAIL_RETRIEVED_MESSAGE.to_owned(),
        data: DetailBody::from(&detail),
    }))
}

#[cfg(test)]
#[path = "details_tests.rs"]
mod tests;
