// src/handlers/address.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    common::{error::AppError, pagination::Pagination},
    config::AppState,
    models::address::{Address, CreateAddressPayload},
};

// POST /address
#[utoipa::path(
    post,
    path = "/address",
    tag = "Addresses",
    request_body = CreateAddressPayload,
    responses(
        (status = 201, description = "Endereço criado", body = Address),
        (status = 404, description = "Pessoa não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_address(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateAddressPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let address = app_state.address_service.create_address(&payload).await?;

    Ok((StatusCode::CREATED, Json(address)))
}

// GET /address/person/{personId}?page=&limit=
#[utoipa::path(
    get,
    path = "/address/person/{personId}",
    tag = "Addresses",
    params(
        ("personId" = i32, Path, description = "ID da pessoa"),
        Pagination
    ),
    responses(
        (status = 200, description = "Endereços da pessoa", body = Vec<Address>)
    ),
    security(("api_jwt" = []))
)]
pub async fn find_addresses_by_person(
    State(app_state): State<AppState>,
    Path(person_id): Path<i32>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Vec<Address>>, AppError> {
    pagination.validate()?;

    let addresses = app_state
        .address_service
        .find_by_person(person_id, pagination)
        .await?;

    Ok(Json(addresses))
}
