// src/handlers/person.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AuthenticatedUser,
    models::person::{CreatePersonPayload, Person},
};

// POST /person
#[utoipa::path(
    post,
    path = "/person",
    tag = "Persons",
    request_body = CreatePersonPayload,
    responses(
        (status = 201, description = "Pessoa criada", body = Person),
        (status = 404, description = "Usuário informado não existe"),
        (status = 409, description = "Usuário já possui pessoa")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_person(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Json(payload): Json<CreatePersonPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let person = app_state.person_service.create_person(user.id, payload).await?;

    Ok((StatusCode::CREATED, Json(person)))
}

// GET /person/{id}
#[utoipa::path(
    get,
    path = "/person/{id}",
    tag = "Persons",
    params(("id" = i32, Path, description = "ID da pessoa")),
    responses(
        (status = 200, description = "Pessoa encontrada", body = Person),
        (status = 404, description = "Pessoa não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn find_person(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Person>, AppError> {
    let person = app_state.person_service.find_by_id(id).await?;
    Ok(Json(person))
}
