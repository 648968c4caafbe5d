// src/handlers/user.rs

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
    middleware::{
        auth::AuthenticatedUser,
        rbac::{AccountOwner, RequireRole},
    },
    models::user::{
        AuthResponse, CreateUserPayload, CreatedUserResponse, SignInPayload, UpdateUserPayload,
        User, UserRole, UserWithPerson,
    },
};

// POST /user (pública)
#[utoipa::path(
    post,
    path = "/user",
    tag = "Users",
    request_body = CreateUserPayload,
    responses(
        (status = 201, description = "Usuário criado", body = CreatedUserResponse),
        (status = 400, description = "Dados inválidos"),
        (status = 409, description = "Nome de usuário já existe")
    )
)]
pub async fn create_user(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateUserPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let user = app_state
        .auth_service
        .register_user(&payload.username, &payload.password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedUserResponse {
            id: user.id,
            username: user.username,
        }),
    ))
}

// POST /user/signin (pública)
#[utoipa::path(
    post,
    path = "/user/signin",
    tag = "Users",
    request_body = SignInPayload,
    responses(
        (status = 200, description = "Token emitido", body = AuthResponse),
        (status = 401, description = "Usuário ou senha inválidos")
    )
)]
pub async fn sign_in(
    State(app_state): State<AppState>,
    Json(payload): Json<SignInPayload>,
) -> Result<Json<AuthResponse>, AppError> {
    payload.validate()?;

    let token = app_state
        .auth_service
        .sign_in(&payload.username, &payload.password)
        .await?;

    Ok(Json(AuthResponse { token }))
}

// GET /user/{id}
#[utoipa::path(
    get,
    path = "/user/{id}",
    tag = "Users",
    params(("id" = i32, Path, description = "ID do usuário")),
    responses(
        (status = 200, description = "Usuário com a pessoa vinculada", body = UserWithPerson),
        (status = 404, description = "Usuário não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn find_user(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<UserWithPerson>, AppError> {
    let user = app_state.user_service.find_with_person(id).await?;
    Ok(Json(user))
}

// PUT /user/{id}
#[utoipa::path(
    put,
    path = "/user/{id}",
    tag = "Users",
    request_body = UpdateUserPayload,
    params(("id" = i32, Path, description = "ID do usuário")),
    responses(
        (status = 200, description = "Usuário atualizado", body = User),
        (status = 403, description = "Sem permissão para alterar este usuário"),
        (status = 404, description = "Usuário não encontrado"),
        (status = 409, description = "Nome de usuário já existe")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_user(
    State(app_state): State<AppState>,
    AuthenticatedUser(actor): AuthenticatedUser,
    _guard: RequireRole<AccountOwner>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateUserPayload>,
) -> Result<Json<User>, AppError> {
    payload.validate()?;

    // Trocar papel é exclusivo de admin, inclusive o próprio
    if payload.role.is_some() && actor.role != UserRole::Admin {
        tracing::warn!(user_id = actor.id, target = id, "Tentativa de alterar papel sem ser admin");
        return Err(AppError::Forbidden);
    }

    let user = app_state.user_service.update_user(id, payload).await?;
    Ok(Json(user))
}
