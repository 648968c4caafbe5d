// src/handlers/category.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::rbac::{CatalogManagers, RequireRole},
    models::category::{Category, CreateCategoryPayload},
};

// POST /category
#[utoipa::path(
    post,
    path = "/category",
    tag = "Categories",
    request_body = CreateCategoryPayload,
    responses(
        (status = 201, description = "Categoria criada", body = Category),
        (status = 403, description = "Requer papel admin ou manager")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_category(
    State(app_state): State<AppState>,
    _guard: RequireRole<CatalogManagers>,
    Json(payload): Json<CreateCategoryPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let category = app_state.category_service.create_category(&payload.name).await?;

    Ok((StatusCode::CREATED, Json(category)))
}

// GET /category
#[utoipa::path(
    get,
    path = "/category",
    tag = "Categories",
    responses(
        (status = 200, description = "Categorias em ordem alfabética", body = Vec<Category>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_categories(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<Category>>, AppError> {
    let categories = app_state.category_service.list_categories().await?;
    Ok(Json(categories))
}
