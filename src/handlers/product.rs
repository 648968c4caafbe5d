// src/handlers/product.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::{error::AppError, pagination::Pagination},
    config::AppState,
    middleware::rbac::{CatalogManagers, RequireRole},
    models::product::{CreateProductPayload, Product, UpdateProductPayload},
};

// POST /product
#[utoipa::path(
    post,
    path = "/product",
    tag = "Products",
    request_body = CreateProductPayload,
    responses(
        (status = 201, description = "Produto criado com as categorias", body = Product),
        (status = 403, description = "Requer papel admin ou manager"),
        (status = 404, description = "Categoria informada não existe")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_product(
    State(app_state): State<AppState>,
    _guard: RequireRole<CatalogManagers>,
    Json(payload): Json<CreateProductPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let product = app_state.product_service.create_product(&payload).await?;

    Ok((StatusCode::CREATED, Json(product)))
}

// GET /product?page=&limit=
#[utoipa::path(
    get,
    path = "/product",
    tag = "Products",
    params(Pagination),
    responses(
        (status = 200, description = "Página de produtos", body = Vec<Product>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_products(
    State(app_state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Vec<Product>>, AppError> {
    pagination.validate()?;

    let products = app_state.product_service.list_products(pagination).await?;
    Ok(Json(products))
}

// GET /product/{id}
#[utoipa::path(
    get,
    path = "/product/{id}",
    tag = "Products",
    params(("id" = Uuid, Path, description = "ID do produto")),
    responses(
        (status = 200, description = "Produto encontrado", body = Product),
        (status = 404, description = "Produto não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn find_product(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Product>, AppError> {
    let product = app_state.product_service.find_product(id).await?;
    Ok(Json(product))
}

// PUT /product/{id}
#[utoipa::path(
    put,
    path = "/product/{id}",
    tag = "Products",
    request_body = UpdateProductPayload,
    params(("id" = Uuid, Path, description = "ID do produto")),
    responses(
        (status = 200, description = "Produto atualizado", body = Product),
        (status = 403, description = "Requer papel admin ou manager"),
        (status = 404, description = "Produto ou categoria não encontrados")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_product(
    State(app_state): State<AppState>,
    _guard: RequireRole<CatalogManagers>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateProductPayload>,
) -> Result<Json<Product>, AppError> {
    payload.validate()?;

    let product = app_state.product_service.update_product(id, &payload).await?;
    Ok(Json(product))
}

// DELETE /product/{id}
#[utoipa::path(
    delete,
    path = "/product/{id}",
    tag = "Products",
    params(("id" = Uuid, Path, description = "ID do produto")),
    responses(
        (status = 204, description = "Produto removido"),
        (status = 403, description = "Requer papel admin ou manager"),
        (status = 404, description = "Produto não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_product(
    State(app_state): State<AppState>,
    _guard: RequireRole<CatalogManagers>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    app_state.product_service.delete_product(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
