// src/services/product_service.rs

use std::sync::Arc;

use uuid::Uuid;

use crate::{
    common::{error::AppError, pagination::Pagination},
    db::ProductRepository,
    models::product::{CreateProductPayload, Product, UpdateProductPayload},
};

#[derive(Clone)]
pub struct ProductService {
    product_repo: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(product_repo: Arc<dyn ProductRepository>) -> Self {
        Self { product_repo }
    }

    pub async fn create_product(&self, payload: &CreateProductPayload) -> Result<Product, AppError> {
        let product = self.product_repo.create(payload).await?;
        tracing::info!(product_id = %product.id, "Produto criado");
        Ok(product)
    }

    pub async fn find_product(&self, id: Uuid) -> Result<Product, AppError> {
        self.product_repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::ProductNotFound)
    }

    pub async fn list_products(&self, pagination: Pagination) -> Result<Vec<Product>, AppError> {
        self.product_repo.find_all(pagination).await
    }

    pub async fn update_product(
        &self,
        id: Uuid,
        payload: &UpdateProductPayload,
    ) -> Result<Product, AppError> {
        self.product_repo
            .update(id, payload)
            .await?
            .ok_or(AppError::ProductNotFound)
    }

    pub async fn delete_product(&self, id: Uuid) -> Result<(), AppError> {
        if !self.product_repo.delete(id).await? {
            return Err(AppError::ProductNotFound);
        }
        tracing::info!(product_id = %id, "Produto removido");
        Ok(())
    }
}
