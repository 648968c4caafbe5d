// src/services/category_service.rs

use std::sync::Arc;

use crate::{common::error::AppError, db::CategoryRepository, models::category::Category};

#[derive(Clone)]
pub struct CategoryService {
    category_repo: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    pub fn new(category_repo: Arc<dyn CategoryRepository>) -> Self {
        Self { category_repo }
    }

    pub async fn create_category(&self, name: &str) -> Result<Category, AppError> {
        self.category_repo.create(name.trim()).await
    }

    pub async fn list_categories(&self) -> Result<Vec<Category>, AppError> {
        self.category_repo.find_all().await
    }
}
