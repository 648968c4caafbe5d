// src/models/product.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::{common::validation::validate_not_blank, models::category::Category};

// Produto com as categorias associadas.
// `categories` não é coluna: o repositório preenche a partir de product_categories.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,
    #[schema(example = "Café Especial 250g")]
    pub name: String,
    #[schema(example = "Café torrado em grãos")]
    pub description: String,
    #[schema(example = "https://cdn.example.com/cafe.png")]
    pub image_url: String,
    #[schema(example = 39.90)]
    pub price: Decimal,
    #[sqlx(skip)]
    pub categories: Vec<Category>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Limites da coluna NUMERIC(10,2)
const MAX_PRICE_CENTS: i64 = 9_999_999_999;
const PRICE_SCALE: u32 = 2;

fn validate_price(val: &Decimal) -> Result<(), ValidationError> {
    if val.is_sign_negative() {
        let mut err = ValidationError::new("range");
        err.add_param("min".into(), &0.0);
        err.message = Some("O valor não pode ser negativo.".into());
        return Err(err);
    }
    let max_price = Decimal::new(MAX_PRICE_CENTS, PRICE_SCALE);
    if *val > max_price {
        let mut err = ValidationError::new("range");
        err.add_param("max".into(), &max_price.to_string());
        err.message = Some("O preço não pode passar de 99999999.99.".into());
        return Err(err);
    }
    if val.normalize().scale() > PRICE_SCALE {
        let mut err = ValidationError::new("scale");
        err.message = Some("O preço aceita no máximo duas casas decimais.".into());
        return Err(err);
    }
    Ok(())
}

fn validate_category_refs(refs: &Vec<CategoryRef>) -> Result<(), ValidationError> {
    if refs.iter().any(|r| r.id.is_none() && r.name.trim().is_empty()) {
        let mut err = ValidationError::new("categories");
        err.message = Some("Categorias novas precisam de um nome.".into());
        return Err(err);
    }
    Ok(())
}

// Referência a uma categoria no payload:
// com `id` vincula a existente, sem `id` cria uma nova com `name`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryRef {
    #[schema(example = 1)]
    pub id: Option<i32>,
    #[serde(default)]
    #[schema(example = "Bebidas")]
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductPayload {
    #[validate(custom(function = "validate_not_blank", message = "O nome é obrigatório."))]
    #[schema(example = "Café Especial 250g")]
    pub name: String,

    #[schema(example = "Café torrado em grãos")]
    pub description: String,

    #[validate(url(message = "A URL da imagem é inválida."))]
    #[schema(example = "https://cdn.example.com/cafe.png")]
    pub image_url: String,

    #[validate(custom(function = "validate_price"))]
    #[schema(example = 39.90)]
    pub price: Decimal,

    #[validate(custom(function = "validate_category_refs"))]
    pub categories: Option<Vec<CategoryRef>>,
}

// Todos os campos opcionais: só o que vier no JSON é alterado.
// `categories`, quando presente, substitui as associações.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductPayload {
    #[validate(custom(function = "validate_not_blank", message = "O nome é obrigatório."))]
    pub name: Option<String>,

    pub description: Option<String>,

    #[validate(url(message = "A URL da imagem é inválida."))]
    pub image_url: Option<String>,

    #[validate(custom(function = "validate_price"))]
    pub price: Option<Decimal>,

    #[validate(custom(function = "validate_category_refs"))]
    pub categories: Option<Vec<CategoryRef>>,
}
