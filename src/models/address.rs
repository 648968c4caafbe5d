// src/models/address.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::common::validation::validate_not_blank;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Rua das Flores")]
    pub street: String,
    #[schema(example = "123")]
    pub number: String,
    pub complement: Option<String>,
    #[schema(example = "São Paulo")]
    pub city: String,
    #[schema(example = "SP")]
    pub state: String,
    #[schema(example = "01001-000")]
    pub zip_code: String,
    pub person_id: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAddressPayload {
    #[validate(custom(function = "validate_not_blank", message = "A rua é obrigatória."))]
    pub street: String,
    #[validate(custom(function = "validate_not_blank", message = "O número é obrigatório."))]
    pub number: String,
    pub complement: Option<String>,
    #[validate(custom(function = "validate_not_blank", message = "A cidade é obrigatória."))]
    pub city: String,
    #[validate(custom(function = "validate_not_blank", message = "O estado é obrigatório."))]
    pub state: String,
    #[validate(custom(function = "validate_not_blank", message = "O CEP é obrigatório."))]
    pub zip_code: String,
    pub person_id: i32,
}
