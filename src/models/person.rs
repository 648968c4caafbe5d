// src/models/person.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::common::validation::validate_not_blank;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "12345678901")]
    pub cpf: String,
    #[schema(example = "Maria Silva")]
    pub name: String,
    #[schema(example = "1989-06-16")]
    pub birth: NaiveDate,
    #[schema(example = "maria@example.com")]
    pub email: String,
    pub user_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

/// Remove a pontuação usual de um CPF ("123.456.789-01" -> "12345678901").
pub fn normalize_cpf(cpf: &str) -> String {
    cpf.chars().filter(|c| *c != '.' && *c != '-').collect()
}

fn validate_cpf(cpf: &str) -> Result<(), ValidationError> {
    let digits = normalize_cpf(cpf);
    if digits.len() != 11 || !digits.chars().all(|c| c.is_ascii_digit()) {
        let mut err = ValidationError::new("cpf");
        err.message = Some("O CPF deve conter 11 dígitos.".into());
        return Err(err);
    }
    Ok(())
}

fn validate_birth(birth: &NaiveDate) -> Result<(), ValidationError> {
    if *birth > Utc::now().date_naive() {
        let mut err = ValidationError::new("birth");
        err.message = Some("A data de nascimento não pode estar no futuro.".into());
        return Err(err);
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePersonPayload {
    #[validate(custom(function = "validate_cpf"))]
    #[schema(example = "123.456.789-01")]
    pub cpf: String,

    #[validate(custom(function = "validate_not_blank", message = "O nome é obrigatório."))]
    #[schema(example = "Maria Silva")]
    pub name: String,

    #[validate(custom(function = "validate_birth"))]
    #[schema(example = "1989-06-16")]
    pub birth: NaiveDate,

    #[validate(email(message = "O e-mail fornecido é inválido."))]
    #[schema(example = "maria@example.com")]
    pub email: String,

    // Se ausente, a pessoa é vinculada ao usuário autenticado
    pub user_id: Option<i32>,
}

// Pessoa pronta para gravação (CPF normalizado, usuário resolvido)
#[derive(Debug, Clone)]
pub struct NewPerson {
    pub cpf: String,
    pub name: String,
    pub birth: NaiveDate,
    pub email: String,
    pub user_id: i32,
}
