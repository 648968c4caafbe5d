// src/db/user_repo.rs

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    common::error::{db_error_code, AppError, UNIQUE_VIOLATION},
    models::{
        person::Person,
        user::{User, UserChanges, UserWithPerson},
    },
};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, username: &str, password_hash: &str) -> Result<User, AppError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, AppError>;
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError>;
    async fn find_with_person(&self, id: i32) -> Result<Option<UserWithPerson>, AppError>;
    async fn update(&self, id: i32, changes: &UserChanges) -> Result<Option<User>, AppError>;
}

// O repositório de usuários, responsável por todas as interações com a tabela 'users'
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Violação de unicidade em users só pode ser o username
fn map_username_conflict(e: sqlx::Error) -> AppError {
    if db_error_code(&e).as_deref() == Some(UNIQUE_VIOLATION) {
        return AppError::UsernameAlreadyExists;
    }
    e.into()
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, username: &str, password_hash: &str) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (username, password_hash) VALUES ($1, $2) RETURNING *",
        )
        .bind(username)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(map_username_conflict)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        let maybe_user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(maybe_user)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let maybe_user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;
        Ok(maybe_user)
    }

    async fn find_with_person(&self, id: i32) -> Result<Option<UserWithPerson>, AppError> {
        let Some(user) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let person = sqlx::query_as::<_, Person>("SELECT * FROM persons WHERE user_id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(Some(UserWithPerson { user, person }))
    }

    // COALESCE mantém o valor atual quando o campo não foi enviado
    async fn update(&self, id: i32, changes: &UserChanges) -> Result<Option<User>, AppError> {
        sqlx::query_as::<_, User>(
            r#"
            UPDATE users SET
                username = COALESCE($2, username),
                password_hash = COALESCE($3, password_hash),
                role = COALESCE($4, role),
                updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(changes.username.as_deref())
        .bind(changes.password_hash.as_deref())
        .bind(changes.role)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_username_conflict)
    }
}
