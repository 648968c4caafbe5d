// src/db/person_repo.rs

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    common::error::{db_error_code, AppError, FOREIGN_KEY_VIOLATION, UNIQUE_VIOLATION},
    models::person::{NewPerson, Person},
};

#[async_trait]
pub trait PersonRepository: Send + Sync {
    async fn create(&self, person: &NewPerson) -> Result<Person, AppError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Person>, AppError>;
}

#[derive(Clone)]
pub struct PgPersonRepository {
    pool: PgPool,
}

impl PgPersonRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PersonRepository for PgPersonRepository {
    async fn create(&self, person: &NewPerson) -> Result<Person, AppError> {
        sqlx::query_as::<_, Person>(
            r#"
            INSERT INTO persons (cpf, name, birth, email, user_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&person.cpf)
        .bind(&person.name)
        .bind(person.birth)
        .bind(&person.email)
        .bind(person.user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match db_error_code(&e).as_deref() {
            Some(FOREIGN_KEY_VIOLATION) => AppError::UserNotFound,
            // persons_user_id_key
            Some(UNIQUE_VIOLATION) => AppError::PersonAlreadyExists,
            _ => e.into(),
        })
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Person>, AppError> {
        let person = sqlx::query_as::<_, Person>("SELECT * FROM persons WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(person)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::db::{PgUserRepository, UserRepository};

    fn new_person(user_id: i32) -> NewPerson {
        NewPerson {
            cpf: "12345678901".into(),
            name: "Maria Silva".into(),
            birth: NaiveDate::from_ymd_opt(1989, 6, 16).unwrap(),
            email: "maria@example.com".into(),
            user_id,
        }
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requer Postgres em DATABASE_URL"]
    async fn creates_and_reads_person(pool: PgPool) {
        let user = PgUserRepository::new(pool.clone())
            .create("maria", "hash")
            .await
            .unwrap();
        let repo = PgPersonRepository::new(pool);

        let created = repo.create(&new_person(user.id)).await.unwrap();
        assert_eq!(created.user_id, Some(user.id));

        let found = repo.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(found.birth, NaiveDate::from_ymd_opt(1989, 6, 16).unwrap());
        assert!(repo.find_by_id(created.id + 1).await.unwrap().is_none());
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requer Postgres em DATABASE_URL"]
    async fn constraint_violations_map_to_domain_errors(pool: PgPool) {
        let user = PgUserRepository::new(pool.clone())
            .create("maria", "hash")
            .await
            .unwrap();
        let repo = PgPersonRepository::new(pool);

        let err = repo.create(&new_person(9999)).await.unwrap_err();
        assert!(matches!(err, AppError::UserNotFound));

        repo.create(&new_person(user.id)).await.unwrap();
        let err = repo.create(&new_person(user.id)).await.unwrap_err();
        assert!(matches!(err, AppError::PersonAlreadyExists));
    }
}
