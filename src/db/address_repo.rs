// src/db/address_repo.rs

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    common::{
        error::{db_error_code, AppError, FOREIGN_KEY_VIOLATION},
        pagination::Pagination,
    },
    models::address::{Address, CreateAddressPayload},
};

#[async_trait]
pub trait AddressRepository: Send + Sync {
    async fn create(&self, address: &CreateAddressPayload) -> Result<Address, AppError>;
    async fn find_by_person_id(
        &self,
        person_id: i32,
        pagination: Pagination,
    ) -> Result<Vec<Address>, AppError>;
}

#[derive(Clone)]
pub struct PgAddressRepository {
    pool: PgPool,
}

impl PgAddressRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AddressRepository for PgAddressRepository {
    async fn create(&self, address: &CreateAddressPayload) -> Result<Address, AppError> {
        sqlx::query_as::<_, Address>(
            r#"
            INSERT INTO addresses (street, number, complement, city, state, zip_code, person_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(&address.street)
        .bind(&address.number)
        .bind(address.complement.as_deref())
        .bind(&address.city)
        .bind(&address.state)
        .bind(&address.zip_code)
        .bind(address.person_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if db_error_code(&e).as_deref() == Some(FOREIGN_KEY_VIOLATION) {
                return AppError::PersonNotFound;
            }
            e.into()
        })
    }

    async fn find_by_person_id(
        &self,
        person_id: i32,
        pagination: Pagination,
    ) -> Result<Vec<Address>, AppError> {
        let addresses = sqlx::query_as::<_, Address>(
            r#"
            SELECT * FROM addresses
            WHERE person_id = $1
            ORDER BY id ASC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(person_id)
        .bind(pagination.limit)
        .bind(pagination.offset())
        .fetch_all(&self.pool)
        .await?;
        Ok(addresses)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::{
        db::{PersonRepository, PgPersonRepository, PgUserRepository, UserRepository},
        models::person::NewPerson,
    };

    fn address(person_id: i32, street: &str) -> CreateAddressPayload {
        CreateAddressPayload {
            street: street.into(),
            number: "10".into(),
            complement: None,
            city: "São Paulo".into(),
            state: "SP".into(),
            zip_code: "01001-000".into(),
            person_id,
        }
    }

    async fn seed_person(pool: &PgPool) -> i32 {
        let user = PgUserRepository::new(pool.clone())
            .create("maria", "hash")
            .await
            .unwrap();
        PgPersonRepository::new(pool.clone())
            .create(&NewPerson {
                cpf: "12345678901".into(),
                name: "Maria Silva".into(),
                birth: NaiveDate::from_ymd_opt(1989, 6, 16).unwrap(),
                email: "maria@example.com".into(),
                user_id: user.id,
            })
            .await
            .unwrap()
            .id
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requer Postgres em DATABASE_URL"]
    async fn lists_addresses_page_by_page(pool: PgPool) {
        let person_id = seed_person(&pool).await;
        let repo = PgAddressRepository::new(pool);

        for street in ["Rua A", "Rua B", "Rua C"] {
            repo.create(&address(person_id, street)).await.unwrap();
        }

        let first = repo
            .find_by_person_id(person_id, Pagination::new(1, 2))
            .await
            .unwrap();
        let streets: Vec<&str> = first.iter().map(|a| a.street.as_str()).collect();
        assert_eq!(streets, vec!["Rua A", "Rua B"]);

        let second = repo
            .find_by_person_id(person_id, Pagination::new(2, 2))
            .await
            .unwrap();
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].street, "Rua C");
        assert!(second[0].complement.is_none());
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requer Postgres em DATABASE_URL"]
    async fn unknown_person_is_not_found(pool: PgPool) {
        let repo = PgAddressRepository::new(pool);
        let err = repo.create(&address(9999, "Rua A")).await.unwrap_err();
        assert!(matches!(err, AppError::PersonNotFound));
    }
}
