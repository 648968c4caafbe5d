// src/config.rs

use anyhow::Context;
use sqlx::PgPool;

use crate::{
    db::Repositories,
    services::{
        address_service::AddressService, auth::AuthService, category_service::CategoryService,
        person_service::PersonService, product_service::ProductService,
        user_service::UserService,
    },
};

// Configuração lida do ambiente (.env incluso) na inicialização
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt_secret: String,
    pub jwt_expiration_days: i64,
    pub bcrypt_cost: u32,
    pub db_max_connections: u32,
    pub server_addr: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    // Separado de `from_env` para os testes não mexerem no ambiente do processo
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL deve ser definida")?;
        let jwt_secret = lookup("JWT_SECRET").context("JWT_SECRET deve ser definido")?;

        let jwt_expiration_days = match lookup("JWT_EXPIRATION_DAYS") {
            Some(v) => v.parse().context("JWT_EXPIRATION_DAYS deve ser um número inteiro")?,
            None => 7,
        };
        let bcrypt_cost = match lookup("BCRYPT_COST") {
            Some(v) => v.parse().context("BCRYPT_COST deve ser um número inteiro")?,
            None => bcrypt::DEFAULT_COST,
        };
        let db_max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(v) => v.parse().context("DB_MAX_CONNECTIONS deve ser um número inteiro")?,
            None => 5,
        };
        let server_addr = lookup("SERVER_ADDR").unwrap_or_else(|| "0.0.0.0:3000".to_string());

        Ok(Self {
            database_url,
            jwt_secret,
            jwt_expiration_days,
            bcrypt_cost,
            db_max_connections,
            server_addr,
        })
    }
}

#[derive(Clone)]
pub struct AppState {
    pub auth_service: AuthService,
    pub user_service: UserService,
    pub person_service: PersonService,
    pub address_service: AddressService,
    pub product_service: ProductService,
    pub category_service: CategoryService,
}

impl AppState {
    pub fn new(pool: PgPool, config: &AppConfig) -> Self {
        Self::from_repositories(Repositories::postgres(pool), config)
    }

    // --- Monta o gráfico de dependências ---
    pub fn from_repositories(repos: Repositories, config: &AppConfig) -> Self {
        let auth_service = AuthService::new(
            repos.users.clone(),
            config.jwt_secret.clone(),
            config.jwt_expiration_days,
            config.bcrypt_cost,
        );

        Self {
            user_service: UserService::new(repos.users, config.bcrypt_cost),
            person_service: PersonService::new(repos.persons),
            address_service: AddressService::new(repos.addresses),
            product_service: ProductService::new(repos.products),
            category_service: CategoryService::new(repos.categories),
            auth_service,
        }
    }
}
