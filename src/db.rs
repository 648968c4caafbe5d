pub mod address_repo;
pub use address_repo::{AddressRepository, PgAddressRepository};
pub mod category_repo;
pub use category_repo::{CategoryRepository, PgCategoryRepository};
pub mod person_repo;
pub use person_repo::{PersonRepository, PgPersonRepository};
pub mod product_repo;
pub use product_repo::{PgProductRepository, ProductRepository};
pub mod user_repo;
pub use user_repo::{PgUserRepository, UserRepository};

#[cfg(test)]
pub mod memory;

use std::{sync::Arc, time::Duration};

use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::config::AppConfig;

// Abre a pool de conexões usada por todos os repositórios
pub async fn connect(config: &AppConfig) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(3))
        .connect(&config.database_url)
        .await?;

    tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");
    Ok(pool)
}

// Conjunto de repositórios que os serviços recebem na montagem do AppState
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub persons: Arc<dyn PersonRepository>,
    pub addresses: Arc<dyn AddressRepository>,
    pub products: Arc<dyn ProductRepository>,
    pub categories: Arc<dyn CategoryRepository>,
}

impl Repositories {
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            users: Arc::new(PgUserRepository::new(pool.clone())),
            persons: Arc::new(PgPersonRepository::new(pool.clone())),
            addresses: Arc::new(PgAddressRepository::new(pool.clone())),
            products: Arc::new(PgProductRepository::new(pool.clone())),
            categories: Arc::new(PgCategoryRepository::new(pool)),
        }
    }
}
