// src/db/product_repo.rs

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::{Executor, PgConnection, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::{
        error::{db_error_code, AppError, FOREIGN_KEY_VIOLATION},
        pagination::Pagination,
    },
    models::{
        category::Category,
        product::{CategoryRef, CreateProductPayload, Product, UpdateProductPayload},
    },
};

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn create(&self, product: &CreateProductPayload) -> Result<Product, AppError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, AppError>;
    async fn find_all(&self, pagination: Pagination) -> Result<Vec<Product>, AppError>;
    async fn update(
        &self,
        id: Uuid,
        changes: &UpdateProductPayload,
    ) -> Result<Option<Product>, AppError>;
    /// Devolve `false` quando não havia produto com esse id.
    async fn delete(&self, id: Uuid) -> Result<bool, AppError>;
}

#[derive(Clone)]
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Linha do JOIN product_categories x categories
#[derive(sqlx::FromRow)]
struct ProductCategoryRow {
    product_id: Uuid,
    #[sqlx(flatten)]
    category: Category,
}

// Vincula as categorias ao produto, criando as que vierem sem id.
// Roda dentro da transação de quem chama.
async fn link_categories(
    conn: &mut PgConnection,
    product_id: Uuid,
    refs: &[CategoryRef],
) -> Result<(), AppError> {
    for category_ref in refs {
        let category_id = match category_ref.id {
            Some(id) => id,
            None => {
                sqlx::query_scalar::<_, i32>(
                    "INSERT INTO categories (name) VALUES ($1) RETURNING id",
                )
                .bind(category_ref.name.trim())
                .fetch_one(&mut *conn)
                .await?
            }
        };

        sqlx::query(
            r#"
            INSERT INTO product_categories (product_id, category_id)
            VALUES ($1, $2)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(product_id)
        .bind(category_id)
        .execute(&mut *conn)
        .await
        .map_err(|e| {
            if db_error_code(&e).as_deref() == Some(FOREIGN_KEY_VIOLATION) {
                return AppError::CategoryNotFound;
            }
            AppError::from(e)
        })?;
    }
    Ok(())
}

async fn load_categories<'e, E>(
    executor: E,
    product_ids: &[Uuid],
) -> Result<HashMap<Uuid, Vec<Category>>, AppError>
where
    E: Executor<'e, Database = Postgres>,
{
    let rows = sqlx::query_as::<_, ProductCategoryRow>(
        r#"
        SELECT pc.product_id, c.id, c.name, c.created_at
        FROM product_categories pc
        JOIN categories c ON c.id = pc.category_id
        WHERE pc.product_id = ANY($1)
        ORDER BY c.name ASC
        "#,
    )
    .bind(product_ids.to_vec())
    .fetch_all(executor)
    .await?;

    let mut by_product: HashMap<Uuid, Vec<Category>> = HashMap::new();
    for row in rows {
        by_product.entry(row.product_id).or_default().push(row.category);
    }
    Ok(by_product)
}

fn attach_categories(mut products: Vec<Product>, mut by_product: HashMap<Uuid, Vec<Category>>) -> Vec<Product> {
    for product in &mut products {
        product.categories = by_product.remove(&product.id).unwrap_or_default();
    }
    products
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn create(&self, product: &CreateProductPayload) -> Result<Product, AppError> {
        // Produto e associações entram juntos ou não entram
        let mut tx = self.pool.begin().await?;

        let mut new_product = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (name, description, image_url, price)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(&product.image_url)
        .bind(product.price)
        .fetch_one(&mut *tx)
        .await?;

        if let Some(refs) = &product.categories {
            link_categories(&mut *tx, new_product.id, refs).await?;
        }

        let mut by_product = load_categories(&mut *tx, &[new_product.id]).await?;
        new_product.categories = by_product.remove(&new_product.id).unwrap_or_default();

        tx.commit().await?;
        Ok(new_product)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, AppError> {
        let Some(mut product) = sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
        else {
            return Ok(None);
        };

        let mut by_product = load_categories(&self.pool, &[id]).await?;
        product.categories = by_product.remove(&id).unwrap_or_default();
        Ok(Some(product))
    }

    async fn find_all(&self, pagination: Pagination) -> Result<Vec<Product>, AppError> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT * FROM products ORDER BY created_at ASC, id ASC LIMIT $1 OFFSET $2",
        )
        .bind(pagination.limit)
        .bind(pagination.offset())
        .fetch_all(&self.pool)
        .await?;

        if products.is_empty() {
            return Ok(products);
        }

        let ids: Vec<Uuid> = products.iter().map(|p| p.id).collect();
        let by_product = load_categories(&self.pool, &ids).await?;
        Ok(attach_categories(products, by_product))
    }

    async fn update(
        &self,
        id: Uuid,
        changes: &UpdateProductPayload,
    ) -> Result<Option<Product>, AppError> {
        let mut tx = self.pool.begin().await?;

        let Some(mut product) = sqlx::query_as::<_, Product>(
            r#"
            UPDATE products SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                image_url = COALESCE($4, image_url),
                price = COALESCE($5, price),
                updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(changes.name.as_deref())
        .bind(changes.description.as_deref())
        .bind(changes.image_url.as_deref())
        .bind(changes.price)
        .fetch_optional(&mut *tx)
        .await?
        else {
            return Ok(None);
        };

        if let Some(refs) = &changes.categories {
            sqlx::query("DELETE FROM product_categories WHERE product_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;
            link_categories(&mut *tx, id, refs).await?;
        }

        let mut by_product = load_categories(&mut *tx, &[id]).await?;
        product.categories = by_product.remove(&id).unwrap_or_default();

        tx.commit().await?;
        Ok(Some(product))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
