//! PostgreSQL implementation of ProductRepository

use async_trait::async_trait;
use sqlx::PgPool;

use catalog::{Product, ProductRepository, RepositoryError, RequestContext};

/// PostgreSQL implementation of ProductRepository
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    description: String,
    net_price_cents: i64,
    category: String,
    status: String,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl TryFrom<ProductRow> for Product {
    type Error = RepositoryError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        let category = row.category.parse().map_err(|e| {
            RepositoryError::Other(format!("corrupt product row {}: {}", row.id, e))
        })?;
        let status = row.status.parse().map_err(|e| {
            RepositoryError::Other(format!("corrupt product row {}: {}", row.id, e))
        })?;

        Ok(Self {
            id: row.id,
            name: row.name,
            description: row.description,
            net_price_cents: row.net_price_cents,
            category,
            status,
            created_at: row.created_at,
        })
    }
}

fn into_products(rows: Vec<ProductRow>) -> Result<Vec<Product>, RepositoryError> {
    rows.into_iter().map(Product::try_from).collect()
}

/// Map sqlx failures onto the repository contract
fn map_err(err: sqlx::Error) -> RepositoryError {
    match &err {
        sqlx::Error::RowNotFound => RepositoryError::NotFound,
        sqlx::Error::Database(db) if db.is_unique_violation() => RepositoryError::AlreadyExists,
        _ => RepositoryError::Other(err.to_string()),
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn get_product(&self, ctx: &RequestContext, id: i64) -> Result<Product, RepositoryError> {
        ctx.run(async {
            let row = sqlx::query_as::<_, ProductRow>(
                r#"
                SELECT id, name, description, net_price_cents, category, status, created_at
                FROM products
                WHERE id = $1
                "#,
            )
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_err)?;

            Product::try_from(row)
        })
        .await
    }

    async fn create_product(
        &self,
        ctx: &RequestContext,
        product: &Product,
    ) -> Result<i64, RepositoryError> {
        ctx.run(async {
            sqlx::query_scalar::<_, i64>(
                r#"
                INSERT INTO products (name, description, net_price_cents, category, status, created_at)
                VALUES ($1, $2, $3, $4, $5, $6)
                RETURNING id
                "#,
            )
            .bind(&product.name)
            .bind(&product.description)
            .bind(product.net_price_cents)
            .bind(product.category.as_str())
            .bind(product.status.as_str())
            .bind(product.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_err)
        })
        .await
    }

    async fn update_product(
        &self,
        ctx: &RequestContext,
        product: &Product,
    ) -> Result<(), RepositoryError> {
        ctx.run(async {
            let result = sqlx::query(
                r#"
                UPDATE products
                SET name = $2, description = $3, net_price_cents = $4, category = $5, status = $6
                WHERE id = $1
                "#,
            )
            .bind(product.id)
            .bind(&product.name)
            .bind(&product.description)
            .bind(product.net_price_cents)
            .bind(product.category.as_str())
            .bind(product.status.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_err)?;

            if result.rows_affected() == 0 {
                return Err(RepositoryError::NotFound);
            }
            Ok(())
        })
        .await
    }

    async fn get_all_products(&self, ctx: &RequestContext) -> Result<Vec<Product>, RepositoryError> {
        ctx.run(async {
            let rows = sqlx::query_as::<_, ProductRow>(
                r#"
                SELECT id, name, description, net_price_cents, category, status, created_at
                FROM products
                ORDER BY id ASC
                "#,
            )
            .fetch_all(&self.pool)
            .await
            .map_err(map_err)?;

            into_products(rows)
        })
        .await
    }

    async fn get_active_products(
        &self,
        ctx: &RequestContext,
    ) -> Result<Vec<Product>, RepositoryError> {
        ctx.run(async {
            let rows = sqlx::query_as::<_, ProductRow>(
                r#"
                SELECT id, name, description, net_price_cents, category, status, created_at
                FROM products
                WHERE status = 'active'
                ORDER BY id ASC
                "#,
            )
            .fetch_all(&self.pool)
            .await
            .map_err(map_err)?;

            into_products(rows)
        })
        .await
    }
}
