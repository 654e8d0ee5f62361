use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow},
    Pool, Row, Sqlite,
};
use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};
use tracing::debug;

use shared::domain::{Entity, Product, ProductId};

/// Persistence contract for a single entity type.
///
/// A missing entity is `Ok(None)` from `get_by_id`, never an error. What
/// `update` does for an id with no stored entity is up to the implementation.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    async fn get_all(&self) -> Result<Vec<T>>;
    async fn get_by_id(&self, id: T::Id) -> Result<Option<T>>;
    async fn create(&self, entity: &T) -> Result<()>;
    async fn update(&self, entity: &T) -> Result<()>;
}

#[derive(Clone)]
pub struct Storage {
    pool: Pool<Sqlite>,
}

impl Storage {
    pub async fn new(database_url: &str) -> Result<Self> {
        ensure_sqlite_parent_dir_exists(database_url)?;

        let connect_options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(connect_options)
            .await?;
        sqlx::migrate!("./migrations").run(&pool).await?;
        Ok(Self { pool })
    }

    pub async fn health_check(&self) -> Result<()> {
        let _: i64 = sqlx::query_scalar("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .context("sqlite ping failed")?;
        Ok(())
    }
}

#[async_trait]
impl Repository<Product> for Storage {
    async fn get_all(&self) -> Result<Vec<Product>> {
        let rows = sqlx::query("SELECT id, name, color, price, stock FROM products ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .context("failed to list products")?;
        rows.iter().map(product_from_row).collect()
    }

    async fn get_by_id(&self, id: ProductId) -> Result<Option<Product>> {
        let row = sqlx::query("SELECT id, name, color, price, stock FROM products WHERE id = ?")
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await
            .with_context(|| format!("failed to load product {id}"))?;
        row.as_ref().map(product_from_row).transpose()
    }

    async fn create(&self, product: &Product) -> Result<()> {
        sqlx::query("INSERT INTO products (id, name, color, price, stock) VALUES (?, ?, ?, ?, ?)")
            .bind(product.id.0)
            .bind(&product.name)
            .bind(&product.color)
            .bind(product.price)
            .bind(product.stock)
            .execute(&self.pool)
            .await
            .with_context(|| format!("failed to insert product {}", product.id))?;
        debug!(product_id = %product.id, "product inserted");
        Ok(())
    }

    async fn update(&self, product: &Product) -> Result<()> {
        let result = sqlx::query(
            "UPDATE products SET name = ?, color = ?, price = ?, stock = ? WHERE id = ?",
        )
        .bind(&product.name)
        .bind(&product.color)
        .bind(product.price)
        .bind(product.stock)
        .bind(product.id.0)
        .execute(&self.pool)
        .await
        .with_context(|| format!("failed to update product {}", product.id))?;
        if result.rows_affected() == 0 {
            bail!("no product with id {}", product.id);
        }
        debug!(product_id = %product.id, "product updated");
        Ok(())
    }
}

fn product_from_row(row: &SqliteRow) -> Result<Product> {
    Ok(Product {
        id: ProductId(row.try_get("id")?),
        name: row.try_get("name")?,
        color: row.try_get("color")?,
        price: row.try_get("price")?,
        stock: row.try_get("stock")?,
    })
}

fn ensure_sqlite_parent_dir_exists(database_url: &str) -> Result<()> {
    let Some(path) = sqlite_path(database_url) else {
        return Ok(());
    };

    let Some(parent) = path.parent() else {
        return Ok(());
    };

    fs::create_dir_all(parent).with_context(|| {
        format!(
            "failed to create parent directory '{}' for database url '{database_url}'",
            parent.display()
        )
    })?;

    Ok(())
}

fn sqlite_path(database_url: &str) -> Option<PathBuf> {
    if database_url == "sqlite::memory:" || !database_url.starts_with("sqlite:") {
        return None;
    }

    let path = database_url
        .trim_start_matches("sqlite://")
        .trim_start_matches("sqlite:")
        .split('?')
        .next()
        .unwrap_or_default();

    if path.is_empty() {
        return None;
    }

    Some(Path::new(path).to_path_buf())
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
