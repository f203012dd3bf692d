//! 产品持久化

use async_trait::async_trait;
use sqlx::sqlite::SqlitePool;

use super::model::{NewProduct, Product};

/// 产品存储接口，每个操作对应一条自动提交的语句
#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Product>, sqlx::Error>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, sqlx::Error>;
    async fn insert(&self, product: &NewProduct) -> Result<Product, sqlx::Error>;
    /// 行不存在时返回 `None`
    async fn update(&self, id: i64, product: &NewProduct) -> Result<Option<Product>, sqlx::Error>;
    /// 删除了一行时返回 `true`
    async fn delete(&self, id: i64) -> Result<bool, sqlx::Error>;
}

pub struct SqliteProductStore {
    pool: SqlitePool,
}

impl SqliteProductStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for SqliteProductStore {
    async fn find_all(&self) -> Result<Vec<Product>, sqlx::Error> {
        sqlx::query_as::<_, Product>("SELECT id, name, description, price FROM products ORDER BY id")
            .fetch_all(&self.pool)
            .await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, sqlx::Error> {
        sqlx::query_as::<_, Product>(
            "SELECT id, name, description, price FROM products WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn insert(&self, product: &NewProduct) -> Result<Product, sqlx::Error> {
        sqlx::query_as::<_, Product>(
            "INSERT INTO products (name, description, price) VALUES (?, ?, ?) \
             RETURNING id, name, description, price",
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .fetch_one(&self.pool)
        .await
    }

    async fn update(&self, id: i64, product: &NewProduct) -> Result<Option<Product>, sqlx::Error> {
        sqlx::query_as::<_, Product>(
            "UPDATE products SET name = ?, description = ?, price = ? WHERE id = ? \
             RETURNING id, name, description, price",
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn delete(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
