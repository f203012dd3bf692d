//! 数据库基础设施

use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions},
    Error,
};
use std::time::Duration;
use tracing::info;

use super::config::DatabaseConfig;

#[derive(Clone)]
pub struct DatabaseManager {
    pool: SqlitePool,
}

impl DatabaseManager {
    /// 打开（必要时创建）数据库文件并初始化表结构
    pub async fn new(config: &DatabaseConfig) -> Result<Self, Error> {
        if let Some(parent) = config.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let options = SqliteConnectOptions::new()
            .filename(&config.path)
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(8))
            .connect_with(options)
            .await?;

        info!("已连接数据库: {}", config.path.display());

        let manager = Self { pool };
        manager.create_tables().await?;
        Ok(manager)
    }

    /// 创建数据库表（不使用迁移）
    async fn create_tables(&self) -> Result<(), Error> {
        // AUTOINCREMENT 保证删除后的 id 不会被复用
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS products (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                description TEXT NOT NULL DEFAULT '',
                price REAL NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub fn get_pool(&self) -> &SqlitePool {
        &self.pool
    }
}
