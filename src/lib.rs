//! # 产品目录
//!
//! 基于 Axum + SQLx (SQLite) 的服务端渲染产品管理应用：
//! - 产品列表、详情、创建、编辑、删除
//! - 修改后的一次性提示消息（签名 cookie）
//! - 启动时自动建表，无迁移

pub mod app;
pub mod core;
pub mod infrastructure;

pub use app::product::handler::AppState;
pub use app::router;
