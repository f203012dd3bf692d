use product_catalog::{
    app::product::{service::ProductService, store::SqliteProductStore},
    infrastructure::{config, database::DatabaseManager, logger::Logger},
    router, AppState,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_cookies::Key;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = config::load_config()?;
    config.validate()?;

    // 初始化日志
    Logger::init(&config.logging);

    info!("启动产品目录服务...");

    // 初始化数据库
    let db = DatabaseManager::new(&config.database).await.map_err(|e| {
        error!("数据库初始化失败: {}", e);
        e
    })?;

    let store = SqliteProductStore::new(db.get_pool().clone());
    let state = AppState {
        product_service: ProductService::new(Arc::new(store)),
        key: Key::generate(),
    };

    let app = router(state, Duration::from_secs(config.http.timeout_seconds));

    let listener = TcpListener::bind(config.socket_addr()?).await?;
    let addr = listener.local_addr()?;

    info!("🚀 服务运行在 http://{}", addr);
    info!("📖 可用端点:");
    info!("   GET       /                    - 产品列表");
    info!("   GET       /product/:id         - 产品详情");
    info!("   GET/POST  /create              - 创建产品");
    info!("   GET/POST  /edit_product/:id    - 编辑产品");
    info!("   GET/POST  /delete_product/:id  - 删除产品");

    axum::serve(listener, app).await?;

    Ok(())
}
