//! 应用层

pub mod product;

use axum::{middleware, routing::get, Router};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_cookies::CookieManagerLayer;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::core::middleware::request_logging_middleware;
use product::handler::{self, AppState};

/// 创建路由
pub fn router(state: AppState, timeout: Duration) -> Router {
    Router::new()
        .route("/", get(handler::list_products))
        .route("/product/:id", get(handler::product_detail))
        .route(
            "/create",
            get(handler::create_form).post(handler::create_product),
        )
        .route(
            "/edit_product/:id",
            get(handler::edit_form).post(handler::update_product),
        )
        .route(
            "/delete_product/:id",
            get(handler::delete_product).post(handler::delete_product),
        )
        .fallback(handler::fallback)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(request_logging_middleware))
                .layer(TimeoutLayer::new(timeout))
                .layer(CookieManagerLayer::new()),
        )
        .with_state(state)
}
