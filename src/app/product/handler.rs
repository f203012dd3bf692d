//! 产品处理器

use axum::{
    extract::{rejection::FormRejection, FromRef, Path, State},
    response::{Html, Redirect},
    Form,
};
use tower_cookies::Key;

use super::{model::ProductForm, service::ProductService, view};
use crate::core::{
    error::CoreError,
    flash::{Flash, Notice},
};

#[derive(Clone)]
pub struct AppState {
    pub product_service: ProductService,
    /// 提示 cookie 的签名密钥，进程启动时生成
    pub key: Key,
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.key.clone()
    }
}

type PageResult = Result<Html<String>, CoreError>;

fn not_found(id: i64) -> CoreError {
    CoreError::NotFound(format!("No existe el producto {id}"))
}

pub async fn list_products(State(state): State<AppState>, flash: Flash) -> PageResult {
    let products = state.product_service.list_products().await?;
    Ok(Html(view::list_page(&products, flash.take()).into_string()))
}

pub async fn product_detail(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    flash: Flash,
) -> PageResult {
    let product = state
        .product_service
        .get_product(id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Html(view::detail_page(&product, flash.take()).into_string()))
}

pub async fn create_form(flash: Flash) -> Html<String> {
    Html(view::form_page(None, flash.take()).into_string())
}

pub async fn create_product(
    State(state): State<AppState>,
    flash: Flash,
    form: Result<Form<ProductForm>, FormRejection>,
) -> Result<Redirect, CoreError> {
    let Form(form) = form?;
    let product = form.into_new_product()?;

    state.product_service.create_product(product).await?;
    flash.push(Notice::Created);
    Ok(Redirect::to("/"))
}

pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    flash: Flash,
) -> PageResult {
    let product = state
        .product_service
        .get_product(id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Html(view::form_page(Some(&product), flash.take()).into_string()))
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    flash: Flash,
    form: Result<Form<ProductForm>, FormRejection>,
) -> Result<Redirect, CoreError> {
    let Form(form) = form?;
    let product = form.into_new_product()?;

    state
        .product_service
        .update_product(id, product)
        .await?
        .ok_or_else(|| not_found(id))?;
    flash.push(Notice::Updated);
    Ok(Redirect::to("/"))
}

/// 同时挂在 GET 与 POST 上，GET 保留给旧链接使用
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    flash: Flash,
) -> Result<Redirect, CoreError> {
    let notice = if state.product_service.delete_product(id).await? {
        Notice::Deleted
    } else {
        Notice::Missing
    };
    flash.push(notice);
    Ok(Redirect::to("/"))
}

pub async fn fallback() -> CoreError {
    CoreError::NotFound("Página no encontrada".to_string())
}
