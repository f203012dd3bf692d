//! 页面渲染

use axum::http::StatusCode;
use maud::{html, Markup, DOCTYPE};

use super::model::Product;
use crate::core::flash::Notice;

const STYLE: &str = r#"
body { font-family: sans-serif; max-width: 48rem; margin: 2rem auto; }
table { border-collapse: collapse; width: 100%; }
th, td { border-bottom: 1px solid #ddd; padding: .4rem; text-align: left; }
.notice { padding: .6rem; margin-bottom: 1rem; border-radius: 4px; }
.success { background: #e6f4ea; }
.warning { background: #fdf3d8; }
form.inline { display: inline; }
label { display: block; margin-top: .6rem; }
"#;

fn layout(title: &str, notice: Option<Notice>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="es" {
            head {
                meta charset="utf-8";
                title { (title) }
                style { (maud::PreEscaped(STYLE)) }
            }
            body {
                @if let Some(notice) = notice {
                    div class={ "notice " (if notice.is_success() { "success" } else { "warning" }) } {
                        (notice.message())
                    }
                }
                (content)
            }
        }
    }
}

fn price(value: f64) -> String {
    format!("{value:.2}")
}

pub fn list_page(products: &[Product], notice: Option<Notice>) -> Markup {
    layout(
        "Productos",
        notice,
        html! {
            h1 { "Productos" }
            p { a href="/create" { "Nuevo producto" } }
            @if products.is_empty() {
                p { "No hay productos." }
            } @else {
                table {
                    thead {
                        tr { th { "Nombre" } th { "Precio" } th {} }
                    }
                    tbody {
                        @for product in products {
                            tr {
                                td { a href={ "/product/" (product.id) } { (product.name) } }
                                td { (price(product.price)) }
                                td {
                                    a href={ "/edit_product/" (product.id) } { "Editar" }
                                    " "
                                    form.inline method="post" action={ "/delete_product/" (product.id) } {
                                        button type="submit" { "Eliminar" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn detail_page(product: &Product, notice: Option<Notice>) -> Markup {
    layout(
        &product.name,
        notice,
        html! {
            h1 { (product.name) }
            p { (product.description) }
            p { "Precio: " (price(product.price)) }
            p {
                a href={ "/edit_product/" (product.id) } { "Editar" }
                " | "
                a href="/" { "Volver" }
            }
        },
    )
}

/// 创建与编辑共用的表单，编辑时预填当前值
pub fn form_page(product: Option<&Product>, notice: Option<Notice>) -> Markup {
    let (title, action) = match product {
        Some(p) => ("Editar producto", format!("/edit_product/{}", p.id)),
        None => ("Nuevo producto", "/create".to_string()),
    };

    layout(
        title,
        notice,
        html! {
            h1 { (title) }
            form method="post" action=(action) {
                label for="nombre" { "Nombre" }
                input #nombre type="text" name="nombre" required
                    value=[product.map(|p| p.name.as_str())];
                label for="descripcion" { "Descripción" }
                textarea #descripcion name="descripcion" {
                    (product.map(|p| p.description.as_str()).unwrap_or(""))
                }
                label for="precio" { "Precio" }
                input #precio type="number" step="any" name="precio" required
                    value=[product.map(|p| p.price.to_string())];
                p { button type="submit" { "Guardar" } }
            }
            p { a href="/" { "Volver" } }
        },
    )
}

pub fn error_page(status: StatusCode, code: &str, message: &str, timestamp: &str) -> Markup {
    layout(
        "Error",
        None,
        html! {
            h1 { (status.as_u16()) " " (status.canonical_reason().unwrap_or("Error")) }
            p { (message) }
            p { small { (code) " · " (timestamp) } }
            p { a href="/" { "Volver" } }
        },
    )
}
