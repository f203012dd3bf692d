//! 产品数据模型

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::error::CoreError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
}

/// 产品的可变字段，新增与更新共用
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
}

/// 创建/编辑表单
#[derive(Debug, Deserialize, Validate)]
pub struct ProductForm {
    #[serde(rename = "nombre")]
    #[validate(length(min = 1, message = "El nombre es obligatorio"))]
    pub name: String,

    #[serde(rename = "descripcion", default)]
    pub description: String,

    #[serde(rename = "precio")]
    pub price: String,
}

impl ProductForm {
    /// 校验表单并把价格转换为浮点数
    pub fn into_new_product(self) -> Result<NewProduct, CoreError> {
        self.validate()?;

        let price = self
            .price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite())
            .ok_or_else(|| {
                CoreError::Validation(format!("Precio no válido: {:?}", self.price))
            })?;

        Ok(NewProduct {
            name: self.name,
            description: self.description,
            price,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, price: &str) -> ProductForm {
        ProductForm {
            name: name.to_string(),
            description: "desc".to_string(),
            price: price.to_string(),
        }
    }

    #[test]
    fn test_valid_form() {
        let product = form("Widget", " 9.99 ").into_new_product().unwrap();
        assert_eq!(product.name, "Widget");
        assert_eq!(product.description, "desc");
        assert_eq!(product.price, 9.99);
    }

    #[test]
    fn test_zero_and_negative_price_accepted() {
        assert_eq!(form("Free", "0.0").into_new_product().unwrap().price, 0.0);
        // 负价格不做限制
        assert_eq!(form("Refund", "-1").into_new_product().unwrap().price, -1.0);
    }

    #[test]
    fn test_bad_price_rejected() {
        for price in ["abc", "", "NaN", "inf", "1,5"] {
            let err = form("Widget", price).into_new_product().unwrap_err();
            assert!(matches!(err, CoreError::Validation(_)), "price {price:?}");
        }
    }

    #[test]
    fn test_empty_name_rejected() {
        let err = form("", "1.0").into_new_product().unwrap_err();
        match err {
            CoreError::Validation(msg) => assert!(msg.contains("nombre")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
