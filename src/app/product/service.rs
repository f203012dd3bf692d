//! 产品业务服务

use std::sync::Arc;
use tracing::{debug, info};

use super::model::{NewProduct, Product};
use super::store::ProductStore;
use crate::core::error::CoreError;

#[derive(Clone)]
pub struct ProductService {
    store: Arc<dyn ProductStore>,
}

impl ProductService {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }

    pub async fn list_products(&self) -> Result<Vec<Product>, CoreError> {
        let products = self.store.find_all().await?;
        debug!("查询产品列表: {} 条", products.len());
        Ok(products)
    }

    pub async fn get_product(&self, id: i64) -> Result<Option<Product>, CoreError> {
        let product = self.store.find_by_id(id).await?;
        debug!("查询产品 {}: {}", id, if product.is_some() { "存在" } else { "不存在" });
        Ok(product)
    }

    pub async fn create_product(&self, product: NewProduct) -> Result<Product, CoreError> {
        let product = self.store.insert(&product).await?;
        info!("创建产品: {} ({})", product.name, product.id);
        Ok(product)
    }

    pub async fn update_product(
        &self,
        id: i64,
        product: NewProduct,
    ) -> Result<Option<Product>, CoreError> {
        let product = self.store.update(id, &product).await?;
        match &product {
            Some(p) => info!("更新产品: {} ({})", p.name, p.id),
            None => info!("更新产品失败，产品不存在: {}", id),
        }
        Ok(product)
    }

    pub async fn delete_product(&self, id: i64) -> Result<bool, CoreError> {
        let deleted = self.store.delete(id).await?;
        if deleted {
            info!("删除产品: {}", id);
        } else {
            info!("删除产品失败，产品不存在: {}", id);
        }
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::product::store::tests::temp_store;

    #[tokio::test]
    async fn test_round_trip_through_service() {
        let (store, _dir) = temp_store().await;
        let service = ProductService::new(Arc::new(store));

        let input = NewProduct {
            name: "Lamp".to_string(),
            description: String::new(),
            price: 0.0,
        };
        let created = service.create_product(input.clone()).await.unwrap();
        let fetched = service.get_product(created.id).await.unwrap().unwrap();

        assert_eq!(fetched.name, input.name);
        assert_eq!(fetched.description, input.description);
        assert_eq!(fetched.price, input.price);
    }

    #[tokio::test]
    async fn test_misses_are_propagated_as_values() {
        let (store, _dir) = temp_store().await;
        let service = ProductService::new(Arc::new(store));

        let changes = NewProduct {
            name: "Ghost".to_string(),
            description: String::new(),
            price: 1.0,
        };
        assert!(service.get_product(7).await.unwrap().is_none());
        assert!(service.update_product(7, changes).await.unwrap().is_none());
        assert!(!service.delete_product(7).await.unwrap());
        assert!(service.list_products().await.unwrap().is_empty());
    }
}
