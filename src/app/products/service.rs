//! 产品业务服务
//!
//! 产品集合只存在于进程内存中，重启即恢复为预置数据。

use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{debug, info, warn};

use super::model::{seed_products, Product, ProductInput};
use crate::core::error::CoreError;

struct Catalog {
    products: Vec<Product>,
    next_id: i64,
}

/// 内存产品仓库，克隆后共享同一份数据
#[derive(Clone)]
pub struct ProductService {
    inner: Arc<Mutex<Catalog>>,
}

impl ProductService {
    pub fn new() -> Self {
        Self::from_products(Vec::new())
    }

    pub fn with_seed_data() -> Self {
        Self::from_products(seed_products())
    }

    /// id 计数器从现有最大 id 之后开始，只增不减
    pub fn from_products(products: Vec<Product>) -> Self {
        let next_id = products.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        Self {
            inner: Arc::new(Mutex::new(Catalog { products, next_id })),
        }
    }

    fn catalog(&self) -> Result<MutexGuard<'_, Catalog>, CoreError> {
        self.inner
            .lock()
            .map_err(|e| CoreError::Internal(format!("产品存储锁异常: {}", e)))
    }

    pub fn list(&self) -> Result<Vec<Product>, CoreError> {
        let catalog = self.catalog()?;
        debug!("获取到 {} 个产品", catalog.products.len());
        Ok(catalog.products.clone())
    }

    pub fn get(&self, id: i64) -> Result<Product, CoreError> {
        let catalog = self.catalog()?;
        catalog
            .products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    pub fn create(&self, input: ProductInput) -> Result<Product, CoreError> {
        let mut catalog = self.catalog()?;
        let id = catalog.next_id;
        catalog.next_id += 1;

        let product = input.into_product(id);
        catalog.products.push(product.clone());
        info!(id, name = %product.name, "产品创建成功");
        Ok(product)
    }

    pub fn update(&self, id: i64, input: ProductInput) -> Result<Product, CoreError> {
        let mut catalog = self.catalog()?;
        let product = catalog
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| not_found(id))?;

        product.name = input.name;
        product.price = input.price;
        info!(id, name = %product.name, "产品更新成功");
        Ok(product.clone())
    }

    pub fn delete(&self, id: i64) -> Result<Product, CoreError> {
        let mut catalog = self.catalog()?;
        let index = catalog
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| not_found(id))?;

        let removed = catalog.products.remove(index);
        info!(id, "产品删除成功");
        Ok(removed)
    }

    pub fn len(&self) -> Result<usize, CoreError> {
        Ok(self.catalog()?.products.len())
    }

    pub fn is_empty(&self) -> Result<bool, CoreError> {
        Ok(self.len()? == 0)
    }
}

impl Default for ProductService {
    fn default() -> Self {
        Self::new()
    }
}

fn not_found(id: i64) -> CoreError {
    warn!(id, "产品不存在");
    CoreError::NotFound(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_data() {
        let service = ProductService::with_seed_data();
        let products = service.list().unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].name, "Laptop");
        assert_eq!(service.get(1).unwrap().name, "Laptop");
    }

    #[test]
    fn test_get_missing() {
        let service = ProductService::with_seed_data();
        assert!(matches!(service.get(999), Err(CoreError::NotFound(999))));
    }

    #[test]
    fn test_create_assigns_next_id() {
        let service = ProductService::with_seed_data();
        let created = service.create(ProductInput::new("Tablet", 500.0)).unwrap();
        assert_eq!(created.id, 3);
        assert_eq!(service.get(3).unwrap(), created);
    }

    #[test]
    fn test_create_on_empty_store() {
        let service = ProductService::new();
        assert!(service.is_empty().unwrap());
        let created = service.create(ProductInput::new("Tablet", 500.0)).unwrap();
        assert_eq!(created.id, 1);
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let service = ProductService::with_seed_data();
        let tablet = service.create(ProductInput::new("Tablet", 500.0)).unwrap();
        service.delete(tablet.id).unwrap();
        let monitor = service.create(ProductInput::new("Monitor", 300.0)).unwrap();
        assert_eq!(monitor.id, 4);

        // 删空之后仍然继续递增
        for product in service.list().unwrap() {
            service.delete(product.id).unwrap();
        }
        let next = service.create(ProductInput::new("Keyboard", 50.0)).unwrap();
        assert_eq!(next.id, 5);
    }

    #[test]
    fn test_update_preserves_id_and_order() {
        let service = ProductService::with_seed_data();
        let updated = service
            .update(1, ProductInput::new("Laptop Pro", 1500.0))
            .unwrap();
        assert_eq!(updated.id, 1);
        assert_eq!(updated.price, 1500.0);

        let ids: Vec<i64> = service.list().unwrap().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_update_and_delete_missing_leave_collection_unchanged() {
        let service = ProductService::with_seed_data();
        let before = service.list().unwrap();

        assert!(matches!(
            service.update(999, ProductInput::new("Ghost", 1.0)),
            Err(CoreError::NotFound(999))
        ));
        assert!(matches!(service.delete(999), Err(CoreError::NotFound(999))));
        assert_eq!(service.list().unwrap(), before);
    }

    #[test]
    fn test_clones_share_state() {
        let service = ProductService::with_seed_data();
        let other = service.clone();
        other.delete(2).unwrap();
        assert_eq!(service.len().unwrap(), 1);
    }

    #[test]
    fn test_concurrent_creates_get_unique_ids() {
        let service = ProductService::new();
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let service = service.clone();
                std::thread::spawn(move || {
                    (0..25)
                        .map(|j| {
                            service
                                .create(ProductInput::new(format!("p-{}-{}", i, j), 1.0))
                                .unwrap()
                                .id
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut ids: Vec<i64> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 200);
        assert_eq!(service.len().unwrap(), 200);
    }
}
