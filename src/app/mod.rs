//! 应用层

pub mod health;
pub mod products;

use products::ProductService;

/// 处理器共享的应用状态
#[derive(Clone)]
pub struct AppState {
    pub product_service: ProductService,
}

impl AppState {
    pub fn new(product_service: ProductService) -> Self {
        Self { product_service }
    }
}
