//! 产品管理应用

pub mod handler;
pub mod model;
pub mod service;

pub use model::{Product, ProductInput};
pub use service::ProductService;
