//! 产品数据模型

use serde::{Deserialize, Deserializer, Serialize};

/// 产品记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    /// 使用 f64 表示价格，整数价格序列化为 `1500.0` 而不是 `1500`
    pub price: f64,
}

/// 创建 / 更新产品的请求体
///
/// 客户端传入的 `id` 会被忽略，由服务端分配。
/// 缺失或为 `null` 的字段使用默认值，不做任何校验。
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProductInput {
    #[serde(default, alias = "Name", deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, alias = "Price", deserialize_with = "null_as_default")]
    pub price: f64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl ProductInput {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    pub(crate) fn into_product(self, id: i64) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
        }
    }
}

/// 启动时预置的两条产品记录
pub fn seed_products() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            name: "Laptop".to_string(),
            price: 1200.0,
        },
        Product {
            id: 2,
            name: "Smartphone".to_string(),
            price: 800.0,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_ignores_client_id() {
        let input: ProductInput =
            serde_json::from_str(r#"{"id": 42, "name": "Tablet", "price": 500}"#).unwrap();
        assert_eq!(input, ProductInput::new("Tablet", 500.0));
    }

    #[test]
    fn test_input_accepts_pascal_case() {
        let input: ProductInput =
            serde_json::from_str(r#"{"Id": 7, "Name": "Laptop Pro", "Price": 1500.5}"#).unwrap();
        assert_eq!(input.name, "Laptop Pro");
        assert_eq!(input.price, 1500.5);
    }

    #[test]
    fn test_input_missing_fields_default() {
        let input: ProductInput = serde_json::from_str("{}").unwrap();
        assert_eq!(input, ProductInput::default());
    }

    #[test]
    fn test_input_null_fields_default() {
        let input: ProductInput =
            serde_json::from_str(r#"{"Name": null, "price": null}"#).unwrap();
        assert_eq!(input, ProductInput::default());

        let input: ProductInput = serde_json::from_str(r#"{"name": null, "price": 5}"#).unwrap();
        assert_eq!(input, ProductInput::new("", 5.0));
    }

    #[test]
    fn test_product_serializes_lowercase_fields() {
        let json = serde_json::to_value(&seed_products()[0]).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "name": "Laptop", "price": 1200.0})
        );
    }
}
