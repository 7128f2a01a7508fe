use crate::domain::a002_category::CategoryId;
use serde::{Deserialize, Serialize};

/// Уникальный идентификатор товара
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub i64);

impl ProductId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

/// Товар каталога
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,

    #[serde(rename = "categoryId")]
    pub category_id: CategoryId,
}

impl Product {
    pub fn new(id: i64, name: impl Into<String>, category_id: i64) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.into(),
            category_id: CategoryId::new(category_id),
        }
    }
}
