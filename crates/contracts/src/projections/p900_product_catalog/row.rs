use serde::{Deserialize, Serialize};

use crate::domain::a001_user::User;
use crate::domain::a002_category::{Category, CategoryId};
use crate::domain::a003_product::{Product, ProductId};

/// Строка каталога: товар + разрешенные категория и владелец
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogRow {
    pub id: ProductId,
    pub name: String,
    #[serde(rename = "categoryId")]
    pub category_id: CategoryId,

    // None, если ссылка не разрешилась
    pub category: Option<Category>,
    pub user: Option<User>,
}

impl CatalogRow {
    pub fn new(product: &Product, category: Option<&Category>, user: Option<&User>) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            category_id: product.category_id,
            category: category.cloned(),
            user: user.cloned(),
        }
    }

    pub fn category_label(&self) -> Option<String> {
        self.category.as_ref().map(Category::label)
    }

    pub fn owner_name(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.name.as_str())
    }
}
