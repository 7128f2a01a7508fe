//! Статически встроенный набор данных каталога: пользователи, категории, товары.
//!
//! JSON-файлы из `data/` вшиваются в бинарник через `include_str!` и
//! разбираются один раз при первом обращении.

use anyhow::Context;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::domain::a001_user::User;
use crate::domain::a002_category::Category;
use crate::domain::a003_product::Product;

const USERS_JSON: &str = include_str!("../../data/users.json");
const CATEGORIES_JSON: &str = include_str!("../../data/categories.json");
const PRODUCTS_JSON: &str = include_str!("../../data/products.json");

static BUNDLED: Lazy<anyhow::Result<Dataset>> =
    Lazy::new(|| Dataset::from_json(USERS_JSON, CATEGORIES_JSON, PRODUCTS_JSON));

/// Три упорядоченные коллекции, неизменяемые после загрузки
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub users: Vec<User>,
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
}

impl Dataset {
    pub fn new(users: Vec<User>, categories: Vec<Category>, products: Vec<Product>) -> Self {
        Self {
            users,
            categories,
            products,
        }
    }

    /// Разбирает три JSON-массива. Перекрестные ссылки не проверяются.
    pub fn from_json(users: &str, categories: &str, products: &str) -> anyhow::Result<Self> {
        let users: Vec<User> = serde_json::from_str(users).context("Failed to parse users")?;
        let categories: Vec<Category> =
            serde_json::from_str(categories).context("Failed to parse categories")?;
        let products: Vec<Product> =
            serde_json::from_str(products).context("Failed to parse products")?;

        Ok(Self::new(users, categories, products))
    }

    /// Имена пользователей в порядке набора данных (вкладки фильтра по владельцу)
    pub fn user_names(&self) -> Vec<String> {
        self.users.iter().map(|u| u.name.clone()).collect()
    }
}

/// Встроенный набор данных, разобранный один раз на всё время жизни страницы
pub fn bundled() -> anyhow::Result<&'static Dataset> {
    BUNDLED
        .as_ref()
        .map_err(|e| anyhow::anyhow!("Bundled dataset is invalid: {:#}", e))
}
