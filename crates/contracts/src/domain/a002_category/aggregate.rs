use crate::domain::a001_user::UserId;
use serde::{Deserialize, Serialize};

/// Уникальный идентификатор категории
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub i64);

impl CategoryId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

/// Категория товаров
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub title: String,
    pub icon: String,

    /// Ссылка на владельца; может не разрешаться
    #[serde(rename = "ownerId")]
    pub owner_id: UserId,
}

impl Category {
    pub fn new(
        id: i64,
        title: impl Into<String>,
        icon: impl Into<String>,
        owner_id: i64,
    ) -> Self {
        Self {
            id: CategoryId::new(id),
            title: title.into(),
            icon: icon.into(),
            owner_id: UserId::new(owner_id),
        }
    }

    /// Подпись для колонки таблицы: "icon - title"
    pub fn label(&self) -> String {
        format!("{} - {}", self.icon, self.title)
    }
}
