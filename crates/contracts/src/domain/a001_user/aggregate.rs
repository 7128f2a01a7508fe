use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор пользователя (владельца категорий)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl UserId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Пол пользователя, определяет цвет имени в таблице
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "m")]
    M,
    #[serde(rename = "f")]
    F,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::M => "m",
            Sex::F => "f",
        }
    }
}

/// Пользователь — владелец категорий товаров
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub sex: Sex,
}

impl User {
    pub fn new(id: i64, name: impl Into<String>, sex: Sex) -> Self {
        Self {
            id: UserId::new(id),
            name: name.into(),
            sex,
        }
    }
}
