//! p900: каталог товаров, соединенный с категориями и владельцами.

pub mod builder;
pub mod filter;
pub mod row;

pub use builder::build_catalog;
pub use filter::{filter_catalog, CatalogFilter};
pub use row::CatalogRow;
