use crate::shared::dataset::Dataset;

use super::row::CatalogRow;

/// Соединяет товары с категориями (по `category_id`) и категории с
/// владельцами (по `owner_id`).
///
/// Порядок товаров сохраняется. При дублирующихся id берется первое
/// совпадение; неразрешенная ссылка дает `None`.
pub fn build_catalog(dataset: &Dataset) -> Vec<CatalogRow> {
    dataset
        .products
        .iter()
        .map(|product| {
            let category = dataset
                .categories
                .iter()
                .find(|c| c.id == product.category_id);
            let user = category
                .and_then(|c| dataset.users.iter().find(|u| u.id == c.owner_id));
            CatalogRow::new(product, category, user)
        })
        .collect()
}
