use serde::{Deserialize, Serialize};

use super::row::CatalogRow;

/// Состояние фильтров каталога.
///
/// Пустая строка означает "фильтр не задан". Меняется только через
/// методы-намерения ниже.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFilter {
    /// Имя владельца, точное совпадение с учетом регистра
    pub owner: String,
    /// Подстрока в названии товара, без учета регистра
    pub query: String,
}

impl CatalogFilter {
    pub fn new(owner: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            query: query.into(),
        }
    }

    pub fn select_owner(&mut self, name: impl Into<String>) {
        self.owner = name.into();
    }

    pub fn show_all_owners(&mut self) {
        self.owner.clear();
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    /// Сбрасывает оба фильтра
    pub fn reset(&mut self) {
        self.show_all_owners();
        self.clear_query();
    }

    pub fn is_all_owners(&self) -> bool {
        self.owner.is_empty()
    }

    pub fn is_owner_active(&self, name: &str) -> bool {
        self.owner == name
    }

    pub fn has_query(&self) -> bool {
        !self.query.is_empty()
    }

    /// Количество заданных фильтров (для бейджа)
    pub fn active_count(&self) -> usize {
        usize::from(!self.is_all_owners()) + usize::from(self.has_query())
    }

    pub fn matches_owner(&self, row: &CatalogRow) -> bool {
        if self.owner.is_empty() {
            return true;
        }
        row.owner_name() == Some(self.owner.as_str())
    }

    pub fn matches_query(&self, row: &CatalogRow) -> bool {
        row.name.to_lowercase().contains(&self.query.to_lowercase())
    }

    pub fn matches(&self, row: &CatalogRow) -> bool {
        self.matches_owner(row) && self.matches_query(row)
    }

    /// Подмножество строк, прошедших оба фильтра, в исходном порядке
    pub fn apply(&self, rows: &[CatalogRow]) -> Vec<CatalogRow> {
        filter_catalog(rows, self)
    }
}

/// Пересчитывается целиком при каждом вызове
pub fn filter_catalog(rows: &[CatalogRow], filter: &CatalogFilter) -> Vec<CatalogRow> {
    rows.iter()
        .filter(|row| filter.matches(row))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_user::{Sex, User};
    use crate::domain::a002_category::Category;
    use crate::domain::a003_product::Product;
    use crate::projections::p900_product_catalog::build_catalog;
    use crate::shared::dataset::{self, Dataset};

    fn scenario_rows() -> Vec<CatalogRow> {
        build_catalog(&Dataset::new(
            vec![User::new(100, "Max", Sex::M)],
            vec![Category::new(10, "Fruits", "🍎", 100)],
            vec![Product::new(1, "Apple", 10)],
        ))
    }

    fn bundled_rows() -> Vec<CatalogRow> {
        build_catalog(dataset::bundled().unwrap())
    }

    fn names(rows: &[CatalogRow]) -> Vec<&str> {
        rows.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_empty_filter_is_identity() {
        let rows = bundled_rows();
        assert_eq!(CatalogFilter::default().apply(&rows), rows);
    }

    #[test]
    fn test_owner_filter_is_exact_and_case_sensitive() {
        let rows = bundled_rows();

        let anna = CatalogFilter::new("Anna", "").apply(&rows);
        assert_eq!(names(&anna), vec!["Bread", "Eggs", "Sugar", "Sausage", "Apple"]);

        assert!(CatalogFilter::new("anna", "").apply(&rows).is_empty());
        assert!(CatalogFilter::new("Ann", "").apply(&rows).is_empty());
    }

    #[test]
    fn test_owner_without_products_yields_nothing() {
        assert!(CatalogFilter::new("John", "").apply(&bundled_rows()).is_empty());
    }

    #[test]
    fn test_absent_user_never_matches_owner() {
        let rows = build_catalog(&Dataset::new(
            vec![],
            vec![Category::new(1, "Orphans", "?", 9)],
            vec![Product::new(1, "Lonely", 1)],
        ));
        let filter = CatalogFilter::new("Max", "");
        assert!(!filter.matches_owner(&rows[0]));
        assert!(CatalogFilter::default().matches_owner(&rows[0]));
    }

    #[test]
    fn test_query_is_case_insensitive_substring() {
        let rows = bundled_rows();
        assert_eq!(names(&CatalogFilter::new("", "SU").apply(&rows)), vec!["Sugar"]);
        assert_eq!(
            names(&CatalogFilter::new("", "s").apply(&rows)),
            vec!["Eggs", "Sugar", "Sausage", "Sweater"]
        );
        assert!(CatalogFilter::new("", "xyz").apply(&rows).is_empty());
    }

    #[test]
    fn test_predicates_combine_with_and() {
        let rows = bundled_rows();
        let filter = CatalogFilter::new("Max", "sw");
        assert_eq!(names(&filter.apply(&rows)), vec!["Sweater"]);
        for row in &rows {
            assert_eq!(
                filter.matches(row),
                filter.matches_owner(row) && filter.matches_query(row)
            );
        }
    }

    #[test]
    fn test_apply_keeps_exactly_matching_rows() {
        let rows = bundled_rows();
        for owner in ["", "Roma", "Anna", "Max", "John", "max"] {
            for query in ["", "s", "SU", "apple", "zz"] {
                let filter = CatalogFilter::new(owner, query);
                let expected: Vec<CatalogRow> =
                    rows.iter().filter(|r| filter.matches(r)).cloned().collect();
                assert_eq!(filter.apply(&rows), expected, "owner={owner:?} query={query:?}");
            }
        }
    }

    #[test]
    fn test_has_query_tracks_search_text() {
        let mut filter = CatalogFilter::default();
        assert!(!filter.has_query());
        filter.set_query(" ");
        assert!(filter.has_query());
        filter.reset();
        assert!(!filter.has_query());
    }

    #[test]
    fn test_apply_is_idempotent() {
        let rows = bundled_rows();
        let filter = CatalogFilter::new("Roma", "m");
        assert_eq!(filter.apply(&rows), filter.apply(&rows));
        assert_eq!(filter.apply(&filter.apply(&rows)), filter.apply(&rows));
    }

    #[test]
    fn test_scenario_b_owner_selected() {
        let filter = CatalogFilter::new("Max", "");
        assert_eq!(names(&filter.apply(&scenario_rows())), vec!["Apple"]);
    }

    #[test]
    fn test_scenario_c_name_mismatch_is_empty() {
        let filter = CatalogFilter::new("Max", "pear");
        assert!(filter.apply(&scenario_rows()).is_empty());
    }

    #[test]
    fn test_scenario_d_uppercase_query() {
        let filter = CatalogFilter::new("", "APP");
        assert_eq!(names(&filter.apply(&scenario_rows())), vec!["Apple"]);
    }

    #[test]
    fn test_scenario_e_reset_restores_baseline() {
        let rows = scenario_rows();
        let mut filter = CatalogFilter::new("Max", "pear");
        assert!(filter.apply(&rows).is_empty());

        filter.reset();
        assert_eq!(filter, CatalogFilter::default());
        assert_eq!(filter.apply(&rows), rows);
    }

    #[test]
    fn test_intents() {
        let mut filter = CatalogFilter::default();
        assert!(filter.is_all_owners());
        assert_eq!(filter.active_count(), 0);

        filter.select_owner("Anna");
        filter.set_query("br");
        assert!(filter.is_owner_active("Anna"));
        assert!(!filter.is_owner_active("Max"));
        assert!(filter.has_query());
        assert_eq!(filter.active_count(), 2);

        filter.clear_query();
        assert!(!filter.has_query());
        assert_eq!(filter, CatalogFilter::new("Anna", ""));

        filter.show_all_owners();
        assert_eq!(filter, CatalogFilter::default());
    }
}
