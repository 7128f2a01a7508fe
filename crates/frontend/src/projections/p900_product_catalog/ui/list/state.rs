use contracts::projections::p900_product_catalog::CatalogFilter;
use leptos::prelude::*;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductCatalogState {
    // filters
    pub filter: CatalogFilter,
}

pub fn create_state() -> RwSignal<ProductCatalogState> {
    RwSignal::new(ProductCatalogState::default())
}
