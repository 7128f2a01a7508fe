use crate::projections::p900_product_catalog::ui::list::ProductCatalogList;
use crate::shared::config::AppConfig;
use leptos::prelude::*;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Provide the configuration to the whole app via context.
    provide_context(config);

    view! {
        <section class="section">
            <div class="container">
                <ProductCatalogList />
            </div>
        </section>
    }
}
