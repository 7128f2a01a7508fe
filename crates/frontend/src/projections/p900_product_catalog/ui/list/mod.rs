mod state;

use contracts::domain::a001_user::{Sex, User};
use contracts::projections::p900_product_catalog::{build_catalog, CatalogRow};
use contracts::shared::dataset::{self, Dataset};
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::filter_panel::{FilterPanel, FilterTab};
use crate::shared::config::AppConfig;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use state::create_state;

const TABLE_ID: &str = "p900-product-catalog-table";
const EMPTY_MESSAGE: &str = "No products matching selected criteria";

/// Цвет имени владельца по полу
fn user_class(user: Option<&User>) -> &'static str {
    match user.map(|u| u.sex) {
        Some(Sex::M) => "has-text-link",
        Some(Sex::F) => "has-text-danger",
        None => "",
    }
}

/// Позиция входит в ключ строки: id товаров не обязаны быть уникальными
fn keyed_rows(rows: &[CatalogRow]) -> Vec<(usize, CatalogRow)> {
    rows.iter().cloned().enumerate().collect()
}

fn load_dataset() -> Dataset {
    match dataset::bundled() {
        Ok(data) => data.clone(),
        Err(e) => {
            log::error!("Failed to load product catalog: {:#}", e);
            Dataset::default()
        }
    }
}

#[component]
pub fn ProductCatalogList() -> impl IntoView {
    let title = use_context::<AppConfig>()
        .map(|c| c.app.title)
        .unwrap_or_else(|| AppConfig::default().app.title);

    let data = load_dataset();
    let owners = data.user_names();
    // Базовый набор строк строится один раз при монтировании
    let baseline: StoredValue<Vec<CatalogRow>> = StoredValue::new(build_catalog(&data));
    log::debug!("Product catalog built: {} rows", baseline.with_value(Vec::len));

    let state = create_state();

    let visible = Memo::new(move |_| {
        state.with(|s| baseline.with_value(|rows| s.filter.apply(rows)))
    });

    let select_owner = move |name: String| {
        log::debug!("Owner filter: {:?}", name);
        state.update(|s| s.filter.select_owner(name));
    };

    let show_all_owners = move || {
        log::debug!("Owner filter cleared");
        state.update(|s| s.filter.show_all_owners());
    };

    let set_query = move |text: String| {
        state.update(|s| s.filter.set_query(text));
    };

    let clear_query = move || {
        state.update(|s| s.filter.clear_query());
    };

    let reset_filters = move || {
        log::debug!("Filters reset");
        state.update(|s| s.filter.reset());
    };

    let owner_tabs = owners
        .into_iter()
        .map(|name| {
            let tab_name = name.clone();
            let select_name = name.clone();
            view! {
                <FilterTab
                    label=name
                    data_cy="FilterUser"
                    active=Signal::derive(move || state.with(|s| s.filter.is_owner_active(&tab_name)))
                    on_select=Callback::new(move |_| select_owner(select_name.clone()))
                />
            }
        })
        .collect_view();

    view! {
        <PageFrame page_id="p900_product_catalog--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="title page__title">{title}</h1>
                    <Badge>
                        {move || visible.with(Vec::len).to_string()}
                    </Badge>
                </div>
            </div>

            <div class="page__content">
                <div class="block">
                    <FilterPanel active_filters_count=Signal::derive(move || state.with(|s| s.filter.active_count()))>
                        <p class="panel-tabs has-text-weight-bold">
                            <FilterTab
                                label="All"
                                data_cy="FilterAllUsers"
                                active=Signal::derive(move || state.with(|s| s.filter.is_all_owners()))
                                on_select=Callback::new(move |_| show_all_owners())
                            />
                            {owner_tabs}
                        </p>

                        <div class="panel-block">
                            <SearchInput
                                value=Signal::derive(move || state.with(|s| s.filter.query.clone()))
                                on_change=Callback::new(set_query)
                                show_clear=Signal::derive(move || state.with(|s| s.filter.has_query()))
                                on_clear=Callback::new(move |_| clear_query())
                                placeholder="Search"
                            />
                        </div>

                        <div class="panel-block">
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| reset_filters()
                                attr:data-cy="ResetAllButton"
                                class="button is-link is-outlined is-fullwidth"
                            >
                                {icon("refresh")}
                                " Reset all filters"
                            </Button>
                        </div>
                    </FilterPanel>
                </div>

                <div class="box table-container table-wrapper">
                    <Show
                        when=move || !visible.with(Vec::is_empty)
                        fallback=|| view! {
                            <p data-cy="NoMatchingMessage">{EMPTY_MESSAGE}</p>
                        }
                    >
                        <Table
                            attr:id=TABLE_ID
                            attr:data-cy="ProductTable"
                            class="table is-striped is-narrow is-fullwidth"
                        >
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"ID"</TableHeaderCell>
                                    <TableHeaderCell>"Product"</TableHeaderCell>
                                    <TableHeaderCell>"Category"</TableHeaderCell>
                                    <TableHeaderCell>"User"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>

                            <TableBody>
                                <For
                                    each=move || visible.with(|rows| keyed_rows(rows))
                                    key=|(index, row)| (*index, row.id)
                                    children=move |(_, row): (usize, CatalogRow)| {
                                        let category = row.category_label().unwrap_or_default();
                                        let owner = row.owner_name().unwrap_or_default().to_string();
                                        let owner_class = user_class(row.user.as_ref());
                                        view! {
                                            <TableRow attr:data-cy="Product">
                                                <TableCell attr:data-cy="ProductId">
                                                    <TableCellLayout>
                                                        <span class="has-text-weight-bold">{row.id.value()}</span>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell attr:data-cy="ProductName">
                                                    <TableCellLayout truncate=true>{row.name.clone()}</TableCellLayout>
                                                </TableCell>
                                                <TableCell attr:data-cy="ProductCategory">
                                                    <TableCellLayout truncate=true>{category}</TableCellLayout>
                                                </TableCell>
                                                <TableCell attr:data-cy="ProductUser">
                                                    <TableCellLayout>
                                                        <span class=owner_class>{owner}</span>
                                                    </TableCellLayout>
                                                </TableCell>
                                            </TableRow>
                                        }
                                    }
                                />
                            </TableBody>
                        </Table>
                    </Show>
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_category::Category;
    use contracts::domain::a003_product::Product;
    use std::collections::HashSet;

    #[test]
    fn test_user_class_by_sex() {
        let max = User::new(3, "Max", Sex::M);
        let anna = User::new(2, "Anna", Sex::F);
        assert_eq!(user_class(Some(&max)), "has-text-link");
        assert_eq!(user_class(Some(&anna)), "has-text-danger");
        assert_eq!(user_class(None), "");
    }

    #[test]
    fn test_duplicate_product_ids_get_distinct_keys() {
        let data = Dataset::new(
            vec![User::new(1, "Roma", Sex::M)],
            vec![Category::new(1, "Drinks", "🍺", 1)],
            vec![Product::new(7, "Milk", 1), Product::new(7, "Kefir", 1)],
        );
        let keyed = keyed_rows(&build_catalog(&data));

        let keys: HashSet<_> = keyed.iter().map(|(index, row)| (*index, row.id)).collect();
        assert_eq!(keys.len(), 2);
        let names: Vec<&str> = keyed.iter().map(|(_, row)| row.name.as_str()).collect();
        assert_eq!(names, vec!["Milk", "Kefir"]);
    }

    #[test]
    fn test_bundled_dataset_is_available() {
        let data = load_dataset();
        assert!(!data.products.is_empty());
        assert_eq!(build_catalog(&data).len(), data.products.len());
    }
}
