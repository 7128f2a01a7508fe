use crate::shared::icons::icon;
use crate::shared::list_utils::active_class;
use leptos::ev::MouseEvent;
use leptos::prelude::*;

/// FilterPanel component - panel with heading and filter blocks
#[component]
pub fn FilterPanel(
    /// Number of active filters (for badge display)
    #[prop(into)]
    active_filters_count: Signal<usize>,

    /// Filter content (tabs, search, actions)
    children: Children,
) -> impl IntoView {
    view! {
        <nav class="panel filter-panel">
            <p class="panel-heading filter-panel-header">
                {icon("filter")}
                <span class="filter-panel__title">"Filters"</span>
                {move || {
                    let count = active_filters_count.get();
                    if count > 0 {
                        view! {
                            <span class="badge badge--primary">{count}</span>
                        }.into_any()
                    } else {
                        view! { <></> }.into_any()
                    }
                }}
            </p>
            {children()}
        </nav>
    }
}

/// FilterTab component - single tab in the panel tab row
#[component]
pub fn FilterTab(
    /// Tab label
    #[prop(into)]
    label: String,

    /// Whether the tab is currently selected
    #[prop(into)]
    active: Signal<bool>,

    /// `data-cy` selector for end-to-end tests
    data_cy: &'static str,

    /// Callback when the tab is clicked
    on_select: Callback<()>,
) -> impl IntoView {
    view! {
        <a
            data-cy=data_cy
            href="#/"
            class=move || active_class("", active.get())
            on:click=move |ev: MouseEvent| {
                ev.prevent_default();
                on_select.run(());
            }
        >
            {label}
        </a>
    }
}
