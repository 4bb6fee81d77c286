//! カテゴリフィルタ

use fontpair_pro::CategoryFilter;
use leptos::prelude::*;

#[component]
pub fn FilterBar(
    categories: Vec<CategoryFilter>,
    active: Signal<CategoryFilter>,
    #[prop(into)] on_select: Callback<CategoryFilter>,
) -> impl IntoView {
    view! {
        <nav class="filter-bar">
            {categories
                .into_iter()
                .map(|filter| {
                    view! {
                        <button
                            class="filter-btn"
                            class:active=move || active.get() == filter
                            on:click=move |_| on_select.run(filter)
                        >
                            {filter.label()}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
