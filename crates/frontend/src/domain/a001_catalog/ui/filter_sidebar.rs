use contracts::domain::a001_catalog::filters::{ActiveFilters, FILTER_LABELS};
use leptos::prelude::*;

/// Боковая панель фильтров категории
#[component]
pub fn FilterSidebar(
    /// Currently selected labels
    #[prop(into)]
    active_filters: Signal<ActiveFilters>,

    /// Called with the clicked label
    on_toggle: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="category-page__sidebar">
            <h2 class="category-page__sidebar-title">"Filter By:"</h2>
            <ul>
                {FILTER_LABELS
                    .into_iter()
                    .map(|label| {
                        view! {
                            <li
                                class="filter-option"
                                class:filter-option--active=move || active_filters.with(|f| f.contains(label))
                                on:click=move |_| on_toggle.run(label.to_string())
                            >
                                {label}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
