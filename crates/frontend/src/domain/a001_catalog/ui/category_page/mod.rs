pub mod state;

use self::state::{CategoryEvent, CategoryPageState, CategoryView};
use crate::domain::a001_catalog::api::{fetch_catalogs_with_timeout, FETCH_TIMEOUT_MS};
use crate::domain::a001_catalog::ui::filter_sidebar::FilterSidebar;
use crate::domain::a001_catalog::ui::product_card::ProductCard;
use contracts::domain::a001_catalog::filters::ActiveFilters;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

/// Route parameter holding the category slug
pub const SLUG_PARAM: &str = "category_slug";

fn dispatch(state: RwSignal<CategoryPageState>, event: CategoryEvent) {
    // The page may be gone by the time a fetch completes.
    let _ = state.try_update(|s| {
        let current = std::mem::take(s);
        *s = current.reduce(event);
    });
}

#[component]
#[allow(non_snake_case)]
pub fn CategoryPage() -> impl IntoView {
    let params = use_params_map();
    let slug = Memo::new(move |_| params.read().get(SLUG_PARAM).unwrap_or_default());
    let state = RwSignal::new(CategoryPageState::default());

    Effect::new(move |_| {
        let slug = slug.get();
        log::debug!("Category slug changed: {}", slug);
        dispatch(state, CategoryEvent::SlugChanged(slug));

        let generation = state.with_untracked(|s| s.generation);
        wasm_bindgen_futures::spawn_local(async move {
            let result = fetch_catalogs_with_timeout(FETCH_TIMEOUT_MS).await;
            if let Err(e) = &result {
                log::error!("Error fetching data: {}", e);
            }
            dispatch(state, CategoryEvent::CatalogsLoaded { generation, result });
        });
    });

    let on_toggle = Callback::new(move |label: String| {
        dispatch(state, CategoryEvent::FilterToggled(label));
    });

    let active_filters = Signal::derive(move || {
        state.with(|s| match &s.view {
            CategoryView::Ready { active_filters, .. } => active_filters.clone(),
            _ => ActiveFilters::new(),
        })
    });

    view! {
        {move || match state.with(|s| s.view.clone()) {
            CategoryView::Loading => view! {
                <div class="category-page__placeholder">"Loading..."</div>
            }.into_any(),
            CategoryView::NotFound => view! {
                <div class="category-page__placeholder">"Category not found"</div>
            }.into_any(),
            CategoryView::Error(reason) => view! {
                <div class="category-page__placeholder error">
                    {format!("Failed to load category: {}", reason)}
                </div>
            }.into_any(),
            CategoryView::Ready { catalog, filtered, .. } => view! {
                <div class="category-page">
                    <FilterSidebar active_filters=active_filters on_toggle=on_toggle />
                    <div class="category-page__content">
                        <h1 class="category-page__title">{catalog.name}</h1>
                        {if filtered.is_empty() {
                            view! { <p>"No products found."</p> }.into_any()
                        } else {
                            view! {
                                <div class="product-grid">
                                    {filtered
                                        .into_iter()
                                        .map(|product| view! { <ProductCard product=product /> })
                                        .collect_view()}
                                </div>
                            }.into_any()
                        }}
                    </div>
                </div>
            }.into_any(),
        }}
    }
}
