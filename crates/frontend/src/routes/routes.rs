use crate::domain::a001_catalog::ui::category_page::CategoryPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
fn PageNotFound() -> impl IntoView {
    view! { <div class="category-page__placeholder">"Page not found"</div> }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <main class="storefront">
                <Routes fallback=|| view! { <PageNotFound /> }>
                    <Route path=path!("/category/:category_slug") view=CategoryPage />
                    <Route path=path!("/:category_slug") view=CategoryPage />
                </Routes>
            </main>
        </Router>
    }
}
