//! View state of the category page.
//!
//! The page holds one [`CategoryPageState`] and only changes it through
//! [`CategoryPageState::reduce`], so every transition is a plain function of
//! (state, event) and can be tested without a browser.

use contracts::domain::a001_catalog::aggregate::{find_by_slug, Catalog, Product};
use contracts::domain::a001_catalog::filters::{filter_products, ActiveFilters};

#[derive(Debug, Clone, PartialEq)]
pub enum CategoryView {
    Loading,
    NotFound,
    Error(String),
    Ready {
        catalog: Catalog,
        active_filters: ActiveFilters,
        /// Products of `catalog` accepted by `active_filters`, in catalog order
        filtered: Vec<Product>,
    },
}

impl CategoryView {
    fn ready(catalog: Catalog, active_filters: ActiveFilters) -> Self {
        let filtered = filter_products(&catalog.products, &active_filters)
            .into_iter()
            .cloned()
            .collect();
        CategoryView::Ready {
            catalog,
            active_filters,
            filtered,
        }
    }
}

#[derive(Debug, Clone)]
pub enum CategoryEvent {
    /// Route slug changed; a new fetch tagged with the next generation starts.
    SlugChanged(String),
    /// A fetch finished. Ignored unless `generation` is the current one.
    CatalogsLoaded {
        generation: u64,
        result: Result<Vec<Catalog>, String>,
    },
    FilterToggled(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryPageState {
    pub slug: Option<String>,
    /// Incremented on every slug change; identifies the fetch in flight.
    pub generation: u64,
    pub view: CategoryView,
}

impl Default for CategoryPageState {
    fn default() -> Self {
        Self {
            slug: None,
            generation: 0,
            view: CategoryView::Loading,
        }
    }
}

impl CategoryPageState {
    pub fn reduce(self, event: CategoryEvent) -> Self {
        match event {
            // Filters start empty for every category.
            CategoryEvent::SlugChanged(slug) => Self {
                slug: Some(slug),
                generation: self.generation + 1,
                view: CategoryView::Loading,
            },
            CategoryEvent::CatalogsLoaded { generation, .. } if generation != self.generation => {
                log::debug!(
                    "Dropping stale catalog response (generation {}, current {})",
                    generation,
                    self.generation
                );
                self
            }
            CategoryEvent::CatalogsLoaded { result, .. } => {
                let view = match result {
                    Err(reason) => CategoryView::Error(reason),
                    Ok(catalogs) => {
                        let slug = self.slug.as_deref().unwrap_or_default();
                        match find_by_slug(&catalogs, slug) {
                            Some(catalog) => {
                                CategoryView::ready(catalog.clone(), ActiveFilters::new())
                            }
                            None => CategoryView::NotFound,
                        }
                    }
                };
                Self { view, ..self }
            }
            CategoryEvent::FilterToggled(label) => match self.view {
                CategoryView::Ready {
                    catalog,
                    mut active_filters,
                    ..
                } => {
                    active_filters.toggle(&label);
                    Self {
                        view: CategoryView::ready(catalog, active_filters),
                        ..self
                    }
                }
                _ => self,
            },
        }
    }
}
