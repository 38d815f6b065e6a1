use serde::{Deserialize, Serialize};
use std::fmt;

use super::slug::slugify;

// ============================================================================
// ID Type
// ============================================================================

/// Идентификатор товара.
///
/// The catalog source emits both numeric and string ids, so both are kept
/// as-is rather than coerced.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Number(u64),
    Text(String),
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductId::Number(n) => write!(f, "{}", n),
            ProductId::Text(s) => f.write_str(s),
        }
    }
}

// ============================================================================
// Product
// ============================================================================

pub const MAX_RATING: u8 = 5;

/// Товар в каталоге (только для отображения)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub image: String,
    pub price: f64,

    #[serde(rename = "discountedPrice")]
    pub discounted_price: f64,

    /// Whole stars, 1–5. Fractional values are accepted and floored for display.
    pub rating: f64,
}

impl Product {
    /// Star row for the product card: position `i` (1-based) is filled
    /// iff `i <= rating`. Out-of-range ratings are clamped for display.
    pub fn star_states(&self) -> [bool; MAX_RATING as usize] {
        let rating = self.rating.floor().clamp(0.0, MAX_RATING as f64);
        let mut stars = [false; MAX_RATING as usize];
        for (i, star) in stars.iter_mut().enumerate() {
            *star = (i as f64) < rating;
        }
        stars
    }
}

/// Format a price the way the product card shows it: `$80`, `$79.99`.
/// Whole numbers carry no fractional part.
pub fn format_price(value: f64) -> String {
    format!("${}", value)
}

// ============================================================================
// Catalog
// ============================================================================

/// Каталог: именованная категория товаров.
///
/// `slug` is always derived from `name` when the catalog is built or
/// deserialized; a slug supplied on the wire is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "CatalogRecord")]
pub struct Catalog {
    pub name: String,
    pub slug: String,
    pub products: Vec<Product>,
}

/// Wire shape of a catalog as stored by the data source.
#[derive(Debug, Clone, Deserialize)]
struct CatalogRecord {
    name: String,
    #[serde(default)]
    products: Vec<Product>,
}

impl From<CatalogRecord> for Catalog {
    fn from(record: CatalogRecord) -> Self {
        Catalog::new(record.name, record.products)
    }
}

impl Catalog {
    pub fn new(name: impl Into<String>, products: Vec<Product>) -> Self {
        let name = name.into();
        let slug = slugify(&name);
        Self {
            name,
            slug,
            products,
        }
    }

    pub fn matches_slug(&self, slug: &str) -> bool {
        self.slug == slug
    }
}

/// Find the catalog for a route slug. The first match wins when several
/// catalogs normalize to the same slug.
pub fn find_by_slug<'a>(catalogs: &'a [Catalog], slug: &str) -> Option<&'a Catalog> {
    catalogs.iter().find(|c| c.matches_slug(slug))
}
