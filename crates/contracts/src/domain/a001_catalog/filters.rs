//! Sidebar filters for the category page.
//!
//! The label set is fixed; it is not derived from catalog data. A product
//! passes when its title contains (case-sensitive) at least one active label.

use serde::{Deserialize, Serialize};

use super::aggregate::Product;

/// Labels shown in the sidebar, in display order.
pub const FILTER_LABELS: [&str; 5] = [
    "Sports supplies",
    "Sale",
    "Football shoes",
    "Player category",
    "Sportswear",
];

/// Currently selected filter labels, kept in the order they were selected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveFilters(Vec<String>);

impl ActiveFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove `label` if selected, otherwise append it.
    pub fn toggle(&mut self, label: &str) {
        match self.0.iter().position(|f| f == label) {
            Some(pos) => {
                self.0.remove(pos);
            }
            None => self.0.push(label.to_string()),
        }
    }

    pub fn contains(&self, label: &str) -> bool {
        self.0.iter().any(|f| f == label)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// `true` when the product should stay visible under this selection.
    pub fn accepts(&self, product: &Product) -> bool {
        self.is_empty() || self.iter().any(|f| product.title.contains(f))
    }
}

/// Products visible under `active`, in catalog order.
pub fn filter_products<'a>(products: &'a [Product], active: &ActiveFilters) -> Vec<&'a Product> {
    products.iter().filter(|p| active.accepts(p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_catalog::aggregate::ProductId;

    fn product(id: u64, title: &str) -> Product {
        Product {
            id: ProductId::Number(id),
            title: title.to_string(),
            image: String::new(),
            price: 10.0,
            discounted_price: 8.0,
            rating: 3.0,
        }
    }

    fn sample() -> Vec<Product> {
        vec![
            product(1, "Nike Football shoes Elite"),
            product(2, "Sportswear hoodie - Sale"),
            product(3, "Goalkeeper gloves"),
            product(4, "Sports supplies kit"),
        ]
    }

    fn titles(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.title.clone()).collect()
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut active = ActiveFilters::new();
        active.toggle("Sale");
        assert!(active.contains("Sale"));
        assert_eq!(active.len(), 1);

        active.toggle("Sale");
        assert!(active.is_empty());
    }

    #[test]
    fn test_toggle_twice_restores_previous_set() {
        let mut active = ActiveFilters::new();
        active.toggle("Sale");
        active.toggle("Sportswear");
        let before = active.clone();

        active.toggle("Football shoes");
        active.toggle("Football shoes");
        assert_eq!(active, before);
    }

    #[test]
    fn test_toggle_keeps_insertion_order() {
        let mut active = ActiveFilters::new();
        active.toggle("Sportswear");
        active.toggle("Sale");
        active.toggle("Football shoes");
        active.toggle("Sale");
        assert_eq!(
            active.iter().collect::<Vec<_>>(),
            vec!["Sportswear", "Football shoes"]
        );
    }

    #[test]
    fn test_empty_selection_returns_everything() {
        let products = sample();
        let filtered = filter_products(&products, &ActiveFilters::new());
        assert_eq!(filtered.len(), products.len());
    }

    #[test]
    fn test_filters_are_ored() {
        let products = sample();
        let mut active = ActiveFilters::new();
        active.toggle("Sale");
        active.toggle("Football shoes");

        let filtered = filter_products(&products, &active);
        assert_eq!(
            titles(&filtered),
            vec!["Nike Football shoes Elite", "Sportswear hoodie - Sale"]
        );
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let products = vec![product(1, "football shoes junior")];
        let mut active = ActiveFilters::new();
        active.toggle("Football shoes");
        assert!(filter_products(&products, &active).is_empty());
    }

    #[test]
    fn test_no_match_yields_empty() {
        let products = vec![product(1, "Nike Football shoes Elite")];
        let mut active = ActiveFilters::new();
        active.toggle("Sale");
        assert!(filter_products(&products, &active).is_empty());
    }

    #[test]
    fn test_filtered_matches_set_definition() {
        let products = sample();
        for mask in 0u32..(1 << FILTER_LABELS.len()) {
            let mut active = ActiveFilters::new();
            for (i, label) in FILTER_LABELS.iter().enumerate() {
                if mask & (1 << i) != 0 {
                    active.toggle(label);
                }
            }

            let expected: Vec<&Product> = products
                .iter()
                .filter(|p| active.is_empty() || active.iter().any(|f| p.title.contains(f)))
                .collect();
            assert_eq!(filter_products(&products, &active), expected);
        }
    }
}
