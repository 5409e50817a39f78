use strsim::jaro_winkler;

use crate::analysis::constants::SUGGESTION_THRESHOLD;
use crate::models::Product;

/// Ordered, read-only view over the product dataset.
///
/// Keeps the builder's row order and offers case-insensitive lookup, so the
/// dataset itself can stay a plain value passed around explicitly.
pub struct ProductCatalog {
    products: Vec<Product>,
}

impl ProductCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Get a product by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&Product> {
        let key = name.to_lowercase();
        self.products.iter().find(|p| p.key() == key)
    }

    /// Best fuzzy match for a misspelled name, for "did you mean" messages.
    pub fn suggest(&self, name: &str) -> Option<&Product> {
        let input = name.to_lowercase();
        self.products
            .iter()
            .map(|p| (p, jaro_winkler(&p.key(), &input)))
            .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(p, _)| p)
    }

    /// Dataset-wide maximum CO2 emissions. Zero for an empty catalog.
    pub fn max_co2_emissions(&self) -> u32 {
        self.products.iter().map(|p| p.co2_emissions).max().unwrap_or(0)
    }

    /// All products in builder order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Product names in builder order.
    pub fn names(&self) -> Vec<&str> {
        self.products.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
