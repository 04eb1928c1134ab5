//! Filter criteria and the per-stage predicates.

use std::collections::BTreeSet;

use crate::catalog::{Brand, Ingredient, Product, SkinType, CATALOG_PRICE_RANGE};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Inclusive price bounds. Serialized as a `[min, max]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(Money, Money)", into = "(Money, Money)")]
pub struct PriceRange {
    pub min: Money,
    pub max: Money,
}

impl PriceRange {
    /// Create a price range. `min > max` is allowed and matches nothing.
    pub const fn new(min: Money, max: Money) -> Self {
        Self { min, max }
    }

    /// Smallest range covering every product, or None for an empty slice.
    pub fn spanning(products: &[Product]) -> Option<Self> {
        let min = products.iter().map(|p| p.price).min()?;
        let max = products.iter().map(|p| p.price).max()?;
        Some(Self::new(min, max))
    }

    /// Check if a price lies within the bounds.
    pub fn contains(&self, price: Money) -> bool {
        price >= self.min && price <= self.max
    }

    /// "All prices" when equal to `bounds`, otherwise "₹min - ₹max".
    pub fn label(&self, bounds: PriceRange) -> String {
        if *self == bounds {
            "All prices".to_string()
        } else {
            format!("{} - {}", self.min, self.max)
        }
    }
}

impl From<(Money, Money)> for PriceRange {
    fn from((min, max): (Money, Money)) -> Self {
        Self::new(min, max)
    }
}

impl From<PriceRange> for (Money, Money) {
    fn from(range: PriceRange) -> Self {
        (range.min, range.max)
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        CATALOG_PRICE_RANGE
    }
}

/// User-selected constraints narrowing the catalog.
///
/// Set-valued fields are OR within the field and AND across fields; an
/// empty set places no constraint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    #[serde(rename = "skinType")]
    pub skin_types: BTreeSet<SkinType>,
    #[serde(rename = "brand")]
    pub brands: BTreeSet<Brand>,
    pub ingredients: BTreeSet<Ingredient>,
    pub price_range: PriceRange,
    pub search_query: String,
}

impl FilterCriteria {
    /// Criteria with no constraints beyond the given price bounds.
    pub fn with_price_range(price_range: PriceRange) -> Self {
        Self {
            price_range,
            ..Default::default()
        }
    }

    /// Check if anything other than the search query narrows the catalog
    /// below `bounds`.
    pub fn has_active_filters(&self, bounds: PriceRange) -> bool {
        !self.skin_types.is_empty()
            || !self.brands.is_empty()
            || !self.ingredients.is_empty()
            || self.price_range != bounds
    }

    /// Check a product against every stage.
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_skin_type(product)
            && self.matches_brand(product)
            && self.matches_ingredients(product)
            && self.matches_price(product)
            && self.matches_search(product)
    }

    pub fn matches_skin_type(&self, product: &Product) -> bool {
        self.skin_types.is_empty()
            || product.skin_types.iter().any(|t| self.skin_types.contains(t))
    }

    pub fn matches_brand(&self, product: &Product) -> bool {
        self.brands.is_empty() || self.brands.contains(&product.brand)
    }

    pub fn matches_ingredients(&self, product: &Product) -> bool {
        self.ingredients.is_empty()
            || product
                .ingredients
                .iter()
                .any(|i| self.ingredients.contains(i))
    }

    pub fn matches_price(&self, product: &Product) -> bool {
        self.price_range.contains(product.price)
    }

    /// Case-insensitive substring match on name, brand or description.
    ///
    /// A blank query matches everything. Otherwise the query is matched as
    /// typed, surrounding whitespace included.
    pub fn matches_search(&self, product: &Product) -> bool {
        if self.search_query.trim().is_empty() {
            return true;
        }
        let needle = self.search_query.to_lowercase();
        product.name.to_lowercase().contains(&needle)
            || product.brand.as_str().to_lowercase().contains(&needle)
            || product.description.to_lowercase().contains(&needle)
    }
}
