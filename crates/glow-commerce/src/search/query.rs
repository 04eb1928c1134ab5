//! Catalog query engine.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::search::{FilterCriteria, QueryResults};
use serde::{Deserialize, Serialize};

/// Ordering rule applied to the filtered catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Price, low to high.
    PriceLowHigh,
    /// Price, high to low.
    PriceHighLow,
    /// Most popular first.
    #[default]
    Popularity,
    /// New arrivals before everything else.
    NewArrivals,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::PriceLowHigh,
        SortKey::PriceHighLow,
        SortKey::Popularity,
        SortKey::NewArrivals,
    ];

    /// Wire name, e.g. `price-low-high`.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::PriceLowHigh => "price-low-high",
            SortKey::PriceHighLow => "price-high-low",
            SortKey::Popularity => "popularity",
            SortKey::NewArrivals => "new-arrivals",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::PriceLowHigh => "Price: Low to High",
            SortKey::PriceHighLow => "Price: High to Low",
            SortKey::Popularity => "Popularity",
            SortKey::NewArrivals => "New Arrivals",
        }
    }

    /// Comparator for this key. Ties compare equal so a stable sort keeps
    /// catalog order.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortKey::PriceLowHigh => a.price.cmp(&b.price),
            SortKey::PriceHighLow => b.price.cmp(&a.price),
            SortKey::Popularity => b.popularity.cmp(&a.popularity),
            SortKey::NewArrivals => b.is_new_arrival.cmp(&a.is_new_arrival),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CommerceError::unknown("sort key", s))
    }
}

/// Filter and order `products`.
///
/// Pure and deterministic: `products` is only borrowed, and the result
/// holds references into it in the order chosen by `sort`. Products that
/// compare equal keep their relative input order.
pub fn query<'a>(
    products: &'a [Product],
    criteria: &FilterCriteria,
    sort: SortKey,
) -> QueryResults<'a> {
    let order = rank(products, criteria, sort);

    tracing::debug!(
        total = products.len(),
        matched = order.len(),
        sort = sort.as_str(),
        "catalog query"
    );

    QueryResults::new(order.into_iter().map(|i| &products[i]).collect(), sort)
}

/// Positions of the matching products, in result order.
pub(crate) fn rank(products: &[Product], criteria: &FilterCriteria, sort: SortKey) -> Vec<usize> {
    let mut order: Vec<usize> = products
        .iter()
        .enumerate()
        .filter(|(_, p)| criteria.matches(p))
        .map(|(i, _)| i)
        .collect();

    // slice::sort_by is stable
    order.sort_by(|&a, &b| sort.compare(&products[a], &products[b]));
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{products, Brand, SkinType};
    use crate::ids::ProductId;
    use crate::money::Money;
    use crate::search::PriceRange;
    use pretty_assertions::assert_eq;

    fn prices(results: &QueryResults<'_>) -> Vec<i64> {
        results.iter().map(|p| p.price.amount).collect()
    }

    #[test]
    fn test_sort_key_wire_names() {
        for key in SortKey::ALL {
            assert_eq!(key.as_str().parse::<SortKey>().unwrap(), key);
        }
        assert!("cheapest".parse::<SortKey>().is_err());
        assert_eq!(SortKey::default(), SortKey::Popularity);
    }

    #[test]
    fn test_sort_key_serde_matches_wire_names() {
        let json = serde_json::to_string(&SortKey::PriceLowHigh).unwrap();
        assert_eq!(json, "\"price-low-high\"");
        let key: SortKey = serde_json::from_str("\"new-arrivals\"").unwrap();
        assert_eq!(key, SortKey::NewArrivals);
    }

    #[test]
    fn test_default_criteria_sorted_by_popularity() {
        let results = query(products(), &FilterCriteria::default(), SortKey::Popularity);
        let scores: Vec<u32> = results.iter().map(|p| p.popularity).collect();
        assert_eq!(scores, vec![93, 92, 89, 88, 87, 85, 84, 82, 79, 78, 77, 75]);
    }

    #[test]
    fn test_price_ties_keep_catalog_order() {
        // Soothing Cucumber (3) and Oil-Control (10) are both 349;
        // Charcoal Foam (4) and Moisture Balance (11) are both 499.
        let results = query(products(), &FilterCriteria::default(), SortKey::PriceLowHigh);
        let ids: Vec<u32> = results.iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![6, 12, 3, 10, 8, 2, 4, 11, 9, 1, 7, 5]);
    }

    #[test]
    fn test_new_arrivals_partition_is_stable() {
        let results = query(products(), &FilterCriteria::default(), SortKey::NewArrivals);
        let ids: Vec<u32> = results.iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![3, 5, 7, 9, 1, 2, 4, 6, 8, 10, 11, 12]);
    }

    #[test]
    fn test_oily_within_catalog_bounds_price_ascending() {
        let mut criteria = FilterCriteria::with_price_range(PriceRange::new(
            Money::new(299),
            Money::new(699),
        ));
        criteria.skin_types.insert(SkinType::Oily);

        let results = query(products(), &criteria, SortKey::PriceLowHigh);
        assert_eq!(prices(&results), vec![329, 349, 399, 449, 499]);
        let names: Vec<&str> = results.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Purifying Neem Face Wash",
                "Oil-Control Foam Wash",
                "Balancing Clay Cleanser",
                "Tea Tree Clarifying Wash",
                "Charcoal Deep Clean Foam",
            ]
        );
    }

    #[test]
    fn test_inverted_price_range_is_empty() {
        let criteria =
            FilterCriteria::with_price_range(PriceRange::new(Money::new(600), Money::new(400)));
        let results = query(products(), &criteria, SortKey::Popularity);
        assert!(results.is_empty());
        assert_eq!(results.summary(), "Showing 0 products");
    }

    #[test]
    fn test_brand_filter() {
        let mut criteria = FilterCriteria::default();
        criteria.brands.insert(Brand::GlowUp);
        let results = query(products(), &criteria, SortKey::PriceHighLow);
        let ids: Vec<ProductId> = results.ids();
        assert_eq!(ids, vec![ProductId(5), ProductId(1), ProductId(11)]);
    }

    #[test]
    fn test_input_slice_untouched() {
        let before: Vec<Product> = products().to_vec();
        let _ = query(products(), &FilterCriteria::default(), SortKey::PriceHighLow);
        assert_eq!(products(), before.as_slice());
    }
}
