//! Recompute-on-change memoization for catalog queries.

use crate::catalog::Product;
use crate::search::query::rank;
use crate::search::{FilterCriteria, QueryResults, SortKey};

/// Address and length of the product slice a result was computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SliceId {
    addr: usize,
    len: usize,
}

impl SliceId {
    fn of(products: &[Product]) -> Self {
        Self {
            addr: products.as_ptr() as usize,
            len: products.len(),
        }
    }
}

#[derive(Debug, Clone)]
struct Entry {
    products: SliceId,
    criteria: FilterCriteria,
    sort: SortKey,
    /// Positions into `products`, in result order.
    order: Vec<usize>,
}

/// Hit/miss counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

/// Remembers the last query and replays it while the inputs are unchanged.
///
/// Criteria and sort are compared by value; the product slice by identity
/// (address and length). Call [`QueryCache::invalidate`] after editing a
/// slice in place.
#[derive(Debug, Clone, Default)]
pub struct QueryCache {
    last: Option<Entry>,
    stats: CacheStats,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    /// Drop the remembered result.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Return the results for these inputs, recomputing only when they
    /// differ from the previous call.
    pub fn get<'a>(
        &mut self,
        products: &'a [Product],
        criteria: &FilterCriteria,
        sort: SortKey,
    ) -> QueryResults<'a> {
        if let Some(entry) = &self.last {
            if entry.sort == sort
                && &entry.criteria == criteria
                && entry.products == SliceId::of(products)
            {
                self.stats.hits += 1;
                let items = entry.order.iter().filter_map(|&i| products.get(i)).collect();
                return QueryResults::new(items, sort);
            }
        }

        self.stats.misses += 1;
        let order = rank(products, criteria, sort);
        tracing::debug!(matched = order.len(), sort = sort.as_str(), "query cache miss");
        let items = order.iter().map(|&i| &products[i]).collect();
        self.last = Some(Entry {
            products: SliceId::of(products),
            criteria: criteria.clone(),
            sort,
            order,
        });
        QueryResults::new(items, sort)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{products, SkinType};
    use crate::search::query;

    #[test]
    fn test_repeat_query_hits() {
        let mut cache = QueryCache::new();
        let criteria = FilterCriteria::default();
        let first = cache.get(products(), &criteria, SortKey::Popularity);
        let second = cache.get(products(), &criteria, SortKey::Popularity);
        assert_eq!(first, second);
        assert_eq!(cache.stats(), CacheStats { hits: 1, misses: 1 });
    }

    #[test]
    fn test_changed_inputs_miss() {
        let mut cache = QueryCache::new();
        let mut criteria = FilterCriteria::default();
        cache.get(products(), &criteria, SortKey::Popularity);
        cache.get(products(), &criteria, SortKey::PriceLowHigh);
        criteria.skin_types.insert(SkinType::Oily);
        let oily = cache.get(products(), &criteria, SortKey::PriceLowHigh);
        assert_eq!(oily.len(), 5);
        assert_eq!(cache.stats().misses, 3);
        assert_eq!(cache.stats().hits, 0);
    }

    #[test]
    fn test_cached_results_equal_fresh_query() {
        let mut cache = QueryCache::new();
        let mut criteria = FilterCriteria::default();
        criteria.search_query = "cleanser".into();
        for _ in 0..3 {
            let cached = cache.get(products(), &criteria, SortKey::NewArrivals);
            let fresh = query(products(), &criteria, SortKey::NewArrivals);
            assert_eq!(cached, fresh);
        }
    }

    #[test]
    fn test_equal_contents_in_a_new_slice_miss() {
        let mut cache = QueryCache::new();
        let criteria = FilterCriteria::default();
        let copy = products().to_vec();
        cache.get(products(), &criteria, SortKey::Popularity);
        let results = cache.get(&copy, &criteria, SortKey::Popularity);
        assert_eq!(results, query(&copy, &criteria, SortKey::Popularity));
        assert_eq!(cache.stats(), CacheStats { hits: 0, misses: 2 });
        cache.get(&copy, &criteria, SortKey::Popularity);
        assert_eq!(cache.stats().hits, 1);
    }

    #[test]
    fn test_different_product_slice_misses() {
        let mut cache = QueryCache::new();
        let criteria = FilterCriteria::default();
        cache.get(products(), &criteria, SortKey::Popularity);
        let subset = &products()[..4];
        let results = cache.get(subset, &criteria, SortKey::Popularity);
        assert_eq!(results.len(), 4);
        assert_eq!(cache.stats().misses, 2);
    }
}
