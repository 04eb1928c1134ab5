//! Query results and pagination.

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::search::SortKey;
use serde::{Deserialize, Serialize};

/// Pagination info.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    /// Current page (1-indexed).
    pub page: usize,
    /// Items per page.
    pub per_page: usize,
    /// Total number of items.
    pub total: usize,
    /// Total number of pages.
    pub total_pages: usize,
    /// Whether there's a next page.
    pub has_next: bool,
    /// Whether there's a previous page.
    pub has_prev: bool,
}

impl Pagination {
    /// Create pagination info. Page and page size are clamped to at least 1.
    pub fn new(page: usize, per_page: usize, total: usize) -> Self {
        let page = page.max(1);
        let per_page = per_page.max(1);
        let total_pages = if total == 0 {
            1
        } else {
            total.div_ceil(per_page)
        };

        Self {
            page,
            per_page,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }

    /// Index of the first item on this page. Saturates for pages far past
    /// the end.
    pub fn offset(&self) -> usize {
        self.page.saturating_sub(1).saturating_mul(self.per_page)
    }

    /// Get start item number (1-indexed).
    pub fn start_item(&self) -> usize {
        if self.total == 0 {
            0
        } else {
            self.offset().saturating_add(1).min(self.total)
        }
    }

    /// Get end item number.
    pub fn end_item(&self) -> usize {
        self.page.saturating_mul(self.per_page).min(self.total)
    }
}

/// Ordered output of a catalog query.
///
/// Borrows from the product slice the query ran over. An empty result is a
/// normal outcome; callers render it as a "no products found" state.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResults<'a> {
    items: Vec<&'a Product>,
    sort: SortKey,
}

impl<'a> QueryResults<'a> {
    pub(crate) fn new(items: Vec<&'a Product>, sort: SortKey) -> Self {
        Self { items, sort }
    }

    /// Sort key the results were ordered by.
    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Product> + '_ {
        self.items.iter().copied()
    }

    pub fn as_slice(&self) -> &[&'a Product] {
        &self.items
    }

    /// Product ids in result order.
    pub fn ids(&self) -> Vec<ProductId> {
        self.items.iter().map(|p| p.id).collect()
    }

    /// Clone the matched products out of the borrowed catalog.
    pub fn to_owned_products(&self) -> Vec<Product> {
        self.items.iter().map(|p| (*p).clone()).collect()
    }

    /// "Showing N products".
    pub fn summary(&self) -> String {
        format!("Showing {} products", self.items.len())
    }

    /// One page of the results plus its pagination info.
    pub fn page(&self, page: usize, per_page: usize) -> (&[&'a Product], Pagination) {
        let pagination = Pagination::new(page, per_page, self.items.len());
        let start = pagination.offset().min(self.items.len());
        let end = pagination.end_item().max(start);
        (&self.items[start..end], pagination)
    }
}

impl<'a> IntoIterator for QueryResults<'a> {
    type Item = &'a Product;
    type IntoIter = std::vec::IntoIter<&'a Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::products;
    use crate::search::{query, FilterCriteria};

    #[test]
    fn test_pagination_basics() {
        let p = Pagination::new(2, 5, 12);
        assert_eq!(p.total_pages, 3);
        assert!(p.has_next);
        assert!(p.has_prev);
        assert_eq!(p.offset(), 5);
        assert_eq!(p.start_item(), 6);
        assert_eq!(p.end_item(), 10);
    }

    #[test]
    fn test_pagination_empty() {
        let p = Pagination::new(1, 10, 0);
        assert_eq!(p.total_pages, 1);
        assert_eq!(p.start_item(), 0);
        assert_eq!(p.end_item(), 0);
        assert!(!p.has_next);
    }

    #[test]
    fn test_results_paging() {
        let results = query(products(), &FilterCriteria::default(), SortKey::Popularity);
        let (items, pagination) = results.page(3, 5);
        assert_eq!(items.len(), 2);
        assert!(!pagination.has_next);

        let (beyond, _) = results.page(9, 5);
        assert!(beyond.is_empty());
    }

    #[test]
    fn test_huge_page_number_is_empty_not_overflow() {
        let results = query(products(), &FilterCriteria::default(), SortKey::Popularity);
        let (items, pagination) = results.page(usize::MAX, 10);
        assert!(items.is_empty());
        assert_eq!(pagination.offset(), usize::MAX);
        assert_eq!(pagination.start_item(), 12);
        assert_eq!(pagination.end_item(), 12);
        assert!(!pagination.has_next);

        let p = Pagination::new(usize::MAX / 2, usize::MAX / 2, 3);
        assert_eq!(p.end_item(), 3);
    }

    #[test]
    fn test_summary() {
        let results = query(products(), &FilterCriteria::default(), SortKey::Popularity);
        assert_eq!(results.summary(), "Showing 12 products");
        assert_eq!(results.sort(), SortKey::Popularity);
    }
}
