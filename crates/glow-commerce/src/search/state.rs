//! Browse state and its reducer.
//!
//! The storefront page owns one `BrowseState`. Every user interaction is a
//! `BrowseAction`; applying it yields a new state and never mutates the old
//! one.

use crate::catalog::{Brand, Ingredient, Product, SkinType};
use crate::search::{query, FilterCriteria, PriceRange, QueryResults, SortKey};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A single user interaction on the catalog page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum BrowseAction {
    ToggleSkinType(SkinType),
    ToggleBrand(Brand),
    ToggleIngredient(Ingredient),
    SetPriceRange(PriceRange),
    SetSearchQuery(String),
    SetSort(SortKey),
    /// Clear every filter except the search query.
    ResetFilters,
}

/// Filter and sort selections for one browsing session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BrowseState {
    criteria: FilterCriteria,
    sort: SortKey,
    /// Price bounds that `ResetFilters` restores.
    bounds: PriceRange,
}

impl BrowseState {
    /// Fresh state for a catalog with the given price bounds.
    pub fn new(bounds: PriceRange) -> Self {
        Self {
            criteria: FilterCriteria::with_price_range(bounds),
            sort: SortKey::default(),
            bounds,
        }
    }

    /// Fresh state spanning the prices of `products`.
    pub fn for_catalog(products: &[Product]) -> Self {
        Self::new(PriceRange::spanning(products).unwrap_or_default())
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn bounds(&self) -> PriceRange {
        self.bounds
    }

    /// Check if the sidebar filters narrow the catalog.
    pub fn has_active_filters(&self) -> bool {
        self.criteria.has_active_filters(self.bounds)
    }

    /// Sidebar price label.
    pub fn price_label(&self) -> String {
        self.criteria.price_range.label(self.bounds)
    }

    /// Reducer: produce the state that follows `action`.
    #[must_use]
    pub fn apply(&self, action: BrowseAction) -> Self {
        let mut next = self.clone();
        match action {
            BrowseAction::ToggleSkinType(t) => toggle(&mut next.criteria.skin_types, t),
            BrowseAction::ToggleBrand(b) => toggle(&mut next.criteria.brands, b),
            BrowseAction::ToggleIngredient(i) => toggle(&mut next.criteria.ingredients, i),
            BrowseAction::SetPriceRange(range) => next.criteria.price_range = range,
            BrowseAction::SetSearchQuery(q) => next.criteria.search_query = q,
            BrowseAction::SetSort(sort) => next.sort = sort,
            BrowseAction::ResetFilters => {
                let search_query = std::mem::take(&mut next.criteria.search_query);
                next.criteria = FilterCriteria {
                    search_query,
                    ..FilterCriteria::with_price_range(self.bounds)
                };
            }
        }
        next
    }

    /// Apply a sequence of actions in order.
    #[must_use]
    pub fn apply_all(&self, actions: impl IntoIterator<Item = BrowseAction>) -> Self {
        actions
            .into_iter()
            .fold(self.clone(), |state, action| state.apply(action))
    }

    /// Run the query engine for this state.
    pub fn results<'a>(&self, products: &'a [Product]) -> QueryResults<'a> {
        query(products, &self.criteria, self.sort)
    }
}

impl Default for BrowseState {
    fn default() -> Self {
        Self::new(PriceRange::default())
    }
}

fn toggle<T: Ord>(set: &mut BTreeSet<T>, value: T) {
    if !set.remove(&value) {
        set.insert(value);
    }
}
