//! Catalog query engine properties, checked against the reference catalog.
use glow_commerce::prelude::*;
use pretty_assertions::assert_eq;

fn names(results: &QueryResults<'_>) -> Vec<String> {
    results.iter().map(|p| p.name.clone()).collect()
}

fn default_criteria() -> FilterCriteria {
    FilterCriteria::with_price_range(PriceRange::new(Money::new(299), Money::new(699)))
}

#[test]
fn empty_criteria_only_sorts() {
    let criteria = default_criteria();
    for sort in SortKey::ALL {
        let results = query(products(), &criteria, sort);
        assert_eq!(results.len(), products().len(), "sort {sort}");

        let mut expected: Vec<&Product> = products().iter().collect();
        expected.sort_by(|a, b| sort.compare(a, b));
        assert_eq!(results.as_slice(), expected.as_slice());
    }
}

#[test]
fn skin_type_filter_is_exact() {
    for skin_type in SkinType::ALL {
        let mut criteria = default_criteria();
        criteria.skin_types.insert(*skin_type);
        let results = query(products(), &criteria, SortKey::Popularity);

        assert!(results.iter().all(|p| p.suits(*skin_type)));
        let expected = products().iter().filter(|p| p.suits(*skin_type)).count();
        assert_eq!(results.len(), expected);
    }
}

#[test]
fn price_sorts_reverse_each_other_for_distinct_prices() {
    let mut criteria = default_criteria();
    criteria.brands.insert(Brand::NatureFresh);
    criteria.brands.insert(Brand::CleanSkin);

    let asc = query(products(), &criteria, SortKey::PriceLowHigh);
    let desc = query(products(), &criteria, SortKey::PriceHighLow);

    let asc_prices: Vec<Money> = asc.iter().map(|p| p.price).collect();
    let mut desc_prices: Vec<Money> = desc.iter().map(|p| p.price).collect();
    desc_prices.reverse();
    assert_eq!(asc_prices, desc_prices);
}

#[test]
fn popularity_query_is_idempotent() {
    let mut criteria = default_criteria();
    criteria.search_query = "wash".into();
    let first = query(products(), &criteria, SortKey::Popularity);
    let second = query(products(), &criteria, SortKey::Popularity);
    assert_eq!(first, second);
}

#[test]
fn inverted_price_range_is_always_empty() {
    let inverted = PriceRange::new(Money::new(600), Money::new(400));
    let mut criteria = FilterCriteria::with_price_range(inverted);
    assert!(query(products(), &criteria, SortKey::Popularity).is_empty());

    criteria.skin_types.insert(SkinType::Normal);
    criteria.search_query = "cleanser".into();
    assert!(query(products(), &criteria, SortKey::NewArrivals).is_empty());
}

#[test]
fn oily_price_low_high_example() {
    let mut criteria = default_criteria();
    criteria.skin_types.insert(SkinType::Oily);
    let results = query(products(), &criteria, SortKey::PriceLowHigh);

    assert_eq!(
        names(&results),
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
fn vitamin_search_is_case_insensitive() {
    for needle in ["vitamin", "VITAMIN", "Vitamin C "] {
        let mut criteria = default_criteria();
        criteria.search_query = needle.into();
        let results = query(products(), &criteria, SortKey::Popularity);
        assert_eq!(results.ids(), vec![ProductId(5)], "query {needle:?}");
    }
}

#[test]
fn search_whitespace_is_part_of_the_needle() {
    let mut criteria = default_criteria();
    criteria.search_query = "  vitamin".into();
    assert!(query(products(), &criteria, SortKey::Popularity).is_empty());

    criteria.search_query = " \t ".into();
    assert_eq!(query(products(), &criteria, SortKey::Popularity).len(), 12);
}

#[test]
fn unmatched_values_narrow_to_nothing() {
    let mut criteria = default_criteria();
    criteria.brands.insert(Brand::AquaBloom);
    criteria.ingredients.insert(Ingredient::Charcoal);
    let results = query(products(), &criteria, SortKey::Popularity);
    assert!(results.is_empty());
    assert_eq!(results.summary(), "Showing 0 products");
}

#[test]
fn reducer_drives_the_same_engine() {
    let state = BrowseState::for_catalog(products()).apply_all([
        BrowseAction::ToggleIngredient(Ingredient::TeaTree),
        BrowseAction::ToggleIngredient(Ingredient::Charcoal),
        BrowseAction::SetSort(SortKey::PriceHighLow),
    ]);
    assert!(state.has_active_filters());

    let results = state.results(products());
    assert!(results
        .iter()
        .all(|p| p.contains(Ingredient::TeaTree) || p.contains(Ingredient::Charcoal)));

    let reset = state.apply(BrowseAction::ResetFilters);
    assert!(!reset.has_active_filters());
    assert_eq!(reset.sort(), SortKey::PriceHighLow);
    assert_eq!(reset.results(products()).len(), 12);
}

#[test]
fn cached_queries_match_direct_queries() {
    let mut cache = QueryCache::new();
    let mut state = BrowseState::for_catalog(products());
    let actions = [
        BrowseAction::ToggleSkinType(SkinType::Combination),
        BrowseAction::SetSearchQuery("foam".into()),
        BrowseAction::SetSearchQuery("foam".into()),
        BrowseAction::SetSort(SortKey::NewArrivals),
        BrowseAction::ResetFilters,
    ];
    for action in actions {
        state = state.apply(action);
        let cached = cache.get(products(), state.criteria(), state.sort());
        assert_eq!(cached, state.results(products()));
    }
    assert_eq!(cache.stats().hits, 1);
}
