//! Catalog listing.

use std::collections::BTreeSet;
use std::str::FromStr;

use anyhow::Result;
use glow_commerce::catalog::{products, Brand, Ingredient, Product, SkinType};
use glow_commerce::search::{BrowseAction, BrowseState, PriceRange, QueryCache, SortKey};
use glow_commerce::Money;
use glow_observability::MetricsCollector;

use super::ProductsArgs;
use crate::context::Context;
use crate::output::{new_badge, truncate};

/// Run the products command.
pub async fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let catalog = products();
    let base = BrowseState::for_catalog(catalog);
    let state = base.apply_all(actions(&args, base.bounds(), ctx.config.storefront.default_sort)?);

    let mut cache = QueryCache::new();
    let mut metrics = MetricsCollector::new(ctx.logger.session_id().clone());
    let results = metrics.time(
        "products",
        || cache.get(catalog, state.criteria(), state.sort()),
        |r| r.len(),
    );
    metrics.record_cache(cache.stats());

    ctx.logger
        .info("catalog query")
        .field("sort", state.sort().as_str())
        .field("matched", results.len() as i64)
        .field("filtered", state.has_active_filters())
        .emit();

    let (page, pagination) = results.page(args.page, ctx.config.storefront.page_size);

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "summary": results.summary(),
            "sort": state.sort(),
            "page": pagination.page,
            "total_pages": pagination.total_pages,
            "products": page,
        }));
        return Ok(());
    }

    ctx.output.header(&format!(
        "{} - {}",
        ctx.config.storefront.name,
        state.sort().display_name()
    ));
    ctx.output.kv("price", &state.price_label());
    if !state.criteria().search_query.trim().is_empty() {
        ctx.output.kv("search", state.criteria().search_query.trim());
    }
    println!();

    if results.is_empty() {
        ctx.output.info("No products found. Try adjusting your filters.");
        return Ok(());
    }

    print_table(page, ctx);

    println!();
    ctx.output.info(&results.summary());
    if pagination.total_pages > 1 {
        ctx.output.info(&format!(
            "Page {} of {} (items {}-{})",
            pagination.page,
            pagination.total_pages,
            pagination.start_item(),
            pagination.end_item()
        ));
    }

    let summary = metrics.finalize().to_summary();
    if args.stats {
        println!("\n{}", summary);
    } else {
        ctx.output.debug(&summary);
    }

    Ok(())
}

/// Translate flags into reducer actions.
fn actions(args: &ProductsArgs, bounds: PriceRange, default_sort: SortKey) -> Result<Vec<BrowseAction>> {
    let mut actions = Vec::new();

    // Toggling twice would undo a filter, so repeated flags collapse first.
    for skin_type in parse_distinct::<SkinType>(&args.skin_types)? {
        actions.push(BrowseAction::ToggleSkinType(skin_type));
    }
    for brand in parse_distinct::<Brand>(&args.brands)? {
        actions.push(BrowseAction::ToggleBrand(brand));
    }
    for ingredient in parse_distinct::<Ingredient>(&args.ingredients)? {
        actions.push(BrowseAction::ToggleIngredient(ingredient));
    }

    if args.min.is_some() || args.max.is_some() {
        let min = args.min.map(Money::new).unwrap_or(bounds.min);
        let max = args.max.map(Money::new).unwrap_or(bounds.max);
        actions.push(BrowseAction::SetPriceRange(PriceRange::new(min, max)));
    }

    if let Some(search) = &args.search {
        actions.push(BrowseAction::SetSearchQuery(search.clone()));
    }

    let sort = match &args.sort {
        Some(key) => key.parse::<SortKey>()?,
        None => default_sort,
    };
    actions.push(BrowseAction::SetSort(sort));

    Ok(actions)
}

fn parse_distinct<T>(names: &[String]) -> Result<BTreeSet<T>>
where
    T: FromStr + Ord,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    names
        .iter()
        .map(|name| Ok(name.parse::<T>()?))
        .collect()
}

fn print_table(page: &[&Product], ctx: &Context) {
    let widths = [4, 30, 12, 8, 30, 5, 3];
    ctx.output.table_header(
        &["ID", "NAME", "BRAND", "PRICE", "SKIN TYPES", "POP", ""],
        &widths,
    );

    for product in page {
        let id = product.id.to_string();
        let name = truncate(&product.name, widths[1]);
        let price = ctx.config.price(product.price);
        let skin = truncate(&product.skin_type_label(), widths[4]);
        let popularity = product.popularity.to_string();
        let badge = new_badge(product.is_new_arrival);
        ctx.output.table_row(
            &[
                &id,
                &name,
                product.brand.as_str(),
                &price,
                &skin,
                &popularity,
                &badge,
            ],
            &widths,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glow_commerce::catalog::CATALOG_PRICE_RANGE;

    fn args() -> ProductsArgs {
        ProductsArgs {
            skin_types: Vec::new(),
            brands: Vec::new(),
            ingredients: Vec::new(),
            min: None,
            max: None,
            search: None,
            sort: None,
            page: 1,
            stats: false,
        }
    }

    #[test]
    fn test_no_flags_only_sets_sort() {
        let actions = actions(&args(), CATALOG_PRICE_RANGE, SortKey::Popularity).unwrap();
        assert_eq!(actions, vec![BrowseAction::SetSort(SortKey::Popularity)]);
    }

    #[test]
    fn test_one_sided_price_uses_bounds() {
        let mut a = args();
        a.min = Some(400);
        let actions = actions(&a, CATALOG_PRICE_RANGE, SortKey::Popularity).unwrap();
        assert_eq!(
            actions[0],
            BrowseAction::SetPriceRange(PriceRange::new(Money::new(400), Money::new(699)))
        );
    }

    #[test]
    fn test_flags_parse_forgivingly() {
        let mut a = args();
        a.skin_types = vec!["oily".into()];
        a.ingredients = vec!["tea-tree".into()];
        a.sort = Some("price-high-low".into());
        let actions = actions(&a, CATALOG_PRICE_RANGE, SortKey::Popularity).unwrap();
        assert_eq!(
            actions,
            vec![
                BrowseAction::ToggleSkinType(SkinType::Oily),
                BrowseAction::ToggleIngredient(Ingredient::TeaTree),
                BrowseAction::SetSort(SortKey::PriceHighLow),
            ]
        );
    }

    #[test]
    fn test_repeated_flags_keep_the_filter_on() {
        let mut a = args();
        a.skin_types = vec!["Oily".into(), "oily".into()];
        a.brands = vec!["GlowUp".into(), "glowup".into(), "GlowUp".into()];
        let actions = actions(&a, CATALOG_PRICE_RANGE, SortKey::Popularity).unwrap();
        assert_eq!(
            actions,
            vec![
                BrowseAction::ToggleSkinType(SkinType::Oily),
                BrowseAction::ToggleBrand(Brand::GlowUp),
                BrowseAction::SetSort(SortKey::Popularity),
            ]
        );
    }

    #[test]
    fn test_repeated_skin_flag_still_narrows_results() {
        let mut a = args();
        a.skin_types = vec!["Oily".into(), "oily".into()];
        let base = BrowseState::for_catalog(products());
        let state = base.apply_all(actions(&a, base.bounds(), SortKey::Popularity).unwrap());
        assert_eq!(state.results(products()).len(), 5);
    }

    #[test]
    fn test_unknown_brand_is_an_error() {
        let mut a = args();
        a.brands = vec!["Acme".into()];
        let err = actions(&a, CATALOG_PRICE_RANGE, SortKey::Popularity).unwrap_err();
        assert_eq!(err.to_string(), "Unknown brand: Acme");
    }
}
