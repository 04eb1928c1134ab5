//! Product detail view.

use anyhow::Result;
use glow_commerce::catalog::find_product;
use glow_commerce::{CommerceError, ProductId};

use super::ProductArgs;
use crate::context::Context;

/// Run the product command.
pub async fn run(args: ProductArgs, ctx: &Context) -> Result<()> {
    let id = ProductId(args.id);
    let product = find_product(id).ok_or(CommerceError::ProductNotFound(args.id))?;

    if ctx.output.is_json() {
        ctx.output.json(product);
        return Ok(());
    }

    ctx.output.header(&product.name);
    ctx.output.kv("brand", product.brand.as_str());
    ctx.output.kv("price", &ctx.config.price(product.price));
    ctx.output.kv("skin types", &product.skin_type_label());
    let ingredients: Vec<&str> = product.ingredients.iter().map(|i| i.as_str()).collect();
    ctx.output.kv("ingredients", &ingredients.join(", "));
    ctx.output.kv("popularity", &product.popularity.to_string());
    if product.is_new_arrival {
        ctx.output.kv("new arrival", "yes");
    }

    println!();
    println!("  {}", product.description);

    ctx.output.header("Benefits");
    for benefit in &product.benefits {
        ctx.output.list_item(benefit);
    }

    ctx.output.header("Suited to");
    for skin_type in &product.skin_types {
        ctx.output
            .list_item(&format!("{}: {}", skin_type, skin_type.description()));
    }

    ctx.logger
        .debug("product viewed")
        .field("product_id", i64::from(id.get()))
        .emit();

    Ok(())
}
