//! Mock cart pricing and checkout.

use anyhow::{bail, Context as _, Result};
use glow_commerce::cart::{Cart, DeliveryOption};
use glow_commerce::catalog::products;
use glow_commerce::ProductId;

use super::CartArgs;
use crate::context::Context;

/// Run the cart command.
pub async fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let mut cart = if args.empty { Cart::new() } else { Cart::mock() };

    for spec in &args.add {
        let (id, quantity) = parse_line(spec, Some(1))?;
        cart.add_item(id, quantity)?;
        ctx.output.debug(&format!("added {} x{}", id, quantity));
    }

    for spec in &args.set {
        let (id, quantity) = parse_line(spec, None)?;
        if !cart.update_quantity(id, quantity)? {
            ctx.output
                .warn(&format!("Quantity for product {} left unchanged", id));
        }
    }

    for id in &args.remove {
        if !cart.remove_item(ProductId(*id)) {
            ctx.output.warn(&format!("Product {} is not in the cart", id));
        }
    }

    if args.express {
        cart.set_delivery(DeliveryOption::Express);
    }

    if args.checkout {
        let confirmation = cart.checkout(products(), &ctx.config.delivery)?;
        ctx.logger
            .info("order placed")
            .field("order_id", confirmation.id.as_str())
            .field("total", confirmation.pricing.total.amount)
            .emit();

        if ctx.output.is_json() {
            ctx.output.json(&confirmation);
            return Ok(());
        }
        ctx.output.success(confirmation.message());
        ctx.output.kv("order", confirmation.id.as_str());
        ctx.output
            .kv("placed", &confirmation.placed_at.format("%Y-%m-%d %H:%M:%S UTC").to_string());
        ctx.output
            .kv("total", &ctx.config.price(confirmation.pricing.total));
        return Ok(());
    }

    let pricing = cart.calculate_pricing(products(), &ctx.config.delivery)?;

    if ctx.output.is_json() {
        ctx.output.json(&pricing);
        return Ok(());
    }

    ctx.output.header("Your Cart");
    if pricing.line_items.is_empty() {
        ctx.output.info("Your cart is empty.");
        return Ok(());
    }

    ctx.output.info(&format!(
        "{} items in your cart",
        cart.unique_item_count()
    ));
    println!();

    let widths = [4, 30, 8, 4, 8];
    ctx.output
        .table_header(&["ID", "PRODUCT", "PRICE", "QTY", "TOTAL"], &widths);
    for line in &pricing.line_items {
        ctx.output.table_row(
            &[
                &line.product_id.to_string(),
                &line.product_name,
                &ctx.config.price(line.unit_price),
                &line.quantity.to_string(),
                &ctx.config.price(line.total),
            ],
            &widths,
        );
    }

    println!();
    ctx.output.kv("subtotal", &ctx.config.price(pricing.subtotal));
    ctx.output.kv(
        &format!("delivery ({})", pricing.delivery),
        &ctx.config.price(pricing.delivery_fee),
    );
    ctx.output.kv("total", &ctx.config.price(pricing.total));

    Ok(())
}

/// Parse `ID` or `ID:QTY`. A bare ID uses `default_quantity`, when given.
fn parse_line(spec: &str, default_quantity: Option<i64>) -> Result<(ProductId, i64)> {
    let (id, quantity) = match spec.split_once(':') {
        Some((id, qty)) => (id, Some(qty)),
        None => (spec, None),
    };

    let id: u32 = id
        .trim()
        .parse()
        .with_context(|| format!("Invalid product id in '{}'", spec))?;

    let quantity = match (quantity, default_quantity) {
        (Some(qty), _) => qty
            .trim()
            .parse()
            .with_context(|| format!("Invalid quantity in '{}'", spec))?,
        (None, Some(default)) => default,
        (None, None) => bail!("Expected ID:QTY, got '{}'", spec),
    };

    Ok((ProductId(id), quantity))
}
