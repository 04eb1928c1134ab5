//! Custom formula builder.

use anyhow::{bail, Result};
use glow_commerce::catalog::Ingredient;
use glow_commerce::studio::{CustomFormula, MAX_FORMULA_INGREDIENTS};

use super::FormulaArgs;
use crate::context::Context;
use crate::output::gauge;

/// Run the formula command.
pub async fn run(args: FormulaArgs, ctx: &Context) -> Result<()> {
    if args.ingredients.is_empty() {
        list_ingredients(ctx);
        bail!("Please select at least one ingredient");
    }

    let mut formula = CustomFormula::new();
    for name in &args.ingredients {
        let ingredient: Ingredient = name.parse()?;
        if !formula.toggle(ingredient)? {
            ctx.output
                .warn(&format!("{} was listed twice and has been removed", ingredient));
        }
    }

    let finalized = formula.finalize()?;

    if ctx.output.is_json() {
        ctx.output.json(&finalized);
        return Ok(());
    }

    ctx.output.header("Your Custom Formula");
    for (i, ingredient) in formula.ingredients().iter().enumerate() {
        ctx.output.step(
            i + 1,
            MAX_FORMULA_INGREDIENTS,
            &format!("{}: {}", ingredient, ingredient.benefit()),
        );
    }
    println!();
    ctx.output.kv("bottle", &gauge(formula.fill_percentage()));
    ctx.output.kv("tier", finalized.tier.display_name());

    ctx.output.header("Perfect for");
    for note in &finalized.perfect_for {
        ctx.output.list_item(note);
    }

    println!();
    ctx.output.success(finalized.message());
    Ok(())
}

fn list_ingredients(ctx: &Context) {
    ctx.output.header(&format!(
        "Choose up to {} ingredients",
        MAX_FORMULA_INGREDIENTS
    ));
    for ingredient in Ingredient::ALL {
        ctx.output.list_item(&format!(
            "{}: {}",
            ingredient,
            ingredient.description()
        ));
    }
}
