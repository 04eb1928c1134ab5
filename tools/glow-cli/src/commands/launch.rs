//! Product launch submission.

use anyhow::Result;
use dialoguer::{Input, MultiSelect, Select};
use glow_commerce::catalog::{Ingredient, SkinType};
use glow_commerce::studio::{LaunchForm, ManufacturingType, MAX_PRODUCT_NAME_LEN, SUBMIT_DELAY};

use super::LaunchArgs;
use crate::context::Context;

/// Run the launch command.
pub async fn run(args: LaunchArgs, ctx: &Context) -> Result<()> {
    let form = if args.interactive {
        prompt_form()?
    } else {
        form_from_args(&args)?
    };

    let spinner = ctx.output.spinner("Submitting product for review...");
    let result = form.submit_after(SUBMIT_DELAY).await;
    spinner.finish_and_clear();
    let submission = result?;

    ctx.logger
        .info("launch submitted")
        .field("submission_id", submission.id.as_str())
        .field("product", submission.form.product_name.as_str())
        .emit();

    if ctx.output.is_json() {
        ctx.output.json(&submission);
        return Ok(());
    }

    ctx.output.success(submission.message());
    ctx.output.kv("reference", submission.id.as_str());
    ctx.output.kv(
        "submitted",
        &submission
            .submitted_at
            .format("%Y-%m-%d %H:%M:%S UTC")
            .to_string(),
    );
    Ok(())
}

fn form_from_args(args: &LaunchArgs) -> Result<LaunchForm> {
    let mut form = LaunchForm::new(args.name.clone().unwrap_or_default());
    for name in &args.skin_types {
        form.skin_types.insert(name.parse::<SkinType>()?);
    }
    for name in &args.ingredients {
        form.ingredients.insert(name.parse::<Ingredient>()?);
    }
    form.manufacturing_type = args
        .manufacturing
        .as_deref()
        .map(str::parse::<ManufacturingType>)
        .transpose()?;
    form.allergies = args.allergies.clone().unwrap_or_default();
    Ok(form)
}

fn prompt_form() -> Result<LaunchForm> {
    let name: String = Input::new()
        .with_prompt("Product name")
        .validate_with(|input: &String| -> Result<(), String> {
            if input.chars().count() > MAX_PRODUCT_NAME_LEN {
                Err(format!("At most {} characters", MAX_PRODUCT_NAME_LEN))
            } else {
                Ok(())
            }
        })
        .interact_text()?;

    let mut form = LaunchForm::new(name);

    let skin_labels: Vec<&str> = SkinType::ALL.iter().map(|s| s.as_str()).collect();
    for i in MultiSelect::new()
        .with_prompt("Skin types")
        .items(&skin_labels)
        .interact()?
    {
        form.toggle_skin_type(SkinType::ALL[i]);
    }

    let ingredient_labels: Vec<&str> = Ingredient::ALL.iter().map(|s| s.as_str()).collect();
    for i in MultiSelect::new()
        .with_prompt("Key ingredients")
        .items(&ingredient_labels)
        .interact()?
    {
        form.toggle_ingredient(Ingredient::ALL[i]);
    }

    let manufacturing_labels: Vec<&str> =
        ManufacturingType::ALL.iter().map(|m| m.as_str()).collect();
    let choice = Select::new()
        .with_prompt("Manufacturing type")
        .items(&manufacturing_labels)
        .default(0)
        .interact()?;
    form.manufacturing_type = Some(ManufacturingType::ALL[choice]);

    form.allergies = Input::new()
        .with_prompt("Allergy information (optional)")
        .allow_empty(true)
        .interact_text()?;

    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_from_args() {
        let args = LaunchArgs {
            name: Some("Neem Gel".into()),
            skin_types: vec!["oily".into(), "combination".into()],
            ingredients: vec!["tea tree".into()],
            manufacturing: Some("self-manufactured".into()),
            allergies: None,
            interactive: false,
        };
        let form = form_from_args(&args).unwrap();
        assert_eq!(form.skin_types.len(), 2);
        assert_eq!(
            form.manufacturing_type,
            Some(ManufacturingType::SelfManufactured)
        );
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_missing_manufacturing_fails_validation() {
        let args = LaunchArgs {
            name: Some("Neem Gel".into()),
            skin_types: vec!["oily".into()],
            ingredients: vec!["charcoal".into()],
            manufacturing: None,
            allergies: None,
            interactive: false,
        };
        let form = form_from_args(&args).unwrap();
        assert_eq!(
            form.validate().unwrap_err().to_string(),
            "Validation error: Please select a manufacturing type"
        );
    }
}
