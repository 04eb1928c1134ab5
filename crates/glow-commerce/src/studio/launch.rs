//! Product launch submissions.

use crate::catalog::{closed_enum, Ingredient, SkinType};
use crate::error::CommerceError;
use crate::ids::SubmissionId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::time::Duration;

/// Longest accepted product name, in characters.
pub const MAX_PRODUCT_NAME_LEN: usize = 50;

/// Simulated review latency for a submission.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1500);

/// Who makes the product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ManufacturingType {
    #[serde(rename = "Self-manufactured")]
    SelfManufactured,
    #[serde(rename = "Lab-manufactured")]
    LabManufactured,
}

closed_enum!(ManufacturingType, "manufacturing type", {
    SelfManufactured => "Self-manufactured",
    LabManufactured => "Lab-manufactured",
});

/// A seller's request to list a new face wash.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchForm {
    pub product_name: String,
    pub skin_types: BTreeSet<SkinType>,
    pub ingredients: BTreeSet<Ingredient>,
    pub manufacturing_type: Option<ManufacturingType>,
    /// Free-text allergy information.
    #[serde(default)]
    pub allergies: String,
}

impl LaunchForm {
    pub fn new(product_name: impl Into<String>) -> Self {
        Self {
            product_name: product_name.into(),
            ..Self::default()
        }
    }

    pub fn toggle_skin_type(&mut self, skin_type: SkinType) {
        if !self.skin_types.remove(&skin_type) {
            self.skin_types.insert(skin_type);
        }
    }

    pub fn toggle_ingredient(&mut self, ingredient: Ingredient) {
        if !self.ingredients.remove(&ingredient) {
            self.ingredients.insert(ingredient);
        }
    }

    /// Check the form, reporting the first problem found.
    pub fn validate(&self) -> Result<(), CommerceError> {
        let name = self.product_name.trim();
        if name.is_empty() {
            return Err(invalid("Please enter a product name"));
        }
        if name.chars().count() > MAX_PRODUCT_NAME_LEN {
            return Err(invalid(format!(
                "Product name must be at most {MAX_PRODUCT_NAME_LEN} characters"
            )));
        }
        if self.skin_types.is_empty() {
            return Err(invalid("Please select at least one skin type"));
        }
        if self.ingredients.is_empty() {
            return Err(invalid("Please select at least one ingredient"));
        }
        if self.manufacturing_type.is_none() {
            return Err(invalid("Please select a manufacturing type"));
        }
        Ok(())
    }

    /// Validate and accept the form.
    pub fn submit(&self) -> Result<LaunchSubmission, CommerceError> {
        self.validate()?;

        let submission = LaunchSubmission {
            id: SubmissionId::generate(),
            submitted_at: Utc::now(),
            form: LaunchForm {
                product_name: self.product_name.trim().to_string(),
                ..self.clone()
            },
        };
        tracing::info!(
            submission_id = %submission.id,
            product = %submission.form.product_name,
            "launch submission accepted"
        );
        Ok(submission)
    }

    /// Validate, wait out the simulated review, then accept.
    ///
    /// Invalid forms fail immediately without waiting.
    pub async fn submit_after(&self, delay: Duration) -> Result<LaunchSubmission, CommerceError> {
        self.validate()?;
        tokio::time::sleep(delay).await;
        self.submit()
    }
}

fn invalid(message: impl Into<String>) -> CommerceError {
    CommerceError::ValidationError(message.into())
}

/// An accepted launch submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchSubmission {
    pub id: SubmissionId,
    pub submitted_at: DateTime<Utc>,
    pub form: LaunchForm,
}

impl LaunchSubmission {
    pub fn message(&self) -> &'static str {
        "Product submitted successfully! Our team will review your product and get back to you shortly."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_form() -> LaunchForm {
        let mut form = LaunchForm::new("  Neem Gel Wash ");
        form.toggle_skin_type(SkinType::Oily);
        form.toggle_ingredient(Ingredient::TeaTree);
        form.manufacturing_type = Some(ManufacturingType::LabManufactured);
        form
    }

    fn message(form: &LaunchForm) -> String {
        match form.validate() {
            Err(CommerceError::ValidationError(msg)) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_validation_order() {
        let mut form = LaunchForm::new("   ");
        assert_eq!(message(&form), "Please enter a product name");

        form.product_name = "Glow".into();
        assert_eq!(message(&form), "Please select at least one skin type");

        form.toggle_skin_type(SkinType::Dry);
        assert_eq!(message(&form), "Please select at least one ingredient");

        form.toggle_ingredient(Ingredient::AloeVera);
        assert_eq!(message(&form), "Please select a manufacturing type");

        form.manufacturing_type = Some(ManufacturingType::SelfManufactured);
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_name_length_limit() {
        let mut form = complete_form();
        form.product_name = "x".repeat(MAX_PRODUCT_NAME_LEN);
        assert!(form.validate().is_ok());
        form.product_name.push('x');
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_toggle_removes_selected() {
        let mut form = complete_form();
        form.toggle_skin_type(SkinType::Oily);
        assert!(form.skin_types.is_empty());
    }

    #[test]
    fn test_submit_trims_name() {
        let submission = complete_form().submit().unwrap();
        assert_eq!(submission.form.product_name, "Neem Gel Wash");
        assert!(!submission.id.as_str().is_empty());
    }

    #[test]
    fn test_manufacturing_type_parsing() {
        assert_eq!(
            "lab-manufactured".parse::<ManufacturingType>().unwrap(),
            ManufacturingType::LabManufactured
        );
        assert_eq!(ManufacturingType::SelfManufactured.to_string(), "Self-manufactured");
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_after_delay() {
        let start = tokio::time::Instant::now();
        let submission = complete_form().submit_after(SUBMIT_DELAY).await.unwrap();
        assert!(start.elapsed() >= SUBMIT_DELAY);
        assert_eq!(submission.form.skin_types.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalid_form_fails_without_waiting() {
        let start = tokio::time::Instant::now();
        let result = LaunchForm::default().submit_after(SUBMIT_DELAY).await;
        assert!(result.is_err());
        assert_eq!(start.elapsed(), Duration::ZERO);
    }
}
