//! Four-step launch wizard for sellers listing a new face wash.

use crate::catalog::closed_enum;
use crate::error::CommerceError;
use crate::ids::SubmissionId;
use crate::money::Money;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Highest skin sensitivity rating.
pub const MAX_SKIN_SENSITIVITY: u32 = 5;

/// Steps in the launch wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    /// Product form and manufacturing location.
    BasicInformation,
    /// Audience, sensitivity and focus areas.
    ProductDetails,
    /// Key and other ingredients.
    Ingredients,
    /// Price, launch date and capacity.
    PricingAndLaunch,
}

impl WizardStep {
    pub const ALL: [WizardStep; 4] = [
        WizardStep::BasicInformation,
        WizardStep::ProductDetails,
        WizardStep::Ingredients,
        WizardStep::PricingAndLaunch,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WizardStep::BasicInformation => "basic_information",
            WizardStep::ProductDetails => "product_details",
            WizardStep::Ingredients => "ingredients",
            WizardStep::PricingAndLaunch => "pricing_and_launch",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            WizardStep::BasicInformation => "Basic Information",
            WizardStep::ProductDetails => "Product Details",
            WizardStep::Ingredients => "Ingredients",
            WizardStep::PricingAndLaunch => "Pricing & Launch",
        }
    }

    /// Get the step number (1-indexed).
    pub fn number(&self) -> u8 {
        match self {
            WizardStep::BasicInformation => 1,
            WizardStep::ProductDetails => 2,
            WizardStep::Ingredients => 3,
            WizardStep::PricingAndLaunch => 4,
        }
    }

    fn next(self) -> Option<Self> {
        match self {
            WizardStep::BasicInformation => Some(WizardStep::ProductDetails),
            WizardStep::ProductDetails => Some(WizardStep::Ingredients),
            WizardStep::Ingredients => Some(WizardStep::PricingAndLaunch),
            WizardStep::PricingAndLaunch => None,
        }
    }

    fn previous(self) -> Option<Self> {
        match self {
            WizardStep::BasicInformation => None,
            WizardStep::ProductDetails => Some(WizardStep::BasicInformation),
            WizardStep::Ingredients => Some(WizardStep::ProductDetails),
            WizardStep::PricingAndLaunch => Some(WizardStep::Ingredients),
        }
    }
}

/// Where a step sits relative to the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Completed,
    Current,
    Upcoming,
}

/// Cleanser texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ProductForm {
    #[serde(rename = "Foaming Cleanser")]
    Foaming,
    #[serde(rename = "Gel Cleanser")]
    Gel,
    #[serde(rename = "Cream Cleanser")]
    Cream,
}

closed_enum!(ProductForm, "product form", {
    Foaming => "Foaming Cleanser",
    Gel => "Gel Cleanser",
    Cream => "Cream Cleanser",
});

impl ProductForm {
    pub fn description(&self) -> &'static str {
        match self {
            ProductForm::Foaming => "Gentle formula that forms a rich lather to remove impurities",
            ProductForm::Gel => "Lightweight, transparent formula that rinses clean without residue",
            ProductForm::Cream => "Rich, moisturizing formula ideal for dry or sensitive skin",
        }
    }
}

/// Skin concern the product targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FocusArea {
    #[serde(rename = "Oil Control")]
    OilControl,
    Hydration,
    #[serde(rename = "Acne Treatment")]
    AcneTreatment,
    #[serde(rename = "Anti-Aging")]
    AntiAging,
    Exfoliation,
    Brightening,
    Soothing,
    #[serde(rename = "Fragrance-Free")]
    FragranceFree,
}

closed_enum!(FocusArea, "focus area", {
    OilControl => "Oil Control",
    Hydration => "Hydration",
    AcneTreatment => "Acne Treatment",
    AntiAging => "Anti-Aging",
    Exfoliation => "Exfoliation",
    Brightening => "Brightening",
    Soothing => "Soothing",
    FragranceFree => "Fragrance-Free",
});

/// Active ingredients offered by the wizard. Broader than the catalog's
/// ingredient set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum KeyIngredient {
    #[serde(rename = "Salicylic Acid")]
    SalicylicAcid,
    Niacinamide,
    #[serde(rename = "Glycolic Acid")]
    GlycolicAcid,
    Ceramides,
    #[serde(rename = "Hyaluronic Acid")]
    HyaluronicAcid,
    #[serde(rename = "Vitamin C")]
    VitaminC,
    #[serde(rename = "Aloe Vera")]
    AloeVera,
    #[serde(rename = "Tea Tree Oil")]
    TeaTreeOil,
}

closed_enum!(KeyIngredient, "key ingredient", {
    SalicylicAcid => "Salicylic Acid",
    Niacinamide => "Niacinamide",
    GlycolicAcid => "Glycolic Acid",
    Ceramides => "Ceramides",
    HyaluronicAcid => "Hyaluronic Acid",
    VitaminC => "Vitamin C",
    AloeVera => "Aloe Vera",
    TeaTreeOil => "Tea Tree Oil",
});

/// Everything collected across the wizard's steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardDraft {
    pub product_form: Option<ProductForm>,
    pub manufacturing_location: String,
    target_age_group: u32,
    skin_sensitivity: u32,
    pub focus_areas: BTreeSet<FocusArea>,
    pub key_ingredients: BTreeSet<KeyIngredient>,
    pub other_ingredients: String,
    pub price: Option<Money>,
    pub launch_date: Option<NaiveDate>,
    pub production_capacity: Option<u32>,
}

impl Default for WizardDraft {
    fn default() -> Self {
        Self {
            product_form: None,
            manufacturing_location: String::new(),
            target_age_group: 1,
            skin_sensitivity: 1,
            focus_areas: BTreeSet::from([FocusArea::AcneTreatment]),
            key_ingredients: BTreeSet::new(),
            other_ingredients: String::new(),
            price: None,
            launch_date: None,
            production_capacity: None,
        }
    }
}

impl WizardDraft {
    pub fn target_age_group(&self) -> u32 {
        self.target_age_group
    }

    pub fn skin_sensitivity(&self) -> u32 {
        self.skin_sensitivity
    }

    pub fn increment_age_group(&mut self) {
        self.target_age_group = self.target_age_group.saturating_add(1);
    }

    /// Never drops below 1.
    pub fn decrement_age_group(&mut self) {
        self.target_age_group = self.target_age_group.saturating_sub(1).max(1);
    }

    pub fn increment_sensitivity(&mut self) {
        self.skin_sensitivity = (self.skin_sensitivity + 1).min(MAX_SKIN_SENSITIVITY);
    }

    /// Never drops below 1.
    pub fn decrement_sensitivity(&mut self) {
        self.skin_sensitivity = self.skin_sensitivity.saturating_sub(1).max(1);
    }

    pub fn toggle_focus(&mut self, area: FocusArea) {
        if !self.focus_areas.remove(&area) {
            self.focus_areas.insert(area);
        }
    }

    pub fn toggle_key_ingredient(&mut self, ingredient: KeyIngredient) {
        if !self.key_ingredients.remove(&ingredient) {
            self.key_ingredients.insert(ingredient);
        }
    }
}

/// Wizard position plus the draft being filled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchWizard {
    step: WizardStep,
    pub draft: WizardDraft,
}

impl Default for LaunchWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl LaunchWizard {
    pub fn new() -> Self {
        Self {
            step: WizardStep::BasicInformation,
            draft: WizardDraft::default(),
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn is_first_step(&self) -> bool {
        self.step.previous().is_none()
    }

    pub fn is_last_step(&self) -> bool {
        self.step.next().is_none()
    }

    /// Move forward one step; stays put on the last step.
    pub fn next(&mut self) -> WizardStep {
        if let Some(next) = self.step.next() {
            tracing::debug!(from = self.step.as_str(), to = next.as_str(), "wizard advanced");
            self.step = next;
        }
        self.step
    }

    /// Move back one step; stays put on the first step.
    pub fn back(&mut self) -> WizardStep {
        if let Some(previous) = self.step.previous() {
            self.step = previous;
        }
        self.step
    }

    /// Progress bar width, 25 to 100.
    pub fn progress_percentage(&self) -> f64 {
        f64::from(self.step.number()) / WizardStep::ALL.len() as f64 * 100.0
    }

    pub fn status_of(&self, step: WizardStep) -> StepStatus {
        match step.cmp(&self.step) {
            std::cmp::Ordering::Less => StepStatus::Completed,
            std::cmp::Ordering::Equal => StepStatus::Current,
            std::cmp::Ordering::Greater => StepStatus::Upcoming,
        }
    }

    /// Send the draft for review. Only allowed from the last step.
    pub fn submit(&self) -> Result<SubmissionId, CommerceError> {
        if !self.is_last_step() {
            return Err(CommerceError::InvalidTransition {
                from: self.step.as_str().to_string(),
                to: "submitted".to_string(),
            });
        }

        let id = SubmissionId::generate();
        tracing::info!(
            submission_id = %id,
            focus_areas = self.draft.focus_areas.len(),
            "launch wizard submitted for review"
        );
        Ok(id)
    }
}
