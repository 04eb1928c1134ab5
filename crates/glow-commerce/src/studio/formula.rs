//! Custom formula builder.

use crate::catalog::Ingredient;
use crate::error::CommerceError;
use serde::{Deserialize, Serialize};

/// Maximum number of ingredients in one formula.
pub const MAX_FORMULA_INGREDIENTS: usize = 3;

impl Ingredient {
    /// What the ingredient is.
    pub fn description(&self) -> &'static str {
        match self {
            Ingredient::TeaTree => "Natural antiseptic with antibacterial properties",
            Ingredient::Charcoal => "Absorbs toxins and impurities from skin",
            Ingredient::VitaminC => "Brightening antioxidant for glowing skin",
            Ingredient::AloeVera => "Soothing plant extract that calms irritation",
            Ingredient::HyaluronicAcid => "Powerful humectant that attracts moisture",
        }
    }

    /// What the ingredient does for the skin.
    pub fn benefit(&self) -> &'static str {
        match self {
            Ingredient::TeaTree => "Controls acne & purifies skin",
            Ingredient::Charcoal => "Deep cleansing & detoxifying",
            Ingredient::VitaminC => "Radiance & protection",
            Ingredient::AloeVera => "Hydration & soothing",
            Ingredient::HyaluronicAcid => "Deep hydration & plumping",
        }
    }

    /// Concern a formula containing this ingredient is suited to.
    pub fn perfect_for(&self) -> &'static str {
        match self {
            Ingredient::TeaTree => "Acne-prone skin",
            Ingredient::Charcoal => "Deep cleansing",
            Ingredient::VitaminC => "Brightening & radiance",
            Ingredient::AloeVera => "Soothing sensitive skin",
            Ingredient::HyaluronicAcid => "Deep hydration",
        }
    }
}

/// Formula strength, by ingredient count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormulaTier {
    Empty,
    Base,
    Enhanced,
    Premium,
}

impl FormulaTier {
    pub fn for_count(count: usize) -> Self {
        match count {
            0 => FormulaTier::Empty,
            1 => FormulaTier::Base,
            2 => FormulaTier::Enhanced,
            _ => FormulaTier::Premium,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FormulaTier::Empty => "Empty Bottle",
            FormulaTier::Base => "Base Formula",
            FormulaTier::Enhanced => "Enhanced Formula",
            FormulaTier::Premium => "Premium Formula",
        }
    }
}

/// A formula being assembled ingredient by ingredient.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomFormula {
    ingredients: Vec<Ingredient>,
}

impl CustomFormula {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected ingredients, in selection order.
    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub fn is_selected(&self, ingredient: Ingredient) -> bool {
        self.ingredients.contains(&ingredient)
    }

    /// Select an ingredient, or deselect it if already selected.
    ///
    /// Returns whether the ingredient is selected afterwards. Selecting past
    /// the limit fails and leaves the formula unchanged.
    pub fn toggle(&mut self, ingredient: Ingredient) -> Result<bool, CommerceError> {
        if let Some(pos) = self.ingredients.iter().position(|&i| i == ingredient) {
            self.ingredients.remove(pos);
            return Ok(false);
        }
        if self.ingredients.len() >= MAX_FORMULA_INGREDIENTS {
            return Err(CommerceError::IngredientLimit(MAX_FORMULA_INGREDIENTS));
        }
        self.ingredients.push(ingredient);
        Ok(true)
    }

    /// How full the bottle is, 0 to 100.
    pub fn fill_percentage(&self) -> f64 {
        let fill = self.ingredients.len() as f64 / MAX_FORMULA_INGREDIENTS as f64 * 100.0;
        fill.min(100.0)
    }

    pub fn tier(&self) -> FormulaTier {
        FormulaTier::for_count(self.ingredients.len())
    }

    /// "Perfect for" notes, in catalog ingredient order.
    pub fn perfect_for(&self) -> Vec<&'static str> {
        Ingredient::ALL
            .iter()
            .filter(|i| self.is_selected(**i))
            .map(Ingredient::perfect_for)
            .collect()
    }

    /// Lock in the formula.
    pub fn finalize(&self) -> Result<FinalizedFormula, CommerceError> {
        if self.ingredients.is_empty() {
            return Err(CommerceError::EmptyFormula);
        }

        let formula = FinalizedFormula {
            ingredients: self.ingredients.clone(),
            tier: self.tier(),
            perfect_for: self.perfect_for().into_iter().map(String::from).collect(),
        };
        tracing::info!(
            ingredients = formula.ingredients.len(),
            tier = formula.tier.display_name(),
            "custom formula created"
        );
        Ok(formula)
    }
}

/// A finalized custom formula.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalizedFormula {
    pub ingredients: Vec<Ingredient>,
    pub tier: FormulaTier,
    pub perfect_for: Vec<String>,
}

impl FinalizedFormula {
    pub fn message(&self) -> &'static str {
        "Your custom formula has been created!"
    }
}
