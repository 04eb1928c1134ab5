//! Product and its closed attribute enumerations.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Lowercase and fold `-`/`_` to spaces so "tea-tree" matches "Tea Tree".
pub(crate) fn normalize(s: &str) -> String {
    s.trim()
        .chars()
        .map(|c| match c {
            '-' | '_' => ' ',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

/// Generates `as_str`, `ALL`, `Display` and a forgiving `FromStr` for a
/// closed enumeration whose serialized names match `as_str`.
macro_rules! closed_enum {
    ($name:ident, $kind:literal, { $($variant:ident => $label:literal),+ $(,)? }) => {
        impl $name {
            /// Every member, in display order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Display name as shown in the storefront.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::CommerceError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = $crate::catalog::normalize(s);
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| $crate::catalog::normalize(v.as_str()) == wanted)
                    .ok_or_else(|| $crate::error::CommerceError::unknown($kind, s))
            }
        }
    };
}

pub(crate) use closed_enum;

/// Dermatological skin category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SkinType {
    Oily,
    Dry,
    Combination,
    Sensitive,
    Normal,
}

closed_enum!(SkinType, "skin type", {
    Oily => "Oily",
    Dry => "Dry",
    Combination => "Combination",
    Sensitive => "Sensitive",
    Normal => "Normal",
});

impl SkinType {
    /// Short guidance shown next to face scan results.
    pub fn description(&self) -> &'static str {
        match self {
            SkinType::Oily => "Your skin produces excess oil, especially in the T-zone. Look for products that control shine without over-drying.",
            SkinType::Dry => "Your skin feels tight and may have flaky patches. You need gentle, hydrating cleansers.",
            SkinType::Combination => "You have both oily and dry areas. Your T-zone tends to be oily while cheeks are normal or dry.",
            SkinType::Sensitive => "Your skin reacts easily to products. Look for gentle, fragrance-free cleansers with soothing ingredients.",
            SkinType::Normal => "You have a well-balanced skin type. Most products work well for you with minimal irritation.",
        }
    }
}

/// Brands carried by the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Brand {
    GlowUp,
    NatureFresh,
    DermaPure,
    CleanSkin,
    AquaBloom,
}

closed_enum!(Brand, "brand", {
    GlowUp => "GlowUp",
    NatureFresh => "NatureFresh",
    DermaPure => "DermaPure",
    CleanSkin => "CleanSkin",
    AquaBloom => "AquaBloom",
});

/// Key active ingredients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Ingredient {
    #[serde(rename = "Tea Tree")]
    TeaTree,
    Charcoal,
    #[serde(rename = "Vitamin C")]
    VitaminC,
    #[serde(rename = "Aloe Vera")]
    AloeVera,
    #[serde(rename = "Hyaluronic Acid")]
    HyaluronicAcid,
}

closed_enum!(Ingredient, "ingredient", {
    TeaTree => "Tea Tree",
    Charcoal => "Charcoal",
    VitaminC => "Vitamin C",
    AloeVera => "Aloe Vera",
    HyaluronicAcid => "Hyaluronic Acid",
});

/// A face wash in the catalog.
///
/// Reference data: products are built once and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Stable catalog identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Brand.
    pub brand: Brand,
    /// Unit price in rupees.
    pub price: Money,
    /// Skin types the product suits (never empty).
    #[serde(rename = "skinType")]
    pub skin_types: Vec<SkinType>,
    /// Key ingredients.
    pub ingredients: Vec<Ingredient>,
    /// Free-text description.
    pub description: String,
    /// Benefit bullet points.
    pub benefits: Vec<String>,
    /// Popularity score; higher is more popular.
    pub popularity: u32,
    /// Recently added to the catalog.
    pub is_new_arrival: bool,
    /// Image URL.
    pub image: String,
}

impl Product {
    /// Check if the product suits a skin type.
    pub fn suits(&self, skin_type: SkinType) -> bool {
        self.skin_types.contains(&skin_type)
    }

    /// Check if the product contains an ingredient.
    pub fn contains(&self, ingredient: Ingredient) -> bool {
        self.ingredients.contains(&ingredient)
    }

    /// Skin types joined for display, e.g. "Oily, Combination".
    pub fn skin_type_label(&self) -> String {
        self.skin_types
            .iter()
            .map(SkinType::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CommerceError;

    #[test]
    fn test_enum_parsing_is_forgiving() {
        assert_eq!("oily".parse::<SkinType>().unwrap(), SkinType::Oily);
        assert_eq!("tea-tree".parse::<Ingredient>().unwrap(), Ingredient::TeaTree);
        assert_eq!("Vitamin C".parse::<Ingredient>().unwrap(), Ingredient::VitaminC);
        assert_eq!("hyaluronic_acid".parse::<Ingredient>().unwrap(), Ingredient::HyaluronicAcid);
        assert_eq!("glowup".parse::<Brand>().unwrap(), Brand::GlowUp);
    }

    #[test]
    fn test_enum_parsing_rejects_unknown() {
        let err = "Oilyish".parse::<SkinType>().unwrap_err();
        assert_eq!(
            err,
            CommerceError::UnknownValue {
                kind: "skin type",
                value: "Oilyish".to_string()
            }
        );
    }

    #[test]
    fn test_enum_all_has_five_members() {
        assert_eq!(SkinType::ALL.len(), 5);
        assert_eq!(Brand::ALL.len(), 5);
        assert_eq!(Ingredient::ALL.len(), 5);
    }

    #[test]
    fn test_ingredient_serde_names() {
        let json = serde_json::to_string(&Ingredient::AloeVera).unwrap();
        assert_eq!(json, "\"Aloe Vera\"");
        let back: Ingredient = serde_json::from_str("\"Tea Tree\"").unwrap();
        assert_eq!(back, Ingredient::TeaTree);
    }
}
