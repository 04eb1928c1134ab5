//! Reference catalog.

use std::sync::OnceLock;

use crate::catalog::{Brand, Ingredient, Product, SkinType};
use crate::ids::ProductId;
use crate::money::Money;
use crate::search::PriceRange;

use Brand::*;
use Ingredient::*;
use SkinType::*;

/// Price bounds of the reference catalog.
pub const CATALOG_PRICE_RANGE: PriceRange = PriceRange::new(Money::new(299), Money::new(699));

/// Image used when a product image fails to load.
pub const FALLBACK_IMAGE: &str = "https://images.unsplash.com/photo-1581091226825-a6a2a5aee158";

#[allow(clippy::too_many_arguments)]
fn product(
    id: u32,
    name: &str,
    brand: Brand,
    price: i64,
    skin_types: &[SkinType],
    ingredients: &[Ingredient],
    description: &str,
    benefits: [&str; 4],
    popularity: u32,
    is_new_arrival: bool,
    image: &str,
) -> Product {
    Product {
        id: ProductId(id),
        name: name.to_string(),
        brand,
        price: Money::new(price),
        skin_types: skin_types.to_vec(),
        ingredients: ingredients.to_vec(),
        description: description.to_string(),
        benefits: benefits.iter().map(|b| b.to_string()).collect(),
        popularity,
        is_new_arrival,
        image: format!("https://images.unsplash.com/{image}"),
    }
}

fn build() -> Vec<Product> {
    vec![
        product(
            1,
            "Hydra Boost Facial Cleanser",
            GlowUp,
            599,
            &[Dry, Normal],
            &[HyaluronicAcid, AloeVera],
            "A gentle, hydrating cleanser that removes impurities while maintaining skin's natural moisture barrier. Perfect for dry to normal skin types that need extra hydration.",
            [
                "Deeply hydrates while cleansing",
                "Removes impurities without stripping skin",
                "Strengthens moisture barrier",
                "Leaves skin soft and supple",
            ],
            93,
            false,
            "photo-1556228578-28600f2ef945",
        ),
        product(
            2,
            "Tea Tree Clarifying Wash",
            NatureFresh,
            449,
            &[Oily, Combination],
            &[TeaTree, Charcoal],
            "This clarifying face wash combats excess oil and impurities with natural tea tree oil and activated charcoal. Helps control shine and prevent breakouts.",
            [
                "Controls excess oil production",
                "Deeply cleanses pores",
                "Helps prevent breakouts",
                "Balances skin without over-drying",
            ],
            87,
            false,
            "photo-1620916566398-39f1143ab7be",
        ),
        product(
            3,
            "Soothing Cucumber Cleanse",
            AquaBloom,
            349,
            &[Sensitive, Normal],
            &[AloeVera],
            "A gentle, cooling cleanser formulated with cucumber extract and aloe vera to soothe sensitive skin while effectively removing dirt and makeup.",
            [
                "Calms redness and irritation",
                "Provides cooling sensation",
                "Gently cleanses without irritation",
                "Preserves natural pH balance",
            ],
            78,
            true,
            "photo-1611930021389-f6c8aebfb107",
        ),
        product(
            4,
            "Charcoal Deep Clean Foam",
            DermaPure,
            499,
            &[Oily, Combination],
            &[Charcoal, TeaTree],
            "This foaming cleanser utilizes activated charcoal to draw out impurities and excess oil from deep within pores, leaving skin purified and refreshed.",
            [
                "Removes deep-seated impurities",
                "Absorbs excess oil",
                "Minimizes appearance of pores",
                "Prevents blackheads and breakouts",
            ],
            92,
            false,
            "photo-1631730486572-5698cacc829c",
        ),
        product(
            5,
            "Vitamin C Brightening Wash",
            GlowUp,
            699,
            &[Normal, Combination, Dry],
            &[VitaminC],
            "Infused with stabilized vitamin C, this brightening cleanser helps to even skin tone and boost radiance while gently removing impurities.",
            [
                "Brightens dull complexion",
                "Evens skin tone",
                "Gently exfoliates",
                "Boosts collagen production",
            ],
            89,
            true,
            "photo-1608248543803-ba4f8c70ae0b",
        ),
        product(
            6,
            "Gentle Aloe Face Wash",
            CleanSkin,
            299,
            &[Sensitive, Dry],
            &[AloeVera],
            "This mild, creamy cleanser is perfect for sensitive and dry skin types. Formulated with aloe vera to soothe while cleansing.",
            [
                "Soothes irritated skin",
                "Provides gentle hydration",
                "Non-stripping formula",
                "Reduces redness and inflammation",
            ],
            75,
            false,
            "photo-1573461160327-b450ce3d8e7f",
        ),
        product(
            7,
            "AHA Exfoliating Cleanser",
            DermaPure,
            649,
            &[Normal, Combination],
            &[VitaminC],
            "This exfoliating cleanser contains alpha hydroxy acids to gently remove dead skin cells and promote cell renewal for a brighter complexion.",
            [
                "Removes dead skin cells",
                "Improves texture and tone",
                "Unclogs pores",
                "Stimulates cell turnover",
            ],
            85,
            true,
            "photo-1592136957897-b2b6ca21e10d",
        ),
        product(
            8,
            "Balancing Clay Cleanser",
            NatureFresh,
            399,
            &[Oily, Combination],
            &[Charcoal],
            "This clay-based cleanser helps balance oil production and purify pores for a clearer, more matte complexion without over-drying the skin.",
            [
                "Absorbs excess oil",
                "Purifies and detoxifies",
                "Balances sebum production",
                "Minimizes pore appearance",
            ],
            82,
            false,
            "photo-1635360938476-4fed2112d9cd",
        ),
        product(
            9,
            "Rose Petal Cleansing Gel",
            AquaBloom,
            549,
            &[Normal, Dry, Sensitive],
            &[AloeVera, HyaluronicAcid],
            "Infused with real rose extracts, this gentle cleansing gel soothes and hydrates while effectively removing makeup and impurities.",
            [
                "Provides antioxidant protection",
                "Maintains skin's hydration",
                "Calms and soothes",
                "Leaves skin soft and refreshed",
            ],
            88,
            true,
            "photo-1556228720-195a672e8a03",
        ),
        product(
            10,
            "Oil-Control Foam Wash",
            CleanSkin,
            349,
            &[Oily],
            &[TeaTree, Charcoal],
            "This foaming cleanser is specifically formulated for oily skin to control shine and prevent breakouts while cleansing away impurities.",
            [
                "Controls excess oil throughout the day",
                "Deeply cleanses without stripping",
                "Helps prevent future breakouts",
                "Leaves skin matte but comfortable",
            ],
            79,
            false,
            "photo-1631730486920-c7fb632b4221",
        ),
        product(
            11,
            "Moisture Balance Wash",
            GlowUp,
            499,
            &[Combination, Normal],
            &[HyaluronicAcid, AloeVera],
            "This perfectly balanced cleanser addresses both dry and oily areas of combination skin, leaving the complexion balanced, clean, and comfortable.",
            [
                "Balances combination skin",
                "Hydrates dry areas",
                "Controls oil in T-zone",
                "Maintains optimal moisture levels",
            ],
            84,
            false,
            "photo-1581091226825-a6a2a5aee158",
        ),
        product(
            12,
            "Purifying Neem Face Wash",
            NatureFresh,
            329,
            &[Oily, Combination, Sensitive],
            &[TeaTree],
            "Formulated with neem and tea tree oil, this antibacterial face wash helps combat acne and purify skin without causing irritation.",
            [
                "Natural antibacterial properties",
                "Prevents and treats breakouts",
                "Calms inflammation",
                "Clarifies without harsh chemicals",
            ],
            77,
            false,
            "photo-1620755912518-ebe3fba75a7f",
        ),
    ]
}

/// The reference catalog, in catalog order.
pub fn products() -> &'static [Product] {
    static CATALOG: OnceLock<Vec<Product>> = OnceLock::new();
    CATALOG.get_or_init(build)
}

/// Look up a reference product by id.
pub fn find_product(id: ProductId) -> Option<&'static Product> {
    products().iter().find(|p| p.id == id)
}
