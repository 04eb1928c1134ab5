//! Catalog module.
//!
//! Contains the product type, its closed enumerations, and the reference
//! product data.

mod data;
mod product;

pub use data::{find_product, products, CATALOG_PRICE_RANGE, FALLBACK_IMAGE};
pub use product::{Brand, Ingredient, Product, SkinType};
pub(crate) use product::{closed_enum, normalize};
