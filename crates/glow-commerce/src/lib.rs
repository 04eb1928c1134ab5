//! Skincare storefront domain types and logic for GlowCommerce.
//!
//! - **Catalog**: the reference face-wash catalog and its closed enumerations
//! - **Search**: the catalog query engine, browse-state reducer, memoization
//! - **Cart**: mock cart with delivery options and pricing
//! - **Studio**: custom formula builder, launch submissions, face scan
//!
//! # Example
//!
//! ```rust
//! use glow_commerce::prelude::*;
//!
//! let state = BrowseState::for_catalog(products())
//!     .apply(BrowseAction::ToggleSkinType(SkinType::Oily))
//!     .apply(BrowseAction::SetSort(SortKey::PriceLowHigh));
//!
//! let results = state.results(products());
//! assert_eq!(results.len(), 5);
//! assert_eq!(results.summary(), "Showing 5 products");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod search;
pub mod studio;

pub use error::CommerceError;
pub use ids::*;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Money, RUPEE};

    // Catalog
    pub use crate::catalog::{find_product, products, Brand, Ingredient, Product, SkinType};

    // Search
    pub use crate::search::{
        query, BrowseAction, BrowseState, FilterCriteria, Pagination, PriceRange, QueryCache,
        QueryResults, SortKey,
    };

    // Cart
    pub use crate::cart::{Cart, CartPricing, DeliveryFees, DeliveryOption, OrderConfirmation};

    // Studio
    pub use crate::studio::{
        CustomFormula, FaceScan, LaunchForm, LaunchWizard, ManufacturingType, SkinTypeDetector,
    };
}
