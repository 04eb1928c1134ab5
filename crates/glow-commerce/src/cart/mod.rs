//! Shopping cart module.
//!
//! Contains the mock cart, delivery options, and pricing.

mod cart;
mod pricing;

pub use cart::{Cart, LineItem, OrderConfirmation, MAX_QUANTITY_PER_ITEM};
pub use pricing::{CartPricing, DeliveryFees, DeliveryOption, LineItemPricing};
