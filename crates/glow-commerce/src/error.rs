//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
///
/// The catalog query engine never returns these; an empty result is a
/// valid answer, not a failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(u32),

    /// Item not in cart.
    #[error("Item not in cart: {0}")]
    ItemNotInCart(u32),

    /// Invalid quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Quantity exceeds maximum allowed.
    #[error("Quantity {0} exceeds maximum allowed ({1})")]
    QuantityExceedsLimit(i64, i64),

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// A name did not match any member of a closed enumeration.
    #[error("Unknown {kind}: {value}")]
    UnknownValue { kind: &'static str, value: String },

    /// Too many ingredients picked for a custom formula.
    #[error("You can select up to {0} ingredients")]
    IngredientLimit(usize),

    /// Custom formula finalized without ingredients.
    #[error("Please select at least one ingredient")]
    EmptyFormula,

    /// Launch form failed validation.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Invalid wizard or scan state transition.
    #[error("Invalid transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl CommerceError {
    pub(crate) fn unknown(kind: &'static str, value: impl Into<String>) -> Self {
        CommerceError::UnknownValue {
            kind,
            value: value.into(),
        }
    }
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
