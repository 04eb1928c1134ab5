//! Cart pricing calculations.

use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Delivery speed chosen at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryOption {
    #[default]
    Standard,
    Express,
}

impl DeliveryOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryOption::Standard => "standard",
            DeliveryOption::Express => "express",
        }
    }
}

impl fmt::Display for DeliveryOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeliveryOption {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "standard" => Ok(DeliveryOption::Standard),
            "express" => Ok(DeliveryOption::Express),
            _ => Err(CommerceError::unknown("delivery option", s)),
        }
    }
}

/// Flat delivery fees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryFees {
    #[serde(default = "default_standard_fee")]
    pub standard: Money,
    #[serde(default = "default_express_fee")]
    pub express: Money,
}

fn default_standard_fee() -> Money {
    Money::new(49)
}

fn default_express_fee() -> Money {
    Money::new(149)
}

impl DeliveryFees {
    pub fn fee(&self, option: DeliveryOption) -> Money {
        match option {
            DeliveryOption::Standard => self.standard,
            DeliveryOption::Express => self.express,
        }
    }
}

impl Default for DeliveryFees {
    fn default() -> Self {
        Self {
            standard: default_standard_fee(),
            express: default_express_fee(),
        }
    }
}

/// Complete pricing breakdown for a cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartPricing {
    /// Sum of line totals.
    pub subtotal: Money,
    /// Selected delivery option.
    pub delivery: DeliveryOption,
    /// Fee for the selected delivery option.
    pub delivery_fee: Money,
    /// subtotal + delivery_fee.
    pub total: Money,
    /// Per-line breakdown, in cart order.
    pub line_items: Vec<LineItemPricing>,
}

impl CartPricing {
    /// Total number of units priced.
    pub fn unit_count(&self) -> i64 {
        self.line_items.iter().map(|l| l.quantity).sum()
    }
}

/// Pricing breakdown for a single line item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItemPricing {
    pub product_id: ProductId,
    /// Product name (denormalized for display).
    pub product_name: String,
    pub unit_price: Money,
    pub quantity: i64,
    /// unit_price * quantity.
    pub total: Money,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_fees() {
        let fees = DeliveryFees::default();
        assert_eq!(fees.fee(DeliveryOption::Standard), Money::new(49));
        assert_eq!(fees.fee(DeliveryOption::Express), Money::new(149));
    }

    #[test]
    fn test_delivery_option_parsing() {
        assert_eq!("Express".parse::<DeliveryOption>().unwrap(), DeliveryOption::Express);
        assert!("overnight".parse::<DeliveryOption>().is_err());
    }

    #[test]
    fn test_fees_deserialize_with_defaults() {
        let fees: DeliveryFees = serde_json::from_str(r#"{"express": 199}"#).unwrap();
        assert_eq!(fees.standard, Money::new(49));
        assert_eq!(fees.express, Money::new(199));
    }
}
