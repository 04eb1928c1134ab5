//! Cart and line item types.

use crate::cart::{CartPricing, DeliveryFees, DeliveryOption, LineItemPricing};
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::{OrderId, ProductId};
use crate::money::Money;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum quantity allowed per line item.
pub const MAX_QUANTITY_PER_ITEM: i64 = 99;

/// A mock shopping cart.
///
/// Lines reference catalog products by id; prices are looked up when the
/// cart is priced, never stored on the line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Cart {
    /// Items in the cart, in insertion order.
    pub items: Vec<LineItem>,
    /// Selected delivery option.
    pub delivery: DeliveryOption,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// The demo cart: one Hydra Boost Facial Cleanser and two Vitamin C
    /// Brightening Washes.
    pub fn mock() -> Self {
        Self {
            items: vec![
                LineItem::new(ProductId(1), 1),
                LineItem::new(ProductId(5), 2),
            ],
            delivery: DeliveryOption::Standard,
        }
    }

    /// Add an item to the cart, merging with an existing line.
    pub fn add_item(&mut self, product_id: ProductId, quantity: i64) -> Result<(), CommerceError> {
        if quantity <= 0 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }

        let current = self.quantity_of(product_id);
        let new_quantity = current
            .checked_add(quantity)
            .ok_or(CommerceError::Overflow)?;
        if new_quantity > MAX_QUANTITY_PER_ITEM {
            return Err(CommerceError::QuantityExceedsLimit(
                new_quantity,
                MAX_QUANTITY_PER_ITEM,
            ));
        }

        match self.items.iter_mut().find(|i| i.product_id == product_id) {
            Some(existing) => existing.quantity = new_quantity,
            None => self.items.push(LineItem::new(product_id, quantity)),
        }
        Ok(())
    }

    /// Set a line's quantity.
    ///
    /// Quantities below 1 are ignored and leave the line as it was; use
    /// `remove_item` to drop a line. Returns whether anything changed.
    pub fn update_quantity(
        &mut self,
        product_id: ProductId,
        quantity: i64,
    ) -> Result<bool, CommerceError> {
        if quantity < 1 {
            return Ok(false);
        }

        if quantity > MAX_QUANTITY_PER_ITEM {
            return Err(CommerceError::QuantityExceedsLimit(
                quantity,
                MAX_QUANTITY_PER_ITEM,
            ));
        }

        match self.items.iter_mut().find(|i| i.product_id == product_id) {
            Some(item) => {
                item.quantity = quantity;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove an item from the cart.
    pub fn remove_item(&mut self, product_id: ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| i.product_id != product_id);
        self.items.len() < len_before
    }

    /// Clear all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn set_delivery(&mut self, delivery: DeliveryOption) {
        self.delivery = delivery;
    }

    /// Quantity of a product in the cart (0 if absent).
    pub fn quantity_of(&self, product_id: ProductId) -> i64 {
        self.items
            .iter()
            .find(|i| i.product_id == product_id)
            .map_or(0, |i| i.quantity)
    }

    /// Get total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Get number of lines.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Price the cart against `catalog`.
    ///
    /// Lines whose product is not in the catalog are skipped.
    pub fn calculate_pricing(
        &self,
        catalog: &[Product],
        fees: &DeliveryFees,
    ) -> Result<CartPricing, CommerceError> {
        let line_items = self
            .items
            .iter()
            .filter_map(|item| {
                let product = catalog.iter().find(|p| p.id == item.product_id)?;
                Some((item, product))
            })
            .map(|(item, product)| {
                let total = product
                    .price
                    .try_multiply(item.quantity)
                    .ok_or(CommerceError::Overflow)?;
                Ok(LineItemPricing {
                    product_id: item.product_id,
                    product_name: product.name.clone(),
                    unit_price: product.price,
                    quantity: item.quantity,
                    total,
                })
            })
            .collect::<Result<Vec<_>, CommerceError>>()?;

        let subtotal =
            Money::try_sum(line_items.iter().map(|l| &l.total)).ok_or(CommerceError::Overflow)?;
        let delivery_fee = fees.fee(self.delivery);
        let total = subtotal
            .try_add(&delivery_fee)
            .ok_or(CommerceError::Overflow)?;

        Ok(CartPricing {
            subtotal,
            delivery: self.delivery,
            delivery_fee,
            total,
            line_items,
        })
    }

    /// Place a mock order. Nothing is charged or persisted.
    pub fn checkout(
        &self,
        catalog: &[Product],
        fees: &DeliveryFees,
    ) -> Result<OrderConfirmation, CommerceError> {
        let pricing = self.calculate_pricing(catalog, fees)?;
        if pricing.line_items.is_empty() {
            return Err(CommerceError::ValidationError("Cart is empty".to_string()));
        }

        let confirmation = OrderConfirmation {
            id: OrderId::generate(),
            placed_at: Utc::now(),
            pricing,
        };
        tracing::info!(
            order_id = %confirmation.id,
            total = confirmation.pricing.total.amount,
            "order placed"
        );
        Ok(confirmation)
    }
}

/// A line in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LineItem {
    pub product_id: ProductId,
    pub quantity: i64,
}

impl LineItem {
    pub fn new(product_id: ProductId, quantity: i64) -> Self {
        Self {
            product_id,
            quantity,
        }
    }
}

/// Result of a mock checkout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderConfirmation {
    pub id: OrderId,
    pub placed_at: DateTime<Utc>,
    pub pricing: CartPricing,
}

impl OrderConfirmation {
    pub fn message(&self) -> &'static str {
        "Order placed successfully! Your order will be delivered soon."
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::products;

    #[test]
    fn test_mock_cart_pricing() {
        let cart = Cart::mock();
        let pricing = cart
            .calculate_pricing(products(), &DeliveryFees::default())
            .unwrap();
        // 599 + 2 * 699
        assert_eq!(pricing.subtotal, Money::new(1997));
        assert_eq!(pricing.delivery_fee, Money::new(49));
        assert_eq!(pricing.total, Money::new(2046));
        assert_eq!(pricing.unit_count(), 3);
    }

    #[test]
    fn test_express_delivery() {
        let mut cart = Cart::mock();
        cart.set_delivery(DeliveryOption::Express);
        let pricing = cart
            .calculate_pricing(products(), &DeliveryFees::default())
            .unwrap();
        assert_eq!(pricing.total, Money::new(1997 + 149));
    }

    #[test]
    fn test_add_same_item_increases_quantity() {
        let mut cart = Cart::new();
        cart.add_item(ProductId(2), 1).unwrap();
        cart.add_item(ProductId(2), 2).unwrap();
        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_update_quantity_below_one_is_ignored() {
        let mut cart = Cart::mock();
        assert!(!cart.update_quantity(ProductId(5), 0).unwrap());
        assert_eq!(cart.quantity_of(ProductId(5)), 2);
        assert!(cart.update_quantity(ProductId(5), 4).unwrap());
        assert_eq!(cart.quantity_of(ProductId(5)), 4);
    }

    #[test]
    fn test_update_missing_item() {
        let mut cart = Cart::new();
        assert!(!cart.update_quantity(ProductId(3), 2).unwrap());
    }

    #[test]
    fn test_remove_item() {
        let mut cart = Cart::mock();
        assert!(cart.remove_item(ProductId(1)));
        assert!(!cart.remove_item(ProductId(1)));
        assert_eq!(cart.unique_item_count(), 1);
    }

    #[test]
    fn test_quantity_limits() {
        let mut cart = Cart::new();
        assert_eq!(
            cart.add_item(ProductId(1), 0),
            Err(CommerceError::InvalidQuantity(0))
        );
        assert!(cart.add_item(ProductId(1), MAX_QUANTITY_PER_ITEM + 1).is_err());
        assert!(cart.update_quantity(ProductId(1), MAX_QUANTITY_PER_ITEM + 1).is_err());
    }

    #[test]
    fn test_unknown_products_are_not_priced() {
        let mut cart = Cart::new();
        cart.add_item(ProductId(404), 1).unwrap();
        let pricing = cart
            .calculate_pricing(products(), &DeliveryFees::default())
            .unwrap();
        assert!(pricing.line_items.is_empty());
        assert_eq!(pricing.subtotal, Money::zero());
    }

    #[test]
    fn test_checkout() {
        let confirmation = Cart::mock()
            .checkout(products(), &DeliveryFees::default())
            .unwrap();
        assert_eq!(confirmation.pricing.total, Money::new(2046));

        let err = Cart::new()
            .checkout(products(), &DeliveryFees::default())
            .unwrap_err();
        assert!(matches!(err, CommerceError::ValidationError(_)));
    }
}
