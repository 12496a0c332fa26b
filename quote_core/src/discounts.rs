//! # Discount Tiers
//!
//! Order-total discount codes shown next to the price preview. Same
//! half-open-threshold texture as the fee schedules, but strictly a
//! display-layer concern: discounts never enter the engine's price sum —
//! the commerce platform applies the code at checkout.

use serde::Serialize;

/// A discount code unlocked above an order total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DiscountTier {
    /// Code the customer enters at checkout
    pub code: &'static str,
    /// Marketing copy for the code
    pub description: &'static str,
    /// Discount as a percentage
    pub percent: f64,
    /// Minimum order total that unlocks this code
    pub min_total: f64,
}

/// Ordered best-first: the lookup returns the largest unlocked discount.
pub const DISCOUNT_TIERS: [DiscountTier; 2] = [
    DiscountTier {
        code: "SAVE10",
        description: "10% off on orders over $199",
        percent: 10.0,
        min_total: 199.0,
    },
    DiscountTier {
        code: "SAVE5",
        description: "5% off on orders over $99",
        percent: 5.0,
        min_total: 99.0,
    },
];

/// The largest discount the given order total qualifies for, if any.
pub fn applicable_discount(order_total: f64) -> Option<&'static DiscountTier> {
    DISCOUNT_TIERS
        .iter()
        .find(|tier| order_total >= tier.min_total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds_are_inclusive() {
        assert_eq!(applicable_discount(199.0).unwrap().code, "SAVE10");
        assert_eq!(applicable_discount(99.0).unwrap().code, "SAVE5");
        assert!(applicable_discount(98.99).is_none());
    }

    #[test]
    fn test_largest_discount_wins() {
        assert_eq!(applicable_discount(500.0).unwrap().percent, 10.0);
        assert_eq!(applicable_discount(150.0).unwrap().percent, 5.0);
    }
}
