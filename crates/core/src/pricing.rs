//! Volume-discount pricing for sticker orders.
//!
//! Quantity breakpoints apply a flat percentage discount to the entire
//! order line, not just the units above the threshold:
//!
//! | Quantity | Discount |
//! |----------|----------|
//! | ≥ 100    | 30%      |
//! | ≥ 50     | 20%      |
//! | ≥ 25     | 10%      |
//! | < 25     | none     |
//!
//! All arithmetic is [`Decimal`], so totals are exact at every breakpoint.
//! This module does no validation; the order composer decides which
//! quantities are acceptable before pricing them.

use rust_decimal::Decimal;

/// Quantity at which the 10% discount starts.
pub const BULK_TIER_1: u32 = 25;
/// Quantity at which the 20% discount starts.
pub const BULK_TIER_2: u32 = 50;
/// Quantity at which the 30% discount starts.
pub const BULK_TIER_3: u32 = 100;

/// The price multiplier for a given quantity.
///
/// Returns 1.00 below the first breakpoint, then 0.90 / 0.80 / 0.70.
#[must_use]
pub fn volume_discount(quantity: u32) -> Decimal {
    if quantity >= BULK_TIER_3 {
        Decimal::new(70, 2)
    } else if quantity >= BULK_TIER_2 {
        Decimal::new(80, 2)
    } else if quantity >= BULK_TIER_1 {
        Decimal::new(90, 2)
    } else {
        Decimal::ONE
    }
}

/// Total for one order line: `unit_price × quantity × discount`.
#[must_use]
pub fn line_total(unit_price: Decimal, quantity: u32) -> Decimal {
    unit_price * Decimal::from(quantity) * volume_discount(quantity)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn no_discount_below_first_breakpoint() {
        assert_eq!(line_total(dec("3.50"), 1), dec("3.50"));
        assert_eq!(line_total(dec("3.50"), 24), dec("84.00"));
    }

    #[test]
    fn breakpoints_apply_flat_discounts() {
        let p = dec("2.00");
        assert_eq!(line_total(p, 25), dec("0.9") * p * Decimal::from(25));
        assert_eq!(line_total(p, 50), dec("0.8") * p * Decimal::from(50));
        assert_eq!(line_total(p, 100), dec("0.7") * p * Decimal::from(100));
    }

    #[test]
    fn thirty_stickers_at_five_dollars_cost_135() {
        assert_eq!(line_total(Decimal::from(5), 30), Decimal::from(135));
    }

    #[test]
    fn per_unit_price_never_increases_with_quantity() {
        let p = dec("4.99");
        let mut last_per_unit = Decimal::MAX;
        for q in 1..=120 {
            let per_unit = line_total(p, q) / Decimal::from(q);
            assert!(
                per_unit <= last_per_unit,
                "per-unit price rose at quantity {q}"
            );
            last_per_unit = per_unit;
        }
    }

    #[test]
    fn zero_quantity_prices_to_zero() {
        assert_eq!(line_total(dec("9.99"), 0), Decimal::ZERO);
    }
}
