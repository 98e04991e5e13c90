use crate::error::StrategyError;
use crate::RevenueStrategy;
use core_types::{LineItem, Product};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Revenue net of the line item's percentage discount.
///
/// Discounts outside `[0, 100]` are not clamped; the caller is trusted.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscountedRevenue;

impl RevenueStrategy for DiscountedRevenue {
    fn compute_revenue(&self, item: &LineItem, _product: &Product) -> Result<Decimal, StrategyError> {
        let overflow = || StrategyError::Overflow(format!("discounted revenue for SKU {}", item.sku));

        let discount_multiplier = Decimal::ONE
            .checked_sub(item.discount / dec!(100))
            .ok_or_else(overflow)?;
        item.sale_price
            .checked_mul(Decimal::from(item.quantity))
            .and_then(|gross| gross.checked_mul(discount_multiplier))
            .ok_or_else(overflow)
    }
}
