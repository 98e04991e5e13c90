use crate::error::StrategyError;
use crate::RevenueStrategy;
use core_types::{LineItem, Product};
use rust_decimal::Decimal;

/// Revenue at the undiscounted sale price.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListPriceRevenue;

impl RevenueStrategy for ListPriceRevenue {
    fn compute_revenue(&self, item: &LineItem, _product: &Product) -> Result<Decimal, StrategyError> {
        item.sale_price
            .checked_mul(Decimal::from(item.quantity))
            .ok_or_else(|| StrategyError::Overflow(format!("list-price revenue for SKU {}", item.sku)))
    }
}
