use core_types::TopProduct;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The finished analytics for one seller.
///
/// This struct is the final output of the `AnalyticsEngine`. Monetary fields always carry
/// exactly two decimal places and serialize as JSON numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerReport {
    pub seller_id: String,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub revenue: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub profit: Decimal,
    pub sales_count: u64,
    pub top_products: Vec<TopProduct>,
    #[serde(with = "rust_decimal::serde::float")]
    pub bonus: Decimal,
}
