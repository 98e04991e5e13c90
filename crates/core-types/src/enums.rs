use serde::{Deserialize, Serialize};

/// Identifies which per-line-item revenue formula to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevenueStrategyId {
    /// `sale_price × quantity × (1 − discount / 100)`.
    #[default]
    Discounted,
    /// `sale_price × quantity`, ignoring the discount.
    ListPrice,
}

/// Identifies which seller bonus formula to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BonusStrategyId {
    /// Rate depends on the seller's position in the profit ranking.
    #[default]
    ProfitRank,
    /// The same rate for every seller.
    FlatRate,
}
