use crate::error::ConfigError;
pub use core_types::MAX_TOP_PRODUCTS;
use core_types::{BonusStrategyId, RevenueStrategyId};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

/// The root configuration structure for the entire application.
///
/// Every section falls back to its defaults, so an empty file is a valid configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub strategies: Strategies,
    #[serde(default)]
    pub report: Report,
}

impl Config {
    /// Rejects rates outside `[0, 1]` and top-product limits outside `1..=10`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let rates = [
            ("strategies.profit_rank.leader_rate", self.strategies.profit_rank.leader_rate),
            ("strategies.profit_rank.podium_rate", self.strategies.profit_rank.podium_rate),
            ("strategies.profit_rank.base_rate", self.strategies.profit_rank.base_rate),
            ("strategies.flat_rate.rate", self.strategies.flat_rate.rate),
        ];
        for (key, rate) in rates {
            if rate < Decimal::ZERO || rate > Decimal::ONE {
                return Err(ConfigError::ValidationError(format!(
                    "{key} must be between 0 and 1, got {rate}"
                )));
            }
        }

        let limit = self.report.top_products_limit;
        if limit == 0 || limit > MAX_TOP_PRODUCTS {
            return Err(ConfigError::ValidationError(format!(
                "report.top_products_limit must be between 1 and {MAX_TOP_PRODUCTS}, got {limit}"
            )));
        }

        Ok(())
    }
}

/// Selects the calculation strategies and holds the parameter sets for each of them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Strategies {
    #[serde(default)]
    pub revenue: RevenueStrategyId,
    #[serde(default)]
    pub bonus: BonusStrategyId,
    #[serde(default)]
    pub profit_rank: ProfitRankParams,
    #[serde(default)]
    pub flat_rate: FlatRateParams,
}

/// Parameters for the rank-based bonus.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProfitRankParams {
    /// Share of profit paid to the seller ranked first.
    pub leader_rate: Decimal,
    /// Share of profit paid to the sellers ranked second and third.
    pub podium_rate: Decimal,
    /// Share of profit paid to everyone else except the last-ranked seller, who gets nothing.
    pub base_rate: Decimal,
}

impl Default for ProfitRankParams {
    fn default() -> Self {
        Self {
            leader_rate: dec!(0.15),
            podium_rate: dec!(0.10),
            base_rate: dec!(0.05),
        }
    }
}

/// Parameters for the flat bonus.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FlatRateParams {
    pub rate: Decimal,
}

impl Default for FlatRateParams {
    fn default() -> Self {
        Self { rate: dec!(0.05) }
    }
}

/// Controls the shape of the generated report.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Report {
    pub top_products_limit: usize,
}

impl Default for Report {
    fn default() -> Self {
        Self {
            top_products_limit: MAX_TOP_PRODUCTS,
        }
    }
}
