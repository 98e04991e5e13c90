//! # Salesrank Strategy Library
//!
//! This crate holds the calculation policies used by the aggregation engine. It defines
//! two traits, one per policy, and provides concrete implementations of each.
//!
//! ## Architectural Principles
//!
//! - **Pure Logic:** Strategies never touch I/O. They receive fully-materialized records
//!   and return an amount.
//! - **Engine Agnostic:** The `analytics` crate works against `RevenueStrategy` and
//!   `BonusStrategy` only, so formulas can change without touching the aggregation.
//! - **Closures Welcome:** Any `Fn` with the matching signature implements the trait, so
//!   callers can pass a one-off formula without declaring a type.
//!
//! ## Public API
//!
//! - `RevenueStrategy` / `BonusStrategy`: the traits every strategy implements.
//! - `create_revenue_strategy` / `create_bonus_strategy`: factory functions driven by config.
//! - The concrete strategy structs themselves (e.g., `DiscountedRevenue`).

// Declare all the modules that constitute this crate.
pub mod discounted_revenue;
pub mod error;
pub mod factory;
pub mod flat_rate_bonus;
pub mod list_price_revenue;
pub mod profit_rank_bonus;

// Re-export the key components to create a clean, public-facing API.
pub use discounted_revenue::DiscountedRevenue;
pub use error::StrategyError;
pub use factory::{create_bonus_strategy, create_revenue_strategy};
pub use flat_rate_bonus::FlatRateBonus;
pub use list_price_revenue::ListPriceRevenue;
pub use profit_rank_bonus::ProfitRankBonus;

// Re-export the identifiers from core_types
pub use core_types::{BonusStrategyId, RevenueStrategyId};

use core_types::{LineItem, Product, SellerStats};
use rust_decimal::Decimal;

/// Computes the revenue earned on a single line item.
///
/// The `Send + Sync` bounds let one configured engine be shared across threads.
/// Implementations return `StrategyError::Overflow` instead of panicking when the
/// inputs exceed the range of `Decimal`.
pub trait RevenueStrategy: Send + Sync {
    fn compute_revenue(&self, item: &LineItem, product: &Product) -> Result<Decimal, StrategyError>;
}

/// Computes a seller's bonus once the final profit ranking is known.
pub trait BonusStrategy: Send + Sync {
    /// # Arguments
    ///
    /// * `rank` - Zero-based position of the seller, highest profit first.
    /// * `total` - Number of sellers in the ranking.
    /// * `stats` - The seller's fully accumulated statistics.
    fn compute_bonus(
        &self,
        rank: usize,
        total: usize,
        stats: &SellerStats,
    ) -> Result<Decimal, StrategyError>;
}

impl<F> RevenueStrategy for F
where
    F: Fn(&LineItem, &Product) -> Result<Decimal, StrategyError> + Send + Sync,
{
    fn compute_revenue(&self, item: &LineItem, product: &Product) -> Result<Decimal, StrategyError> {
        self(item, product)
    }
}

impl<F> BonusStrategy for F
where
    F: Fn(usize, usize, &SellerStats) -> Result<Decimal, StrategyError> + Send + Sync,
{
    fn compute_bonus(
        &self,
        rank: usize,
        total: usize,
        stats: &SellerStats,
    ) -> Result<Decimal, StrategyError> {
        self(rank, total, stats)
    }
}
