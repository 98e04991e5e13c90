use crate::discounted_revenue::DiscountedRevenue;
use crate::error::StrategyError;
use crate::flat_rate_bonus::FlatRateBonus;
use crate::list_price_revenue::ListPriceRevenue;
use crate::profit_rank_bonus::ProfitRankBonus;
use crate::{BonusStrategy, RevenueStrategy};
use configuration::Config;
use core_types::{BonusStrategyId, RevenueStrategyId};

/// Creates the revenue strategy identified by `id`.
pub fn create_revenue_strategy(id: RevenueStrategyId) -> Box<dyn RevenueStrategy> {
    match id {
        RevenueStrategyId::Discounted => Box::new(DiscountedRevenue),
        RevenueStrategyId::ListPrice => Box::new(ListPriceRevenue),
    }
}

/// Creates the bonus strategy identified by `id`, taking its rates from `config`.
pub fn create_bonus_strategy(
    id: BonusStrategyId,
    config: &Config,
) -> Result<Box<dyn BonusStrategy>, StrategyError> {
    // The compiler will error if a new BonusStrategyId is added but not handled here.
    match id {
        BonusStrategyId::ProfitRank => {
            let params = config.strategies.profit_rank.clone();
            Ok(Box::new(ProfitRankBonus::new(params)?))
        }
        BonusStrategyId::FlatRate => {
            let params = config.strategies.flat_rate.clone();
            Ok(Box::new(FlatRateBonus::new(params)?))
        }
    }
}
