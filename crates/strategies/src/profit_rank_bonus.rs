use crate::error::StrategyError;
use crate::BonusStrategy;
use configuration::ProfitRankParams;
use core_types::SellerStats;
use rust_decimal::Decimal;

/// Pays a share of profit that depends on where the seller landed in the ranking.
///
/// Branches are checked in a fixed order and the first match wins:
/// rank 0 gets the leader rate, ranks 1 and 2 the podium rate, the last-ranked seller
/// gets nothing, and everyone else the base rate. With three or fewer sellers the
/// earlier branches shadow the last-place rule.
#[derive(Debug, Clone, Default)]
pub struct ProfitRankBonus {
    params: ProfitRankParams,
}

impl ProfitRankBonus {
    /// Creates a new `ProfitRankBonus` with the given rates.
    pub fn new(params: ProfitRankParams) -> Result<Self, StrategyError> {
        let rates = [
            ("leader_rate", params.leader_rate),
            ("podium_rate", params.podium_rate),
            ("base_rate", params.base_rate),
        ];
        for (name, rate) in rates {
            if rate < Decimal::ZERO {
                return Err(StrategyError::InvalidParameters(format!(
                    "{name} must not be negative, got {rate}"
                )));
            }
        }

        Ok(Self { params })
    }

    fn rate_for(&self, rank: usize, total: usize) -> Decimal {
        match rank {
            0 => self.params.leader_rate,
            1 | 2 => self.params.podium_rate,
            _ if rank + 1 == total => Decimal::ZERO,
            _ => self.params.base_rate,
        }
    }
}

impl BonusStrategy for ProfitRankBonus {
    fn compute_bonus(
        &self,
        rank: usize,
        total: usize,
        stats: &SellerStats,
    ) -> Result<Decimal, StrategyError> {
        let rate = self.rate_for(rank, total);
        tracing::debug!(seller = %stats.seller_id, rank, total, %rate, "ProfitRankBonus: selected rate");
        stats
            .profit
            .checked_mul(rate)
            .ok_or_else(|| StrategyError::Overflow(format!("bonus for seller {}", stats.seller_id)))
    }
}
