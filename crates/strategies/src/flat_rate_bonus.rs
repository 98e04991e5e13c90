use crate::error::StrategyError;
use crate::BonusStrategy;
use configuration::FlatRateParams;
use core_types::SellerStats;
use rust_decimal::Decimal;

/// Pays every seller the same share of profit regardless of rank.
#[derive(Debug, Clone)]
pub struct FlatRateBonus {
    rate: Decimal,
}

impl FlatRateBonus {
    pub fn new(params: FlatRateParams) -> Result<Self, StrategyError> {
        if params.rate < Decimal::ZERO {
            return Err(StrategyError::InvalidParameters(format!(
                "rate must not be negative, got {}",
                params.rate
            )));
        }
        Ok(Self { rate: params.rate })
    }
}

impl BonusStrategy for FlatRateBonus {
    fn compute_bonus(
        &self,
        _rank: usize,
        _total: usize,
        stats: &SellerStats,
    ) -> Result<Decimal, StrategyError> {
        stats
            .profit
            .checked_mul(self.rate)
            .ok_or_else(|| StrategyError::Overflow(format!("bonus for seller {}", stats.seller_id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::Seller;
    use rust_decimal_macros::dec;

    #[test]
    fn same_rate_for_every_rank() {
        let bonus = FlatRateBonus::new(FlatRateParams { rate: dec!(0.2) }).unwrap();
        let seller = Seller {
            id: "seller_9".to_string(),
            first_name: "Ivan".to_string(),
            last_name: "Ivanov".to_string(),
        };
        let mut stats = SellerStats::new(&seller);
        stats.profit = dec!(250);

        assert_eq!(bonus.compute_bonus(0, 5, &stats).unwrap(), dec!(50));
        assert_eq!(bonus.compute_bonus(4, 5, &stats).unwrap(), dec!(50));
    }
}
