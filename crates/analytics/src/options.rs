use strategies::{BonusStrategy, DiscountedRevenue, ProfitRankBonus, RevenueStrategy};

/// The pair of calculation strategies an analysis run is parameterized by.
///
/// Both slots are optional so callers assembling options piecemeal get a
/// `MissingStrategy` error from the engine instead of a default they did not ask for.
#[derive(Default)]
pub struct AnalysisOptions {
    pub calculate_revenue: Option<Box<dyn RevenueStrategy>>,
    pub calculate_bonus: Option<Box<dyn BonusStrategy>>,
}

impl AnalysisOptions {
    pub fn new(
        calculate_revenue: impl RevenueStrategy + 'static,
        calculate_bonus: impl BonusStrategy + 'static,
    ) -> Self {
        Self {
            calculate_revenue: Some(Box::new(calculate_revenue)),
            calculate_bonus: Some(Box::new(calculate_bonus)),
        }
    }

    /// Wraps strategies that were already boxed, e.g. by the strategy factory.
    pub fn from_boxed(
        calculate_revenue: Box<dyn RevenueStrategy>,
        calculate_bonus: Box<dyn BonusStrategy>,
    ) -> Self {
        Self {
            calculate_revenue: Some(calculate_revenue),
            calculate_bonus: Some(calculate_bonus),
        }
    }

    /// Discounted revenue with the rank-based bonus at its default rates.
    pub fn standard() -> Self {
        Self::new(DiscountedRevenue, ProfitRankBonus::default())
    }
}
