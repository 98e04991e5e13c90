use crate::error::AnalyticsError;
use crate::options::AnalysisOptions;
use crate::report::SellerReport;
use core_types::{
    round_money, CoreError, Product, PurchaseRecord, SalesData, SellerStats, MAX_TOP_PRODUCTS,
};
use rust_decimal::Decimal;
use std::collections::HashMap;
use strategies::{BonusStrategy, RevenueStrategy};

/// Counts of what the accumulation pass used and what it skipped.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct AccumulationSummary {
    records_processed: usize,
    records_skipped: usize,
    items_skipped: usize,
}

/// A stateless calculator for deriving per-seller sales analytics from purchase records.
#[derive(Debug, Clone)]
pub struct AnalyticsEngine {
    top_products_limit: usize,
}

impl Default for AnalyticsEngine {
    fn default() -> Self {
        Self {
            top_products_limit: MAX_TOP_PRODUCTS,
        }
    }
}

impl AnalyticsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shortens each seller's top-products list. Values above 10 are capped at 10.
    pub fn with_top_products_limit(mut self, limit: usize) -> Self {
        self.top_products_limit = limit.min(MAX_TOP_PRODUCTS);
        self
    }

    pub fn top_products_limit(&self) -> usize {
        self.top_products_limit
    }

    /// The main entry point for calculating seller analytics.
    ///
    /// # Arguments
    ///
    /// * `data` - The sellers, products and purchase records to analyze. `None` is rejected.
    /// * `options` - The revenue and bonus strategies to apply.
    ///
    /// # Returns
    ///
    /// One `SellerReport` per input seller, ordered by profit from highest to lowest, or an
    /// `AnalyticsError` if the input or options are incomplete.
    ///
    /// Purchase records naming an unknown seller, and line items naming an unknown SKU,
    /// are skipped without error.
    pub fn analyze(
        &self,
        data: Option<&SalesData>,
        options: &AnalysisOptions,
    ) -> Result<Vec<SellerReport>, AnalyticsError> {
        let data = data.ok_or_else(|| {
            CoreError::InvalidInput("data".to_string(), "no sales data was supplied".to_string())
        })?;
        data.validate()?;

        let revenue_strategy = options
            .calculate_revenue
            .as_deref()
            .ok_or(AnalyticsError::MissingStrategy("calculate_revenue"))?;
        let bonus_strategy = options
            .calculate_bonus
            .as_deref()
            .ok_or(AnalyticsError::MissingStrategy("calculate_bonus"))?;

        let mut seller_stats: Vec<SellerStats> = data.sellers.iter().map(SellerStats::new).collect();
        let product_index: HashMap<&str, &Product> = data
            .products
            .iter()
            .map(|product| (product.sku.as_str(), product))
            .collect();

        let summary = self.accumulate(
            &data.purchase_records,
            &mut seller_stats,
            &product_index,
            revenue_strategy,
        )?;

        Self::rank_by_profit(&mut seller_stats);
        let reports = self.finalize(&seller_stats, bonus_strategy)?;

        tracing::info!(
            sellers = reports.len(),
            records_processed = summary.records_processed,
            records_skipped = summary.records_skipped,
            items_skipped = summary.items_skipped,
            "Sales analysis complete."
        );

        Ok(reports)
    }

    /// Walks every purchase record once, in order, updating the matching seller's totals.
    fn accumulate(
        &self,
        records: &[PurchaseRecord],
        seller_stats: &mut [SellerStats],
        product_index: &HashMap<&str, &Product>,
        revenue_strategy: &dyn RevenueStrategy,
    ) -> Result<AccumulationSummary, AnalyticsError> {
        // Positions into `seller_stats`; a repeated seller id resolves to its last entry.
        let seller_index: HashMap<String, usize> = seller_stats
            .iter()
            .enumerate()
            .map(|(position, stats)| (stats.seller_id.clone(), position))
            .collect();

        let mut summary = AccumulationSummary::default();

        for record in records {
            let Some(&position) = seller_index.get(record.seller_id.as_str()) else {
                tracing::debug!(
                    receipt = record.receipt_id.as_deref().unwrap_or("-"),
                    seller = %record.seller_id,
                    "Skipping purchase record for unknown seller."
                );
                summary.records_skipped += 1;
                continue;
            };

            let stats = &mut seller_stats[position];
            stats.sales_count += 1;
            stats.revenue = checked(stats.revenue.checked_add(record.total_amount), || {
                format!("revenue for seller {}", stats.seller_id)
            })?;
            summary.records_processed += 1;

            for item in &record.items {
                let Some(product) = product_index.get(item.sku.as_str()) else {
                    tracing::debug!(
                        receipt = record.receipt_id.as_deref().unwrap_or("-"),
                        sku = %item.sku,
                        "Skipping line item for unknown product."
                    );
                    summary.items_skipped += 1;
                    continue;
                };

                let cost = checked(
                    product.purchase_price.checked_mul(Decimal::from(item.quantity)),
                    || format!("cost of SKU {}", item.sku),
                )?;
                let item_revenue = revenue_strategy.compute_revenue(item, product)?;
                stats.profit = checked(
                    item_revenue
                        .checked_sub(cost)
                        .and_then(|item_profit| stats.profit.checked_add(item_profit)),
                    || format!("profit for seller {}", stats.seller_id),
                )?;
                stats.products_sold.add(&item.sku, item.quantity);
            }
        }

        Ok(summary)
    }

    /// Sorts sellers by profit, highest first. The sort is stable, so sellers with equal
    /// profit keep their input order.
    fn rank_by_profit(seller_stats: &mut [SellerStats]) {
        seller_stats.sort_by(|a, b| b.profit.cmp(&a.profit));
    }

    /// Assigns bonuses and top-product lists by rank and shapes the output rows.
    fn finalize(
        &self,
        ranked: &[SellerStats],
        bonus_strategy: &dyn BonusStrategy,
    ) -> Result<Vec<SellerReport>, AnalyticsError> {
        let total = ranked.len();

        ranked
            .iter()
            .enumerate()
            .map(|(rank, stats)| -> Result<SellerReport, AnalyticsError> {
                let bonus = bonus_strategy.compute_bonus(rank, total, stats)?;
                Ok(SellerReport {
                    seller_id: stats.seller_id.clone(),
                    name: stats.name.clone(),
                    revenue: round_money(stats.revenue),
                    profit: round_money(stats.profit),
                    sales_count: stats.sales_count,
                    top_products: stats.products_sold.top(self.top_products_limit),
                    bonus: round_money(bonus),
                })
            })
            .collect()
    }
}

/// Turns a `checked_*` result into a calculation error naming what overflowed.
fn checked(value: Option<Decimal>, what: impl FnOnce() -> String) -> Result<Decimal, AnalyticsError> {
    value.ok_or_else(|| AnalyticsError::Calculation(format!("arithmetic overflow in {}", what())))
}
