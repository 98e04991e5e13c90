use crate::error::CoreError;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Number of decimal places carried by every monetary figure in a report.
pub const MONEY_SCALE: u32 = 2;

/// Hard ceiling on the length of a seller's top-products list.
pub const MAX_TOP_PRODUCTS: usize = 10;

/// Rounds a monetary amount half away from zero and pins it to exactly two decimals,
/// so `12` is reported as `12.00`.
pub fn round_money(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(MONEY_SCALE);
    rounded
}

// ==============================================================================
// Input Records
// ==============================================================================

/// A member of the sales staff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seller {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
}

impl Seller {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A catalogue entry. `purchase_price` is the unit cost paid by the shop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub sku: String,
    pub purchase_price: Decimal,
}

/// One product entry within a receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub sku: String,
    pub quantity: u64,
    pub sale_price: Decimal,
    /// Discount as a percentage, nominally in `[0, 100]`.
    #[serde(default)]
    pub discount: Decimal,
}

/// A single receipt attributed to a seller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    /// Only used to make log lines traceable back to the source data.
    #[serde(default)]
    pub receipt_id: Option<String>,
    pub seller_id: String,
    pub total_amount: Decimal,
    #[serde(default)]
    pub items: Vec<LineItem>,
}

/// The complete, already-materialized input to one analysis run.
///
/// Missing collections deserialize as empty and are rejected by [`SalesData::validate`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesData {
    #[serde(default)]
    pub sellers: Vec<Seller>,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub purchase_records: Vec<PurchaseRecord>,
}

impl SalesData {
    /// Checks that every collection is present and non-empty.
    pub fn validate(&self) -> Result<(), CoreError> {
        let collections = [
            ("sellers", self.sellers.is_empty()),
            ("products", self.products.is_empty()),
            ("purchase_records", self.purchase_records.is_empty()),
        ];

        for (name, is_empty) in collections {
            if is_empty {
                return Err(CoreError::InvalidInput(
                    name.to_string(),
                    "expected a non-empty collection".to_string(),
                ));
            }
        }

        Ok(())
    }
}

// ==============================================================================
// Derived Statistics
// ==============================================================================

/// A product and the total quantity a seller moved of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopProduct {
    pub sku: String,
    pub quantity: u64,
}

/// Cumulative quantity sold per SKU, remembering the order in which SKUs were first sold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductTally {
    positions: HashMap<String, usize>,
    entries: Vec<TopProduct>,
}

impl ProductTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `quantity` units to `sku`, starting from zero on its first occurrence.
    pub fn add(&mut self, sku: &str, quantity: u64) {
        match self.positions.get(sku) {
            Some(&position) => {
                let entry = &mut self.entries[position];
                entry.quantity = entry.quantity.saturating_add(quantity);
            }
            None => {
                self.positions.insert(sku.to_string(), self.entries.len());
                self.entries.push(TopProduct {
                    sku: sku.to_string(),
                    quantity,
                });
            }
        }
    }

    pub fn quantity_of(&self, sku: &str) -> Option<u64> {
        self.positions.get(sku).map(|&position| self.entries[position].quantity)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns up to `limit` products, best sellers first.
    ///
    /// The sort is stable: SKUs with equal quantities keep the order in which they were first sold.
    pub fn top(&self, limit: usize) -> Vec<TopProduct> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.quantity.cmp(&a.quantity));
        ranked.truncate(limit);
        ranked
    }
}

/// Running totals for one seller during an analysis run.
#[derive(Debug, Clone, PartialEq)]
pub struct SellerStats {
    pub seller_id: String,
    pub name: String,
    pub revenue: Decimal,
    pub profit: Decimal,
    pub sales_count: u64,
    pub products_sold: ProductTally,
}

impl SellerStats {
    /// Creates a new, zeroed-out accumulator for `seller`.
    pub fn new(seller: &Seller) -> Self {
        Self {
            seller_id: seller.id.clone(),
            name: seller.full_name(),
            revenue: Decimal::ZERO,
            profit: Decimal::ZERO,
            sales_count: 0,
            products_sold: ProductTally::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn round_money_always_carries_two_decimals() {
        assert_eq!(round_money(dec!(12)).to_string(), "12.00");
        assert_eq!(round_money(dec!(2.345)).to_string(), "2.35");
        assert_eq!(round_money(dec!(-2.345)).to_string(), "-2.35");
        assert_eq!(round_money(dec!(0.1) + dec!(0.2)).to_string(), "0.30");
    }

    #[test]
    fn tally_accumulates_and_keeps_first_sale_order_for_ties() {
        let mut tally = ProductTally::new();
        tally.add("SKU_B", 2);
        tally.add("SKU_A", 5);
        tally.add("SKU_C", 3);
        tally.add("SKU_B", 3);

        assert_eq!(tally.len(), 3);
        assert_eq!(tally.quantity_of("SKU_B"), Some(5));
        assert_eq!(tally.quantity_of("SKU_Z"), None);

        let top = tally.top(10);
        let skus: Vec<&str> = top.iter().map(|p| p.sku.as_str()).collect();
        assert_eq!(skus, vec!["SKU_B", "SKU_A", "SKU_C"]);
    }

    #[test]
    fn tally_top_respects_limit() {
        let mut tally = ProductTally::new();
        for i in 0..15u64 {
            tally.add(&format!("SKU_{i:03}"), i + 1);
        }

        let top = tally.top(10);
        assert_eq!(top.len(), 10);
        assert_eq!(top[0].quantity, 15);
        assert_eq!(top[9].quantity, 6);
    }

    #[test]
    fn validate_rejects_empty_collections() {
        let data = SalesData {
            sellers: vec![],
            products: vec![Product {
                sku: "SKU_001".to_string(),
                purchase_price: dec!(10),
            }],
            purchase_records: vec![],
        };

        let err = data.validate().unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput(ref name, _) if name == "sellers"));
    }

    #[test]
    fn missing_collections_deserialize_as_empty() {
        let data: SalesData = serde_json::from_str(r#"{ "sellers": [] }"#).unwrap();
        assert!(data.products.is_empty());
        assert!(data.validate().is_err());
    }

    #[test]
    fn line_item_accepts_numeric_json() {
        let item: LineItem = serde_json::from_str(
            r#"{ "sku": "SKU_001", "quantity": 2, "sale_price": 100.5, "discount": 10 }"#,
        )
        .unwrap();
        assert_eq!(item.quantity, 2);
        assert_eq!(item.sale_price, dec!(100.5));
        assert_eq!(item.discount, dec!(10));
    }
}
