//! Shared data model: the sales input records and the per-seller accumulators built from them.

pub mod enums;
pub mod error;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::{BonusStrategyId, RevenueStrategyId};
pub use error::CoreError;
pub use structs::{
    round_money, LineItem, Product, ProductTally, PurchaseRecord, SalesData, Seller, SellerStats,
    TopProduct, MAX_TOP_PRODUCTS, MONEY_SCALE,
};
