//! # Salesrank Analytics Engine
//!
//! This crate turns a batch of purchase records into a per-seller league table: revenue,
//! profit, number of sales, best-selling products and a rank-based bonus.
//!
//! ## Architectural Principles
//!
//! - **Pure Logic:** No I/O. The caller hands over fully-loaded `SalesData` and gets a
//!   `Vec<SellerReport>` back.
//! - **Stateless Calculation:** The `AnalyticsEngine` keeps no state between calls. Every
//!   run builds its own indices and accumulators and drops them before returning.
//! - **Pluggable Formulas:** Revenue and bonus calculations come in through
//!   `AnalysisOptions`, so the aggregation never changes when a formula does.
//!
//! ## Public API
//!
//! - `AnalyticsEngine`: The main struct that contains the aggregation logic.
//! - `AnalysisOptions`: The revenue and bonus strategies for a run.
//! - `SellerReport`: One ranked output row.
//! - `AnalyticsError`: The specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod error;
pub mod options;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use engine::AnalyticsEngine;
pub use error::AnalyticsError;
pub use options::AnalysisOptions;
pub use report::SellerReport;
