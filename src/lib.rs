//! SalesForge: synthetic retail sales generation, aggregation and charting
//!
//! The pipeline generates a seeded sales table, summarizes it into scalar
//! metrics plus per-product and per-month aggregates, renders two charts and
//! prints a text report.

pub mod aggregate;
pub mod cli;
pub mod data;
pub mod report;
pub mod viz;

// Re-export public items for easier access
pub use aggregate::{summarize, MonthlyAggregate, ProductAggregate, SalesSummary, YearMonth};
pub use cli::Args;
pub use data::{generate_sales_table, GenerateError, GeneratorConfig, Product, SalesRecord, SalesTable};
pub use report::print_report;
pub use viz::generate_charts;

/// Common result type used throughout the application
pub type Result<T> = anyhow::Result<T>;
