//! Turns scraped sold-listing text into a clean, outlier-free set of sale prices.
//!
//! Everything here is a pure function of its input. Acquiring the raw records and writing
//! the results out live in other crates.

mod config;
mod pipeline;

pub mod field_parser;
pub mod outliers;
pub mod record_filter;
pub mod sort;
pub mod stats;

pub use config::{CleanConfig, ConfigError};
pub use outliers::IqrFences;
pub use pipeline::{clean_sales, CleanOutcome, CleanedSales};
pub use record_filter::DroppedFields;
