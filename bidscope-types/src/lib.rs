mod price_column;
mod sale_record;

pub mod sale_stats;

pub use price_column::PriceColumn;
pub use sale_record::{CleanRecord, RawRecord};
pub use sale_stats::{PriceSummary, SaleStats};
