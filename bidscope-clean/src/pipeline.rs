use bidscope_types::{CleanRecord, RawRecord, SaleStats};
use tracing::{info, warn};

use crate::config::{CleanConfig, ConfigError};
use crate::field_parser::parse_record;
use crate::outliers::{filter_outliers, IqrFences};
use crate::record_filter::{drop_unparsed, DroppedFields};
use crate::sort::sort_newest_first;
use crate::stats::summarize;

/// How many records each stage let through.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CleanOutcome {
    pub received: usize,
    pub unparsed: DroppedFields,
    pub outliers: usize,
    pub kept: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CleanedSales {
    /// Newest sale first.
    pub records: Vec<CleanRecord>,
    pub stats: SaleStats,
    pub outcome: CleanOutcome,
    /// `None` when outlier filtering was off or there were too few records to fence.
    pub fences: Option<IqrFences>,
}

/// Parses, filters, sorts and summarizes one batch of scraped sales.
///
/// Records that fail to parse and price outliers are dropped and only show up in
/// [`CleanOutcome`]. The only error is a bad configuration.
pub fn clean_sales(
    raw: impl IntoIterator<Item = RawRecord>,
    config: &CleanConfig,
) -> Result<CleanedSales, ConfigError> {
    config.validate()?;
    let column = config.price_column();

    let mut received = 0;
    let parsed = raw.into_iter().map(|record| {
        received += 1;
        parse_record(&record, config.track_shipping)
    });
    let (parsed, unparsed) = drop_unparsed(parsed);

    let parsed_count = parsed.len();
    let (mut records, fences) = if config.filter_outliers {
        filter_outliers(parsed, column, config.iqr_multiplier)
    } else {
        (parsed, None)
    };
    let outliers = parsed_count - records.len();

    sort_newest_first(&mut records);
    let stats = summarize(&records, column);

    let outcome = CleanOutcome {
        received,
        unparsed,
        outliers,
        kept: records.len(),
    };
    info!(
        received = outcome.received,
        missing_price = outcome.unparsed.missing_price,
        missing_date = outcome.unparsed.missing_date,
        outliers = outcome.outliers,
        kept = outcome.kept,
        "cleaned sales"
    );
    if stats.is_empty() {
        warn!("no sales survived cleaning");
    }
    Ok(CleanedSales {
        records,
        stats,
        outcome,
        fences,
    })
}
