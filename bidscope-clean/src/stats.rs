use bidscope_types::{CleanRecord, PriceColumn, PriceSummary, SaleStats};
use itertools::{Itertools, MinMaxResult};
use rust_decimal::Decimal;

/// Count, mean, min and max of `column`. The mean is exact; rounding is left to whoever
/// displays it.
pub fn summarize(records: &[CleanRecord], column: PriceColumn) -> SaleStats {
    let (min, max) = match records.iter().map(|r| column.value(r)).minmax() {
        MinMaxResult::NoElements => return SaleStats::empty(column),
        MinMaxResult::OneElement(only) => (only, only),
        MinMaxResult::MinMax(min, max) => (min, max),
    };
    let total: Decimal = records.iter().map(|r| column.value(r)).sum();
    SaleStats {
        column,
        count: records.len(),
        summary: Some(PriceSummary {
            mean: total / Decimal::from(records.len()),
            min,
            max,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn sale(price: Decimal, shipping: Decimal) -> CleanRecord {
        CleanRecord::new(price, shipping, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
    }

    #[test]
    fn test_summarize() {
        let records = [sale(dec!(12), dec!(0)), sale(dec!(10), dec!(0))];
        let stats = summarize(&records, PriceColumn::Price);
        assert_eq!(stats.count, 2);
        assert_eq!(
            stats.summary,
            Some(PriceSummary {
                mean: dec!(11),
                min: dec!(10),
                max: dec!(12),
            })
        );
    }

    #[test]
    fn summary_uses_requested_column() {
        let records = [sale(dec!(10), dec!(5)), sale(dec!(20), dec!(0.50))];
        let summary = summarize(&records, PriceColumn::TotalPrice).summary.unwrap();
        assert_eq!(summary.min, dec!(15));
        assert_eq!(summary.max, dec!(20.50));
        assert_eq!(summary.mean, dec!(17.75));
    }

    #[test]
    fn empty_set_has_no_price_statistics() {
        let stats = summarize(&[], PriceColumn::TotalPrice);
        assert_eq!(stats, SaleStats::empty(PriceColumn::TotalPrice));
        assert!(stats.is_empty());
        assert_eq!(stats.summary, None);
    }

    #[test]
    fn single_sale_is_its_own_summary() {
        let stats = summarize(&[sale(dec!(3.33), dec!(0))], PriceColumn::Price);
        let summary = stats.summary.unwrap();
        assert_eq!((summary.mean, summary.min, summary.max), (dec!(3.33), dec!(3.33), dec!(3.33)));
    }
}
