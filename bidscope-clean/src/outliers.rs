use bidscope_types::{CleanRecord, PriceColumn};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tracing::{debug, info};

const FIRST_QUARTILE: Decimal = Decimal::from_parts(25, 0, 0, false, 2);
const THIRD_QUARTILE: Decimal = Decimal::from_parts(75, 0, 0, false, 2);

/// Tukey fences around the middle half of a price column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IqrFences {
    pub q1: Decimal,
    pub q3: Decimal,
    pub iqr: Decimal,
    pub lower: Decimal,
    pub upper: Decimal,
}

impl IqrFences {
    /// Quartiles are undefined for fewer than two values, so there are no fences either.
    pub fn from_values(values: &[Decimal], multiplier: Decimal) -> Option<Self> {
        if values.len() < 2 {
            return None;
        }
        let mut sorted = values.to_vec();
        sorted.sort_unstable();
        let q1 = quantile_sorted(&sorted, FIRST_QUARTILE)?;
        let q3 = quantile_sorted(&sorted, THIRD_QUARTILE)?;
        let iqr = q3 - q1;
        let spread = iqr.checked_mul(multiplier).unwrap_or(Decimal::MAX);
        Some(Self {
            q1,
            q3,
            iqr,
            lower: q1.checked_sub(spread).unwrap_or(Decimal::MIN),
            upper: q3.checked_add(spread).unwrap_or(Decimal::MAX),
        })
    }

    /// Both fences are inclusive.
    pub fn contains(&self, value: Decimal) -> bool {
        self.lower <= value && value <= self.upper
    }
}

/// Linear interpolation between closest ranks (Hyndman & Fan type 7, the usual spreadsheet
/// and dataframe default). `sorted` must be ascending and `p` within `0..=1`.
pub fn quantile_sorted(sorted: &[Decimal], p: Decimal) -> Option<Decimal> {
    let last = sorted.len().checked_sub(1)?;
    let rank = p * Decimal::from(last);
    let below = rank.floor();
    let index = below.to_usize()?;
    let low = *sorted.get(index)?;
    let fraction = rank - below;
    match sorted.get(index + 1) {
        Some(high) if !fraction.is_zero() => Some(low + fraction * (*high - low)),
        _ => Some(low),
    }
}

/// Drops records whose `column` value falls outside the IQR fences. With fewer than two
/// records nothing can be judged an outlier and the input comes back untouched.
pub fn filter_outliers(
    records: Vec<CleanRecord>,
    column: PriceColumn,
    multiplier: Decimal,
) -> (Vec<CleanRecord>, Option<IqrFences>) {
    let values: Vec<Decimal> = records.iter().map(|r| column.value(r)).collect();
    let Some(fences) = IqrFences::from_values(&values, multiplier) else {
        debug!(records = records.len(), "too few records to fence outliers");
        return (records, None);
    };
    info!(
        q1 = %fences.q1,
        q3 = %fences.q3,
        lower = %fences.lower,
        upper = %fences.upper,
        ?column,
        "computed outlier fences"
    );
    let kept = records
        .into_iter()
        .filter(|record| {
            let value = column.value(record);
            let keep = fences.contains(value);
            if !keep {
                debug!(%value, date_sold = %record.date_sold(), "dropping price outlier");
            }
            keep
        })
        .collect();
    (kept, Some(fences))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn records(prices: &[Decimal]) -> Vec<CleanRecord> {
        prices
            .iter()
            .enumerate()
            .map(|(i, price)| {
                let date = NaiveDate::from_ymd_opt(2024, 1, 1 + i as u32).unwrap();
                CleanRecord::new(*price, Decimal::ZERO, date)
            })
            .collect()
    }

    fn prices(records: &[CleanRecord]) -> Vec<Decimal> {
        records.iter().map(|r| r.price()).collect()
    }

    #[test]
    fn test_quantile_sorted() {
        let sorted = [dec!(1), dec!(2), dec!(3), dec!(4)];
        assert_eq!(quantile_sorted(&sorted, dec!(0.25)), Some(dec!(1.75)));
        assert_eq!(quantile_sorted(&sorted, dec!(0.5)), Some(dec!(2.5)));
        assert_eq!(quantile_sorted(&sorted, dec!(0.75)), Some(dec!(3.25)));
        assert_eq!(quantile_sorted(&sorted, dec!(0)), Some(dec!(1)));
        assert_eq!(quantile_sorted(&sorted, dec!(1)), Some(dec!(4)));
        assert_eq!(quantile_sorted(&[dec!(7)], dec!(0.75)), Some(dec!(7)));
        assert_eq!(quantile_sorted(&[], dec!(0.5)), None);
    }

    #[test]
    fn test_fences() {
        let fences = IqrFences::from_values(&[dec!(12), dec!(10), dec!(1000)], dec!(1.5)).unwrap();
        assert_eq!(fences.q1, dec!(11));
        assert_eq!(fences.q3, dec!(506));
        assert_eq!(fences.iqr, dec!(495));
        assert_eq!(fences.lower, dec!(-731.5));
        assert_eq!(fences.upper, dec!(1248.5));
    }

    #[test]
    fn test_filter_outliers() {
        let (kept, fences) = filter_outliers(
            records(&[dec!(1), dec!(2), dec!(3), dec!(4), dec!(5), dec!(100)]),
            PriceColumn::Price,
            dec!(1.5),
        );
        assert!(fences.is_some());
        assert_eq!(prices(&kept), vec![dec!(1), dec!(2), dec!(3), dec!(4), dec!(5)]);

        let (kept, _) = filter_outliers(
            records(&[dec!(10), dec!(12), dec!(1000), dec!(11)]),
            PriceColumn::Price,
            dec!(1.5),
        );
        assert_eq!(prices(&kept), vec![dec!(10), dec!(12), dec!(11)]);
    }

    #[test]
    fn values_on_the_fences_are_kept() {
        // q1 = 2, q3 = 4, iqr = 2 -> fences at -1 and 7
        let input = records(&[dec!(2), dec!(2), dec!(4), dec!(4), dec!(7)]);
        let (kept, fences) = filter_outliers(input.clone(), PriceColumn::Price, dec!(1.5));
        let fences = fences.unwrap();
        assert_eq!(fences.upper, dec!(7));
        assert_eq!(kept, input);

        // q1 = 10, q3 = 12, iqr = 2 -> fences at 7 and 15
        let input = records(&[dec!(7), dec!(10), dec!(10), dec!(12), dec!(12), dec!(15)]);
        let (kept, fences) = filter_outliers(input.clone(), PriceColumn::Price, dec!(1.5));
        let fences = fences.unwrap();
        assert_eq!((fences.lower, fences.upper), (dec!(7), dec!(15)));
        assert_eq!(kept, input);
    }

    #[test]
    fn too_few_records_pass_through() {
        let (kept, fences) = filter_outliers(Vec::new(), PriceColumn::TotalPrice, dec!(1.5));
        assert!(kept.is_empty());
        assert_eq!(fences, None);

        let single = records(&[dec!(123456)]);
        let (kept, fences) = filter_outliers(single.clone(), PriceColumn::TotalPrice, dec!(1.5));
        assert_eq!(kept, single);
        assert_eq!(fences, None);
    }

    #[test]
    fn fences_follow_the_chosen_column() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let input = vec![
            CleanRecord::new(dec!(10), dec!(0), date),
            CleanRecord::new(dec!(10), dec!(1), date),
            CleanRecord::new(dec!(10), dec!(2), date),
            CleanRecord::new(dec!(10), dec!(90), date),
        ];
        let (kept, _) = filter_outliers(input.clone(), PriceColumn::Price, dec!(1.5));
        assert_eq!(kept.len(), 4);
        let (kept, _) = filter_outliers(input, PriceColumn::TotalPrice, dec!(1.5));
        let totals: Vec<_> = kept.iter().map(|r| r.total_price()).collect();
        assert_eq!(totals, vec![dec!(10), dec!(11), dec!(12)]);
    }

    #[test]
    fn identical_prices_keep_everything() {
        let input = records(&[dec!(5), dec!(5), dec!(5)]);
        let (kept, fences) = filter_outliers(input.clone(), PriceColumn::Price, dec!(1.5));
        assert_eq!(fences.unwrap().iqr, Decimal::ZERO);
        assert_eq!(kept, input);
    }
}
