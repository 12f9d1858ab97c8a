use bidscope_types::CleanRecord;
use tracing::debug;

use crate::field_parser::ParsedFields;

/// Which required fields a dropped record was missing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unparsed {
    Price,
    Date,
    PriceAndDate,
}

impl ParsedFields {
    pub fn into_clean(self) -> Result<CleanRecord, Unparsed> {
        match (self.price, self.date_sold) {
            (Some(price), Some(date_sold)) => Ok(CleanRecord::new(price, self.shipping, date_sold)),
            (None, Some(_)) => Err(Unparsed::Price),
            (Some(_), None) => Err(Unparsed::Date),
            (None, None) => Err(Unparsed::PriceAndDate),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DroppedFields {
    pub missing_price: usize,
    pub missing_date: usize,
    pub total: usize,
}

impl DroppedFields {
    fn record(&mut self, unparsed: Unparsed) {
        self.total += 1;
        match unparsed {
            Unparsed::Price => self.missing_price += 1,
            Unparsed::Date => self.missing_date += 1,
            Unparsed::PriceAndDate => {
                self.missing_price += 1;
                self.missing_date += 1;
            }
        }
    }
}

/// Keeps the records whose price and date both parsed, in input order.
pub fn drop_unparsed(
    parsed: impl IntoIterator<Item = ParsedFields>,
) -> (Vec<CleanRecord>, DroppedFields) {
    let mut dropped = DroppedFields::default();
    let clean = parsed
        .into_iter()
        .enumerate()
        .filter_map(|(position, fields)| match fields.into_clean() {
            Ok(record) => Some(record),
            Err(unparsed) => {
                debug!(position, ?unparsed, "dropping record with unparseable fields");
                dropped.record(unparsed);
                None
            }
        })
        .collect();
    (clean, dropped)
}
