use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::CleanRecord;

/// The column outliers are fenced on and statistics are computed over.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceColumn {
    /// Listing price alone, for sources that don't report shipping.
    Price,
    /// Listing price plus shipping.
    TotalPrice,
}

impl PriceColumn {
    pub fn from_shipping_tracked(track_shipping: bool) -> Self {
        if track_shipping {
            PriceColumn::TotalPrice
        } else {
            PriceColumn::Price
        }
    }

    pub fn value(self, record: &CleanRecord) -> Decimal {
        match self {
            PriceColumn::Price => record.price(),
            PriceColumn::TotalPrice => record.total_price(),
        }
    }
}
