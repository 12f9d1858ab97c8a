use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::PriceColumn;

/// Summary statistics over the cleaned sales.
///
/// An empty sale set has no price statistics, `summary` is `None` and `count` is zero.
/// Nothing ever reports a made-up zero average for it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleStats {
    pub column: PriceColumn,
    pub count: usize,
    pub summary: Option<PriceSummary>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceSummary {
    pub mean: Decimal,
    pub min: Decimal,
    pub max: Decimal,
}

impl SaleStats {
    pub fn empty(column: PriceColumn) -> Self {
        Self {
            column,
            count: 0,
            summary: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}
