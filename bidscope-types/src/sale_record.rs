use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A listing exactly as the acquisition side extracted it. Every field is still text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "price")]
    pub price_text: String,
    #[serde(rename = "shipping", default, skip_serializing_if = "Option::is_none")]
    pub shipping_text: Option<String>,
    #[serde(rename = "date")]
    pub date_text: String,
}

impl RawRecord {
    pub fn new(price_text: impl Into<String>, date_text: impl Into<String>) -> Self {
        Self {
            price_text: price_text.into(),
            shipping_text: None,
            date_text: date_text.into(),
        }
    }

    pub fn with_shipping(mut self, shipping_text: impl Into<String>) -> Self {
        self.shipping_text = Some(shipping_text.into());
        self
    }
}

/// A completed sale whose price and sale date both parsed.
///
/// `total_price` is derived from `price` and `shipping` at construction and cannot be set
/// independently, so the fields are only reachable through accessors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CleanRecord {
    price: Decimal,
    shipping: Decimal,
    total_price: Decimal,
    date_sold: NaiveDate,
}

impl CleanRecord {
    /// Money is kept to the cent, rounding half to even.
    pub const MONEY_SCALE: u32 = 2;

    pub fn new(price: Decimal, shipping: Decimal, date_sold: NaiveDate) -> Self {
        Self {
            price,
            shipping,
            total_price: (price + shipping).round_dp(Self::MONEY_SCALE),
            date_sold,
        }
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn shipping(&self) -> Decimal {
        self.shipping
    }

    pub fn total_price(&self) -> Decimal {
        self.total_price
    }

    pub fn date_sold(&self) -> NaiveDate {
        self.date_sold
    }
}
