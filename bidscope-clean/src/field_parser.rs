use std::str::FromStr;

use bidscope_types::RawRecord;
use chrono::{Month, NaiveDate};
use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;

lazy_static! {
    /// What is left of a price once `$` and `,` are gone.
    static ref PLAIN_AMOUNT: Regex = Regex::new(r"^\+?(\d+\.?\d*|\.\d+)$").unwrap();
    /// First money-looking token in a shipping caption, e.g. `+$1,234.56`.
    static ref SHIPPING_AMOUNT: Regex =
        Regex::new(r"\+?\$?(\d{1,3}(?:,\d{3})*(?:\.\d{2})?)").unwrap();
    static ref SOLD_DATE: Regex =
        Regex::new(r"Sold\s+([A-Za-z]+)\s+(\d{1,2}),\s+(\d{4})").unwrap();
}

/// Anything above this isn't a listing price, it's a scrape of some other number.
/// Keeping amounts below it also keeps every later sum and fence inside `Decimal` range.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xA4C6_8000, 0x3_8D7E, 0, false, 0);

/// The typed fields of one raw record. `None` marks a required field that failed to parse.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParsedFields {
    pub price: Option<Decimal>,
    pub shipping: Decimal,
    pub date_sold: Option<NaiveDate>,
}

/// Parses every field of `raw`. Shipping is only looked at when `track_shipping` is set.
pub fn parse_record(raw: &RawRecord, track_shipping: bool) -> ParsedFields {
    let shipping = if track_shipping {
        raw.shipping_text
            .as_deref()
            .map(parse_shipping)
            .unwrap_or(Decimal::ZERO)
    } else {
        Decimal::ZERO
    };
    ParsedFields {
        price: parse_price(&raw.price_text),
        shipping,
        date_sold: parse_sold_date(&raw.date_text),
    }
}

/// `"$1,234.50"` -> `1234.50`. Ranges, words and negative numbers don't parse.
pub fn parse_price(price_text: &str) -> Option<Decimal> {
    let stripped: String = price_text
        .chars()
        .filter(|c| *c != '$' && *c != ',')
        .collect();
    parse_amount(stripped.trim())
}

/// Free delivery, local pickup or a caption without any amount all mean no shipping cost.
pub fn parse_shipping(shipping_text: &str) -> Decimal {
    SHIPPING_AMOUNT
        .captures(shipping_text)
        .and_then(|captures| captures.get(1))
        .and_then(|amount| parse_amount(&amount.as_str().replace(',', "")))
        .unwrap_or(Decimal::ZERO)
}

/// Finds `Sold <Month> <Day>, <Year>` anywhere in the caption. Only the first match counts.
pub fn parse_sold_date(date_text: &str) -> Option<NaiveDate> {
    let captures = SOLD_DATE.captures(date_text)?;
    let month = parse_month(&captures[1])?;
    let day: u32 = captures[2].parse().ok()?;
    let year: i32 = captures[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month.number_from_month(), day)
}

/// Full or three letter month names in any case, plus the common `Sept`.
fn parse_month(name: &str) -> Option<Month> {
    if name.eq_ignore_ascii_case("sept") {
        return Some(Month::September);
    }
    Month::from_str(name).ok()
}

/// Accepts `12`, `12.5`, `12.`, `.5` and a leading `+`.
fn parse_amount(text: &str) -> Option<Decimal> {
    let digits = PLAIN_AMOUNT.captures(text)?.get(1)?.as_str();
    let digits = digits.strip_suffix('.').unwrap_or(digits);
    let normalized = if digits.starts_with('.') {
        format!("0{digits}")
    } else {
        digits.to_string()
    };
    Decimal::from_str(&normalized)
        .ok()
        .filter(|amount| *amount <= MAX_AMOUNT)
}
