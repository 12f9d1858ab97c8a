use std::fmt;

use bidscope_types::SaleStats;
use rust_decimal::Decimal;
use thousands::Separable;

const RULE: &str = "==============================";

/// `1234.5` -> `$1,234.50`
pub fn format_money(amount: Decimal) -> String {
    format!("${}", format!("{:.2}", amount.round_dp(2)).separate_with_commas())
}

/// The plain text summary printed after a run.
pub struct MarketReport<'a> {
    pub keyword: &'a str,
    pub stats: &'a SaleStats,
}

impl fmt::Display for MarketReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{RULE}")?;
        writeln!(f, "MARKET REPORT: {}", self.keyword.to_uppercase())?;
        writeln!(f)?;
        writeln!(f, "Items Analyzed: {}", self.stats.count)?;
        match &self.stats.summary {
            Some(summary) => {
                writeln!(f, "Average Price: {}", format_money(summary.mean))?;
                writeln!(f, "Minimum Price: {}", format_money(summary.min))?;
                writeln!(f, "Maximum Price: {}", format_money(summary.max))?;
            }
            None => writeln!(f, "No sales survived cleaning.")?,
        }
        writeln!(f, "{RULE}")
    }
}
