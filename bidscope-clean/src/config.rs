use bidscope_types::PriceColumn;
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("IQR multiplier must not be negative, got {0}")]
    NegativeIqrMultiplier(Decimal),
}

/// Knobs for [`crate::clean_sales`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CleanConfig {
    /// Whether the source reports a shipping cost. When it does, outliers and statistics
    /// are computed on `price + shipping` instead of on `price` alone.
    pub track_shipping: bool,
    pub filter_outliers: bool,
    /// Tukey's k. 1.5 flags ordinary outliers, 3.0 only the far ones.
    pub iqr_multiplier: Decimal,
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            track_shipping: true,
            filter_outliers: true,
            iqr_multiplier: Decimal::new(15, 1),
        }
    }
}

impl CleanConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.iqr_multiplier < Decimal::ZERO {
            return Err(ConfigError::NegativeIqrMultiplier(self.iqr_multiplier));
        }
        Ok(())
    }

    pub fn price_column(&self) -> PriceColumn {
        PriceColumn::from_shipping_tracked(self.track_shipping)
    }
}
