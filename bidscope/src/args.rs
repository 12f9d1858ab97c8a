use std::path::PathBuf;

use bidscope_clean::CleanConfig;
use bidscope_source::InputFormat;
use clap::Parser;
use rust_decimal::Decimal;

/// Clean scraped sold listings into a price table and a market report
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Item that was searched for
    #[arg(short, long, env = "BIDSCOPE_KEYWORD")]
    pub keyword: String,

    /// Raw listings saved by the scraper (.json, .jsonl or .csv)
    #[arg(short, long, env = "BIDSCOPE_INPUT")]
    pub input: PathBuf,

    /// Input format, when the file extension doesn't say
    #[arg(short, long, env = "BIDSCOPE_FORMAT")]
    pub format: Option<InputFormat>,

    /// Where to write the cleaned sales table
    #[arg(short, long, env = "BIDSCOPE_OUTPUT", default_value = "item_sales.csv")]
    pub output: PathBuf,

    /// The source has no shipping costs; fence and summarize the listing price alone
    #[arg(long, env = "BIDSCOPE_NO_SHIPPING")]
    pub no_shipping: bool,

    /// Skip the IQR outlier filter
    #[arg(long, env = "BIDSCOPE_KEEP_OUTLIERS")]
    pub keep_outliers: bool,

    /// How many IQRs past the quartiles a price may sit before it counts as an outlier
    #[arg(long, env = "BIDSCOPE_IQR_MULTIPLIER", default_value = "1.5")]
    pub iqr_multiplier: Decimal,
}

impl Args {
    pub fn clean_config(&self) -> CleanConfig {
        CleanConfig {
            track_shipping: !self.no_shipping,
            filter_outliers: !self.keep_outliers,
            iqr_multiplier: self.iqr_multiplier,
        }
    }
}
