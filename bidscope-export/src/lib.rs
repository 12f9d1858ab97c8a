mod report;
mod table;

pub use report::{format_money, MarketReport};
pub use table::{save_sales_csv, write_sales_csv, SalesTable};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}
