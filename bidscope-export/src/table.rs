use std::io::Write;
use std::path::Path;

use bidscope_types::CleanRecord;
use rust_decimal::Decimal;
use tracing::info;

use crate::Error;

/// Column layout of the exported sales table. The shipping columns only exist when the
/// source reported shipping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SalesTable {
    pub track_shipping: bool,
}

impl SalesTable {
    pub fn header(&self) -> Vec<&'static str> {
        if self.track_shipping {
            vec!["Price", "Shipping", "Date Sold", "Total Price"]
        } else {
            vec!["Price", "Date Sold"]
        }
    }

    pub fn row(&self, record: &CleanRecord) -> Vec<String> {
        let date_sold = record.date_sold().format("%Y-%m-%d").to_string();
        if self.track_shipping {
            vec![
                cents(record.price()),
                cents(record.shipping()),
                date_sold,
                cents(record.total_price()),
            ]
        } else {
            vec![cents(record.price()), date_sold]
        }
    }
}

fn cents(amount: Decimal) -> String {
    format!("{:.2}", amount.round_dp(2))
}

/// Writes one row per record, in the order given.
pub fn write_sales_csv<W: Write>(
    writer: W,
    records: &[CleanRecord],
    table: SalesTable,
) -> Result<(), Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(table.header())?;
    for record in records {
        wtr.write_record(table.row(record))?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn save_sales_csv(
    path: &Path,
    records: &[CleanRecord],
    table: SalesTable,
) -> Result<(), Error> {
    let file = std::fs::File::create(path)?;
    write_sales_csv(file, records, table)?;
    info!(path = %path.display(), rows = records.len(), "saved sales table");
    Ok(())
}
