use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use bidscope_types::RawRecord;
use serde::Deserialize;
use tracing::{debug, info};

use crate::{Error, RecordSource};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputFormat {
    /// One JSON array of listing objects.
    Json,
    /// One listing object per line.
    JsonLines,
    /// `price`, `date` and optionally `shipping` columns.
    Csv,
}

impl InputFormat {
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        extension.parse()
    }
}

impl FromStr for InputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_ascii_lowercase().as_str() {
            "json" => InputFormat::Json,
            "jsonl" | "ndjson" => InputFormat::JsonLines,
            "csv" => InputFormat::Csv,
            _ => return Err(Error::UnknownFormat(s.to_string())),
        })
    }
}

/// A listing as the scraper wrote it out. Fields are optional here only so that a missing
/// one can be reported with its position instead of as a bare serde error.
#[derive(Deserialize, Debug)]
struct ScrapedListing {
    #[serde(default)]
    price: Option<String>,
    #[serde(default)]
    shipping: Option<String>,
    #[serde(default)]
    date: Option<String>,
}

impl ScrapedListing {
    fn into_raw(self, position: usize) -> Result<RawRecord, Error> {
        Ok(RawRecord {
            price_text: self.price.ok_or(Error::MissingField {
                position,
                field: "price",
            })?,
            shipping_text: self.shipping,
            date_text: self.date.ok_or(Error::MissingField {
                position,
                field: "date",
            })?,
        })
    }
}

/// Raw records saved to disk by a scraping run.
#[derive(Clone, Debug)]
pub struct FileSource {
    path: PathBuf,
    format: InputFormat,
}

impl FileSource {
    /// Picks the format from the file extension.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, Error> {
        let path = path.into();
        let format = InputFormat::from_path(&path)?;
        Ok(Self { path, format })
    }

    pub fn with_format(path: impl Into<PathBuf>, format: InputFormat) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }

    pub fn format(&self) -> InputFormat {
        self.format
    }
}

impl RecordSource for FileSource {
    fn records(&self) -> Result<Vec<RawRecord>, Error> {
        let file = File::open(&self.path)?;
        let records = read_records(BufReader::new(file), self.format)?;
        info!(
            path = %self.path.display(),
            format = ?self.format,
            records = records.len(),
            "loaded raw records"
        );
        Ok(records)
    }
}

pub fn read_records(reader: impl BufRead, format: InputFormat) -> Result<Vec<RawRecord>, Error> {
    match format {
        InputFormat::Json => read_json(reader),
        InputFormat::JsonLines => read_json_lines(reader),
        InputFormat::Csv => read_csv(reader),
    }
}

fn read_json(reader: impl Read) -> Result<Vec<RawRecord>, Error> {
    let listings: Vec<ScrapedListing> = serde_json::from_reader(reader)?;
    listings
        .into_iter()
        .enumerate()
        .map(|(i, listing)| listing.into_raw(i + 1))
        .collect()
}

fn read_json_lines(reader: impl BufRead) -> Result<Vec<RawRecord>, Error> {
    let mut records = vec![];
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let listing: ScrapedListing = serde_json::from_str(&line)?;
        records.push(listing.into_raw(records.len() + 1)?);
    }
    Ok(records)
}

fn read_csv(reader: impl Read) -> Result<Vec<RawRecord>, Error> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(reader);
    let headers = rdr.headers()?.clone();
    for column in ["price", "date"] {
        if !headers.iter().any(|h| h == column) {
            return Err(Error::MissingColumn(column));
        }
    }
    let mut records = vec![];
    for row in rdr.deserialize::<ScrapedListing>() {
        let mut listing = row?;
        // An empty cell is still a present field, just one that won't parse.
        listing.price.get_or_insert_with(String::new);
        listing.date.get_or_insert_with(String::new);
        records.push(listing.into_raw(records.len() + 1)?);
    }
    debug!(rows = records.len(), "read csv listings");
    Ok(records)
}
