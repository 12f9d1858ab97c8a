mod file_source;
mod search;

pub use file_source::{read_records, FileSource, InputFormat};
pub use search::search_url;

use bidscope_types::RawRecord;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("URL parse error: {0}")]
    UrlParseError(#[from] url::ParseError),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("Unknown input format {0:?}, expected json, jsonl or csv")]
    UnknownFormat(String),
    #[error("Record {position} has no {field} field")]
    MissingField {
        position: usize,
        field: &'static str,
    },
    #[error("CSV header has no {0} column")]
    MissingColumn(&'static str),
    #[error("Search keyword is empty")]
    EmptyKeyword,
}

/// Anything that can hand over a batch of already-extracted listings, in acquisition order.
pub trait RecordSource {
    fn records(&self) -> Result<Vec<RawRecord>, Error>;
}
