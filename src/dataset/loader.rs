//! Load the sales CSV from disk or over HTTP.
//!
//! The header is checked against the required column set before any row is
//! deserialized, so a wrong file fails with the list of missing columns
//! instead of a serde error on line 2.

use super::record::{Dataset, SalesRecord};
use crate::utils::config::{DEFAULT_FETCH_TIMEOUT, REQUIRED_COLUMNS};
use crate::utils::error::DatasetError;
use log::{debug, info, warn};
use reqwest::blocking::Client;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

/// Where the dataset comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// Local CSV file
    Path(PathBuf),
    /// `http://` or `https://` URL
    Url(String),
}

impl DataSource {
    /// Classify a user-supplied source string
    ///
    /// **Public** - used by the CLI to interpret `--data`
    pub fn parse(source: &str) -> Self {
        let source = source.trim();
        if is_url(source) {
            DataSource::Url(source.to_string())
        } else {
            DataSource::Path(PathBuf::from(source))
        }
    }

    pub fn is_url(&self) -> bool {
        matches!(self, DataSource::Url(_))
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Path(path) => write!(f, "{}", path.display()),
            DataSource::Url(url) => write!(f, "{}", url),
        }
    }
}

/// Whether a source string names an http(s) resource
pub fn is_url(source: &str) -> bool {
    let lower = source.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Load and validate the dataset
///
/// **Public** - main entry point for dataset loading
///
/// # Errors
/// * `DatasetError::RequestFailed` / `HttpStatus` - URL unreachable
/// * `DatasetError::IoError` - file cannot be opened
/// * `DatasetError::MissingColumns` - header lacks required columns
/// * `DatasetError::InvalidRecord` - a row does not match the schema
pub fn load_dataset(source: &DataSource) -> Result<Dataset, DatasetError> {
    info!("Loading dataset from: {}", source);

    let dataset = match source {
        DataSource::Path(path) => {
            let file = File::open(path)?;
            read_csv(file)?
        }
        DataSource::Url(url) => {
            let body = fetch_csv(url)?;
            read_csv(body.as_bytes())?
        }
    };

    if dataset.is_empty() {
        warn!("Dataset at {} has a header but no rows", source);
    } else {
        info!("Loaded {} sales records", dataset.len());
    }

    Ok(dataset)
}

/// Parse a CSV stream into a dataset
///
/// **Public** - also used directly by tests and by callers that already
/// hold the bytes
pub fn read_csv<R: Read>(reader: R) -> Result<Dataset, DatasetError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    check_headers(&headers)?;

    let mut records = Vec::new();
    let mut row = csv::StringRecord::new();

    while rdr
        .read_record(&mut row)
        .map_err(|e| DatasetError::InvalidRecord {
            line: e
                .position()
                .map(|p| p.line())
                .unwrap_or_else(|| rdr.position().line()),
            message: e.to_string(),
        })?
    {
        // Physical line where the record starts; blank lines are skipped by the reader
        let line = row
            .position()
            .map(|p| p.line())
            .unwrap_or_else(|| rdr.position().line());

        let record: SalesRecord = row
            .deserialize(Some(&headers))
            .map_err(|e| DatasetError::InvalidRecord {
                line,
                message: e.to_string(),
            })?;

        record
            .validate()
            .map_err(|message| DatasetError::InvalidRecord { line, message })?;

        records.push(record);
    }

    debug!("Parsed {} CSV rows", records.len());

    Ok(Dataset::new(records))
}

/// Verify the header carries every required column
///
/// **Public** - exposed for the `check` command and tests
pub fn check_headers(headers: &csv::StringRecord) -> Result<(), DatasetError> {
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|column| !headers.iter().any(|h| h == **column))
        .map(|column| column.to_string())
        .collect();

    if !missing.is_empty() {
        return Err(DatasetError::MissingColumns(missing));
    }

    let extra = headers.len().saturating_sub(REQUIRED_COLUMNS.len());
    if extra > 0 {
        debug!("Ignoring {} extra CSV column(s)", extra);
    }

    Ok(())
}

/// Download the CSV body
///
/// **Private** - internal helper for load_dataset
fn fetch_csv(url: &str) -> Result<String, DatasetError> {
    let client = Client::builder()
        .timeout(DEFAULT_FETCH_TIMEOUT)
        .build()
        .map_err(DatasetError::RequestFailed)?;

    debug!("GET {}", url);

    let response = client.get(url).send().map_err(DatasetError::RequestFailed)?;

    if !response.status().is_success() {
        return Err(DatasetError::HttpStatus {
            status: response.status().as_u16(),
            url: url.to_string(),
        });
    }

    let body = response.text().map_err(DatasetError::RequestFailed)?;
    debug!("Downloaded {} bytes", body.len());

    Ok(body)
}
