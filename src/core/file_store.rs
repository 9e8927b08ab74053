//! File-backed product store
//!
//! Products live in a single text file, one `name,quantity,price` line per
//! product. Each operation opens the file, does its work and drops the
//! handle before returning, on success and on error alike.
//!
//! # Leniency
//!
//! Loading never fails because of file contents. Blank lines, lines with
//! the wrong number of fields, unparsable numbers and invalid UTF-8 are
//! skipped (and logged at debug level). Only I/O failures are reported.

use crate::core::traits::{ClearOutcome, InventoryStore};
use crate::io::record_format::{convert_record, write_record, FIELD_DELIMITER};
use crate::types::{InventoryError, Product, RecordError};
use csv::{ReaderBuilder, Trim};
use log::{debug, info, warn};
use std::fs::{self, File, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Default store file name, relative to the working directory
pub const DEFAULT_STORE_FILE: &str = "estoque.txt";

/// Product store backed by a text file
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store over the given file
    ///
    /// The file is not touched until the first operation; it does not need
    /// to exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStore { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_failure(&self, operation: &str, error: impl Into<InventoryError>) -> InventoryError {
        let error = error.into();
        warn!("{} failed for '{}': {}", operation, self.path.display(), error);
        error
    }
}

/// Line number and skip reason for a record that is not valid UTF-8
fn unreadable_line(error: &csv::Error) -> Option<(u64, RecordError)> {
    match error.kind() {
        csv::ErrorKind::Utf8 { pos, .. } => Some((
            pos.as_ref().map_or(0, |pos| pos.line()),
            RecordError::Encoding,
        )),
        _ => None,
    }
}

impl InventoryStore for FileStore {
    fn load_all(&self) -> Result<Vec<Product>, InventoryError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(self.io_failure("load", e)),
        };

        // Quoting is off: names are stored verbatim, quotes included.
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .trim(Trim::All)
            .delimiter(FIELD_DELIMITER)
            .from_reader(file);

        let mut products = Vec::new();
        for result in reader.records() {
            match result {
                Ok(record) => match convert_record(&record) {
                    Ok(product) => products.push(product),
                    Err(e) => debug!(
                        "skipping line {}: {}",
                        record.position().map_or(0, |pos| pos.line()),
                        e
                    ),
                },
                Err(e) if e.is_io_error() => return Err(self.io_failure("load", e)),
                Err(e) => match unreadable_line(&e) {
                    Some((line, reason)) => debug!("skipping line {}: {}", line, reason),
                    None => debug!("skipping unreadable line: {}", e),
                },
            }
        }

        Ok(products)
    }

    fn append(&mut self, product: &Product) -> Result<(), InventoryError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.io_failure("append", e))?;

        write_record(product, &mut file).map_err(|e| self.io_failure("append", e))?;

        info!("appended '{}' to {}", product.name, self.path.display());
        Ok(())
    }

    fn clear(&mut self) -> Result<ClearOutcome, InventoryError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!("cleared {}", self.path.display());
                Ok(ClearOutcome::Cleared)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(ClearOutcome::NothingToClear),
            Err(e) => Err(self.io_failure("clear", e)),
        }
    }
}
