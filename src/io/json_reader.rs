//! JSON input reader
//!
//! Reads a whole input file into a [`serde_json::Value`]. The value is not
//! interpreted here; shape and field checks live in [`crate::core::validation`].
//! Inputs are read fully into memory.

use crate::types::ReportError;
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::Path;

/// Read and parse a JSON file
///
/// # Errors
///
/// * `FileNotFound` if nothing exists at `path`
/// * `IoError` if the file cannot be opened or read
/// * `ParseError` if the content is not valid JSON
pub fn read_json(path: &Path) -> Result<Value, ReportError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ReportError::file_not_found(path.display()),
        _ => ReportError::from(e),
    })?;

    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| ReportError::parse_error(path.display(), &e))
}
