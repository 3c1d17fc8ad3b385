//! I/O module
//!
//! Handles reading the JSON inputs and writing the text report.
//!
//! # Components
//!
//! - `json_reader` - Reads an input file into a generic JSON value
//! - `report_writer` - Renders the organization registry to a stream or a new file

pub mod json_reader;
pub mod report_writer;

pub use json_reader::read_json;
pub use report_writer::{write_report, Report, ReportDestination};
