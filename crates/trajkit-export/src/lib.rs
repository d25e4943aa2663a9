//! # Trajkit Export
//!
//! Writes finished trajectories as flat per-axis text files for analysis
//! tools. Each axis lands in its own file as a single delimited row, with
//! all three rows sharing point order:
//!
//! ```text
//! Export/Circle SetX.csv
//! Export/Circle SetY.csv
//! Export/Circle SetZ.csv
//! ```
//!
//! Files written here can be read back with [`CsvExporter::import`].

pub mod csv;
pub mod error;

pub use csv::{validate_delimiter, Axis, CsvExporter, ExportedFiles, DEFAULT_DELIMITER};
pub use error::{ExportError, ExportResult};
