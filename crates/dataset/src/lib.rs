//! # Strategy Lab Dataset Crate
//!
//! This crate reads and writes trade datasets as plain text. It is the system's
//! only point of contact with the file system for trade data.
//!
//! ## Format
//!
//! One line per row (strategy), each trade written as `profit,duration;` with reals
//! rendered to six significant digits in `%g` style. An empty row is an empty line.
//!
//! ## Public API
//!
//! - `DatasetWriter` / `write_dataset`: Serialize rows to a file or any `Write`.
//! - `read_dataset` / `read_rows` / `parse_row`: Parse the same format back.
//! - `format_real`: The number rendering shared by the writer.
//! - `DatasetError`: The specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod error;
pub mod format;
pub mod reader;
pub mod writer;

// Re-export the key components to create a clean, public-facing API.
pub use error::DatasetError;
pub use format::format_real;
pub use reader::{parse_row, read_dataset, read_rows};
pub use writer::{write_dataset, DatasetWriter};
