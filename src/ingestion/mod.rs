//! Loading inputs from files.
//!
//! The core operates on in-memory [`crate::types::Dataset`]s and
//! [`crate::lookup::LookupTable`]s; this module reads them from disk:
//!
//! - [`csv`]: a `Dataset` from a headered CSV file with named columns
//! - [`json`]: a `LookupTable` from a JSON object of code → name entries

pub mod csv;
pub mod json;

pub use csv::{read_dataset_from_path, read_dataset_from_reader, DatasetColumns};
pub use json::{read_lookup_from_path, read_lookup_from_str};
