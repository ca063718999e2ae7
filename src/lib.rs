//! `inventory-reconcile` reconciles two in-memory tabular inventories that
//! describe the same (platform, node) pairs under different naming
//! conventions.
//!
//! The first dataset carries raw codes that are normalized to canonical names
//! through two [`lookup::LookupTable`]s; the second dataset is taken as
//! already canonical. The crate diffs the two canonical pair-sets in both
//! directions and renders each difference as a two-column table
//! (`platform`, `node`) under the fixed names `"Missing in DF1"` and
//! `"Missing in DF2"`.
//!
//! ## Quick example
//!
//! ```rust
//! use inventory_reconcile::lookup::LookupTable;
//! use inventory_reconcile::normalize::Normalizer;
//! use inventory_reconcile::report::StdoutSink;
//! use inventory_reconcile::run::{run_reconciliation, ReconcileOptions};
//! use inventory_reconcile::types::{Dataset, Record};
//!
//! # fn main() -> Result<(), inventory_reconcile::ReconcileError> {
//! let platforms: LookupTable = [("A", "Apple"), ("B", "Banana"), ("C", "Cherry")]
//!     .into_iter()
//!     .collect();
//! let nodes: LookupTable = [("X", "Xylophone"), ("Y", "Yellow"), ("Z", "Zebra")]
//!     .into_iter()
//!     .collect();
//! let normalizer = Normalizer::new(platforms, nodes);
//!
//! // Raw codes in the first inventory, canonical names in the second.
//! let df1 = Dataset::new(vec![
//!     Record::new("A", "X"),
//!     Record::new("B", "Y"),
//!     Record::new("C", "Z"),
//! ]);
//! let df2 = Dataset::new(vec![
//!     Record::new("Apple", "Xylophone"),
//!     Record::new("Banana", "Yellow"),
//!     Record::new("Cherry", "Zebra"),
//! ]);
//!
//! let result = run_reconciliation(
//!     &df1,
//!     &df2,
//!     &normalizer,
//!     &StdoutSink,
//!     &ReconcileOptions::default(),
//! )?;
//! assert!(result.is_in_sync());
//! # Ok(())
//! # }
//! ```
//!
//! ## Unmapped codes
//!
//! A raw code absent from its lookup table is handled per
//! [`normalize::MissingCodePolicy`]: the default fails fast (no partial
//! report is ever displayed), or [`normalize::MissingCodePolicy::Sentinel`]
//! substitutes a caller-chosen canonical name and proceeds.
//!
//! ## Loading inputs from files
//!
//! Datasets can be read from headered CSV and lookup tables from JSON
//! objects:
//!
//! ```no_run
//! use inventory_reconcile::ingestion::{read_dataset_from_path, read_lookup_from_path, DatasetColumns};
//!
//! # fn main() -> Result<(), inventory_reconcile::ReconcileError> {
//! let df1 = read_dataset_from_path("df1.csv", &DatasetColumns::new("platform_1", "node_1"))?;
//! let platforms = read_lookup_from_path("platform_mapping.json")?;
//! println!("rows={} mappings={}", df1.row_count(), platforms.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`types`]: records, canonical pairs, datasets
//! - [`lookup`]: raw-code → canonical-name tables
//! - [`normalize`]: the normalizer and its missing-code policy
//! - [`reconcile`]: two-way pair-set difference
//! - [`report`]: difference tables and the display sink
//! - [`run`]: the end-to-end pipeline with observer hooks
//! - [`ingestion`]: CSV/JSON input loading
//! - [`observe`]: run observers (stderr, file, composite)
//! - [`error`]: error types used across the crate

pub mod error;
pub mod ingestion;
pub mod lookup;
pub mod normalize;
pub mod observe;
pub mod reconcile;
pub mod report;
pub mod run;
pub mod types;

pub use error::{ReconcileError, ReconcileResult};
