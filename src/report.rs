//! Tabular rendering of difference sets.
//!
//! A [`DifferenceReport`] always has exactly the two columns `platform` and
//! `node`. Rendering goes through a [`ReportSink`], the display collaborator;
//! the core never prints on its own.

use std::collections::BTreeSet;
use std::sync::Mutex;

use prettytable::{Cell, Row, Table};

use crate::reconcile::Reconciliation;
use crate::types::CanonicalPair;

/// Column headers of every difference report.
pub const REPORT_COLUMNS: [&str; 2] = ["platform", "node"];

/// Report name for pairs absent from the first dataset.
pub const MISSING_IN_FIRST_NAME: &str = "Missing in DF1";

/// Report name for pairs absent from the second dataset.
pub const MISSING_IN_SECOND_NAME: &str = "Missing in DF2";

/// A named, ordered difference table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DifferenceReport {
    /// Display name, e.g. `"Missing in DF1"`.
    pub name: String,
    /// Rows, sorted by platform then node.
    pub pairs: Vec<CanonicalPair>,
}

impl DifferenceReport {
    /// Build a report from a difference set, keeping its sorted order.
    pub fn from_set(name: impl Into<String>, set: &BTreeSet<CanonicalPair>) -> Self {
        Self {
            name: name.into(),
            pairs: set.iter().cloned().collect(),
        }
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.pairs.len()
    }

    /// Render as an ASCII table. An empty report still renders the header.
    pub fn render(&self) -> String {
        let mut table = Table::new();
        table.add_row(Row::new(
            REPORT_COLUMNS.iter().map(|c| Cell::new(c)).collect(),
        ));
        for pair in &self.pairs {
            table.add_row(Row::new(vec![
                Cell::new(&pair.platform),
                Cell::new(&pair.node),
            ]));
        }
        table.to_string()
    }

    /// Render as a JSON array of `{"platform": .., "node": ..}` rows.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "name": self.name,
            "rows": self.pairs,
        })
    }
}

impl Reconciliation {
    /// Package both difference sets as reports under the fixed names.
    pub fn reports(&self) -> (DifferenceReport, DifferenceReport) {
        (
            DifferenceReport::from_set(MISSING_IN_FIRST_NAME, &self.missing_in_first),
            DifferenceReport::from_set(MISSING_IN_SECOND_NAME, &self.missing_in_second),
        )
    }
}

/// Display collaborator for finished reports.
///
/// Implementors decide where a report goes (stdout, a log, a UI); the
/// reconciliation run only hands them fully built reports.
pub trait ReportSink {
    /// Display one report.
    fn display(&self, report: &DifferenceReport);
}

/// Prints each report to stdout, name first, then the rendered table.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl ReportSink for StdoutSink {
    fn display(&self, report: &DifferenceReport) {
        println!("{}", report.name);
        println!("{}", report.render());
    }
}

/// Collects displayed reports in memory. Mostly useful in tests.
#[derive(Debug, Default)]
pub struct CollectingSink {
    reports: Mutex<Vec<DifferenceReport>>,
}

impl CollectingSink {
    /// Create an empty collecting sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// All reports displayed so far, in display order.
    pub fn reports(&self) -> Vec<DifferenceReport> {
        self.reports.lock().expect("sink lock poisoned").clone()
    }
}

impl ReportSink for CollectingSink {
    fn display(&self, report: &DifferenceReport) {
        self.reports
            .lock()
            .expect("sink lock poisoned")
            .push(report.clone());
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::{DifferenceReport, REPORT_COLUMNS};
    use crate::types::CanonicalPair;

    fn set(raw: &[(&str, &str)]) -> BTreeSet<CanonicalPair> {
        raw.iter().map(|&(p, n)| CanonicalPair::new(p, n)).collect()
    }

    #[test]
    fn render_contains_headers_and_rows() {
        let report =
            DifferenceReport::from_set("Missing in DF1", &set(&[("Fig", "Fig")]));
        let rendered = report.render();
        for col in REPORT_COLUMNS {
            assert!(rendered.contains(col), "missing header {col}: {rendered}");
        }
        assert!(rendered.contains("Fig"));
    }

    #[test]
    fn empty_report_still_renders_headers() {
        let report = DifferenceReport::from_set("Missing in DF2", &set(&[]));
        assert_eq!(report.row_count(), 0);
        let rendered = report.render();
        assert!(rendered.contains("platform"));
        assert!(rendered.contains("node"));
    }

    #[test]
    fn from_set_keeps_platform_then_node_order() {
        let report = DifferenceReport::from_set(
            "Missing in DF1",
            &set(&[("Banana", "Yellow"), ("Apple", "Zebra"), ("Apple", "Xylophone")]),
        );
        assert_eq!(
            report.pairs,
            vec![
                CanonicalPair::new("Apple", "Xylophone"),
                CanonicalPair::new("Apple", "Zebra"),
                CanonicalPair::new("Banana", "Yellow"),
            ]
        );
    }

    #[test]
    fn to_json_emits_named_rows() {
        let report = DifferenceReport::from_set("Missing in DF1", &set(&[("Fig", "Fig")]));
        let v = report.to_json();
        assert_eq!(v["name"], "Missing in DF1");
        assert_eq!(v["rows"][0]["platform"], "Fig");
        assert_eq!(v["rows"][0]["node"], "Fig");
    }
}
