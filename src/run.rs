//! End-to-end reconciliation runs.
//!
//! [`run_reconciliation`] is the main entrypoint: normalize the first
//! dataset, take the second as already canonical, diff the pair-sets in both
//! directions, and display the two reports through the caller's sink. The
//! three stages are strictly sequential; any failure aborts the run before a
//! single report reaches the sink.

use std::fmt;
use std::sync::Arc;

use crate::error::{ReconcileError, ReconcileResult};
use crate::normalize::Normalizer;
use crate::observe::{ReconcileObserver, RunContext, RunStats, Severity};
use crate::reconcile::{reconcile, Reconciliation};
use crate::report::ReportSink;
use crate::types::Dataset;

/// Options controlling a reconciliation run.
///
/// Use [`Default`] for common cases.
#[derive(Clone)]
pub struct ReconcileOptions {
    /// Label of the first dataset, used by observers (default `DF1`).
    pub first_label: String,
    /// Label of the second dataset, used by observers (default `DF2`).
    pub second_label: String,
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn ReconcileObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: Severity,
}

impl fmt::Debug for ReconcileOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReconcileOptions")
            .field("first_label", &self.first_label)
            .field("second_label", &self.second_label)
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for ReconcileOptions {
    fn default() -> Self {
        Self {
            first_label: "DF1".to_string(),
            second_label: "DF2".to_string(),
            observer: None,
            alert_at_or_above: Severity::Critical,
        }
    }
}

/// Run a full reconciliation: Normalizer → Set Reconciler → Reporter.
///
/// The first dataset is normalized through `normalizer`; the second is taken
/// as already canonical. On success the two difference reports are displayed
/// through `sink` under the fixed names `"Missing in DF1"` and
/// `"Missing in DF2"`, in that order.
///
/// When an observer is configured, this function reports:
///
/// - `on_success` on success, with row and difference counts
/// - `on_failure` on failure, with a computed severity
/// - `on_alert` on failure when the severity is >= `options.alert_at_or_above`
///
/// # Examples
///
/// ```rust
/// use inventory_reconcile::lookup::LookupTable;
/// use inventory_reconcile::normalize::Normalizer;
/// use inventory_reconcile::report::CollectingSink;
/// use inventory_reconcile::run::{run_reconciliation, ReconcileOptions};
/// use inventory_reconcile::types::{Dataset, Record};
///
/// # fn main() -> Result<(), inventory_reconcile::ReconcileError> {
/// let platforms: LookupTable = [("A", "Apple")].into_iter().collect();
/// let nodes: LookupTable = [("X", "Xylophone")].into_iter().collect();
/// let normalizer = Normalizer::new(platforms, nodes);
///
/// let raw = Dataset::new(vec![Record::new("A", "X")]);
/// let canonical = Dataset::new(vec![
///     Record::new("Apple", "Xylophone"),
///     Record::new("Fig", "Fig"),
/// ]);
///
/// let sink = CollectingSink::new();
/// let result = run_reconciliation(
///     &raw,
///     &canonical,
///     &normalizer,
///     &sink,
///     &ReconcileOptions::default(),
/// )?;
///
/// assert_eq!(result.missing_in_first.len(), 1);
/// assert_eq!(sink.reports().len(), 2);
/// # Ok(())
/// # }
/// ```
pub fn run_reconciliation(
    first: &Dataset,
    second: &Dataset,
    normalizer: &Normalizer,
    sink: &dyn ReportSink,
    options: &ReconcileOptions,
) -> ReconcileResult<Reconciliation> {
    let ctx = RunContext {
        first_label: options.first_label.clone(),
        second_label: options.second_label.clone(),
    };

    let result = reconcile_inner(first, second, normalizer);

    if let Some(obs) = options.observer.as_ref() {
        match &result {
            Ok(rec) => obs.on_success(
                &ctx,
                RunStats {
                    first_rows: first.row_count(),
                    second_rows: second.row_count(),
                    missing_in_first: rec.missing_in_first.len(),
                    missing_in_second: rec.missing_in_second.len(),
                },
            ),
            Err(e) => {
                let sev = severity_for_error(e);
                obs.on_failure(&ctx, sev, e);
                if sev >= options.alert_at_or_above {
                    obs.on_alert(&ctx, sev, e);
                }
            }
        }
    }

    let reconciliation = result?;
    let (missing_in_first, missing_in_second) = reconciliation.reports();
    sink.display(&missing_in_first);
    sink.display(&missing_in_second);

    Ok(reconciliation)
}

fn reconcile_inner(
    first: &Dataset,
    second: &Dataset,
    normalizer: &Normalizer,
) -> ReconcileResult<Reconciliation> {
    let first_pairs = normalizer.canonicalize_dataset(first)?;
    let second_pairs = second.as_canonical();
    Ok(reconcile(&first_pairs, &second_pairs))
}

fn severity_for_error(e: &ReconcileError) -> Severity {
    match e {
        ReconcileError::Io(_) => Severity::Critical,
        ReconcileError::Csv(err) => match err.kind() {
            ::csv::ErrorKind::Io(_) => Severity::Critical,
            _ => Severity::Error,
        },
        ReconcileError::Json(_) => Severity::Error,
        ReconcileError::MalformedInput { .. } => Severity::Error,
        ReconcileError::MissingMapping { .. } => Severity::Error,
    }
}
