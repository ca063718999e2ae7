//! Observer hooks for reconciliation runs.
//!
//! Implementors can record metrics, logs, or trigger alerts; the run itself
//! stays silent otherwise.

use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::ReconcileError;

/// Severity classification used for observer callbacks and alert thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Informational event.
    Info,
    /// Warning-level event (non-fatal).
    Warning,
    /// Error-level event (run failed).
    Error,
    /// Critical error (typically I/O failures).
    Critical,
}

/// Context about a reconciliation run.
#[derive(Debug, Clone)]
pub struct RunContext {
    /// Label of the first dataset (default `DF1`).
    pub first_label: String,
    /// Label of the second dataset (default `DF2`).
    pub second_label: String,
}

/// Minimal stats reported on a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    /// Rows in the first dataset.
    pub first_rows: usize,
    /// Rows in the second dataset.
    pub second_rows: usize,
    /// Distinct pairs absent from the first dataset.
    pub missing_in_first: usize,
    /// Distinct pairs absent from the second dataset.
    pub missing_in_second: usize,
}

/// Observer interface for run outcomes.
pub trait ReconcileObserver: Send + Sync {
    /// Called when a run succeeds, after reports have been displayed.
    fn on_success(&self, _ctx: &RunContext, _stats: RunStats) {}

    /// Called when a run fails.
    fn on_failure(&self, _ctx: &RunContext, _severity: Severity, _error: &ReconcileError) {}

    /// Called when a failure meets the alert threshold.
    ///
    /// Default behavior forwards to [`Self::on_failure`].
    fn on_alert(&self, ctx: &RunContext, severity: Severity, error: &ReconcileError) {
        self.on_failure(ctx, severity, error)
    }
}

/// An observer that fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn ReconcileObserver>>,
}

impl CompositeObserver {
    /// Create a new composite observer from a list of observers.
    pub fn new(observers: Vec<Arc<dyn ReconcileObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl ReconcileObserver for CompositeObserver {
    fn on_success(&self, ctx: &RunContext, stats: RunStats) {
        for o in &self.observers {
            o.on_success(ctx, stats);
        }
    }

    fn on_failure(&self, ctx: &RunContext, severity: Severity, error: &ReconcileError) {
        for o in &self.observers {
            o.on_failure(ctx, severity, error);
        }
    }

    fn on_alert(&self, ctx: &RunContext, severity: Severity, error: &ReconcileError) {
        for o in &self.observers {
            o.on_alert(ctx, severity, error);
        }
    }
}

/// Logs run events to stderr.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl ReconcileObserver for StdErrObserver {
    fn on_success(&self, ctx: &RunContext, stats: RunStats) {
        eprintln!(
            "[reconcile][ok] {}={} rows, {}={} rows, missing_in_{}={}, missing_in_{}={}",
            ctx.first_label,
            stats.first_rows,
            ctx.second_label,
            stats.second_rows,
            ctx.first_label,
            stats.missing_in_first,
            ctx.second_label,
            stats.missing_in_second
        );
    }

    fn on_failure(&self, ctx: &RunContext, severity: Severity, error: &ReconcileError) {
        eprintln!(
            "[reconcile][{:?}] {} vs {}: {}",
            severity, ctx.first_label, ctx.second_label, error
        );
    }

    fn on_alert(&self, ctx: &RunContext, severity: Severity, error: &ReconcileError) {
        eprintln!(
            "[ALERT][reconcile][{:?}] {} vs {}: {}",
            severity, ctx.first_label, ctx.second_label, error
        );
    }
}

/// Appends run events to a local log file.
#[derive(Debug)]
pub struct FileObserver {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileObserver {
    /// Create a file observer that appends events to `path`.
    ///
    /// Writes are best-effort; failures to open/write the log file are ignored.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    fn append_line(&self, line: &str) {
        let _guard = self.lock.lock().ok();
        if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(&self.path) {
            let _ = writeln!(f, "{line}");
        }
    }
}

impl ReconcileObserver for FileObserver {
    fn on_success(&self, ctx: &RunContext, stats: RunStats) {
        self.append_line(&format!(
            "{} ok {}={} {}={} missing={}+{}",
            unix_ts(),
            ctx.first_label,
            stats.first_rows,
            ctx.second_label,
            stats.second_rows,
            stats.missing_in_first,
            stats.missing_in_second
        ));
    }

    fn on_failure(&self, ctx: &RunContext, severity: Severity, error: &ReconcileError) {
        self.append_line(&format!(
            "{} fail severity={:?} {} vs {} err={}",
            unix_ts(),
            severity,
            ctx.first_label,
            ctx.second_label,
            error
        ));
    }

    fn on_alert(&self, ctx: &RunContext, severity: Severity, error: &ReconcileError) {
        self.append_line(&format!(
            "{} ALERT severity={:?} {} vs {} err={}",
            unix_ts(),
            severity,
            ctx.first_label,
            ctx.second_label,
            error
        ));
    }
}

fn unix_ts() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
