use std::sync::{Arc, Mutex};

use inventory_reconcile::error::ReconcileError;
use inventory_reconcile::lookup::LookupTable;
use inventory_reconcile::normalize::Normalizer;
use inventory_reconcile::observe::{
    FileObserver, ReconcileObserver, RunContext, RunStats, Severity,
};
use inventory_reconcile::report::CollectingSink;
use inventory_reconcile::run::{run_reconciliation, ReconcileOptions};
use inventory_reconcile::types::{Dataset, Record};

#[derive(Default)]
struct RecordingObserver {
    events: Mutex<Vec<String>>,
}

impl RecordingObserver {
    fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

impl ReconcileObserver for RecordingObserver {
    fn on_success(&self, ctx: &RunContext, stats: RunStats) {
        self.events.lock().unwrap().push(format!(
            "success {}/{} missing={}+{}",
            ctx.first_label, ctx.second_label, stats.missing_in_first, stats.missing_in_second
        ));
    }

    fn on_failure(&self, _ctx: &RunContext, severity: Severity, error: &ReconcileError) {
        self.events
            .lock()
            .unwrap()
            .push(format!("failure {severity:?} {error}"));
    }

    fn on_alert(&self, _ctx: &RunContext, severity: Severity, error: &ReconcileError) {
        self.events
            .lock()
            .unwrap()
            .push(format!("alert {severity:?} {error}"));
    }
}

fn fruit_normalizer() -> Normalizer {
    let platforms: LookupTable = [("A", "Apple")].into_iter().collect();
    let nodes: LookupTable = [("X", "Xylophone")].into_iter().collect();
    Normalizer::new(platforms, nodes)
}

#[test]
fn observer_sees_success_with_stats() {
    let observer = Arc::new(RecordingObserver::default());
    let opts = ReconcileOptions {
        observer: Some(observer.clone()),
        ..Default::default()
    };

    let df1 = Dataset::new(vec![Record::new("A", "X")]);
    let df2 = Dataset::new(vec![
        Record::new("Apple", "Xylophone"),
        Record::new("Fig", "Fig"),
    ]);

    let sink = CollectingSink::new();
    run_reconciliation(&df1, &df2, &fruit_normalizer(), &sink, &opts).unwrap();

    assert_eq!(observer.events(), vec!["success DF1/DF2 missing=1+0"]);
}

#[test]
fn failed_run_reports_failure_and_displays_nothing() {
    let observer = Arc::new(RecordingObserver::default());
    let opts = ReconcileOptions {
        observer: Some(observer.clone()),
        ..Default::default()
    };

    // 'B' has no platform mapping, so the run must abort.
    let df1 = Dataset::new(vec![Record::new("A", "X"), Record::new("B", "X")]);
    let df2 = Dataset::new(vec![Record::new("Apple", "Xylophone")]);

    let sink = CollectingSink::new();
    let err = run_reconciliation(&df1, &df2, &fruit_normalizer(), &sink, &opts).unwrap_err();

    assert!(matches!(err, ReconcileError::MissingMapping { .. }));
    // No partial report reached the sink.
    assert!(sink.reports().is_empty());

    let events = observer.events();
    assert_eq!(events.len(), 1);
    assert!(events[0].starts_with("failure Error"));
    assert!(events[0].contains("no mapping for platform code 'B' at row 2"));
}

#[test]
fn alert_fires_when_threshold_lowered() {
    let observer = Arc::new(RecordingObserver::default());
    let opts = ReconcileOptions {
        observer: Some(observer.clone()),
        alert_at_or_above: Severity::Error,
        ..Default::default()
    };

    let df1 = Dataset::new(vec![Record::new("Q", "X")]);
    let df2 = Dataset::new(vec![]);

    let sink = CollectingSink::new();
    let _ = run_reconciliation(&df1, &df2, &fruit_normalizer(), &sink, &opts).unwrap_err();

    let events = observer.events();
    assert_eq!(events.len(), 2);
    assert!(events[0].starts_with("failure Error"));
    assert!(events[1].starts_with("alert Error"));
}

#[test]
fn custom_labels_reach_the_observer() {
    let observer = Arc::new(RecordingObserver::default());
    let opts = ReconcileOptions {
        first_label: "staging".to_string(),
        second_label: "prod".to_string(),
        observer: Some(observer.clone()),
        ..Default::default()
    };

    let df1 = Dataset::new(vec![Record::new("A", "X")]);
    let df2 = Dataset::new(vec![Record::new("Apple", "Xylophone")]);

    let sink = CollectingSink::new();
    run_reconciliation(&df1, &df2, &fruit_normalizer(), &sink, &opts).unwrap();

    assert_eq!(observer.events(), vec!["success staging/prod missing=0+0"]);
}

#[test]
fn file_observer_appends_run_outcomes() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("reconcile.log");

    let opts = ReconcileOptions {
        observer: Some(Arc::new(FileObserver::new(&log_path))),
        ..Default::default()
    };

    let df1 = Dataset::new(vec![Record::new("A", "X")]);
    let df2 = Dataset::new(vec![Record::new("Apple", "Xylophone")]);

    let sink = CollectingSink::new();
    run_reconciliation(&df1, &df2, &fruit_normalizer(), &sink, &opts).unwrap();

    let contents = std::fs::read_to_string(&log_path).unwrap();
    assert!(contents.contains("ok DF1=1 DF2=1 missing=0+0"));
}
