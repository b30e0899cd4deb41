//! In-process HTTP metrics rendered in Prometheus text format.
//!
//! Labels are flattened into sorted key vectors so rendering order is
//! deterministic for a given label set. Durations are accumulated in
//! microseconds and rendered in seconds.

use std::fmt::Write;
use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};
use std::time::Duration;

use dashmap::DashMap;

type LabelKey = Vec<(String, String)>;

fn label_key(labels: &[(&str, &str)]) -> LabelKey {
    let mut key: LabelKey = labels
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    key.sort();
    key
}

fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

fn format_labels(key: &LabelKey) -> String {
    key.iter()
        .map(|(k, v)| format!("{}=\"{}\"", k, escape_label(v)))
        .collect::<Vec<_>>()
        .join(",")
}

fn micros_as_seconds(micros: u64) -> String {
    format!("{}.{:06}", micros / 1_000_000, micros % 1_000_000)
}

#[derive(Default)]
pub struct CounterVec {
    map: DashMap<LabelKey, AtomicU64>,
}

impl CounterVec {
    pub fn inc(&self, labels: &[(&str, &str)]) {
        self.map
            .entry(label_key(labels))
            .or_insert_with(|| AtomicU64::new(0))
            .fetch_add(1, Ordering::Relaxed);
    }

    /// Current value for a label set (0 when never incremented).
    pub fn get(&self, labels: &[(&str, &str)]) -> u64 {
        self.map
            .get(&label_key(labels))
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    fn render(&self, name: &str, help: &str, out: &mut String) {
        let _ = writeln!(out, "# HELP {} {}", name, help);
        let _ = writeln!(out, "# TYPE {} counter", name);
        for r in self.map.iter() {
            let _ = writeln!(
                out,
                "{}{{{}}} {}",
                name,
                format_labels(r.key()),
                r.value().load(Ordering::Relaxed)
            );
        }
    }
}

#[derive(Default)]
pub struct GaugeVec {
    map: DashMap<LabelKey, AtomicI64>,
}

impl GaugeVec {
    pub fn inc(&self, labels: &[(&str, &str)]) {
        self.add(labels, 1);
    }

    pub fn dec(&self, labels: &[(&str, &str)]) {
        self.add(labels, -1);
    }

    fn add(&self, labels: &[(&str, &str)], v: i64) {
        self.map
            .entry(label_key(labels))
            .or_insert_with(|| AtomicI64::new(0))
            .fetch_add(v, Ordering::Relaxed);
    }

    pub fn get(&self, labels: &[(&str, &str)]) -> i64 {
        self.map
            .get(&label_key(labels))
            .map(|g| g.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    fn render(&self, name: &str, help: &str, out: &mut String) {
        let _ = writeln!(out, "# HELP {} {}", name, help);
        let _ = writeln!(out, "# TYPE {} gauge", name);
        for r in self.map.iter() {
            let _ = writeln!(
                out,
                "{}{{{}}} {}",
                name,
                format_labels(r.key()),
                r.value().load(Ordering::Relaxed)
            );
        }
    }
}

#[derive(Default)]
struct DurationTotals {
    count: AtomicU64,
    sum_micros: AtomicU64,
}

/// Duration summary (sum and count) per label set.
#[derive(Default)]
pub struct SummaryVec {
    map: DashMap<LabelKey, DurationTotals>,
}

impl SummaryVec {
    pub fn observe(&self, labels: &[(&str, &str)], duration: Duration) {
        let micros = u64::try_from(duration.as_micros()).unwrap_or(u64::MAX);
        let totals = self
            .map
            .entry(label_key(labels))
            .or_insert_with(DurationTotals::default);
        totals.count.fetch_add(1, Ordering::Relaxed);
        totals.sum_micros.fetch_add(micros, Ordering::Relaxed);
    }

    fn render(&self, name: &str, help: &str, out: &mut String) {
        let _ = writeln!(out, "# HELP {} {}", name, help);
        let _ = writeln!(out, "# TYPE {} summary", name);
        for r in self.map.iter() {
            let labels = format_labels(r.key());
            let totals = r.value();
            let _ = writeln!(
                out,
                "{}_sum{{{}}} {}",
                name,
                labels,
                micros_as_seconds(totals.sum_micros.load(Ordering::Relaxed))
            );
            let _ = writeln!(
                out,
                "{}_count{{{}}} {}",
                name,
                labels,
                totals.count.load(Ordering::Relaxed)
            );
        }
    }
}

/// Request metrics recorded by the HTTP middleware.
#[derive(Default)]
pub struct Metrics {
    pub requests_total: CounterVec,
    pub requests_inprogress: GaugeVec,
    pub request_duration: SummaryVec,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render every metric in Prometheus text exposition format.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.requests_total.render(
            "http_requests_total",
            "Total number of requests by method, handler and status.",
            &mut out,
        );
        self.requests_inprogress.render(
            "http_requests_inprogress",
            "Number of requests currently being served.",
            &mut out,
        );
        self.request_duration.render(
            "http_request_duration_seconds",
            "Request latency by method and handler.",
            &mut out,
        );
        out
    }
}
