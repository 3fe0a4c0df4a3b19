//! Metrics collection and reporting

use railroute_core::RouteType;
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

pub const EVALUATIONS_TOTAL: &str = "evaluations.total";
pub const OUT_OF_SCOPE_TOTAL: &str = "evaluations.out_of_scope";
pub const EVALUATION_DURATION: &str = "evaluation.duration";

/// Counter name for decisions that ended on `route`
pub fn route_counter_name(route: RouteType) -> String {
    format!("route.{}", route)
}

// A panic while holding a metrics lock leaves plain numbers behind; keep using them.
fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(|poisoned| {
        tracing::warn!("metrics lock poisoned, recovering");
        poisoned.into_inner()
    })
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(|poisoned| {
        tracing::warn!("metrics lock poisoned, recovering");
        poisoned.into_inner()
    })
}

/// Counter metric
#[derive(Debug, Clone)]
pub struct Counter {
    name: String,
    value: Arc<RwLock<u64>>,
}

impl Counter {
    pub fn new(name: String) -> Self {
        Self {
            name,
            value: Arc::new(RwLock::new(0)),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn inc(&self) {
        self.add(1);
    }

    pub fn add(&self, value: u64) {
        *write(&self.value) += value;
    }

    pub fn get(&self) -> u64 {
        *read(&self.value)
    }

    pub fn reset(&self) {
        *write(&self.value) = 0;
    }
}

/// Histogram metric for tracking distributions
#[derive(Debug, Clone)]
pub struct Histogram {
    name: String,
    values: Arc<RwLock<Vec<f64>>>,
}

impl Histogram {
    pub fn new(name: String) -> Self {
        Self {
            name,
            values: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn observe(&self, value: f64) {
        write(&self.values).push(value);
    }

    /// Observe a duration in seconds
    pub fn observe_duration(&self, duration: Duration) {
        self.observe(duration.as_secs_f64());
    }

    pub fn count(&self) -> usize {
        read(&self.values).len()
    }

    pub fn sum(&self) -> f64 {
        read(&self.values).iter().sum()
    }

    pub fn avg(&self) -> f64 {
        let values = read(&self.values);
        if values.is_empty() {
            0.0
        } else {
            values.iter().sum::<f64>() / values.len() as f64
        }
    }

    /// Get percentile (0-100)
    pub fn percentile(&self, p: f64) -> f64 {
        let mut values = read(&self.values).clone();
        if values.is_empty() {
            return 0.0;
        }

        values.sort_by(|a, b| a.total_cmp(b));
        let index = ((p / 100.0) * (values.len() - 1) as f64).round() as usize;
        values[index.min(values.len() - 1)]
    }

    pub fn reset(&self) {
        write(&self.values).clear();
    }
}

/// Metrics trait
pub trait Metrics: Send + Sync {
    fn counter(&self, name: &str) -> Arc<Counter>;

    fn histogram(&self, name: &str) -> Arc<Histogram>;

    /// Record one finished evaluation
    fn record_decision(&self, route: RouteType, out_of_scope: bool, duration: Duration);
}

/// In-process metrics collector
#[derive(Debug, Default)]
pub struct MetricsCollector {
    counters: RwLock<BTreeMap<String, Arc<Counter>>>,
    histograms: RwLock<BTreeMap<String, Arc<Histogram>>>,
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn counter_names(&self) -> Vec<String> {
        read(&self.counters).keys().cloned().collect()
    }

    pub fn histogram_names(&self) -> Vec<String> {
        read(&self.histograms).keys().cloned().collect()
    }

    /// Current value of a counter, 0 if it was never touched
    pub fn counter_value(&self, name: &str) -> u64 {
        read(&self.counters).get(name).map(|c| c.get()).unwrap_or(0)
    }

    pub fn reset_all(&self) {
        for counter in read(&self.counters).values() {
            counter.reset();
        }
        for histogram in read(&self.histograms).values() {
            histogram.reset();
        }
    }

    /// Plain-text exposition, one metric per line, sorted by name
    pub fn render_text(&self) -> String {
        let mut out = String::new();

        for (name, counter) in read(&self.counters).iter() {
            let _ = writeln!(out, "{} {}", name, counter.get());
        }
        for (name, histogram) in read(&self.histograms).iter() {
            let _ = writeln!(out, "{}.count {}", name, histogram.count());
            let _ = writeln!(out, "{}.sum {:.9}", name, histogram.sum());
            let _ = writeln!(out, "{}.p50 {:.9}", name, histogram.percentile(50.0));
            let _ = writeln!(out, "{}.p99 {:.9}", name, histogram.percentile(99.0));
        }

        out
    }
}

impl Metrics for MetricsCollector {
    fn counter(&self, name: &str) -> Arc<Counter> {
        write(&self.counters)
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(Counter::new(name.to_string())))
            .clone()
    }

    fn histogram(&self, name: &str) -> Arc<Histogram> {
        write(&self.histograms)
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(Histogram::new(name.to_string())))
            .clone()
    }

    fn record_decision(&self, route: RouteType, out_of_scope: bool, duration: Duration) {
        self.counter(EVALUATIONS_TOTAL).inc();
        self.counter(&route_counter_name(route)).inc();
        if out_of_scope {
            self.counter(OUT_OF_SCOPE_TOTAL).inc();
        }
        self.histogram(EVALUATION_DURATION).observe_duration(duration);
    }
}
