use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use super::range::FilterMode;

/// How a metric family behaves across a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetricKind {
    /// Summable over a period (revenue, order counts).
    Flow,
    /// Only meaningful at a single point in time (account balance).
    Snapshot,
}

impl MetricKind {
    /// Filter mode a series of this kind is consumed with.
    pub fn filter_mode(self) -> FilterMode {
        match self {
            MetricKind::Flow => FilterMode::MultiPoint,
            MetricKind::Snapshot => FilterMode::SinglePoint,
        }
    }
}

/// A fixed set of named numeric metrics carried by every point of one series.
///
/// The range engine is generic over this trait, so balance, orders and
/// revenue all flow through the same resolve → filter → aggregate code.
pub trait MetricSet: Clone + std::fmt::Debug + PartialEq {
    /// Metric names, in display order.
    const NAMES: &'static [&'static str];

    /// Human-readable labels, parallel to `NAMES`.
    const LABELS: &'static [&'static str];

    /// Whether the family is a flow or a snapshot metric.
    const KIND: MetricKind;

    /// Metric values, parallel to `NAMES`.
    fn values(&self) -> Vec<f64>;

    /// Look up a single metric by name.
    fn get(&self, name: &str) -> Option<f64> {
        let idx = Self::NAMES.iter().position(|n| *n == name)?;
        self.values().get(idx).copied()
    }
}

/// A timestamped observation of one metric family.
///
/// Serializes flat (`{"timestamp": ..., "revenue": 300.0}`) so chart
/// renderers can key directly on metric names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint<M> {
    /// When the observation was taken (day granularity or finer)
    pub timestamp: NaiveDateTime,

    /// The named metric values
    #[serde(flatten)]
    pub metrics: M,
}

impl<M: MetricSet> TimeSeriesPoint<M> {
    pub fn new(timestamp: NaiveDateTime, metrics: M) -> Self {
        Self { timestamp, metrics }
    }

    /// Daily-granularity point, stamped at midnight.
    pub fn on_date(date: NaiveDate, metrics: M) -> Self {
        Self::new(date.and_time(NaiveTime::MIN), metrics)
    }

    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    pub fn value(&self, name: &str) -> Option<f64> {
        self.metrics.get(name)
    }
}

// ── Metric families ─────────────────────────────────────────────────

/// Account balance split (snapshot metric).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BalanceMetrics {
    pub available: f64,
    pub pending: f64,
    pub reserved: f64,
}

impl BalanceMetrics {
    pub fn new(available: f64, pending: f64, reserved: f64) -> Self {
        Self {
            available,
            pending,
            reserved,
        }
    }
}

impl MetricSet for BalanceMetrics {
    const NAMES: &'static [&'static str] = &["available", "pending", "reserved"];
    const LABELS: &'static [&'static str] = &["Available", "Pending", "Reserved"];
    const KIND: MetricKind = MetricKind::Snapshot;

    fn values(&self) -> Vec<f64> {
        vec![self.available, self.pending, self.reserved]
    }
}

/// Order counts by status for one period (flow metric).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct OrderMetrics {
    pub completed: f64,
    pub pending: f64,
    pub canceled: f64,
}

impl OrderMetrics {
    pub fn new(completed: f64, pending: f64, canceled: f64) -> Self {
        Self {
            completed,
            pending,
            canceled,
        }
    }
}

impl MetricSet for OrderMetrics {
    const NAMES: &'static [&'static str] = &["completed", "pending", "canceled"];
    const LABELS: &'static [&'static str] = &["Completed", "Pending", "Canceled"];
    const KIND: MetricKind = MetricKind::Flow;

    fn values(&self) -> Vec<f64> {
        vec![self.completed, self.pending, self.canceled]
    }
}

/// Revenue earned in one period (flow metric).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RevenueMetrics {
    pub revenue: f64,
}

impl RevenueMetrics {
    pub fn new(revenue: f64) -> Self {
        Self { revenue }
    }
}

impl MetricSet for RevenueMetrics {
    const NAMES: &'static [&'static str] = &["revenue"];
    const LABELS: &'static [&'static str] = &["Revenue"];
    const KIND: MetricKind = MetricKind::Flow;

    fn values(&self) -> Vec<f64> {
        vec![self.revenue]
    }
}
