use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Per-metric sums over a filtered series.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MetricTotals {
    /// Number of points that were summed
    pub count: usize,

    /// One entry per metric name, in the family's display order
    pub entries: Vec<MetricTotal>,
}

/// Sum of a single named metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricTotal {
    pub name: String,
    pub total: f64,
}

impl MetricTotals {
    /// Total for `name`, or `0.0` if the metric is unknown.
    pub fn get(&self, name: &str) -> f64 {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.total)
            .unwrap_or(0.0)
    }

    /// Sum across all metric names.
    pub fn grand_total(&self) -> f64 {
        self.entries.iter().map(|e| e.total).sum()
    }
}

/// Balance widget numbers: the resolved point's parts and their total.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BalanceSnapshot {
    /// Timestamp of the observation reported, `None` for an empty source
    pub as_of: Option<NaiveDateTime>,

    /// Available + pending + reserved
    pub total: f64,

    /// Pie slices, in display order
    pub parts: Vec<BalancePart>,
}

/// One slice of the balance distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalancePart {
    /// Metric name (e.g. "available")
    pub name: String,

    /// Display label (e.g. "Available")
    pub label: String,

    pub value: f64,

    /// Share of the total balance, 0–100 (0 when the total is 0)
    pub share_pct: f64,
}

impl BalanceSnapshot {
    pub fn part(&self, name: &str) -> Option<&BalancePart> {
        self.parts.iter().find(|p| p.name == name)
    }
}

/// Orders widget numbers.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OrdersSnapshot {
    pub completed: f64,
    pub pending: f64,
    pub canceled: f64,

    /// completed + pending + canceled
    pub total_orders: f64,

    /// Rounded percentage of completed orders; 0 when there are no orders
    pub completion_rate: i64,
}

/// Revenue widget numbers.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RevenueSnapshot {
    pub total: f64,

    /// Rounded mean revenue per period (0 for an empty series)
    pub average: f64,

    /// Rounded percentage change of the last period over the one before it
    pub growth_rate: i64,

    /// Number of periods aggregated
    pub periods: usize,
}
