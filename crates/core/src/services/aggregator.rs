use serde::Serialize;
use tracing::debug;

use crate::models::analytics::{
    BalancePart, BalanceSnapshot, MetricTotal, MetricTotals, OrdersSnapshot, RevenueSnapshot,
};
use crate::models::point::{BalanceMetrics, MetricSet, OrderMetrics, RevenueMetrics};
use crate::models::series::FilteredSeries;

/// Reduces filtered series into display metrics.
///
/// Every function is total: empty input gives zeros, zero denominators
/// give `0` (or the documented substitution), never `NaN` or `Infinity`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Aggregator;

impl Aggregator {
    pub fn new() -> Self {
        Self
    }

    /// Sum every metric of the family across the series.
    pub fn totals<M: MetricSet>(&self, series: &FilteredSeries<M>) -> MetricTotals {
        let mut sums = vec![0.0; M::NAMES.len()];
        for point in series {
            for (sum, value) in sums.iter_mut().zip(point.metrics.values()) {
                *sum += value;
            }
        }
        MetricTotals {
            count: series.len(),
            entries: M::NAMES
                .iter()
                .zip(sums)
                .map(|(name, total)| MetricTotal {
                    name: (*name).to_string(),
                    total,
                })
                .collect(),
        }
    }

    /// Mean per point, rounded; the count is floored at 1.
    pub fn average(&self, total: f64, count: usize) -> f64 {
        round_half_up(total / count.max(1) as f64)
    }

    /// `round(100 * completed / (completed + pending + canceled))`, 0 without orders.
    pub fn completion_rate(&self, completed: f64, pending: f64, canceled: f64) -> i64 {
        let all = completed + pending + canceled;
        if all == 0.0 {
            return 0;
        }
        round_half_up(100.0 * completed / all) as i64
    }

    /// Percentage change of the last point over the one before it.
    ///
    /// Fewer than two points gives 0. A previous value of 0 is replaced by 1
    /// as the denominator.
    pub fn growth_rate<M: MetricSet>(&self, series: &FilteredSeries<M>, metric: &str) -> i64 {
        let (Some(last), Some(previous)) = (series.last(), series.previous()) else {
            return 0;
        };
        let last = last.value(metric).unwrap_or(0.0);
        let previous = previous.value(metric).unwrap_or(0.0);
        let denominator = if previous == 0.0 { 1.0 } else { previous };
        round_half_up(100.0 * (last - previous) / denominator) as i64
    }

    /// Report the single resolved point's metrics directly, plus their sum
    /// and each part's share of it.
    pub fn distribution<M: MetricSet>(&self, series: &FilteredSeries<M>) -> BalanceSnapshot {
        let point = series.last();
        let values = point
            .map(|p| p.metrics.values())
            .unwrap_or_else(|| vec![0.0; M::NAMES.len()]);
        let total: f64 = values.iter().sum();

        let parts = M::NAMES
            .iter()
            .zip(M::LABELS)
            .zip(values)
            .map(|((name, label), value)| BalancePart {
                name: (*name).to_string(),
                label: (*label).to_string(),
                value,
                share_pct: if total == 0.0 { 0.0 } else { 100.0 * value / total },
            })
            .collect();

        BalanceSnapshot {
            as_of: point.map(|p| p.timestamp),
            total,
            parts,
        }
    }
}

/// Half-up rounding (`floor(x + 0.5)`), so -2.5 rounds to -2.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

// ═══════════════════════════════════════════════════════════════════
// Per-family snapshots
// ═══════════════════════════════════════════════════════════════════

/// A metric family that knows which card numbers to derive from its series.
pub trait Summarize: MetricSet {
    type Snapshot: Clone + std::fmt::Debug + PartialEq + Default + Serialize;

    fn summarize(aggregator: &Aggregator, series: &FilteredSeries<Self>) -> Self::Snapshot;
}

impl Summarize for BalanceMetrics {
    type Snapshot = BalanceSnapshot;

    fn summarize(aggregator: &Aggregator, series: &FilteredSeries<Self>) -> BalanceSnapshot {
        let snapshot = aggregator.distribution(series);
        debug!(total = snapshot.total, as_of = ?snapshot.as_of, "balance snapshot");
        snapshot
    }
}

impl Summarize for OrderMetrics {
    type Snapshot = OrdersSnapshot;

    fn summarize(aggregator: &Aggregator, series: &FilteredSeries<Self>) -> OrdersSnapshot {
        let totals = aggregator.totals(series);
        let completed = totals.get("completed");
        let pending = totals.get("pending");
        let canceled = totals.get("canceled");
        let snapshot = OrdersSnapshot {
            completed,
            pending,
            canceled,
            total_orders: completed + pending + canceled,
            completion_rate: aggregator.completion_rate(completed, pending, canceled),
        };
        debug!(
            total_orders = snapshot.total_orders,
            completion_rate = snapshot.completion_rate,
            "orders snapshot"
        );
        snapshot
    }
}

impl Summarize for RevenueMetrics {
    type Snapshot = RevenueSnapshot;

    fn summarize(aggregator: &Aggregator, series: &FilteredSeries<Self>) -> RevenueSnapshot {
        let totals = aggregator.totals(series);
        let total = totals.get("revenue");
        let snapshot = RevenueSnapshot {
            total,
            average: aggregator.average(total, totals.count),
            growth_rate: aggregator.growth_rate(series, "revenue"),
            periods: totals.count,
        };
        debug!(
            total = snapshot.total,
            growth_rate = snapshot.growth_rate,
            "revenue snapshot"
        );
        snapshot
    }
}
