use crate::models::point::{MetricSet, TimeSeriesPoint};

/// Trait abstraction for every source of dashboard time series.
///
/// The engine never knows where points come from: synthetic sample data,
/// a fixed in-memory vector, or a future API client all implement this.
/// Points may be returned in any order.
pub trait SeriesProvider<M: MetricSet> {
    /// Human-readable name of this provider (for logs).
    fn name(&self) -> &str;

    /// The full historical series for this metric family.
    fn series(&self) -> Vec<TimeSeriesPoint<M>>;
}
