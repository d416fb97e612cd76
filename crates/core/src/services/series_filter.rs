use tracing::debug;

use crate::models::point::{MetricSet, TimeSeriesPoint};
use crate::models::range::{FilterMode, ResolvedRange};
use crate::models::series::FilteredSeries;

/// Applies a resolved range to a full series.
///
/// Two consumption modes:
/// - **MultiPoint** (flow metrics): every matching point, source order kept.
/// - **SinglePoint** (snapshot metrics): the last matching point in
///   iteration order, or the source's first point when nothing matches.
///
/// Input is not assumed sorted. On unsorted input "last" means last in
/// iteration order; sort by timestamp first if "most recent" matters.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeriesFilter;

impl SeriesFilter {
    pub fn new() -> Self {
        Self
    }

    pub fn filter<M: MetricSet>(
        &self,
        series: &[TimeSeriesPoint<M>],
        resolved: &ResolvedRange,
    ) -> FilteredSeries<M> {
        let filtered = match resolved.mode {
            FilterMode::MultiPoint => {
                let points: Vec<TimeSeriesPoint<M>> = series
                    .iter()
                    .filter(|p| resolved.matches(p.timestamp))
                    .cloned()
                    .collect();
                FilteredSeries::new(points, FilterMode::MultiPoint, false)
            }
            FilterMode::SinglePoint => Self::single_point(series, resolved),
        };

        debug!(
            source_len = series.len(),
            result_len = filtered.len(),
            mode = ?resolved.mode,
            used_fallback = filtered.used_fallback(),
            "filtered series"
        );
        filtered
    }

    fn single_point<M: MetricSet>(
        series: &[TimeSeriesPoint<M>],
        resolved: &ResolvedRange,
    ) -> FilteredSeries<M> {
        if let Some(point) = series.iter().rev().find(|p| resolved.matches(p.timestamp)) {
            return FilteredSeries::new(vec![point.clone()], FilterMode::SinglePoint, false);
        }
        match series.first() {
            Some(first) => FilteredSeries::new(vec![first.clone()], FilterMode::SinglePoint, true),
            None => FilteredSeries::empty(FilterMode::SinglePoint),
        }
    }
}
