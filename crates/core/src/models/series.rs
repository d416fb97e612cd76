use serde::Serialize;

use super::point::{MetricSet, TimeSeriesPoint};
use super::range::FilterMode;

/// Subset of a source series selected by a resolved range.
///
/// Always a fresh owned sequence; the source series is never touched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilteredSeries<M> {
    points: Vec<TimeSeriesPoint<M>>,
    mode: FilterMode,
    /// Single-point mode only: no point matched and the source's first point was used
    used_fallback: bool,
}

impl<M: MetricSet> FilteredSeries<M> {
    pub fn new(points: Vec<TimeSeriesPoint<M>>, mode: FilterMode, used_fallback: bool) -> Self {
        Self {
            points,
            mode,
            used_fallback,
        }
    }

    pub fn empty(mode: FilterMode) -> Self {
        Self::new(Vec::new(), mode, false)
    }

    pub fn points(&self) -> &[TimeSeriesPoint<M>] {
        &self.points
    }

    pub fn into_points(self) -> Vec<TimeSeriesPoint<M>> {
        self.points
    }

    pub fn mode(&self) -> FilterMode {
        self.mode
    }

    pub fn used_fallback(&self) -> bool {
        self.used_fallback
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TimeSeriesPoint<M>> {
        self.points.iter()
    }

    pub fn last(&self) -> Option<&TimeSeriesPoint<M>> {
        self.points.last()
    }

    /// The point just before the last one, if any.
    pub fn previous(&self) -> Option<&TimeSeriesPoint<M>> {
        self.points.len().checked_sub(2).map(|idx| &self.points[idx])
    }

    /// Values of one metric across the series, in series order.
    pub fn values_of(&self, name: &str) -> Vec<f64> {
        self.points
            .iter()
            .map(|p| p.value(name).unwrap_or(0.0))
            .collect()
    }
}

impl<'a, M> IntoIterator for &'a FilteredSeries<M> {
    type Item = &'a TimeSeriesPoint<M>;
    type IntoIter = std::slice::Iter<'a, TimeSeriesPoint<M>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
