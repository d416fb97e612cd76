use crate::models::point::{MetricSet, TimeSeriesPoint};

use super::traits::SeriesProvider;

/// Serves a fixed, caller-supplied series.
#[derive(Debug, Clone)]
pub struct StaticSeriesProvider<M> {
    name: String,
    points: Vec<TimeSeriesPoint<M>>,
}

impl<M: MetricSet> StaticSeriesProvider<M> {
    pub fn new(name: impl Into<String>, points: Vec<TimeSeriesPoint<M>>) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl<M: MetricSet> SeriesProvider<M> for StaticSeriesProvider<M> {
    fn name(&self) -> &str {
        &self.name
    }

    fn series(&self) -> Vec<TimeSeriesPoint<M>> {
        self.points.clone()
    }
}
