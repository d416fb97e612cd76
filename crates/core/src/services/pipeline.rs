use chrono::NaiveDateTime;
use tracing::debug;

use crate::models::chart::WidgetView;
use crate::models::range::RangeSelection;
use crate::providers::traits::SeriesProvider;
use crate::services::aggregator::{Aggregator, Summarize};
use crate::services::range_resolver::RangeResolver;
use crate::services::series_filter::SeriesFilter;

/// One widget's resolve → filter → aggregate chain.
///
/// Generic over the metric family, so balance, orders and revenue share a
/// single implementation and cannot drift apart. Holds no state between
/// runs: the same provider data, selection and reference instant always
/// produce the same view.
pub struct MetricPipeline<M: Summarize> {
    provider: Box<dyn SeriesProvider<M>>,
    resolver: RangeResolver,
    filter: SeriesFilter,
    aggregator: Aggregator,
}

impl<M: Summarize> std::fmt::Debug for MetricPipeline<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetricPipeline")
            .field("provider", &self.provider.name())
            .field("metrics", &M::NAMES)
            .finish()
    }
}

impl<M: Summarize> MetricPipeline<M> {
    pub fn new(provider: Box<dyn SeriesProvider<M>>) -> Self {
        Self {
            provider,
            resolver: RangeResolver::new(),
            filter: SeriesFilter::new(),
            aggregator: Aggregator::new(),
        }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Run the whole chain for one render pass.
    pub fn run(
        &self,
        selection: &RangeSelection,
        reference: NaiveDateTime,
    ) -> WidgetView<M, M::Snapshot> {
        let series = self.provider.series();
        let resolved = self
            .resolver
            .resolve(selection, reference, M::KIND.filter_mode());
        let filtered = self.filter.filter(&series, &resolved);
        let snapshot = M::summarize(&self.aggregator, &filtered);

        debug!(
            provider = self.provider.name(),
            points = filtered.len(),
            "pipeline run complete"
        );

        WidgetView {
            has_data: !filtered.is_empty(),
            series: filtered,
            snapshot,
        }
    }
}
