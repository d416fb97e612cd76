pub mod aggregator;
pub mod pipeline;
pub mod range_resolver;
pub mod selector;
pub mod series_filter;
