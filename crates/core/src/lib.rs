pub mod errors;
pub mod models;
pub mod providers;
pub mod services;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use models::{
    chart::DashboardView,
    point::{BalanceMetrics, OrderMetrics, RevenueMetrics},
    range::{RangeSelection, TimeRangePreset},
    settings::Settings,
};
use providers::{sample::SampleDataProvider, traits::SeriesProvider};
use services::{pipeline::MetricPipeline, selector::TimeRangeSelector};
use tracing::info;

use errors::CoreError;

/// Main entry point for the storefront dashboard core library.
///
/// Owns the range selection for the session and one pipeline per widget.
/// Every selection change replaces the selection wholesale and recomputes
/// all three widgets against the same reference instant.
#[must_use]
pub struct StorefrontDashboard {
    settings: Settings,
    selector: TimeRangeSelector,
    selection: RangeSelection,
    balance: MetricPipeline<BalanceMetrics>,
    orders: MetricPipeline<OrderMetrics>,
    revenue: MetricPipeline<RevenueMetrics>,
}

impl std::fmt::Debug for StorefrontDashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorefrontDashboard")
            .field("selection", &self.selection)
            .field("balance", &self.balance.provider_name())
            .field("orders", &self.orders.provider_name())
            .field("revenue", &self.revenue.provider_name())
            .finish()
    }
}

impl StorefrontDashboard {
    /// Build a dashboard over any three data sources.
    pub fn new(
        settings: Settings,
        balance: Box<dyn SeriesProvider<BalanceMetrics>>,
        orders: Box<dyn SeriesProvider<OrderMetrics>>,
        revenue: Box<dyn SeriesProvider<RevenueMetrics>>,
    ) -> Self {
        let selector = TimeRangeSelector::new(&settings);
        let selection = selector.current();
        Self {
            settings,
            selector,
            selection,
            balance: MetricPipeline::new(balance),
            orders: MetricPipeline::new(orders),
            revenue: MetricPipeline::new(revenue),
        }
    }

    /// Dashboard backed by the built-in sample data, anchored at `anchor`.
    pub fn with_sample_data(settings: Settings, anchor: NaiveDate) -> Self {
        let sample = SampleDataProvider::new(anchor);
        Self::new(settings, Box::new(sample), Box::new(sample), Box::new(sample))
    }

    /// Build from a JSON settings document.
    pub fn from_settings_json(
        json: &str,
        balance: Box<dyn SeriesProvider<BalanceMetrics>>,
        orders: Box<dyn SeriesProvider<OrderMetrics>>,
        revenue: Box<dyn SeriesProvider<RevenueMetrics>>,
    ) -> Result<Self, CoreError> {
        let settings = Settings::from_json(json)?;
        Ok(Self::new(settings, balance, orders, revenue))
    }

    // ── State ───────────────────────────────────────────────────────

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub fn selector(&self) -> &TimeRangeSelector {
        &self.selector
    }

    /// The selection every widget is currently computed against.
    #[must_use]
    pub fn selection(&self) -> RangeSelection {
        self.selection
    }

    /// Replace the selection wholesale (e.g. one emitted by an external control).
    pub fn apply_selection(&mut self, selection: RangeSelection) {
        info!(
            preset = %selection.preset,
            custom_range = ?selection.custom_range,
            "applying time range selection"
        );
        self.selection = selection;
    }

    // ── Rendering ───────────────────────────────────────────────────

    /// Recompute all widgets against `reference`.
    #[must_use]
    pub fn render(&self, reference: NaiveDateTime) -> DashboardView {
        DashboardView {
            selection: self.selection,
            reference,
            range_label: self.selection.label(),
            balance: self.balance.run(&self.selection, reference),
            orders: self.orders.run(&self.selection, reference),
            revenue: self.revenue.run(&self.selection, reference),
        }
    }

    /// Recompute all widgets against the local wall clock.
    #[must_use]
    pub fn render_now(&self) -> DashboardView {
        self.render(chrono::Local::now().naive_local())
    }

    // ── Selector Transitions ────────────────────────────────────────

    /// Pick a preset (or "custom") and recompute.
    pub fn select_preset(
        &mut self,
        preset: TimeRangePreset,
        reference: NaiveDateTime,
    ) -> DashboardView {
        let selection = self.selector.select_preset(preset);
        self.apply_selection(selection);
        self.render(reference)
    }

    /// Pick a preset by its wire tag. Unknown tags select everything.
    pub fn select_preset_tag(&mut self, tag: &str, reference: NaiveDateTime) -> DashboardView {
        self.select_preset(TimeRangePreset::parse_lenient(tag), reference)
    }

    /// Feed a date-picker selection and recompute.
    /// A partial pick leaves the applied selection unchanged.
    pub fn select_dates(
        &mut self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
        reference: NaiveDateTime,
    ) -> DashboardView {
        if let Some(selection) = self.selector.select_dates(from, to) {
            self.apply_selection(selection);
        }
        self.render(reference)
    }

    /// Adjust the custom `from` time of day and recompute.
    pub fn set_from_time(
        &mut self,
        time: NaiveTime,
        reference: NaiveDateTime,
    ) -> Result<DashboardView, CoreError> {
        if let Some(selection) = self.selector.set_from_time(time)? {
            self.apply_selection(selection);
        }
        Ok(self.render(reference))
    }

    /// Adjust the custom `to` time of day and recompute.
    pub fn set_to_time(
        &mut self,
        time: NaiveTime,
        reference: NaiveDateTime,
    ) -> Result<DashboardView, CoreError> {
        if let Some(selection) = self.selector.set_to_time(time)? {
            self.apply_selection(selection);
        }
        Ok(self.render(reference))
    }
}
