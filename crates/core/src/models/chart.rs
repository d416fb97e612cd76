use chrono::NaiveDateTime;
use serde::Serialize;

use super::analytics::{BalanceSnapshot, OrdersSnapshot, RevenueSnapshot};
use super::point::{BalanceMetrics, OrderMetrics, RevenueMetrics};
use super::range::RangeSelection;
use super::series::FilteredSeries;

/// Everything one widget needs for a render pass.
///
/// The core computes all the numbers; the renderer only draws them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WidgetView<M, S> {
    /// Chart-ready points for the selected window
    pub series: FilteredSeries<M>,

    /// Card scalars derived from `series`
    pub snapshot: S,

    /// `false` when the window selected nothing; render the
    /// "no data for selected period" placeholder
    pub has_data: bool,
}

pub type BalanceView = WidgetView<BalanceMetrics, BalanceSnapshot>;
pub type OrdersView = WidgetView<OrderMetrics, OrdersSnapshot>;
pub type RevenueView = WidgetView<RevenueMetrics, RevenueSnapshot>;

/// All three widgets computed against the same selection and reference instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub selection: RangeSelection,

    /// The "now" every preset was resolved against
    pub reference: NaiveDateTime,

    /// Selector button text
    pub range_label: String,

    pub balance: BalanceView,
    pub orders: OrdersView,
    pub revenue: RevenueView,
}
