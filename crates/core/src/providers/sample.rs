use chrono::{Months, NaiveDate};

use crate::models::point::{
    BalanceMetrics, MetricSet, OrderMetrics, RevenueMetrics, TimeSeriesPoint,
};

use super::traits::SeriesProvider;

/// Monthly revenue, oldest first. The last entry lands on the anchor date.
const MONTHLY_REVENUE: [f64; 12] = [
    4000.0, 3000.0, 5000.0, 2780.0, 1890.0, 2390.0, 3490.0, 4000.0, 6000.0, 7000.0, 5500.0,
    8000.0,
];

/// Monthly (completed, pending, canceled) order counts, oldest first.
const MONTHLY_ORDERS: [(f64, f64, f64); 8] = [
    (40.0, 24.0, 6.0),
    (30.0, 13.0, 5.0),
    (50.0, 22.0, 8.0),
    (27.0, 11.0, 4.0),
    (18.0, 9.0, 3.0),
    (23.0, 15.0, 2.0),
    (34.0, 18.0, 5.0),
    (50.0, 30.0, 10.0),
];

/// Current (available, pending, reserved) balance.
const CURRENT_BALANCE: (f64, f64, f64) = (15000.0, 3500.0, 2000.0);

/// Synthetic storefront data anchored at a fixed date.
///
/// Stands in for a real backend. Monthly series step back one calendar
/// month per entry from the anchor, so the newest point is always "today"
/// when anchored at the reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleDataProvider {
    anchor: NaiveDate,
}

impl SampleDataProvider {
    pub fn new(anchor: NaiveDate) -> Self {
        Self { anchor }
    }

    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    /// Lay `values` out one month apart, the last one on the anchor date.
    /// Dates chrono cannot represent are skipped.
    fn monthly<M: MetricSet>(&self, values: impl ExactSizeIterator<Item = M>) -> Vec<TimeSeriesPoint<M>> {
        let newest = values.len().saturating_sub(1);
        values
            .enumerate()
            .filter_map(|(i, metrics)| {
                let back = u32::try_from(newest - i).ok()?;
                let date = self.anchor.checked_sub_months(Months::new(back))?;
                Some(TimeSeriesPoint::on_date(date, metrics))
            })
            .collect()
    }
}

impl SeriesProvider<RevenueMetrics> for SampleDataProvider {
    fn name(&self) -> &str {
        "sample-revenue"
    }

    fn series(&self) -> Vec<TimeSeriesPoint<RevenueMetrics>> {
        self.monthly(MONTHLY_REVENUE.into_iter().map(RevenueMetrics::new))
    }
}

impl SeriesProvider<OrderMetrics> for SampleDataProvider {
    fn name(&self) -> &str {
        "sample-orders"
    }

    fn series(&self) -> Vec<TimeSeriesPoint<OrderMetrics>> {
        self.monthly(
            MONTHLY_ORDERS
                .into_iter()
                .map(|(completed, pending, canceled)| OrderMetrics::new(completed, pending, canceled)),
        )
    }
}

impl SeriesProvider<BalanceMetrics> for SampleDataProvider {
    fn name(&self) -> &str {
        "sample-balance"
    }

    fn series(&self) -> Vec<TimeSeriesPoint<BalanceMetrics>> {
        let (available, pending, reserved) = CURRENT_BALANCE;
        vec![TimeSeriesPoint::on_date(
            self.anchor,
            BalanceMetrics::new(available, pending, reserved),
        )]
    }
}
