use chrono::{Duration, Months, NaiveDateTime};
use tracing::{debug, warn};

use crate::models::range::{
    CustomRange, FilterMode, RangePredicate, RangeSelection, ResolvedRange, TimeRangePreset,
};

/// Turns a user-facing selection into a concrete predicate.
///
/// Resolution is a pure function of its inputs: the reference instant is
/// always passed in, never read from a clock, so the same selection
/// resolves identically in tests and in production. It never fails;
/// anything incomplete or unknown resolves to "match everything".
#[derive(Debug, Clone, Copy, Default)]
pub struct RangeResolver;

impl RangeResolver {
    pub fn new() -> Self {
        Self
    }

    /// Resolve a selection emitted by the selector.
    pub fn resolve(
        &self,
        selection: &RangeSelection,
        reference: NaiveDateTime,
        mode: FilterMode,
    ) -> ResolvedRange {
        self.resolve_parts(selection.preset, selection.custom_range.as_ref(), reference, mode)
    }

    /// Resolve a preset plus optional custom bounds against `reference`.
    ///
    /// - `today`: same calendar date as `reference`
    /// - `last7days` / `last30days` / `lastyear`: `timestamp >= reference - window`
    /// - `custom`: `from <= timestamp <= to`, or everything when bounds are missing
    pub fn resolve_parts(
        &self,
        preset: TimeRangePreset,
        custom_range: Option<&CustomRange>,
        reference: NaiveDateTime,
        mode: FilterMode,
    ) -> ResolvedRange {
        let predicate = match preset {
            TimeRangePreset::Today => RangePredicate::SameDay(reference.date()),
            TimeRangePreset::Last7Days => {
                Self::since(reference.checked_sub_signed(Duration::days(7)))
            }
            TimeRangePreset::Last30Days => {
                Self::since(reference.checked_sub_signed(Duration::days(30)))
            }
            TimeRangePreset::LastYear => Self::since(reference.checked_sub_months(Months::new(12))),
            TimeRangePreset::Custom => match custom_range {
                Some(range) => RangePredicate::Between(*range),
                None => {
                    warn!("custom range selected without both bounds; matching all points");
                    RangePredicate::All
                }
            },
            TimeRangePreset::Unrecognized => {
                warn!("unrecognized time range preset; matching all points");
                RangePredicate::All
            }
        };

        debug!(%preset, %reference, ?predicate, ?mode, "resolved time range");
        ResolvedRange::new(predicate, mode)
    }

    /// Open-ended lower bound; a window start chrono cannot represent
    /// covers everything.
    fn since(start: Option<NaiveDateTime>) -> RangePredicate {
        start.map_or(RangePredicate::All, RangePredicate::Since)
    }
}
