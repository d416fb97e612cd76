use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::CoreError;
use crate::models::range::{
    parse_time_of_day, CustomRange, RangeSelection, TimeRangePreset, END_OF_DAY, START_OF_DAY,
};
use crate::models::settings::Settings;

/// Where the selector currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectorState {
    /// A named preset (`today`, `last7days`, `last30days`, `lastyear`)
    Preset(TimeRangePreset),
    /// `custom` picked, but both calendar dates are not set yet
    CustomIncomplete,
    /// `custom` with both dates (and times) set
    CustomComplete,
}

/// Interactive time-range control.
///
/// Every transition that changes what the dashboard should show returns
/// the `RangeSelection` to hand to the owning page. Custom dates and times
/// are remembered across preset switches so returning to "custom" restores
/// the previous window.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeRangeSelector {
    active: TimeRangePreset,
    from_date: Option<NaiveDate>,
    to_date: Option<NaiveDate>,
    from_time: NaiveTime,
    to_time: NaiveTime,
    default_from_time: NaiveTime,
    default_to_time: NaiveTime,
}

impl TimeRangeSelector {
    /// Default times that would invert a single-day range fall back to
    /// 00:00 and 23:59.
    pub fn new(settings: &Settings) -> Self {
        let (from_time, to_time) = if settings.default_from_time > settings.default_to_time {
            warn!(
                from = %settings.default_from_time,
                to = %settings.default_to_time,
                "default custom times are inverted; using whole days"
            );
            (START_OF_DAY, END_OF_DAY)
        } else {
            (settings.default_from_time, settings.default_to_time)
        };
        Self {
            active: settings.default_preset,
            from_date: None,
            to_date: None,
            from_time,
            to_time,
            default_from_time: from_time,
            default_to_time: to_time,
        }
    }

    pub fn state(&self) -> SelectorState {
        match self.active {
            TimeRangePreset::Custom if self.custom_range().is_some() => {
                SelectorState::CustomComplete
            }
            TimeRangePreset::Custom => SelectorState::CustomIncomplete,
            preset => SelectorState::Preset(preset),
        }
    }

    pub fn active_preset(&self) -> TimeRangePreset {
        self.active
    }

    /// The selection currently in effect.
    pub fn current(&self) -> RangeSelection {
        match self.active {
            TimeRangePreset::Custom => RangeSelection::custom(self.custom_range()),
            preset => RangeSelection::preset(preset),
        }
    }

    /// Remembered custom bounds, if both dates are set.
    pub fn custom_range(&self) -> Option<CustomRange> {
        let (from, to) = (self.from_date?, self.to_date?);
        CustomRange::from_parts(from, self.from_time, to, self.to_time).ok()
    }

    pub fn from_date(&self) -> Option<NaiveDate> {
        self.from_date
    }

    pub fn to_date(&self) -> Option<NaiveDate> {
        self.to_date
    }

    pub fn from_time(&self) -> NaiveTime {
        self.from_time
    }

    pub fn to_time(&self) -> NaiveTime {
        self.to_time
    }

    // ── Transitions ─────────────────────────────────────────────────

    /// Pick a preset from the menu. Custom dates are kept but not applied.
    pub fn select_preset(&mut self, preset: TimeRangePreset) -> RangeSelection {
        if preset == TimeRangePreset::Custom {
            return self.select_custom();
        }
        self.active = preset;
        debug!(%preset, "selector switched to preset");
        RangeSelection::preset(preset)
    }

    /// Pick "custom". Emits the remembered range, or no bounds if the
    /// dates are not both set (consumers then match everything).
    pub fn select_custom(&mut self) -> RangeSelection {
        self.active = TimeRangePreset::Custom;
        let selection = self.current();
        debug!(state = ?self.state(), "selector switched to custom");
        selection
    }

    /// Calendar selection from the date picker.
    ///
    /// With both dates this moves to `CustomComplete`, resets both times to
    /// their defaults and emits the new range. Reversed dates are swapped.
    /// A partial pick is remembered and emits nothing.
    pub fn select_dates(
        &mut self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Option<RangeSelection> {
        let (from, to) = match (from, to) {
            (Some(a), Some(b)) if a > b => (Some(b), Some(a)),
            other => other,
        };
        self.from_date = from;
        self.to_date = to;

        if from.is_none() || to.is_none() {
            debug!(?from, ?to, "partial date selection");
            return None;
        }

        self.from_time = self.default_from_time;
        self.to_time = self.default_to_time;
        self.active = TimeRangePreset::Custom;
        let selection = self.current();
        debug!(range = ?selection.custom_range, "custom dates selected");
        Some(selection)
    }

    /// Adjust the `from` time of day.
    ///
    /// Re-emits the custom range when custom is active with both dates set.
    /// A time that would put `from` after `to` is rejected and nothing changes.
    pub fn set_from_time(&mut self, time: NaiveTime) -> Result<Option<RangeSelection>, CoreError> {
        self.check_times(time, self.to_time)?;
        self.from_time = time;
        Ok(self.reemit())
    }

    /// Adjust the `to` time of day. Same rules as [`Self::set_from_time`].
    pub fn set_to_time(&mut self, time: NaiveTime) -> Result<Option<RangeSelection>, CoreError> {
        self.check_times(self.from_time, time)?;
        self.to_time = time;
        Ok(self.reemit())
    }

    /// `set_from_time` from an `HH:MM` input field.
    pub fn set_from_time_str(&mut self, input: &str) -> Result<Option<RangeSelection>, CoreError> {
        self.set_from_time(parse_time_of_day(input)?)
    }

    /// `set_to_time` from an `HH:MM` input field.
    pub fn set_to_time_str(&mut self, input: &str) -> Result<Option<RangeSelection>, CoreError> {
        self.set_to_time(parse_time_of_day(input)?)
    }

    // ── Display ─────────────────────────────────────────────────────

    /// Date-picker button text.
    pub fn date_label(&self) -> String {
        match (self.active, self.from_date, self.to_date) {
            (TimeRangePreset::Custom, Some(from), Some(to)) => {
                format!("{} - {}", from.format("%b %-d, %Y"), to.format("%b %-d, %Y"))
            }
            _ => "Select dates".to_string(),
        }
    }

    /// Label for the control as a whole: the preset name, or the custom dates.
    pub fn label(&self) -> String {
        self.current().label()
    }

    // ── Internal ────────────────────────────────────────────────────

    fn check_times(&self, from_time: NaiveTime, to_time: NaiveTime) -> Result<(), CoreError> {
        if let (Some(from), Some(to)) = (self.from_date, self.to_date) {
            CustomRange::from_parts(from, from_time, to, to_time)?;
        }
        Ok(())
    }

    fn reemit(&self) -> Option<RangeSelection> {
        if self.state() != SelectorState::CustomComplete {
            return None;
        }
        let selection = self.current();
        debug!(range = ?selection.custom_range, "custom time adjusted");
        Some(selection)
    }
}

impl Default for TimeRangeSelector {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}
