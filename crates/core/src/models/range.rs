use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Named time window selectable on the dashboard.
///
/// Unknown tags deserialize to `Unrecognized`, which resolves to the
/// permissive "match everything" window instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeRangePreset {
    Today,
    Last7Days,
    #[default]
    Last30Days,
    LastYear,
    Custom,
    #[serde(other)]
    Unrecognized,
}

impl TimeRangePreset {
    /// Every preset a user can pick, in menu order.
    pub const SELECTABLE: [TimeRangePreset; 5] = [
        TimeRangePreset::Today,
        TimeRangePreset::Last7Days,
        TimeRangePreset::Last30Days,
        TimeRangePreset::LastYear,
        TimeRangePreset::Custom,
    ];

    /// Wire tag (`"last7days"`, ...).
    pub fn tag(self) -> &'static str {
        match self {
            TimeRangePreset::Today => "today",
            TimeRangePreset::Last7Days => "last7days",
            TimeRangePreset::Last30Days => "last30days",
            TimeRangePreset::LastYear => "lastyear",
            TimeRangePreset::Custom => "custom",
            TimeRangePreset::Unrecognized => "unrecognized",
        }
    }

    /// Menu label shown by the selector.
    pub fn label(self) -> &'static str {
        match self {
            TimeRangePreset::Today => "Today",
            TimeRangePreset::Last7Days => "Last 7 days",
            TimeRangePreset::Last30Days => "Last 30 days",
            TimeRangePreset::LastYear => "Last year",
            TimeRangePreset::Custom => "Custom range",
            TimeRangePreset::Unrecognized => "All time",
        }
    }

    /// Parse a tag, mapping anything unknown to `Unrecognized`.
    pub fn parse_lenient(tag: &str) -> Self {
        tag.parse().unwrap_or(TimeRangePreset::Unrecognized)
    }
}

impl std::fmt::Display for TimeRangePreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl std::str::FromStr for TimeRangePreset {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_lowercase();
        TimeRangePreset::SELECTABLE
            .into_iter()
            .find(|p| p.tag() == tag)
            .ok_or_else(|| CoreError::InvalidPreset(s.to_string()))
    }
}

/// Time applied to a date-only `from` bound (00:00).
pub const START_OF_DAY: NaiveTime = NaiveTime::MIN;

/// Time applied to a date-only `to` bound (23:59).
pub const END_OF_DAY: NaiveTime = match NaiveTime::from_hms_opt(23, 59, 0) {
    Some(time) => time,
    None => NaiveTime::MIN,
};

pub fn start_of_day() -> NaiveTime {
    START_OF_DAY
}

pub fn end_of_day() -> NaiveTime {
    END_OF_DAY
}

/// Parse a time-of-day field in `HH:MM` form.
pub fn parse_time_of_day(input: &str) -> Result<NaiveTime, CoreError> {
    NaiveTime::parse_from_str(input.trim(), "%H:%M")
        .map_err(|_| CoreError::InvalidTimeOfDay(input.to_string()))
}

/// Serde adapter for `HH:MM` time-of-day fields.
pub(crate) mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_time_of_day(&raw).map_err(serde::de::Error::custom)
    }
}

/// An explicit `[from, to]` window, both ends inclusive.
///
/// Always satisfies `from <= to`; construction rejects inverted bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCustomRange")]
pub struct CustomRange {
    from: NaiveDateTime,
    to: NaiveDateTime,
}

#[derive(Deserialize)]
struct RawCustomRange {
    from: NaiveDateTime,
    to: NaiveDateTime,
}

impl TryFrom<RawCustomRange> for CustomRange {
    type Error = CoreError;

    fn try_from(raw: RawCustomRange) -> Result<Self, Self::Error> {
        CustomRange::new(raw.from, raw.to)
    }
}

impl CustomRange {
    pub fn new(from: NaiveDateTime, to: NaiveDateTime) -> Result<Self, CoreError> {
        if from > to {
            return Err(CoreError::InvalidRange {
                from: from.to_string(),
                to: to.to_string(),
            });
        }
        Ok(Self { from, to })
    }

    /// Combine calendar dates with explicit times of day.
    pub fn from_parts(
        from_date: NaiveDate,
        from_time: NaiveTime,
        to_date: NaiveDate,
        to_time: NaiveTime,
    ) -> Result<Self, CoreError> {
        Self::new(from_date.and_time(from_time), to_date.and_time(to_time))
    }

    /// Date-only selection: `from` at 00:00, `to` at 23:59.
    pub fn whole_days(from: NaiveDate, to: NaiveDate) -> Result<Self, CoreError> {
        Self::from_parts(from, start_of_day(), to, end_of_day())
    }

    pub fn from(&self) -> NaiveDateTime {
        self.from
    }

    pub fn to(&self) -> NaiveDateTime {
        self.to
    }

    pub fn contains(&self, timestamp: NaiveDateTime) -> bool {
        timestamp >= self.from && timestamp <= self.to
    }
}

/// The value the selector emits: an active preset plus optional custom bounds.
///
/// Replaced wholesale on every user selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct RangeSelection {
    pub preset: TimeRangePreset,

    /// Only meaningful when `preset` is `Custom`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_range: Option<CustomRange>,
}

impl RangeSelection {
    pub fn preset(preset: TimeRangePreset) -> Self {
        Self {
            preset,
            custom_range: None,
        }
    }

    pub fn custom(custom_range: Option<CustomRange>) -> Self {
        Self {
            preset: TimeRangePreset::Custom,
            custom_range,
        }
    }

    /// Display label: the preset name, or the custom dates once both are set.
    pub fn label(&self) -> String {
        match (self.preset, self.custom_range) {
            (TimeRangePreset::Custom, Some(range)) => format!(
                "{} - {}",
                range.from().format("%b %-d, %Y"),
                range.to().format("%b %-d, %Y")
            ),
            (preset, _) => preset.label().to_string(),
        }
    }

    /// True when the selection is `custom` without usable bounds.
    pub fn is_incomplete_custom(&self) -> bool {
        self.preset == TimeRangePreset::Custom && self.custom_range.is_none()
    }
}

/// How a filtered series is consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterMode {
    /// Keep only the latest matching point (balance-style).
    SinglePoint,
    /// Keep every matching point (flow-style).
    MultiPoint,
}

/// Concrete membership test produced by the range resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RangePredicate {
    /// Matches everything (incomplete custom range, unrecognized preset).
    All,
    /// Same calendar date as the reference instant.
    SameDay(NaiveDate),
    /// At or after the lower bound, no upper bound.
    Since(NaiveDateTime),
    /// Between both bounds, inclusive.
    Between(CustomRange),
}

impl RangePredicate {
    pub fn matches(&self, timestamp: NaiveDateTime) -> bool {
        match self {
            RangePredicate::All => true,
            RangePredicate::SameDay(date) => timestamp.date() == *date,
            RangePredicate::Since(start) => timestamp >= *start,
            RangePredicate::Between(range) => range.contains(timestamp),
        }
    }
}

/// Output of range resolution: what to keep, and how.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedRange {
    pub predicate: RangePredicate,
    pub mode: FilterMode,
}

impl ResolvedRange {
    pub fn new(predicate: RangePredicate, mode: FilterMode) -> Self {
        Self { predicate, mode }
    }

    pub fn matches(&self, timestamp: NaiveDateTime) -> bool {
        self.predicate.matches(timestamp)
    }
}
