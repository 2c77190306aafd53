//! Field names and their legal value ranges.
//!
//! The [`BoundsTable`] is plain immutable configuration: build it once
//! (usually via [`BoundsTable::standard`]) and hand it to a
//! [`CronParser`](crate::CronParser).

use std::fmt;

use crate::error::{CronError, Result};

/// One of the five time positions of a cron expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    Minute,
    Hour,
    DayOfMonth,
    Month,
    DayOfWeek,
}

impl FieldName {
    /// All fields in expression order.
    pub const ALL: [FieldName; 5] = [
        FieldName::Minute,
        FieldName::Hour,
        FieldName::DayOfMonth,
        FieldName::Month,
        FieldName::DayOfWeek,
    ];

    /// Machine-facing key (`minute`, `dayOfMonth`, ...).
    pub fn key(self) -> &'static str {
        match self {
            FieldName::Minute => "minute",
            FieldName::Hour => "hour",
            FieldName::DayOfMonth => "dayOfMonth",
            FieldName::Month => "month",
            FieldName::DayOfWeek => "dayOfWeek",
        }
    }

    /// Human-facing label used by the report.
    pub fn label(self) -> &'static str {
        match self {
            FieldName::Minute => "Minute",
            FieldName::Hour => "Hour",
            FieldName::DayOfMonth => "Day of Month",
            FieldName::Month => "Month",
            FieldName::DayOfWeek => "Day of Week",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Inclusive `[lower, upper]` range of legal values for a field.
///
/// # Examples
///
/// ```
/// use cron_expand_core::FieldBounds;
///
/// let bounds = FieldBounds::new(0, 59).unwrap();
/// assert!(bounds.contains(59));
/// assert!(!bounds.contains(60));
/// assert!(FieldBounds::new(5, 1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldBounds {
    lower: u32,
    upper: u32,
}

impl FieldBounds {
    /// Creates bounds, rejecting `lower > upper`.
    pub fn new(lower: u32, upper: u32) -> Result<Self> {
        if lower > upper {
            return Err(CronError::InvalidRange {
                start: lower,
                end: upper,
            });
        }
        Ok(Self { lower, upper })
    }

    pub(crate) const fn fixed(lower: u32, upper: u32) -> Self {
        Self { lower, upper }
    }

    pub fn lower(self) -> u32 {
        self.lower
    }

    pub fn upper(self) -> u32 {
        self.upper
    }

    pub fn contains(self, value: u32) -> bool {
        (self.lower..=self.upper).contains(&value)
    }

    /// Validates a parsed value against these bounds, narrowing it to `u32`.
    ///
    /// `pattern` is only used to build the error.
    pub fn check(self, value: i64, pattern: &str) -> Result<u32> {
        u32::try_from(value)
            .ok()
            .filter(|value| self.contains(*value))
            .ok_or_else(|| CronError::OutOfBounds {
                pattern: pattern.to_string(),
                value,
                lower: self.lower,
                upper: self.upper,
            })
    }
}

/// Bounds for every [`FieldName`].
///
/// # Examples
///
/// ```
/// use cron_expand_core::{BoundsTable, FieldBounds, FieldName};
///
/// let table = BoundsTable::standard();
/// assert_eq!(table.get(FieldName::Hour), FieldBounds::new(0, 23).unwrap());
///
/// // Collapse Sunday to a single value.
/// let table = table.with_field(FieldName::DayOfWeek, FieldBounds::new(0, 6).unwrap());
/// assert_eq!(table.get(FieldName::DayOfWeek).upper(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundsTable {
    minute: FieldBounds,
    hour: FieldBounds,
    day_of_month: FieldBounds,
    month: FieldBounds,
    day_of_week: FieldBounds,
}

impl BoundsTable {
    /// Conventional cron bounds. Day-of-week keeps both 0 and 7.
    pub const fn standard() -> Self {
        Self {
            minute: FieldBounds::fixed(0, 59),
            hour: FieldBounds::fixed(0, 23),
            day_of_month: FieldBounds::fixed(1, 31),
            month: FieldBounds::fixed(1, 12),
            day_of_week: FieldBounds::fixed(0, 7),
        }
    }

    pub fn get(&self, field: FieldName) -> FieldBounds {
        match field {
            FieldName::Minute => self.minute,
            FieldName::Hour => self.hour,
            FieldName::DayOfMonth => self.day_of_month,
            FieldName::Month => self.month,
            FieldName::DayOfWeek => self.day_of_week,
        }
    }

    /// Returns a copy of this table with one field's bounds replaced.
    #[must_use]
    pub fn with_field(mut self, field: FieldName, bounds: FieldBounds) -> Self {
        let slot = match field {
            FieldName::Minute => &mut self.minute,
            FieldName::Hour => &mut self.hour,
            FieldName::DayOfMonth => &mut self.day_of_month,
            FieldName::Month => &mut self.month,
            FieldName::DayOfWeek => &mut self.day_of_week,
        };
        *slot = bounds;
        self
    }
}

impl Default for BoundsTable {
    fn default() -> Self {
        Self::standard()
    }
}
