// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Date ranges and saturating day/month arithmetic.

use chrono::{Datelike, Days, Months, NaiveDate};

/// An inclusive range of days with `start <= end`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DateRange {
    /// First day of the range.
    pub start: NaiveDate,
    /// Last day of the range.
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a range spanning `a` and `b` in either order.
    #[must_use]
    pub fn new(a: NaiveDate, b: NaiveDate) -> Self {
        if b < a {
            Self { start: b, end: a }
        } else {
            Self { start: a, end: b }
        }
    }

    /// Returns `true` if `date` lies within the range.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of days in the range, counting both ends.
    #[must_use]
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

/// Moves `date` by `days`, saturating at the supported date limits.
pub(crate) fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    let magnitude = Days::new(days.unsigned_abs());
    if days >= 0 {
        date.checked_add_days(magnitude).unwrap_or(NaiveDate::MAX)
    } else {
        date.checked_sub_days(magnitude).unwrap_or(NaiveDate::MIN)
    }
}

/// Moves `date` by `months`, clamping the day to the target month's length.
pub(crate) fn add_months(date: NaiveDate, months: i32) -> NaiveDate {
    let magnitude = Months::new(months.unsigned_abs());
    if months >= 0 {
        date.checked_add_months(magnitude).unwrap_or(NaiveDate::MAX)
    } else {
        date.checked_sub_months(magnitude).unwrap_or(NaiveDate::MIN)
    }
}

pub(crate) fn start_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Clamps `date` into `[min, max]`; either bound may be open.
pub(crate) fn constrain(date: NaiveDate, min: Option<NaiveDate>, max: Option<NaiveDate>) -> NaiveDate {
    let date = min.map_or(date, |min| date.max(min));
    max.map_or(date, |max| date.min(max))
}

/// Returns `true` if `date` falls outside `[min, max]`.
pub(crate) fn is_out_of_bounds(
    date: NaiveDate,
    min: Option<NaiveDate>,
    max: Option<NaiveDate>,
) -> bool {
    min.is_some_and(|min| date < min) || max.is_some_and(|max| date > max)
}

/// The later of two optional lower bounds.
pub(crate) fn tighter_min(a: Option<NaiveDate>, b: Option<NaiveDate>) -> Option<NaiveDate> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.max(b)),
        (a, b) => a.or(b),
    }
}

/// The earlier of two optional upper bounds.
pub(crate) fn tighter_max(a: Option<NaiveDate>, b: Option<NaiveDate>) -> Option<NaiveDate> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}
